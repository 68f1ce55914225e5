//! Joblist core: pure pagination state machine and snapshot helpers.
mod effect;
mod item;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use item::{Item, PageResult, PLACE_PLACEHOLDER};
pub use msg::Msg;
pub use state::{LoadPhase, LoaderState, PageFailure, FETCH_ERROR_MESSAGE};
pub use update::update;
pub use view_model::{ItemKey, ItemRow, LoaderSnapshot};
