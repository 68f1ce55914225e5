//! Terminal front end: renders loader snapshots and relays user commands.
mod app;
mod args;
mod effects;
mod input;
mod logging;
mod render;

pub use app::run_app;
