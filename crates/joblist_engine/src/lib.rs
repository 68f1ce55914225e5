//! Joblist engine: fetch capability, page decoding and effect execution.
mod decode;
mod engine;
mod fetch;
mod loader;
mod types;

pub use decode::{decode_page, DecodeError};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_BASE_URL};
pub use loader::{completion_msg, fetch_page, PageLoader};
pub use types::{EngineEvent, FailureKind, FetchError, RawResponse};
