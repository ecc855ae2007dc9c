//! Catalog engine: remote product service client and fetch execution.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, ProductFetcher, ReqwestFetcher, DEFAULT_BASE_URL};
pub use types::{EngineError, EngineEvent, FailureKind, FetchError, ProductPage};
