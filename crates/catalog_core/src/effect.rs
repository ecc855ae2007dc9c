use crate::{ProductQuery, RequestId};

/// Side effects requested by [`crate::update`]; the platform layer executes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the remote product service for one slice of the catalog.
    FetchProducts {
        request_id: RequestId,
        query: ProductQuery,
    },
    /// Replace the address bar query string (no leading `?`).
    WriteQuery { query: String },
}
