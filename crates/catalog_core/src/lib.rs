//! Catalog core: pure view-state machine, query-string sync and local filtering.
mod category;
mod effect;
mod filter;
mod msg;
mod product;
mod query;
mod state;
mod update;
mod view_model;

pub use category::{Category, KNOWN_CATEGORIES};
pub use effect::Effect;
pub use filter::{filter_products, page_window};
pub use msg::Msg;
pub use product::{FetchResult, Product, ProductQuery, RequestId};
pub use query::{from_query, to_query, QueryParams};
pub use state::{AppState, PaginationMode, ViewState, DEFAULT_PAGE_SIZE};
pub use update::update;
pub use view_model::{AppViewModel, FetchStatus, ProductCardView, EXCERPT_CHARS, SUGGESTION_LIMIT};
