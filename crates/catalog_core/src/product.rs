use serde::{Deserialize, Serialize};

use crate::Category;

/// Monotonic tag attached to every issued fetch.
pub type RequestId = u64;

/// One catalog record as returned by the remote product service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub category: String,
}

/// Offset-paginated request for one slice of the catalog.
///
/// A `page_size` of zero asks the service for every matching item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: Category,
    pub page: u32,
    pub page_size: u32,
}

impl ProductQuery {
    pub fn new(category: Category, page: u32, page_size: u32) -> Self {
        Self {
            category,
            page: page.max(1),
            page_size,
        }
    }

    /// Query for all items of `category` in a single response.
    pub fn all_items(category: Category) -> Self {
        Self::new(category, 1, 0)
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.max(1) - 1) * u64::from(self.page_size)
    }

    pub fn limit(&self) -> u32 {
        self.page_size
    }
}

/// Outcome of the most recent fetch. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchResult {
    #[default]
    Idle,
    Pending,
    Success(Vec<Product>),
    Failure(String),
}

impl FetchResult {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchResult::Pending)
    }

    /// Products held by a successful fetch; empty for every other variant.
    pub fn products(&self) -> &[Product] {
        match self {
            FetchResult::Success(items) => items,
            _ => &[],
        }
    }
}
