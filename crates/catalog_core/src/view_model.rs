use crate::{Category, Product};

/// Maximum number of search suggestions offered at once.
pub const SUGGESTION_LIMIT: usize = 5;

/// Characters of the description shown on a card before the ellipsis.
pub const EXCERPT_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub search_term: String,
    pub category: Category,
    pub current_page: u32,
    pub page_size: u32,
    pub status: FetchStatus,
    pub products: Vec<ProductCardView>,
    pub suggestions: Vec<String>,
    pub has_prev: bool,
    pub has_next: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCardView {
    pub id: u64,
    pub title: String,
    pub excerpt: String,
    pub thumbnail: String,
    pub price: f64,
    pub rating: f64,
    pub stock: u32,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        let excerpt: String = product.description.chars().take(EXCERPT_CHARS).collect();
        Self {
            id: product.id,
            title: product.title.clone(),
            excerpt: format!("{excerpt}..."),
            thumbnail: product.thumbnail.clone(),
            price: product.price,
            rating: product.rating,
            stock: product.stock,
        }
    }
}

/// Titles from `products` containing `term` (case-insensitive), deduplicated,
/// in fetch order.
pub(crate) fn suggestions(products: &[Product], term: &str) -> Vec<String> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<String> = Vec::new();
    for product in products {
        if out.len() == SUGGESTION_LIMIT {
            break;
        }
        if product.title.to_lowercase().contains(&needle) && !out.contains(&product.title) {
            out.push(product.title.clone());
        }
    }
    out
}
