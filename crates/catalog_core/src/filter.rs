use std::ops::Range;

use crate::Product;

/// Case-insensitive substring match on title or description. An empty term
/// keeps every product.
pub fn filter_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }
    products
        .iter()
        .filter(|product| {
            product.title.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Index range `[(page-1)*page_size, page*page_size)` clamped to `len`.
pub fn page_window(len: usize, page: u32, page_size: u32) -> Range<usize> {
    let size = page_size as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    start..end
}
