use catalog_core::{AppViewModel, FetchStatus, ProductCardView};
use chrono::{DateTime, Local};

use super::layout::rule;
use crate::platform::location::AddressBar;

/// Placeholder rows drawn while a fetch is pending.
const SKELETON_ROWS: usize = 3;

pub fn render(
    view: &AppViewModel,
    address: &AddressBar,
    loaded_at: Option<&DateTime<Local>>,
) -> String {
    let mut out = Vec::new();

    out.push(rule());
    out.push(format!(" {}", address.href()));
    out.push(format!(" {}", status_line(view)));
    if !view.suggestions.is_empty() {
        out.push(format!(" Suggestions: {}", view.suggestions.join(" | ")));
    }
    out.push(rule());

    match &view.status {
        FetchStatus::Idle => out.push(" Nothing loaded yet.".to_string()),
        FetchStatus::Loading => {
            out.push(" Loading products...".to_string());
            let rows = (view.page_size as usize).min(SKELETON_ROWS);
            for _ in 0..rows {
                out.push(format!(" [{}]", ".".repeat(40)));
            }
        }
        FetchStatus::Failed(message) => out.push(format!(" Error: {message}")),
        FetchStatus::Loaded if view.products.is_empty() => {
            out.push(" No products found.".to_string());
        }
        FetchStatus::Loaded => {
            for card in &view.products {
                out.extend(format_card(card));
            }
        }
    }

    out.push(rule());
    out.push(format!(" {}", pagination_line(view)));
    if let Some(loaded_at) = loaded_at {
        out.push(format!(" Updated {}", loaded_at.format("%H:%M:%S")));
    }

    out.join("\n") + "\n"
}

fn status_line(view: &AppViewModel) -> String {
    let category = if view.category.is_known() {
        view.category.label().to_string()
    } else {
        format!("{} (unlisted)", view.category.label())
    };
    let search = if view.search_term.is_empty() {
        "-".to_string()
    } else {
        format!("{:?}", view.search_term)
    };
    format!(
        "Category: {} | Search: {} | Page {}",
        category, search, view.current_page
    )
}

fn pagination_line(view: &AppViewModel) -> String {
    let prev = if view.has_prev { "< prev" } else { "  ----" };
    let next = if view.has_next { "next >" } else { "----  " };
    format!("{prev} | page {} | {next}", view.current_page)
}

fn format_card(card: &ProductCardView) -> Vec<String> {
    vec![
        format!(" [#{}] {}", card.id, card.title),
        format!(
            "      {} | rating {:.2} | Stock: {}",
            format_price(card.price),
            card.rating,
            card.stock
        ),
        format!("      {}", card.excerpt),
        format!("      {}", card.thumbnail),
        "      [Add to Cart]".to_string(),
    ]
}

fn format_price(price: f64) -> String {
    format!("${price:.2}")
}
