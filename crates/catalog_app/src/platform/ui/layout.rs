use catalog_core::{Category, KNOWN_CATEGORIES};

pub const RULE_WIDTH: usize = 72;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn banner() -> String {
    format!(
        "{rule}\n Product Catalog\n Type `help` for commands.\n{rule}\n",
        rule = rule()
    )
}

pub fn help_text() -> String {
    [
        "Commands:",
        "  category <slug>   filter by category (no slug = all categories)",
        "  search <text>     filter the current page by title or description",
        "  page <n>          jump to page n",
        "  next | prev       move one page forward or back",
        "  open <location>   load an address such as /dash?category=laptops",
        "  categories        list category slugs",
        "  help              show this text",
        "  quit              leave",
        "  <empty line>      redraw",
    ]
    .join("\n")
        + "\n"
}

/// The category menu with the current selection marked by `*`.
pub fn category_menu(current: &Category) -> String {
    let mut lines = Vec::with_capacity(KNOWN_CATEGORIES.len() + 1);
    lines.push(menu_line(current.is_all(), "all", Category::All.label()));
    for (slug, label) in KNOWN_CATEGORIES {
        lines.push(menu_line(current.slug() == Some(*slug), slug, label));
    }
    lines.join("\n") + "\n"
}

fn menu_line(selected: bool, slug: &str, label: &str) -> String {
    let marker = if selected { '*' } else { ' ' };
    format!(" {marker} {slug:<22} {label}")
}
