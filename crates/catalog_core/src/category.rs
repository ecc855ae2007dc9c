/// Category slugs offered by the category menu, with their display labels.
pub const KNOWN_CATEGORIES: &[(&str, &str)] = &[
    ("smartphones", "Smartphones"),
    ("laptops", "Laptops"),
    ("fragrances", "Fragrances"),
    ("skincare", "Skincare"),
    ("beauty", "Beauty"),
    ("furniture", "Furniture"),
    ("groceries", "Groceries"),
    ("home-decoration", "Home Decoration"),
    ("kitchen-accessories", "Kitchen Accessories"),
    ("mens-shirts", "Men's Shirts"),
    ("mens-shoes", "Men's Shoes"),
    ("mens-watches", "Men's Watches"),
    ("mobile-accessories", "Mobile Accessories"),
    ("motorcycle", "Motorcycle"),
    ("skin-care", "Skin Care"),
    ("sports-accessories", "Sports Accessories"),
    ("sunglasses", "Sunglasses"),
    ("tablets", "Tablets"),
    ("tops", "Tops"),
    ("vehicle", "Vehicle"),
    ("womens-bags", "Women's Bags"),
    ("womens-dresses", "Women's Dresses"),
    ("womens-jewellery", "Women's Jewellery"),
    ("womens-shoes", "Women's Shoes"),
    ("womens-watches", "Women's Watches"),
];

const ALL_LABEL: &str = "All Categories";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Slug(String),
}

impl Category {
    /// Empty input and the literal `all` select every category; anything else is
    /// kept verbatim (trimmed) as a slug, known or not.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Category::All
        } else {
            Category::Slug(trimmed.to_string())
        }
    }

    pub fn slug(&self) -> Option<&str> {
        match self {
            Category::All => None,
            Category::Slug(slug) => Some(slug.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Category::All)
    }

    pub fn is_known(&self) -> bool {
        match self {
            Category::All => true,
            Category::Slug(slug) => KNOWN_CATEGORIES
                .iter()
                .any(|(known, _)| *known == slug.as_str()),
        }
    }

    /// Menu label; unknown slugs fall back to the slug itself.
    pub fn label(&self) -> &str {
        match self {
            Category::All => ALL_LABEL,
            Category::Slug(slug) => {
                match KNOWN_CATEGORIES
                    .iter()
                    .find(|(known, _)| *known == slug.as_str())
                {
                    Some((_, label)) => *label,
                    None => slug.as_str(),
                }
            }
        }
    }
}
