//! Translation between view state and the address bar query string.
//!
//! Only `category` and `search` are persisted; the page number never is.

use url::form_urlencoded;

use crate::ViewState;

const CATEGORY_KEY: &str = "category";
const SEARCH_KEY: &str = "search";

/// Filter-relevant projection of [`ViewState`]. Absent keys mean "default".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl QueryParams {
    pub fn from_view(view: &ViewState) -> Self {
        Self {
            category: view.category.slug().map(ToOwned::to_owned),
            search: Some(view.search_term.clone()).filter(|term| !term.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.search.is_none()
    }

    /// `category=<slug>&search=<term>`, omitting absent keys, without a leading `?`.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(category) = &self.category {
            serializer.append_pair(CATEGORY_KEY, category);
        }
        if let Some(search) = &self.search {
            serializer.append_pair(SEARCH_KEY, search);
        }
        serializer.finish()
    }

    /// Accepts a bare query, a `?query`, or anything containing `?` (a path or a
    /// full URL). Unknown keys are ignored, empty values count as absent and the
    /// first occurrence of a repeated key wins.
    pub fn decode(raw: &str) -> Self {
        let without_fragment = raw.split('#').next().unwrap_or_default();
        let query = match without_fragment.split_once('?') {
            Some((_, query)) => query,
            None => without_fragment,
        };

        let mut params = QueryParams::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                CATEGORY_KEY if params.category.is_none() => {
                    params.category = Some(value.into_owned());
                }
                SEARCH_KEY if params.search.is_none() => {
                    params.search = Some(value.into_owned());
                }
                _ => {}
            }
        }
        params
    }
}

pub fn to_query(view: &ViewState) -> String {
    QueryParams::from_view(view).encode()
}

pub fn from_query(raw: &str) -> QueryParams {
    QueryParams::decode(raw)
}
