use catalog_logging::catalog_debug;

use crate::view_model::suggestions;
use crate::{
    filter_products, from_query, page_window, to_query, AppViewModel, Category, Effect,
    FetchResult, FetchStatus, Product, ProductCardView, ProductQuery, RequestId,
};

/// Items per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Where page slicing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationMode {
    /// The service returns one page per request; the held page is only filtered.
    #[default]
    Server,
    /// One request fetches every item of the category; pages are sliced locally.
    Client,
}

/// Search, category and paging selections driving both the URL and the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub category: Category,
    /// Always ≥ 1; reset to 1 whenever the search term or category changes.
    pub current_page: u32,
    pub page_size: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: Category::All,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    view: ViewState,
    pagination: PaginationMode,
    fetch: FetchResult,
    last_request: Option<RequestId>,
    next_request_id: RequestId,
    query: String,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: ViewState::default(),
            pagination: PaginationMode::default(),
            fetch: FetchResult::Idle,
            last_request: None,
            next_request_id: 1,
            query: String::new(),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.view.page_size = page_size.max(1);
        self
    }

    pub fn with_pagination(mut self, pagination: PaginationMode) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn pagination(&self) -> PaginationMode {
        self.pagination
    }

    pub fn fetch_result(&self) -> &FetchResult {
        &self.fetch
    }

    /// Query string last written to (or read from) the address bar.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Id of the most recently issued fetch; only its completion is applied.
    pub fn last_request(&self) -> Option<RequestId> {
        self.last_request
    }

    /// Returns whether anything changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn has_prev_page(&self) -> bool {
        self.view.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        let FetchResult::Success(items) = &self.fetch else {
            return false;
        };
        let page_size = self.view.page_size as usize;
        match self.pagination {
            // A short page means the service has nothing further.
            PaginationMode::Server => items.len() >= page_size,
            PaginationMode::Client => {
                let filtered = filter_products(items, &self.view.search_term).len();
                filtered > (self.view.current_page as usize).saturating_mul(page_size)
            }
        }
    }

    pub fn view(&self) -> AppViewModel {
        let status = match &self.fetch {
            FetchResult::Idle => FetchStatus::Idle,
            FetchResult::Pending => FetchStatus::Loading,
            FetchResult::Success(_) => FetchStatus::Loaded,
            FetchResult::Failure(message) => FetchStatus::Failed(message.clone()),
        };
        AppViewModel {
            search_term: self.view.search_term.clone(),
            category: self.view.category.clone(),
            current_page: self.view.current_page,
            page_size: self.view.page_size,
            status,
            products: self
                .visible_products()
                .into_iter()
                .map(ProductCardView::from)
                .collect(),
            suggestions: suggestions(self.fetch.products(), &self.view.search_term),
            has_prev: self.has_prev_page(),
            has_next: self.has_next_page(),
            dirty: self.dirty,
        }
    }

    fn visible_products(&self) -> Vec<&Product> {
        let filtered = filter_products(self.fetch.products(), &self.view.search_term);
        match self.pagination {
            PaginationMode::Server => filtered,
            PaginationMode::Client => {
                let window =
                    page_window(filtered.len(), self.view.current_page, self.view.page_size);
                filtered[window].to_vec()
            }
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn load_location(&mut self, raw: &str) {
        let params = from_query(raw);
        self.view.category = params
            .category
            .as_deref()
            .map(Category::parse)
            .unwrap_or_default();
        self.view.search_term = params.search.unwrap_or_default();
        self.view.current_page = 1;
        self.query = to_query(&self.view);
        self.mark_dirty();
    }

    pub(crate) fn set_category(&mut self, category: Category) {
        self.view.category = category;
        self.view.current_page = 1;
        self.mark_dirty();
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        self.view.search_term = term;
        self.view.current_page = 1;
        self.mark_dirty();
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        self.view.current_page = page.max(1);
        self.mark_dirty();
    }

    pub(crate) fn write_query(&mut self) -> Effect {
        self.query = to_query(&self.view);
        Effect::WriteQuery {
            query: self.query.clone(),
        }
    }

    /// Moves to `Pending` and tags the request; earlier in-flight requests become stale.
    pub(crate) fn begin_fetch(&mut self) -> Effect {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.last_request = Some(request_id);
        self.fetch = FetchResult::Pending;
        self.mark_dirty();

        let category = self.view.category.clone();
        let query = match self.pagination {
            PaginationMode::Server => {
                ProductQuery::new(category, self.view.current_page, self.view.page_size)
            }
            PaginationMode::Client => ProductQuery::all_items(category),
        };
        Effect::FetchProducts { request_id, query }
    }

    fn accepts(&self, request_id: RequestId) -> bool {
        self.fetch.is_pending() && self.last_request == Some(request_id)
    }

    pub(crate) fn apply_success(&mut self, request_id: RequestId, products: Vec<Product>) {
        if !self.accepts(request_id) {
            catalog_debug!(
                "Dropping stale response request_id={} latest={:?}",
                request_id,
                self.last_request
            );
            return;
        }
        self.fetch = FetchResult::Success(products);
        self.mark_dirty();
    }

    pub(crate) fn apply_failure(&mut self, request_id: RequestId, message: String) {
        if !self.accepts(request_id) {
            catalog_debug!(
                "Dropping stale failure request_id={} latest={:?}",
                request_id,
                self.last_request
            );
            return;
        }
        self.fetch = FetchResult::Failure(message);
        self.mark_dirty();
    }
}
