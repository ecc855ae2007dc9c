#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The address bar query was read on startup or changed from outside
    /// (reload, pasted link). Missing keys fall back to defaults.
    LocationLoaded(String),
    /// User picked an entry from the category menu.
    CategorySelected(crate::Category),
    /// User edited the search box.
    SearchChanged(String),
    /// User jumped to a page.
    PageSelected(u32),
    /// User clicked "next".
    NextPage,
    /// User clicked "prev".
    PrevPage,
    /// Engine completion carrying the fetched products.
    ProductsFetched {
        request_id: crate::RequestId,
        products: Vec<crate::Product>,
    },
    /// Engine completion for a failed fetch.
    FetchFailed {
        request_id: crate::RequestId,
        message: String,
    },
}
