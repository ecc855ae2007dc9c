use crate::{AppState, Effect, Msg, PaginationMode};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LocationLoaded(raw) => {
            state.load_location(&raw);
            vec![state.begin_fetch()]
        }
        Msg::CategorySelected(category) => {
            state.set_category(category);
            vec![state.write_query(), state.begin_fetch()]
        }
        Msg::SearchChanged(term) => {
            // Search narrows the products already held; it never hits the network.
            state.set_search_term(term);
            vec![state.write_query()]
        }
        Msg::PageSelected(page) => select_page(&mut state, page),
        Msg::NextPage => {
            if state.has_next_page() {
                let next = state.view_state().current_page.saturating_add(1);
                select_page(&mut state, next)
            } else {
                Vec::new()
            }
        }
        Msg::PrevPage => {
            if state.has_prev_page() {
                let prev = state.view_state().current_page - 1;
                select_page(&mut state, prev)
            } else {
                Vec::new()
            }
        }
        Msg::ProductsFetched {
            request_id,
            products,
        } => {
            state.apply_success(request_id, products);
            Vec::new()
        }
        Msg::FetchFailed {
            request_id,
            message,
        } => {
            state.apply_failure(request_id, message);
            Vec::new()
        }
    };

    (state, effects)
}

fn select_page(state: &mut AppState, page: u32) -> Vec<Effect> {
    state.set_page(page);
    match state.pagination() {
        PaginationMode::Server => vec![state.begin_fetch()],
        PaginationMode::Client => Vec::new(),
    }
}
