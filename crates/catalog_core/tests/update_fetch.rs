use std::sync::Once;

use catalog_core::{
    update, AppState, Category, Effect, FetchResult, FetchStatus, Msg, Product, RequestId,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

fn product(id: u64, title: &str, description: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: description.to_string(),
        thumbnail: format!("https://cdn.example.com/{id}.png"),
        price: 9.99,
        rating: 4.5,
        stock: 12,
        category: "laptops".to_string(),
    }
}

fn products(count: u64) -> Vec<Product> {
    (1..=count)
        .map(|id| product(id, &format!("Item {id}"), "Plain description"))
        .collect()
}

fn request_id(effects: &[Effect]) -> RequestId {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchProducts { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("fetch effect")
}

fn mounted(page_size: u32) -> (AppState, RequestId) {
    let state = AppState::new().with_page_size(page_size);
    let (state, effects) = update(state, Msg::LocationLoaded(String::new()));
    let id = request_id(&effects);
    (state, id)
}

#[test]
fn issuing_a_fetch_moves_to_pending() {
    init_logging();
    let (state, _) = mounted(10);
    assert_eq!(state.fetch_result(), &FetchResult::Pending);
    assert_eq!(state.view().status, FetchStatus::Loading);
}

#[test]
fn short_page_disables_next() {
    init_logging();
    let (state, id) = mounted(20);
    let (state, _) = update(
        state,
        Msg::ProductsFetched {
            request_id: id,
            products: products(5),
        },
    );

    let view = state.view();
    assert_eq!(view.status, FetchStatus::Loaded);
    assert_eq!(view.products.len(), 5);
    assert!(!view.has_next);
    assert!(!view.has_prev);

    let (_state, effects) = update(state, Msg::NextPage);
    assert!(effects.is_empty());
}

#[test]
fn full_page_enables_next() {
    init_logging();
    let (state, id) = mounted(5);
    let (state, _) = update(
        state,
        Msg::ProductsFetched {
            request_id: id,
            products: products(5),
        },
    );
    assert!(state.view().has_next);

    let (state, effects) = update(state, Msg::NextPage);
    assert_eq!(state.view_state().current_page, 2);
    match &effects[..] {
        [Effect::FetchProducts { query, .. }] => assert_eq!(query.offset(), 5),
        other => panic!("unexpected effects {other:?}"),
    }
}

#[test]
fn failure_message_is_kept_verbatim() {
    init_logging();
    let (state, id) = mounted(10);
    let (state, _) = update(
        state,
        Msg::FetchFailed {
            request_id: id,
            message: "Network Error".to_string(),
        },
    );

    assert_eq!(
        state.fetch_result(),
        &FetchResult::Failure("Network Error".to_string())
    );
    let view = state.view();
    assert_eq!(view.status, FetchStatus::Failed("Network Error".to_string()));
    assert!(view.products.is_empty());
}

#[test]
fn new_fetch_clears_previous_products() {
    init_logging();
    let (state, id) = mounted(10);
    let (state, _) = update(
        state,
        Msg::ProductsFetched {
            request_id: id,
            products: products(3),
        },
    );
    assert_eq!(state.view().products.len(), 3);

    let (state, _) = update(state, Msg::CategorySelected(Category::parse("tablets")));
    assert!(state.view().products.is_empty());
    assert_eq!(state.view().status, FetchStatus::Loading);
}

#[test]
fn stale_response_is_discarded() {
    init_logging();
    let (state, first) = mounted(10);
    let (mut state, effects) = update(state, Msg::CategorySelected(Category::parse("laptops")));
    let second = request_id(&effects);
    assert!(second > first);
    assert!(state.consume_dirty());

    let (mut state, _) = update(
        state,
        Msg::ProductsFetched {
            request_id: first,
            products: products(2),
        },
    );
    assert_eq!(state.fetch_result(), &FetchResult::Pending);
    assert!(!state.consume_dirty());

    let (state, _) = update(
        state,
        Msg::ProductsFetched {
            request_id: second,
            products: products(4),
        },
    );
    assert_eq!(state.fetch_result().products().len(), 4);

    // A late failure of the superseded request must not replace the result.
    let (state, _) = update(
        state,
        Msg::FetchFailed {
            request_id: first,
            message: "timeout".to_string(),
        },
    );
    assert_eq!(state.fetch_result().products().len(), 4);
}

#[test]
fn duplicate_completion_is_ignored() {
    init_logging();
    let (state, id) = mounted(10);
    let (state, _) = update(
        state,
        Msg::ProductsFetched {
            request_id: id,
            products: products(2),
        },
    );
    let (state, _) = update(
        state,
        Msg::FetchFailed {
            request_id: id,
            message: "late".to_string(),
        },
    );
    assert_eq!(state.fetch_result().products().len(), 2);
}

#[test]
fn search_filters_held_products_and_suggests_titles() {
    init_logging();
    let (state, id) = mounted(10);
    let (state, _) = update(
        state,
        Msg::ProductsFetched {
            request_id: id,
            products: vec![
                product(1, "MacBook Pro", "Apple laptop"),
                product(2, "Surface Laptop", "Thin and PROfessional"),
                product(3, "ThinkPad", "Business laptop"),
            ],
        },
    );

    let (state, effects) = update(state, Msg::SearchChanged("PRO".to_string()));
    assert!(matches!(&effects[..], [Effect::WriteQuery { .. }]));

    let view = state.view();
    let ids: Vec<_> = view.products.iter().map(|card| card.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(view.suggestions, vec!["MacBook Pro".to_string()]);
    assert_eq!(view.search_term, "PRO");
}

#[test]
fn card_excerpt_is_truncated_with_ellipsis() {
    init_logging();
    let (state, id) = mounted(10);
    let long = "x".repeat(150);
    let (state, _) = update(
        state,
        Msg::ProductsFetched {
            request_id: id,
            products: vec![product(1, "Long", &long)],
        },
    );

    let card = &state.view().products[0];
    assert_eq!(card.excerpt.len(), 103);
    assert!(card.excerpt.ends_with("..."));
}

#[test]
fn search_from_location_filters_the_first_page() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(
        state,
        Msg::LocationLoaded("?category=laptops&search=pro".to_string()),
    );
    let id = request_id(&effects);
    assert_eq!(id, 1);
    assert_eq!(state.view_state().category, Category::parse("laptops"));

    let (state, effects) = update(
        state,
        Msg::ProductsFetched {
            request_id: id,
            products: vec![
                product(1, "MacBook Pro", "Apple laptop"),
                product(2, "ThinkPad", "Business laptop"),
            ],
        },
    );
    assert!(effects.is_empty());

    let ids: Vec<u64> = state.view().products.iter().map(|card| card.id).collect();
    assert_eq!(ids, vec![1]);
    assert_eq!(state.view().suggestions, vec!["MacBook Pro".to_string()]);
}
