use std::sync::Once;

use catalog_core::{update, AppState, Category, Effect, Msg, ProductQuery};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

fn fetch_of(effect: &Effect) -> Option<&ProductQuery> {
    match effect {
        Effect::FetchProducts { query, .. } => Some(query),
        Effect::WriteQuery { .. } => None,
    }
}

#[test]
fn mount_without_query_fetches_all_first_page() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::LocationLoaded(String::new()));

    assert_eq!(
        effects,
        vec![Effect::FetchProducts {
            request_id: 1,
            query: ProductQuery::new(Category::All, 1, 10),
        }]
    );
    let view = state.view_state();
    assert_eq!(view.category, Category::All);
    assert_eq!(view.search_term, "");
    assert_eq!(view.current_page, 1);
}

#[test]
fn mount_with_category_and_search_fetches_category_only() {
    init_logging();
    let (mut state, effects) = update(
        AppState::new(),
        Msg::LocationLoaded("?category=laptops&search=pro".to_string()),
    );

    assert_eq!(effects.len(), 1);
    let query = fetch_of(&effects[0]).expect("fetch effect");
    assert_eq!(query.category, Category::parse("laptops"));
    assert_eq!(query.page, 1);
    assert_eq!(query.offset(), 0);

    assert_eq!(state.view_state().category.slug(), Some("laptops"));
    assert_eq!(state.view_state().search_term, "pro");
    assert_eq!(state.query(), "category=laptops&search=pro");
    assert!(state.consume_dirty());
}

#[test]
fn category_change_resets_page_writes_url_and_fetches_page_one() {
    init_logging();
    let state = AppState::new().with_page_size(20);
    let (state, _) = update(state, Msg::LocationLoaded("search=phone".to_string()));
    let (state, _) = update(state, Msg::PageSelected(3));
    assert_eq!(state.view_state().current_page, 3);

    let (state, effects) = update(state, Msg::CategorySelected(Category::parse("smartphones")));

    assert_eq!(state.view_state().current_page, 1);
    assert_eq!(
        effects,
        vec![
            Effect::WriteQuery {
                query: "category=smartphones&search=phone".to_string(),
            },
            Effect::FetchProducts {
                request_id: 3,
                query: ProductQuery::new(Category::parse("smartphones"), 1, 20),
            },
        ]
    );
}

#[test]
fn selecting_all_categories_drops_category_from_url() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::LocationLoaded("category=tops&search=shirt".to_string()),
    );

    let (state, effects) = update(state, Msg::CategorySelected(Category::All));

    assert_eq!(
        effects[0],
        Effect::WriteQuery {
            query: "search=shirt".to_string(),
        }
    );
    assert_eq!(
        fetch_of(&effects[1]).map(|q| q.category.clone()),
        Some(Category::All)
    );
    assert_eq!(state.query(), "search=shirt");
}

#[test]
fn search_change_resets_page_and_never_fetches() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::LocationLoaded("category=laptops".to_string()),
    );
    let (state, _) = update(state, Msg::PageSelected(4));
    let last_request = state.last_request();

    let (state, effects) = update(state, Msg::SearchChanged("air".to_string()));

    assert_eq!(
        effects,
        vec![Effect::WriteQuery {
            query: "category=laptops&search=air".to_string(),
        }]
    );
    assert!(effects.iter().all(|effect| fetch_of(effect).is_none()));
    assert_eq!(state.view_state().current_page, 1);
    assert_eq!(state.last_request(), last_request);
}

#[test]
fn page_selection_fetches_with_offset_and_keeps_url() {
    init_logging();
    let state = AppState::new().with_page_size(20);
    let (state, _) = update(state, Msg::LocationLoaded("category=beauty".to_string()));
    let query_before = state.query().to_string();

    let (state, effects) = update(state, Msg::PageSelected(3));

    assert_eq!(effects.len(), 1);
    let query = fetch_of(&effects[0]).expect("fetch effect");
    assert_eq!(query.offset(), 40);
    assert_eq!(query.limit(), 20);
    assert_eq!(query.category, Category::parse("beauty"));
    assert_eq!(state.query(), query_before);
}

#[test]
fn page_selection_clamps_to_first_page() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::LocationLoaded(String::new()));
    let (state, effects) = update(state, Msg::PageSelected(0));

    assert_eq!(state.view_state().current_page, 1);
    assert_eq!(fetch_of(&effects[0]).map(ProductQuery::offset), Some(0));
}

#[test]
fn prev_on_first_page_is_ignored() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::LocationLoaded(String::new()));
    let (state, effects) = update(state, Msg::PrevPage);

    assert!(effects.is_empty());
    assert_eq!(state.view_state().current_page, 1);
}

#[test]
fn external_location_change_replaces_filters() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::LocationLoaded("category=laptops&search=pro".to_string()),
    );

    let (state, effects) = update(
        state,
        Msg::LocationLoaded("/dash?category=groceries".to_string()),
    );

    assert_eq!(state.view_state().category.slug(), Some("groceries"));
    assert_eq!(state.view_state().search_term, "");
    assert_eq!(effects.len(), 1);
    assert!(fetch_of(&effects[0]).is_some());
}
