use catalog_core::{update, AppState, Category, Effect, Msg, PaginationMode, Product, ProductQuery};

fn catalog(count: u64) -> Vec<Product> {
    (1..=count)
        .map(|id| Product {
            id,
            title: if id % 2 == 0 {
                format!("Even {id}")
            } else {
                format!("Odd {id}")
            },
            description: String::new(),
            thumbnail: String::new(),
            price: 1.0,
            rating: 3.0,
            stock: 1,
            category: "groceries".to_string(),
        })
        .collect()
}

fn loaded(count: u64, page_size: u32) -> AppState {
    let state = AppState::new()
        .with_page_size(page_size)
        .with_pagination(PaginationMode::Client);
    let (state, effects) = update(state, Msg::LocationLoaded("category=groceries".to_string()));
    assert_eq!(
        effects,
        vec![Effect::FetchProducts {
            request_id: 1,
            query: ProductQuery::all_items(Category::parse("groceries")),
        }]
    );
    let (state, _) = update(
        state,
        Msg::ProductsFetched {
            request_id: 1,
            products: catalog(count),
        },
    );
    state
}

#[test]
fn pages_are_sliced_locally_without_fetching() {
    let state = loaded(25, 10);
    let ids: Vec<_> = state.view().products.iter().map(|card| card.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    assert!(state.view().has_next);

    let (state, effects) = update(state, Msg::PageSelected(3));
    assert!(effects.is_empty());
    let ids: Vec<_> = state.view().products.iter().map(|card| card.id).collect();
    assert_eq!(ids, (21..=25).collect::<Vec<_>>());
    assert!(!state.view().has_next);
    assert!(state.view().has_prev);
}

#[test]
fn filtering_happens_before_slicing() {
    let state = loaded(25, 10);
    let (state, _) = update(state, Msg::SearchChanged("even".to_string()));

    let view = state.view();
    assert_eq!(view.products.len(), 10);
    assert!(view.products.iter().all(|card| card.id % 2 == 0));
    assert!(view.has_next);

    let (state, effects) = update(state, Msg::NextPage);
    assert!(effects.is_empty());
    assert_eq!(state.view().products.len(), 2);
    assert!(!state.view().has_next);
}
