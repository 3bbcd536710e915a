//! Pagination properties of the single-round-trip page query.

use carta_core::models::menu::CreateMenu;
use carta_core::repository::{MenuRepository, PageRequest};
use carta_db::repository::SurrealMenuRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    carta_db::run_migrations(&db).await.unwrap();
    db
}

/// Seed `n` menus named `Menu 00` .. `Menu n-1` in insertion order.
async fn seed(repo: &SurrealMenuRepository<surrealdb::engine::local::Db>, n: usize) {
    for i in 0..n {
        repo.create(CreateMenu {
            name: format!("Menu {i:02}"),
            category: "seeded".into(),
            start_date: None,
            end_date: None,
        })
        .await
        .unwrap();
    }
}

fn names(items: &[carta_core::models::menu::Menu]) -> Vec<String> {
    items.iter().map(|m| m.name.clone()).collect()
}

#[tokio::test]
async fn empty_collection_is_not_an_error() {
    let db = setup().await;
    let repo = SurrealMenuRepository::new(db);

    let page = repo.list(PageRequest::default()).await.unwrap();
    assert_eq!(page.total, 0);
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn first_page_of_small_collection() {
    let db = setup().await;
    let repo = SurrealMenuRepository::new(db);
    seed(&repo, 3).await;

    let page = repo.list(PageRequest::new(Some(1), Some(10))).await.unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(names(&page.items), vec!["Menu 00", "Menu 01", "Menu 02"]);
}

#[tokio::test]
async fn pages_over_twenty_five_records() {
    let db = setup().await;
    let repo = SurrealMenuRepository::new(db);
    seed(&repo, 25).await;

    // Page 1: first ten in stored order.
    let page1 = repo.list(PageRequest::new(Some(1), Some(10))).await.unwrap();
    assert_eq!(page1.total, 25);
    assert_eq!(page1.items.len(), 10);
    assert_eq!(page1.items[0].name, "Menu 00");
    assert_eq!(page1.items[9].name, "Menu 09");

    // Page 2: records 11-20 (zero-indexed 10..19).
    let page2 = repo.list(PageRequest::new(Some(2), Some(10))).await.unwrap();
    assert_eq!(page2.total, 25);
    assert_eq!(
        names(&page2.items),
        (10..20).map(|i| format!("Menu {i:02}")).collect::<Vec<_>>()
    );

    // Page 3: start index 20, only five records remain.
    let page3 = repo.list(PageRequest::new(Some(3), Some(10))).await.unwrap();
    assert_eq!(page3.total, 25);
    assert_eq!(
        names(&page3.items),
        (20..25).map(|i| format!("Menu {i:02}")).collect::<Vec<_>>()
    );

    // Past the end: empty slice, real total, no error.
    let page4 = repo.list(PageRequest::new(Some(4), Some(10))).await.unwrap();
    assert_eq!(page4.total, 25);
    assert!(page4.items.is_empty());
}

#[tokio::test]
async fn defaults_apply_for_absent_paging_input() {
    let db = setup().await;
    let repo = SurrealMenuRepository::new(db);
    seed(&repo, 12).await;

    let page = repo.list(PageRequest::new(None, None)).await.unwrap();
    assert_eq!(page.total, 12);
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.items[0].name, "Menu 00");
}

#[tokio::test]
async fn non_positive_paging_input_clamps_to_first_page() {
    let db = setup().await;
    let repo = SurrealMenuRepository::new(db);
    seed(&repo, 5).await;

    let page = repo.list(PageRequest::new(Some(0), Some(-3))).await.unwrap();
    assert_eq!(page.total, 5);
    assert_eq!(page.items.len(), 5);
}
