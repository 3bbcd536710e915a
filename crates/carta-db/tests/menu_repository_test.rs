//! Integration tests for the Menu repository using in-memory SurrealDB.

use carta_core::error::CartaError;
use carta_core::models::menu::{CreateMenu, UpdateMenu};
use carta_core::repository::MenuRepository;
use carta_db::repository::SurrealMenuRepository;
use chrono::{Duration, Utc};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    carta_db::run_migrations(&db).await.unwrap();
    db
}

#[tokio::test]
async fn create_and_get_menu() {
    let db = setup().await;
    let repo = SurrealMenuRepository::new(db);

    let menu = repo
        .create(CreateMenu {
            name: "Breakfast".into(),
            category: "morning".into(),
            start_date: None,
            end_date: None,
        })
        .await
        .unwrap();

    assert!(!menu.menu_id.is_empty());
    assert_eq!(menu.name, "Breakfast");
    assert_eq!(menu.category, "morning");
    assert!(menu.start_date.is_none());
    assert!(menu.updated_at >= menu.created_at);

    let fetched = repo.get_by_menu_id(&menu.menu_id).await.unwrap();
    assert_eq!(fetched.menu_id, menu.menu_id);
    assert_eq!(fetched.name, "Breakfast");
}

#[tokio::test]
async fn get_unknown_menu_is_not_found() {
    let db = setup().await;
    let repo = SurrealMenuRepository::new(db);

    let result = repo.get_by_menu_id("no-such-menu").await;
    assert!(matches!(result, Err(CartaError::NotFound { .. })));
}

#[tokio::test]
async fn create_menu_with_future_window() {
    let db = setup().await;
    let repo = SurrealMenuRepository::new(db);

    let start = Utc::now() + Duration::hours(1);
    let end = start + Duration::days(7);

    let menu = repo
        .create(CreateMenu {
            name: "Seasonal".into(),
            category: "special".into(),
            start_date: Some(start),
            end_date: Some(end),
        })
        .await
        .unwrap();

    assert_eq!(menu.start_date, Some(start));
    assert_eq!(menu.end_date, Some(end));
}

#[tokio::test]
async fn create_menu_with_past_start_rejected() {
    let db = setup().await;
    let repo = SurrealMenuRepository::new(db);

    let result = repo
        .create(CreateMenu {
            name: "Retro".into(),
            category: "special".into(),
            start_date: Some(Utc::now() - Duration::hours(1)),
            end_date: Some(Utc::now() + Duration::hours(1)),
        })
        .await;

    assert!(matches!(result, Err(CartaError::InvalidTimeRange { .. })));
}

#[tokio::test]
async fn update_menu_name_only() {
    let db = setup().await;
    let repo = SurrealMenuRepository::new(db);

    let menu = repo
        .create(CreateMenu {
            name: "Before".into(),
            category: "lunch".into(),
            start_date: None,
            end_date: None,
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            &menu.menu_id,
            UpdateMenu {
                name: Some("After".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.menu_id, menu.menu_id);
    assert_eq!(updated.name, "After");
    assert_eq!(updated.category, "lunch"); // unchanged
    assert_eq!(updated.created_at, menu.created_at);
    assert!(updated.updated_at > menu.updated_at);
}

#[tokio::test]
async fn update_menu_window() {
    let db = setup().await;
    let repo = SurrealMenuRepository::new(db);

    let menu = repo
        .create(CreateMenu {
            name: "Dinner".into(),
            category: "evening".into(),
            start_date: None,
            end_date: None,
        })
        .await
        .unwrap();

    let start = Utc::now() + Duration::hours(1);
    let end = start + Duration::days(1);

    let updated = repo
        .update(
            &menu.menu_id,
            UpdateMenu {
                start_date: Some(start),
                end_date: Some(end),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.start_date, Some(start));
    assert_eq!(updated.end_date, Some(end));
    assert_eq!(updated.name, "Dinner"); // unchanged
}

#[tokio::test]
async fn update_with_past_window_applies_nothing() {
    let db = setup().await;
    let repo = SurrealMenuRepository::new(db);

    let menu = repo
        .create(CreateMenu {
            name: "Before".into(),
            category: "lunch".into(),
            start_date: None,
            end_date: None,
        })
        .await
        .unwrap();

    let result = repo
        .update(
            &menu.menu_id,
            UpdateMenu {
                name: Some("After".into()),
                start_date: Some(Utc::now() - Duration::hours(1)),
                end_date: Some(Utc::now() + Duration::hours(1)),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(CartaError::InvalidTimeRange { .. })));

    // No field of the rejected payload was persisted.
    let fetched = repo.get_by_menu_id(&menu.menu_id).await.unwrap();
    assert_eq!(fetched.name, "Before");
    assert!(fetched.start_date.is_none());
    assert_eq!(fetched.updated_at, menu.updated_at);
}

#[tokio::test]
async fn update_with_inverted_window_rejected() {
    let db = setup().await;
    let repo = SurrealMenuRepository::new(db);

    let menu = repo
        .create(CreateMenu {
            name: "Dinner".into(),
            category: "evening".into(),
            start_date: None,
            end_date: None,
        })
        .await
        .unwrap();

    let start = Utc::now() + Duration::hours(2);
    let result = repo
        .update(
            &menu.menu_id,
            UpdateMenu {
                start_date: Some(start),
                end_date: Some(start - Duration::hours(1)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(CartaError::InvalidTimeRange { .. })));
}

#[tokio::test]
async fn single_bound_window_update_rejected() {
    let db = setup().await;
    let repo = SurrealMenuRepository::new(db);

    let menu = repo
        .create(CreateMenu {
            name: "Dinner".into(),
            category: "evening".into(),
            start_date: None,
            end_date: None,
        })
        .await
        .unwrap();

    let start_only = repo
        .update(
            &menu.menu_id,
            UpdateMenu {
                start_date: Some(Utc::now() + Duration::hours(1)),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(start_only, Err(CartaError::Validation { .. })));

    let end_only = repo
        .update(
            &menu.menu_id,
            UpdateMenu {
                end_date: Some(Utc::now() + Duration::hours(1)),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(end_only, Err(CartaError::Validation { .. })));
}

#[tokio::test]
async fn upsert_creates_missing_menu() {
    let db = setup().await;
    let repo = SurrealMenuRepository::new(db);

    let menu = repo
        .update(
            "imported-menu-1",
            UpdateMenu {
                name: Some("Imported".into()),
                category: Some("external".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(menu.menu_id, "imported-menu-1");
    assert_eq!(menu.name, "Imported");

    let fetched = repo.get_by_menu_id("imported-menu-1").await.unwrap();
    assert_eq!(fetched.category, "external");
}
