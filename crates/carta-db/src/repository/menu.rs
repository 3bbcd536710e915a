//! SurrealDB implementation of [`MenuRepository`].

use std::time::Duration;

use carta_core::error::{CartaError, CartaResult};
use carta_core::models::menu::{CreateMenu, Menu, UpdateMenu};
use carta_core::policy::validate_window;
use carta_core::repository::{MenuRepository, PageRequest, PaginatedResult};
use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::connection::DEFAULT_OPERATION_TIMEOUT;
use crate::deadline::with_deadline;
use crate::error::DbError;
use crate::pagination::build_page_query;

/// DB-side row struct for queries where the record key is already known.
#[derive(Debug, SurrealValue)]
struct MenuRow {
    menu_id: String,
    name: String,
    category: String,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl MenuRow {
    fn into_menu(self, id: String) -> Menu {
        Menu {
            id,
            menu_id: self.menu_id,
            name: self.name,
            category: self.category,
            start_date: self.start_date,
            end_date: self.end_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// DB-side row struct that includes the record key via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct MenuRowWithId {
    record_id: String,
    menu_id: String,
    name: String,
    category: String,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl MenuRowWithId {
    fn into_menu(self) -> Menu {
        Menu {
            id: self.record_id,
            menu_id: self.menu_id,
            name: self.name,
            category: self.category,
            start_date: self.start_date,
            end_date: self.end_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Row struct for count queries.
#[derive(Debug, SurrealValue)]
struct CountRow {
    total: u64,
}

/// SurrealDB implementation of the Menu repository.
#[derive(Clone)]
pub struct SurrealMenuRepository<C: Connection> {
    db: Surreal<C>,
    deadline: Duration,
}

impl<C: Connection> SurrealMenuRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self {
            db,
            deadline: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    pub fn with_deadline(db: Surreal<C>, deadline: Duration) -> Self {
        Self { db, deadline }
    }
}

impl<C: Connection> MenuRepository for SurrealMenuRepository<C> {
    async fn create(&self, input: CreateMenu) -> CartaResult<Menu> {
        // The window policy applies whenever both bounds are set.
        if let (Some(start), Some(end)) = (input.start_date, input.end_date) {
            validate_window(start, end, Utc::now())?;
        }

        let id = Uuid::new_v4().to_string();
        let menu_id = Uuid::new_v4().to_string();

        let menu = with_deadline(self.deadline, "menu.create", async {
            let result = self
                .db
                .query(
                    "CREATE type::record('menu', $id) SET \
                     menu_id = $menu_id, \
                     name = $name, category = $category, \
                     start_date = $start_date, end_date = $end_date",
                )
                .bind(("id", id.clone()))
                .bind(("menu_id", menu_id.clone()))
                .bind(("name", input.name))
                .bind(("category", input.category))
                .bind(("start_date", input.start_date))
                .bind(("end_date", input.end_date))
                .await?;

            let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

            let rows: Vec<MenuRow> = result.take(0)?;
            let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
                entity: "menu".into(),
                id: menu_id.clone(),
            })?;

            Ok(row.into_menu(id.clone()))
        })
        .await?;

        Ok(menu)
    }

    async fn get_by_menu_id(&self, menu_id: &str) -> CartaResult<Menu> {
        let menu_id = menu_id.to_string();

        let menu = with_deadline(self.deadline, "menu.get", async {
            let mut result = self
                .db
                .query(
                    "SELECT meta::id(id) AS record_id, * FROM menu \
                     WHERE menu_id = $menu_id",
                )
                .bind(("menu_id", menu_id.clone()))
                .await?;

            let rows: Vec<MenuRowWithId> = result.take(0)?;
            rows.into_iter()
                .next()
                .map(MenuRowWithId::into_menu)
                .ok_or(DbError::NotFound {
                    entity: "menu".into(),
                    id: menu_id,
                })
        })
        .await?;

        Ok(menu)
    }

    async fn update(&self, menu_id: &str, input: UpdateMenu) -> CartaResult<Menu> {
        match (input.start_date, input.end_date) {
            (Some(start), Some(end)) => validate_window(start, end, Utc::now())?,
            (None, None) => {}
            _ => {
                return Err(CartaError::Validation {
                    message: "start_date and end_date must be supplied together".into(),
                });
            }
        }

        let mut sets = Vec::new();
        if input.name.is_some() {
            sets.push("name = $name");
        }
        if input.category.is_some() {
            sets.push("category = $category");
        }
        if input.start_date.is_some() {
            sets.push("start_date = $start_date");
        }
        if input.end_date.is_some() {
            sets.push("end_date = $end_date");
        }
        sets.push("updated_at = time::now()");

        // Upsert keyed on the external id: patches the matching document
        // or creates one carrying the filter's menu_id. Statement 0 is
        // the UPSERT, statement 1 reads the document back.
        let query = format!(
            "UPSERT menu SET menu_id = $menu_id, {} \
             WHERE menu_id = $menu_id RETURN NONE; \
             SELECT meta::id(id) AS record_id, * FROM menu \
             WHERE menu_id = $menu_id;",
            sets.join(", ")
        );

        let menu_id = menu_id.to_string();

        let menu = with_deadline(self.deadline, "menu.update", async {
            let mut builder = self.db.query(&query).bind(("menu_id", menu_id.clone()));

            if let Some(name) = input.name {
                builder = builder.bind(("name", name));
            }
            if let Some(category) = input.category {
                builder = builder.bind(("category", category));
            }
            if let Some(start_date) = input.start_date {
                builder = builder.bind(("start_date", start_date));
            }
            if let Some(end_date) = input.end_date {
                builder = builder.bind(("end_date", end_date));
            }

            let result = builder.await?;
            let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

            let rows: Vec<MenuRowWithId> = result.take(1)?;
            rows.into_iter()
                .next()
                .map(MenuRowWithId::into_menu)
                .ok_or(DbError::NotFound {
                    entity: "menu".into(),
                    id: menu_id,
                })
        })
        .await?;

        Ok(menu)
    }

    async fn list(&self, page: PageRequest) -> CartaResult<PaginatedResult<Menu>> {
        let query = build_page_query("menu");

        let (total, rows) = with_deadline(self.deadline, "menu.list", async {
            let mut result = self
                .db
                .query(query)
                .bind(("start", page.start_index()))
                .bind(("page_size", page.page_size()))
                .await?;

            let count_rows: Vec<CountRow> = result.take(0)?;
            let total = count_rows.first().map(|r| r.total).unwrap_or(0);

            let rows: Vec<MenuRowWithId> = result.take(1)?;
            Ok((total, rows))
        })
        .await?;

        Ok(PaginatedResult {
            total,
            items: rows.into_iter().map(MenuRowWithId::into_menu).collect(),
        })
    }
}
