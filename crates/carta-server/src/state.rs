//! Shared application state.

use std::time::Duration;

use carta_db::repository::{SurrealFoodRepository, SurrealMenuRepository};
use surrealdb::{Connection, Surreal};

/// Repositories shared by every handler.
pub struct AppState<C: Connection> {
    pub menus: SurrealMenuRepository<C>,
    pub foods: SurrealFoodRepository<C>,
}

impl<C: Connection> AppState<C> {
    pub fn new(db: Surreal<C>, deadline: Duration) -> Self {
        Self {
            menus: SurrealMenuRepository::with_deadline(db.clone(), deadline),
            foods: SurrealFoodRepository::with_deadline(db, deadline),
        }
    }
}
