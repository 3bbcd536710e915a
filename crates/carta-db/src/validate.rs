//! Cross-entity reference validation.

use carta_core::error::{CartaError, CartaResult};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct RefRow {
    #[allow(dead_code)]
    menu_id: String,
}

/// Confirms that a menu external id resolves to a stored menu.
///
/// An immutable, side-effect-free capability: construct it once from a
/// database handle and share it. Existence is the only check.
#[derive(Clone)]
pub struct MenuRefValidator<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> MenuRefValidator<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    /// Point lookup by external id in the menu table.
    pub(crate) async fn check(&self, menu_id: &str) -> Result<(), DbError> {
        let mut result = self
            .db
            .query("SELECT menu_id FROM menu WHERE menu_id = $menu_id LIMIT 1")
            .bind(("menu_id", menu_id.to_string()))
            .await?;

        let rows: Vec<RefRow> = result.take(0)?;
        if rows.is_empty() {
            return Err(DbError::ReferenceNotFound {
                entity: "menu".into(),
                id: menu_id.to_string(),
            });
        }
        Ok(())
    }

    /// Validate a menu reference, surfacing the domain error.
    pub async fn validate(&self, menu_id: &str) -> CartaResult<()> {
        self.check(menu_id).await.map_err(CartaError::from)
    }
}
