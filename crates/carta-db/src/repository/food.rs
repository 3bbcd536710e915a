//! SurrealDB implementation of [`FoodRepository`].
//!
//! Writes validate the menu reference before touching the store: an
//! invalid reference rejects the whole payload, so a patch either
//! applies fully or not at all.

use std::time::Duration;

use carta_core::error::{CartaError, CartaResult};
use carta_core::models::food::{CreateFood, Food, UpdateFood};
use carta_core::price::normalize_price;
use carta_core::repository::{FoodRepository, PageRequest, PaginatedResult};
use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::connection::DEFAULT_OPERATION_TIMEOUT;
use crate::deadline::with_deadline;
use crate::error::DbError;
use crate::pagination::build_page_query;
use crate::validate::MenuRefValidator;

/// DB-side row struct for queries where the record key is already known.
#[derive(Debug, SurrealValue)]
struct FoodRow {
    food_id: String,
    name: String,
    price: f64,
    food_image: String,
    menu_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl FoodRow {
    fn into_food(self, id: String) -> Food {
        Food {
            id,
            food_id: self.food_id,
            name: self.name,
            price: self.price,
            food_image: self.food_image,
            menu_id: self.menu_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// DB-side row struct that includes the record key via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct FoodRowWithId {
    record_id: String,
    food_id: String,
    name: String,
    price: f64,
    food_image: String,
    menu_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl FoodRowWithId {
    fn into_food(self) -> Food {
        Food {
            id: self.record_id,
            food_id: self.food_id,
            name: self.name,
            price: self.price,
            food_image: self.food_image,
            menu_id: self.menu_id,
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

/// SurrealDB implementation of the Food repository.
#[derive(Clone)]
pub struct SurrealFoodRepository<C: Connection> {
    db: Surreal<C>,
    menus: MenuRefValidator<C>,
    deadline: Duration,
}

impl<C: Connection> SurrealFoodRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self {
            menus: MenuRefValidator::new(db.clone()),
            db,
            deadline: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    pub fn with_deadline(db: Surreal<C>, deadline: Duration) -> Self {
        Self {
            menus: MenuRefValidator::new(db.clone()),
            db,
            deadline,
        }
    }
}

impl<C: Connection> FoodRepository for SurrealFoodRepository<C> {
    async fn create(&self, input: CreateFood) -> CartaResult<Food> {
        if input.price < 0.0 {
            return Err(CartaError::Validation {
                message: "price must not be negative".into(),
            });
        }

        let id = Uuid::new_v4().to_string();
        let food_id = Uuid::new_v4().to_string();
        let price = normalize_price(input.price);

        let food = with_deadline(self.deadline, "food.create", async {
            self.menus.check(&input.menu_id).await?;

            let result = self
                .db
                .query(
                    "CREATE type::record('food', $id) SET \
                     food_id = $food_id, \
                     name = $name, price = $price, \
                     food_image = $food_image, menu_id = $menu_id",
                )
                .bind(("id", id.clone()))
                .bind(("food_id", food_id.clone()))
                .bind(("name", input.name))
                .bind(("price", price))
                .bind(("food_image", input.food_image))
                .bind(("menu_id", input.menu_id))
                .await?;

            let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

            let rows: Vec<FoodRow> = result.take(0)?;
            let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
                entity: "food".into(),
                id: food_id.clone(),
            })?;

            Ok(row.into_food(id.clone()))
        })
        .await?;

        Ok(food)
    }

    async fn get_by_food_id(&self, food_id: &str) -> CartaResult<Food> {
        let food_id = food_id.to_string();

        let food = with_deadline(self.deadline, "food.get", async {
            let mut result = self
                .db
                .query(
                    "SELECT meta::id(id) AS record_id, * FROM food \
                     WHERE food_id = $food_id",
                )
                .bind(("food_id", food_id.clone()))
                .await?;

            let rows: Vec<FoodRowWithId> = result.take(0)?;
            rows.into_iter()
                .next()
                .map(FoodRowWithId::into_food)
                .ok_or(DbError::NotFound {
                    entity: "food".into(),
                    id: food_id,
                })
        })
        .await?;

        Ok(food)
    }

    async fn update(&self, food_id: &str, input: UpdateFood) -> CartaResult<Food> {
        if let Some(price) = input.price {
            if price < 0.0 {
                return Err(CartaError::Validation {
                    message: "price must not be negative".into(),
                });
            }
        }

        let mut sets = Vec::new();
        if input.name.is_some() {
            sets.push("name = $name");
        }
        if input.price.is_some() {
            sets.push("price = $price");
        }
        if input.food_image.is_some() {
            sets.push("food_image = $food_image");
        }
        if input.menu_id.is_some() {
            sets.push("menu_id = $menu_id");
        }
        sets.push("updated_at = time::now()");

        // Upsert keyed on the external id: patches the matching document
        // or creates one carrying the filter's food_id. Statement 0 is
        // the UPSERT, statement 1 reads the document back.
        let query = format!(
            "UPSERT food SET food_id = $food_id, {} \
             WHERE food_id = $food_id RETURN NONE; \
             SELECT meta::id(id) AS record_id, * FROM food \
             WHERE food_id = $food_id;",
            sets.join(", ")
        );

        let food_id = food_id.to_string();

        let food = with_deadline(self.deadline, "food.update", async {
            // Reference check runs before any write: an invalid menu_id
            // rejects the whole payload with the store untouched.
            if let Some(ref menu_id) = input.menu_id {
                self.menus.check(menu_id).await?;
            }

            let mut builder = self.db.query(&query).bind(("food_id", food_id.clone()));

            if let Some(name) = input.name {
                builder = builder.bind(("name", name));
            }
            if let Some(price) = input.price {
                builder = builder.bind(("price", normalize_price(price)));
            }
            if let Some(food_image) = input.food_image {
                builder = builder.bind(("food_image", food_image));
            }
            if let Some(menu_id) = input.menu_id {
                builder = builder.bind(("menu_id", menu_id));
            }

            let result = builder.await?;
            let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

            let rows: Vec<FoodRowWithId> = result.take(1)?;
            rows.into_iter()
                .next()
                .map(FoodRowWithId::into_food)
                .ok_or(DbError::NotFound {
                    entity: "food".into(),
                    id: food_id,
                })
        })
        .await?;

        Ok(food)
    }

    async fn list(&self, page: PageRequest) -> CartaResult<PaginatedResult<Food>> {
        let query = build_page_query("food");

        let (total, rows) = with_deadline(self.deadline, "food.list", async {
            let mut result = self
                .db
                .query(query)
                .bind(("start", page.start_index()))
                .bind(("page_size", page.page_size()))
                .await?;

            let count_rows: Vec<CountRow> = result.take(0)?;
            let total = count_rows.first().map(|r| r.total).unwrap_or(0);

            let rows: Vec<FoodRowWithId> = result.take(1)?;
            Ok((total, rows))
        })
        .await?;

        Ok(PaginatedResult {
            total,
            items: rows.into_iter().map(FoodRowWithId::into_food).collect(),
        })
    }
}
