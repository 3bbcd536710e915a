//! Food item domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A food item offered on a menu.
///
/// `food_id` is the external identifier, assigned once at creation.
/// `menu_id` references an existing [`Menu`](crate::models::menu::Menu)
/// by its external id. Prices are stored normalized to two decimal
/// digits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    /// Store record key. Opaque, store-assigned, immutable.
    #[serde(skip_serializing, default)]
    pub id: String,
    pub food_id: String,
    pub name: String,
    pub price: f64,
    pub food_image: String,
    pub menu_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new food item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFood {
    pub name: String,
    pub price: f64,
    pub food_image: String,
    /// External id of the menu this item belongs to. Must resolve to an
    /// existing menu.
    pub menu_id: String,
}

/// Fields that can be patched on an existing food item. Absent fields
/// are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFood {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub food_image: Option<String>,
    pub menu_id: Option<String>,
}
