//! Menu domain model.
//!
//! A menu groups food items and may carry a validity window limiting
//! when it is on offer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A menu of food items.
///
/// `menu_id` is the external identifier: an opaque string assigned once
/// at creation and used for every outward-facing lookup. The store's
/// own record key (`id`) never leaves the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    /// Store record key. Opaque, store-assigned, immutable.
    #[serde(skip_serializing, default)]
    pub id: String,
    pub menu_id: String,
    pub name: String,
    pub category: String,
    /// Start of the validity window, if one is set.
    pub start_date: Option<DateTime<Utc>>,
    /// End of the validity window, if one is set.
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new menu.
///
/// When both window bounds are given they must pass the policy in
/// [`crate::policy::validate_window`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMenu {
    pub name: String,
    pub category: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Fields that can be patched on an existing menu.
///
/// Absent fields are left untouched. The window bounds must be supplied
/// together or not at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMenu {
    pub name: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}
