//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async and keyed by external ids; the
//! store's internal record keys never appear in these signatures.

use serde::Serialize;

use crate::error::CartaResult;
use crate::models::food::{CreateFood, Food, UpdateFood};
use crate::models::menu::{CreateMenu, Menu, UpdateMenu};

/// Pagination parameters for list queries.
///
/// Raw caller input is normalized by [`PageRequest::new`]: a missing or
/// non-positive page becomes 1, a missing or non-positive page size
/// becomes 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_PAGE_SIZE: u64 = 10;

    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p > 0 => p as u64,
            _ => Self::DEFAULT_PAGE,
        };
        let page_size = match page_size {
            Some(s) if s > 0 => s as u64,
            _ => Self::DEFAULT_PAGE_SIZE,
        };
        Self { page, page_size }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Index of the first record of the requested slice in stored order.
    pub fn start_index(&self) -> u64 {
        (self.page - 1) * self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results together with the total record count.
///
/// Serializes as the wire envelope `{ total_count, data }`, returned
/// directly rather than wrapped in a single-element array.
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResult<T> {
    #[serde(rename = "total_count")]
    pub total: u64,
    #[serde(rename = "data")]
    pub items: Vec<T>,
}

pub trait MenuRepository: Send + Sync {
    fn create(&self, input: CreateMenu) -> impl Future<Output = CartaResult<Menu>> + Send;
    fn get_by_menu_id(&self, menu_id: &str) -> impl Future<Output = CartaResult<Menu>> + Send;
    /// Applies the present fields of `input` to the menu with the given
    /// external id, creating the document when none exists (upsert).
    fn update(
        &self,
        menu_id: &str,
        input: UpdateMenu,
    ) -> impl Future<Output = CartaResult<Menu>> + Send;
    fn list(
        &self,
        page: PageRequest,
    ) -> impl Future<Output = CartaResult<PaginatedResult<Menu>>> + Send;
}

pub trait FoodRepository: Send + Sync {
    /// Creates a food item. The menu reference must resolve to an
    /// existing menu or the whole input is rejected.
    fn create(&self, input: CreateFood) -> impl Future<Output = CartaResult<Food>> + Send;
    fn get_by_food_id(&self, food_id: &str) -> impl Future<Output = CartaResult<Food>> + Send;
    /// Applies the present fields of `input` to the food item with the
    /// given external id, creating the document when none exists
    /// (upsert). A present menu reference is validated before any field
    /// is written.
    fn update(
        &self,
        food_id: &str,
        input: UpdateFood,
    ) -> impl Future<Output = CartaResult<Food>> + Send;
    fn list(
        &self,
        page: PageRequest,
    ) -> impl Future<Output = CartaResult<PaginatedResult<Food>>> + Send;
}
