//! SurrealDB repository implementations.

mod food;
mod menu;

pub use food::SurrealFoodRepository;
pub use menu::SurrealMenuRepository;
