//! HTTP routes and handlers.
//!
//! Handlers are thin pass-throughs: bind parameters, call the
//! repository, serialize the result. All domain decisions live below
//! this layer.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use axum::routing::get;
use axum::{Json, Router};
use carta_core::models::food::{CreateFood, Food, UpdateFood};
use carta_core::models::menu::{CreateMenu, Menu, UpdateMenu};
use carta_core::repository::{FoodRepository, MenuRepository, PageRequest, PaginatedResult};
use serde::Deserialize;
use surrealdb::Connection;
use tower_http::cors::CorsLayer;

use crate::error::ApiError;
use crate::state::AppState;

/// Raw paging query parameters; defaulting happens in [`PageRequest`].
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

pub fn router<C: Connection>(state: Arc<AppState<C>>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/menus", get(list_menus::<C>).post(create_menu::<C>))
        .route(
            "/menus/{menu_id}",
            get(get_menu::<C>).patch(update_menu::<C>),
        )
        .route("/foods", get(list_foods::<C>).post(create_food::<C>))
        .route(
            "/foods/{food_id}",
            get(get_food::<C>).patch(update_food::<C>),
        )
        .layer(cors)
        .with_state(state)
}

async fn list_menus<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Query(params): Query<PageParams>,
) -> Result<Json<PaginatedResult<Menu>>, ApiError> {
    let page = PageRequest::new(params.page, params.page_size);
    Ok(Json(state.menus.list(page).await?))
}

async fn get_menu<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Path(menu_id): Path<String>,
) -> Result<Json<Menu>, ApiError> {
    Ok(Json(state.menus.get_by_menu_id(&menu_id).await?))
}

async fn create_menu<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Json(input): Json<CreateMenu>,
) -> Result<Json<Menu>, ApiError> {
    Ok(Json(state.menus.create(input).await?))
}

async fn update_menu<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Path(menu_id): Path<String>,
    Json(input): Json<UpdateMenu>,
) -> Result<Json<Menu>, ApiError> {
    Ok(Json(state.menus.update(&menu_id, input).await?))
}

async fn list_foods<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Query(params): Query<PageParams>,
) -> Result<Json<PaginatedResult<Food>>, ApiError> {
    let page = PageRequest::new(params.page, params.page_size);
    Ok(Json(state.foods.list(page).await?))
}

async fn get_food<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Path(food_id): Path<String>,
) -> Result<Json<Food>, ApiError> {
    Ok(Json(state.foods.get_by_food_id(&food_id).await?))
}

async fn create_food<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Json(input): Json<CreateFood>,
) -> Result<Json<Food>, ApiError> {
    Ok(Json(state.foods.create(input).await?))
}

async fn update_food<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Path(food_id): Path<String>,
    Json(input): Json<UpdateFood>,
) -> Result<Json<Food>, ApiError> {
    Ok(Json(state.foods.update(&food_id, input).await?))
}
