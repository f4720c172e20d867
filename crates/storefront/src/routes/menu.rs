//! Menu API handlers.
//!
//! ```text
//! GET    /api/menu/?skip=0&limit=100  - List items
//! POST   /api/menu/                   - Create item (201)
//! GET    /api/menu/{id}               - Fetch one item
//! PUT    /api/menu/{id}               - Replace item
//! DELETE /api/menu/{id}               - Delete item (204)
//! ```
//!
//! Responses are marked uncacheable so the storefront always sees fresh prices.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use foodiehub_core::{MenuItem, MenuItemId, NewMenuItem};

use crate::error::{AppError, Result};
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 100;
const NOT_FOUND_MESSAGE: &str = "Menu item not found";

/// Pagination parameters for the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

const fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn not_found() -> AppError {
    AppError::NotFound(NOT_FOUND_MESSAGE.to_string())
}

fn item_id(path: std::result::Result<Path<i32>, PathRejection>) -> Result<MenuItemId> {
    path.map(|Path(id)| MenuItemId::new(id))
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

fn payload(body: std::result::Result<Json<NewMenuItem>, JsonRejection>) -> Result<NewMenuItem> {
    body.map(|Json(item)| item)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// List menu items.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    params: std::result::Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<MenuItem>>> {
    let Query(params) = params.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(Json(state.catalog().list(params.skip, params.limit).await))
}

/// Fetch a single menu item.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<MenuItem>> {
    state
        .catalog()
        .get(item_id(id)?)
        .await
        .map(Json)
        .ok_or_else(not_found)
}

/// Create a menu item.
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    body: std::result::Result<Json<NewMenuItem>, JsonRejection>,
) -> Result<(StatusCode, Json<MenuItem>)> {
    let item = state.catalog().create(payload(body)?).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Replace a menu item.
#[instrument(skip(state, body))]
pub async fn update(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
    body: std::result::Result<Json<NewMenuItem>, JsonRejection>,
) -> Result<Json<MenuItem>> {
    let id = item_id(id)?;
    let item = payload(body)?;
    state
        .catalog()
        .update(id, item)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// Delete a menu item.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<StatusCode> {
    if state.catalog().delete(item_id(id)?).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found())
    }
}
