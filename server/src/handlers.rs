use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde_json::json;
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::db::{ItemStore, StoreError};
use crate::item::{Item, ItemPayload};

type SharedStore = Arc<ItemStore>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("name and description must not be empty")]
    EmptyField,
    #[error("item {0} not found")]
    NotFound(String),
    #[error("database error")]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::EmptyField => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(source) => {
                error!(error = %source, "item store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// GET /items
async fn list_items(State(store): State<SharedStore>) -> Result<Json<Vec<Item>>, ApiError> {
    Ok(Json(store.list()?))
}

// POST /items
async fn create_item(
    State(store): State<SharedStore>,
    Json(payload): Json<ItemPayload>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let (name, description) = payload.normalized().ok_or(ApiError::EmptyField)?;
    let item = store.insert(&name, &description)?;
    info!(id = %item.id, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

// PUT /items/{id}
async fn update_item(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    Json(payload): Json<ItemPayload>,
) -> Result<Json<Item>, ApiError> {
    let (name, description) = payload.normalized().ok_or(ApiError::EmptyField)?;
    let item = store
        .update(&id, &name, &description)?
        .ok_or_else(|| ApiError::NotFound(id.clone()))?;
    info!(%id, "item updated");
    Ok(Json(item))
}

// DELETE /items/{id}
async fn delete_item(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if !store.delete(&id)? {
        return Err(ApiError::NotFound(id));
    }
    info!(%id, "item deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub fn create_app(store: ItemStore) -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", put(update_item).delete(delete_item))
        // the client page is usually served from a different origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(store))
}
