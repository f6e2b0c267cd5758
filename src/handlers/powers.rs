use std::time::Instant;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::{
    db,
    error::{AppError, AppResult, ValidationError},
    handlers::resource_id,
    models::Power,
    AppState,
};

pub async fn list_powers(State(state): State<AppState>) -> AppResult<Json<Vec<Power>>> {
    let start = Instant::now();
    let powers = db::fetch_all_powers(&state.db).await?;

    info!(
        count = powers.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Listed powers"
    );

    Ok(Json(powers))
}

pub async fn get_power(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Power>> {
    let id = resource_id(path, db::POWER_NOT_FOUND)?;
    let power = db::fetch_power_by_id(&state.db, id).await?;

    info!(id, "Fetched power");

    Ok(Json(power))
}

/// Checks run in a fixed order, each short-circuiting: the power must exist,
/// then `description` must be present, then it must be valid text.
pub async fn update_power(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Power>> {
    let id = resource_id(path, db::POWER_NOT_FOUND)?;
    let mut power = db::fetch_power_by_id(&state.db, id).await?;

    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let description = payload
        .get("description")
        .ok_or_else(|| AppError::BadRequest("description is required".to_string()))?
        .as_str()
        .ok_or(ValidationError::DescriptionNotText)?;

    power.set_description(description)?;

    let start = Instant::now();
    let power = db::update_power_description(&state.db, &power).await?;

    info!(
        id,
        elapsed_ms = start.elapsed().as_millis(),
        "Updated power description"
    );

    Ok(Json(power))
}
