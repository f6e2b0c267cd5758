use std::time::Instant;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::{
    db,
    error::{AppError, AppResult, ValidationError},
    models::{HeroPowerDetail, NewHeroPower},
    AppState,
};

/// Checks run in a fixed order, each short-circuiting: all three fields
/// present, both referenced rows exist, `strength` is one of the allowed values.
pub async fn create_hero_power(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<HeroPowerDetail>> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let (Some(strength), Some(power_id), Some(hero_id)) = (
        payload.get("strength"),
        payload.get("power_id"),
        payload.get("hero_id"),
    ) else {
        return Err(AppError::BadRequest(
            "strength, power_id, and hero_id are required".to_string(),
        ));
    };

    let unresolved = || AppError::Unresolved(db::HERO_OR_POWER_NOT_FOUND.to_string());

    // An id that is not an integer cannot name a row.
    let (Some(power_id), Some(hero_id)) = (power_id.as_i64(), hero_id.as_i64()) else {
        return Err(unresolved());
    };

    let power = db::find_power(&state.db, power_id).await?;
    let hero = db::find_hero(&state.db, hero_id).await?;
    if power.is_none() || hero.is_none() {
        return Err(unresolved());
    }

    let strength = strength
        .as_str()
        .ok_or_else(|| ValidationError::InvalidStrength(strength.to_string()))?;
    let new_link = NewHeroPower::new(hero_id, power_id, strength)?;

    let start = Instant::now();
    let link = db::insert_hero_power(&state.db, &new_link).await?;

    info!(
        id = link.id,
        hero_id,
        power_id,
        strength = %link.strength,
        elapsed_ms = start.elapsed().as_millis(),
        "Created hero power"
    );

    Ok(Json(link))
}
