use std::time::Instant;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use tracing::info;

use crate::{
    db,
    error::AppResult,
    handlers::resource_id,
    models::{Hero, HeroDetail},
    AppState,
};

pub async fn list_heroes(State(state): State<AppState>) -> AppResult<Json<Vec<Hero>>> {
    let start = Instant::now();
    let heroes = db::fetch_all_heroes(&state.db).await?;

    info!(
        count = heroes.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Listed heroes"
    );

    Ok(Json(heroes))
}

pub async fn get_hero(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<HeroDetail>> {
    let id = resource_id(path, db::HERO_NOT_FOUND)?;

    let start = Instant::now();
    let hero = db::fetch_hero_detail(&state.db, id).await?;

    info!(
        id,
        hero_powers = hero.hero_powers.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Fetched hero"
    );

    Ok(Json(hero))
}
