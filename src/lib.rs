use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod seed;

/// Shared application state; cloning only clones the pool handle.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Landing ─────────────────────────────────────────────────────────
        .route("/", get(handlers::index))

        // ── Heroes ──────────────────────────────────────────────────────────
        .route("/heroes", get(handlers::heroes::list_heroes))
        .route("/heroes/:id", get(handlers::heroes::get_hero))

        // ── Powers ──────────────────────────────────────────────────────────
        .route("/powers", get(handlers::powers::list_powers))
        .route(
            "/powers/:id",
            get(handlers::powers::get_power).patch(handlers::powers::update_power),
        )

        // ── Hero powers ─────────────────────────────────────────────────────
        .route("/hero_powers", post(handlers::hero_powers::create_hero_power))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
