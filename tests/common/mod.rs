//! Shared fixtures: an in-memory database with migrations applied and a few
//! seeded rows.

#![allow(dead_code)]

use std::str::FromStr;

use axum_test::TestServer;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use superheroes_service::models::{Hero, NewHero, NewPower, Power};
use superheroes_service::{build_router, db, AppState};

pub const FLIGHT: &str = "gives the wielder the ability to fly through the skies at supersonic speed";
pub const STRENGTH: &str = "gives the wielder super-human strengths";

/// One connection that never expires: every `sqlite::memory:` connection is
/// its own database.
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");
    db::migrate(&pool).await.expect("Failed to run migrations");
    pool
}

pub fn create_test_server(pool: &SqlitePool) -> TestServer {
    let app = build_router(AppState { db: pool.clone() });
    TestServer::new(app).expect("Failed to create test server")
}

pub async fn insert_hero(pool: &SqlitePool, name: &str, super_name: &str) -> Hero {
    db::insert_hero(pool, &NewHero::new(name, super_name))
        .await
        .expect("insert hero")
}

pub async fn insert_power(pool: &SqlitePool, name: &str, description: &str) -> Power {
    let payload = NewPower::new(name, description).expect("valid power");
    db::insert_power(pool, &payload).await.expect("insert power")
}

/// Two heroes and two powers, no links.
pub async fn seed_roster(pool: &SqlitePool) -> (Vec<Hero>, Vec<Power>) {
    let heroes = vec![
        insert_hero(pool, "Kamala Khan", "Ms. Marvel").await,
        insert_hero(pool, "Doreen Green", "Squirrel Girl").await,
    ];
    let powers = vec![
        insert_power(pool, "super strength", STRENGTH).await,
        insert_power(pool, "flight", FLIGHT).await,
    ];
    (heroes, powers)
}

pub async fn hero_power_count(pool: &SqlitePool) -> i64 {
    db::count_hero_powers(pool).await.expect("count hero powers")
}
