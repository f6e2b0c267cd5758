use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Executor, Sqlite, SqliteConnection, SqlitePool};

use crate::error::{AppError, AppResult};
use crate::models::*;

pub const HERO_NOT_FOUND: &str = "Hero not found";
pub const POWER_NOT_FOUND: &str = "Power not found";
pub const HERO_OR_POWER_NOT_FOUND: &str = "Power or Hero not found";

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open a pool with foreign keys enforced on every connection, so the
/// `ON DELETE CASCADE` clauses in the schema take effect.
pub async fn connect(database_url: &str, max_connections: u32) -> AppResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> AppResult<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

// ── Heroes ────────────────────────────────────────────────────────────────────

pub async fn fetch_all_heroes(pool: &SqlitePool) -> AppResult<Vec<Hero>> {
    let heroes = sqlx::query_as::<_, Hero>("SELECT id, name, super_name FROM heroes ORDER BY id ASC")
        .fetch_all(pool)
        .await?;
    Ok(heroes)
}

pub async fn find_hero<'e, E>(executor: E, id: i64) -> AppResult<Option<Hero>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let hero = sqlx::query_as::<_, Hero>("SELECT id, name, super_name FROM heroes WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(hero)
}

pub async fn fetch_hero_by_id(pool: &SqlitePool, id: i64) -> AppResult<Hero> {
    find_hero(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(HERO_NOT_FOUND.to_string()))
}

#[derive(sqlx::FromRow)]
struct LinkWithPowerRow {
    link_id: i64,
    hero_id: i64,
    power_id: i64,
    strength: String,
    #[sqlx(flatten)]
    power: Power,
}

pub async fn fetch_hero_detail(pool: &SqlitePool, id: i64) -> AppResult<HeroDetail> {
    let hero = fetch_hero_by_id(pool, id).await?;

    let rows = sqlx::query_as::<_, LinkWithPowerRow>(
        r#"
        SELECT hp.id AS link_id, hp.hero_id, hp.power_id, hp.strength,
               p.id, p.name, p.description
        FROM hero_powers hp
        JOIN powers p ON p.id = hp.power_id
        WHERE hp.hero_id = ?
        ORDER BY hp.id ASC
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    let links = rows
        .into_iter()
        .map(|row| {
            Ok(HeroPowerWithPower {
                id: row.link_id,
                hero_id: row.hero_id,
                power_id: row.power_id,
                strength: row.strength.parse()?,
                power: row.power,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(HeroDetail::new(hero, links))
}

pub async fn insert_hero<'e, E>(executor: E, payload: &NewHero) -> AppResult<Hero>
where
    E: Executor<'e, Database = Sqlite>,
{
    let hero = sqlx::query_as::<_, Hero>(
        "INSERT INTO heroes (name, super_name) VALUES (?, ?) RETURNING id, name, super_name",
    )
    .bind(&payload.name)
    .bind(&payload.super_name)
    .fetch_one(executor)
    .await?;
    Ok(hero)
}

/// Removes the hero; its hero-power rows go with it through the FK cascade.
pub async fn delete_hero(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM heroes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(HERO_NOT_FOUND.to_string()));
    }
    Ok(())
}

// ── Powers ────────────────────────────────────────────────────────────────────

pub async fn fetch_all_powers(pool: &SqlitePool) -> AppResult<Vec<Power>> {
    let powers =
        sqlx::query_as::<_, Power>("SELECT id, name, description FROM powers ORDER BY id ASC")
            .fetch_all(pool)
            .await?;
    Ok(powers)
}

pub async fn find_power<'e, E>(executor: E, id: i64) -> AppResult<Option<Power>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let power =
        sqlx::query_as::<_, Power>("SELECT id, name, description FROM powers WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?;
    Ok(power)
}

pub async fn fetch_power_by_id(pool: &SqlitePool, id: i64) -> AppResult<Power> {
    find_power(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(POWER_NOT_FOUND.to_string()))
}

#[derive(sqlx::FromRow)]
struct LinkWithHeroRow {
    link_id: i64,
    hero_id: i64,
    power_id: i64,
    strength: String,
    #[sqlx(flatten)]
    hero: Hero,
}

pub async fn fetch_power_detail(pool: &SqlitePool, id: i64) -> AppResult<PowerDetail> {
    let power = fetch_power_by_id(pool, id).await?;

    let rows = sqlx::query_as::<_, LinkWithHeroRow>(
        r#"
        SELECT hp.id AS link_id, hp.hero_id, hp.power_id, hp.strength,
               h.id, h.name, h.super_name
        FROM hero_powers hp
        JOIN heroes h ON h.id = hp.hero_id
        WHERE hp.power_id = ?
        ORDER BY hp.id ASC
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    let links = rows
        .into_iter()
        .map(|row| {
            Ok(HeroPowerWithHero {
                id: row.link_id,
                hero_id: row.hero_id,
                power_id: row.power_id,
                strength: row.strength.parse()?,
                hero: row.hero,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(PowerDetail::new(power, links))
}

pub async fn insert_power<'e, E>(executor: E, payload: &NewPower) -> AppResult<Power>
where
    E: Executor<'e, Database = Sqlite>,
{
    let power = sqlx::query_as::<_, Power>(
        "INSERT INTO powers (name, description) VALUES (?, ?) RETURNING id, name, description",
    )
    .bind(&payload.name)
    .bind(payload.description())
    .fetch_one(executor)
    .await?;
    Ok(power)
}

/// Persist a power whose description has already passed
/// [`Power::set_description`].
pub async fn update_power_description(pool: &SqlitePool, power: &Power) -> AppResult<Power> {
    let mut tx = pool.begin().await?;

    let updated = sqlx::query_as::<_, Power>(
        r#"
        UPDATE powers
        SET description = ?
        WHERE id = ?
        RETURNING id, name, description
        "#,
    )
    .bind(power.description())
    .bind(power.id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| AppError::NotFound(POWER_NOT_FOUND.to_string()))?;

    tx.commit().await?;
    Ok(updated)
}

pub async fn delete_power(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM powers WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(POWER_NOT_FOUND.to_string()));
    }
    Ok(())
}

// ── Hero powers ───────────────────────────────────────────────────────────────

/// Insert a link inside one transaction. Both parents are re-read under the
/// same transaction so a concurrent delete cannot leave an orphan behind.
pub async fn insert_hero_power(
    pool: &SqlitePool,
    payload: &NewHeroPower,
) -> AppResult<HeroPowerDetail> {
    let mut tx = pool.begin().await?;

    let hero = find_hero(&mut *tx, payload.hero_id).await?;
    let power = find_power(&mut *tx, payload.power_id).await?;
    let (Some(hero), Some(power)) = (hero, power) else {
        return Err(AppError::Unresolved(HERO_OR_POWER_NOT_FOUND.to_string()));
    };

    let link = insert_hero_power_row(&mut *tx, payload).await?;
    tx.commit().await?;

    Ok(HeroPowerDetail::new(link, hero, power))
}

/// Bare insert with no parent lookup; the FK constraints still apply.
pub async fn insert_hero_power_row<'e, E>(executor: E, payload: &NewHeroPower) -> AppResult<HeroPower>
where
    E: Executor<'e, Database = Sqlite>,
{
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO hero_powers (strength, hero_id, power_id) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(payload.strength.as_str())
    .bind(payload.hero_id)
    .bind(payload.power_id)
    .fetch_one(executor)
    .await?;

    Ok(HeroPower {
        id,
        hero_id: payload.hero_id,
        power_id: payload.power_id,
        strength: payload.strength,
    })
}

pub async fn count_hero_powers(pool: &SqlitePool) -> AppResult<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hero_powers")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

/// Wipe every hero and power. Hero-power rows disappear through the cascade.
pub async fn clear_all(conn: &mut SqliteConnection) -> AppResult<()> {
    sqlx::query("DELETE FROM heroes").execute(&mut *conn).await?;
    sqlx::query("DELETE FROM powers").execute(&mut *conn).await?;
    Ok(())
}
