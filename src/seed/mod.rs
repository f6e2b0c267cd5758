use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::info;

use crate::db;
use crate::error::AppResult;
use crate::models::{NewHero, NewHeroPower, NewPower, Strength};

static POWERS: &[(&str, &str)] = &[
    ("super strength", "gives the wielder super-human strengths"),
    ("flight", "gives the wielder the ability to fly through the skies at supersonic speed"),
    ("super human senses", "allows the wielder to use her senses at a super-human level"),
    ("elasticity", "can stretch the human body to extreme lengths"),
];

static HEROES: &[(&str, &str)] = &[
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
    ("Janet Van Dyne", "The Wasp"),
    ("Wanda Maximoff", "Scarlet Witch"),
    ("Carol Danvers", "Captain Marvel"),
    ("Jean Grey", "Dark Phoenix"),
    ("Ororo Munroe", "Storm"),
    ("Kitty Pryde", "Shadowcat"),
    ("Elektra Natchios", "Elektra"),
];

/// Maximum number of powers linked to a single seeded hero.
const MAX_POWERS_PER_HERO: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub heroes: usize,
    pub powers: usize,
    pub hero_powers: usize,
}

/// Replace the whole roster with the fixed heroes and powers, then give each
/// hero a random handful of powers at random strengths. All or nothing.
pub async fn seed_database(pool: &SqlitePool, rng: &mut StdRng) -> AppResult<SeedSummary> {
    info!("Seeding heroes and powers...");

    let mut tx = pool.begin().await?;

    info!("  Clearing existing rows");
    db::clear_all(&mut *tx).await?;

    let mut powers = Vec::with_capacity(POWERS.len());
    for (name, description) in POWERS {
        let payload = NewPower::new(*name, description)?;
        powers.push(db::insert_power(&mut *tx, &payload).await?);
    }

    let mut heroes = Vec::with_capacity(HEROES.len());
    for (name, super_name) in HEROES {
        heroes.push(db::insert_hero(&mut *tx, &NewHero::new(*name, *super_name)).await?);
    }

    let mut links = 0;
    for hero in &heroes {
        let count = rng.gen_range(0..=MAX_POWERS_PER_HERO.min(powers.len()));
        let picked: Vec<i64> = powers.choose_multiple(rng, count).map(|p| p.id).collect();
        for power_id in picked {
            let strength = *Strength::ALL.choose(rng).unwrap_or(&Strength::Average);
            let payload = NewHeroPower {
                hero_id: hero.id,
                power_id,
                strength,
            };
            db::insert_hero_power_row(&mut *tx, &payload).await?;
            links += 1;
        }
    }

    tx.commit().await?;

    let summary = SeedSummary {
        heroes: heroes.len(),
        powers: powers.len(),
        hero_powers: links,
    };
    info!(
        heroes = summary.heroes,
        powers = summary.powers,
        hero_powers = summary.hero_powers,
        "Seeding complete"
    );
    Ok(summary)
}
