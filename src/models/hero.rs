use serde::{Deserialize, Serialize};

use super::{HeroPowerWithPower, Power};

/// Hero row, also the summary shape used in lists and nested under a hero-power.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Hero {
    pub id: i64,
    pub name: String,
    pub super_name: String,
}

#[derive(Debug, Clone)]
pub struct NewHero {
    pub name: String,
    pub super_name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>, super_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            super_name: super_name.into(),
        }
    }
}

/// A hero with its hero-power links. Each link carries its power but never
/// the hero again.
#[derive(Debug, Clone, Serialize)]
pub struct HeroDetail {
    pub id: i64,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerWithPower>,
}

impl HeroDetail {
    pub fn new(hero: Hero, hero_powers: Vec<HeroPowerWithPower>) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            super_name: hero.super_name,
            hero_powers,
        }
    }

    /// Powers reachable through the hero-power links, in link order.
    pub fn powers(&self) -> impl Iterator<Item = &Power> {
        self.hero_powers.iter().map(|link| &link.power)
    }
}
