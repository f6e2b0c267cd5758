use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{Hero, Power};
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Strength {
    Strong,
    Weak,
    Average,
}

impl Strength {
    pub const ALL: [Strength; 3] = [Strength::Strong, Strength::Weak, Strength::Average];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Strong => "Strong",
            Strength::Weak => "Weak",
            Strength::Average => "Average",
        }
    }
}

impl FromStr for Strength {
    type Err = ValidationError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strength::ALL
            .into_iter()
            .find(|strength| strength.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidStrength(s.to_string()))
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Join row between one hero and one power.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroPower {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
}

#[derive(Debug, Clone)]
pub struct NewHeroPower {
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
}

impl NewHeroPower {
    pub fn new(hero_id: i64, power_id: i64, strength: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            hero_id,
            power_id,
            strength: strength.parse()?,
        })
    }
}

/// Link nested under a hero: carries the power only.
#[derive(Debug, Clone, Serialize)]
pub struct HeroPowerWithPower {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
    pub power: Power,
}

/// Link nested under a power: carries the hero only.
#[derive(Debug, Clone, Serialize)]
pub struct HeroPowerWithHero {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
    pub hero: Hero,
}

/// Response to a hero-power creation, with both parents in summary shape.
#[derive(Debug, Clone, Serialize)]
pub struct HeroPowerDetail {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
    pub hero: Hero,
    pub power: Power,
}

impl HeroPowerDetail {
    pub fn new(link: HeroPower, hero: Hero, power: Power) -> Self {
        Self {
            id: link.id,
            hero_id: link.hero_id,
            power_id: link.power_id,
            strength: link.strength,
            hero,
            power,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_three_strengths() {
        assert_eq!("Strong".parse::<Strength>(), Ok(Strength::Strong));
        assert_eq!("Weak".parse::<Strength>(), Ok(Strength::Weak));
        assert_eq!("Average".parse::<Strength>(), Ok(Strength::Average));
    }

    #[test]
    fn rejects_anything_else() {
        for bad in ["Invincible", "strong", "WEAK", " Average", ""] {
            assert_eq!(
                bad.parse::<Strength>(),
                Err(ValidationError::InvalidStrength(bad.to_string())),
                "{bad:?} must be rejected"
            );
        }
    }

    #[test]
    fn serializes_as_its_name() {
        assert_eq!(serde_json::to_value(Strength::Weak).unwrap(), "Weak");
        assert_eq!(Strength::Average.to_string(), "Average");
    }

    #[test]
    fn new_hero_power_validates_strength() {
        assert!(NewHeroPower::new(1, 1, "Invincible").is_err());
        let link = NewHeroPower::new(1, 2, "Strong").unwrap();
        assert_eq!((link.hero_id, link.power_id, link.strength), (1, 2, Strength::Strong));
    }
}
