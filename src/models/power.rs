use serde::Serialize;

use super::{Hero, HeroPowerWithHero};
use crate::error::ValidationError;

pub const MIN_DESCRIPTION_LEN: usize = 20;

/// Checks the description invariant shared by inserts and updates.
/// Length is counted in characters, not bytes.
pub fn validate_description(description: Option<&str>) -> Result<&str, ValidationError> {
    let description = match description {
        Some(d) if !d.is_empty() => d,
        _ => return Err(ValidationError::MissingDescription),
    };
    let actual = description.chars().count();
    if actual < MIN_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooShort {
            min: MIN_DESCRIPTION_LEN,
            actual,
        });
    }
    Ok(description)
}

/// Power row, also the summary shape returned by the power endpoints.
///
/// `description` is only writable through [`Power::set_description`], so an
/// in-memory `Power` can never hold a value the schema would refuse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Power {
    pub id: i64,
    pub name: String,
    description: String,
}

impl Power {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: &str) -> Result<(), ValidationError> {
        self.description = validate_description(Some(description))?.to_string();
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn from_parts(id: i64, name: &str, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewPower {
    pub name: String,
    description: String,
}

impl NewPower {
    pub fn new(name: impl Into<String>, description: &str) -> Result<Self, ValidationError> {
        let description = validate_description(Some(description))?.to_string();
        Ok(Self {
            name: name.into(),
            description,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A power with its hero-power links. Each link carries its hero but never
/// the power again.
#[derive(Debug, Clone, Serialize)]
pub struct PowerDetail {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub hero_powers: Vec<HeroPowerWithHero>,
}

impl PowerDetail {
    pub fn new(power: Power, hero_powers: Vec<HeroPowerWithHero>) -> Self {
        Self {
            id: power.id,
            name: power.name,
            description: power.description,
            hero_powers,
        }
    }

    pub fn heroes(&self) -> impl Iterator<Item = &Hero> {
        self.hero_powers.iter().map(|link| &link.hero)
    }
}
