mod hero;
mod hero_power;
mod power;

pub use hero::{Hero, HeroDetail, NewHero};
pub use hero_power::{
    HeroPower, HeroPowerDetail, HeroPowerWithHero, HeroPowerWithPower, NewHeroPower, Strength,
};
pub use power::{validate_description, NewPower, Power, PowerDetail, MIN_DESCRIPTION_LEN};
