//! Gameplay values derived from a hero's base attributes.
//!
//! Every function here is total: a missing base value counts as zero.

use crate::model::{Hero, HeroAttribute};
use serde::Serialize;

const HEALTH_PER_STR: f64 = 20.0;
const HEALTH_REGEN_PER_STR: f64 = 0.1;
const MANA_PER_INT: f64 = 12.0;
const MANA_REGEN_PER_INT: f64 = 0.05;
const ARMOR_PER_AGI: f64 = 0.167;
const UNIVERSAL_DAMAGE_PER_ATTR: f64 = 0.6;

impl Hero {
    pub fn health(&self) -> f64 {
        or_zero(self.base_health) + or_zero(self.base_str) * HEALTH_PER_STR
    }

    pub fn health_regen(&self) -> f64 {
        or_zero(self.base_health_regen) + or_zero(self.base_str) * HEALTH_REGEN_PER_STR
    }

    pub fn mana(&self) -> f64 {
        or_zero(self.base_mana) + or_zero(self.base_int) * MANA_PER_INT
    }

    pub fn mana_regen(&self) -> f64 {
        or_zero(self.base_mana_regen) + or_zero(self.base_int) * MANA_REGEN_PER_INT
    }

    pub fn armor(&self) -> f64 {
        or_zero(self.base_armor) + or_zero(self.base_agi) * ARMOR_PER_AGI
    }

    pub fn attack_min(&self) -> f64 {
        or_zero(self.base_attack_min) + self.primary_damage_bonus()
    }

    pub fn attack_max(&self) -> f64 {
        or_zero(self.base_attack_max) + self.primary_damage_bonus()
    }

    /// Damage added by the primary attribute. Universal heroes get a share of all three.
    fn primary_damage_bonus(&self) -> f64 {
        match self.primary_attr {
            Some(HeroAttribute::Strength) => or_zero(self.base_str),
            Some(HeroAttribute::Agility) => or_zero(self.base_agi),
            Some(HeroAttribute::Intelligence) => or_zero(self.base_int),
            Some(HeroAttribute::Universal) => {
                UNIVERSAL_DAMAGE_PER_ATTR
                    * (or_zero(self.base_str) + or_zero(self.base_agi) + or_zero(self.base_int))
            }
            None => 0.0,
        }
    }
}

fn or_zero(v: Option<f64>) -> f64 {
    v.unwrap_or(0.0)
}

/// All derived values for one hero, ready for display or serialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub health: f64,
    pub health_regen: f64,
    pub mana: f64,
    pub mana_regen: f64,
    pub armor: f64,
    pub attack_min: f64,
    pub attack_max: f64,
}

impl DerivedStats {
    pub fn of(hero: &Hero) -> Self {
        Self {
            health: hero.health(),
            health_regen: hero.health_regen(),
            mana: hero.mana(),
            mana_regen: hero.mana_regen(),
            armor: hero.armor(),
            attack_min: hero.attack_min(),
            attack_max: hero.attack_max(),
        }
    }
}
