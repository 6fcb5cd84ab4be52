use serde::Deserialize;
use serde_json::Value;

use crate::{
    access::{safe_get, safe_get_f64},
    types::{DamageType, License, Slug},
};

/// Anything that can carry a weapon and occupies outfit space.
pub trait Armament {
    /// Damage per second of the given type, if the weapon deals any.
    fn per_second(&self, damage_type: &DamageType) -> Option<f64>;

    fn outfit_space(&self) -> f64;
}

/// Weapon block of an outfit.
///
/// Damage sub-records sit next to scalar fields such as `range` or
/// `velocity`, so the block is kept as raw JSON and read by path.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Weapon(Value);

impl Weapon {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    pub fn per_second(&self, damage_type: &DamageType) -> Option<f64> {
        safe_get_f64(&[damage_type.as_str(), "perSecond"], &self.0)
    }

    /// Any other field of the weapon block, e.g. `range`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        safe_get(&[key], &self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub outfit_space: f64,
    #[serde(default)]
    pub licenses: Vec<License>,
    #[serde(default)]
    pub weapon: Option<Weapon>,
}

impl Outfit {
    pub fn slug(&self) -> Slug {
        Slug::from_name(&self.name)
    }

    pub fn is_weapon(&self) -> bool {
        self.weapon.is_some()
    }
}

impl Armament for Outfit {
    fn per_second(&self, damage_type: &DamageType) -> Option<f64> {
        self.weapon.as_ref()?.per_second(damage_type)
    }

    fn outfit_space(&self) -> f64 {
        self.outfit_space
    }
}

/// Raw records read straight from game data.
///
/// A missing or non-numeric `outfitSpace` reads as NaN, so any ratio derived
/// from it is NaN as well.
impl Armament for Value {
    fn per_second(&self, damage_type: &DamageType) -> Option<f64> {
        safe_get_f64(&["weapon", damage_type.as_str(), "perSecond"], self)
    }

    fn outfit_space(&self) -> f64 {
        safe_get_f64(&["outfitSpace"], self).unwrap_or(f64::NAN)
    }
}
