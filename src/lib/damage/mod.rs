//! Derived combat statistics.
//!
//! Absent damage can be read two ways. When totalling a fleet, an unarmed
//! outfit contributes nothing, so absence is zero ([`or_zero`],
//! [`damage_or_zero`]). For per-space ratios absence means the ratio does not
//! apply at all, so [`damage_per_outfit_space`] returns `None`.

use crate::{outfit::Armament, types::DamageType};

/// Damage per second of `damage_type`, or `None` if the gun deals none.
pub fn damage<G: Armament + ?Sized>(damage_type: &DamageType, gun: &G) -> Option<f64> {
    gun.per_second(damage_type)
}

/// Damage per second divided by outfit space.
///
/// `None` when the gun has no damage of this type; the division is not
/// attempted. Zero or negative space is not guarded against and yields
/// infinities or NaN.
pub fn damage_per_outfit_space<G: Armament + ?Sized>(
    damage_type: &DamageType,
    gun: &G,
) -> Option<f64> {
    damage(damage_type, gun).map(|dps| dps / gun.outfit_space())
}

/// Wrap a lookup so that absence becomes `T::default()`.
pub fn or_zero<A, T, F>(f: F) -> impl Fn(A) -> T
where
    F: Fn(A) -> Option<T>,
    T: Default,
{
    move |arg| f(arg).unwrap_or_default()
}

/// [`damage`] with the damage type fixed.
pub fn damage_of<G: Armament + ?Sized>(damage_type: DamageType) -> impl Fn(&G) -> Option<f64> {
    move |gun: &G| damage(&damage_type, gun)
}

/// [`damage_per_outfit_space`] with the damage type fixed.
pub fn damage_per_outfit_space_of<G: Armament + ?Sized>(
    damage_type: DamageType,
) -> impl Fn(&G) -> Option<f64> {
    move |gun: &G| damage_per_outfit_space(&damage_type, gun)
}

pub fn damage_or_zero<G: Armament + ?Sized>(damage_type: &DamageType, gun: &G) -> f64 {
    or_zero::<&G, f64, _>(|g: &G| damage(damage_type, g))(gun)
}

/// Sum of damage over `guns`; unarmed entries add zero.
pub fn total_damage<'a, G, I>(damage_type: &DamageType, guns: I) -> f64
where
    G: Armament + ?Sized + 'a,
    I: IntoIterator<Item = &'a G>,
{
    guns.into_iter()
        .map(|gun| damage_or_zero(damage_type, gun))
        .sum()
}
