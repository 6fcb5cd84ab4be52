//! Derivation helpers for a ship and outfit reference site: slugs, number
//! formatting, damage statistics and interspersed listings.

pub mod access;
pub mod catalog;
pub mod config;
pub mod damage;
pub mod format;
pub mod intersperse;
pub mod outfit;
pub mod report;
pub mod types;
pub mod utils;
