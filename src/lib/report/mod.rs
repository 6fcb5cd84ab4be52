//! Plain-text damage listings: outfits ranked by damage per outfit space.

use std::fmt::Write as _;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    config::{LICENSE_SEPARATOR, ReportConfig},
    damage::{damage, damage_per_outfit_space, total_damage},
    format::format_number,
    intersperse::intersperse_value,
    outfit::Outfit,
    types::{DamageType, License, Slug},
    utils::{capitalize, nbspize},
};

#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub slug: Slug,
    pub damage: f64,
    pub per_space: f64,
    pub licenses: Vec<License>,
}

impl ReportRow {
    /// `None` for outfits that deal no damage of this type.
    pub fn from_outfit(outfit: &Outfit, damage_type: &DamageType) -> Option<Self> {
        let dps = damage(damage_type, outfit)?;
        let per_space = damage_per_outfit_space(damage_type, outfit)?;
        Some(Self {
            name: outfit.name.clone(),
            slug: outfit.slug(),
            damage: dps,
            per_space,
            licenses: outfit.licenses.clone(),
        })
    }

    /// True when the ratio betrays zero, negative or missing outfit space.
    pub fn has_suspect_space(&self) -> bool {
        self.per_space.is_sign_negative() || !self.per_space.is_finite()
    }
}

/// Rows for every outfit dealing `damage_type`, best ratio first.
///
/// Ties are broken by name; NaN ratios sort last.
pub fn rank(outfits: &[Outfit], damage_type: &DamageType) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = outfits
        .par_iter()
        .filter_map(|outfit| ReportRow::from_outfit(outfit, damage_type))
        .collect();

    rows.sort_by(|a, b| {
        a.per_space
            .is_nan()
            .cmp(&b.per_space.is_nan())
            .then_with(|| b.per_space.total_cmp(&a.per_space))
            .then_with(|| a.name.cmp(&b.name))
    });
    debug!(damage_type = %damage_type, rows = rows.len(), "ranked outfits");

    rows
}

/// Label each license and join the labels with [`LICENSE_SEPARATOR`].
pub fn render_licenses<F>(licenses: &[License], label: F) -> Vec<String>
where
    F: Fn(&License) -> String,
{
    intersperse_value(licenses.iter().map(label), LICENSE_SEPARATOR.to_string())
}

pub fn render_row(position: usize, row: &ReportRow) -> String {
    let mut line = format!(
        "{position:>3}. {} ({}) {} dps, {} per space",
        nbspize(&row.name),
        row.slug,
        format_number(row.damage, false),
        format_number(row.per_space, true),
    );
    if !row.licenses.is_empty() {
        line.push_str(" | ");
        line.push_str(&render_licenses(&row.licenses, License::to_string).concat());
    }
    line
}

pub fn render_report(outfits: &[Outfit], cfg: &ReportConfig) -> String {
    let rows = rank(outfits, &cfg.damage_type);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} damage per outfit space",
        capitalize(cfg.damage_type.as_str())
    );

    if rows.is_empty() {
        let _ = writeln!(out, "No outfits deal {} damage.", cfg.damage_type);
    }

    for (i, row) in rows.iter().take(cfg.limit).enumerate() {
        if row.has_suspect_space() {
            warn!(outfit = %row.name, per_space = row.per_space, "outfit space is not positive");
        }
        let _ = writeln!(out, "{}", render_row(i + 1, row));
    }

    if rows.len() > cfg.limit {
        let _ = writeln!(out, "... and {} more", rows.len() - cfg.limit);
    }

    let _ = writeln!(
        out,
        "Total {} damage: {}",
        cfg.damage_type,
        format_number(total_damage(&cfg.damage_type, outfits), false)
    );

    out
}
