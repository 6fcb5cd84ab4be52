use std::{fs, path::Path};

use color_eyre::{Section, eyre::eyre};
use serde::Deserialize;
use tracing::{debug, info};

use crate::outfit::Outfit;

/// Outfits loaded from game data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub outfits: Vec<Outfit>,
}

// Catalog files are either a bare array or wrapped in an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Outfit>),
    Wrapped { outfits: Vec<Outfit> },
}

impl TryFrom<&str> for Catalog {
    type Error = color_eyre::Report;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

impl Catalog {
    pub fn from_json(raw: &str) -> color_eyre::Result<Self> {
        let file: CatalogFile = serde_json::from_str(raw)
            .map_err(|e| eyre!("Invalid outfit catalog: {e}"))
            .with_note(|| "Expected an array of outfits or an object with an `outfits` array.")?;

        let outfits = match file {
            CatalogFile::Bare(outfits) | CatalogFile::Wrapped { outfits } => outfits,
        };
        debug!(count = outfits.len(), "parsed outfit catalog");

        Ok(Self { outfits })
    }

    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_note(|| format!("While reading catalog {}", path.display()))?;
        let catalog = Self::from_json(&raw)
            .with_note(|| format!("While parsing catalog {}", path.display()))?;
        info!(
            path = %path.display(),
            outfits = catalog.outfits.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn weapons(&self) -> impl Iterator<Item = &Outfit> {
        self.outfits.iter().filter(|o| o.is_weapon())
    }

    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }
}
