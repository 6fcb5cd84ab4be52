use std::path::PathBuf;

use color_eyre::eyre::eyre;

use crate::types::DamageType;

// Number rendering.
pub const DECIMAL_SCALE: usize = 2;
pub const THOUSANDS_SEPARATOR: char = ',';
pub const DECIMAL_SEPARATOR: char = '.';

// Divider placed between license labels.
pub const LICENSE_SEPARATOR: &str = ", ";

pub const DEFAULT_CATALOG: &str = "data/outfits.json";
pub const DEFAULT_DAMAGE_TYPE: &str = "hull";

// Maximum number of rows in a damage report.
pub const REPORT_LIMIT: usize = 25;

/// Convenience container for report settings.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportConfig {
    pub catalog: PathBuf,
    pub damage_type: DamageType,
    pub limit: usize,
}

pub fn report_config() -> ReportConfig {
    ReportConfig {
        catalog: PathBuf::from(DEFAULT_CATALOG),
        damage_type: DamageType::new(DEFAULT_DAMAGE_TYPE),
        limit: REPORT_LIMIT,
    }
}

impl ReportConfig {
    /// Override the defaults from command-line arguments (program name
    /// already stripped): `[CATALOG] [DAMAGE_TYPE] [--limit N]`.
    pub fn from_args<I, S>(args: I) -> color_eyre::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cfg = report_config();
        let mut positional = 0;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            if arg == "--limit" {
                let raw = args
                    .next()
                    .ok_or_else(|| eyre!("--limit expects a value"))?;
                cfg.limit = raw
                    .as_ref()
                    .parse()
                    .map_err(|e| eyre!("Invalid --limit {:?}: {e}", raw.as_ref()))?;
                continue;
            }

            match positional {
                0 => cfg.catalog = PathBuf::from(arg),
                1 => cfg.damage_type = DamageType::new(arg),
                _ => return Err(eyre!("Unexpected argument {arg:?}")),
            }
            positional += 1;
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests;
