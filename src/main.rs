use std::env;

use color_eyre::Section;
use liboutfitter::{catalog::Catalog, config::ReportConfig, report::render_report};
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = ReportConfig::from_args(env::args().skip(1))
        .with_note(|| "Usage: outfitter [CATALOG] [DAMAGE_TYPE] [--limit N]")?;
    let catalog = Catalog::load(&cfg.catalog)?;

    print!("{}", render_report(&catalog.outfits, &cfg));

    Ok(())
}
