//! Runs every structural pattern demo in catalog order.

use design_patterns::catalog::{self, Category};
use design_patterns::{telemetry, CatalogConfig, Console};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = CatalogConfig::load(None)?;
    telemetry::init(&config.log_filter);

    let mut console = Console::stdout(config.color);
    if config.banner {
        catalog::banner(Category::Structural.title(), &mut console);
    }
    catalog::run_category(Category::Structural, &mut console);
    Ok(())
}
