//! Runs every behavioral pattern demo in catalog order.

use design_patterns::catalog::{self, Category};
use design_patterns::{telemetry, CatalogConfig, Console};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = CatalogConfig::load(None)?;
    telemetry::init(&config.log_filter);

    let mut console = Console::stdout(config.color);
    if config.banner {
        catalog::banner(Category::Behavioral.title(), &mut console);
    }
    catalog::run_category(Category::Behavioral, &mut console);
    Ok(())
}
