//! Catalog runner: list the patterns, or run any of them by name.

use clap::{Parser, Subcommand};
use design_patterns::catalog::{self, Category, Pattern};
use design_patterns::{telemetry, CatalogConfig, Console};
use std::error::Error;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "patterns")]
#[command(about = "Run Gang-of-Four design pattern demos")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (defaults to $PATTERNS_CONFIG)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every pattern with its category
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the named patterns in the order given
    Run {
        #[arg(required = true, value_name = "PATTERN", value_parser = parse_pattern)]
        patterns: Vec<Pattern>,
    },
    /// Run every pattern, or one category
    All {
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
    },
}

fn parse_pattern(s: &str) -> Result<Pattern, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = CatalogConfig::load(cli.config.as_deref())?;
    telemetry::init(&config.log_filter);
    debug!(?config, "configuration loaded");

    let mut console = Console::stdout(config.color && !cli.no_color);

    match cli.command {
        Commands::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&catalog::entries())?);
            } else {
                for entry in catalog::entries() {
                    console.line(format!(
                        "{:<24} {:<11} {}",
                        entry.name,
                        entry.category.name(),
                        entry.summary
                    ));
                }
            }
        }
        Commands::Run { patterns } => catalog::run_each(patterns, &mut console),
        Commands::All { category } => match category {
            Some(category) => {
                if config.banner {
                    catalog::banner(category.title(), &mut console);
                }
                catalog::run_category(category, &mut console);
            }
            None => {
                if config.banner {
                    catalog::banner("Design Patterns", &mut console);
                }
                catalog::run_all(&mut console);
            }
        },
    }

    Ok(())
}
