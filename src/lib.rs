//! # Design Patterns Catalog
//!
//! Runnable Gang-of-Four patterns, one module per pattern:
//!
//! ## Behavioral Patterns
//! - Chain of Responsibility (first-match-wins logger chain)
//! - Command (remote control with light and fan receivers)
//! - Null Object (customer factory)
//! - Observer (stock market ticker)
//! - State (vending machine)
//! - Strategy (payment methods)
//! - Template Method (beverage recipes, by composition)
//! - Visitor (area and print visitors over a closed shape enum)
//!
//! ## Creational Patterns
//! - Abstract Factory (Windows/Mac widgets)
//! - Builder (product builder)
//! - Factory (shape factory)
//! - Prototype (`Clone`)
//! - Singleton (`OnceLock`)
//!
//! ## Structural Patterns
//! - Adapter, Bridge, Composite, Decorator, Facade, Proxy
//!
//! Every module exposes a `demo(&mut Console)` that runs its fixed script.
//! Run a whole category with:
//! ```bash
//! cargo run --bin behavioral
//! cargo run --bin creational
//! cargo run --bin structural
//! ```
//! or pick patterns with `cargo run --bin patterns -- run state decorator`.

pub mod behavioral;
pub mod catalog;
pub mod config;
pub mod console;
pub mod creational;
pub mod error;
pub mod structural;
pub mod telemetry;

pub use catalog::{Category, Pattern};
pub use config::CatalogConfig;
pub use console::Console;
pub use error::{PatternError, Result};
