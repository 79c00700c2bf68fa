//! The closed registry of every pattern in the crate.

use crate::console::Console;
use crate::error::{PatternError, Result};
use crate::{behavioral, creational, structural};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Behavioral,
    Creational,
    Structural,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Behavioral, Category::Creational, Category::Structural];

    pub fn name(self) -> &'static str {
        match self {
            Category::Behavioral => "behavioral",
            Category::Creational => "creational",
            Category::Structural => "structural",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Behavioral => "Behavioral Patterns",
            Category::Creational => "Creational Patterns",
            Category::Structural => "Structural Patterns",
        }
    }

    pub fn patterns(self) -> impl Iterator<Item = Pattern> {
        Pattern::ALL.into_iter().filter(move |p| p.category() == self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PatternError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    ChainOfResponsibility,
    Command,
    NullObject,
    Observer,
    State,
    Strategy,
    TemplateMethod,
    Visitor,
    AbstractFactory,
    Builder,
    Factory,
    Prototype,
    Singleton,
    Adapter,
    Bridge,
    Composite,
    Decorator,
    Facade,
    Proxy,
}

impl Pattern {
    pub const ALL: [Pattern; 19] = [
        Pattern::ChainOfResponsibility,
        Pattern::Command,
        Pattern::NullObject,
        Pattern::Observer,
        Pattern::State,
        Pattern::Strategy,
        Pattern::TemplateMethod,
        Pattern::Visitor,
        Pattern::AbstractFactory,
        Pattern::Builder,
        Pattern::Factory,
        Pattern::Prototype,
        Pattern::Singleton,
        Pattern::Adapter,
        Pattern::Bridge,
        Pattern::Composite,
        Pattern::Decorator,
        Pattern::Facade,
        Pattern::Proxy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::ChainOfResponsibility => "chain-of-responsibility",
            Pattern::Command => "command",
            Pattern::NullObject => "null-object",
            Pattern::Observer => "observer",
            Pattern::State => "state",
            Pattern::Strategy => "strategy",
            Pattern::TemplateMethod => "template-method",
            Pattern::Visitor => "visitor",
            Pattern::AbstractFactory => "abstract-factory",
            Pattern::Builder => "builder",
            Pattern::Factory => "factory",
            Pattern::Prototype => "prototype",
            Pattern::Singleton => "singleton",
            Pattern::Adapter => "adapter",
            Pattern::Bridge => "bridge",
            Pattern::Composite => "composite",
            Pattern::Decorator => "decorator",
            Pattern::Facade => "facade",
            Pattern::Proxy => "proxy",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Pattern::ChainOfResponsibility => "Chain of Responsibility",
            Pattern::Command => "Command",
            Pattern::NullObject => "Null Object",
            Pattern::Observer => "Observer",
            Pattern::State => "State",
            Pattern::Strategy => "Strategy",
            Pattern::TemplateMethod => "Template Method",
            Pattern::Visitor => "Visitor",
            Pattern::AbstractFactory => "Abstract Factory",
            Pattern::Builder => "Builder",
            Pattern::Factory => "Factory",
            Pattern::Prototype => "Prototype",
            Pattern::Singleton => "Singleton",
            Pattern::Adapter => "Adapter",
            Pattern::Bridge => "Bridge",
            Pattern::Composite => "Composite",
            Pattern::Decorator => "Decorator",
            Pattern::Facade => "Facade",
            Pattern::Proxy => "Proxy",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Pattern::ChainOfResponsibility
            | Pattern::Command
            | Pattern::NullObject
            | Pattern::Observer
            | Pattern::State
            | Pattern::Strategy
            | Pattern::TemplateMethod
            | Pattern::Visitor => Category::Behavioral,
            Pattern::AbstractFactory
            | Pattern::Builder
            | Pattern::Factory
            | Pattern::Prototype
            | Pattern::Singleton => Category::Creational,
            Pattern::Adapter
            | Pattern::Bridge
            | Pattern::Composite
            | Pattern::Decorator
            | Pattern::Facade
            | Pattern::Proxy => Category::Structural,
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Pattern::ChainOfResponsibility => "log levels routed through a first-match handler chain",
            Pattern::Command => "remote control invoking light and fan commands",
            Pattern::NullObject => "do-nothing customer in place of a missing one",
            Pattern::Observer => "stock market notifying registered displays",
            Pattern::State => "vending machine with coin, button and dispense states",
            Pattern::Strategy => "payment method swapped at runtime",
            Pattern::TemplateMethod => "fixed beverage recipe with pluggable steps",
            Pattern::Visitor => "area and print visitors over a closed shape set",
            Pattern::AbstractFactory => "matching widget families per OS",
            Pattern::Builder => "product assembled by a consuming builder",
            Pattern::Factory => "shapes created by name",
            Pattern::Prototype => "new objects cloned from an existing one",
            Pattern::Singleton => "one lazily created process-wide instance",
            Pattern::Adapter => "legacy service behind the expected interface",
            Pattern::Bridge => "shapes and colors varying independently",
            Pattern::Composite => "files and folders as one tree",
            Pattern::Decorator => "coffee wrapped in priced add-ons",
            Pattern::Facade => "home theater behind two calls",
            Pattern::Proxy => "image loaded on first display",
        }
    }

    /// Heading, then the pattern's fixed demo script.
    pub fn run(self, console: &mut Console) {
        console.heading(self.title());
        let demo: fn(&mut Console) = match self {
            Pattern::ChainOfResponsibility => behavioral::chain_of_responsibility::demo,
            Pattern::Command => behavioral::command::demo,
            Pattern::NullObject => behavioral::null_object::demo,
            Pattern::Observer => behavioral::observer::demo,
            Pattern::State => behavioral::state::demo,
            Pattern::Strategy => behavioral::strategy::demo,
            Pattern::TemplateMethod => behavioral::template_method::demo,
            Pattern::Visitor => behavioral::visitor::demo,
            Pattern::AbstractFactory => creational::abstract_factory::demo,
            Pattern::Builder => creational::builder::demo,
            Pattern::Factory => creational::factory::demo,
            Pattern::Prototype => creational::prototype::demo,
            Pattern::Singleton => creational::singleton::demo,
            Pattern::Adapter => structural::adapter::demo,
            Pattern::Bridge => structural::bridge::demo,
            Pattern::Composite => structural::composite::demo,
            Pattern::Decorator => structural::decorator::demo,
            Pattern::Facade => structural::facade::demo,
            Pattern::Proxy => structural::proxy::demo,
        };
        demo(console);
    }

    pub fn entry(self) -> CatalogEntry {
        CatalogEntry {
            name: self.name(),
            title: self.title(),
            category: self.category(),
            summary: self.summary(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `chain-of-responsibility`, `chain_of_responsibility`,
/// `Chain of Responsibility` and `ChainOfResponsibility` alike.
impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize(s);
        Pattern::ALL
            .into_iter()
            .find(|p| normalize(p.name()) == wanted)
            .ok_or_else(|| PatternError::unknown_pattern(s))
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub summary: &'static str,
}

pub fn entries() -> Vec<CatalogEntry> {
    Pattern::ALL.into_iter().map(Pattern::entry).collect()
}

/// Title underlined with `=`, then a blank line.
pub fn banner(title: &str, console: &mut Console) {
    console.line(title);
    console.line("=".repeat(title.len()));
    console.blank();
}

/// Run every pattern in `category`, a blank line between demos.
pub fn run_category(category: Category, console: &mut Console) {
    run_each(category.patterns(), console);
}

pub fn run_all(console: &mut Console) {
    run_each(Pattern::ALL, console);
}

pub fn run_each(patterns: impl IntoIterator<Item = Pattern>, console: &mut Console) {
    for (i, pattern) in patterns.into_iter().enumerate() {
        if i > 0 {
            console.blank();
        }
        pattern.run(console);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique_and_round_trip() {
        let names: HashSet<&str> = Pattern::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), Pattern::ALL.len());

        for pattern in Pattern::ALL {
            assert_eq!(pattern.name().parse::<Pattern>().unwrap(), pattern);
        }
    }

    #[test]
    fn test_lenient_parsing() {
        assert_eq!(
            "Chain of Responsibility".parse::<Pattern>().unwrap(),
            Pattern::ChainOfResponsibility
        );
        assert_eq!("null_object".parse::<Pattern>().unwrap(), Pattern::NullObject);
        assert_eq!("TemplateMethod".parse::<Pattern>().unwrap(), Pattern::TemplateMethod);
    }

    #[test]
    fn test_unknown_pattern() {
        let err = "flyweight".parse::<Pattern>().unwrap_err();
        assert!(matches!(err, PatternError::UnknownPattern(ref name) if name == "flyweight"));
    }

    #[test]
    fn test_category_sizes() {
        assert_eq!(Category::Behavioral.patterns().count(), 8);
        assert_eq!(Category::Creational.patterns().count(), 5);
        assert_eq!(Category::Structural.patterns().count(), 6);
        assert_eq!("STRUCTURAL".parse::<Category>().unwrap(), Category::Structural);
        assert!("functional".parse::<Category>().is_err());
    }

    #[test]
    fn test_every_pattern_runs_with_heading() {
        for pattern in Pattern::ALL {
            let mut console = Console::capture();
            pattern.run(&mut console);

            let lines = console.transcript();
            assert_eq!(lines[0], format!("=== {} ===", pattern.title()));
            assert!(lines.len() > 1, "{} printed nothing", pattern);
        }
    }

    #[test]
    fn test_run_category_separates_demos() {
        let mut console = Console::capture();
        run_category(Category::Creational, &mut console);

        let headings: Vec<&String> = console
            .transcript()
            .iter()
            .filter(|l| l.starts_with("=== "))
            .collect();
        assert_eq!(headings.len(), 5);
        assert_eq!(headings[0], "=== Abstract Factory ===");
    }

    #[test]
    fn test_banner_underlines_title() {
        let mut console = Console::capture();
        banner("Structural Patterns", &mut console);
        assert_eq!(
            console.transcript(),
            &["Structural Patterns", "===================", ""]
        );
    }

    #[test]
    fn test_entries_serialize() {
        let json = serde_json::to_value(entries()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 19);
        assert_eq!(json[0]["name"], "chain-of-responsibility");
        assert_eq!(json[0]["category"], "behavioral");
        assert_eq!(json[18]["category"], "structural");
    }
}
