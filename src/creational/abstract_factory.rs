// Abstract Factory: one factory per OS family produces a matching set of
// widgets. The family is picked from a string at runtime.

use crate::console::Console;
use crate::error::{PatternError, Result};
use std::str::FromStr;
use tracing::warn;

// ============================================================================
// Products
// ============================================================================

pub trait Button {
    fn click(&self) -> String;
}

pub trait Checkbox {
    fn toggle(&self) -> String;
}

pub struct WindowsButton;
impl Button for WindowsButton {
    fn click(&self) -> String {
        "Windows Button clicked!".to_string()
    }
}

pub struct WindowsCheckbox;
impl Checkbox for WindowsCheckbox {
    fn toggle(&self) -> String {
        "Windows Checkbox toggled!".to_string()
    }
}

pub struct MacButton;
impl Button for MacButton {
    fn click(&self) -> String {
        "Mac Button clicked!".to_string()
    }
}

pub struct MacCheckbox;
impl Checkbox for MacCheckbox {
    fn toggle(&self) -> String {
        "Mac Checkbox toggled!".to_string()
    }
}

// ============================================================================
// Factories
// ============================================================================

pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

pub struct WindowsFactory;
impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }
    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

pub struct MacFactory;
impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }
    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Mac,
}

impl FromStr for OsFamily {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("windows") {
            Ok(OsFamily::Windows)
        } else if s.eq_ignore_ascii_case("mac") {
            Ok(OsFamily::Mac)
        } else {
            Err(PatternError::unknown_os_type(s))
        }
    }
}

impl OsFamily {
    pub fn factory(self) -> Box<dyn GuiFactory> {
        match self {
            OsFamily::Windows => Box::new(WindowsFactory),
            OsFamily::Mac => Box::new(MacFactory),
        }
    }
}

pub fn factory_for(os_type: &str) -> Result<Box<dyn GuiFactory>> {
    os_type
        .parse::<OsFamily>()
        .map(OsFamily::factory)
        .map_err(|err| {
            warn!(%err, "rejected OS type");
            err
        })
}

fn render(console: &mut Console, factory: &dyn GuiFactory) {
    console.line(factory.create_button().click());
    console.line(factory.create_checkbox().toggle());
}

pub fn demo(console: &mut Console) {
    for os in ["windows", "Mac", "beos"] {
        console.line(format!("OS type: {}", os));
        match factory_for(os) {
            Ok(factory) => render(console, factory.as_ref()),
            Err(err) => console.line(err.to_string()),
        }
    }
}
