// Prototype Pattern: new objects are copies of an existing one. In Rust the
// prototype contract is just `Clone`.

use crate::console::Console;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prototype {
    name: String,
    value: i32,
}

impl Prototype {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }
}

impl fmt::Display for Prototype {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Prototype [name={}, value={}]", self.name, self.value)
    }
}

pub fn demo(console: &mut Console) {
    let original = Prototype::new("Original", 42);

    let mut clone = original.clone();
    clone.set_name("Clone");
    clone.set_value(99);

    console.line(format!("Original Object: {}", original));
    console.line(format!("Cloned Object: {}", clone));
}
