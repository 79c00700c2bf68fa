// Builder Pattern: `Product` has no public constructor; every instance comes
// from a consuming `ProductBuilder`.

use crate::console::Console;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    name: String,
    quantity: u32,
}

impl Product {
    pub fn builder() -> ProductBuilder {
        ProductBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Product [name={}, quantity={}]", self.name, self.quantity)
    }
}

#[derive(Debug, Default)]
pub struct ProductBuilder {
    name: Option<String>,
    quantity: Option<u32>,
}

impl ProductBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn build(self) -> Product {
        Product {
            name: self.name.unwrap_or_default(),
            quantity: self.quantity.unwrap_or(0),
        }
    }
}

pub fn demo(console: &mut Console) {
    let product = Product::builder().name("Laptop").quantity(10).build();
    console.line(product.to_string());

    let restock = Product::builder().quantity(3).name("Monitor").build();
    console.line(restock.to_string());

    let placeholder = Product::builder().build();
    console.line(format!("Defaults: {}", placeholder));
}
