// Decorator Pattern by composition: each decorator owns the coffee it wraps,
// adds its own contribution, and forwards everything else.

use crate::console::Console;

pub trait Coffee {
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn description(&self) -> String {
        "Simple Coffee".to_string()
    }

    fn cost(&self) -> f64 {
        50.0
    }
}

pub struct MilkDecorator {
    wrapped: Box<dyn Coffee>,
}

impl MilkDecorator {
    pub const PRICE: f64 = 10.0;

    pub fn new(wrapped: Box<dyn Coffee>) -> Self {
        Self { wrapped }
    }
}

impl Coffee for MilkDecorator {
    fn description(&self) -> String {
        format!("{}, Milk", self.wrapped.description())
    }

    fn cost(&self) -> f64 {
        self.wrapped.cost() + Self::PRICE
    }
}

pub struct SugarDecorator {
    wrapped: Box<dyn Coffee>,
}

impl SugarDecorator {
    pub const PRICE: f64 = 5.0;

    pub fn new(wrapped: Box<dyn Coffee>) -> Self {
        Self { wrapped }
    }
}

impl Coffee for SugarDecorator {
    fn description(&self) -> String {
        format!("{}, Sugar", self.wrapped.description())
    }

    fn cost(&self) -> f64 {
        self.wrapped.cost() + Self::PRICE
    }
}

/// Fluent wrapping: `coffee.with_milk().with_sugar()`.
pub trait CoffeeExt: Coffee + Sized + 'static {
    fn with_milk(self) -> MilkDecorator {
        MilkDecorator::new(Box::new(self))
    }

    fn with_sugar(self) -> SugarDecorator {
        SugarDecorator::new(Box::new(self))
    }
}

impl<C: Coffee + 'static> CoffeeExt for C {}

fn receipt(coffee: &dyn Coffee) -> String {
    format!("{} -> Rs. {:.1}", coffee.description(), coffee.cost())
}

pub fn demo(console: &mut Console) {
    let mut coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
    console.line(receipt(coffee.as_ref()));

    coffee = Box::new(MilkDecorator::new(coffee));
    console.line(receipt(coffee.as_ref()));

    coffee = Box::new(SugarDecorator::new(coffee));
    console.line(receipt(coffee.as_ref()));

    let double_sugar = SimpleCoffee.with_sugar().with_sugar();
    console.line(receipt(&double_sugar));
}
