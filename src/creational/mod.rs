//! Creational patterns: who builds objects, and how many.

pub mod abstract_factory;
pub mod builder;
pub mod factory;
pub mod prototype;
pub mod singleton;
