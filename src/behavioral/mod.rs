//! Behavioral patterns: how objects hand work to each other.

pub mod chain_of_responsibility;
pub mod command;
pub mod null_object;
pub mod observer;
pub mod state;
pub mod strategy;
pub mod template_method;
pub mod visitor;
