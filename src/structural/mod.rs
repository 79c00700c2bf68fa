//! Structural patterns: composing objects into larger ones.

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod proxy;
