// Factory Pattern: callers ask for a shape by name and get a trait object
// back. Unknown names are rejected, not mapped to a default.

use crate::console::Console;
use crate::error::{PatternError, Result};
use tracing::warn;

pub trait Shape {
    fn draw(&self) -> String;
}

pub struct Circle;
impl Shape for Circle {
    fn draw(&self) -> String {
        "Drawing a Circle".to_string()
    }
}

pub struct Rectangle;
impl Shape for Rectangle {
    fn draw(&self) -> String {
        "Drawing a Rectangle".to_string()
    }
}

pub struct ShapeFactory;

impl ShapeFactory {
    pub const KINDS: [&'static str; 2] = ["circle", "rectangle"];

    pub fn shape(kind: &str) -> Result<Box<dyn Shape>> {
        match kind.to_lowercase().as_str() {
            "circle" => Ok(Box::new(Circle)),
            "rectangle" => Ok(Box::new(Rectangle)),
            _ => {
                warn!(kind, "rejected shape type");
                Err(PatternError::unknown_shape(kind))
            }
        }
    }
}

pub fn demo(console: &mut Console) {
    for kind in ["circle", "rectangle", "triangle"] {
        match ShapeFactory::shape(kind) {
            Ok(shape) => console.line(shape.draw()),
            Err(err) => console.line(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds() {
        for kind in ShapeFactory::KINDS {
            assert!(ShapeFactory::shape(kind).is_ok(), "{} should be known", kind);
        }
        assert_eq!(ShapeFactory::shape("circle").unwrap().draw(), "Drawing a Circle");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            ShapeFactory::shape("RECTANGLE").unwrap().draw(),
            "Drawing a Rectangle"
        );
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let err = ShapeFactory::shape("triangle").err().unwrap();
        assert!(matches!(err, PatternError::UnknownShape(ref kind) if kind == "triangle"));
        assert_eq!(err.to_string(), "Unknown shape type: triangle");
    }

    #[test]
    fn test_demo_transcript() {
        let mut console = Console::capture();
        demo(&mut console);
        assert_eq!(
            console.transcript(),
            &["Drawing a Circle", "Drawing a Rectangle", "Unknown shape type: triangle"]
        );
    }
}
