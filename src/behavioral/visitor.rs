// Visitor Pattern over a closed set of shapes. `accept` dispatches by an
// explicit match, so adding a visitor never touches the shapes.

use crate::console::Console;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { length: f64, width: f64 },
    Triangle { base: f64, height: f64 },
}

pub trait ShapeVisitor {
    type Output;

    fn visit_circle(&self, radius: f64) -> Self::Output;
    fn visit_rectangle(&self, length: f64, width: f64) -> Self::Output;
    fn visit_triangle(&self, base: f64, height: f64) -> Self::Output;
}

impl Shape {
    pub fn accept<V: ShapeVisitor>(&self, visitor: &V) -> V::Output {
        match *self {
            Shape::Circle { radius } => visitor.visit_circle(radius),
            Shape::Rectangle { length, width } => visitor.visit_rectangle(length, width),
            Shape::Triangle { base, height } => visitor.visit_triangle(base, height),
        }
    }
}

pub struct AreaVisitor;

impl ShapeVisitor for AreaVisitor {
    type Output = f64;

    fn visit_circle(&self, radius: f64) -> f64 {
        PI * radius * radius
    }

    fn visit_rectangle(&self, length: f64, width: f64) -> f64 {
        length * width
    }

    fn visit_triangle(&self, base: f64, height: f64) -> f64 {
        0.5 * base * height
    }
}

pub struct PrintVisitor;

impl ShapeVisitor for PrintVisitor {
    type Output = String;

    fn visit_circle(&self, _radius: f64) -> String {
        "This is a Circle.".to_string()
    }

    fn visit_rectangle(&self, _length: f64, _width: f64) -> String {
        "This is a Rectangle.".to_string()
    }

    fn visit_triangle(&self, _base: f64, _height: f64) -> String {
        "This is a Triangle.".to_string()
    }
}

fn kind(shape: &Shape) -> &'static str {
    match shape {
        Shape::Circle { .. } => "Circle",
        Shape::Rectangle { .. } => "Rectangle",
        Shape::Triangle { .. } => "Triangle",
    }
}

pub fn demo(console: &mut Console) {
    let shapes = [
        Shape::Circle { radius: 5.0 },
        Shape::Rectangle {
            length: 4.0,
            width: 6.0,
        },
        Shape::Triangle {
            base: 4.0,
            height: 3.0,
        },
    ];

    for shape in &shapes {
        let area = shape.accept(&AreaVisitor);
        console.line(format!("Area of {}: {:.2}", kind(shape), area));
    }

    for shape in &shapes {
        console.line(shape.accept(&PrintVisitor));
    }

    let total: f64 = shapes.iter().map(|s| s.accept(&AreaVisitor)).sum();
    console.line(format!("Total area: {:.2}", total));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_areas() {
        let circle = Shape::Circle { radius: 5.0 };
        let rect = Shape::Rectangle {
            length: 4.0,
            width: 6.0,
        };
        let tri = Shape::Triangle {
            base: 4.0,
            height: 3.0,
        };

        assert!((circle.accept(&AreaVisitor) - 78.5398).abs() < 1e-3);
        assert_eq!(rect.accept(&AreaVisitor), 24.0);
        assert_eq!(tri.accept(&AreaVisitor), 6.0);
    }

    #[test]
    fn test_print_visitor() {
        assert_eq!(
            Shape::Triangle {
                base: 1.0,
                height: 1.0
            }
            .accept(&PrintVisitor),
            "This is a Triangle."
        );
    }

    #[test]
    fn test_custom_visitor_without_touching_shapes() {
        struct SideCount;
        impl ShapeVisitor for SideCount {
            type Output = u32;
            fn visit_circle(&self, _: f64) -> u32 {
                0
            }
            fn visit_rectangle(&self, _: f64, _: f64) -> u32 {
                4
            }
            fn visit_triangle(&self, _: f64, _: f64) -> u32 {
                3
            }
        }

        let shape = Shape::Rectangle {
            length: 1.0,
            width: 2.0,
        };
        assert_eq!(shape.accept(&SideCount), 4);
    }

    #[test]
    fn test_demo_transcript() {
        let mut console = Console::capture();
        demo(&mut console);
        let lines = console.transcript();
        assert_eq!(lines[0], "Area of Circle: 78.54");
        assert_eq!(lines[1], "Area of Rectangle: 24.00");
        assert_eq!(lines[2], "Area of Triangle: 6.00");
        assert_eq!(lines[3], "This is a Circle.");
        assert_eq!(lines[6], "Total area: 108.54");
    }
}
