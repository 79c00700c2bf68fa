// Bridge Pattern: shapes (abstraction) and colors (implementor) vary
// independently; each shape owns whichever color it was given.

use crate::console::Console;

pub trait Color {
    fn apply_color(&self) -> String;
}

pub struct RedColor;
impl Color for RedColor {
    fn apply_color(&self) -> String {
        "Applying Red Color".to_string()
    }
}

pub struct BlueColor;
impl Color for BlueColor {
    fn apply_color(&self) -> String {
        "Applying Blue Color".to_string()
    }
}

pub trait Shape {
    fn draw(&self) -> String;
}

pub struct Circle {
    color: Box<dyn Color>,
}

impl Circle {
    pub fn new(color: Box<dyn Color>) -> Self {
        Self { color }
    }
}

impl Shape for Circle {
    fn draw(&self) -> String {
        format!("Drawing Circle with {}", self.color.apply_color())
    }
}

pub struct Square {
    color: Box<dyn Color>,
}

impl Square {
    pub fn new(color: Box<dyn Color>) -> Self {
        Self { color }
    }
}

impl Shape for Square {
    fn draw(&self) -> String {
        format!("Drawing Square with {}", self.color.apply_color())
    }
}

pub fn demo(console: &mut Console) {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(Box::new(RedColor))),
        Box::new(Square::new(Box::new(BlueColor))),
        Box::new(Square::new(Box::new(RedColor))),
    ];

    for shape in &shapes {
        console.line(shape.draw());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Box<dyn Color> {
        Box::new(RedColor)
    }

    fn blue() -> Box<dyn Color> {
        Box::new(BlueColor)
    }

    #[test]
    fn test_every_combination() {
        let colors: [fn() -> Box<dyn Color>; 2] = [red, blue];

        for make_color in colors {
            let color_text = make_color().apply_color();
            assert_eq!(
                Circle::new(make_color()).draw(),
                format!("Drawing Circle with {}", color_text)
            );
            assert_eq!(
                Square::new(make_color()).draw(),
                format!("Drawing Square with {}", color_text)
            );
        }
    }

    #[test]
    fn test_demo_transcript() {
        let mut console = Console::capture();
        demo(&mut console);
        assert_eq!(
            console.transcript(),
            &[
                "Drawing Circle with Applying Red Color",
                "Drawing Square with Applying Blue Color",
                "Drawing Square with Applying Red Color",
            ]
        );
    }
}
