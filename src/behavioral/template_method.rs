// Template Method, by composition: `Beverage` owns the fixed recipe skeleton
// and delegates the two varying steps to a `BrewSteps` implementation.

use crate::console::Console;

pub trait BrewSteps {
    fn name(&self) -> &'static str;
    fn brew(&self) -> String;
    fn add_condiments(&self) -> String;
}

pub struct Tea;
impl BrewSteps for Tea {
    fn name(&self) -> &'static str {
        "tea"
    }
    fn brew(&self) -> String {
        "Steeping the tea".to_string()
    }
    fn add_condiments(&self) -> String {
        "Adding lemon".to_string()
    }
}

pub struct Coffee;
impl BrewSteps for Coffee {
    fn name(&self) -> &'static str {
        "coffee"
    }
    fn brew(&self) -> String {
        "Dripping coffee through filter".to_string()
    }
    fn add_condiments(&self) -> String {
        "Adding sugar and milk".to_string()
    }
}

pub struct Beverage<S> {
    steps: S,
}

impl<S: BrewSteps> Beverage<S> {
    pub fn new(steps: S) -> Self {
        Self { steps }
    }

    pub fn name(&self) -> &'static str {
        self.steps.name()
    }

    /// The template: the order of steps is fixed here and nowhere else.
    pub fn prepare_recipe(&self) -> Vec<String> {
        vec![
            boil_water(),
            self.steps.brew(),
            pour_in_cup(),
            self.steps.add_condiments(),
        ]
    }
}

fn boil_water() -> String {
    "Boiling water".to_string()
}

fn pour_in_cup() -> String {
    "Pouring into cup".to_string()
}

pub fn demo(console: &mut Console) {
    let tea = Beverage::new(Tea);
    console.line(format!("Preparing {}:", tea.name()));
    console.lines(tea.prepare_recipe());

    console.blank();

    let coffee = Beverage::new(Coffee);
    console.line(format!("Preparing {}:", coffee.name()));
    console.lines(coffee.prepare_recipe());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tea_recipe() {
        assert_eq!(
            Beverage::new(Tea).prepare_recipe(),
            vec!["Boiling water", "Steeping the tea", "Pouring into cup", "Adding lemon"]
        );
    }

    #[test]
    fn test_shared_steps_fixed_positions() {
        let coffee = Beverage::new(Coffee).prepare_recipe();
        let tea = Beverage::new(Tea).prepare_recipe();

        assert_eq!(coffee[0], tea[0]);
        assert_eq!(coffee[2], tea[2]);
        assert_eq!(coffee[1], "Dripping coffee through filter");
        assert_eq!(coffee[3], "Adding sugar and milk");
    }

    #[test]
    fn test_demo_transcript() {
        let mut console = Console::capture();
        demo(&mut console);
        let lines = console.transcript();
        assert_eq!(lines[0], "Preparing tea:");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "Preparing coffee:");
        assert_eq!(lines.len(), 11);
    }
}
