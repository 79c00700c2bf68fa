// Command Pattern: a remote control invoker runs whatever command is loaded.
// Receivers are shared between their on/off commands.

use crate::console::Console;
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// Receivers
// ============================================================================

#[derive(Debug, Default)]
pub struct Light {
    on: bool,
}

impl Light {
    pub fn turn_on(&mut self) -> String {
        self.on = true;
        "Light is ON".to_string()
    }

    pub fn turn_off(&mut self) -> String {
        self.on = false;
        "Light is OFF".to_string()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

#[derive(Debug, Default)]
pub struct Fan {
    running: bool,
}

impl Fan {
    pub fn start(&mut self) -> String {
        self.running = true;
        "Fan is STARTED".to_string()
    }

    pub fn stop(&mut self) -> String {
        self.running = false;
        "Fan is STOPPED".to_string()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

// ============================================================================
// Commands
// ============================================================================

pub trait Command {
    fn execute(&mut self) -> String;
}

pub struct LightOnCommand {
    light: Rc<RefCell<Light>>,
}

impl LightOnCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Command for LightOnCommand {
    fn execute(&mut self) -> String {
        self.light.borrow_mut().turn_on()
    }
}

pub struct LightOffCommand {
    light: Rc<RefCell<Light>>,
}

impl LightOffCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Command for LightOffCommand {
    fn execute(&mut self) -> String {
        self.light.borrow_mut().turn_off()
    }
}

pub struct FanStartCommand {
    fan: Rc<RefCell<Fan>>,
}

impl FanStartCommand {
    pub fn new(fan: Rc<RefCell<Fan>>) -> Self {
        Self { fan }
    }
}

impl Command for FanStartCommand {
    fn execute(&mut self) -> String {
        self.fan.borrow_mut().start()
    }
}

pub struct FanStopCommand {
    fan: Rc<RefCell<Fan>>,
}

impl FanStopCommand {
    pub fn new(fan: Rc<RefCell<Fan>>) -> Self {
        Self { fan }
    }
}

impl Command for FanStopCommand {
    fn execute(&mut self) -> String {
        self.fan.borrow_mut().stop()
    }
}

// ============================================================================
// Invoker
// ============================================================================

#[derive(Default)]
pub struct RemoteControl {
    command: Option<Box<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_command(&mut self, command: Box<dyn Command>) {
        self.command = Some(command);
    }

    /// `None` when no command has been loaded yet.
    pub fn press_button(&mut self) -> Option<String> {
        self.command.as_mut().map(|command| command.execute())
    }
}

pub fn demo(console: &mut Console) {
    let light = Rc::new(RefCell::new(Light::default()));
    let fan = Rc::new(RefCell::new(Fan::default()));

    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(LightOnCommand::new(Rc::clone(&light))),
        Box::new(LightOffCommand::new(Rc::clone(&light))),
        Box::new(FanStartCommand::new(Rc::clone(&fan))),
        Box::new(FanStopCommand::new(Rc::clone(&fan))),
    ];

    let mut remote = RemoteControl::new();
    if remote.press_button().is_none() {
        console.line("Remote has no command loaded.");
    }

    for command in commands {
        remote.set_command(command);
        if let Some(output) = remote.press_button() {
            console.line(output);
        }
    }
}
