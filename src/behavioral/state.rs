// State Pattern: a vending machine whose behavior depends on a single
// current-state slot. States are stateless values; the machine swaps them.

use crate::console::Console;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineState {
    NoCoinInserted,
    CoinInserted,
    Dispensing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    InsertCoin,
    PressButton,
    Dispense,
}

/// Outcome of applying an action to a state: where to go and what to say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: MachineState,
    pub message: &'static str,
}

impl MachineState {
    /// The full transition table. Out-of-order actions keep the state.
    pub fn on(self, action: Action) -> Transition {
        use Action::*;
        use MachineState::*;

        let (next, message) = match (self, action) {
            (NoCoinInserted, InsertCoin) => (CoinInserted, "Coin inserted."),
            (NoCoinInserted, PressButton) => (NoCoinInserted, "Please insert a coin first."),
            (NoCoinInserted, Dispense) => (NoCoinInserted, "Insert a coin before dispensing."),

            (CoinInserted, InsertCoin) => (CoinInserted, "Coin already inserted."),
            (CoinInserted, PressButton) => (Dispensing, "Button pressed. Dispensing item..."),
            (CoinInserted, Dispense) => (CoinInserted, "Press the button to dispense."),

            (Dispensing, InsertCoin) => (Dispensing, "Wait! Currently dispensing an item."),
            (Dispensing, PressButton) => (Dispensing, "Already dispensing an item."),
            (Dispensing, Dispense) => (NoCoinInserted, "Item dispensed."),
        };

        Transition { next, message }
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            MachineState::NoCoinInserted => "NoCoinInserted",
            MachineState::CoinInserted => "CoinInserted",
            MachineState::Dispensing => "Dispensing",
        };
        f.write_str(name)
    }
}

pub struct VendingMachine {
    state: MachineState,
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl VendingMachine {
    pub fn new() -> Self {
        Self {
            state: MachineState::NoCoinInserted,
        }
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    pub fn insert_coin(&mut self) -> &'static str {
        self.apply(Action::InsertCoin)
    }

    pub fn press_button(&mut self) -> &'static str {
        self.apply(Action::PressButton)
    }

    pub fn dispense(&mut self) -> &'static str {
        self.apply(Action::Dispense)
    }

    fn apply(&mut self, action: Action) -> &'static str {
        let transition = self.state.on(action);
        if transition.next != self.state {
            debug!(from = %self.state, to = %transition.next, ?action, "vending machine transition");
            self.state = transition.next;
        }
        transition.message
    }
}

pub fn demo(console: &mut Console) {
    let mut machine = VendingMachine::new();

    console.line(machine.press_button());
    console.line(machine.insert_coin());
    console.line(machine.press_button());
    console.line(machine.insert_coin());
    console.line(machine.dispense());
    console.line(format!("Machine is back in state: {}", machine.state()));
}
