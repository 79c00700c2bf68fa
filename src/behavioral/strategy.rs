// Strategy Pattern: the payment method is swapped at runtime without the
// context knowing which one it holds.

use crate::console::Console;

pub trait PaymentStrategy {
    fn pay(&self, amount: u32) -> String;
    fn name(&self) -> &str;
}

pub struct CreditCardPayment;
impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: u32) -> String {
        format!("Paid {} using Credit Card.", amount)
    }

    fn name(&self) -> &str {
        "Credit Card"
    }
}

pub struct PayPalPayment;
impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: u32) -> String {
        format!("Paid {} using PayPal.", amount)
    }

    fn name(&self) -> &str {
        "PayPal"
    }
}

pub struct PaymentContext {
    strategy: Box<dyn PaymentStrategy>,
}

impl PaymentContext {
    pub fn new(strategy: Box<dyn PaymentStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = strategy;
    }

    pub fn make_payment(&self, amount: u32) -> String {
        self.strategy.pay(amount)
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }
}

pub fn demo(console: &mut Console) {
    let mut context = PaymentContext::new(Box::new(CreditCardPayment));
    console.line(context.make_payment(500));

    context.set_strategy(Box::new(PayPalPayment));
    console.line(format!("Switched to: {}", context.strategy_name()));
    console.line(context.make_payment(1500));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_card() {
        let context = PaymentContext::new(Box::new(CreditCardPayment));
        assert_eq!(context.make_payment(500), "Paid 500 using Credit Card.");
        assert_eq!(context.strategy_name(), "Credit Card");
    }

    #[test]
    fn test_strategy_switch() {
        let mut context = PaymentContext::new(Box::new(CreditCardPayment));
        context.set_strategy(Box::new(PayPalPayment));
        assert_eq!(context.make_payment(1500), "Paid 1500 using PayPal.");
        assert_eq!(context.strategy_name(), "PayPal");
    }

    #[test]
    fn test_demo_transcript() {
        let mut console = Console::capture();
        demo(&mut console);
        assert_eq!(
            console.transcript(),
            &["Paid 500 using Credit Card.", "Switched to: PayPal", "Paid 1500 using PayPal."]
        );
    }
}
