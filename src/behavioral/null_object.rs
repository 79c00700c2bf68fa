// Null Object Pattern: a do-nothing customer stands in for a missing one,
// so callers never branch on absence.

use crate::console::Console;

pub trait Customer {
    /// The line that would be sent, or `None` when nothing is sent.
    fn send_promotional_email(&self) -> Option<String>;
    fn is_nil(&self) -> bool;
}

pub struct RealCustomer {
    email: String,
}

impl RealCustomer {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl Customer for RealCustomer {
    fn send_promotional_email(&self) -> Option<String> {
        Some(format!("Sending email to: {}", self.email))
    }

    fn is_nil(&self) -> bool {
        false
    }
}

pub struct NullCustomer;

impl Customer for NullCustomer {
    fn send_promotional_email(&self) -> Option<String> {
        None
    }

    fn is_nil(&self) -> bool {
        true
    }
}

pub struct CustomerFactory;

impl CustomerFactory {
    pub fn customer(email: Option<&str>) -> Box<dyn Customer> {
        match email {
            Some(email) if !email.is_empty() => Box::new(RealCustomer::new(email)),
            _ => Box::new(NullCustomer),
        }
    }
}

pub fn demo(console: &mut Console) {
    let customers = [
        CustomerFactory::customer(Some("john@example.com")),
        CustomerFactory::customer(None),
        CustomerFactory::customer(Some("")),
    ];

    for customer in &customers {
        if let Some(sent) = customer.send_promotional_email() {
            console.line(sent);
        }
    }

    let skipped = customers.iter().filter(|c| c.is_nil()).count();
    console.line(format!("{} null customer(s) silently skipped", skipped));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_customer_sends() {
        let customer = CustomerFactory::customer(Some("a@b.c"));
        assert!(!customer.is_nil());
        assert_eq!(
            customer.send_promotional_email().as_deref(),
            Some("Sending email to: a@b.c")
        );
    }

    #[test]
    fn test_missing_and_empty_emails_are_null() {
        for email in [None, Some("")] {
            let customer = CustomerFactory::customer(email);
            assert!(customer.is_nil());
            assert_eq!(customer.send_promotional_email(), None);
        }
    }

    #[test]
    fn test_demo_transcript() {
        let mut console = Console::capture();
        demo(&mut console);
        assert_eq!(
            console.transcript(),
            &[
                "Sending email to: john@example.com",
                "2 null customer(s) silently skipped",
            ]
        );
    }
}
