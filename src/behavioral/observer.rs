// Observer Pattern: a stock market pushes every price change to its
// registered observers, in registration order.

use crate::console::Console;
use tracing::debug;

pub trait Observer {
    fn update(&self, stock: &str, price: f64) -> String;
}

/// `{:?}` keeps the trailing `.0` on whole prices: `$300.0`, not `$300`.
fn update_line(name: &str, stock: &str, price: f64) -> String {
    format!("{} received an update: Stock {} is now ${:?}", name, stock, price)
}

pub struct MobileApp {
    name: String,
}

impl MobileApp {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Observer for MobileApp {
    fn update(&self, stock: &str, price: f64) -> String {
        update_line(&self.name, stock, price)
    }
}

pub struct Website {
    name: String,
}

impl Website {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Observer for Website {
    fn update(&self, stock: &str, price: f64) -> String {
        update_line(&self.name, stock, price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

pub trait Subject {
    fn register_observer(&mut self, observer: Box<dyn Observer>) -> ObserverId;
    fn remove_observer(&mut self, id: ObserverId) -> bool;
    fn notify_observers(&self) -> Vec<String>;
}

#[derive(Default)]
pub struct StockMarket {
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    next_id: usize,
    quote: Option<(String, f64)>,
}

impl StockMarket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the quote and notify everyone.
    pub fn set_stock_price(&mut self, stock: impl Into<String>, price: f64) -> Vec<String> {
        self.quote = Some((stock.into(), price));
        self.notify_observers()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Subject for StockMarket {
    fn register_observer(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        debug!(id = id.0, total = self.observers.len(), "observer registered");
        id
    }

    fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        let removed = self.observers.len() < before;
        debug!(id = id.0, removed, "observer removal");
        removed
    }

    fn notify_observers(&self) -> Vec<String> {
        match &self.quote {
            Some((stock, price)) => self
                .observers
                .iter()
                .map(|(_, observer)| observer.update(stock, *price))
                .collect(),
            None => Vec::new(),
        }
    }
}

pub fn demo(console: &mut Console) {
    let mut market = StockMarket::new();

    let mobile = market.register_observer(Box::new(MobileApp::new("StockApp")));
    market.register_observer(Box::new(Website::new("FinanceWebsite")));

    console.lines(market.set_stock_price("AAPL", 145.67));
    console.lines(market.set_stock_price("GOOGL", 2732.45));

    market.remove_observer(mobile);
    console.lines(market.set_stock_price("MSFT", 299.89));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_in_registration_order() {
        let mut market = StockMarket::new();
        market.register_observer(Box::new(MobileApp::new("A")));
        market.register_observer(Box::new(Website::new("B")));

        let updates = market.set_stock_price("AAPL", 145.67);
        assert_eq!(
            updates,
            vec![
                "A received an update: Stock AAPL is now $145.67",
                "B received an update: Stock AAPL is now $145.67",
            ]
        );
    }

    #[test]
    fn test_removed_observer_not_notified() {
        let mut market = StockMarket::new();
        let a = market.register_observer(Box::new(MobileApp::new("A")));
        market.register_observer(Box::new(Website::new("B")));

        assert!(market.remove_observer(a));
        assert!(!market.remove_observer(a));
        assert_eq!(market.observer_count(), 1);

        let updates = market.set_stock_price("MSFT", 299.89);
        assert_eq!(updates.len(), 1);
        assert!(updates[0].starts_with("B "));
    }

    #[test]
    fn test_whole_price_keeps_decimal() {
        let mut market = StockMarket::new();
        market.register_observer(Box::new(Website::new("B")));

        let updates = market.set_stock_price("IBM", 300.0);
        assert_eq!(updates, vec!["B received an update: Stock IBM is now $300.0"]);
    }

    #[test]
    fn test_no_quote_no_notifications() {
        let mut market = StockMarket::new();
        market.register_observer(Box::new(MobileApp::new("A")));
        assert!(market.notify_observers().is_empty());
    }

    #[test]
    fn test_demo_transcript() {
        let mut console = Console::capture();
        demo(&mut console);
        let lines = console.transcript();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "StockApp received an update: Stock AAPL is now $145.67");
        assert_eq!(lines[3], "FinanceWebsite received an update: Stock GOOGL is now $2732.45");
        assert_eq!(lines[4], "FinanceWebsite received an update: Stock MSFT is now $299.89");
    }
}
