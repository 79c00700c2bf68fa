// Chain of Responsibility: a fixed, singly linked sequence of log handlers.
// The first handler whose level predicate matches writes the message; later
// handlers never see it. Unmatched messages are dropped.

use crate::console::Console;
use tracing::trace;

// ============================================================================
// Handler trait
// ============================================================================

pub trait LogHandler {
    fn name(&self) -> &'static str;
    fn can_handle(&self, level: u8) -> bool;
    fn write(&self, message: &str) -> String;
}

// ============================================================================
// Level-tagged handlers: [DEBUG] / [INFO] / [CRITICAL]
// ============================================================================

pub struct DebugLogger;
impl LogHandler for DebugLogger {
    fn name(&self) -> &'static str {
        "DebugLogger"
    }
    fn can_handle(&self, level: u8) -> bool {
        level == 1
    }
    fn write(&self, message: &str) -> String {
        format!("[DEBUG] {}", message)
    }
}

pub struct InfoLogger;
impl LogHandler for InfoLogger {
    fn name(&self) -> &'static str {
        "InfoLogger"
    }
    fn can_handle(&self, level: u8) -> bool {
        level == 2
    }
    fn write(&self, message: &str) -> String {
        format!("[INFO] {}", message)
    }
}

pub struct CriticalLogger;
impl LogHandler for CriticalLogger {
    fn name(&self) -> &'static str {
        "CriticalLogger"
    }
    fn can_handle(&self, level: u8) -> bool {
        level == 3
    }
    fn write(&self, message: &str) -> String {
        format!("[CRITICAL] {}", message)
    }
}

// ============================================================================
// Destination-named handlers: console / file / error
// ============================================================================

pub struct ConsoleLogger;
impl LogHandler for ConsoleLogger {
    fn name(&self) -> &'static str {
        "ConsoleLogger"
    }
    fn can_handle(&self, level: u8) -> bool {
        level == 1
    }
    fn write(&self, message: &str) -> String {
        format!("Console Logger: {}", message)
    }
}

pub struct FileLogger;
impl LogHandler for FileLogger {
    fn name(&self) -> &'static str {
        "FileLogger"
    }
    fn can_handle(&self, level: u8) -> bool {
        level == 2
    }
    fn write(&self, message: &str) -> String {
        format!("File Logger: {}", message)
    }
}

pub struct ErrorLogger;
impl LogHandler for ErrorLogger {
    fn name(&self) -> &'static str {
        "ErrorLogger"
    }
    fn can_handle(&self, level: u8) -> bool {
        level == 3
    }
    fn write(&self, message: &str) -> String {
        format!("Error Logger: {}", message)
    }
}

// ============================================================================
// The chain
// ============================================================================

struct Link {
    handler: Box<dyn LogHandler>,
    next: Option<Box<Link>>,
}

impl Link {
    fn handle(&self, message: &str, level: u8) -> Option<String> {
        if self.handler.can_handle(level) {
            return Some(self.handler.write(message));
        }
        match &self.next {
            Some(next) => {
                trace!(from = self.handler.name(), to = next.handler.name(), level, "forwarding");
                next.handle(message, level)
            }
            None => {
                trace!(last = self.handler.name(), level, "end of chain, message dropped");
                None
            }
        }
    }
}

/// An ordered handler chain. Immutable once built, so it cannot become cyclic.
pub struct LoggerChain {
    head: Option<Box<Link>>,
}

impl LoggerChain {
    pub fn builder() -> LoggerChainBuilder {
        LoggerChainBuilder {
            handlers: Vec::new(),
        }
    }

    /// Output of the first handler that accepts `level`, or `None`.
    pub fn handle(&self, message: &str, level: u8) -> Option<String> {
        self.head.as_ref().and_then(|head| head.handle(message, level))
    }

    pub fn len(&self) -> usize {
        self.links().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn handler_names(&self) -> Vec<&'static str> {
        self.links().map(|link| link.handler.name()).collect()
    }

    fn links(&self) -> impl Iterator<Item = &Link> {
        std::iter::successors(self.head.as_deref(), |link| link.next.as_deref())
    }
}

pub struct LoggerChainBuilder {
    handlers: Vec<Box<dyn LogHandler>>,
}

impl LoggerChainBuilder {
    pub fn then(mut self, handler: impl LogHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn build(self) -> LoggerChain {
        // Link back to front so each node owns its successor.
        let head = self
            .handlers
            .into_iter()
            .rev()
            .fold(None, |next, handler| Some(Box::new(Link { handler, next })));
        LoggerChain { head }
    }
}

/// Debug -> Info -> Critical
pub fn level_chain() -> LoggerChain {
    LoggerChain::builder()
        .then(DebugLogger)
        .then(InfoLogger)
        .then(CriticalLogger)
        .build()
}

/// Console -> File -> Error
pub fn destination_chain() -> LoggerChain {
    LoggerChain::builder()
        .then(ConsoleLogger)
        .then(FileLogger)
        .then(ErrorLogger)
        .build()
}

fn log_to(console: &mut Console, chain: &LoggerChain, message: &str, level: u8) {
    match chain.handle(message, level) {
        Some(line) => console.line(line),
        None => console.line(format!("(level {} unhandled: \"{}\" dropped)", level, message)),
    }
}

pub fn demo(console: &mut Console) {
    let chain = level_chain();
    console.line(format!("Chain: {}", chain.handler_names().join(" -> ")));
    log_to(console, &chain, "System initialized successfully.", 2);
    log_to(console, &chain, "Variable x value is 42.", 1);
    log_to(console, &chain, "Database connection failed!", 3);

    let chain = destination_chain();
    console.line(format!("Chain: {}", chain.handler_names().join(" -> ")));
    log_to(console, &chain, "This is a Debug message", 1);
    log_to(console, &chain, "This is an Info message", 2);
    log_to(console, &chain, "This is an Error message", 3);
    log_to(console, &chain, "This is a Trace message", 9);
}

// ============================================================================
// Tests
// ============================================================================
