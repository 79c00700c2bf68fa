// Adapter Pattern: a legacy service with its own method name is wrapped so
// clients can call it through the interface they expect.

use crate::console::Console;

// Target interface the client code expects
pub trait TargetService {
    fn request(&self) -> String;
}

// Existing service with an incompatible interface
#[derive(Debug, Default)]
pub struct OldService;

impl OldService {
    pub fn old_request(&self) -> String {
        "OldService: handling legacy request".to_string()
    }
}

pub struct AdapterService {
    old_service: OldService,
}

impl AdapterService {
    pub fn new(old_service: OldService) -> Self {
        Self { old_service }
    }
}

impl TargetService for AdapterService {
    fn request(&self) -> String {
        self.old_service.old_request()
    }
}

/// A native implementation, to show clients can't tell the two apart.
pub struct ModernService;

impl TargetService for ModernService {
    fn request(&self) -> String {
        "ModernService: handling request".to_string()
    }
}

fn call(service: &dyn TargetService) -> String {
    service.request()
}

pub fn demo(console: &mut Console) {
    let services: Vec<Box<dyn TargetService>> = vec![
        Box::new(AdapterService::new(OldService)),
        Box::new(ModernService),
    ];

    for service in &services {
        console.line(call(service.as_ref()));
    }
}
