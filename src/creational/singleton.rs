// Singleton Pattern with OnceLock.
//
// `Singleton::instance()` is the only way to reach the value. The private
// construction path refuses to run twice. The type is not `Clone`, and
// `try_clone` reports the attempt as an unsupported operation. Deserializing
// never builds a second value: it resolves to the live instance.

use crate::console::Console;
use crate::error::{PatternError, Result};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

static INSTANCE: OnceLock<Singleton> = OnceLock::new();
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Serialize)]
pub struct Singleton {
    created_at_ms: u128,
}

impl Singleton {
    /// Process-wide instance, created on first access. Concurrent first
    /// callers block until the one initializer finishes.
    pub fn instance() -> &'static Singleton {
        INSTANCE.get_or_init(|| match Self::construct() {
            Ok(singleton) => singleton,
            // Only reachable if `construct` ran outside `instance`.
            Err(err) => panic!("{}", err),
        })
    }

    fn construct() -> Result<Self> {
        if CONSTRUCTIONS
            .compare_exchange(0, 1, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(PatternError::AlreadyInitialized("Singleton"));
        }

        let created_at_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        debug!(created_at_ms, "singleton constructed");

        Ok(Self { created_at_ms })
    }

    pub fn try_clone(&self) -> Result<Singleton> {
        Err(PatternError::Unsupported("Cloning a Singleton"))
    }

    /// Number of instances ever constructed in this process: 0 or 1.
    pub fn construction_count() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    pub fn created_at_ms(&self) -> u128 {
        self.created_at_ms
    }
}

/// The payload is read and discarded; the result is always `Singleton::instance()`.
impl<'de> Deserialize<'de> for &'static Singleton {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IgnoredAny::deserialize(deserializer)?;
        debug!("deserialized singleton resolved to the existing instance");
        Ok(Singleton::instance())
    }
}

pub fn demo(console: &mut Console) {
    let instance1 = Singleton::instance();
    let instance2 = Singleton::instance();

    console.line(format!("Instance 1 address: {:p}", instance1));
    console.line(format!("Instance 2 address: {:p}", instance2));
    console.line(format!(
        "Both instances are the same: {}",
        std::ptr::eq(instance1, instance2)
    ));

    match serde_json::to_string(instance1)
        .and_then(|json| serde_json::from_str::<&'static Singleton>(&json))
    {
        Ok(restored) => console.line(format!(
            "Deserialized instance is the same: {}",
            std::ptr::eq(instance1, restored)
        )),
        Err(err) => console.line(format!("Round trip failed: {}", err)),
    }

    if let Err(err) = instance1.try_clone() {
        console.line(err.to_string());
    }
    console.line(format!("Constructions so far: {}", Singleton::construction_count()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_instance() {
        let a = Singleton::instance();
        let b = Singleton::instance();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.created_at_ms(), b.created_at_ms());
        assert_eq!(Singleton::construction_count(), 1);
    }

    #[test]
    fn test_second_construction_is_illegal_state() {
        Singleton::instance();
        let err = Singleton::construct().unwrap_err();
        assert!(matches!(err, PatternError::AlreadyInitialized("Singleton")));
        assert_eq!(Singleton::construction_count(), 1);
    }

    #[test]
    fn test_clone_unsupported() {
        let err = Singleton::instance().try_clone().unwrap_err();
        assert!(matches!(err, PatternError::Unsupported(_)));
        assert_eq!(err.to_string(), "Cloning a Singleton is not supported");
    }

    #[test]
    fn test_deserialize_resolves_to_instance() {
        let instance = Singleton::instance();
        let json = serde_json::to_string(instance).unwrap();
        assert!(json.contains("created_at_ms"));

        let restored: &'static Singleton = serde_json::from_str(&json).unwrap();
        assert!(std::ptr::eq(restored, instance));
        assert_eq!(Singleton::construction_count(), 1);
    }

    #[test]
    fn test_deserialize_ignores_payload() {
        let restored: &'static Singleton =
            serde_json::from_str(r#"{"created_at_ms": 7}"#).unwrap();
        assert!(std::ptr::eq(restored, Singleton::instance()));
        assert_ne!(restored.created_at_ms(), 7);
        assert_eq!(Singleton::construction_count(), 1);
    }

    #[test]
    fn test_demo_transcript() {
        let mut console = Console::capture();
        demo(&mut console);
        let lines = console.transcript();
        assert_eq!(lines[0].replace("Instance 1", "Instance 2"), lines[1]);
        assert_eq!(lines[2], "Both instances are the same: true");
        assert_eq!(lines[3], "Deserialized instance is the same: true");
        assert_eq!(lines[4], "Cloning a Singleton is not supported");
        assert_eq!(lines[5], "Constructions so far: 1");
    }
}
