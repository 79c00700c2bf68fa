use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PatternError>;

#[derive(Error, Debug)]
pub enum PatternError {
    // Invalid argument: an unrecognized category string
    #[error("Unknown shape type: {0}")]
    UnknownShape(String),

    #[error("Unknown OS type: {0}")]
    UnknownOsType(String),

    #[error("Unknown pattern: '{0}' (try `patterns list`)")]
    UnknownPattern(String),

    #[error("Unknown category: '{0}' (expected behavioral, creational or structural)")]
    UnknownCategory(String),

    // Illegal state
    #[error("{0} instance already created")]
    AlreadyInitialized(&'static str),

    // Unsupported operation
    #[error("{0} is not supported")]
    Unsupported(&'static str),

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl PatternError {
    pub fn unknown_shape(kind: impl Into<String>) -> Self {
        Self::UnknownShape(kind.into())
    }

    pub fn unknown_os_type(os: impl Into<String>) -> Self {
        Self::UnknownOsType(os.into())
    }

    pub fn unknown_pattern(name: impl Into<String>) -> Self {
        Self::UnknownPattern(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_messages() {
        assert_eq!(
            PatternError::unknown_shape("triangle").to_string(),
            "Unknown shape type: triangle"
        );
        assert_eq!(
            PatternError::unknown_os_type("beos").to_string(),
            "Unknown OS type: beos"
        );
        assert_eq!(
            PatternError::unknown_pattern("flyweight").to_string(),
            "Unknown pattern: 'flyweight' (try `patterns list`)"
        );
    }

    #[test]
    fn test_state_error_messages() {
        let err = PatternError::AlreadyInitialized("Singleton");
        assert_eq!(err.to_string(), "Singleton instance already created");
        assert_eq!(
            PatternError::Unsupported("Cloning a Singleton").to_string(),
            "Cloning a Singleton is not supported"
        );
    }
}
