//! Error types for the desktop simulation
//!
//! Nothing in the desktop fails in a way the visitor can see. These errors
//! exist so callers can tell "nothing happened because the id was unknown"
//! apart from a real state change, and so bad configuration is rejected
//! up front.

/// Errors that can occur in desktop operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// Desktop icon with the given ID was not found
    IconNotFound(String),

    /// Open window with the given ID was not found
    WindowNotFound(String),

    /// Dock item with the given ID was not found
    DockItemNotFound(String),

    /// A configuration value is out of range
    InvalidConfig {
        /// The offending field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IconNotFound(id) => write!(f, "icon not found: {}", id),
            Self::WindowNotFound(id) => write!(f, "window not found: {}", id),
            Self::DockItemNotFound(id) => write!(f, "dock item not found: {}", id),
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config '{}': {}", field, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DesktopError::IconNotFound("synto".to_string());
        assert_eq!(err.to_string(), "icon not found: synto");

        let err = DesktopError::WindowNotFound("notes".to_string());
        assert_eq!(err.to_string(), "window not found: notes");

        let err = DesktopError::DockItemNotFound("finder".to_string());
        assert_eq!(err.to_string(), "dock item not found: finder");

        let err = DesktopError::InvalidConfig {
            field: "edge_margin",
            reason: "must be non-negative",
        };
        assert_eq!(
            err.to_string(),
            "invalid config 'edge_margin': must be non-negative"
        );
    }

    #[test]
    fn test_error_equality() {
        let err1 = DesktopError::WindowNotFound("a".to_string());
        let err2 = DesktopError::WindowNotFound("a".to_string());
        let err3 = DesktopError::WindowNotFound("b".to_string());

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn test_from_json_error() {
        let err: DesktopError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, DesktopError::SerializationError(_)));
    }
}
