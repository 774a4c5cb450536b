use std::io;
use thiserror::Error;

pub type RosterResult<T> = Result<T, RosterError>;

/// Errors raised by the employee store, its durable slot and configuration
#[derive(Error, Debug)]
pub enum RosterError {
    /// IO error (file system access for slots and config)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization of the record collection failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be written
    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// Durable slot rejected a read or write
    #[error("Slot '{slot}' error: {message}")]
    Slot { slot: String, message: String },

    /// A store lock was poisoned by a panicking writer
    #[error("Lock error: {0}")]
    Lock(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RosterError {
    /// Create a new slot error
    pub fn slot<S: Into<String>, M: Into<String>>(slot: S, message: M) -> Self {
        RosterError::Slot {
            slot: slot.into(),
            message: message.into(),
        }
    }

    /// Create a new lock error
    pub fn lock<S: Into<String>>(msg: S) -> Self {
        RosterError::Lock(msg.into())
    }

    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        RosterError::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_error_display() {
        let err = RosterError::slot("employee_records", "quota exceeded");
        assert_eq!(
            err.to_string(),
            "Slot 'employee_records' error: quota exceeded"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: Result<Vec<u32>, _> = serde_json::from_str("not json");
        let err: RosterError = parse.unwrap_err().into();
        assert!(matches!(err, RosterError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }
}
