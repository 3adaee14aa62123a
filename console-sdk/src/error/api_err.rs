use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

use super::REQUEST_FAILED;

/// Failure body returned by the backend, `{"success": false, "message": "..."}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Error {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.message())
    }
}

impl Error {
    pub fn unknown_error() -> Self {
        Error {
            success: false,
            message: None,
        }
    }

    /// Server message, or the generic fallback when it is absent or blank.
    pub fn message(&self) -> String {
        match &self.message {
            Some(msg) if !msg.trim().is_empty() => msg.clone(),
            _ => REQUEST_FAILED.to_string(),
        }
    }

    /// Parses a raw failure body; anything unreadable yields the fallback.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| Self::unknown_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_server_message() {
        let err = Error::from_body(r#"{"success":false,"message":"User not found with ID: 3"}"#);
        assert_eq!(err.message(), "User not found with ID: 3");
    }

    #[test]
    fn falls_back_when_body_is_not_json() {
        assert_eq!(Error::from_body("<html>502</html>").message(), REQUEST_FAILED);
        assert_eq!(Error::from_body("").message(), REQUEST_FAILED);
    }

    #[test]
    fn falls_back_when_message_missing_or_blank() {
        assert_eq!(Error::from_body(r#"{"success":false}"#).message(), REQUEST_FAILED);
        assert_eq!(
            Error::from_body(r#"{"success":false,"message":"  "}"#).message(),
            REQUEST_FAILED
        );
        assert_eq!(
            Error::from_body(r#"{"success":false,"message":null}"#).message(),
            REQUEST_FAILED
        );
    }
}
