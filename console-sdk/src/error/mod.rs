use thiserror::Error;

use crate::Reason;

pub mod api_err;

/// Message used when the server gives us nothing better.
pub const REQUEST_FAILED: &str = "Request failed";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// non-2xx response, carries the server message
    #[error("{0}")]
    Api(Reason),
    /// request could not be sent or the body could not be read
    #[error("{0}")]
    Network(Reason),
    /// body was read but did not match the expected shape
    #[error("{0}")]
    Decode(Reason),
    /// rejected locally before any request was made
    #[error("{0}")]
    Validation(Reason),
    /// js related error
    #[error("{0}")]
    JavaScript(Reason),
}

impl Error {
    pub fn api(err: api_err::Error) -> Self {
        Error::Api(err.message())
    }

    pub fn validation(reason: impl ToString) -> Self {
        Error::Validation(reason.to_string())
    }
}

impl From<gloo_net::Error> for Error {
    #[allow(unreachable_patterns)]
    fn from(value: gloo_net::Error) -> Self {
        match value {
            gloo_net::Error::SerdeError(err) => Error::Decode(err.to_string()),
            gloo_net::Error::JsError(err) => Error::JavaScript(err.to_string()),
            gloo_net::Error::GlooError(err) => Error::Network(err),
            other => Error::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Decode(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_reason() {
        let err = Error::Api("User not found with ID: 7".to_string());
        assert_eq!(err.to_string(), "User not found with ID: 7");
        assert_eq!(
            Error::validation("Age must be a number").to_string(),
            "Age must be a number"
        );
    }

    #[test]
    fn serde_error_becomes_decode() {
        let err: Error = serde_json::from_str::<i32>("not json").unwrap_err().into();
        assert!(matches!(err, Error::Decode(_)));
    }
}
