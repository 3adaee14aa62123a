use serde::Deserialize;
use yew::AttrValue;

use crate::error::Error;
use crate::Result;

/// Envelope wrapping every backend response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn message(&self) -> AttrValue {
        self.message.clone().map(AttrValue::from).unwrap_or_default()
    }

    pub fn into_data(self) -> Result<T> {
        self.data
            .ok_or_else(|| Error::Decode("response carries no data".to_string()))
    }

    pub fn into_reply(self) -> Result<Reply<T>> {
        let message = self.message();
        Ok(Reply {
            message,
            data: self.into_data()?,
        })
    }
}

/// Outcome of a mutation: the server's message plus the affected record.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub message: AttrValue,
    pub data: T,
}

#[cfg(test)]
mod tests {
    use serde::de::IgnoredAny;

    use super::*;
    use crate::model::user::User;

    #[test]
    fn list_envelope() {
        let resp: ApiResponse<Vec<User>> = serde_json::from_str(
            r#"{"success":true,"message":"Users retrieved successfully","data":[{"id":1},{"id":2}]}"#,
        )
        .unwrap();
        assert!(resp.success);
        let users = resp.into_data().unwrap();
        assert_eq!(users.len(), 2);
    }

    #[test]
    fn reply_keeps_server_message() {
        let resp: ApiResponse<User> = serde_json::from_str(
            r#"{"success":true,"message":"User created successfully","data":{"id":4}}"#,
        )
        .unwrap();
        let reply = resp.into_reply().unwrap();
        assert_eq!(reply.message.as_str(), "User created successfully");
        assert_eq!(reply.data.id, 4);
    }

    #[test]
    fn delete_envelope_has_no_data() {
        let resp: ApiResponse<IgnoredAny> =
            serde_json::from_str(r#"{"success":true,"message":"User deleted successfully"}"#)
                .unwrap();
        assert_eq!(resp.message().as_str(), "User deleted successfully");
        assert!(resp.into_data().is_err());
    }
}
