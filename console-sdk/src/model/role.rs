use serde::{Deserialize, Serialize};
use yew::AttrValue;

use crate::error::Error;
use crate::Result;

/// Permission label attached to a user, e.g. `ADMIN` or `USER`.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    #[serde(default)]
    pub name: AttrValue,
    #[serde(default)]
    pub description: Option<AttrValue>,
}

impl Role {
    /// value used by role `<option>`s and sent back as a role id
    pub fn option_value(&self) -> String {
        self.id.to_string()
    }
}

/// Body of a role create request.
#[derive(Debug, Default, Clone, Serialize, PartialEq)]
pub struct RoleForm {
    pub name: String,
}

impl RoleForm {
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("Role name is required"));
        }
        Ok(Self {
            name: name.to_uppercase(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_ignores_unknown_fields() {
        let role: Role =
            serde_json::from_str(r#"{"id":2,"name":"USER","authority":"ROLE_USER"}"#).unwrap();
        assert_eq!(role.id, 2);
        assert_eq!(role.name.as_str(), "USER");
        assert_eq!(role.description, None);
        assert_eq!(role.option_value(), "2");
    }

    #[test]
    fn role_form_is_trimmed_and_uppercased() {
        assert_eq!(RoleForm::new("  manager ").unwrap().name, "MANAGER");
        assert!(matches!(RoleForm::new("   "), Err(Error::Validation(_))));
    }
}
