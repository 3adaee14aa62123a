use serde::{Deserialize, Deserializer, Serialize};
use yew::AttrValue;

use crate::error::Error;
use crate::model::role::Role;
use crate::Result;

/// Account record as the backend returns it.
/// The password is write-only and never read back.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<AttrValue>,
    #[serde(default)]
    pub last_name: Option<AttrValue>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub email: Option<AttrValue>,
    #[serde(default)]
    pub username: Option<AttrValue>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub roles: Vec<Role>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Role>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl User {
    pub fn first_name_text(&self) -> AttrValue {
        self.first_name.clone().unwrap_or_default()
    }

    pub fn last_name_text(&self) -> AttrValue {
        self.last_name.clone().unwrap_or_default()
    }

    pub fn email_text(&self) -> AttrValue {
        self.email.clone().unwrap_or_default()
    }

    pub fn age_text(&self) -> String {
        self.age.map(|age| age.to_string()).unwrap_or_default()
    }

    /// `ADMIN, USER`, as shown in the users table
    pub fn roles_joined(&self) -> String {
        self.roles
            .iter()
            .map(|role| role.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `[ADMIN] [USER]`, as shown in the navbar and on the profile
    pub fn roles_bracketed(&self) -> String {
        self.roles
            .iter()
            .map(|role| format!("[{}]", role.name))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn has_role(&self, role_id: i64) -> bool {
        self.roles.iter().any(|role| role.id == role_id)
    }

    /// backend role names come with or without the spring `ROLE_` prefix
    pub fn is_admin(&self) -> bool {
        self.roles
            .iter()
            .any(|role| role.name.trim_start_matches("ROLE_") == "ADMIN")
    }

    pub fn role_ids(&self) -> Vec<String> {
        self.roles.iter().map(Role::option_value).collect()
    }
}

/// Create request body. Role ids travel as strings, the backend parses them.
#[derive(Debug, Default, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub password: String,
    pub role_ids: Vec<String>,
}

/// Update request body. `password` is omitted to keep the current one.
#[derive(Debug, Default, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role_ids: Vec<String>,
}

/// Self-service update body. Password fields travel only as a pair.
#[derive(Debug, Default, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

/// Raw values of the add/edit user form.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UserFormData {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub email: String,
    pub password: String,
    pub role_ids: Vec<String>,
}

impl UserFormData {
    /// Edit form pre-fill. The password field always starts blank.
    pub fn from_user(user: &User) -> Self {
        Self {
            id: Some(user.id),
            first_name: user.first_name_text().to_string(),
            last_name: user.last_name_text().to_string(),
            age: user.age_text(),
            email: user.email_text().to_string(),
            password: String::new(),
            role_ids: user.role_ids(),
        }
    }

    pub fn to_create(&self) -> Result<UserCreate> {
        if self.password.is_empty() {
            return Err(Error::validation("Password is required"));
        }
        Ok(UserCreate {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: parse_age(&self.age)?,
            email: self.email.clone(),
            password: self.password.clone(),
            role_ids: self.role_ids.clone(),
        })
    }

    pub fn to_update(&self) -> Result<(i64, UserUpdate)> {
        let id = self
            .id
            .ok_or_else(|| Error::validation("User id is missing"))?;
        let password = (!self.password.trim().is_empty()).then(|| self.password.clone());
        Ok((
            id,
            UserUpdate {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                age: parse_age(&self.age)?,
                email: self.email.clone(),
                password,
                role_ids: self.role_ids.clone(),
            },
        ))
    }
}

/// Raw values of the edit profile form.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProfileFormData {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub current_password: String,
    pub new_password: String,
}

impl ProfileFormData {
    /// Pre-fill on modal open, password fields cleared.
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name_text().to_string(),
            last_name: user.last_name_text().to_string(),
            age: user.age_text(),
            ..Default::default()
        }
    }

    pub fn to_update(&self) -> Result<ProfileUpdate> {
        let mut update = ProfileUpdate {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: parse_age(&self.age)?,
            current_password: None,
            new_password: None,
        };
        if !self.current_password.is_empty() && !self.new_password.is_empty() {
            update.current_password = Some(self.current_password.clone());
            update.new_password = Some(self.new_password.clone());
        }
        Ok(update)
    }
}

pub fn parse_age(value: &str) -> Result<i32> {
    match value.trim().parse::<i32>() {
        Ok(age) if age >= 0 => Ok(age),
        _ => Err(Error::validation("Age must be a whole number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_JSON: &str = r#"{
        "id": 5,
        "firstName": "Hassan",
        "lastName": "Koroma",
        "age": 23,
        "email": "admin@gmail.com",
        "username": "admin@gmail.com",
        "password": "$2a$10$hash",
        "enabled": true,
        "authorities": [{"authority": "ROLE_ADMIN"}],
        "roles": [
            {"id": 1, "name": "ADMIN", "description": "Administrator role"},
            {"id": 2, "name": "USER"}
        ]
    }"#;

    fn admin() -> User {
        serde_json::from_str(USER_JSON).unwrap()
    }

    #[test]
    fn decodes_backend_user() {
        let user = admin();
        assert_eq!(user.id, 5);
        assert_eq!(user.first_name_text().as_str(), "Hassan");
        assert_eq!(user.age, Some(23));
        assert_eq!(user.roles.len(), 2);
        assert!(user.has_role(1));
        assert!(!user.has_role(3));
    }

    #[test]
    fn password_is_never_serialized_back() {
        let json = serde_json::to_value(admin()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["firstName"], "Hassan");
    }

    #[test]
    fn missing_fields_render_empty() {
        let user: User = serde_json::from_str(r#"{"id": 9, "roles": null}"#).unwrap();
        assert_eq!(user.first_name_text().as_str(), "");
        assert_eq!(user.age_text(), "");
        assert_eq!(user.roles_joined(), "");
        assert_eq!(user.roles_bracketed(), "");
    }

    #[test]
    fn admin_detection() {
        assert!(admin().is_admin());
        let user: User =
            serde_json::from_str(r#"{"id": 3, "roles": [{"id": 2, "name": "USER"}]}"#).unwrap();
        assert!(!user.is_admin());
        let prefixed: User =
            serde_json::from_str(r#"{"id": 4, "roles": [{"id": 1, "name": "ROLE_ADMIN"}]}"#)
                .unwrap();
        assert!(prefixed.is_admin());
    }

    #[test]
    fn role_labels() {
        let user = admin();
        assert_eq!(user.roles_joined(), "ADMIN, USER");
        assert_eq!(user.roles_bracketed(), "[ADMIN] [USER]");
    }

    #[test]
    fn create_payload_sends_role_ids_as_strings() {
        let form = UserFormData {
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            age: " 31 ".into(),
            email: "ann@mail.com".into(),
            password: "secret".into(),
            role_ids: vec!["1".into(), "2".into()],
            ..Default::default()
        };
        let json = serde_json::to_value(form.to_create().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "Ann",
                "lastName": "Lee",
                "age": 31,
                "email": "ann@mail.com",
                "password": "secret",
                "roleIds": ["1", "2"]
            })
        );
    }

    #[test]
    fn create_requires_password_and_numeric_age() {
        let mut form = UserFormData {
            age: "20".into(),
            ..Default::default()
        };
        assert!(matches!(form.to_create(), Err(Error::Validation(_))));
        form.password = "pw".into();
        form.age = "twenty".into();
        assert!(matches!(form.to_create(), Err(Error::Validation(_))));
    }

    #[test]
    fn edit_prefill_keeps_password_blank() {
        let form = UserFormData::from_user(&admin());
        assert_eq!(form.id, Some(5));
        assert_eq!(form.age, "23");
        assert_eq!(form.password, "");
        assert_eq!(form.role_ids, vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn update_omits_blank_password() {
        let mut form = UserFormData::from_user(&admin());
        form.password = "   ".into();
        let (id, update) = form.to_update().unwrap();
        assert_eq!(id, 5);
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("password").is_none());

        form.password = "new-pass".into();
        let (_, update) = form.to_update().unwrap();
        assert_eq!(update.password.as_deref(), Some("new-pass"));
    }

    #[test]
    fn profile_passwords_travel_as_a_pair() {
        let mut form = ProfileFormData::from_user(&admin());
        form.new_password = "next".into();
        let json = serde_json::to_value(form.to_update().unwrap()).unwrap();
        assert!(json.get("newPassword").is_none());
        assert!(json.get("currentPassword").is_none());

        form.current_password = "prev".into();
        let json = serde_json::to_value(form.to_update().unwrap()).unwrap();
        assert_eq!(json["currentPassword"], "prev");
        assert_eq!(json["newPassword"], "next");
        assert_eq!(json["age"], 23);
    }

    #[test]
    fn parse_age_rejects_negative_and_garbage() {
        assert_eq!(parse_age("42").unwrap(), 42);
        assert!(parse_age("-1").is_err());
        assert!(parse_age("").is_err());
        assert!(parse_age("4.5").is_err());
    }
}
