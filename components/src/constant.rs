// i18n message keys shared by several components
pub const ID: &str = "id";
pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const AGE: &str = "age";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const ROLE: &str = "role";
pub const CLOSE: &str = "close";
pub const CANCEL: &str = "cancel";
pub const SAVE: &str = "save";
pub const DELETE: &str = "delete";
pub const EDIT: &str = "edit";
pub const NO_ROLES: &str = "no_roles";

// spinner shown on buttons and tables while a request is in flight
pub const SPINNER: &str = "spinner-border spinner-border-sm";
pub const HIDDEN: &str = "d-none";
