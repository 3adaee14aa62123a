//! Where the backend lives and a few fixed UI timings.

pub const ADMIN_BASE: &str = "/api/admin";
pub const USER_BASE: &str = "/api/user";
pub const ROLES_BASE: &str = "/api/roles";
pub const LOGOUT_URL: &str = "/logout";

/// local storage key overriding the compiled-in api origin
pub const API_ORIGIN_KEY: &str = "api_origin";

/// alerts close themselves after this many milliseconds
pub const ALERT_DELAY: u32 = 5000;

/// Origin prefixed to every api path. Empty means same origin.
pub fn api_origin() -> String {
    utils::get_local_storage(API_ORIGIN_KEY)
        .filter(|origin| !origin.trim().is_empty())
        .unwrap_or_else(|| option_env!("CONSOLE_API_ORIGIN").unwrap_or_default().to_string())
}

pub fn endpoint(base: &str) -> String {
    join(&api_origin(), base)
}

fn join(origin: &str, base: &str) -> String {
    format!("{}{}", origin.trim().trim_end_matches('/'), base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_origin_by_default() {
        assert_eq!(join("", ADMIN_BASE), "/api/admin");
    }

    #[test]
    fn origin_trailing_slash_is_dropped() {
        assert_eq!(
            join("http://localhost:8080/", USER_BASE),
            "http://localhost:8080/api/user"
        );
        assert_eq!(
            join(" https://console.example ", ROLES_BASE),
            "https://console.example/api/roles"
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_overrides_origin() {
        utils::set_local_storage(API_ORIGIN_KEY, "http://localhost:8080").unwrap();
        assert_eq!(endpoint(ADMIN_BASE), "http://localhost:8080/api/admin");

        utils::set_local_storage(API_ORIGIN_KEY, "  ").unwrap();
        assert_eq!(
            endpoint(ADMIN_BASE),
            join(option_env!("CONSOLE_API_ORIGIN").unwrap_or_default(), ADMIN_BASE)
        );
    }
}
