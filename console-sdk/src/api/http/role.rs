use gloo_net::http::Request;
use serde::de::IgnoredAny;

use crate::api::role::RoleApi;
use crate::config::{self, ROLES_BASE};
use crate::model::response::{ApiResponse, Reply};
use crate::model::role::{Role, RoleForm};
use crate::Result;

use super::{request, request_json};

pub struct RoleHttp {
    base: String,
}

impl RoleHttp {
    pub fn new() -> Self {
        Self {
            base: config::endpoint(ROLES_BASE),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl RoleApi for RoleHttp {
    async fn list(&self) -> Result<Vec<Role>> {
        let resp: ApiResponse<Vec<Role>> = request(Request::get(&self.base)).await?;
        resp.into_data()
    }

    async fn create(&self, role: RoleForm) -> Result<Reply<Role>> {
        log::debug!("create role {}", role.name);
        let resp: ApiResponse<Role> = request_json(Request::post(&self.base), &role).await?;
        resp.into_reply()
    }

    async fn delete(&self, id: i64) -> Result<String> {
        let resp: ApiResponse<IgnoredAny> =
            request(Request::delete(&format!("{}/{}", self.base, id))).await?;
        Ok(resp.message().to_string())
    }
}
