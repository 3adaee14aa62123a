use gloo_net::http::Request;
use serde::de::IgnoredAny;

use crate::api::admin::AdminApi;
use crate::config::{self, ADMIN_BASE};
use crate::model::response::{ApiResponse, Reply};
use crate::model::role::Role;
use crate::model::user::{User, UserCreate, UserUpdate};
use crate::Result;

use super::{request, request_json};

pub struct AdminHttp {
    base: String,
}

impl AdminHttp {
    pub fn new() -> Self {
        Self {
            base: config::endpoint(ADMIN_BASE),
        }
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base)
    }

    fn user_url(&self, id: i64) -> String {
        format!("{}/users/{}", self.base, id)
    }
}

#[async_trait::async_trait(?Send)]
impl AdminApi for AdminHttp {
    async fn list_users(&self) -> Result<Vec<User>> {
        let resp: ApiResponse<Vec<User>> = request(Request::get(&self.users_url())).await?;
        resp.into_data()
    }

    async fn get_user(&self, id: i64) -> Result<User> {
        let resp: ApiResponse<User> = request(Request::get(&self.user_url(id))).await?;
        resp.into_data()
    }

    async fn create_user(&self, user: UserCreate) -> Result<Reply<User>> {
        log::debug!("create user {:?}", user.email);
        let resp: ApiResponse<User> =
            request_json(Request::post(&self.users_url()), &user).await?;
        resp.into_reply()
    }

    async fn update_user(&self, id: i64, user: UserUpdate) -> Result<Reply<User>> {
        log::debug!("update user {}", id);
        let resp: ApiResponse<User> = request_json(Request::put(&self.user_url(id)), &user).await?;
        resp.into_reply()
    }

    async fn delete_user(&self, id: i64) -> Result<String> {
        log::debug!("delete user {}", id);
        let resp: ApiResponse<IgnoredAny> = request(Request::delete(&self.user_url(id))).await?;
        Ok(resp.message().to_string())
    }

    async fn list_roles(&self) -> Result<Vec<Role>> {
        let resp: ApiResponse<Vec<Role>> =
            request(Request::get(&format!("{}/roles", self.base))).await?;
        resp.into_data()
    }
}
