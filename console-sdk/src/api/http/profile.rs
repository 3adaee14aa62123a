use gloo_net::http::Request;

use crate::api::profile::ProfileApi;
use crate::config::{self, USER_BASE};
use crate::model::response::{ApiResponse, Reply};
use crate::model::user::{ProfileUpdate, User};
use crate::Result;

use super::{request, request_json};

pub struct ProfileHttp {
    url: String,
}

impl ProfileHttp {
    pub fn new() -> Self {
        Self {
            url: format!("{}/profile", config::endpoint(USER_BASE)),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ProfileApi for ProfileHttp {
    async fn get_profile(&self) -> Result<User> {
        let resp: ApiResponse<User> = request(Request::get(&self.url)).await?;
        resp.into_data()
    }

    async fn update_profile(&self, profile: ProfileUpdate) -> Result<Reply<User>> {
        let resp: ApiResponse<User> = request_json(Request::put(&self.url), &profile).await?;
        resp.into_reply()
    }
}
