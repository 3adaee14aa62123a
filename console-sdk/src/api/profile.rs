use crate::model::response::Reply;
use crate::model::user::{ProfileUpdate, User};
use crate::Result;

/// The signed-in user's own record.
#[async_trait::async_trait(?Send)]
pub trait ProfileApi {
    async fn get_profile(&self) -> Result<User>;

    async fn update_profile(&self, profile: ProfileUpdate) -> Result<Reply<User>>;
}
