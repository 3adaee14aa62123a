use crate::model::response::Reply;
use crate::model::role::Role;
use crate::model::user::{User, UserCreate, UserUpdate};
use crate::Result;

/// User management endpoints, admin only.
#[async_trait::async_trait(?Send)]
pub trait AdminApi {
    async fn list_users(&self) -> Result<Vec<User>>;

    async fn get_user(&self, id: i64) -> Result<User>;

    async fn create_user(&self, user: UserCreate) -> Result<Reply<User>>;

    async fn update_user(&self, id: i64, user: UserUpdate) -> Result<Reply<User>>;

    /// returns the server message
    async fn delete_user(&self, id: i64) -> Result<String>;

    async fn list_roles(&self) -> Result<Vec<Role>>;
}
