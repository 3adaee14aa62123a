use crate::model::response::Reply;
use crate::model::role::{Role, RoleForm};
use crate::Result;

#[async_trait::async_trait(?Send)]
pub trait RoleApi {
    async fn list(&self) -> Result<Vec<Role>>;

    async fn create(&self, role: RoleForm) -> Result<Reply<Role>>;

    async fn delete(&self, id: i64) -> Result<String>;
}
