use self::{
    admin::AdminApi,
    http::{AdminHttp, ProfileHttp, RoleHttp},
    profile::ProfileApi,
    role::RoleApi,
};

pub mod admin;
mod http;
pub mod profile;
pub mod role;

pub use http::{request, request_json, RespStatus};

pub fn admin() -> Box<dyn AdminApi> {
    Box::new(AdminHttp::new())
}

pub fn profile() -> Box<dyn ProfileApi> {
    Box::new(ProfileHttp::new())
}

pub fn roles() -> Box<dyn RoleApi> {
    Box::new(RoleHttp::new())
}
