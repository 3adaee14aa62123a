pub mod notification;
pub mod page;
pub mod response;
pub mod role;
pub mod user;
