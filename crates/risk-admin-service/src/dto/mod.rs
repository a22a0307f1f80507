//! 后台服务 DTO 模块

pub mod request;
pub mod response;

pub use request::UnreviewedUsersParams;
pub use response::{ApiResponse, PaginationDto, UnreviewedUserDto, UnreviewedUsersResponse};
