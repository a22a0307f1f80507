//! 风控审核后台服务
//!
//! 为运营后台提供未审核用户的风控排查 REST API。
//!
//! ## 模块结构
//!
//! - `dto`: 请求参数和响应体
//! - `error`: 错误类型及 HTTP 映射
//! - `handlers`: HTTP 请求处理器
//! - `middleware`: HTTP 安全头
//! - `routes`: 路由配置
//! - `state`: 应用状态
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 序列化：serde (snake_case，与运营后台现有载荷保持一致)

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use dto::{ApiResponse, PaginationDto, UnreviewedUserDto, UnreviewedUsersParams, UnreviewedUsersResponse};
pub use error::{AdminError, Result};
pub use state::AppState;
