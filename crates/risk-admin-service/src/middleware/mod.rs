//! HTTP 中间件

mod security_headers;

pub use security_headers::security_headers;
