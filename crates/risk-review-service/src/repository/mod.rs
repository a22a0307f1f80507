//! 数据库仓储层
//!
//! 提供风控审核所需的只读数据访问，封装 SQL 操作细节。
//!
//! ## 设计原则
//!
//! - 仓储只负责数据读取，不包含业务逻辑
//! - 使用 SQLx 进行类型安全的数据库操作
//! - 定义 trait 接口以支持 mock 测试和内存实现

mod balance_repo;
mod memory;
mod revenue_source_repo;
mod traits;

pub use balance_repo::BalanceRepository;
pub use memory::InMemoryReviewStore;
pub use revenue_source_repo::RevenueSourceRepository;
pub use traits::*;
