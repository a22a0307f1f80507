//! 未审核用户风控审核服务
//!
//! 为运营后台提供"未审核且存在未结算余额"用户的风控排查查询。
//!
//! ## 核心组件
//!
//! - **余额聚合**：按用户汇总未结算余额，先分组再按阈值过滤（HAVING 语义）
//! - **收入来源分类**：判断未结算余额来自销售、合作者分成、推广分成还是通用入账
//! - **审核查询服务**：组合以上两者，输出分页结果、总数和实际使用的截止日期
//!
//! ## 模块结构
//!
//! - `models`: 只读实体与查询行
//! - `repository`: 仓储接口及 PostgreSQL / 内存实现
//! - `service`: 截止日期解析、分类器、查询服务
//! - `error`: 错误类型定义

pub mod error;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{ReviewError, Result};
pub use models::{
    AffiliateKind, BalanceState, RevenueEvidence, RevenueSource, ReviewCriteria,
    UnpaidBalanceTotal, UserRiskState,
};
pub use repository::{BalanceRepository, InMemoryReviewStore, RevenueSourceRepository};
pub use service::{
    CutoffOrigin, ResolvedCutoff, RevenueSourceClassifier, ReviewSettings, RiskReviewService,
    UnreviewedUsersPage, UnreviewedUsersRequest,
};
