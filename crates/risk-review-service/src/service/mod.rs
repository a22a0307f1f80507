//! 服务层
//!
//! - `cutoff`: 截止日期解析与回退
//! - `classifier`: 收入来源分类
//! - `review_service`: 未审核用户查询编排
//! - `dto`: 服务层输入输出

pub mod classifier;
pub mod cutoff;
pub mod dto;
pub mod review_service;

pub use classifier::RevenueSourceClassifier;
pub use cutoff::{CutoffOrigin, ResolvedCutoff, default_cutoff, parse_cutoff_date, resolve_cutoff};
pub use dto::{PageInfo, PageRequest, UnreviewedUserSummary, UnreviewedUsersPage, UnreviewedUsersRequest};
pub use review_service::{ReviewSettings, RiskReviewService};
