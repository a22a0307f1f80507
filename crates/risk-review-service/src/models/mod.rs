//! 风控审核领域模型
//!
//! 本服务只读取这些实体，它们由下单、分成结算、人工审核等上游流程创建和修改。

mod affiliate;
mod balance;
mod credit;
mod revenue_source;
mod review;
mod sale;
mod user;

pub use affiliate::{Affiliate, AffiliateCredit, AffiliateKind};
pub use balance::{Balance, BalanceState};
pub use credit::Credit;
pub use revenue_source::{RevenueEvidence, RevenueSource};
pub use review::{ReviewCriteria, UnpaidBalanceTotal};
pub use sale::{Purchase, PurchaseState};
pub use user::{User, UserRiskState, display_name};
