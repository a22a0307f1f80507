//! 截止日期解析
//!
//! 调用方传入的日期无法解析时静默回退到默认值（向前推 N 个自然年），
//! 不向调用方报错；回退来源记录在 [`CutoffOrigin`] 中供日志和指标使用。

use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// 截止日期的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutoffOrigin {
    /// 调用方显式指定且解析成功
    Requested,
    /// 调用方未指定
    Default,
    /// 调用方指定了但无法解析，已回退到默认值
    FallbackFromInvalid,
}

/// 解析后的截止日期
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCutoff {
    pub date: NaiveDate,
    pub origin: CutoffOrigin,
}

impl ResolvedCutoff {
    /// 截止日期当天 00:00 UTC，作为注册时间下界（含）
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.date.and_time(NaiveTime::MIN).and_utc()
    }
}

/// 默认截止日期：`today` 向前推 `years` 个自然年
///
/// 2 月 29 日回退到目标年份的 2 月 28 日
pub fn default_cutoff(today: NaiveDate, years: u32) -> NaiveDate {
    today
        .checked_sub_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN)
}

/// 解析调用方传入的日期
///
/// 支持 `YYYY-MM-DD`、`YYYY/MM/DD`、`DD/MM/YYYY`、紧凑的 `YYYYMMDD`、
/// 不带时区的 `YYYY-MM-DDTHH:MM:SS` 和 RFC 3339 时间戳（取日期部分）。
/// 斜杠分隔且年份在后时按日在前解释，`MM/DD/YYYY` 不受支持
pub fn parse_cutoff_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| parse_compact_date(raw))
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// `YYYYMMDD`，必须恰好 8 位数字
fn parse_compact_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year = raw[0..4].parse().ok()?;
    let month = raw[4..6].parse().ok()?;
    let day = raw[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// 解析截止日期，空值和无法解析的值都回退到默认值
pub fn resolve_cutoff(raw: Option<&str>, today: NaiveDate, default_years: u32) -> ResolvedCutoff {
    let fallback = default_cutoff(today, default_years);

    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => ResolvedCutoff {
            date: fallback,
            origin: CutoffOrigin::Default,
        },
        Some(value) => match parse_cutoff_date(value) {
            Some(date) => ResolvedCutoff {
                date,
                origin: CutoffOrigin::Requested,
            },
            None => ResolvedCutoff {
                date: fallback,
                origin: CutoffOrigin::FallbackFromInvalid,
            },
        },
    }
}
