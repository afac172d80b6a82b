//! 时间点比较与解析
//!
//! 所有动作日期统一为带偏移的时间点 [`Date`]：
//! - 比较器：按日期升序 / 降序的三路比较（空日期视为最早）
//! - 相等性：只比较所表示的时刻，不比较偏移表示
//! - 解析：RFC 3339，或按默认偏移解释的无时区字符串

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use std::cmp::Ordering;

/// 动作日期（带 UTC 偏移的时间点）。
pub type Date = DateTime<FixedOffset>;

/// 日期解析错误。
#[derive(Debug, thiserror::Error)]
pub enum DateParseError {
    #[error("invalid date: {0}")]
    Invalid(String),
    #[error("ambiguous local date: {0}")]
    Ambiguous(String),
}

/// 携带可比较日期的值。
pub trait Dated {
    fn date(&self) -> Option<Date>;
}

impl Dated for Date {
    fn date(&self) -> Option<Date> {
        Some(*self)
    }
}

impl Dated for Option<Date> {
    fn date(&self) -> Option<Date> {
        *self
    }
}

/// 升序比较：旧日期在前，空日期最前；相等返回 `Equal`，保证稳定排序。
pub fn by_date_oldest_first<T: Dated + ?Sized>(a: &T, b: &T) -> Ordering {
    a.date().cmp(&b.date())
}

/// 降序比较：新日期在前，空日期最后。
pub fn by_date_oldest_last<T: Dated + ?Sized>(a: &T, b: &T) -> Ordering {
    b.date().cmp(&a.date())
}

/// 判断两个时间点是否表示同一时刻（与偏移表示无关）。
pub fn date_times_equal<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> bool {
    a.naive_utc() == b.naive_utc()
}

/// 解析日期字符串。
///
/// 优先按 RFC 3339 解析；不带偏移的 `YYYY-MM-DD[T ]HH:MM:SS[.f]`
/// 或 `YYYY-MM-DD` 按 `default_offset` 解释。
pub fn parse_date(value: &str, default_offset: FixedOffset) -> Result<Date, DateParseError> {
    let value = value.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date);
    }
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(|day| day.and_time(chrono::NaiveTime::MIN))
        })
        .map_err(|_| DateParseError::Invalid(value.to_string()))?;
    default_offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| DateParseError::Ambiguous(value.to_string()))
}
