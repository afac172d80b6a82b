//! 时间线运行配置加载。

use chrono::{FixedOffset, Offset, Utc};
use domain::{Date, DateParseError};
use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 时间线运行配置。
#[derive(Debug, Clone)]
pub struct TimelineConfig {
    /// tracing 过滤表达式（如 `info`、`sms_mounting=debug`）。
    pub log_filter: String,
    /// 不带偏移的日期字符串所使用的默认偏移。
    pub default_offset: FixedOffset,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            default_offset: Utc.fix(),
        }
    }
}

impl TimelineConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let log_filter = read_optional("SMS_LOG_FILTER").unwrap_or_else(|| "info".to_string());
        let offset_minutes = read_i32_with_default("SMS_DEFAULT_UTC_OFFSET_MINUTES", 0)?;
        let default_offset = offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                ConfigError::Invalid(
                    "SMS_DEFAULT_UTC_OFFSET_MINUTES".to_string(),
                    offset_minutes.to_string(),
                )
            })?;

        Ok(Self {
            log_filter,
            default_offset,
        })
    }

    /// 按配置的默认偏移解析日期字符串。
    pub fn parse_date(&self, value: &str) -> Result<Date, DateParseError> {
        domain::parse_date(value, self.default_offset)
    }
}

/// 加载本地 .env（如存在）。
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

fn read_i32_with_default(key: &str, default: i32) -> Result<i32, ConfigError> {
    let value = match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => return Ok(default),
    };
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}
