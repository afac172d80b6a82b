use sms_config::{ConfigError, TimelineConfig};

#[test]
fn load_config_from_env() {
    // Rust 2024 中 set_var 需要显式标注 unsafe（测试进程内可控）。
    unsafe {
        std::env::set_var("SMS_LOG_FILTER", "sms_mounting=debug");
        std::env::set_var("SMS_DEFAULT_UTC_OFFSET_MINUTES", "60");
    }

    let config = TimelineConfig::from_env().expect("config");
    assert_eq!(config.log_filter, "sms_mounting=debug");
    assert_eq!(config.default_offset.local_minus_utc(), 3600);

    let parsed = config.parse_date("2020-01-01 01:00:00").expect("date");
    let utc = config.parse_date("2020-01-01T00:00:00Z").expect("date");
    assert!(domain::date_times_equal(&parsed, &utc));

    unsafe {
        std::env::set_var("SMS_DEFAULT_UTC_OFFSET_MINUTES", "east");
    }
    let err = TimelineConfig::from_env().expect_err("invalid offset");
    assert!(matches!(err, ConfigError::Invalid(key, _) if key == "SMS_DEFAULT_UTC_OFFSET_MINUTES"));

    unsafe {
        std::env::set_var("SMS_DEFAULT_UTC_OFFSET_MINUTES", "100000");
    }
    assert!(TimelineConfig::from_env().is_err());

    unsafe {
        std::env::remove_var("SMS_LOG_FILTER");
        std::env::remove_var("SMS_DEFAULT_UTC_OFFSET_MINUTES");
    }
    let config = TimelineConfig::from_env().expect("defaults");
    assert_eq!(config.log_filter, "info");
    assert_eq!(config.default_offset.local_minus_utc(), 0);
}
