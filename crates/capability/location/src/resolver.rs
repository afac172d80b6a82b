//! 位置时间线查询
//!
//! 静态与动态位置动作合并查询；结束动作只关闭同类别的开始动作。

use crate::pairing::{LocationTimelineEntry, get_location_timeline, pair_kind};
use domain::{Configuration, Date, LocationBeginAction, LocationEndAction};

/// `at` 时刻生效的位置开始动作。
///
/// 在 `begin_date <= at` 且到 `at` 为止尚未被配对结束动作关闭的开始动作中，
/// 取开始日期最新的一个；都已关闭或 `at` 早于所有开始动作时为 None。
pub fn get_currently_active_location_action(
    configuration: &Configuration,
    at: Date,
) -> Option<LocationBeginAction> {
    get_location_timeline(configuration)
        .into_iter()
        .filter(|entry| entry.begin_date().is_some_and(|begin| begin <= at))
        .filter(|entry| !is_closed_at(entry, at))
        .max_by_key(LocationTimelineEntry::begin_date)
        .map(|entry| entry.begin)
}

/// 与 `active_begin` 配对的结束动作。
pub fn get_end_action_for_active_location(
    configuration: &Configuration,
    active_begin: Option<&LocationBeginAction>,
) -> Option<LocationEndAction> {
    let active_begin = active_begin?;
    pair_kind(configuration, active_begin.kind())
        .into_iter()
        .find(|entry| entry.begin.is_same_action(active_begin))
        .and_then(|entry| entry.end)
}

/// 严格晚于 `after` 的最早开始日期（任一类别）。
pub fn get_next_active_location_begin_date(
    configuration: &Configuration,
    after: Date,
) -> Option<Date> {
    let statics = configuration
        .static_location_begin_actions
        .iter()
        .filter_map(|action| action.begin_date);
    let dynamics = configuration
        .dynamic_location_begin_actions
        .iter()
        .filter_map(|action| action.begin_date);
    statics.chain(dynamics).filter(|date| *date > after).min()
}

/// 严格早于 `before` 的最新结束日期（任一类别）。
pub fn get_latest_active_action_end_date(
    configuration: &Configuration,
    before: Date,
) -> Option<Date> {
    let statics = configuration
        .static_location_end_actions
        .iter()
        .filter_map(|action| action.end_date);
    let dynamics = configuration
        .dynamic_location_end_actions
        .iter()
        .filter_map(|action| action.end_date);
    statics.chain(dynamics).filter(|date| *date < before).max()
}

fn is_closed_at(entry: &LocationTimelineEntry, at: Date) -> bool {
    match (entry.begin_date(), entry.end_date()) {
        (Some(begin), Some(end)) => begin <= end && end <= at,
        _ => false,
    }
}
