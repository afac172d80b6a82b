//! 位置开始/结束动作配对
//!
//! 每个类别独立按日期升序排列。第 k 个开始动作的槽位为
//! `[begin_k, begin_{k+1}]`（最后一个开放），与槽位内最早的、
//! 尚未被占用的同类结束动作配对。数据完整时等价于按位置配对；
//! 结束动作被删除时，对应的开始动作保持开放，不会借用属于
//! 其他开始动作的结束动作。

use domain::{Configuration, Date, LocationBeginAction, LocationEndAction, LocationKind};
use tracing::debug;

/// 一个开始动作及其配对的结束动作（未结束时为 None）。
#[derive(Debug, Clone, PartialEq)]
pub struct LocationTimelineEntry {
    pub begin: LocationBeginAction,
    pub end: Option<LocationEndAction>,
}

impl LocationTimelineEntry {
    pub fn begin_date(&self) -> Option<Date> {
        self.begin.begin_date()
    }

    pub fn end_date(&self) -> Option<Date> {
        self.end.as_ref().and_then(LocationEndAction::end_date)
    }
}

/// 配置的完整位置时间线：所有带日期的开始动作及其结束动作，按开始日期升序。
pub fn get_location_timeline(configuration: &Configuration) -> Vec<LocationTimelineEntry> {
    let mut entries = pair_kind(configuration, LocationKind::Static);
    entries.extend(pair_kind(configuration, LocationKind::Dynamic));
    entries.sort_by_key(LocationTimelineEntry::begin_date);
    entries
}

/// 单一类别的配对结果，按开始日期升序。
pub(crate) fn pair_kind(
    configuration: &Configuration,
    kind: LocationKind,
) -> Vec<LocationTimelineEntry> {
    let begins = dated(configuration.begin_actions(kind), LocationBeginAction::begin_date);
    let ends = dated(configuration.end_actions(kind), LocationEndAction::end_date);
    if ends.len() > begins.len() {
        debug!(?kind, begins = begins.len(), ends = ends.len(), "more end actions than begins");
    }

    let mut claimed = vec![false; ends.len()];
    let mut entries = Vec::with_capacity(begins.len());
    for (pos, (begin_date, begin)) in begins.iter().enumerate() {
        let slot_end = begins.get(pos + 1).map(|(next, _)| *next);
        let matched = ends.iter().enumerate().position(|(idx, (end_date, _))| {
            !claimed[idx]
                && *end_date >= *begin_date
                && slot_end.is_none_or(|limit| *end_date <= limit)
        });
        let end = matched.map(|idx| {
            claimed[idx] = true;
            ends[idx].1.clone()
        });
        entries.push(LocationTimelineEntry {
            begin: begin.clone(),
            end,
        });
    }
    entries
}

/// 丢弃没有日期的动作，其余按日期稳定升序排列。
fn dated<A>(actions: Vec<A>, date_of: impl Fn(&A) -> Option<Date>) -> Vec<(Date, A)> {
    let total = actions.len();
    let mut dated: Vec<(Date, A)> = actions
        .into_iter()
        .filter_map(|action| date_of(&action).map(|date| (date, action)))
        .collect();
    if dated.len() < total {
        debug!(ignored = total - dated.len(), "ignoring location actions without date");
    }
    dated.sort_by_key(|(date, _)| *date);
    dated
}
