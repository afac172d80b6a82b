//! 配置与位置动作
//!
//! 配置拥有四个位置动作列表（静态/动态 × 开始/结束）。
//! 没有日期的动作在所有时间线查询中被忽略。

use crate::dates::{Date, Dated, date_times_equal};
use crate::entities::{Contact, DeviceProperty};
use serde::{Deserialize, Serialize};

/// 静态位置开始动作（直接给出坐标）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticLocationBeginAction {
    pub id: String,
    pub begin_date: Option<Date>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub epsg_code: String,
    pub elevation_datum_name: String,
    pub contact: Option<Contact>,
    pub description: String,
}

/// 静态位置结束动作。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticLocationEndAction {
    pub id: String,
    pub end_date: Option<Date>,
    pub contact: Option<Contact>,
    pub description: String,
}

/// 动态位置开始动作（坐标来自设备测量属性）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicLocationBeginAction {
    pub id: String,
    pub begin_date: Option<Date>,
    pub x: Option<DeviceProperty>,
    pub y: Option<DeviceProperty>,
    pub z: Option<DeviceProperty>,
    pub epsg_code: String,
    pub elevation_datum_name: String,
    pub contact: Option<Contact>,
    pub description: String,
}

/// 动态位置结束动作。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicLocationEndAction {
    pub id: String,
    pub end_date: Option<Date>,
    pub contact: Option<Contact>,
    pub description: String,
}

impl Dated for StaticLocationBeginAction {
    fn date(&self) -> Option<Date> {
        self.begin_date
    }
}

impl Dated for StaticLocationEndAction {
    fn date(&self) -> Option<Date> {
        self.end_date
    }
}

impl Dated for DynamicLocationBeginAction {
    fn date(&self) -> Option<Date> {
        self.begin_date
    }
}

impl Dated for DynamicLocationEndAction {
    fn date(&self) -> Option<Date> {
        self.end_date
    }
}

/// 位置动作类别：结束动作只与同类别的开始动作配对。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    Static,
    Dynamic,
}

/// 任一类别的位置开始动作。
#[derive(Debug, Clone, PartialEq)]
pub enum LocationBeginAction {
    Static(StaticLocationBeginAction),
    Dynamic(DynamicLocationBeginAction),
}

impl LocationBeginAction {
    pub fn kind(&self) -> LocationKind {
        match self {
            LocationBeginAction::Static(_) => LocationKind::Static,
            LocationBeginAction::Dynamic(_) => LocationKind::Dynamic,
        }
    }

    pub fn begin_date(&self) -> Option<Date> {
        match self {
            LocationBeginAction::Static(action) => action.begin_date,
            LocationBeginAction::Dynamic(action) => action.begin_date,
        }
    }

    /// 持久化 ID；未保存时为 None。
    pub fn id(&self) -> Option<&str> {
        let id = match self {
            LocationBeginAction::Static(action) => action.id.as_str(),
            LocationBeginAction::Dynamic(action) => action.id.as_str(),
        };
        (!id.is_empty()).then_some(id)
    }

    /// 是否为同一个开始动作：类别与开始时刻相同，双方都有 ID 时 ID 也相同。
    pub fn is_same_action(&self, other: &LocationBeginAction) -> bool {
        let same_instant = match (self.begin_date(), other.begin_date()) {
            (Some(a), Some(b)) => date_times_equal(&a, &b),
            (None, None) => true,
            _ => false,
        };
        let same_id = match (self.id(), other.id()) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        };
        self.kind() == other.kind() && same_instant && same_id
    }
}

impl Dated for LocationBeginAction {
    fn date(&self) -> Option<Date> {
        self.begin_date()
    }
}

/// 任一类别的位置结束动作。
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEndAction {
    Static(StaticLocationEndAction),
    Dynamic(DynamicLocationEndAction),
}

impl LocationEndAction {
    pub fn kind(&self) -> LocationKind {
        match self {
            LocationEndAction::Static(_) => LocationKind::Static,
            LocationEndAction::Dynamic(_) => LocationKind::Dynamic,
        }
    }

    pub fn end_date(&self) -> Option<Date> {
        match self {
            LocationEndAction::Static(action) => action.end_date,
            LocationEndAction::Dynamic(action) => action.end_date,
        }
    }
}

impl Dated for LocationEndAction {
    fn date(&self) -> Option<Date> {
        self.end_date()
    }
}

/// 配置（位置动作的所有者）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub id: String,
    pub label: String,
    pub static_location_begin_actions: Vec<StaticLocationBeginAction>,
    pub static_location_end_actions: Vec<StaticLocationEndAction>,
    pub dynamic_location_begin_actions: Vec<DynamicLocationBeginAction>,
    pub dynamic_location_end_actions: Vec<DynamicLocationEndAction>,
}

impl Configuration {
    /// 指定类别的开始动作（统一包装，保持输入顺序）。
    pub fn begin_actions(&self, kind: LocationKind) -> Vec<LocationBeginAction> {
        match kind {
            LocationKind::Static => self
                .static_location_begin_actions
                .iter()
                .cloned()
                .map(LocationBeginAction::Static)
                .collect(),
            LocationKind::Dynamic => self
                .dynamic_location_begin_actions
                .iter()
                .cloned()
                .map(LocationBeginAction::Dynamic)
                .collect(),
        }
    }

    /// 指定类别的结束动作（统一包装，保持输入顺序）。
    pub fn end_actions(&self, kind: LocationKind) -> Vec<LocationEndAction> {
        match kind {
            LocationKind::Static => self
                .static_location_end_actions
                .iter()
                .cloned()
                .map(LocationEndAction::Static)
                .collect(),
            LocationKind::Dynamic => self
                .dynamic_location_end_actions
                .iter()
                .cloned()
                .map(LocationEndAction::Dynamic)
                .collect(),
        }
    }
}
