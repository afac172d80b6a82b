//! 安装 / 拆卸动作
//!
//! - 安装动作：PlatformMountAction, DeviceMountAction（统一为 [`MountAction`]）
//! - 拆卸动作：PlatformUnmountAction, DeviceUnmountAction
//! - 快照：MountActionsCollection（四个无序列表，查询内部自行排序）

use crate::dates::{Date, Dated};
use crate::entities::{Contact, Device, Platform};
use serde::{Deserialize, Serialize};

/// 平台安装动作。
///
/// `parent_platform` 为 None 表示直接安装在配置根上。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformMountAction {
    pub id: String,
    pub platform: Platform,
    pub parent_platform: Option<Platform>,
    pub begin_date: Date,
    pub offset_x: f64,
    pub offset_y: f64,
    pub offset_z: f64,
    pub contact: Contact,
    pub description: String,
}

/// 设备安装动作。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceMountAction {
    pub id: String,
    pub device: Device,
    pub parent_platform: Option<Platform>,
    pub begin_date: Date,
    pub offset_x: f64,
    pub offset_y: f64,
    pub offset_z: f64,
    pub contact: Contact,
    pub description: String,
}

/// 平台拆卸动作。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformUnmountAction {
    pub id: String,
    pub platform: Platform,
    pub end_date: Date,
    pub contact: Contact,
    pub description: String,
}

/// 设备拆卸动作。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUnmountAction {
    pub id: String,
    pub device: Device,
    pub end_date: Date,
    pub contact: Contact,
    pub description: String,
}

/// 安装动作的公共视图（活动实体解析按实体 ID 分组使用）。
pub trait MountRecord {
    /// 被安装实体的已持久化 ID。
    fn entity_id(&self) -> Option<&str>;
    fn begin_date(&self) -> Date;
    fn parent_platform(&self) -> Option<&Platform>;

    /// 父平台的已持久化 ID。
    fn parent_platform_id(&self) -> Option<&str> {
        self.parent_platform().and_then(Platform::persisted_id)
    }
}

/// 拆卸动作的公共视图。
pub trait UnmountRecord {
    fn entity_id(&self) -> Option<&str>;
    fn end_date(&self) -> Date;
}

impl MountRecord for PlatformMountAction {
    fn entity_id(&self) -> Option<&str> {
        self.platform.persisted_id()
    }

    fn begin_date(&self) -> Date {
        self.begin_date
    }

    fn parent_platform(&self) -> Option<&Platform> {
        self.parent_platform.as_ref()
    }
}

impl MountRecord for DeviceMountAction {
    fn entity_id(&self) -> Option<&str> {
        self.device.persisted_id()
    }

    fn begin_date(&self) -> Date {
        self.begin_date
    }

    fn parent_platform(&self) -> Option<&Platform> {
        self.parent_platform.as_ref()
    }
}

impl UnmountRecord for PlatformUnmountAction {
    fn entity_id(&self) -> Option<&str> {
        self.platform.persisted_id()
    }

    fn end_date(&self) -> Date {
        self.end_date
    }
}

impl UnmountRecord for DeviceUnmountAction {
    fn entity_id(&self) -> Option<&str> {
        self.device.persisted_id()
    }

    fn end_date(&self) -> Date {
        self.end_date
    }
}

impl Dated for PlatformMountAction {
    fn date(&self) -> Option<Date> {
        Some(self.begin_date)
    }
}

impl Dated for DeviceMountAction {
    fn date(&self) -> Option<Date> {
        Some(self.begin_date)
    }
}

impl Dated for PlatformUnmountAction {
    fn date(&self) -> Option<Date> {
        Some(self.end_date)
    }
}

impl Dated for DeviceUnmountAction {
    fn date(&self) -> Option<Date> {
        Some(self.end_date)
    }
}

/// 任一类型的安装动作（节点解包的结果）。
#[derive(Debug, Clone, PartialEq)]
pub enum MountAction {
    Platform(PlatformMountAction),
    Device(DeviceMountAction),
}

impl MountAction {
    pub fn begin_date(&self) -> Date {
        match self {
            MountAction::Platform(action) => action.begin_date,
            MountAction::Device(action) => action.begin_date,
        }
    }

    pub fn entity_id(&self) -> Option<&str> {
        match self {
            MountAction::Platform(action) => action.entity_id(),
            MountAction::Device(action) => action.entity_id(),
        }
    }

    pub fn parent_platform(&self) -> Option<&Platform> {
        match self {
            MountAction::Platform(action) => action.parent_platform.as_ref(),
            MountAction::Device(action) => action.parent_platform.as_ref(),
        }
    }

    /// 被安装实体的展示名称。
    pub fn entity_label(&self) -> &str {
        match self {
            MountAction::Platform(action) => action.platform.label(),
            MountAction::Device(action) => action.device.label(),
        }
    }
}

/// 安装动作快照：函数之间传递的扁平事件列表。
///
/// 同一实体可出现多次（重复安装历史），类型本身不做唯一性约束。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountActionsCollection {
    pub platform_mount_actions: Vec<PlatformMountAction>,
    pub platform_unmount_actions: Vec<PlatformUnmountAction>,
    pub device_mount_actions: Vec<DeviceMountAction>,
    pub device_unmount_actions: Vec<DeviceUnmountAction>,
}

impl MountActionsCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 四个列表中动作的总数。
    pub fn len(&self) -> usize {
        self.platform_mount_actions.len()
            + self.platform_unmount_actions.len()
            + self.device_mount_actions.len()
            + self.device_unmount_actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
