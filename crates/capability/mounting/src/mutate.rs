//! 安装 / 拆卸变换
//!
//! 所有变换都是纯函数：输入快照不变，返回新的快照。
//! - mount_device / mount_platform：追加安装动作，父节点必须能承载子节点
//! - unmount：同一时刻撤回安装，或追加拆卸动作并级联清除之后的历史

use crate::error::MountError;
use crate::node::ConfigurationsTreeNode;
use domain::{
    Contact, Date, Device, DeviceMountAction, DeviceUnmountAction, MountActionsCollection,
    MountRecord, Platform, PlatformMountAction, PlatformUnmountAction, UnmountRecord,
    date_times_equal,
};
use sms_telemetry::{
    new_change_id, record_actions_purged, record_mount_appended, record_rejected_mount,
    record_retraction, record_unmount_appended,
};
use std::collections::{HashSet, VecDeque};
use tracing::info;

/// 新安装动作的附加信息。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MountDetails {
    pub offset_x: f64,
    pub offset_y: f64,
    pub offset_z: f64,
    pub contact: Contact,
    pub description: String,
}

/// 在 `parent_node` 下（None 为配置根）安装设备。
pub fn mount_device(
    collection: &MountActionsCollection,
    device: Device,
    details: MountDetails,
    parent_node: Option<&ConfigurationsTreeNode>,
    date: Date,
) -> Result<MountActionsCollection, MountError> {
    let parent_platform = parent_platform_of(parent_node)?;
    let change_id = new_change_id();
    info!(
        change_id = %change_id,
        device_id = %device.id,
        parent_platform_id = parent_platform.as_ref().map(|p| p.id.as_str()),
        begin_date = %date,
        "device mount appended"
    );

    let mut result = collection.clone();
    result.device_mount_actions.push(DeviceMountAction {
        id: String::new(),
        device,
        parent_platform,
        begin_date: date,
        offset_x: details.offset_x,
        offset_y: details.offset_y,
        offset_z: details.offset_z,
        contact: details.contact,
        description: details.description,
    });
    record_mount_appended();
    Ok(result)
}

/// 在 `parent_node` 下（None 为配置根）安装平台。
pub fn mount_platform(
    collection: &MountActionsCollection,
    platform: Platform,
    details: MountDetails,
    parent_node: Option<&ConfigurationsTreeNode>,
    date: Date,
) -> Result<MountActionsCollection, MountError> {
    let parent_platform = parent_platform_of(parent_node)?;
    let change_id = new_change_id();
    info!(
        change_id = %change_id,
        platform_id = %platform.id,
        parent_platform_id = parent_platform.as_ref().map(|p| p.id.as_str()),
        begin_date = %date,
        "platform mount appended"
    );

    let mut result = collection.clone();
    result.platform_mount_actions.push(PlatformMountAction {
        id: String::new(),
        platform,
        parent_platform,
        begin_date: date,
        offset_x: details.offset_x,
        offset_y: details.offset_y,
        offset_z: details.offset_z,
        contact: details.contact,
        description: details.description,
    });
    record_mount_appended();
    Ok(result)
}

/// 父节点校验的唯一入口：设备节点不能承载子节点。
fn parent_platform_of(
    parent_node: Option<&ConfigurationsTreeNode>,
) -> Result<Option<Platform>, MountError> {
    let Some(node) = parent_node else {
        return Ok(None);
    };
    if !node.can_have_children() {
        record_rejected_mount();
        return Err(MountError::NodeCannotHaveChildren(node.label().to_string()));
    }
    Ok(node
        .as_platform()
        .map(|platform| platform.unpack().platform.clone()))
}

/// 在 `unmount_date` 拆卸节点。
///
/// - 日期与节点的安装日期为同一时刻：删除该安装动作本身，不生成拆卸动作；
///   其下安装的一切（日期不早于该时刻）与该实体之后的历史一并删除。
/// - 否则：追加拆卸动作，并删除该实体及其下所有实体在该日期之后的安装/拆卸动作。
pub fn unmount(
    collection: &MountActionsCollection,
    node: &ConfigurationsTreeNode,
    unmount_date: Date,
    contact: Contact,
    description: impl Into<String>,
) -> MountActionsCollection {
    let change_id = new_change_id();
    let retract = date_times_equal(&unmount_date, &node.begin_date());
    let purge = Purge {
        subtree: MountedSubtree::collect(collection, node, unmount_date),
        unmount_date,
        retract,
    };

    let mut result = collection.clone();
    result
        .platform_mount_actions
        .retain(|action| !purge.platform(action.entity_id(), action.begin_date));
    result
        .platform_unmount_actions
        .retain(|action| !purge.platform(action.entity_id(), action.end_date));
    result
        .device_mount_actions
        .retain(|action| !purge.device(action.entity_id(), action.begin_date));
    result
        .device_unmount_actions
        .retain(|action| !purge.device(action.entity_id(), action.end_date));

    if retract {
        // 按实体 ID 与安装时刻识别被撤回的安装，其余字段可能已被服务端改写
        let is_retracted = |entity_id: Option<&str>, begin_date: &Date| {
            entity_id.is_some()
                && entity_id == node.entity_id()
                && date_times_equal(begin_date, &node.begin_date())
        };
        match node {
            ConfigurationsTreeNode::Platform(_) => result
                .platform_mount_actions
                .retain(|action| !is_retracted(action.entity_id(), &action.begin_date)),
            ConfigurationsTreeNode::Device(_) => result
                .device_mount_actions
                .retain(|action| !is_retracted(action.entity_id(), &action.begin_date)),
        }
    }

    let purged = collection.len() - result.len();
    record_actions_purged(purged as u64);

    if retract {
        record_retraction();
    } else {
        let description = description.into();
        match node {
            ConfigurationsTreeNode::Platform(platform) => {
                result.platform_unmount_actions.push(PlatformUnmountAction {
                    id: String::new(),
                    platform: platform.unpack().platform.clone(),
                    end_date: unmount_date,
                    contact,
                    description,
                })
            }
            ConfigurationsTreeNode::Device(device) => {
                result.device_unmount_actions.push(DeviceUnmountAction {
                    id: String::new(),
                    device: device.unpack().device.clone(),
                    end_date: unmount_date,
                    contact,
                    description,
                })
            }
        }
        record_unmount_appended();
    }

    info!(
        change_id = %change_id,
        entity = node.label(),
        unmount_date = %unmount_date,
        retract,
        purged,
        "unmount applied"
    );
    result
}

/// 级联清除规则。
struct Purge {
    subtree: MountedSubtree,
    unmount_date: Date,
    retract: bool,
}

impl Purge {
    fn platform(&self, entity_id: Option<&str>, date: Date) -> bool {
        self.is_stale(self.subtree.platform_role(entity_id), date)
    }

    fn device(&self, entity_id: Option<&str>, date: Date) -> bool {
        self.is_stale(self.subtree.device_role(entity_id), date)
    }

    fn is_stale(&self, role: Role, date: Date) -> bool {
        match role {
            Role::Own => date > self.unmount_date,
            // 撤回时其下的子动作最早与父节点同一时刻，需包含边界
            Role::Descendant if self.retract => date >= self.unmount_date,
            Role::Descendant => date > self.unmount_date,
            Role::Unrelated => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Own,
    Descendant,
    Unrelated,
}

/// 被拆卸节点及其（在拆卸日期及之后仍安装在其下的）所有后代实体。
struct MountedSubtree {
    own_platform: Option<String>,
    own_device: Option<String>,
    platforms: HashSet<String>,
    devices: HashSet<String>,
}

impl MountedSubtree {
    /// 以工作队列遍历安装历史，收集后代实体。
    fn collect(
        collection: &MountActionsCollection,
        node: &ConfigurationsTreeNode,
        unmount_date: Date,
    ) -> Self {
        let own_id = node.entity_id().map(str::to_string);
        let mut subtree = Self {
            own_platform: own_id.clone().filter(|_| node.is_platform()),
            own_device: own_id.filter(|_| node.is_device()),
            platforms: HashSet::new(),
            devices: HashSet::new(),
        };

        let mut seen: HashSet<String> = subtree.own_platform.iter().cloned().collect();
        let mut queue: VecDeque<String> = subtree.own_platform.iter().cloned().collect();
        while let Some(parent_id) = queue.pop_front() {
            for action in &collection.platform_mount_actions {
                if action.parent_platform_id() != Some(parent_id.as_str())
                    || !is_live_from(action, &collection.platform_unmount_actions, unmount_date)
                {
                    continue;
                }
                if let Some(id) = action.entity_id() {
                    if seen.insert(id.to_string()) {
                        subtree.platforms.insert(id.to_string());
                        queue.push_back(id.to_string());
                    }
                }
            }
            for action in &collection.device_mount_actions {
                if action.parent_platform_id() != Some(parent_id.as_str())
                    || !is_live_from(action, &collection.device_unmount_actions, unmount_date)
                {
                    continue;
                }
                if let Some(id) = action.entity_id() {
                    subtree.devices.insert(id.to_string());
                }
            }
        }
        subtree
    }

    fn platform_role(&self, entity_id: Option<&str>) -> Role {
        role_of(entity_id, self.own_platform.as_deref(), &self.platforms)
    }

    fn device_role(&self, entity_id: Option<&str>) -> Role {
        role_of(entity_id, self.own_device.as_deref(), &self.devices)
    }
}

fn role_of(entity_id: Option<&str>, own: Option<&str>, descendants: &HashSet<String>) -> Role {
    match entity_id {
        Some(id) if own == Some(id) => Role::Own,
        Some(id) if descendants.contains(id) => Role::Descendant,
        _ => Role::Unrelated,
    }
}

/// 安装在 `date` 时刻或之后仍有效：之后才开始，或开始后到 `date` 为止未被拆卸。
fn is_live_from<M: MountRecord, U: UnmountRecord>(mount: &M, unmounts: &[U], date: Date) -> bool {
    let begin = mount.begin_date();
    if begin > date {
        return true;
    }
    !unmounts.iter().any(|unmount| {
        unmount.entity_id() == mount.entity_id()
            && unmount.end_date() >= begin
            && unmount.end_date() <= date
    })
}
