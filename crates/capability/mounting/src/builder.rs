//! 安装树构建
//!
//! 根节点：没有父平台，或父平台在该时刻不活动（孤儿提升，
//! 不一致的数据需要在界面上可见才能被修正）。
//! 其余活动动作挂到活动父平台节点之下，深度不限。

use crate::active::{get_active_devices, get_active_platforms};
use crate::node::{ConfigurationsTreeNode, DeviceNode, PlatformNode};
use domain::{
    Date, DeviceMountAction, MountActionsCollection, MountRecord, PlatformMountAction,
    date_times_equal,
};
use sms_telemetry::{record_orphan_promoted, record_tree_built};
use std::collections::HashMap;
use tracing::{debug, warn};

/// 父平台 ID → 子安装动作（保持活动表的迭代顺序）。
#[derive(Default)]
struct ChildLookup<'a> {
    platforms: HashMap<&'a str, Vec<&'a PlatformMountAction>>,
    devices: HashMap<&'a str, Vec<&'a DeviceMountAction>>,
}

/// 构建 `at` 时刻的安装树。
///
/// 根节点顺序：先平台根，再设备根，各自按活动表顺序；
/// 子节点同样先平台后设备。
pub fn build_configuration_tree(
    collection: &MountActionsCollection,
    at: Option<Date>,
) -> Vec<ConfigurationsTreeNode> {
    let platforms = get_active_platforms(collection, at);
    let devices = get_active_devices(collection, at);

    let mut lookup = ChildLookup::default();
    let mut root_platforms = Vec::new();
    let mut root_devices = Vec::new();

    for (id, action) in platforms.iter() {
        match action.parent_platform_id().filter(|parent| platforms.contains(parent)) {
            Some(parent) => lookup.platforms.entry(parent).or_default().push(action),
            None => {
                if action.parent_platform.is_some() {
                    debug!(platform_id = id, "parent platform inactive, promoted to root");
                    record_orphan_promoted();
                }
                root_platforms.push(action);
            }
        }
    }

    for (id, action) in devices.iter() {
        match action.parent_platform_id().filter(|parent| platforms.contains(parent)) {
            Some(parent) => lookup.devices.entry(parent).or_default().push(action),
            None => {
                if action.parent_platform.is_some() {
                    debug!(device_id = id, "parent platform inactive, promoted to root");
                    record_orphan_promoted();
                }
                root_devices.push(action);
            }
        }
    }

    let mut placed = 0usize;
    let mut roots: Vec<ConfigurationsTreeNode> = root_platforms
        .into_iter()
        .map(|action| {
            ConfigurationsTreeNode::from(build_platform_node(action, &lookup, &mut placed))
        })
        .collect();
    for action in root_devices {
        placed += 1;
        roots.push(DeviceNode::new(action.clone()).into());
    }

    let expected = platforms.len() + devices.len();
    if placed < expected {
        warn!(
            dropped = expected - placed,
            "mount actions without a path to a root were dropped"
        );
    }
    record_tree_built();
    roots
}

fn build_platform_node(
    action: &PlatformMountAction,
    lookup: &ChildLookup<'_>,
    placed: &mut usize,
) -> PlatformNode {
    *placed += 1;
    let mut node = PlatformNode::new(action.clone());
    let Some(id) = action.entity_id() else {
        return node;
    };
    if let Some(children) = lookup.platforms.get(id) {
        for child in children {
            node.add_child(build_platform_node(child, lookup, placed).into());
        }
    }
    if let Some(children) = lookup.devices.get(id) {
        for child in children {
            *placed += 1;
            node.add_child(DeviceNode::new((*child).clone()).into());
        }
    }
    node
}

/// 快照中所有安装/拆卸日期（升序，同一时刻去重），用于时间轴刻度。
pub fn get_action_dates(collection: &MountActionsCollection) -> Vec<Date> {
    let mut dates: Vec<Date> = collection
        .platform_mount_actions
        .iter()
        .map(|action| action.begin_date)
        .chain(collection.device_mount_actions.iter().map(|a| a.begin_date))
        .chain(collection.platform_unmount_actions.iter().map(|a| a.end_date))
        .chain(collection.device_unmount_actions.iter().map(|a| a.end_date))
        .collect();
    dates.sort();
    dates.dedup_by(|a, b| date_times_equal(a, b));
    dates
}
