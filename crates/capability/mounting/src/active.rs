//! 活动实体解析
//!
//! 给定扁平的安装/拆卸列表与时间点，计算每个实体在该时刻
//! 最新且尚未被拆卸关闭的安装动作。

use domain::{
    Date, Dated, DeviceMountAction, MountActionsCollection, MountRecord, PlatformMountAction,
    UnmountRecord, by_date_oldest_first,
};
use std::collections::HashMap;
use tracing::debug;

/// 按实体 ID 索引的活动安装动作。
///
/// 迭代顺序：按 begin_date 升序，同一时刻按输入顺序。
#[derive(Debug, Clone)]
pub struct ActiveMounts<A> {
    actions: Vec<A>,
    index: HashMap<String, usize>,
}

impl<A> Default for ActiveMounts<A> {
    fn default() -> Self {
        Self {
            actions: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<A: MountRecord> ActiveMounts<A> {
    fn from_ordered(actions: Vec<A>) -> Self {
        let index = actions
            .iter()
            .enumerate()
            .filter_map(|(pos, action)| action.entity_id().map(|id| (id.to_string(), pos)))
            .collect();
        Self { actions, index }
    }

    pub fn get(&self, entity_id: &str) -> Option<&A> {
        self.index.get(entity_id).map(|pos| &self.actions[*pos])
    }

    pub fn contains(&self, entity_id: &str) -> bool {
        self.index.contains_key(entity_id)
    }

    /// 按顺序迭代 (实体 ID, 动作)。
    pub fn iter(&self) -> impl Iterator<Item = (&str, &A)> {
        self.actions
            .iter()
            .filter_map(|action| action.entity_id().map(|id| (id, action)))
    }

    pub fn values(&self) -> std::slice::Iter<'_, A> {
        self.actions.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.actions.iter().filter_map(A::entity_id).collect()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn into_values(self) -> Vec<A> {
        self.actions
    }
}

/// 计算 `at` 时刻活动的平台安装动作。
pub fn get_active_platforms(
    collection: &MountActionsCollection,
    at: Option<Date>,
) -> ActiveMounts<PlatformMountAction> {
    resolve_active(
        &collection.platform_mount_actions,
        &collection.platform_unmount_actions,
        at,
    )
}

/// 计算 `at` 时刻活动的设备安装动作。
pub fn get_active_devices(
    collection: &MountActionsCollection,
    at: Option<Date>,
) -> ActiveMounts<DeviceMountAction> {
    resolve_active(
        &collection.device_mount_actions,
        &collection.device_unmount_actions,
        at,
    )
}

fn resolve_active<M, U>(mounts: &[M], unmounts: &[U], at: Option<Date>) -> ActiveMounts<M>
where
    M: MountRecord + Dated + Clone,
    U: UnmountRecord,
{
    let Some(at) = at else {
        return ActiveMounts::default();
    };

    let unidentified = mounts.iter().filter(|m| m.entity_id().is_none()).count()
        + unmounts.iter().filter(|u| u.entity_id().is_none()).count();
    if unidentified > 0 {
        debug!(unidentified, "ignoring actions for entities without id");
    }

    let mut candidates: Vec<&M> = mounts
        .iter()
        .filter(|mount| mount.entity_id().is_some() && mount.begin_date() <= at)
        .collect();
    // 稳定排序：同一时刻保持输入顺序，后者覆盖前者
    candidates.sort_by(|a, b| by_date_oldest_first(*a, *b));

    let mut latest: HashMap<&str, (usize, &M)> = HashMap::new();
    for (pos, mount) in candidates.iter().enumerate() {
        if let Some(id) = mount.entity_id() {
            latest.insert(id, (pos, *mount));
        }
    }

    let mut last_unmount: HashMap<&str, Date> = HashMap::new();
    for unmount in unmounts.iter().filter(|u| u.end_date() <= at) {
        if let Some(id) = unmount.entity_id() {
            let end = unmount.end_date();
            last_unmount
                .entry(id)
                .and_modify(|current| {
                    if end > *current {
                        *current = end;
                    }
                })
                .or_insert(end);
        }
    }

    let mut active: Vec<(usize, &M)> = latest
        .into_iter()
        .filter(|(id, (_, mount))| match last_unmount.get(id) {
            // 拆卸日期等于安装日期同样视为关闭
            Some(end) => *end < mount.begin_date(),
            None => true,
        })
        .map(|(_, entry)| entry)
        .collect();
    active.sort_by_key(|(pos, _)| *pos);

    ActiveMounts::from_ordered(active.into_iter().map(|(_, mount)| mount.clone()).collect())
}
