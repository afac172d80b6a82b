//! 安装树查询
//!
//! 对根节点列表的只读包装：按实体查找节点、父节点、根到节点的路径。

use crate::builder::build_configuration_tree;
use crate::node::{ConfigurationsTreeNode, DeviceNode, PlatformNode};
use domain::{Date, MountActionsCollection};

/// 某一时刻的安装树。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigurationsTree {
    roots: Vec<ConfigurationsTreeNode>,
}

impl ConfigurationsTree {
    pub fn from_roots(roots: Vec<ConfigurationsTreeNode>) -> Self {
        Self { roots }
    }

    /// 构建 `at` 时刻的安装树。
    pub fn build(collection: &MountActionsCollection, at: Option<Date>) -> Self {
        Self::from_roots(build_configuration_tree(collection, at))
    }

    pub fn roots(&self) -> &[ConfigurationsTreeNode] {
        &self.roots
    }

    pub fn into_roots(self) -> Vec<ConfigurationsTreeNode> {
        self.roots
    }

    /// 所有层级的节点总数。
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// 深度优先（先序）遍历所有节点。
    pub fn iter(&self) -> Nodes<'_> {
        Nodes {
            stack: self.roots.iter().rev().collect(),
        }
    }

    pub fn find_platform(&self, platform_id: &str) -> Option<&PlatformNode> {
        self.iter()
            .filter_map(ConfigurationsTreeNode::as_platform)
            .find(|node| node.unpack().platform.id == platform_id)
    }

    pub fn find_device(&self, device_id: &str) -> Option<&DeviceNode> {
        self.iter()
            .filter_map(ConfigurationsTreeNode::as_device)
            .find(|node| node.unpack().device.id == device_id)
    }

    /// 节点的父平台节点；根节点或不在树中时为 None。
    pub fn get_parent(&self, node: &ConfigurationsTreeNode) -> Option<&PlatformNode> {
        self.iter()
            .filter_map(ConfigurationsTreeNode::as_platform)
            .find(|parent| {
                parent
                    .children()
                    .iter()
                    .any(|child| child.is_same_entity(node))
            })
    }

    /// 根到节点（含）的展示名称路径；不在树中时为空。
    pub fn get_path(&self, node: &ConfigurationsTreeNode) -> Vec<String> {
        let mut path = Vec::new();
        if path_to(&self.roots, node, &mut path) {
            path.into_iter().map(|item| item.label().to_string()).collect()
        } else {
            Vec::new()
        }
    }

    pub fn all_platform_nodes(&self) -> Vec<&PlatformNode> {
        self.iter()
            .filter_map(ConfigurationsTreeNode::as_platform)
            .collect()
    }

    pub fn all_device_nodes(&self) -> Vec<&DeviceNode> {
        self.iter()
            .filter_map(ConfigurationsTreeNode::as_device)
            .collect()
    }
}

fn path_to<'a>(
    nodes: &'a [ConfigurationsTreeNode],
    target: &ConfigurationsTreeNode,
    path: &mut Vec<&'a ConfigurationsTreeNode>,
) -> bool {
    for node in nodes {
        path.push(node);
        if node.is_same_entity(target) || path_to(node.children(), target, path) {
            return true;
        }
        path.pop();
    }
    false
}

/// 先序节点迭代器。
pub struct Nodes<'a> {
    stack: Vec<&'a ConfigurationsTreeNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a ConfigurationsTreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a ConfigurationsTree {
    type Item = &'a ConfigurationsTreeNode;
    type IntoIter = Nodes<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
