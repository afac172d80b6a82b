//! 安装树节点
//!
//! 节点只在构建安装树时临时生成，不做持久化；
//! 节点身份取自所包装安装动作的实体 ID。

use crate::error::MountError;
use domain::{Date, DeviceMountAction, MountAction, MountRecord, PlatformMountAction};

/// 平台节点：可以承载平台或设备子节点。
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformNode {
    action: PlatformMountAction,
    children: Vec<ConfigurationsTreeNode>,
}

impl PlatformNode {
    pub fn new(action: PlatformMountAction) -> Self {
        Self {
            action,
            children: Vec::new(),
        }
    }

    pub fn unpack(&self) -> &PlatformMountAction {
        &self.action
    }

    pub fn children(&self) -> &[ConfigurationsTreeNode] {
        &self.children
    }

    pub fn add_child(&mut self, child: ConfigurationsTreeNode) {
        self.children.push(child);
    }

    pub fn can_have_children(&self) -> bool {
        true
    }
}

/// 设备节点：叶子，子节点列表恒为空。
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceNode {
    action: DeviceMountAction,
}

impl DeviceNode {
    pub fn new(action: DeviceMountAction) -> Self {
        Self { action }
    }

    pub fn unpack(&self) -> &DeviceMountAction {
        &self.action
    }

    pub fn children(&self) -> &[ConfigurationsTreeNode] {
        &[]
    }

    /// 始终失败：设备不能承载子节点。
    pub fn add_child(&mut self, _child: ConfigurationsTreeNode) -> Result<(), MountError> {
        Err(MountError::NodeCannotHaveChildren(
            self.action.device.label().to_string(),
        ))
    }

    pub fn can_have_children(&self) -> bool {
        false
    }
}

/// 安装树节点（平台或设备）。
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationsTreeNode {
    Platform(PlatformNode),
    Device(DeviceNode),
}

impl ConfigurationsTreeNode {
    pub fn can_have_children(&self) -> bool {
        match self {
            ConfigurationsTreeNode::Platform(node) => node.can_have_children(),
            ConfigurationsTreeNode::Device(node) => node.can_have_children(),
        }
    }

    pub fn children(&self) -> &[ConfigurationsTreeNode] {
        match self {
            ConfigurationsTreeNode::Platform(node) => node.children(),
            ConfigurationsTreeNode::Device(node) => node.children(),
        }
    }

    pub fn add_child(&mut self, child: ConfigurationsTreeNode) -> Result<(), MountError> {
        match self {
            ConfigurationsTreeNode::Platform(node) => {
                node.add_child(child);
                Ok(())
            }
            ConfigurationsTreeNode::Device(node) => node.add_child(child),
        }
    }

    /// 取出所包装的安装动作（克隆）。
    pub fn unpack(&self) -> MountAction {
        match self {
            ConfigurationsTreeNode::Platform(node) => MountAction::Platform(node.unpack().clone()),
            ConfigurationsTreeNode::Device(node) => MountAction::Device(node.unpack().clone()),
        }
    }

    pub fn as_platform(&self) -> Option<&PlatformNode> {
        match self {
            ConfigurationsTreeNode::Platform(node) => Some(node),
            ConfigurationsTreeNode::Device(_) => None,
        }
    }

    pub fn as_device(&self) -> Option<&DeviceNode> {
        match self {
            ConfigurationsTreeNode::Platform(_) => None,
            ConfigurationsTreeNode::Device(node) => Some(node),
        }
    }

    pub fn is_platform(&self) -> bool {
        matches!(self, ConfigurationsTreeNode::Platform(_))
    }

    pub fn is_device(&self) -> bool {
        matches!(self, ConfigurationsTreeNode::Device(_))
    }

    /// 节点身份：被安装实体的 ID。
    pub fn entity_id(&self) -> Option<&str> {
        match self {
            ConfigurationsTreeNode::Platform(node) => node.unpack().entity_id(),
            ConfigurationsTreeNode::Device(node) => node.unpack().entity_id(),
        }
    }

    pub fn begin_date(&self) -> Date {
        match self {
            ConfigurationsTreeNode::Platform(node) => node.unpack().begin_date,
            ConfigurationsTreeNode::Device(node) => node.unpack().begin_date,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ConfigurationsTreeNode::Platform(node) => node.unpack().platform.label(),
            ConfigurationsTreeNode::Device(node) => node.unpack().device.label(),
        }
    }

    /// 两个节点是否指向同一实体（类别与 ID 都相同）。
    pub fn is_same_entity(&self, other: &ConfigurationsTreeNode) -> bool {
        self.is_platform() == other.is_platform()
            && self.entity_id().is_some()
            && self.entity_id() == other.entity_id()
    }
}

impl From<PlatformNode> for ConfigurationsTreeNode {
    fn from(node: PlatformNode) -> Self {
        ConfigurationsTreeNode::Platform(node)
    }
}

impl From<DeviceNode> for ConfigurationsTreeNode {
    fn from(node: DeviceNode) -> Self {
        ConfigurationsTreeNode::Device(node)
    }
}
