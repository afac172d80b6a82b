//! # SMS Mounting 模块
//!
//! 从扁平的安装/拆卸事件列表重建任意时刻的设备安装层级。
//!
//! ## 模块说明
//!
//! - [`active`]：活动实体解析（每个实体在某时刻最新且未关闭的安装动作）
//! - [`builder`]：安装树构建（孤儿提升、任意嵌套深度）
//! - [`tree`]：安装树查询（查找节点、父节点、路径）
//! - [`node`]：平台节点 / 设备节点
//! - [`mutate`]：安装、拆卸变换（快照入，新快照出）
//! - [`error`]：结构性错误
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use sms_mounting::{ConfigurationsTree, MountDetails, mount_platform, unmount};
//!
//! let collection = mount_platform(&collection, platform, MountDetails::default(), None, t1)?;
//! let tree = ConfigurationsTree::build(&collection, Some(t2));
//! let root = &tree.roots()[0];
//! let collection = unmount(&collection, root, t3, contact, "moved to lab");
//! ```
//!
//! 所有函数都是同步纯函数，不做 I/O，可在时间轴拖动时反复调用。

pub mod active;
pub mod builder;
pub mod error;
pub mod mutate;
pub mod node;
pub mod tree;

pub use active::{ActiveMounts, get_active_devices, get_active_platforms};
pub use builder::{build_configuration_tree, get_action_dates};
pub use error::MountError;
pub use mutate::{MountDetails, mount_device, mount_platform, unmount};
pub use node::{ConfigurationsTreeNode, DeviceNode, PlatformNode};
pub use tree::{ConfigurationsTree, Nodes};
