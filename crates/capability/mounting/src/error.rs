//! 安装操作错误类型

/// 结构性错误：程序误用，调用方需直接处理。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    /// 设备节点不能承载子节点
    #[error("selected node-type cannot have children: {0}")]
    NodeCannotHaveChildren(String),
}
