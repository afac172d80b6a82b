//! 设备元数据实体
//!
//! 安装与位置动作只引用这些实体，不拥有其生命周期。
//! `id` 为空字符串表示尚未持久化。

use serde::{Deserialize, Serialize};

/// 平台（可承载其他平台或设备）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub id: String,
    pub short_name: String,
    pub long_name: String,
}

impl Platform {
    pub fn new(id: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            short_name: short_name.into(),
            long_name: String::new(),
        }
    }

    /// 已持久化的 ID；未持久化时为 None。
    pub fn persisted_id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    /// 展示名称：短名 → 长名 → ID。
    pub fn label(&self) -> &str {
        label_of(&self.short_name, &self.long_name, &self.id)
    }
}

/// 设备（只能被安装，不能承载子节点）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    pub short_name: String,
    pub long_name: String,
    pub serial_number: String,
}

impl Device {
    pub fn new(id: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            short_name: short_name.into(),
            long_name: String::new(),
            serial_number: String::new(),
        }
    }

    /// 已持久化的 ID；未持久化时为 None。
    pub fn persisted_id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    /// 展示名称：短名 → 长名 → ID。
    pub fn label(&self) -> &str {
        label_of(&self.short_name, &self.long_name, &self.id)
    }
}

/// 负责人。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub given_name: String,
    pub family_name: String,
    pub email: String,
}

impl Contact {
    pub fn new(
        id: impl Into<String>,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            given_name: given_name.into(),
            family_name: family_name.into(),
            email: email.into(),
        }
    }
}

/// 设备测量属性（动态位置的 x/y/z 通道）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProperty {
    pub id: String,
    pub property_name: String,
    pub unit_name: String,
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

fn label_of<'a>(short_name: &'a str, long_name: &'a str, id: &'a str) -> &'a str {
    [short_name, long_name]
        .into_iter()
        .find(|name| !name.is_empty())
        .unwrap_or(id)
}
