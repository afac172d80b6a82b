//! 传感器管理系统的核心领域模型。
//!
//! - [`entities`]：平台、设备、联系人、设备属性
//! - [`actions`]：安装/拆卸动作与动作快照
//! - [`location`]：配置与静态/动态位置动作
//! - [`dates`]：时间点比较与解析

pub mod actions;
pub mod dates;
pub mod entities;
pub mod location;

pub use actions::{
    DeviceMountAction, DeviceUnmountAction, MountAction, MountActionsCollection, MountRecord,
    PlatformMountAction, PlatformUnmountAction, UnmountRecord,
};
pub use dates::{
    Date, DateParseError, Dated, by_date_oldest_first, by_date_oldest_last, date_times_equal,
    parse_date,
};
pub use entities::{Contact, Device, DeviceProperty, Platform};
pub use location::{
    Configuration, DynamicLocationBeginAction, DynamicLocationEndAction, LocationBeginAction,
    LocationEndAction, LocationKind, StaticLocationBeginAction, StaticLocationEndAction,
};
