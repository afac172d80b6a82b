//! # SMS Location 模块
//!
//! 配置的位置时间线：静态/动态位置开始与结束动作的配对，
//! 以及“某时刻生效的位置”等查询。
//!
//! - [`pairing`]：开始/结束动作配对与完整时间线
//! - [`resolver`]：当前位置、配对结束动作、相邻日期查询

pub mod pairing;
pub mod resolver;

pub use pairing::{LocationTimelineEntry, get_location_timeline};
pub use resolver::{
    get_currently_active_location_action, get_end_action_for_active_location,
    get_latest_active_action_end_date, get_next_active_location_begin_date,
};
