//! 日志初始化、时间线计数指标与变更 ID 生成。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 时间线指标快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub trees_built: u64,
    pub orphans_promoted: u64,
    pub mounts_appended: u64,
    pub unmounts_appended: u64,
    pub retractions: u64,
    pub actions_purged: u64,
    pub rejected_mounts: u64,
}

/// 时间线指标。
pub struct TelemetryMetrics {
    trees_built: AtomicU64,
    orphans_promoted: AtomicU64,
    mounts_appended: AtomicU64,
    unmounts_appended: AtomicU64,
    retractions: AtomicU64,
    actions_purged: AtomicU64,
    rejected_mounts: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            trees_built: AtomicU64::new(0),
            orphans_promoted: AtomicU64::new(0),
            mounts_appended: AtomicU64::new(0),
            unmounts_appended: AtomicU64::new(0),
            retractions: AtomicU64::new(0),
            actions_purged: AtomicU64::new(0),
            rejected_mounts: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            trees_built: self.trees_built.load(Ordering::Relaxed),
            orphans_promoted: self.orphans_promoted.load(Ordering::Relaxed),
            mounts_appended: self.mounts_appended.load(Ordering::Relaxed),
            unmounts_appended: self.unmounts_appended.load(Ordering::Relaxed),
            retractions: self.retractions.load(Ordering::Relaxed),
            actions_purged: self.actions_purged.load(Ordering::Relaxed),
            rejected_mounts: self.rejected_mounts.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing；`filter` 无法解析时回退到 info。
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成一次安装/拆卸变换的 change_id（用于日志关联）。
pub fn new_change_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// 记录安装树构建次数。
pub fn record_tree_built() {
    metrics().trees_built.fetch_add(1, Ordering::Relaxed);
}

/// 记录孤儿平台/设备被提升为根节点的次数。
pub fn record_orphan_promoted() {
    metrics().orphans_promoted.fetch_add(1, Ordering::Relaxed);
}

/// 记录新增安装动作次数。
pub fn record_mount_appended() {
    metrics().mounts_appended.fetch_add(1, Ordering::Relaxed);
}

/// 记录新增拆卸动作次数。
pub fn record_unmount_appended() {
    metrics().unmounts_appended.fetch_add(1, Ordering::Relaxed);
}

/// 记录同一时刻撤回安装的次数。
pub fn record_retraction() {
    metrics().retractions.fetch_add(1, Ordering::Relaxed);
}

/// 记录级联清除的动作数量。
pub fn record_actions_purged(count: u64) {
    metrics().actions_purged.fetch_add(count, Ordering::Relaxed);
}

/// 记录被拒绝的安装（父节点不能承载子节点）。
pub fn record_rejected_mount() {
    metrics().rejected_mounts.fetch_add(1, Ordering::Relaxed);
}
