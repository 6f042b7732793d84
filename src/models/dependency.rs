use serde::{Deserialize, Serialize};

use crate::models::SkippedEntry;

/// 单个依赖包的大小
///
/// 作用域包的名称形如 `@scope/pkg`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEntry {
    pub name: String,
    pub size: u64,
}

/// 依赖目录的大小排行
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyRanking {
    /// 按大小降序排列，大小相同时保持遍历顺序
    pub entries: Vec<DependencyEntry>,

    /// 所有条目大小之和
    pub total: u64,

    /// 无法读取的作用域目录等
    pub skipped: Vec<SkippedEntry>,
}

impl DependencyEntry {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl DependencyRanking {
    /// 由未排序的条目构建排行
    pub fn from_entries(mut entries: Vec<DependencyEntry>, skipped: Vec<SkippedEntry>) -> Self {
        let total = entries.iter().map(|e| e.size).sum();

        // sort_by 是稳定排序
        entries.sort_by(|a, b| b.size.cmp(&a.size));

        Self {
            entries,
            total,
            skipped,
        }
    }

    /// 占依赖总大小的百分比，总大小为 0 时返回 0
    pub fn percent_of(&self, size: u64) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        size as f64 / self.total as f64 * 100.0
    }

    /// 最大的 n 个依赖
    pub fn top(&self, n: usize) -> &[DependencyEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
