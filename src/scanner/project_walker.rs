use std::collections::HashSet;
use std::path::Path;
use anyhow::{anyhow, Result};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::models::{SizeBreakdown, SkippedEntry};
use crate::scanner::PathClassifier;

/// 项目遍历器 - 一次遍历整个项目，按区域累加文件大小
pub struct ProjectWalker {
    classifier: PathClassifier,

    /// 整体跳过的目录名（包括其全部内容）
    excluded_dirs: HashSet<String>,

    follow_symlinks: bool,
}

impl ProjectWalker {
    /// 根据配置创建遍历器
    pub fn new(config: &Config) -> Self {
        Self {
            classifier: PathClassifier::with_rules(config.classification.clone()),
            excluded_dirs: config.scan.excluded_dirs.clone(),
            follow_symlinks: config.scan.follow_symlinks,
        }
    }

    /// 扫描项目根目录
    ///
    /// 单个条目出错时记录并跳过；只有根目录本身无法读取时返回错误。
    pub fn scan(&self, root_path: &Path) -> Result<SizeBreakdown> {
        let mut breakdown = SizeBreakdown::default();

        let walker = WalkDir::new(root_path)
            .follow_links(self.follow_symlinks)
            .into_iter()
            .filter_entry(|entry| !self.is_excluded(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    if err.depth() == 0 {
                        return Err(anyhow!("无法遍历项目根目录 {}: {}", root_path.display(), err));
                    }
                    tracing::debug!("跳过无法读取的条目: {}", err);
                    breakdown.record_skipped(SkippedEntry::from(&err));
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            let size = match entry.metadata() {
                Ok(metadata) => metadata.len(),
                Err(err) => {
                    tracing::debug!("无法获取文件信息 {}: {}", entry.path().display(), err);
                    breakdown.record_skipped(SkippedEntry::new(entry.path(), &err));
                    continue;
                }
            };

            let relative = entry.path().strip_prefix(root_path).unwrap_or(entry.path());
            breakdown.record(self.classifier.classify(relative), size);
        }

        tracing::info!(
            "项目扫描完成: {} 个文件, 跳过 {} 个条目",
            breakdown.file_count,
            breakdown.skipped.len()
        );

        Ok(breakdown)
    }

    /// 检查是否应该跳过该目录，根目录本身从不跳过
    fn is_excluded(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }

        entry.file_name()
            .to_str()
            .map(|name| self.excluded_dirs.contains(name))
            .unwrap_or(false)
    }
}
