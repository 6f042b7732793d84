use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{DependencyEntry, DependencyRanking, SkippedEntry};
use crate::scanner::SizeCalculator;

/// 依赖排行器 - 统计依赖目录下每个包的大小并排序
///
/// 以 `@` 开头的目录视为作用域，其下每个子目录单独作为一个包，
/// 名称为 `@scope/pkg`。作用域目录下直接存放的文件不计入任何包。
pub struct DependencyRanker {
    size_calculator: SizeCalculator,
}

impl DependencyRanker {
    pub fn new() -> Self {
        Self::with_size_calculator(SizeCalculator::new())
    }

    pub fn with_size_calculator(size_calculator: SizeCalculator) -> Self {
        Self { size_calculator }
    }

    /// 统计依赖根目录，根目录不存在或无法读取时返回空排行
    pub fn rank(&self, dependency_root: &Path) -> DependencyRanking {
        let children = match sorted_subdirectories(dependency_root) {
            Ok(children) => children,
            Err(err) => {
                tracing::warn!("无法读取依赖目录 {}: {}", dependency_root.display(), err);
                return DependencyRanking::default();
            }
        };

        let mut entries = Vec::new();
        let mut skipped = Vec::new();

        for (name, path) in children {
            if name.starts_with('.') {
                continue;
            }

            if name.starts_with('@') {
                self.rank_scope(&name, &path, &mut entries, &mut skipped);
                continue;
            }

            let size = self.measure_package(&path, &mut skipped);
            entries.push(DependencyEntry::new(name, size));
        }

        let ranking = DependencyRanking::from_entries(entries, skipped);
        tracing::info!("依赖统计完成: {} 个包", ranking.len());
        ranking
    }

    /// 统计作用域目录下的每个包
    fn rank_scope(
        &self,
        scope: &str,
        scope_path: &Path,
        entries: &mut Vec<DependencyEntry>,
        skipped: &mut Vec<SkippedEntry>,
    ) {
        let packages = match sorted_subdirectories(scope_path) {
            Ok(packages) => packages,
            Err(err) => {
                tracing::debug!("跳过无法读取的作用域 {}: {}", scope_path.display(), err);
                skipped.push(SkippedEntry::new(scope_path, &err));
                return;
            }
        };

        for (name, path) in packages {
            let size = self.measure_package(&path, skipped);
            entries.push(DependencyEntry::new(format!("{}/{}", scope, name), size));
        }
    }

    /// 统计单个包的大小，包内无法读取的条目追加到 `skipped`
    fn measure_package(&self, package_path: &Path, skipped: &mut Vec<SkippedEntry>) -> u64 {
        let info = self.size_calculator.measure_directory(package_path);
        skipped.extend(info.skipped);
        info.size
    }
}

impl Default for DependencyRanker {
    fn default() -> Self {
        Self::new()
    }
}

/// 列出目录下的直接子目录，按名称排序
///
/// 不跟随符号链接，无法判断类型的条目视为非目录。
fn sorted_subdirectories(dir_path: &Path) -> std::io::Result<Vec<(String, PathBuf)>> {
    let mut subdirectories: Vec<(String, PathBuf)> = fs::read_dir(dir_path)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|entry| (entry.file_name().to_string_lossy().to_string(), entry.path()))
        .collect();

    subdirectories.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(subdirectories)
}
