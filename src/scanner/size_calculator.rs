use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::models::SkippedEntry;

/// 目录大小统计
#[derive(Debug, Clone, Default)]
pub struct DirectorySizeInfo {
    /// 目录路径
    pub path: PathBuf,

    /// 目录下所有文件的总大小
    pub size: u64,

    /// 文件数量
    pub file_count: usize,

    /// 无法读取的条目
    pub skipped: Vec<SkippedEntry>,
}

/// 大小计算器 - 递归累加目录下所有文件的大小
///
/// 不存在或无法读取的目录大小为 0，不会返回错误。
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeCalculator {
    follow_symlinks: bool,
}

impl SizeCalculator {
    pub fn new() -> Self {
        Self::with_follow_symlinks(false)
    }

    /// 指定是否跟随符号链接
    pub fn with_follow_symlinks(follow_symlinks: bool) -> Self {
        Self { follow_symlinks }
    }

    /// 计算指定目录的大小、文件数量及跳过的条目
    pub fn measure_directory(&self, dir_path: &Path) -> DirectorySizeInfo {
        let mut info = DirectorySizeInfo {
            path: dir_path.to_path_buf(),
            ..Default::default()
        };

        for entry in WalkDir::new(dir_path).follow_links(self.follow_symlinks) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    // 根目录不存在不算跳过
                    if err.depth() > 0 {
                        tracing::debug!("跳过无法读取的条目: {}", err);
                        info.skipped.push(SkippedEntry::from(&err));
                    }
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            match entry.metadata() {
                Ok(metadata) => {
                    info.size += metadata.len();
                    info.file_count += 1;
                }
                Err(err) => {
                    tracing::debug!("无法获取文件信息 {}: {}", entry.path().display(), err);
                    info.skipped.push(SkippedEntry::new(entry.path(), &err));
                }
            }
        }

        info
    }
}
