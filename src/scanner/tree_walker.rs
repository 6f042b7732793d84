use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::DefaultConfig;
use crate::models::{SkippedEntry, TreeEntry, TreeListing};

/// 目录树遍历器 - 按深度优先顺序列出目录内容，超过最大深度的子树不再展开
///
/// 每次调用 `iter` 都会重新遍历文件系统，目录内按文件名排序。
pub struct TreeWalker {
    max_depth: usize,
    follow_symlinks: bool,
}

/// 目录树条目的惰性迭代器
pub struct TreeIter {
    root_path: PathBuf,
    inner: walkdir::IntoIter,
}

impl TreeWalker {
    /// 使用默认最大深度创建遍历器
    pub fn new() -> Self {
        Self::with_max_depth(DefaultConfig::TREE_MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            follow_symlinks: false,
        }
    }

    /// 指定是否跟随符号链接
    pub fn follow_symlinks(mut self, follow_symlinks: bool) -> Self {
        self.follow_symlinks = follow_symlinks;
        self
    }

    /// 惰性遍历目录树，根目录本身不出现在结果中
    pub fn iter(&self, root_path: &Path) -> TreeIter {
        // walkdir 的深度比分隔符数量多 1
        let inner = WalkDir::new(root_path)
            .follow_links(self.follow_symlinks)
            .min_depth(1)
            .max_depth(self.max_depth + 1)
            .sort_by_file_name()
            .into_iter();

        TreeIter {
            root_path: root_path.to_path_buf(),
            inner,
        }
    }

    /// 遍历目录树并收集结果
    pub fn walk(&self, root_path: &Path, root_label: &str) -> TreeListing {
        let mut listing = TreeListing {
            root_label: root_label.to_string(),
            ..Default::default()
        };

        for item in self.iter(root_path) {
            match item {
                Ok(entry) => listing.entries.push(entry),
                Err(skipped) => listing.skipped.push(skipped),
            }
        }

        listing
    }

    /// 遍历目录树并渲染为文本
    pub fn render(&self, root_path: &Path, root_label: &str) -> String {
        self.walk(root_path, root_label).render()
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for TreeIter {
    type Item = Result<TreeEntry, SkippedEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    return Some(Ok(TreeEntry {
                        depth: entry.depth() - 1,
                        is_dir: entry.file_type().is_dir(),
                        name: entry.file_name().to_string_lossy().to_string(),
                    }));
                }
                Err(err) if err.depth() == 0 => {
                    // 根目录不存在时只输出标题行
                    tracing::debug!("无法读取目录树根目录 {}: {}", self.root_path.display(), err);
                }
                Err(err) => {
                    tracing::debug!("跳过无法读取的条目: {}", err);
                    return Some(Err(SkippedEntry::from(&err)));
                }
            }
        }
    }
}
