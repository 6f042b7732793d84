use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 文件所属的区域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// 后端代码
    Backend,

    /// 前端代码
    Frontend,

    /// 静态资源
    Assets,
}

/// 遍历时被跳过的条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedEntry {
    /// 出错的路径（遍历器无法给出路径时为空）
    pub path: PathBuf,

    /// 出错原因
    pub reason: String,
}

/// 一次项目扫描的分类统计结果
///
/// 每次扫描新建一个实例，扫描结束后只读。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeBreakdown {
    /// 所有被统计文件的总大小
    pub total: u64,

    /// `server/` 下的文件
    pub backend: u64,

    /// `src/` 下（不含 `src/assets/`）的文件
    pub frontend: u64,

    /// `public/` 与 `src/assets/` 下的文件
    pub assets: u64,

    /// 不属于任何区域的文件
    pub unclassified: u64,

    /// 被统计的文件数量
    pub file_count: usize,

    /// 被跳过的条目
    pub skipped: Vec<SkippedEntry>,
}

impl Category {
    /// 报告中的展示顺序
    pub const ALL: [Category; 3] = [Category::Backend, Category::Frontend, Category::Assets];

    /// 报告中的显示名称
    pub fn display_name(&self) -> &str {
        match self {
            Category::Backend => "Backend",
            Category::Frontend => "Frontend",
            Category::Assets => "Assets",
        }
    }
}

impl SkippedEntry {
    pub fn new(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<&walkdir::Error> for SkippedEntry {
    fn from(err: &walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        Self::new(path, err)
    }
}

impl SizeBreakdown {
    /// 记录一个文件
    pub fn record(&mut self, category: Option<Category>, size: u64) {
        self.total += size;
        self.file_count += 1;

        match category {
            Some(Category::Backend) => self.backend += size,
            Some(Category::Frontend) => self.frontend += size,
            Some(Category::Assets) => self.assets += size,
            None => self.unclassified += size,
        }
    }

    /// 记录一个被跳过的条目
    pub fn record_skipped(&mut self, entry: SkippedEntry) {
        self.skipped.push(entry);
    }

    /// 获取指定区域的大小
    pub fn category_size(&self, category: Category) -> u64 {
        match category {
            Category::Backend => self.backend,
            Category::Frontend => self.frontend,
            Category::Assets => self.assets,
        }
    }

    /// 归入三个区域的大小之和
    pub fn classified(&self) -> u64 {
        self.backend + self.frontend + self.assets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_totals_consistent() {
        let mut breakdown = SizeBreakdown::default();
        breakdown.record(Some(Category::Backend), 10);
        breakdown.record(Some(Category::Frontend), 20);
        breakdown.record(Some(Category::Assets), 30);
        breakdown.record(None, 40);

        assert_eq!(breakdown.total, 100);
        assert_eq!(breakdown.classified(), 60);
        assert_eq!(breakdown.total, breakdown.classified() + breakdown.unclassified);
        assert_eq!(breakdown.file_count, 4);
        assert_eq!(breakdown.category_size(Category::Assets), 30);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Frontend).unwrap();
        assert_eq!(json, "\"frontend\"");
    }
}
