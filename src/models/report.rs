use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::{DependencyRanking, SizeBreakdown, SkippedEntry, TreeListing};

/// 报告中的一棵目录树
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedTree {
    /// 小节标题
    pub title: String,

    pub listing: TreeListing,
}

/// 一次分析的全部结果，报告由它渲染
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectReport {
    /// 被分析的项目根目录
    pub project_root: PathBuf,

    /// 生成时间
    pub generated_at: DateTime<Local>,

    /// 源码分类统计
    pub sizes: SizeBreakdown,

    /// 依赖排行
    pub dependencies: DependencyRanking,

    /// 构建产物总大小
    pub build_output_size: u64,

    /// 构建产物目录中无法读取的条目
    pub build_output_skipped: Vec<SkippedEntry>,

    /// 目录树
    pub trees: Vec<RenderedTree>,
}

impl ProjectReport {
    /// 所有步骤中被跳过的条目数量
    pub fn skipped_count(&self) -> usize {
        self.sizes.skipped.len()
            + self.dependencies.skipped.len()
            + self.build_output_skipped.len()
            + self.trees.iter().map(|t| t.listing.skipped.len()).sum::<usize>()
    }
}
