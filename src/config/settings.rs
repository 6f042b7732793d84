use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

use crate::config::defaults::DefaultConfig;
use crate::models::Category;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 路径分类规则，按顺序匹配
    pub classification: Vec<ClassificationRule>,

    /// 扫描配置
    pub scan: ScanConfig,

    /// 目录树配置
    pub tree: TreeConfig,

    /// 报告配置
    pub report: ReportConfig,
}

/// 单条分类规则：相对路径以 `prefix` 开头的文件归入 `category`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRule {
    pub prefix: String,
    pub category: Category,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// 常规扫描时整体跳过的目录名
    pub excluded_dirs: HashSet<String>,

    /// 依赖缓存目录（相对项目根目录）
    pub dependency_root: String,

    /// 构建产物目录（相对项目根目录）
    pub build_root: String,

    /// 是否跟随符号链接
    pub follow_symlinks: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// 需要输出目录树的根目录
    pub roots: Vec<TreeRoot>,

    /// 最大展示深度
    pub max_depth: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeRoot {
    /// 报告中的小节标题
    pub title: String,

    /// 相对项目根目录的路径
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// 报告输出路径（相对路径基于项目根目录）
    pub output_path: PathBuf,

    /// 排行表展示的包数量
    pub top_packages: usize,

    /// 分布图展示的包数量
    pub chart_rows: usize,
}

impl ClassificationRule {
    pub fn new(prefix: impl Into<String>, category: Category) -> Self {
        Self {
            prefix: prefix.into(),
            category,
        }
    }
}

impl TreeRoot {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classification: DefaultConfig::default_classification_rules(),
            scan: ScanConfig::default(),
            tree: TreeConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: DefaultConfig::default_excluded_dirs(),
            dependency_root: DefaultConfig::DEPENDENCY_ROOT.to_string(),
            build_root: DefaultConfig::BUILD_ROOT.to_string(),
            follow_symlinks: false,
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            roots: DefaultConfig::default_tree_roots(),
            max_depth: DefaultConfig::TREE_MAX_DEPTH,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DefaultConfig::OUTPUT_PATH),
            top_packages: DefaultConfig::TOP_PACKAGES,
            chart_rows: DefaultConfig::CHART_ROWS,
        }
    }
}

impl Config {
    /// 从文件加载配置，未出现的字段使用默认值
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("配置文件格式错误: {}", path.display()))?;
        Ok(config)
    }
}
