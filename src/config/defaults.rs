use std::collections::HashSet;

use crate::models::Category;
use crate::config::settings::{ClassificationRule, TreeRoot};

pub struct DefaultConfig;

impl DefaultConfig {
    /// 树形结构的最大展示深度（以相对路径中的分隔符数量计）
    pub const TREE_MAX_DEPTH: usize = 4;

    /// 依赖排行表展示的包数量
    pub const TOP_PACKAGES: usize = 20;

    /// 分布图展示的包数量
    pub const CHART_ROWS: usize = 10;

    /// 默认报告输出路径（相对项目根目录）
    pub const OUTPUT_PATH: &'static str = "docs/project_analysis.md";

    /// 依赖缓存目录
    pub const DEPENDENCY_ROOT: &'static str = "node_modules";

    /// 构建产物目录
    pub const BUILD_ROOT: &'static str = "dist";

    /// 常规扫描时整体跳过的目录名
    ///
    /// 依赖目录和构建产物目录由单独的扫描统计，这里排除以免重复计算。
    pub fn default_excluded_dirs() -> HashSet<String> {
        let mut dirs = HashSet::new();

        // 版本控制
        dirs.insert(".git".to_string());

        // 之前生成的报告
        dirs.insert("docs".to_string());

        // 单独统计的目录
        dirs.insert(Self::BUILD_ROOT.to_string());
        dirs.insert(Self::DEPENDENCY_ROOT.to_string());

        dirs
    }

    /// 默认分类规则，按顺序匹配，`src/assets/` 必须排在 `src/` 之前
    pub fn default_classification_rules() -> Vec<ClassificationRule> {
        vec![
            ClassificationRule::new("server/", Category::Backend),
            ClassificationRule::new("src/assets/", Category::Assets),
            ClassificationRule::new("src/", Category::Frontend),
            ClassificationRule::new("public/", Category::Assets),
        ]
    }

    /// 需要输出目录树的根目录
    pub fn default_tree_roots() -> Vec<TreeRoot> {
        vec![
            TreeRoot::new("Backend", "server"),
            TreeRoot::new("Frontend", "src"),
            TreeRoot::new("Build Artifacts", Self::BUILD_ROOT),
        ]
    }
}
