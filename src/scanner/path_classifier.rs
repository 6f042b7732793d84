use std::path::{Component, Path};

use crate::config::{ClassificationRule, DefaultConfig};
use crate::models::Category;

/// 路径分类器 - 根据相对路径前缀判断文件所属区域
pub struct PathClassifier {
    /// 按顺序匹配的规则，第一条命中的规则生效
    rules: Vec<ClassificationRule>,
}

impl PathClassifier {
    /// 使用默认规则创建分类器
    pub fn new() -> Self {
        Self::with_rules(DefaultConfig::default_classification_rules())
    }

    /// 使用自定义规则创建分类器
    pub fn with_rules(rules: Vec<ClassificationRule>) -> Self {
        Self { rules }
    }

    /// 对相对项目根目录的路径分类，不属于任何区域时返回 None
    pub fn classify(&self, relative_path: &Path) -> Option<Category> {
        self.classify_normalized(&normalize_path(relative_path))
    }

    /// 对已经规范化为 `/` 分隔的路径分类
    pub fn classify_normalized(&self, normalized: &str) -> Option<Category> {
        self.rules
            .iter()
            .find(|rule| normalized.starts_with(rule.prefix.as_str()))
            .map(|rule| rule.category)
    }
}

impl Default for PathClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// 将相对路径转换为以 `/` 分隔的字符串
pub fn normalize_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
