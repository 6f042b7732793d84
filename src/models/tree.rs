use serde::{Deserialize, Serialize};

use crate::models::SkippedEntry;

/// 目录树中的一个条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    /// 相对根目录路径中的分隔符数量，根目录的直接子项为 0
    pub depth: usize,

    pub is_dir: bool,

    /// 文件名
    pub name: String,
}

/// 一次目录树遍历的结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeListing {
    /// 首行显示的根目录名称
    pub root_label: String,

    /// 深度优先顺序的条目
    pub entries: Vec<TreeEntry>,

    pub skipped: Vec<SkippedEntry>,
}

impl TreeEntry {
    /// 渲染为一行文本（不含换行）
    pub fn render_line(&self) -> String {
        let indent = "  ".repeat(self.depth);
        if self.is_dir {
            format!("{}└─ {}/", indent, self.name)
        } else {
            format!("{}├─ {}", indent, self.name)
        }
    }
}

impl TreeListing {
    /// 渲染为文本：首行为根目录名称，之后每个条目一行
    pub fn render(&self) -> String {
        let mut text = String::new();
        text.push_str(&self.root_label);
        text.push('\n');

        for entry in &self.entries {
            text.push_str(&entry.render_line());
            text.push('\n');
        }

        text
    }
}
