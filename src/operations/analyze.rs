use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Config;
use crate::models::{ProjectReport, RenderedTree, SizeBreakdown};
use crate::scanner::{DependencyRanker, ProjectWalker, SizeCalculator, TreeWalker};

/// 项目分析器 - 依次执行各项统计并汇总为报告数据
pub struct ProjectAnalyzer {
    config: Config,
    show_progress: bool,
}

impl ProjectAnalyzer {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            show_progress: false,
        }
    }

    /// 在终端显示进度
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 分析项目根目录
    ///
    /// 各步骤依次执行，任何一步失败都只会得到空结果，不会中断分析。
    pub fn analyze(&self, project_root: &Path) -> ProjectReport {
        let progress = if self.show_progress && !cfg!(test) {
            self.create_progress_bar()
        } else {
            ProgressBar::hidden()
        };

        let scan = &self.config.scan;
        let size_calculator = SizeCalculator::with_follow_symlinks(scan.follow_symlinks);

        progress.set_message("统计源码大小...");
        let sizes = match ProjectWalker::new(&self.config).scan(project_root) {
            Ok(sizes) => sizes,
            Err(err) => {
                tracing::warn!("项目扫描失败: {:#}", err);
                SizeBreakdown::default()
            }
        };

        progress.set_message(format!("统计依赖 {} ...", scan.dependency_root));
        let dependencies = DependencyRanker::with_size_calculator(size_calculator)
            .rank(&project_root.join(&scan.dependency_root));

        progress.set_message(format!("统计构建产物 {} ...", scan.build_root));
        let build_output = size_calculator.measure_directory(&project_root.join(&scan.build_root));

        progress.set_message("生成目录树...");
        let tree_walker = TreeWalker::with_max_depth(self.config.tree.max_depth)
            .follow_symlinks(scan.follow_symlinks);
        let trees = self.config.tree.roots
            .iter()
            .map(|root| RenderedTree {
                title: root.title.clone(),
                listing: tree_walker.walk(&project_root.join(&root.path), &root.path),
            })
            .collect();

        let report = ProjectReport {
            project_root: project_root.to_path_buf(),
            generated_at: Local::now(),
            sizes,
            dependencies,
            build_output_size: build_output.size,
            build_output_skipped: build_output.skipped,
            trees,
        };

        progress.finish_and_clear();

        let skipped = report.skipped_count();
        if skipped > 0 {
            tracing::warn!("分析过程中跳过了 {} 个无法读取的条目", skipped);
        }

        report
    }

    /// 报告输出路径，相对路径基于项目根目录
    pub fn output_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.config.report.output_path)
    }

    /// 创建进度条
    fn create_progress_bar(&self) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
            pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
        }
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}

/// 写入报告文件，必要时创建父目录
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("无法创建目录: {}", parent.display()))?;
        }
    }

    std::fs::write(path, content)
        .with_context(|| format!("无法写入报告: {}", path.display()))?;
    Ok(())
}
