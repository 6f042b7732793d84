use crate::config::Config;
use crate::models::{Category, DependencyRanking, ProjectReport, RenderedTree};
use crate::utils::size_format::format_size;
use crate::utils::time_format::format_time;

/// 分布图中包名列的宽度
const CHART_NAME_WIDTH: usize = 25;

/// Markdown 报告渲染器
pub struct MarkdownFormatter<'a> {
    config: &'a Config,
    output: String,
}

impl<'a> MarkdownFormatter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    /// 渲染完整报告
    pub fn render(mut self, report: &ProjectReport) -> String {
        self.output.push_str("# Project Codebase Analysis\n\n");
        self.output.push_str(&format!(
            "_Generated {} for `{}`_\n\n",
            format_time(&report.generated_at),
            report.project_root.display()
        ));

        self.write_file_sizes(report);
        self.write_packages(&report.dependencies);
        self.write_trees(&report.trees);

        self.output
    }

    fn write_file_sizes(&mut self, report: &ProjectReport) {
        let sizes = &report.sizes;
        let scan = &self.config.scan;

        self.output.push_str("## 1. File Sizes\n\n");
        self.output.push_str("| Category | Size |\n");
        self.output.push_str("| :--- | :--- |\n");
        self.output.push_str(&format!("| **Total Source Code** | **{}** |\n", format_size(sizes.total)));
        for category in Category::ALL {
            self.output.push_str(&format!(
                "| {} | {} |\n",
                self.category_label(category),
                format_size(sizes.category_size(category))
            ));
        }
        self.output.push_str(&format!(
            "| Dependencies (`{}`) | {} |\n",
            scan.dependency_root,
            format_size(report.dependencies.total)
        ));
        self.output.push_str(&format!(
            "| **Optimized Build (`{}/`)** | **{}** |\n",
            scan.build_root,
            format_size(report.build_output_size)
        ));
        self.output.push('\n');
    }

    /// 区域名称及其配置的路径前缀，如 ``Assets (`public/` + `src/assets/`)``
    fn category_label(&self, category: Category) -> String {
        let mut prefixes: Vec<&str> = self.config.classification
            .iter()
            .filter(|rule| rule.category == category)
            .map(|rule| rule.prefix.as_str())
            .collect();

        if prefixes.is_empty() {
            return category.display_name().to_string();
        }

        prefixes.sort();
        prefixes.dedup();
        let quoted: Vec<String> = prefixes.iter().map(|p| format!("`{}`", p)).collect();
        format!("{} ({})", category.display_name(), quoted.join(" + "))
    }

    fn write_packages(&mut self, ranking: &DependencyRanking) {
        self.output.push_str("## 2. Top Large Packages\n\n");
        self.output.push_str(&format!(
            "List of largest dependencies folders in `{}`.\n\n",
            self.config.scan.dependency_root
        ));
        self.output.push_str("| Package | Size | % of modules  |\n");
        self.output.push_str("| :--- | :--- | :--- |\n");

        for entry in ranking.top(self.config.report.top_packages) {
            self.output.push_str(&format!(
                "| `{}` | {} | {:.1}% |\n",
                entry.name,
                format_size(entry.size),
                ranking.percent_of(entry.size)
            ));
        }
        self.output.push('\n');

        self.output.push_str(&format!(
            "### Size Distribution (Top {})\n```\n",
            self.config.report.chart_rows
        ));
        for entry in ranking.top(self.config.report.chart_rows) {
            let percent = ranking.percent_of(entry.size);
            self.output.push_str(&format!(
                "{:<width$} |{} {:.1}%\n",
                entry.name,
                bar(percent),
                percent,
                width = CHART_NAME_WIDTH
            ));
        }
        self.output.push_str("```\n\n");
    }

    fn write_trees(&mut self, trees: &[RenderedTree]) {
        self.output.push_str("## 3. Directory Structure\n\n");

        for (index, tree) in trees.iter().enumerate() {
            if index > 0 {
                self.output.push('\n');
            }
            self.output.push_str(&format!("### {} (`{}/`)\n", tree.title, tree.listing.root_label));
            self.output.push_str("```\n");
            self.output.push_str(&tree.listing.render());
            self.output.push_str("```\n");
        }
    }
}

/// 长度为百分比整数部分的条形
fn bar(percent: f64) -> String {
    "█".repeat(percent.max(0.0) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use std::path::PathBuf;

    use crate::config::ClassificationRule;
    use crate::models::{DependencyEntry, SizeBreakdown, TreeEntry, TreeListing};

    fn sample_report() -> ProjectReport {
        ProjectReport {
            project_root: PathBuf::from("."),
            generated_at: Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            sizes: SizeBreakdown {
                total: 4096,
                backend: 2048,
                frontend: 1024,
                assets: 512,
                unclassified: 512,
                file_count: 4,
                skipped: Vec::new(),
            },
            dependencies: DependencyRanking::from_entries(vec![
                DependencyEntry::new("@scope/pkgA", 10),
                DependencyEntry::new("@scope/pkgB", 20),
                DependencyEntry::new("plain-pkg", 5),
            ], Vec::new()),
            build_output_size: 1_048_576,
            build_output_skipped: Vec::new(),
            trees: vec![RenderedTree {
                title: "Backend".to_string(),
                listing: TreeListing {
                    root_label: "server".to_string(),
                    entries: vec![
                        TreeEntry { depth: 0, is_dir: true, name: "routes".to_string() },
                        TreeEntry { depth: 1, is_dir: false, name: "api.ts".to_string() },
                    ],
                    skipped: Vec::new(),
                },
            }],
        }
    }

    #[test]
    fn test_render_size_table() {
        let config = Config::default();
        let markdown = MarkdownFormatter::new(&config).render(&sample_report());

        assert!(markdown.starts_with("# Project Codebase Analysis\n\n_Generated 2024-01-02 03:04:05 for `.`_\n"));
        assert!(markdown.contains("| **Total Source Code** | **4.0 KB** |\n"));
        assert!(markdown.contains("| Backend (`server/`) | 2.0 KB |\n"));
        assert!(markdown.contains("| Frontend (`src/`) | 1.0 KB |\n"));
        assert!(markdown.contains("| Assets (`public/` + `src/assets/`) | 512 B |\n"));
        assert!(markdown.contains("| Dependencies (`node_modules`) | 35 B |\n"));
        assert!(markdown.contains("| **Optimized Build (`dist/`)** | **1.0 MB** |\n"));
    }

    #[test]
    fn test_category_labels_follow_configured_rules() {
        let mut config = Config::default();
        config.classification = vec![
            ClassificationRule::new("api/", Category::Backend),
            ClassificationRule::new("web/static/", Category::Assets),
            ClassificationRule::new("web/", Category::Frontend),
            ClassificationRule::new("cdn/", Category::Assets),
        ];
        let markdown = MarkdownFormatter::new(&config).render(&sample_report());

        assert!(markdown.contains("| Backend (`api/`) | 2.0 KB |\n"));
        assert!(markdown.contains("| Frontend (`web/`) | 1.0 KB |\n"));
        assert!(markdown.contains("| Assets (`cdn/` + `web/static/`) | 512 B |\n"));
        assert!(!markdown.contains("| Backend (`server/`)"));
    }

    #[test]
    fn test_category_without_rules_has_plain_label() {
        let mut config = Config::default();
        config.classification = vec![ClassificationRule::new("lib/", Category::Backend)];
        let markdown = MarkdownFormatter::new(&config).render(&sample_report());

        assert!(markdown.contains("| Frontend | 1.0 KB |\n"));
        assert!(markdown.contains("| Assets | 512 B |\n"));
    }

    #[test]
    fn test_render_package_table_and_chart() {
        let config = Config::default();
        let markdown = MarkdownFormatter::new(&config).render(&sample_report());

        assert!(markdown.contains("| `@scope/pkgB` | 20 B | 57.1% |\n| `@scope/pkgA` | 10 B | 28.6% |\n| `plain-pkg` | 5 B | 14.3% |\n"));
        let chart_line = format!("{:<25} |{} 57.1%\n", "@scope/pkgB", "█".repeat(57));
        assert!(markdown.contains(&chart_line));
        assert!(markdown.contains("### Size Distribution (Top 10)\n```\n"));
    }

    #[test]
    fn test_package_table_is_capped() {
        let mut config = Config::default();
        config.report.top_packages = 1;
        config.report.chart_rows = 2;
        let markdown = MarkdownFormatter::new(&config).render(&sample_report());

        assert!(markdown.contains("| `@scope/pkgB` |"));
        assert!(!markdown.contains("| `@scope/pkgA` |"));
        assert!(markdown.contains("@scope/pkgA               |"));
        assert!(!markdown.contains("plain-pkg                 |"));
    }

    #[test]
    fn test_render_trees() {
        let config = Config::default();
        let markdown = MarkdownFormatter::new(&config).render(&sample_report());

        assert!(markdown.ends_with("## 3. Directory Structure\n\n### Backend (`server/`)\n```\nserver\n└─ routes/\n  ├─ api.ts\n```\n"));
    }

    #[test]
    fn test_empty_dependencies_render_empty_section() {
        let config = Config::default();
        let mut report = sample_report();
        report.dependencies = DependencyRanking::default();
        let markdown = MarkdownFormatter::new(&config).render(&report);

        assert!(markdown.contains("| :--- | :--- | :--- |\n\n### Size Distribution (Top 10)\n```\n```\n"));
        assert!(markdown.contains("| Dependencies (`node_modules`) | 0 B |\n"));
    }
}
