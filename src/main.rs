mod cli;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, OutputFormat};
use project_footprint::config::Config;
use project_footprint::operations::{ProjectAnalyzer, write_report};
use project_footprint::report::{MarkdownFormatter, render_json};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志，输出到 stderr，避免与报告内容混在一起
    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // 加载配置
    let mut config = match &cli.config {
        Some(config_path) => Config::load_from_file(config_path)?,
        None => Config::default(),
    };
    if let Some(output) = cli.output {
        config.report.output_path = output;
    }

    let analyzer = ProjectAnalyzer::new(config).with_progress(!cli.stdout);
    let report = analyzer.analyze(&cli.root);

    let content = match cli.format {
        OutputFormat::Markdown => MarkdownFormatter::new(analyzer.config()).render(&report),
        OutputFormat::Json => render_json(&report)?,
    };

    if cli.stdout {
        print!("{}", content);
        return Ok(());
    }

    let output_path = analyzer.output_path(&cli.root);
    if let Err(err) = write_report(&output_path, &content) {
        tracing::error!("生成报告失败: {:#}", err);
        return Err(err);
    }

    println!("Report generated at {}", output_path.display());
    Ok(())
}
