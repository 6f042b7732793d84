use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "project-footprint")]
#[command(about = "统计项目源码、依赖和构建产物的磁盘占用并生成报告")]
#[command(version)]
pub struct Cli {
    /// 项目根目录
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 报告输出路径（默认 docs/project_analysis.md）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// 输出到标准输出而不是文件
    #[arg(long)]
    pub stdout: bool,

    /// 详细输出
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    /// Markdown 报告
    Markdown,
    /// JSON 格式
    Json,
}
