pub mod config;
pub mod models;
pub mod operations;
pub mod report;
pub mod scanner;
pub mod utils;

// 重新导出常用模块
pub use operations::ProjectAnalyzer;
pub use scanner::{DependencyRanker, PathClassifier, ProjectWalker, SizeCalculator, TreeWalker};
