pub mod analyze;

pub use analyze::{ProjectAnalyzer, write_report};
