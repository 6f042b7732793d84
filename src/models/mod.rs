pub mod dependency;
pub mod report;
pub mod scan_result;
pub mod tree;

pub use dependency::{DependencyEntry, DependencyRanking};
pub use report::{ProjectReport, RenderedTree};
pub use scan_result::{Category, SizeBreakdown, SkippedEntry};
pub use tree::{TreeEntry, TreeListing};
