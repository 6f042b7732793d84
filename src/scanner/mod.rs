pub mod dependency_ranker;
pub mod path_classifier;
pub mod project_walker;
pub mod size_calculator;
pub mod tree_walker;

pub use dependency_ranker::DependencyRanker;
pub use path_classifier::{PathClassifier, normalize_path};
pub use project_walker::ProjectWalker;
pub use size_calculator::{SizeCalculator, DirectorySizeInfo};
pub use tree_walker::{TreeWalker, TreeIter};
