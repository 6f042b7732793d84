pub mod json;
pub mod markdown;

pub use json::render_json;
pub use markdown::MarkdownFormatter;
