pub mod text;
pub mod markdown;
pub mod json;

pub use text::TextFormatter;
pub use markdown::MarkdownFormatter;
pub use json::JsonFormatter;
