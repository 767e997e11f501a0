mod json;
mod text;

pub use json::format_json;
pub use text::{format_summary, format_text};
