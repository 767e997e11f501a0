mod engine;
mod result;

pub use engine::compare;
pub use result::{ComparisonResult, IpMismatch, MacMismatch, MissingEntry};
