//! Host reservation parsing and diffing primitives used by higher-level tools.

pub mod diff;
pub mod format;
pub mod parser;
pub mod record;
pub mod writer;

pub use diff::{compare, ComparisonResult, IpMismatch, MacMismatch, MissingEntry};
pub use format::{format_json, format_summary, format_text};
pub use parser::{count_reservation_blocks, parse, parse_file, ParseError};
pub use record::{ip_sort_key, HostRecord, RecordSet};
pub use writer::{render, write_file, WriteError};
