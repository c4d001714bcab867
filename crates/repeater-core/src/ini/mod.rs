//! Line-oriented `key=value` reading and writing.
//!
//! The format is deliberately minimal: no sections, no quoting, no escapes,
//! no multi-line values.  Lines starting with `;` or `#` are comments.

pub mod reader;
pub mod writer;

pub use reader::{parse_str, IniEntry, IniReader};
pub use writer::write_lines;
