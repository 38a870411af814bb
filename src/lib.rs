//! # snakeshift
//!
//! A converter that rewrites CamelCase words in plain-text files into an
//! upper-cased, underscore-delimited form (`CamelCase` -> `CAMEL_CASE`).
//!
//! The string-based functions in [`snakeshift::convert`] are the core
//! functionality; [`snakeshift::process`] wraps them in line-oriented file
//! I/O. See the module docs for the exact boundary rule.

pub mod snakeshift;

pub use snakeshift::convert::{convert_line, convert_source, convert_word};
pub use snakeshift::process::{process_file, ProcessError};
