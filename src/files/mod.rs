//! Source file access for diagnostics.
//!
//! The parsing core never owns file state. Callers inject a [`FileCache`]
//! and the core only queries it, which keeps tests free of real file I/O.

pub mod cache;

pub use cache::{get_line, read_file, FileCache, SharedFileCache};
