//! Error types and error handling for the front end.
//!
//! This module defines the errors surfaced to users. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, parsing and file access
//! - Stable numeric error codes
//! - Error rendering with source context

pub mod errors;

#[cfg(test)]
mod tests;
