//! Parser module for building the syntax tree.
//!
//! Every node variant has an attempt-parse routine that takes a read-only
//! token view and either matches, reporting how many tokens it consumed, or
//! does not match and consumes nothing. Attempts have no side effects, so
//! callers may try alternatives freely.
//!
//! - `view`: token views and attempt results
//! - `lookups`: binding powers and candidate priority lists
//! - `expr`: expression attempts and operator continuations
//! - `resolver`: ordered-first-match expression resolution
//! - `stmt`: statement attempts and suites
//! - `parser`: the program driver that turns a failed attempt into an error

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod resolver;
pub mod stmt;
pub mod view;

pub use parser::parse;
pub use resolver::resolve_expression;
pub use view::{ParseOutcome, TokenView};

#[cfg(test)]
mod tests;
