//! Lexical layer of the front end.
//!
//! This module contains everything that deals with tokens:
//!
//! - The token-kind enumeration and the token value type
//! - The immutable kind <-> spelling table shared by every parser
//! - A regex-driven reference tokenizer producing the token stream
//! - Token position tracking for error reporting

pub mod lexer;
pub mod table;
pub mod tokens;
