//! Unit tests for error handling.
//!
//! This module contains tests for error types, codes, tips and rendering.

use std::sync::Arc;

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::files::{FileCache, SharedFileCache};
use crate::Position;

fn position(line: u32, column: u32) -> Position {
    Position::new(0, line, column, Arc::from("main.hlx"))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "$".to_string(),
        },
        position(1, 1),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.code(), 1001);
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnexpectedEof, position(7, 12));

    assert_eq!(error.get_position().line, 7);
    assert_eq!(error.get_position().column, 12);
}

#[test]
fn test_error_codes_by_phase() {
    let lexing = Error::new(ErrorImpl::UnterminatedString, position(1, 1));
    let parsing = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        position(1, 1),
    );
    let io = Error::new(
        ErrorImpl::FileRead {
            path: "missing.hlx".to_string(),
            reason: "not found".to_string(),
        },
        position(0, 0),
    );

    assert_eq!(lexing.code(), 1002);
    assert_eq!(parsing.code(), 2001);
    assert_eq!(io.code(), 3001);
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        position(2, 9),
    );

    assert_eq!(error.to_string(), "unexpected token: \")\" at main.hlx:2:9");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "$".to_string(),
        },
        position(1, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        position(1, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`}`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_render_with_source_line() {
    let files = SharedFileCache::new();
    files.put("main.hlx", Arc::from("let a = 1;\nlet b = );\n"));

    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        position(2, 9),
    );
    let rendered = error.render(&files);
    let lines: Vec<&str> = rendered.lines().collect();

    assert!(lines[0].starts_with("error[2001]: UnexpectedToken ("));
    assert_eq!(lines[1], "-> main.hlx");
    assert_eq!(lines[2], "  |");
    assert_eq!(lines[3], "2 | let b = );");
    assert_eq!(lines[4], "  | --------^");
}

#[test]
fn test_render_trims_indentation() {
    let files = SharedFileCache::new();
    files.put("main.hlx", Arc::from("    x)"));

    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        position(1, 6),
    );
    let rendered = error.render(&files);

    assert!(rendered.contains("1 | x)\n"));
    assert!(rendered.contains("  | -^\n"));
}

#[test]
fn test_render_without_cached_file() {
    let files = SharedFileCache::new();
    let error = Error::new(ErrorImpl::UnexpectedEof, position(3, 1));

    let rendered = error.render(&files);

    assert_eq!(rendered.lines().count(), 2);
    assert!(rendered.starts_with("error[2002]: UnexpectedEof"));
}
