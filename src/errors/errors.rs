use std::fmt::Display;

use thiserror::Error;

use crate::{files::FileCache, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::InvalidCharLiteral { .. } => "InvalidCharLiteral",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEof => "UnexpectedEof",
            ErrorImpl::FileRead { .. } => "FileRead",
        }
    }

    /// Stable numeric code. Lexing errors are 1xxx, parsing 2xxx, I/O 3xxx.
    pub fn code(&self) -> u32 {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => 1001,
            ErrorImpl::UnterminatedString => 1002,
            ErrorImpl::InvalidCharLiteral { .. } => 1003,
            ErrorImpl::UnexpectedToken { .. } => 2001,
            ErrorImpl::UnexpectedEof => 2002,
            ErrorImpl::FileRead { .. } => 3001,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing `\"`"))
            }
            ErrorImpl::InvalidCharLiteral { token } => ErrorTip::Suggestion(format!(
                "Char literal `{}` must hold exactly one character, use `\"` for strings",
                token
            )),
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, no statement or expression starts here",
                token
            )),
            ErrorImpl::UnexpectedEof => {
                ErrorTip::Suggestion(String::from("Input ended inside an unfinished construct"))
            }
            ErrorImpl::FileRead { path, .. } => {
                ErrorTip::Suggestion(format!("Check that `{}` exists and is readable", path))
            }
        }
    }

    /// Renders the error with the offending source line and a caret.
    ///
    /// ```text
    /// error[2001]: UnexpectedToken (Unexpected token: `)`, ...)
    /// -> main.hlx
    ///    |
    /// 20 | let a = );
    ///    | --------^
    /// ```
    pub fn render(&self, files: &dyn FileCache) -> String {
        let mut out = String::new();

        match self.get_tip() {
            ErrorTip::None => {
                out.push_str(&format!("error[{}]: {}\n", self.code(), self.get_error_name()))
            }
            tip => out.push_str(&format!(
                "error[{}]: {} ({})\n",
                self.code(),
                self.get_error_name(),
                tip
            )),
        }
        out.push_str(&format!("-> {}\n", self.position.file));

        let line_text = files.get_line(&self.position.file, self.position.line as usize);
        if let Some(line_text) = line_text {
            let line_string = self.position.line.to_string();
            let padding = line_string.len() + 2;
            let (trimmed, removed_whitespace) = remove_starting_whitespace(&line_text);
            let arrows = (self.position.column as usize)
                .saturating_sub(removed_whitespace)
                .max(1);

            out.push_str(&format!("{:>padding$}\n", "|"));
            out.push_str(&format!("{} | {}\n", line_string, trimmed.trim_end()));
            out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
        }

        out
    }
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches(' ');
    (trimmed, string.len() - trimmed.len())
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid char literal: {token:?}")]
    InvalidCharLiteral { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("failed to read {path:?}: {reason}")]
    FileRead { path: String, reason: String },
}
