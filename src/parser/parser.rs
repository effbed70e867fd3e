//! The program driver.
//!
//! Statements are parsed one after another with the attempt-parse routines.
//! When none of them matches, the driver turns that no-match into a
//! positioned error. This is the only place a failed attempt becomes a
//! diagnostic.

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    stmt::{parse_stmt, unterminated_len},
    view::TokenView,
};

/// Cursor over one unit's token list.
pub struct Parser<'a> {
    /// Every token, including the trailing `Eof` if the lexer produced one
    tokens: &'a [Token],
    /// Number of tokens before the `Eof`
    end: usize,
    /// Index of the next unparsed token
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let end = match tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => tokens.len() - 1,
            _ => tokens.len(),
        };

        Parser {
            tokens,
            end,
            pos: 0,
        }
    }

    pub fn has_tokens(&self) -> bool {
        self.pos < self.end
    }

    pub fn current_token(&self) -> Option<&'a Token> {
        self.view().first()
    }

    /// The unparsed tokens, without the `Eof`.
    pub fn view(&self) -> TokenView<'a> {
        TokenView::new(&self.tokens[..self.end]).advance(self.pos)
    }

    pub fn advance(&mut self, count: usize) {
        self.pos = (self.pos + count).min(self.end);
    }

    pub fn get_position(&self) -> Position {
        match self.current_token() {
            Some(token) => token.position().clone(),
            None => self.end_position(),
        }
    }

    fn end_position(&self) -> Position {
        match self.tokens.last() {
            Some(token) if token.kind == TokenKind::Eof => token.span.start.clone(),
            Some(token) => token.span.end.clone(),
            None => Position::null(),
        }
    }

    /// Explains why no statement starts at the current token.
    ///
    /// A close bracket that does not match reports itself. Brackets left
    /// open at the end of input report `UnexpectedEof`. A statement missing
    /// its `;` reports the token after it, also inside nested suites.
    /// Anything else reports the current token.
    pub fn diagnose(&self) -> Error {
        let view = self.view();
        let mut open: Vec<TokenKind> = vec![];

        for index in 0..view.len() {
            let Some(token) = view.get(index) else {
                break;
            };

            let expected = match token.kind {
                TokenKind::OpenParen => {
                    open.push(TokenKind::CloseParen);
                    continue;
                }
                TokenKind::OpenBracket => {
                    open.push(TokenKind::CloseBracket);
                    continue;
                }
                TokenKind::OpenBrace => {
                    open.push(TokenKind::CloseBrace);
                    continue;
                }
                TokenKind::CloseParen | TokenKind::CloseBracket | TokenKind::CloseBrace => {
                    open.pop()
                }
                _ => continue,
            };

            if expected != Some(token.kind) {
                return Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.lexeme.clone(),
                    },
                    token.position().clone(),
                );
            }
        }

        if !open.is_empty() {
            return Error::new(ErrorImpl::UnexpectedEof, self.end_position());
        }

        if let Some(error) = self.missing_terminator(view) {
            return error;
        }

        match self.current_token() {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.lexeme.clone(),
                },
                token.position().clone(),
            ),
            None => Error::new(ErrorImpl::UnexpectedEof, self.end_position()),
        }
    }

    /// Finds the first statement in `view` that lacks its `;`, looking into
    /// the braced bodies of the statement that fails to parse.
    fn missing_terminator(&self, view: TokenView<'a>) -> Option<Error> {
        let mut pos = 0;

        while pos < view.len() {
            if view.is(pos, TokenKind::Semicolon) {
                pos += 1;
                continue;
            }

            let here = view.advance(pos);
            if let (Some(_), consumed) = parse_stmt(here).into_parts() {
                pos += consumed;
                continue;
            }

            if let Some(len) = unterminated_len(here) {
                if !here.is(len, TokenKind::Semicolon) {
                    return Some(self.unexpected_at(here.offset() + len));
                }
            }

            let mut index = 0;
            while index < here.len() {
                match here.kind(index) {
                    Some(TokenKind::OpenBrace) => {
                        let close = here.matching_close(index)?;
                        if let Some(error) = self.missing_terminator(here.slice(index + 1, close)) {
                            return Some(error);
                        }
                        index = close + 1;
                    }
                    Some(TokenKind::Semicolon) => break,
                    _ => index += 1,
                }
            }
            return None;
        }

        None
    }

    /// `UnexpectedToken` at the absolute token `index`, or `UnexpectedEof`
    /// when `index` is past the last real token.
    fn unexpected_at(&self, index: usize) -> Error {
        match self.tokens.get(index) {
            Some(token) if index < self.end => Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.lexeme.clone(),
                },
                token.position().clone(),
            ),
            _ => Error::new(ErrorImpl::UnexpectedEof, self.end_position()),
        }
    }
}

/// Parses a whole unit into its top-level statements.
///
/// Empty `;` statements are skipped. The first position where no
/// statement matches is reported as an error.
#[tracing::instrument(skip_all, fields(file = file, token_count = tokens.len()))]
pub fn parse(tokens: &[Token], file: &str) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens);
    let mut statements = vec![];

    while parser.has_tokens() {
        if parser
            .current_token()
            .is_some_and(|token| token.is(TokenKind::Semicolon))
        {
            parser.advance(1);
            continue;
        }

        match parse_stmt(parser.view()).into_parts() {
            (Some(statement), consumed) => {
                statements.push(statement);
                parser.advance(consumed);
            }
            _ => {
                let error = parser.diagnose();
                tracing::debug!(error = %error, "no statement matched");
                return Err(error);
            }
        }
    }

    tracing::debug!(statements = statements.len(), "parsed");

    Ok(Program {
        statements,
        file: file.to_string(),
    })
}
