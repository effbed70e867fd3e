use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::{
    table::TOKEN_TABLE,
    tokens::{Token, TokenCategory, TokenKind},
};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Order matters: comments before the `/` operator, scientific and float
    // forms before plain integers.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^/\*(?s:.*?)\*/").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^0[xX][0-9a-fA-F_]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^[0-9][0-9_]*(\.[0-9][0-9_]*)?[eE][+-]?[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^[0-9][0-9_]*\.[0-9][0-9_]*").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^[0-9][0-9_]*").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: word_handler },
        RegexPattern { regex: Regex::new(r#"^"(\\.|[^"\\])*""#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r"^'(\\.|[^'\\])'").unwrap(), handler: char_handler },
    ];
}

/// Longest operator or punctuation spelling in the table.
const MAX_SYMBOL_LEN: usize = 3;

pub struct Lexer<'src> {
    tokens: Vec<Token>,
    source: &'src str,
    pos: usize,
    line: u32,
    column: u32,
    file: Arc<str>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, file: Option<&str>) -> Self {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            column: 1,
            file: Arc::from(file.unwrap_or("shell")),
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.pos as u32, self.line, self.column, Arc::clone(&self.file))
    }

    /// Moves past `text`, which must be the next slice of the source.
    pub fn advance(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += text.len();
    }

    /// Emits a token for `text` at the current position and moves past it.
    pub fn push(&mut self, kind: TokenKind, text: &str) {
        let start = self.position();
        self.advance(text);
        let token = MK_TOKEN!(
            kind,
            String::from(text),
            Span {
                start,
                end: self.position()
            }
        );
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Whether the last token ends an operand, so a following symbol is in
    /// infix position.
    fn follows_operand(&self) -> bool {
        self.tokens.last().is_some_and(|token| {
            token.kind.category() == TokenCategory::Literal
                || matches!(
                    token.kind,
                    TokenKind::Identifier
                        | TokenKind::CloseParen
                        | TokenKind::CloseBracket
                        | TokenKind::Inc
                        | TokenKind::Dec
                )
        })
    }

    /// Maximal munch over the operator and punctuation spellings.
    ///
    /// `+-` is the prefix `Abs` operator only where an operand may start;
    /// after an operand it is `+` followed by a prefix `-`.
    fn match_symbol(&self) -> Option<(TokenKind, &'src str)> {
        let remainder = self.remainder();

        for len in (1..=MAX_SYMBOL_LEN.min(remainder.len())).rev() {
            if !remainder.is_char_boundary(len) {
                continue;
            }

            let candidate = &remainder[..len];
            if let Some(kind) = TOKEN_TABLE.kind_of(candidate) {
                if kind == TokenKind::Abs && self.follows_operand() {
                    continue;
                }
                if matches!(kind.category(), TokenCategory::Operator | TokenCategory::Punctuation) {
                    return Some((kind, candidate));
                }
            }
        }

        None
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance(matched);
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    let is_hex = matched.starts_with("0x") || matched.starts_with("0X");
    let kind = if !is_hex && matched.contains('.') {
        TokenKind::LiteralFloat
    } else {
        TokenKind::LiteralInteger
    };

    lexer.push(kind, matched);
}

fn word_handler(lexer: &mut Lexer, matched: &str) {
    let kind = match TOKEN_TABLE.kind_of(matched) {
        Some(kind)
            if matches!(
                kind.category(),
                TokenCategory::Keyword | TokenCategory::Primitive | TokenCategory::Literal
            ) =>
        {
            kind
        }
        _ => TokenKind::Identifier,
    };

    lexer.push(kind, matched);
}

fn string_handler(lexer: &mut Lexer, matched: &str) {
    lexer.push(TokenKind::LiteralString, matched);
}

fn char_handler(lexer: &mut Lexer, matched: &str) {
    lexer.push(TokenKind::LiteralChar, matched);
}

/// Splits `source` into tokens, terminated by a single `Eof` token.
///
/// Token lexemes are the exact source text, quotes included for string and
/// char literals.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str, file: Option<&str>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let remainder = lex.remainder();
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(remainder) {
                (pattern.handler)(&mut lex, found.as_str());
                matched = true;
                break;
            }
        }

        if matched {
            continue;
        }

        if let Some((kind, text)) = lex.match_symbol() {
            lex.push(kind, text);
            continue;
        }

        let offending = lex.at().unwrap_or_default();
        let error = match offending {
            '"' => ErrorImpl::UnterminatedString,
            '\'' => ErrorImpl::InvalidCharLiteral {
                token: remainder.chars().take(4).collect(),
            },
            _ => ErrorImpl::UnrecognisedToken {
                token: offending.to_string(),
            },
        };

        return Err(Error::new(error, lex.position()));
    }

    lex.push(TokenKind::Eof, "");
    tracing::debug!(token_count = lex.tokens.len(), "tokenized");

    Ok(lex.tokens)
}
