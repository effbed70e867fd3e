use std::ops::Range;

use crate::{
    ast::Node,
    lexer::tokens::{Token, TokenKind},
    Span,
};

/// A read-only window onto a token list.
///
/// `offset` is the absolute index of the first visible token, so nodes
/// built from any sub-view still record their position in the full list.
#[derive(Debug, Clone, Copy)]
pub struct TokenView<'a> {
    tokens: &'a [Token],
    offset: usize,
}

impl<'a> TokenView<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenView { tokens, offset: 0 }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn get(&self, index: usize) -> Option<&'a Token> {
        self.tokens.get(index)
    }

    pub fn kind(&self, index: usize) -> Option<TokenKind> {
        self.tokens.get(index).map(|token| token.kind)
    }

    pub fn first(&self) -> Option<&'a Token> {
        self.tokens.first()
    }

    pub fn is(&self, index: usize, kind: TokenKind) -> bool {
        self.kind(index) == Some(kind)
    }

    /// The view with the first `count` tokens removed.
    pub fn advance(&self, count: usize) -> TokenView<'a> {
        let count = count.min(self.tokens.len());
        TokenView {
            tokens: &self.tokens[count..],
            offset: self.offset + count,
        }
    }

    /// The first `count` tokens only.
    pub fn take(&self, count: usize) -> TokenView<'a> {
        let count = count.min(self.tokens.len());
        TokenView {
            tokens: &self.tokens[..count],
            offset: self.offset,
        }
    }

    /// Tokens `start..end`, relative to this view.
    pub fn slice(&self, start: usize, end: usize) -> TokenView<'a> {
        self.advance(start).take(end.saturating_sub(start))
    }

    /// Absolute token range of the first `count` tokens.
    pub fn range(&self, count: usize) -> Range<usize> {
        self.offset..self.offset + count
    }

    /// Source span of the first `count` tokens. `count` must be in `1..=len`.
    pub fn span(&self, count: usize) -> Span {
        Span {
            start: self.tokens[0].span.start.clone(),
            end: self.tokens[count - 1].span.end.clone(),
        }
    }

    /// Index of the bracket closing the one at `open`, honouring nesting of
    /// `()`, `[]` and `{}`. `None` when unbalanced or mismatched.
    pub fn matching_close(&self, open: usize) -> Option<usize> {
        let mut stack: Vec<TokenKind> = vec![];

        for (index, token) in self.tokens.iter().enumerate().skip(open) {
            match token.kind {
                TokenKind::OpenParen => stack.push(TokenKind::CloseParen),
                TokenKind::OpenBracket => stack.push(TokenKind::CloseBracket),
                TokenKind::OpenBrace => stack.push(TokenKind::CloseBrace),
                TokenKind::CloseParen | TokenKind::CloseBracket | TokenKind::CloseBrace => {
                    if stack.pop() != Some(token.kind) {
                        return None;
                    }
                    if stack.is_empty() {
                        return Some(index);
                    }
                }
                _ => {}
            }

            if stack.is_empty() {
                return None;
            }
        }

        None
    }

    /// Relative indices of `kind` tokens outside any bracket pair.
    pub fn top_level_positions(&self, kind: TokenKind) -> Vec<usize> {
        let mut depth = 0usize;
        let mut positions = vec![];

        for (index, token) in self.tokens.iter().enumerate() {
            match token.kind {
                TokenKind::OpenParen | TokenKind::OpenBracket | TokenKind::OpenBrace => depth += 1,
                TokenKind::CloseParen | TokenKind::CloseBracket | TokenKind::CloseBrace => {
                    depth = depth.saturating_sub(1)
                }
                found if found == kind && depth == 0 => positions.push(index),
                _ => {}
            }
        }

        positions
    }
}

/// Result of one attempt-parse: a node and how many tokens it consumed, or
/// no match with nothing consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub node: Option<Node>,
    pub consumed: usize,
}

impl ParseOutcome {
    pub fn matched(node: Node, consumed: usize) -> Self {
        debug_assert!(consumed > 0, "a match must consume at least one token");
        ParseOutcome {
            node: Some(node),
            consumed,
        }
    }

    pub fn no_match() -> Self {
        ParseOutcome {
            node: None,
            consumed: 0,
        }
    }

    pub fn is_match(&self) -> bool {
        self.node.is_some()
    }

    pub fn into_parts(self) -> (Option<Node>, usize) {
        (self.node, self.consumed)
    }
}

/// Result of trying to continue an already parsed left operand.
///
/// `consumed` counts only the tokens after the left operand. A failed
/// extension hands the operand back untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Extension {
    Extended { node: Node, consumed: usize },
    Unchanged(Node),
}
