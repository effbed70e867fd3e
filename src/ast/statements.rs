use std::{ops::Range, slice::Iter};

use crate::{lexer::tokens::Token, Span};

use super::ast::Node;

/// A braced statement list: `{ stmt* }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Suite {
    pub statements: Vec<Node>,
    pub span: Span,
    pub tokens: Range<usize>,
}

impl Suite {
    pub fn iter(&self) -> Iter<'_, Node> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForLoopKind {
    /// `for binding in iterable`
    Range { binding: Token, iterable: Box<Node> },
    /// `for (init; condition; update)`, each clause optional.
    CStyle {
        init: Option<Box<Node>>,
        condition: Option<Box<Node>>,
        update: Option<Box<Node>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    pub loop_kind: ForLoopKind,
    pub suite: Suite,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoop {
    pub condition: Box<Node>,
    pub suite: Suite,
}

/// `if cond { } else if cond { } else { }`, or `unless` with `negated` set.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub negated: bool,
    pub condition: Box<Node>,
    pub suite: Suite,
    /// `ElseIfStatement` nodes followed by at most one trailing `ElseStatement`.
    pub alternatives: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElseIfStatement {
    pub condition: Box<Node>,
    pub suite: Suite,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElseStatement {
    pub suite: Suite,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStatement;

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStatement;

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    pub subject: Box<Node>,
    /// `CaseStatement` nodes and at most one `DefaultCaseStatement`.
    pub cases: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseStatement {
    pub condition: Box<Node>,
    pub suite: Suite,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefaultCaseStatement {
    pub suite: Suite,
}

/// `target op value` where `op` is `=` or a compound assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: Box<Node>,
    pub op: Token,
    pub value: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub suite: Suite,
}

/// A whole parsed source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Node>,
    pub file: String,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Node> {
        self.statements.iter()
    }
}
