use std::fmt::Display;

use crate::lexer::tokens::{Token, TokenKind};

use super::ast::Node;

// LITERALS

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralType {
    Bool,
    Char,
    Float,
    String,
    Integer,
    Scientific,
    None,
}

impl LiteralType {
    /// Classifies a literal token. Returns `None` for tokens that are not literals.
    pub fn of(token: &Token) -> Option<LiteralType> {
        let is_hex = token.lexeme.starts_with("0x") || token.lexeme.starts_with("0X");
        let is_scientific = !is_hex && token.lexeme.contains(|c: char| c == 'e' || c == 'E');

        match token.kind {
            TokenKind::LiteralTrue | TokenKind::LiteralFalse => Some(LiteralType::Bool),
            TokenKind::LiteralNull => Some(LiteralType::None),
            TokenKind::LiteralString => Some(LiteralType::String),
            TokenKind::LiteralChar => Some(LiteralType::Char),
            TokenKind::LiteralInteger | TokenKind::LiteralFloat if is_scientific => {
                Some(LiteralType::Scientific)
            }
            TokenKind::LiteralInteger => Some(LiteralType::Integer),
            TokenKind::LiteralFloat => Some(LiteralType::Float),
            _ => None,
        }
    }
}

/// Literal Expression
/// A single literal token and its classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: Token,
    pub literal_type: LiteralType,
}

// OPERATORS

/// Binary Operation
/// `left op right`
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub op: Token,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// Unary (prefix) Operation
/// `op operand`
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    pub op: Token,
    pub operand: Box<Node>,
}

/// Suffix Operation
/// `operand++`, `operand--` or `operand[index]`. Only the index form carries `index`.
#[derive(Debug, Clone, PartialEq)]
pub struct SuffixOp {
    pub op: Token,
    pub operand: Box<Node>,
    pub index: Option<Box<Node>>,
}

// NAMES

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: Token,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// `a->b`
    Pointer,
    /// `a.b`
    Member,
    /// `a::b`
    Namespace,
}

impl AccessType {
    pub fn from_kind(kind: TokenKind) -> Option<AccessType> {
        match kind {
            TokenKind::Arrow => Some(AccessType::Pointer),
            TokenKind::Dot => Some(AccessType::Member),
            TokenKind::Scope => Some(AccessType::Namespace),
            _ => None,
        }
    }

    pub fn connector(&self) -> TokenKind {
        match self {
            AccessType::Pointer => TokenKind::Arrow,
            AccessType::Member => TokenKind::Dot,
            AccessType::Namespace => TokenKind::Scope,
        }
    }
}

impl Display for AccessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessType::Pointer => write!(f, "POINTER"),
            AccessType::Member => write!(f, "MEMBER"),
            AccessType::Namespace => write!(f, "NAMESPACE"),
        }
    }
}

/// Scope Access
/// `parent connector child`. Chains fold to the left, so in `a::b.c` the
/// parent of `c` is the access `a::b`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeAccess {
    pub access: AccessType,
    pub parent: Box<Node>,
    pub connector: Token,
    pub child: Token,
}

impl ScopeAccess {
    /// The names along the chain, outermost first.
    pub fn path(&self) -> Vec<&Token> {
        let mut path = match &self.parent.kind {
            super::NodeKind::ScopeAccess(parent) => parent.path(),
            super::NodeKind::Identifier(ident) => vec![&ident.name],
            _ => vec![],
        };
        path.push(&self.child);
        path
    }
}

// CALLS

#[derive(Debug, Clone, PartialEq)]
pub struct NamedArgument {
    pub name: Token,
    pub value: Node,
}

/// Function Call
/// `callee(positional..., name=value...)`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub callee: Box<Node>,
    pub positional: Vec<Node>,
    pub named: Vec<NamedArgument>,
}

impl FunctionCall {
    pub fn argument_count(&self) -> usize {
        self.positional.len() + self.named.len()
    }
}

// INLINE FORMS

/// Inline Control Flow
/// `pass if condition else fail`
#[derive(Debug, Clone, PartialEq)]
pub struct InlineControlFlow {
    pub condition: Box<Node>,
    pub pass: Box<Node>,
    pub fail: Box<Node>,
}

/// Inline Lambda
/// `fn (a, b): body`
#[derive(Debug, Clone, PartialEq)]
pub struct InlineLambda {
    pub parameters: Vec<Token>,
    pub body: Box<Node>,
}

/// Inline List Comprehension
/// `[element for binding in iterable if filter]`
#[derive(Debug, Clone, PartialEq)]
pub struct InlineListComprehension {
    pub element: Box<Node>,
    pub binding: Token,
    pub iterable: Box<Node>,
    pub filter: Option<Box<Node>>,
}
