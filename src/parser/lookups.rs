use crate::lexer::tokens::TokenKind;

use super::{
    expr::{
        parse_function_call, parse_grouping_expr, parse_identifier, parse_inline_lambda,
        parse_list_comprehension, parse_literal, parse_scope_access, parse_unary_op,
    },
    stmt::{
        parse_assignment, parse_block_stmt, parse_break_stmt, parse_continue_stmt,
        parse_expression_stmt, parse_for_stmt, parse_if_stmt, parse_switch_stmt,
        parse_while_stmt,
    },
    view::{ParseOutcome, TokenView},
};

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Ternary,
    Range,
    LogicalOr,
    LogicalAnd,
    Relational,
    Bitwise,
    Shift,
    Additive,
    Multiplicative,
    Power,
    Unary,
    Suffix,
}

impl BindingPower {
    /// The next weaker level. Right-associative operators parse their right
    /// operand at this level so an equal operator can still bind.
    pub fn weaker(self) -> BindingPower {
        match self {
            BindingPower::Default | BindingPower::Ternary => BindingPower::Default,
            BindingPower::Range => BindingPower::Ternary,
            BindingPower::LogicalOr => BindingPower::Range,
            BindingPower::LogicalAnd => BindingPower::LogicalOr,
            BindingPower::Relational => BindingPower::LogicalAnd,
            BindingPower::Bitwise => BindingPower::Relational,
            BindingPower::Shift => BindingPower::Bitwise,
            BindingPower::Additive => BindingPower::Shift,
            BindingPower::Multiplicative => BindingPower::Additive,
            BindingPower::Power => BindingPower::Multiplicative,
            BindingPower::Unary => BindingPower::Power,
            BindingPower::Suffix => BindingPower::Unary,
        }
    }
}

pub type AttemptHandler = for<'a> fn(TokenView<'a>) -> ParseOutcome;

/// Primary expression candidates in priority order. The first that consumes
/// any tokens wins; nothing after it is tried.
pub const PRIMARY_CANDIDATES: &[(&str, AttemptHandler)] = &[
    ("literal", parse_literal),
    ("inline_lambda", parse_inline_lambda),
    ("list_comprehension", parse_list_comprehension),
    ("function_call", parse_function_call),
    ("scope_access", parse_scope_access),
    ("identifier", parse_identifier),
    ("unary_op", parse_unary_op),
    ("grouping", parse_grouping_expr),
];

/// Statement candidates in priority order. Keyword-led forms come first so
/// the expression fallback never shadows them.
pub const STATEMENT_CANDIDATES: &[(&str, AttemptHandler)] = &[
    ("if", parse_if_stmt),
    ("while", parse_while_stmt),
    ("for", parse_for_stmt),
    ("switch", parse_switch_stmt),
    ("continue", parse_continue_stmt),
    ("break", parse_break_stmt),
    ("block", parse_block_stmt),
    ("assignment", parse_assignment),
    ("expression", parse_expression_stmt),
];

/// Binding power of `kind` in infix position.
pub fn infix_binding_power(kind: TokenKind) -> Option<BindingPower> {
    let bp = match kind {
        TokenKind::Range | TokenKind::RangeInclusive => BindingPower::Range,
        TokenKind::LogicalOr | TokenKind::LogicalNor | TokenKind::LogicalXor => {
            BindingPower::LogicalOr
        }
        TokenKind::LogicalAnd | TokenKind::LogicalNand => BindingPower::LogicalAnd,
        TokenKind::Equal
        | TokenKind::NotEqual
        | TokenKind::LessThan
        | TokenKind::GreaterThan
        | TokenKind::LessThanEquals
        | TokenKind::GreaterThanEquals
        | TokenKind::RefEqual => BindingPower::Relational,
        TokenKind::BitwiseAnd
        | TokenKind::BitwiseNand
        | TokenKind::BitwiseOr
        | TokenKind::BitwiseNor
        | TokenKind::BitwiseXor => BindingPower::Bitwise,
        TokenKind::ShiftLeft | TokenKind::ShiftRight => BindingPower::Shift,
        TokenKind::Add | TokenKind::Sub => BindingPower::Additive,
        TokenKind::Mul | TokenKind::Div | TokenKind::Mod | TokenKind::Mat => {
            BindingPower::Multiplicative
        }
        TokenKind::Pow => BindingPower::Power,
        _ => return None,
    };

    Some(bp)
}

/// Operators whose right operand binds at their own level.
pub fn is_right_associative(kind: TokenKind) -> bool {
    kind == TokenKind::Pow
}

pub fn is_prefix_operator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Sub
            | TokenKind::Add
            | TokenKind::Abs
            | TokenKind::LogicalNot
            | TokenKind::BitwiseNot
            | TokenKind::Inc
            | TokenKind::Dec
            | TokenKind::Mul
            | TokenKind::BitwiseAnd
    )
}

/// `++`, `--` and the `[` that opens an index.
pub fn is_suffix_operator(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Inc | TokenKind::Dec | TokenKind::OpenBracket)
}
