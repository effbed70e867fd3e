use crate::{
    ast::{
        expressions::{
            AccessType, BinaryOp, FunctionCall, Identifier, InlineControlFlow, InlineLambda,
            InlineListComprehension, Literal, LiteralType, NamedArgument, ScopeAccess, SuffixOp,
            UnaryOp,
        },
        Node, NodeKind, NodeType,
    },
    lexer::tokens::{Token, TokenCategory, TokenKind},
};

use super::{
    lookups::{is_prefix_operator, is_right_associative, BindingPower},
    resolver::{resolve_expression, resolve_with},
    view::{Extension, ParseOutcome, TokenView},
};

/// Wraps `kind` in a node covering the first `consumed` tokens of `view`.
fn build(view: TokenView, kind: NodeKind, consumed: usize) -> ParseOutcome {
    let node = Node::new(kind, view.span(consumed), view.range(consumed));
    ParseOutcome::matched(node, consumed)
}

/// Extends `view`'s left operand (its first `consumed` tokens) by `extra` tokens.
fn extended(view: TokenView, kind: NodeKind, consumed: usize, extra: usize) -> Extension {
    let total = consumed + extra;
    Extension::Extended {
        node: Node::new(kind, view.span(total), view.range(total)),
        consumed: extra,
    }
}

/// Resolves an expression that must span `view` exactly.
fn resolve_exact(view: TokenView) -> Option<Node> {
    if view.is_empty() {
        return None;
    }

    match resolve_expression(view).into_parts() {
        (Some(node), consumed) if consumed == view.len() => Some(node),
        _ => None,
    }
}

fn is_name(token: &Token) -> bool {
    token.kind == TokenKind::Identifier || token.kind.category() == TokenCategory::Primitive
}

fn identifier_node(view: TokenView) -> Option<Node> {
    let token = view.first().filter(|token| is_name(token))?;
    let kind = NodeKind::Identifier(Identifier {
        name: token.clone(),
    });
    Some(Node::new(kind, view.span(1), view.range(1)))
}

/// A bare name or a left-folded access chain, with its token count.
fn scoped_name(view: TokenView) -> Option<(Node, usize)> {
    let mut node = identifier_node(view)?;
    let mut consumed = 1;

    while let (Some(connector), Some(child)) = (view.get(consumed), view.get(consumed + 1)) {
        let access = match AccessType::from_kind(connector.kind) {
            Some(access) if is_name(child) => access,
            _ => break,
        };

        consumed += 2;
        let kind = NodeKind::ScopeAccess(ScopeAccess {
            access,
            parent: Box::new(node),
            connector: connector.clone(),
            child: child.clone(),
        });
        node = Node::new(kind, view.span(consumed), view.range(consumed));
    }

    Some((node, consumed))
}

// PRIMARY FORMS

pub fn parse_literal(view: TokenView) -> ParseOutcome {
    let Some(token) = view.first() else {
        return ParseOutcome::no_match();
    };

    match LiteralType::of(token) {
        Some(literal_type) => build(
            view,
            NodeKind::Literal(Literal {
                value: token.clone(),
                literal_type,
            }),
            1,
        ),
        None => ParseOutcome::no_match(),
    }
}

/// A single name token. Primitive type names count as names.
pub fn parse_identifier(view: TokenView) -> ParseOutcome {
    match identifier_node(view) {
        Some(node) => ParseOutcome::matched(node, 1),
        None => ParseOutcome::no_match(),
    }
}

/// `parent connector child`, where the connector is `::`, `.` or `->`.
/// Longer chains fold to the left.
pub fn parse_scope_access(view: TokenView) -> ParseOutcome {
    match scoped_name(view) {
        Some((node, consumed)) if node.node_type() == NodeType::ScopeAccess => {
            ParseOutcome::matched(node, consumed)
        }
        _ => ParseOutcome::no_match(),
    }
}

/// `callee(args)` where the callee is a name or access chain. Arguments are
/// split on top-level commas; `name = value` arguments are named, all others
/// positional. Every argument must be a complete expression.
pub fn parse_function_call(view: TokenView) -> ParseOutcome {
    let Some((callee, callee_len)) = scoped_name(view) else {
        return ParseOutcome::no_match();
    };
    if !view.is(callee_len, TokenKind::OpenParen) {
        return ParseOutcome::no_match();
    }
    let Some(close) = view.matching_close(callee_len) else {
        return ParseOutcome::no_match();
    };

    let arguments = view.slice(callee_len + 1, close);
    let mut positional = vec![];
    let mut named = vec![];

    if !arguments.is_empty() {
        let mut start = 0;
        let mut bounds = arguments.top_level_positions(TokenKind::Comma);
        bounds.push(arguments.len());

        for (index, end) in bounds.iter().copied().enumerate() {
            let segment = arguments.slice(start, end);
            start = end + 1;

            // Allow a single trailing comma.
            if segment.is_empty() && index == bounds.len() - 1 && index > 0 {
                break;
            }

            let assigns = segment.top_level_positions(TokenKind::Assign);
            if assigns.is_empty() {
                match resolve_exact(segment) {
                    Some(value) => positional.push(value),
                    None => return ParseOutcome::no_match(),
                }
                continue;
            }

            let name = match segment.first() {
                Some(name) if assigns == [1] && name.kind == TokenKind::Identifier => name,
                _ => return ParseOutcome::no_match(),
            };
            match resolve_exact(segment.advance(2)) {
                Some(value) => named.push(NamedArgument {
                    name: name.clone(),
                    value,
                }),
                None => return ParseOutcome::no_match(),
            }
        }
    }

    let kind = NodeKind::FunctionCall(FunctionCall {
        callee: Box::new(callee),
        positional,
        named,
    });
    build(view, kind, close + 1)
}

/// `op operand` for a prefix operator. The operand binds tighter than any
/// binary operator.
pub fn parse_unary_op(view: TokenView) -> ParseOutcome {
    let Some(op) = view.first().filter(|token| is_prefix_operator(token.kind)) else {
        return ParseOutcome::no_match();
    };

    let rest = view.advance(1);
    if rest.is_empty() {
        return ParseOutcome::no_match();
    }

    match resolve_with(rest, BindingPower::Unary).into_parts() {
        (Some(operand), consumed) => build(
            view,
            NodeKind::UnaryOp(UnaryOp {
                op: op.clone(),
                operand: Box::new(operand),
            }),
            consumed + 1,
        ),
        _ => ParseOutcome::no_match(),
    }
}

/// `( expr )`. Yields the inner node; the parentheses only count towards
/// the consumed total.
pub fn parse_grouping_expr(view: TokenView) -> ParseOutcome {
    if !view.is(0, TokenKind::OpenParen) {
        return ParseOutcome::no_match();
    }

    let inner = view.advance(1);
    if inner.is_empty() {
        return ParseOutcome::no_match();
    }

    match resolve_expression(inner).into_parts() {
        (Some(node), consumed) if view.is(consumed + 1, TokenKind::CloseParen) => {
            ParseOutcome::matched(node, consumed + 2)
        }
        _ => ParseOutcome::no_match(),
    }
}

/// `fn (a, b): body`
pub fn parse_inline_lambda(view: TokenView) -> ParseOutcome {
    if !view.is(0, TokenKind::Fn) || !view.is(1, TokenKind::OpenParen) {
        return ParseOutcome::no_match();
    }

    let mut parameters = vec![];
    let mut pos = 2;

    if !view.is(pos, TokenKind::CloseParen) {
        loop {
            match view.get(pos) {
                Some(token) if token.kind == TokenKind::Identifier => parameters.push(token.clone()),
                _ => return ParseOutcome::no_match(),
            }
            pos += 1;

            if view.is(pos, TokenKind::Comma) {
                pos += 1;
            } else {
                break;
            }
        }
    }

    if !view.is(pos, TokenKind::CloseParen) || !view.is(pos + 1, TokenKind::Colon) {
        return ParseOutcome::no_match();
    }
    pos += 2;

    let body_view = view.advance(pos);
    if body_view.is_empty() {
        return ParseOutcome::no_match();
    }

    match resolve_expression(body_view).into_parts() {
        (Some(body), consumed) => build(
            view,
            NodeKind::InlineLambda(InlineLambda {
                parameters,
                body: Box::new(body),
            }),
            pos + consumed,
        ),
        _ => ParseOutcome::no_match(),
    }
}

/// `[element for binding in iterable if filter]`, the filter being optional.
pub fn parse_list_comprehension(view: TokenView) -> ParseOutcome {
    if !view.is(0, TokenKind::OpenBracket) {
        return ParseOutcome::no_match();
    }
    let Some(close) = view.matching_close(0) else {
        return ParseOutcome::no_match();
    };

    let inner = view.slice(1, close);
    if inner.is_empty() {
        return ParseOutcome::no_match();
    }

    let (element, mut pos) = match resolve_expression(inner).into_parts() {
        (Some(element), consumed) => (element, consumed),
        _ => return ParseOutcome::no_match(),
    };

    let binding = match (inner.get(pos), inner.get(pos + 1), inner.get(pos + 2)) {
        (Some(for_kw), Some(binding), Some(in_kw))
            if for_kw.kind == TokenKind::For
                && binding.kind == TokenKind::Identifier
                && in_kw.kind == TokenKind::In =>
        {
            binding.clone()
        }
        _ => return ParseOutcome::no_match(),
    };
    pos += 3;

    let iterable_view = inner.advance(pos);
    if iterable_view.is_empty() {
        return ParseOutcome::no_match();
    }
    let iterable = match resolve_with(iterable_view, BindingPower::Ternary).into_parts() {
        (Some(iterable), consumed) => {
            pos += consumed;
            iterable
        }
        _ => return ParseOutcome::no_match(),
    };

    let filter = if inner.is(pos, TokenKind::If) {
        match resolve_exact(inner.advance(pos + 1)) {
            Some(filter) => {
                pos = inner.len();
                Some(Box::new(filter))
            }
            None => return ParseOutcome::no_match(),
        }
    } else {
        None
    };

    if pos != inner.len() {
        return ParseOutcome::no_match();
    }

    let kind = NodeKind::InlineListComprehension(InlineListComprehension {
        element: Box::new(element),
        binding,
        iterable: Box::new(iterable),
        filter,
    });
    build(view, kind, close + 1)
}

// EXTENSIONS
//
// Each takes the left operand together with the view it started at and the
// number of tokens it used.

/// `left op right` where `op` binds at `bp`.
pub fn extend_binary_op(left: Node, view: TokenView, consumed: usize, bp: BindingPower) -> Extension {
    let Some(op) = view.get(consumed) else {
        return Extension::Unchanged(left);
    };

    let right_view = view.advance(consumed + 1);
    if right_view.is_empty() {
        return Extension::Unchanged(left);
    }

    let right_bp = if is_right_associative(op.kind) {
        bp.weaker()
    } else {
        bp
    };

    match resolve_with(right_view, right_bp).into_parts() {
        (Some(right), right_len) => extended(
            view,
            NodeKind::BinaryOp(BinaryOp {
                op: op.clone(),
                left: Box::new(left),
                right: Box::new(right),
            }),
            consumed,
            right_len + 1,
        ),
        _ => Extension::Unchanged(left),
    }
}

/// `left++`, `left--` or `left[index]`.
pub fn extend_suffix_op(left: Node, view: TokenView, consumed: usize) -> Extension {
    let Some(op) = view.get(consumed) else {
        return Extension::Unchanged(left);
    };

    match op.kind {
        TokenKind::Inc | TokenKind::Dec => extended(
            view,
            NodeKind::SuffixOp(SuffixOp {
                op: op.clone(),
                operand: Box::new(left),
                index: None,
            }),
            consumed,
            1,
        ),
        TokenKind::OpenBracket => {
            let Some(close) = view.matching_close(consumed) else {
                return Extension::Unchanged(left);
            };
            let Some(index) = resolve_exact(view.slice(consumed + 1, close)) else {
                return Extension::Unchanged(left);
            };

            extended(
                view,
                NodeKind::SuffixOp(SuffixOp {
                    op: op.clone(),
                    operand: Box::new(left),
                    index: Some(Box::new(index)),
                }),
                consumed,
                close + 1 - consumed,
            )
        }
        _ => Extension::Unchanged(left),
    }
}

/// `left if condition else fail`
pub fn extend_inline_control_flow(left: Node, view: TokenView, consumed: usize) -> Extension {
    if !view.is(consumed, TokenKind::If) {
        return Extension::Unchanged(left);
    }

    let condition_view = view.advance(consumed + 1);
    if condition_view.is_empty() {
        return Extension::Unchanged(left);
    }
    let (condition, condition_len) =
        match resolve_with(condition_view, BindingPower::Ternary).into_parts() {
            (Some(condition), len) => (condition, len),
            _ => return Extension::Unchanged(left),
        };

    let else_at = consumed + 1 + condition_len;
    if !view.is(else_at, TokenKind::Else) {
        return Extension::Unchanged(left);
    }

    let fail_view = view.advance(else_at + 1);
    if fail_view.is_empty() {
        return Extension::Unchanged(left);
    }
    let (fail, fail_len) = match resolve_with(fail_view, BindingPower::Default).into_parts() {
        (Some(fail), len) => (fail, len),
        _ => return Extension::Unchanged(left),
    };

    extended(
        view,
        NodeKind::InlineControlFlow(InlineControlFlow {
            condition: Box::new(condition),
            pass: Box::new(left),
            fail: Box::new(fail),
        }),
        consumed,
        condition_len + fail_len + 2,
    )
}

// STANDALONE ATTEMPTS FOR THE EXTENDED FORMS

fn attempt_as(view: TokenView, bp: BindingPower, expected: NodeType) -> ParseOutcome {
    if view.is_empty() {
        return ParseOutcome::no_match();
    }

    let outcome = resolve_with(view, bp);
    match &outcome.node {
        Some(node) if node.node_type() == expected => outcome,
        _ => ParseOutcome::no_match(),
    }
}

/// Matches when the whole expression at the head of `view` is a binary operation.
pub fn parse_binary_op(view: TokenView) -> ParseOutcome {
    attempt_as(view, BindingPower::Default, NodeType::BinaryOp)
}

/// Matches an operand followed by at least one suffix operator.
pub fn parse_suffix_op(view: TokenView) -> ParseOutcome {
    attempt_as(view, BindingPower::Unary, NodeType::SuffixOp)
}

pub fn parse_inline_control_flow(view: TokenView) -> ParseOutcome {
    attempt_as(view, BindingPower::Default, NodeType::InlineControlFlow)
}
