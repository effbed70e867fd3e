//! Ordered-first-match expression resolution.
//!
//! A primary form is chosen by trying [`PRIMARY_CANDIDATES`] in order and
//! accepting the first that consumes tokens. The primary is then extended
//! greedily by suffix, infix and inline-conditional continuations while the
//! next operator binds tighter than the caller's minimum binding power.
//! Nothing is ever backtracked: a continuation that fails to complete leaves
//! the expression as it was.

use crate::{ast::Node, lexer::tokens::TokenKind};

use super::{
    expr::{extend_binary_op, extend_inline_control_flow, extend_suffix_op},
    lookups::{infix_binding_power, is_suffix_operator, BindingPower, PRIMARY_CANDIDATES},
    view::{Extension, ParseOutcome, TokenView},
};

/// The expression at the head of `view`, or no match with zero consumed.
///
/// # Panics
///
/// When `view` is empty. Callers check that tokens remain before resolving.
pub fn resolve_expression(view: TokenView) -> ParseOutcome {
    resolve_with(view, BindingPower::Default)
}

/// Like [`resolve_expression`], but stops before any operator that does not
/// bind tighter than `min_bp`.
pub fn resolve_with(view: TokenView, min_bp: BindingPower) -> ParseOutcome {
    assert!(
        !view.is_empty(),
        "expression resolution requires at least one token"
    );

    let (mut left, mut consumed) = match resolve_primary(view).into_parts() {
        (Some(node), consumed) => (node, consumed),
        _ => return ParseOutcome::no_match(),
    };

    loop {
        match extend(left, view, consumed, min_bp) {
            Extension::Extended { node, consumed: extra } => {
                left = node;
                consumed += extra;
            }
            Extension::Unchanged(node) => {
                left = node;
                break;
            }
        }
    }

    ParseOutcome::matched(left, consumed)
}

/// First primary candidate that matches at the head of `view`.
pub fn resolve_primary(view: TokenView) -> ParseOutcome {
    for (name, attempt) in PRIMARY_CANDIDATES.iter() {
        let outcome = attempt(view);
        if outcome.is_match() {
            tracing::trace!(
                candidate = *name,
                offset = view.offset(),
                consumed = outcome.consumed,
                "primary matched"
            );
            return outcome;
        }
    }

    ParseOutcome::no_match()
}

fn extend(left: Node, view: TokenView, consumed: usize, min_bp: BindingPower) -> Extension {
    let Some(kind) = view.kind(consumed) else {
        return Extension::Unchanged(left);
    };

    if is_suffix_operator(kind) && BindingPower::Suffix > min_bp {
        return extend_suffix_op(left, view, consumed);
    }

    if kind == TokenKind::If && BindingPower::Ternary > min_bp {
        return extend_inline_control_flow(left, view, consumed);
    }

    match infix_binding_power(kind) {
        Some(bp) if bp > min_bp => extend_binary_op(left, view, consumed, bp),
        _ => Extension::Unchanged(left),
    }
}
