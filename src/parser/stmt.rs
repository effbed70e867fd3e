use crate::{
    ast::{
        statements::{
            Assignment, BlockStatement, BreakStatement, CaseStatement, ContinueStatement,
            DefaultCaseStatement, ElseIfStatement, ElseStatement, ForLoop, ForLoopKind,
            IfStatement, Suite, SwitchStatement, WhileLoop,
        },
        Node, NodeKind,
    },
    lexer::tokens::TokenKind,
};

use super::{
    lookups::STATEMENT_CANDIDATES,
    resolver::resolve_expression,
    view::{ParseOutcome, TokenView},
};

fn build(view: TokenView, kind: NodeKind, consumed: usize) -> ParseOutcome {
    let node = Node::new(kind, view.span(consumed), view.range(consumed));
    ParseOutcome::matched(node, consumed)
}

/// Resolves an expression, treating an empty view as no match.
fn expression(view: TokenView) -> Option<(Node, usize)> {
    if view.is_empty() {
        return None;
    }

    match resolve_expression(view).into_parts() {
        (Some(node), consumed) => Some((node, consumed)),
        _ => None,
    }
}

/// The first statement form that matches at the head of `view`.
pub fn parse_stmt(view: TokenView) -> ParseOutcome {
    if view.is_empty() {
        return ParseOutcome::no_match();
    }

    for (name, attempt) in STATEMENT_CANDIDATES.iter() {
        let outcome = attempt(view);
        if outcome.is_match() {
            tracing::trace!(
                statement = *name,
                offset = view.offset(),
                consumed = outcome.consumed,
                "statement matched"
            );
            return outcome;
        }
    }

    ParseOutcome::no_match()
}

/// `{ stmt* }`, with empty `;` statements skipped. Every enclosed statement must parse.
pub fn parse_suite(view: TokenView) -> Option<(Suite, usize)> {
    if !view.is(0, TokenKind::OpenBrace) {
        return None;
    }
    let close = view.matching_close(0)?;
    let inner = view.slice(1, close);

    let mut statements = vec![];
    let mut pos = 0;

    while pos < inner.len() {
        if inner.is(pos, TokenKind::Semicolon) {
            pos += 1;
            continue;
        }

        match parse_stmt(inner.advance(pos)).into_parts() {
            (Some(statement), consumed) => {
                statements.push(statement);
                pos += consumed;
            }
            _ => return None,
        }
    }

    let suite = Suite {
        statements,
        span: view.span(close + 1),
        tokens: view.range(close + 1),
    };
    Some((suite, close + 1))
}

/// `condition suite` starting at `view`. Returns both and the tokens used.
fn condition_and_suite(view: TokenView) -> Option<(Node, Suite, usize)> {
    let (condition, condition_len) = expression(view)?;
    let (suite, suite_len) = parse_suite(view.advance(condition_len))?;
    Some((condition, suite, condition_len + suite_len))
}

/// `if|unless cond suite {else if cond suite} [else suite]`
pub fn parse_if_stmt(view: TokenView) -> ParseOutcome {
    let negated = match view.kind(0) {
        Some(TokenKind::If) => false,
        Some(TokenKind::Unless) => true,
        _ => return ParseOutcome::no_match(),
    };

    let Some((condition, suite, len)) = condition_and_suite(view.advance(1)) else {
        return ParseOutcome::no_match();
    };

    let mut pos = 1 + len;
    let mut alternatives = vec![];

    while view.is(pos, TokenKind::Else) {
        let branch = view.advance(pos);

        if branch.is(1, TokenKind::If) {
            let Some((condition, suite, len)) = condition_and_suite(branch.advance(2)) else {
                return ParseOutcome::no_match();
            };
            let consumed = 2 + len;
            let kind = NodeKind::ElseIfStatement(ElseIfStatement {
                condition: Box::new(condition),
                suite,
            });
            alternatives.push(Node::new(kind, branch.span(consumed), branch.range(consumed)));
            pos += consumed;
            continue;
        }

        let Some((suite, len)) = parse_suite(branch.advance(1)) else {
            return ParseOutcome::no_match();
        };
        let consumed = 1 + len;
        let kind = NodeKind::ElseStatement(ElseStatement { suite });
        alternatives.push(Node::new(kind, branch.span(consumed), branch.range(consumed)));
        pos += consumed;
        break;
    }

    let kind = NodeKind::IfStatement(IfStatement {
        negated,
        condition: Box::new(condition),
        suite,
        alternatives,
    });
    build(view, kind, pos)
}

/// `while cond suite`
pub fn parse_while_stmt(view: TokenView) -> ParseOutcome {
    if !view.is(0, TokenKind::While) {
        return ParseOutcome::no_match();
    }

    match condition_and_suite(view.advance(1)) {
        Some((condition, suite, len)) => build(
            view,
            NodeKind::WhileLoop(WhileLoop {
                condition: Box::new(condition),
                suite,
            }),
            1 + len,
        ),
        None => ParseOutcome::no_match(),
    }
}

/// An assignment or a bare expression, as used in for-loop clauses.
///
/// Unlike the statement forms, these take no `;` of their own.
fn simple_statement(view: TokenView) -> Option<(Node, usize)> {
    let outcome = assignment(view);
    if let (Some(node), consumed) = outcome.into_parts() {
        return Some((node, consumed));
    }
    expression(view)
}

/// Length of the `;`-terminated statement at the head of `view`, not
/// counting its terminator. `None` when no such form starts there.
pub fn unterminated_len(view: TokenView) -> Option<usize> {
    if view.is(0, TokenKind::Continue) || view.is(0, TokenKind::Break) {
        return Some(1);
    }
    simple_statement(view).map(|(_, len)| len)
}

/// Requires a `;` right after a matched statement and consumes it.
/// The node itself does not cover the terminator.
fn terminated(view: TokenView, outcome: ParseOutcome) -> ParseOutcome {
    match outcome.into_parts() {
        (Some(node), consumed) if view.is(consumed, TokenKind::Semicolon) => {
            ParseOutcome::matched(node, consumed + 1)
        }
        _ => ParseOutcome::no_match(),
    }
}

/// `for binding in iterable suite` or `for [init]; [cond]; [update] suite`
pub fn parse_for_stmt(view: TokenView) -> ParseOutcome {
    if !view.is(0, TokenKind::For) {
        return ParseOutcome::no_match();
    }

    let mut pos = 1;

    let range_binding = match view.get(1) {
        Some(binding) if binding.kind == TokenKind::Identifier && view.is(2, TokenKind::In) => {
            Some(binding.clone())
        }
        _ => None,
    };

    let loop_kind = if let Some(binding) = range_binding {
        let Some((iterable, len)) = expression(view.advance(3)) else {
            return ParseOutcome::no_match();
        };
        pos = 3 + len;

        ForLoopKind::Range {
            binding,
            iterable: Box::new(iterable),
        }
    } else {
        let init = if view.is(pos, TokenKind::Semicolon) {
            None
        } else {
            let Some((init, len)) = simple_statement(view.advance(pos)) else {
                return ParseOutcome::no_match();
            };
            pos += len;
            Some(Box::new(init))
        };
        if !view.is(pos, TokenKind::Semicolon) {
            return ParseOutcome::no_match();
        }
        pos += 1;

        let condition = if view.is(pos, TokenKind::Semicolon) {
            None
        } else {
            let Some((condition, len)) = expression(view.advance(pos)) else {
                return ParseOutcome::no_match();
            };
            pos += len;
            Some(Box::new(condition))
        };
        if !view.is(pos, TokenKind::Semicolon) {
            return ParseOutcome::no_match();
        }
        pos += 1;

        let update = if view.is(pos, TokenKind::OpenBrace) {
            None
        } else {
            let Some((update, len)) = simple_statement(view.advance(pos)) else {
                return ParseOutcome::no_match();
            };
            pos += len;
            Some(Box::new(update))
        };

        ForLoopKind::CStyle {
            init,
            condition,
            update,
        }
    };

    let Some((suite, len)) = parse_suite(view.advance(pos)) else {
        return ParseOutcome::no_match();
    };

    build(view, NodeKind::ForLoop(ForLoop { loop_kind, suite }), pos + len)
}

/// `switch subject { case expr suite ... default suite }`
pub fn parse_switch_stmt(view: TokenView) -> ParseOutcome {
    if !view.is(0, TokenKind::Switch) {
        return ParseOutcome::no_match();
    }

    let Some((subject, subject_len)) = expression(view.advance(1)) else {
        return ParseOutcome::no_match();
    };

    let open = 1 + subject_len;
    if !view.is(open, TokenKind::OpenBrace) {
        return ParseOutcome::no_match();
    }
    let Some(close) = view.matching_close(open) else {
        return ParseOutcome::no_match();
    };

    let body = view.slice(open + 1, close);
    let mut cases = vec![];
    let mut has_default = false;
    let mut pos = 0;

    while pos < body.len() {
        let case = body.advance(pos);

        match case.kind(0) {
            Some(TokenKind::Semicolon) => {
                pos += 1;
            }
            Some(TokenKind::Case) => {
                let Some((condition, suite, len)) = condition_and_suite(case.advance(1)) else {
                    return ParseOutcome::no_match();
                };
                let consumed = 1 + len;
                let kind = NodeKind::CaseStatement(CaseStatement {
                    condition: Box::new(condition),
                    suite,
                });
                cases.push(Node::new(kind, case.span(consumed), case.range(consumed)));
                pos += consumed;
            }
            Some(TokenKind::Default) if !has_default => {
                let Some((suite, len)) = parse_suite(case.advance(1)) else {
                    return ParseOutcome::no_match();
                };
                let consumed = 1 + len;
                let kind = NodeKind::DefaultCaseStatement(DefaultCaseStatement { suite });
                cases.push(Node::new(kind, case.span(consumed), case.range(consumed)));
                has_default = true;
                pos += consumed;
            }
            _ => return ParseOutcome::no_match(),
        }
    }

    let kind = NodeKind::SwitchStatement(SwitchStatement {
        subject: Box::new(subject),
        cases,
    });
    build(view, kind, close + 1)
}

/// `continue ;`
pub fn parse_continue_stmt(view: TokenView) -> ParseOutcome {
    if !view.is(0, TokenKind::Continue) {
        return ParseOutcome::no_match();
    }
    terminated(view, build(view, NodeKind::ContinueStatement(ContinueStatement), 1))
}

/// `break ;`
pub fn parse_break_stmt(view: TokenView) -> ParseOutcome {
    if !view.is(0, TokenKind::Break) {
        return ParseOutcome::no_match();
    }
    terminated(view, build(view, NodeKind::BreakStatement(BreakStatement), 1))
}

/// A bare `{ ... }` block.
pub fn parse_block_stmt(view: TokenView) -> ParseOutcome {
    match parse_suite(view) {
        Some((suite, len)) => build(view, NodeKind::BlockStatement(BlockStatement { suite }), len),
        None => ParseOutcome::no_match(),
    }
}

/// `target op value ;` where `op` is `=` or a compound assignment operator.
pub fn parse_assignment(view: TokenView) -> ParseOutcome {
    terminated(view, assignment(view))
}

fn assignment(view: TokenView) -> ParseOutcome {
    let Some((target, target_len)) = expression(view) else {
        return ParseOutcome::no_match();
    };

    let op = match view.get(target_len) {
        Some(op) if op.kind.is_assignment_operator() => op.clone(),
        _ => return ParseOutcome::no_match(),
    };

    let Some((value, value_len)) = expression(view.advance(target_len + 1)) else {
        return ParseOutcome::no_match();
    };

    let kind = NodeKind::Assignment(Assignment {
        target: Box::new(target),
        op,
        value: Box::new(value),
    });
    build(view, kind, target_len + 1 + value_len)
}

/// Any expression standing on its own, followed by `;`.
pub fn parse_expression_stmt(view: TokenView) -> ParseOutcome {
    if view.is_empty() {
        return ParseOutcome::no_match();
    }
    terminated(view, resolve_expression(view))
}
