//! Unit tests for the parser module.
//!
//! This module contains tests for:
//! - Attempt-parse of every expression variant and its consumed count
//! - Ordered-first-match resolution and no-match propagation
//! - Operator precedence and associativity
//! - Statement forms and suites
//! - Program-level error reporting

use crate::{
    ast::{
        expressions::{AccessType, BinaryOp, LiteralType},
        statements::ForLoopKind,
        Node, NodeKind, NodeType,
    },
    errors::errors::ErrorImpl,
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
};

use super::{
    expr::{
        parse_binary_op, parse_function_call, parse_inline_control_flow, parse_inline_lambda,
        parse_list_comprehension, parse_literal, parse_scope_access, parse_suffix_op,
    },
    parser::parse,
    resolver::resolve_expression,
    stmt::{parse_assignment, parse_stmt, parse_suite},
    view::TokenView,
};

/// Tokens of `source` without the trailing `Eof`.
fn lex(source: &str) -> Vec<Token> {
    let mut tokens = tokenize(source, Some("test.hlx")).unwrap();
    tokens.pop();
    tokens
}

fn resolve(source: &str) -> (Option<Node>, usize) {
    let tokens = lex(source);
    resolve_expression(TokenView::new(&tokens)).into_parts()
}

fn resolved(source: &str) -> Node {
    let (node, consumed) = resolve(source);
    assert_eq!(consumed, lex(source).len(), "did not consume all of {:?}", source);
    node.unwrap()
}

fn binary(node: &Node) -> &BinaryOp {
    match &node.kind {
        NodeKind::BinaryOp(op) => op,
        other => panic!("expected binary op, got {:?}", other),
    }
}

fn parse_source(source: &str) -> Vec<Node> {
    let tokens = tokenize(source, Some("test.hlx")).unwrap();
    parse(&tokens, "test.hlx").unwrap().statements
}

// LITERALS AND NAMES

#[test]
fn test_literal_consumes_one_token() {
    let tokens = lex("42");
    let outcome = parse_literal(TokenView::new(&tokens));

    assert_eq!(outcome.consumed, 1);
    match outcome.node.unwrap().kind {
        NodeKind::Literal(literal) => {
            assert_eq!(literal.literal_type, LiteralType::Integer);
            assert_eq!(literal.value.lexeme, "42");
        }
        other => panic!("expected literal, got {:?}", other),
    }
}

#[test]
fn test_literal_types() {
    let cases = [
        ("1e5", LiteralType::Scientific),
        ("2.5E-3", LiteralType::Scientific),
        ("2.0", LiteralType::Float),
        ("0xE1", LiteralType::Integer),
        ("'c'", LiteralType::Char),
        ("\"s\"", LiteralType::String),
        ("true", LiteralType::Bool),
        ("null", LiteralType::None),
    ];

    for (source, expected) in cases {
        match resolved(source).kind {
            NodeKind::Literal(literal) => assert_eq!(literal.literal_type, expected, "{}", source),
            other => panic!("expected literal for {}, got {:?}", source, other),
        }
    }
}

#[test]
fn test_literal_rejects_identifier() {
    let tokens = lex("foo");
    let outcome = parse_literal(TokenView::new(&tokens));

    assert!(!outcome.is_match());
    assert_eq!(outcome.consumed, 0);
}

#[test]
fn test_primitive_name_is_identifier() {
    assert_eq!(resolved("i32").node_type(), NodeType::Identifier);
}

// SCOPE ACCESS

#[test]
fn test_scope_access_namespace() {
    let tokens = lex("foo :: bar");
    let outcome = parse_scope_access(TokenView::new(&tokens));

    assert_eq!(outcome.consumed, 3);
    match outcome.node.unwrap().kind {
        NodeKind::ScopeAccess(access) => {
            assert_eq!(access.access, AccessType::Namespace);
            assert_eq!(access.child.lexeme, "bar");
            assert_eq!(access.parent.node_type(), NodeType::Identifier);
        }
        other => panic!("expected scope access, got {:?}", other),
    }
}

#[test]
fn test_scope_access_connectors() {
    for (source, expected) in [("a.b", AccessType::Member), ("p->x", AccessType::Pointer)] {
        match resolved(source).kind {
            NodeKind::ScopeAccess(access) => assert_eq!(access.access, expected),
            other => panic!("expected scope access, got {:?}", other),
        }
    }
}

#[test]
fn test_scope_access_chain_folds_left() {
    let node = resolved("a::b.c");

    assert_eq!(node.token_count(), 5);
    match &node.kind {
        NodeKind::ScopeAccess(access) => {
            assert_eq!(access.access, AccessType::Member);
            let path: Vec<&str> = access.path().iter().map(|t| t.lexeme.as_str()).collect();
            assert_eq!(path, vec!["a", "b", "c"]);
            match &access.parent.kind {
                NodeKind::ScopeAccess(parent) => assert_eq!(parent.access, AccessType::Namespace),
                other => panic!("expected nested access, got {:?}", other),
            }
        }
        other => panic!("expected scope access, got {:?}", other),
    }
}

#[test]
fn test_scope_access_needs_connector() {
    let tokens = lex("foo bar");
    assert!(!parse_scope_access(TokenView::new(&tokens)).is_match());
}

// FUNCTION CALLS

#[test]
fn test_function_call_positional_and_named() {
    let tokens = lex("std::print(\"yoo\", end=\" \")");
    assert_eq!(tokens.len(), 10);

    let outcome = parse_function_call(TokenView::new(&tokens));
    assert_eq!(outcome.consumed, 10);

    let node = outcome.node.unwrap();
    assert_eq!(node.tokens, 0..10);
    match node.kind {
        NodeKind::FunctionCall(call) => {
            assert_eq!(call.callee.node_type(), NodeType::ScopeAccess);
            assert_eq!(call.positional.len(), 1);
            assert_eq!(call.named.len(), 1);

            match &call.positional[0].kind {
                NodeKind::Literal(literal) => assert_eq!(literal.value.lexeme, "\"yoo\""),
                other => panic!("expected literal, got {:?}", other),
            }
            assert_eq!(call.named[0].name.lexeme, "end");
            match &call.named[0].value.kind {
                NodeKind::Literal(literal) => assert_eq!(literal.value.lexeme, "\" \""),
                other => panic!("expected literal, got {:?}", other),
            }
        }
        other => panic!("expected call, got {:?}", other),
    }
}

#[test]
fn test_function_call_nested_arguments() {
    let node = resolved("f(g(1, 2), [x for x in y], h)");

    match node.kind {
        NodeKind::FunctionCall(call) => {
            assert_eq!(call.argument_count(), 3);
            assert_eq!(call.positional[0].node_type(), NodeType::FunctionCall);
            assert_eq!(call.positional[1].node_type(), NodeType::InlineListComprehension);
        }
        other => panic!("expected call, got {:?}", other),
    }
}

#[test]
fn test_function_call_without_arguments() {
    let tokens = lex("run()");
    let outcome = parse_function_call(TokenView::new(&tokens));

    assert_eq!(outcome.consumed, 3);
}

#[test]
fn test_function_call_rejects_incomplete_argument() {
    let tokens = lex("f(1 2)");
    assert!(!parse_function_call(TokenView::new(&tokens)).is_match());

    // The resolver falls through to the next candidate instead.
    let (node, consumed) = resolve("f(1 2)");
    assert_eq!(node.unwrap().node_type(), NodeType::Identifier);
    assert_eq!(consumed, 1);
}

#[test]
fn test_function_call_rejects_unclosed_paren() {
    let tokens = lex("f(1, 2");
    assert!(!parse_function_call(TokenView::new(&tokens)).is_match());
}

#[test]
fn test_call_shadows_scope_access() {
    let node = resolved("a.b(1)");

    match node.kind {
        NodeKind::FunctionCall(call) => assert_eq!(call.callee.node_type(), NodeType::ScopeAccess),
        other => panic!("expected call, got {:?}", other),
    }
}

// RESOLVER

#[test]
fn test_resolver_no_match_on_stray_punctuation() {
    for source in [")", ";", "}", ",", "else"] {
        let (node, consumed) = resolve(source);
        assert!(node.is_none(), "{} should not match", source);
        assert_eq!(consumed, 0);
    }
}

#[test]
#[should_panic]
fn test_resolver_panics_on_empty_view() {
    let tokens: Vec<Token> = vec![];
    resolve_expression(TokenView::new(&tokens));
}

#[test]
fn test_resolver_is_deterministic() {
    let tokens = lex("a::b(c + 1, d=e[2]) * -f");
    let view = TokenView::new(&tokens);

    let first = resolve_expression(view);
    let second = resolve_expression(view);

    assert_eq!(first, second);
    assert_eq!(first.consumed, tokens.len());
}

#[test]
fn test_resolver_stops_at_dangling_operator() {
    let (node, consumed) = resolve("a +");

    assert_eq!(node.unwrap().node_type(), NodeType::Identifier);
    assert_eq!(consumed, 1);
}

#[test]
fn test_resolver_respects_sub_view_offset() {
    let tokens = lex("x = a + b");
    let outcome = resolve_expression(TokenView::new(&tokens).advance(2));

    let node = outcome.node.unwrap();
    assert_eq!(node.tokens, 2..5);
    assert_eq!(node.span.start.column, 5);
}

// PRECEDENCE

#[test]
fn test_multiplication_binds_tighter() {
    let node = resolved("1 + 2 * 3");
    let top = binary(&node);

    assert_eq!(top.op.kind, TokenKind::Add);
    assert_eq!(binary(&top.right).op.kind, TokenKind::Mul);
}

#[test]
fn test_subtraction_is_left_associative() {
    let node = resolved("1 - 2 - 3");
    let top = binary(&node);

    assert_eq!(top.left.node_type(), NodeType::BinaryOp);
    assert_eq!(top.right.node_type(), NodeType::Literal);
}

#[test]
fn test_power_is_right_associative() {
    let node = resolved("2 ** 3 ** 2");
    let top = binary(&node);

    assert_eq!(top.left.node_type(), NodeType::Literal);
    assert_eq!(binary(&top.right).op.kind, TokenKind::Pow);
}

#[test]
fn test_logical_and_relational_levels() {
    let node = resolved("a < b && c || d");
    let top = binary(&node);

    assert_eq!(top.op.kind, TokenKind::LogicalOr);
    let and = binary(&top.left);
    assert_eq!(and.op.kind, TokenKind::LogicalAnd);
    assert_eq!(binary(&and.left).op.kind, TokenKind::LessThan);
}

#[test]
fn test_grouping_overrides_precedence() {
    let node = resolved("(1 + 2) * 3");
    let top = binary(&node);

    assert_eq!(top.op.kind, TokenKind::Mul);
    assert_eq!(binary(&top.left).op.kind, TokenKind::Add);
}

#[test]
fn test_unary_binds_tighter_than_binary() {
    let node = resolved("-x * 2");
    let top = binary(&node);

    assert_eq!(top.op.kind, TokenKind::Mul);
    assert_eq!(top.left.node_type(), NodeType::UnaryOp);
}

#[test]
fn test_range_operator() {
    let node = resolved("0..n + 1");
    let top = binary(&node);

    assert_eq!(top.op.kind, TokenKind::Range);
    assert_eq!(top.right.node_type(), NodeType::BinaryOp);
}

#[test]
fn test_binary_op_attempt() {
    let tokens = lex("a + b");
    assert_eq!(parse_binary_op(TokenView::new(&tokens)).consumed, 3);

    let tokens = lex("a");
    assert!(!parse_binary_op(TokenView::new(&tokens)).is_match());
}

// SUFFIX, INLINE FORMS

#[test]
fn test_suffix_chain() {
    let tokens = lex("a[i + 1]++");
    let outcome = parse_suffix_op(TokenView::new(&tokens));

    assert_eq!(outcome.consumed, 7);
    match outcome.node.unwrap().kind {
        NodeKind::SuffixOp(outer) => {
            assert_eq!(outer.op.kind, TokenKind::Inc);
            assert!(outer.index.is_none());
            match outer.operand.kind {
                NodeKind::SuffixOp(inner) => {
                    assert_eq!(inner.op.kind, TokenKind::OpenBracket);
                    assert_eq!(inner.index.unwrap().node_type(), NodeType::BinaryOp);
                }
                other => panic!("expected index, got {:?}", other),
            }
        }
        other => panic!("expected suffix op, got {:?}", other),
    }
}

#[test]
fn test_inline_control_flow() {
    let tokens = lex("a if c else b");
    let outcome = parse_inline_control_flow(TokenView::new(&tokens));

    assert_eq!(outcome.consumed, 5);
    match outcome.node.unwrap().kind {
        NodeKind::InlineControlFlow(flow) => {
            let names: Vec<Node> = vec![*flow.pass, *flow.condition, *flow.fail];
            let names: Vec<String> = names.iter().map(|node| node.to_string()).collect();
            assert_eq!(names, vec!["a", "c", "b"]);
        }
        other => panic!("expected inline control flow, got {:?}", other),
    }
}

#[test]
fn test_inline_control_flow_without_else_is_not_taken() {
    let (node, consumed) = resolve("a if c");

    assert_eq!(node.unwrap().node_type(), NodeType::Identifier);
    assert_eq!(consumed, 1);
}

#[test]
fn test_inline_lambda() {
    let tokens = lex("fn (x, y): x + y");
    let outcome = parse_inline_lambda(TokenView::new(&tokens));

    assert_eq!(outcome.consumed, 10);
    match outcome.node.unwrap().kind {
        NodeKind::InlineLambda(lambda) => {
            assert_eq!(lambda.parameters.len(), 2);
            assert_eq!(lambda.body.node_type(), NodeType::BinaryOp);
        }
        other => panic!("expected lambda, got {:?}", other),
    }
}

#[test]
fn test_inline_lambda_without_parameters() {
    let tokens = lex("fn (): 0");
    assert_eq!(parse_inline_lambda(TokenView::new(&tokens)).consumed, 5);
}

#[test]
fn test_list_comprehension() {
    let tokens = lex("[x * 2 for x in xs if x > 1]");
    let outcome = parse_list_comprehension(TokenView::new(&tokens));

    assert_eq!(outcome.consumed, 13);
    match outcome.node.unwrap().kind {
        NodeKind::InlineListComprehension(comp) => {
            assert_eq!(comp.binding.lexeme, "x");
            assert_eq!(comp.element.node_type(), NodeType::BinaryOp);
            assert_eq!(comp.iterable.node_type(), NodeType::Identifier);
            assert_eq!(comp.filter.unwrap().node_type(), NodeType::BinaryOp);
        }
        other => panic!("expected comprehension, got {:?}", other),
    }
}

#[test]
fn test_list_comprehension_requires_for() {
    let tokens = lex("[1, 2]");
    assert!(!parse_list_comprehension(TokenView::new(&tokens)).is_match());
}

// STATEMENTS

#[test]
fn test_suite_skips_semicolons() {
    let tokens = lex("{ ; a; ; b; }");
    let (suite, consumed) = parse_suite(TokenView::new(&tokens)).unwrap();

    assert_eq!(consumed, tokens.len());
    assert_eq!(suite.len(), 2);
}

#[test]
fn test_suite_fails_on_bad_statement() {
    let tokens = lex("{ a = }");
    assert!(parse_suite(TokenView::new(&tokens)).is_none());
}

#[test]
fn test_assignment() {
    let tokens = lex("counts[i] += 1;");
    let outcome = parse_assignment(TokenView::new(&tokens));

    assert_eq!(outcome.consumed, 7);
    let node = outcome.node.unwrap();
    assert_eq!(node.token_count(), 6);
    match node.kind {
        NodeKind::Assignment(assignment) => {
            assert_eq!(assignment.op.kind, TokenKind::AddAssign);
            assert_eq!(assignment.target.node_type(), NodeType::SuffixOp);
        }
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn test_assignment_needs_operator() {
    let tokens = lex("a == b;");
    assert!(!parse_assignment(TokenView::new(&tokens)).is_match());

    let outcome = parse_stmt(TokenView::new(&tokens));
    assert_eq!(outcome.node.unwrap().node_type(), NodeType::BinaryOp);
}

#[test]
fn test_if_chain() {
    let statements = parse_source("if a { b; } else if c { d; } else { e; f; }");
    assert_eq!(statements.len(), 1);

    match &statements[0].kind {
        NodeKind::IfStatement(if_stmt) => {
            assert!(!if_stmt.negated);
            assert_eq!(if_stmt.suite.len(), 1);
            let kinds: Vec<NodeType> = if_stmt.alternatives.iter().map(Node::node_type).collect();
            assert_eq!(kinds, vec![NodeType::ElseIfStatement, NodeType::ElseStatement]);
        }
        other => panic!("expected if, got {:?}", other),
    }
}

#[test]
fn test_unless() {
    let statements = parse_source("unless done { work(); }");

    match &statements[0].kind {
        NodeKind::IfStatement(if_stmt) => assert!(if_stmt.negated),
        other => panic!("expected if, got {:?}", other),
    }
}

#[test]
fn test_while_with_break() {
    let statements = parse_source("while i < 10 { i += 1; if i == 5 { break; } }");

    match &statements[0].kind {
        NodeKind::WhileLoop(while_loop) => {
            assert_eq!(while_loop.condition.node_type(), NodeType::BinaryOp);
            assert_eq!(while_loop.suite.len(), 2);
        }
        other => panic!("expected while, got {:?}", other),
    }
}

#[test]
fn test_for_range() {
    let statements = parse_source("for x in 0..10 { print(x); }");

    match &statements[0].kind {
        NodeKind::ForLoop(for_loop) => match &for_loop.loop_kind {
            ForLoopKind::Range { binding, iterable } => {
                assert_eq!(binding.lexeme, "x");
                assert_eq!(iterable.node_type(), NodeType::BinaryOp);
            }
            other => panic!("expected range loop, got {:?}", other),
        },
        other => panic!("expected for, got {:?}", other),
    }
}

#[test]
fn test_for_c_style() {
    let statements = parse_source("for i = 0; i < 10; i++ { continue; }");

    match &statements[0].kind {
        NodeKind::ForLoop(for_loop) => {
            match &for_loop.loop_kind {
                ForLoopKind::CStyle {
                    init,
                    condition,
                    update,
                } => {
                    assert_eq!(init.as_ref().unwrap().node_type(), NodeType::Assignment);
                    assert_eq!(condition.as_ref().unwrap().node_type(), NodeType::BinaryOp);
                    assert_eq!(update.as_ref().unwrap().node_type(), NodeType::SuffixOp);
                }
                other => panic!("expected c-style loop, got {:?}", other),
            }
            assert_eq!(
                for_loop.suite.statements[0].node_type(),
                NodeType::ContinueStatement
            );
        }
        other => panic!("expected for, got {:?}", other),
    }
}

#[test]
fn test_for_c_style_empty_clauses() {
    let statements = parse_source("for ; ; { break; }");

    match &statements[0].kind {
        NodeKind::ForLoop(for_loop) => assert_eq!(
            for_loop.loop_kind,
            ForLoopKind::CStyle {
                init: None,
                condition: None,
                update: None,
            }
        ),
        other => panic!("expected for, got {:?}", other),
    }
}

#[test]
fn test_switch() {
    let statements =
        parse_source("switch x { case 1 { a(); } case 2 { b(); } default { c(); } }");

    match &statements[0].kind {
        NodeKind::SwitchStatement(switch) => {
            let kinds: Vec<NodeType> = switch.cases.iter().map(Node::node_type).collect();
            assert_eq!(
                kinds,
                vec![
                    NodeType::CaseStatement,
                    NodeType::CaseStatement,
                    NodeType::DefaultCaseStatement,
                ]
            );
        }
        other => panic!("expected switch, got {:?}", other),
    }
}

#[test]
fn test_switch_rejects_second_default() {
    let tokens = lex("switch x { default { } default { } }");
    assert!(!parse_stmt(TokenView::new(&tokens)).is_match());
}

#[test]
fn test_simple_statements_need_terminator() {
    for source in ["x = 1", "f(x)", "break", "continue"] {
        let tokens = lex(source);
        assert!(!parse_stmt(TokenView::new(&tokens)).is_match(), "{:?}", source);

        let terminated = lex(&format!("{};", source));
        let outcome = parse_stmt(TokenView::new(&terminated));
        assert_eq!(outcome.consumed, terminated.len());
        assert_eq!(outcome.node.unwrap().token_count(), tokens.len());
    }
}

#[test]
fn test_suite_needs_terminators() {
    let tokens = lex("{ a b; }");
    assert!(parse_suite(TokenView::new(&tokens)).is_none());

    let tokens = lex("{ a; b }");
    assert!(parse_suite(TokenView::new(&tokens)).is_none());
}

#[test]
fn test_block_statement() {
    let statements = parse_source("{ a = 1; { b = 2; } }");

    match &statements[0].kind {
        NodeKind::BlockStatement(block) => {
            assert_eq!(block.suite.len(), 2);
            assert_eq!(block.suite.statements[1].node_type(), NodeType::BlockStatement);
        }
        other => panic!("expected block, got {:?}", other),
    }
}

// PROGRAM

#[test]
fn test_parse_program() {
    let statements = parse_source(";; x = 1;; y = x * 2; print(y);");
    let kinds: Vec<NodeType> = statements.iter().map(Node::node_type).collect();

    assert_eq!(
        kinds,
        vec![NodeType::Assignment, NodeType::Assignment, NodeType::FunctionCall]
    );
}

#[test]
fn test_parse_empty_program() {
    assert!(parse_source("").is_empty());
    assert!(parse_source("// only a comment").is_empty());
}

#[test]
fn test_parse_reports_unexpected_token() {
    let tokens = tokenize("x = ;", Some("test.hlx")).unwrap();
    let error = parse(&tokens, "test.hlx").unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::UnexpectedToken {
            token: "=".to_string()
        }
    );
    assert_eq!(error.get_position().column, 3);
}

#[test]
fn test_parse_reports_unknown_statement_keyword() {
    let tokens = tokenize("let x = 1", Some("test.hlx")).unwrap();
    let error = parse(&tokens, "test.hlx").unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::UnexpectedToken {
            token: "let".to_string()
        }
    );
}

fn parse_error(source: &str) -> crate::errors::errors::Error {
    let tokens = tokenize(source, Some("test.hlx")).unwrap();
    parse(&tokens, "test.hlx").unwrap_err()
}

fn unexpected(token: &str) -> ErrorImpl {
    ErrorImpl::UnexpectedToken {
        token: token.to_string(),
    }
}

#[test]
fn test_parse_reports_missing_terminator() {
    let error = parse_error("x = 1 y = 2;");
    assert_eq!(error.kind(), &unexpected("y"));
    assert_eq!(error.get_position().column, 7);

    let error = parse_error("a b");
    assert_eq!(error.kind(), &unexpected("b"));

    let error = parse_error("break continue;");
    assert_eq!(error.kind(), &unexpected("continue"));
}

#[test]
fn test_parse_reports_missing_terminator_at_eof() {
    let error = parse_error("x = 1; y = 2");
    assert_eq!(error.kind(), &ErrorImpl::UnexpectedEof);
}

#[test]
fn test_parse_reports_missing_terminator_in_suite() {
    let error = parse_error("while x {\n    a = 1;\n    b = 2\n}");
    assert_eq!(error.kind(), &unexpected("}"));
    assert_eq!(error.get_position().line, 4);

    let error = parse_error("if c { d; } else { e f; }");
    assert_eq!(error.kind(), &unexpected("f"));
}

#[test]
fn test_parse_reports_missing_terminator_in_switch() {
    let error = parse_error("switch s { case 1 { a(); } default { b() c(); } }");
    assert_eq!(error.kind(), &unexpected("c"));
}

#[test]
fn test_for_clauses_take_no_extra_terminator() {
    let statements = parse_source("for i = 0; i < 3; i += 1 { f(i); }");
    assert_eq!(statements[0].node_type(), NodeType::ForLoop);
}

#[test]
fn test_plus_minus_after_operand_is_binary() {
    let statements = parse_source("a+-b;");
    assert_eq!(statements.len(), 1);

    let op = binary(&statements[0]);
    assert_eq!(op.op.kind, TokenKind::Add);
    assert_eq!(op.right.node_type(), NodeType::UnaryOp);
}

#[test]
fn test_parse_reports_unbalanced_close() {
    let tokens = tokenize("a )", Some("test.hlx")).unwrap();
    let error = parse(&tokens, "test.hlx").unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::UnexpectedToken {
            token: ")".to_string()
        }
    );
    assert_eq!(error.get_position().column, 3);
}

#[test]
fn test_parse_reports_unexpected_eof() {
    let tokens = tokenize("f(1, 2", Some("test.hlx")).unwrap();
    let error = parse(&tokens, "test.hlx").unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::UnexpectedEof);
    assert_eq!(error.code(), 2002);
}

#[test]
fn test_parse_without_eof_token() {
    let tokens = lex("a; b;");
    let program = parse(&tokens, "test.hlx").unwrap();

    assert_eq!(program.statements.len(), 2);
    assert_eq!(program.file, "test.hlx");
}
