//! JSON form of a syntax tree, built through the visitor protocol.
//!
//! Every node becomes an object with its `kind`, its absolute token range
//! and the fields of its variant. Child nodes are nested objects, suites
//! are arrays of statements and tokens are written as their lexemes.

use serde_json::{json, Map, Value};

use super::{
    ast::Node,
    expressions::{
        BinaryOp, FunctionCall, Identifier, InlineControlFlow, InlineLambda,
        InlineListComprehension, Literal, ScopeAccess, SuffixOp, UnaryOp,
    },
    statements::{
        Assignment, BlockStatement, BreakStatement, CaseStatement, ContinueStatement,
        DefaultCaseStatement, ElseIfStatement, ElseStatement, ForLoop, ForLoopKind, IfStatement,
        Program, Suite, SwitchStatement, WhileLoop,
    },
    visitor::Visitor,
};

/// Builds the JSON value of the last node it visited.
#[derive(Debug, Default)]
pub struct JsonVisitor {
    value: Value,
}

impl JsonVisitor {
    pub fn new() -> Self {
        JsonVisitor::default()
    }

    pub fn node_to_json(node: &Node) -> Value {
        let mut visitor = JsonVisitor::new();
        node.accept(&mut visitor);
        visitor.value
    }

    pub fn program_to_json(program: &Program) -> Value {
        json!({
            "file": program.file,
            "statements": nodes(&program.statements),
        })
    }

    fn emit(&mut self, node: &Node, fields: Value) {
        let mut object = Map::new();
        object.insert("kind".to_string(), json!(format!("{:?}", node.node_type())));
        object.insert("tokens".to_string(), json!([node.tokens.start, node.tokens.end]));

        if let Value::Object(fields) = fields {
            object.extend(fields);
        }
        self.value = Value::Object(object);
    }
}

fn child(node: &Node) -> Value {
    JsonVisitor::node_to_json(node)
}

fn optional(node: &Option<Box<Node>>) -> Value {
    node.as_deref().map_or(Value::Null, child)
}

fn nodes(nodes: &[Node]) -> Value {
    Value::Array(nodes.iter().map(child).collect())
}

fn suite(suite: &Suite) -> Value {
    nodes(&suite.statements)
}

impl Visitor for JsonVisitor {
    fn visit_literal(&mut self, node: &Node, literal: &Literal) {
        self.emit(
            node,
            json!({
                "value": literal.value.lexeme,
                "literal_type": format!("{:?}", literal.literal_type),
            }),
        );
    }

    fn visit_binary_op(&mut self, node: &Node, op: &BinaryOp) {
        self.emit(
            node,
            json!({
                "op": op.op.lexeme,
                "left": child(&op.left),
                "right": child(&op.right),
            }),
        );
    }

    fn visit_unary_op(&mut self, node: &Node, op: &UnaryOp) {
        self.emit(node, json!({ "op": op.op.lexeme, "operand": child(&op.operand) }));
    }

    fn visit_suffix_op(&mut self, node: &Node, op: &SuffixOp) {
        self.emit(
            node,
            json!({
                "op": op.op.lexeme,
                "operand": child(&op.operand),
                "index": optional(&op.index),
            }),
        );
    }

    fn visit_identifier(&mut self, node: &Node, ident: &Identifier) {
        self.emit(node, json!({ "name": ident.name.lexeme }));
    }

    fn visit_scope_access(&mut self, node: &Node, access: &ScopeAccess) {
        self.emit(
            node,
            json!({
                "access": access.access.to_string(),
                "parent": child(&access.parent),
                "child": access.child.lexeme,
            }),
        );
    }

    fn visit_function_call(&mut self, node: &Node, call: &FunctionCall) {
        let named: Map<String, Value> = call
            .named
            .iter()
            .map(|argument| (argument.name.lexeme.clone(), child(&argument.value)))
            .collect();

        self.emit(
            node,
            json!({
                "callee": child(&call.callee),
                "positional": nodes(&call.positional),
                "named": named,
            }),
        );
    }

    fn visit_inline_control_flow(&mut self, node: &Node, flow: &InlineControlFlow) {
        self.emit(
            node,
            json!({
                "condition": child(&flow.condition),
                "pass": child(&flow.pass),
                "fail": child(&flow.fail),
            }),
        );
    }

    fn visit_inline_lambda(&mut self, node: &Node, lambda: &InlineLambda) {
        let parameters: Vec<&str> = lambda.parameters.iter().map(|p| p.lexeme.as_str()).collect();
        self.emit(node, json!({ "parameters": parameters, "body": child(&lambda.body) }));
    }

    fn visit_inline_list_comprehension(
        &mut self,
        node: &Node,
        comprehension: &InlineListComprehension,
    ) {
        self.emit(
            node,
            json!({
                "element": child(&comprehension.element),
                "binding": comprehension.binding.lexeme,
                "iterable": child(&comprehension.iterable),
                "filter": optional(&comprehension.filter),
            }),
        );
    }

    fn visit_for_loop(&mut self, node: &Node, for_loop: &ForLoop) {
        let header = match &for_loop.loop_kind {
            ForLoopKind::Range { binding, iterable } => json!({
                "style": "range",
                "binding": binding.lexeme,
                "iterable": child(iterable),
            }),
            ForLoopKind::CStyle {
                init,
                condition,
                update,
            } => json!({
                "style": "c",
                "init": optional(init),
                "condition": optional(condition),
                "update": optional(update),
            }),
        };

        self.emit(node, json!({ "header": header, "suite": suite(&for_loop.suite) }));
    }

    fn visit_while_loop(&mut self, node: &Node, while_loop: &WhileLoop) {
        self.emit(
            node,
            json!({
                "condition": child(&while_loop.condition),
                "suite": suite(&while_loop.suite),
            }),
        );
    }

    fn visit_if_statement(&mut self, node: &Node, if_stmt: &IfStatement) {
        self.emit(
            node,
            json!({
                "negated": if_stmt.negated,
                "condition": child(&if_stmt.condition),
                "suite": suite(&if_stmt.suite),
                "alternatives": nodes(&if_stmt.alternatives),
            }),
        );
    }

    fn visit_else_if_statement(&mut self, node: &Node, else_if: &ElseIfStatement) {
        self.emit(
            node,
            json!({
                "condition": child(&else_if.condition),
                "suite": suite(&else_if.suite),
            }),
        );
    }

    fn visit_else_statement(&mut self, node: &Node, else_stmt: &ElseStatement) {
        self.emit(node, json!({ "suite": suite(&else_stmt.suite) }));
    }

    fn visit_continue_statement(&mut self, node: &Node, _stmt: &ContinueStatement) {
        self.emit(node, json!({}));
    }

    fn visit_break_statement(&mut self, node: &Node, _stmt: &BreakStatement) {
        self.emit(node, json!({}));
    }

    fn visit_switch_statement(&mut self, node: &Node, switch: &SwitchStatement) {
        self.emit(
            node,
            json!({
                "subject": child(&switch.subject),
                "cases": nodes(&switch.cases),
            }),
        );
    }

    fn visit_case_statement(&mut self, node: &Node, case: &CaseStatement) {
        self.emit(
            node,
            json!({
                "condition": child(&case.condition),
                "suite": suite(&case.suite),
            }),
        );
    }

    fn visit_default_case_statement(&mut self, node: &Node, default: &DefaultCaseStatement) {
        self.emit(node, json!({ "suite": suite(&default.suite) }));
    }

    fn visit_assignment(&mut self, node: &Node, assignment: &Assignment) {
        self.emit(
            node,
            json!({
                "target": child(&assignment.target),
                "op": assignment.op.lexeme,
                "value": child(&assignment.value),
            }),
        );
    }

    fn visit_block_statement(&mut self, node: &Node, block: &BlockStatement) {
        self.emit(node, json!({ "suite": suite(&block.suite) }));
    }
}
