use super::{
    ast::{Node, NodeKind},
    expressions::{
        BinaryOp, FunctionCall, Identifier, InlineControlFlow, InlineLambda,
        InlineListComprehension, Literal, ScopeAccess, SuffixOp, UnaryOp,
    },
    statements::{
        Assignment, BlockStatement, BreakStatement, CaseStatement, ContinueStatement,
        DefaultCaseStatement, ElseIfStatement, ElseStatement, ForLoop, IfStatement, Program,
        SwitchStatement, WhileLoop,
    },
};

/// One operation per node variant.
///
/// Every method defaults to doing nothing, so a pass only overrides the
/// variants it cares about. Methods receive the whole node alongside its
/// payload so a pass can key side tables by [`Node::id`].
pub trait Visitor {
    fn visit_literal(&mut self, _node: &Node, _literal: &Literal) {}
    fn visit_binary_op(&mut self, _node: &Node, _op: &BinaryOp) {}
    fn visit_unary_op(&mut self, _node: &Node, _op: &UnaryOp) {}
    fn visit_suffix_op(&mut self, _node: &Node, _op: &SuffixOp) {}
    fn visit_identifier(&mut self, _node: &Node, _ident: &Identifier) {}
    fn visit_scope_access(&mut self, _node: &Node, _access: &ScopeAccess) {}
    fn visit_function_call(&mut self, _node: &Node, _call: &FunctionCall) {}
    fn visit_inline_control_flow(&mut self, _node: &Node, _flow: &InlineControlFlow) {}
    fn visit_inline_lambda(&mut self, _node: &Node, _lambda: &InlineLambda) {}
    fn visit_inline_list_comprehension(
        &mut self,
        _node: &Node,
        _comprehension: &InlineListComprehension,
    ) {
    }
    fn visit_for_loop(&mut self, _node: &Node, _for_loop: &ForLoop) {}
    fn visit_while_loop(&mut self, _node: &Node, _while_loop: &WhileLoop) {}
    fn visit_if_statement(&mut self, _node: &Node, _if_stmt: &IfStatement) {}
    fn visit_else_if_statement(&mut self, _node: &Node, _else_if: &ElseIfStatement) {}
    fn visit_else_statement(&mut self, _node: &Node, _else_stmt: &ElseStatement) {}
    fn visit_continue_statement(&mut self, _node: &Node, _stmt: &ContinueStatement) {}
    fn visit_break_statement(&mut self, _node: &Node, _stmt: &BreakStatement) {}
    fn visit_switch_statement(&mut self, _node: &Node, _switch: &SwitchStatement) {}
    fn visit_case_statement(&mut self, _node: &Node, _case: &CaseStatement) {}
    fn visit_default_case_statement(&mut self, _node: &Node, _default: &DefaultCaseStatement) {}
    fn visit_assignment(&mut self, _node: &Node, _assignment: &Assignment) {}
    fn visit_block_statement(&mut self, _node: &Node, _block: &BlockStatement) {}
}

impl Node {
    /// Calls exactly one visitor method, the one matching this node's variant.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match &self.kind {
            NodeKind::Literal(literal) => visitor.visit_literal(self, literal),
            NodeKind::BinaryOp(op) => visitor.visit_binary_op(self, op),
            NodeKind::UnaryOp(op) => visitor.visit_unary_op(self, op),
            NodeKind::SuffixOp(op) => visitor.visit_suffix_op(self, op),
            NodeKind::Identifier(ident) => visitor.visit_identifier(self, ident),
            NodeKind::ScopeAccess(access) => visitor.visit_scope_access(self, access),
            NodeKind::FunctionCall(call) => visitor.visit_function_call(self, call),
            NodeKind::InlineControlFlow(flow) => visitor.visit_inline_control_flow(self, flow),
            NodeKind::InlineLambda(lambda) => visitor.visit_inline_lambda(self, lambda),
            NodeKind::InlineListComprehension(comp) => {
                visitor.visit_inline_list_comprehension(self, comp)
            }
            NodeKind::ForLoop(for_loop) => visitor.visit_for_loop(self, for_loop),
            NodeKind::WhileLoop(while_loop) => visitor.visit_while_loop(self, while_loop),
            NodeKind::IfStatement(if_stmt) => visitor.visit_if_statement(self, if_stmt),
            NodeKind::ElseIfStatement(else_if) => visitor.visit_else_if_statement(self, else_if),
            NodeKind::ElseStatement(else_stmt) => visitor.visit_else_statement(self, else_stmt),
            NodeKind::ContinueStatement(stmt) => visitor.visit_continue_statement(self, stmt),
            NodeKind::BreakStatement(stmt) => visitor.visit_break_statement(self, stmt),
            NodeKind::SwitchStatement(switch) => visitor.visit_switch_statement(self, switch),
            NodeKind::CaseStatement(case) => visitor.visit_case_statement(self, case),
            NodeKind::DefaultCaseStatement(default) => {
                visitor.visit_default_case_statement(self, default)
            }
            NodeKind::Assignment(assignment) => visitor.visit_assignment(self, assignment),
            NodeKind::BlockStatement(block) => visitor.visit_block_statement(self, block),
        }
    }
}

pub fn accept<V: Visitor + ?Sized>(node: &Node, visitor: &mut V) {
    node.accept(visitor)
}

/// Pre-order traversal: `node` first, then each child subtree in source order.
pub fn walk<V: Visitor + ?Sized>(node: &Node, visitor: &mut V) {
    node.accept(visitor);
    for child in node.children() {
        walk(child, visitor);
    }
}

pub fn walk_program<V: Visitor + ?Sized>(program: &Program, visitor: &mut V) {
    for statement in program.iter() {
        walk(statement, visitor);
    }
}
