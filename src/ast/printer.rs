use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::{
    ast::{Node, NodeType},
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

const INDENT: &str = "    ";

/// Reconstructs canonical source text from a tree.
///
/// Operators are written with their table spelling, and every compound
/// operand is parenthesized, so re-parsing the output and printing again
/// yields the same text.
#[derive(Debug, Default)]
pub struct SourcePrinter {
    out: String,
    depth: usize,
}

impl SourcePrinter {
    pub fn new() -> Self {
        SourcePrinter::default()
    }

    pub fn print_program(program: &Program) -> String {
        let mut printer = SourcePrinter::new();
        for statement in program.iter() {
            printer.statement(statement);
        }
        printer.out
    }

    /// A single node, without a trailing `;` or newline.
    pub fn print_node(node: &Node) -> String {
        let mut printer = SourcePrinter::new();
        node.accept(&mut printer);
        printer.out
    }

    fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn token(&mut self, token: &Token) {
        if token.kind.is_marker() {
            self.out.push_str(&token.lexeme);
        } else {
            self.out.push_str(token.kind.spelling());
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }

    fn statement(&mut self, node: &Node) {
        self.indent();
        node.accept(self);

        let needs_terminator = !node.node_type().is_statement()
            || matches!(
                node.node_type(),
                NodeType::Assignment | NodeType::ContinueStatement | NodeType::BreakStatement
            );
        if needs_terminator {
            self.write(";");
        }
        self.write("\n");
    }

    fn suite(&mut self, suite: &Suite) {
        self.write("{\n");
        self.depth += 1;
        for statement in suite.iter() {
            self.statement(statement);
        }
        self.depth -= 1;
        self.indent();
        self.write("}");
    }

    /// Operand position: compound expressions get parentheses.
    fn operand(&mut self, node: &Node) {
        let compound = matches!(
            node.node_type(),
            NodeType::BinaryOp
                | NodeType::UnaryOp
                | NodeType::InlineControlFlow
                | NodeType::InlineLambda
        );

        if compound {
            self.write("(");
            node.accept(self);
            self.write(")");
        } else {
            node.accept(self);
        }
    }
}

impl Visitor for SourcePrinter {
    fn visit_literal(&mut self, _node: &Node, literal: &Literal) {
        self.token(&literal.value);
    }

    fn visit_binary_op(&mut self, _node: &Node, op: &BinaryOp) {
        self.operand(&op.left);
        self.write(" ");
        self.token(&op.op);
        self.write(" ");
        self.operand(&op.right);
    }

    fn visit_unary_op(&mut self, _node: &Node, op: &UnaryOp) {
        self.token(&op.op);
        self.operand(&op.operand);
    }

    fn visit_suffix_op(&mut self, _node: &Node, op: &SuffixOp) {
        self.operand(&op.operand);
        match &op.index {
            Some(index) => {
                self.write("[");
                index.accept(self);
                self.write("]");
            }
            None => self.token(&op.op),
        }
    }

    fn visit_identifier(&mut self, _node: &Node, ident: &Identifier) {
        self.token(&ident.name);
    }

    fn visit_scope_access(&mut self, _node: &Node, access: &ScopeAccess) {
        access.parent.accept(self);
        self.token(&access.connector);
        self.token(&access.child);
    }

    fn visit_function_call(&mut self, _node: &Node, call: &FunctionCall) {
        call.callee.accept(self);
        self.write("(");

        let mut first = true;
        for argument in call.positional.iter() {
            if !first {
                self.write(", ");
            }
            first = false;
            argument.accept(self);
        }
        for argument in call.named.iter() {
            if !first {
                self.write(", ");
            }
            first = false;
            self.token(&argument.name);
            self.write("=");
            argument.value.accept(self);
        }

        self.write(")");
    }

    fn visit_inline_control_flow(&mut self, _node: &Node, flow: &InlineControlFlow) {
        self.operand(&flow.pass);
        self.write(" if ");
        self.operand(&flow.condition);
        self.write(" else ");
        self.operand(&flow.fail);
    }

    fn visit_inline_lambda(&mut self, _node: &Node, lambda: &InlineLambda) {
        self.write("fn (");
        for (index, parameter) in lambda.parameters.iter().enumerate() {
            if index > 0 {
                self.write(", ");
            }
            self.token(parameter);
        }
        self.write("): ");
        lambda.body.accept(self);
    }

    fn visit_inline_list_comprehension(
        &mut self,
        _node: &Node,
        comprehension: &InlineListComprehension,
    ) {
        self.write("[");
        self.operand(&comprehension.element);
        self.write(" for ");
        self.token(&comprehension.binding);
        self.write(" in ");
        self.operand(&comprehension.iterable);
        if let Some(filter) = &comprehension.filter {
            self.write(" if ");
            self.operand(filter);
        }
        self.write("]");
    }

    fn visit_for_loop(&mut self, _node: &Node, for_loop: &ForLoop) {
        self.write("for ");
        match &for_loop.loop_kind {
            ForLoopKind::Range { binding, iterable } => {
                self.token(binding);
                self.write(" in ");
                iterable.accept(self);
            }
            ForLoopKind::CStyle {
                init,
                condition,
                update,
            } => {
                if let Some(init) = init {
                    init.accept(self);
                }
                self.write("; ");
                if let Some(condition) = condition {
                    condition.accept(self);
                }
                self.write("; ");
                if let Some(update) = update {
                    update.accept(self);
                }
            }
        }
        self.write(" ");
        self.suite(&for_loop.suite);
    }

    fn visit_while_loop(&mut self, _node: &Node, while_loop: &WhileLoop) {
        self.write("while ");
        while_loop.condition.accept(self);
        self.write(" ");
        self.suite(&while_loop.suite);
    }

    fn visit_if_statement(&mut self, _node: &Node, if_stmt: &IfStatement) {
        self.write(if if_stmt.negated { "unless " } else { "if " });
        if_stmt.condition.accept(self);
        self.write(" ");
        self.suite(&if_stmt.suite);
        for alternative in if_stmt.alternatives.iter() {
            alternative.accept(self);
        }
    }

    fn visit_else_if_statement(&mut self, _node: &Node, else_if: &ElseIfStatement) {
        self.write(" else if ");
        else_if.condition.accept(self);
        self.write(" ");
        self.suite(&else_if.suite);
    }

    fn visit_else_statement(&mut self, _node: &Node, else_stmt: &ElseStatement) {
        self.write(" else ");
        self.suite(&else_stmt.suite);
    }

    fn visit_continue_statement(&mut self, _node: &Node, _stmt: &ContinueStatement) {
        self.write("continue");
    }

    fn visit_break_statement(&mut self, _node: &Node, _stmt: &BreakStatement) {
        self.write("break");
    }

    fn visit_switch_statement(&mut self, _node: &Node, switch: &SwitchStatement) {
        self.write("switch ");
        switch.subject.accept(self);
        self.write(" {\n");
        self.depth += 1;
        for case in switch.cases.iter() {
            self.indent();
            case.accept(self);
            self.write("\n");
        }
        self.depth -= 1;
        self.indent();
        self.write("}");
    }

    fn visit_case_statement(&mut self, _node: &Node, case: &CaseStatement) {
        self.write("case ");
        case.condition.accept(self);
        self.write(" ");
        self.suite(&case.suite);
    }

    fn visit_default_case_statement(&mut self, _node: &Node, default: &DefaultCaseStatement) {
        self.write("default ");
        self.suite(&default.suite);
    }

    fn visit_assignment(&mut self, _node: &Node, assignment: &Assignment) {
        assignment.target.accept(self);
        self.write(" ");
        self.token(&assignment.op);
        self.write(" ");
        assignment.value.accept(self);
    }

    fn visit_block_statement(&mut self, _node: &Node, block: &BlockStatement) {
        self.suite(&block.suite);
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", SourcePrinter::print_node(self))
    }
}
