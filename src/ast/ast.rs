use std::ops::Range;

use crate::Span;

use super::{
    expressions::{
        BinaryOp, FunctionCall, Identifier, InlineControlFlow, InlineLambda,
        InlineListComprehension, Literal, ScopeAccess, SuffixOp, UnaryOp,
    },
    statements::{
        Assignment, BlockStatement, BreakStatement, CaseStatement, ContinueStatement,
        DefaultCaseStatement, ElseIfStatement, ElseStatement, ForLoop, ForLoopKind, IfStatement,
        SwitchStatement, WhileLoop,
    },
};

/// Node Types
///
/// The discriminant of every syntax variant. The set is closed: the visitor
/// protocol has exactly one operation per entry.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum NodeType {
    Literal,
    BinaryOp,
    UnaryOp,
    SuffixOp,
    Identifier,
    ScopeAccess,
    FunctionCall,
    InlineControlFlow,
    InlineLambda,
    InlineListComprehension,
    ForLoop,
    WhileLoop,
    IfStatement,
    ElseIfStatement,
    ElseStatement,
    ContinueStatement,
    BreakStatement,
    SwitchStatement,
    CaseStatement,
    DefaultCaseStatement,
    Assignment,
    BlockStatement,
}

impl NodeType {
    pub const ALL: [NodeType; 22] = [
        NodeType::Literal,
        NodeType::BinaryOp,
        NodeType::UnaryOp,
        NodeType::SuffixOp,
        NodeType::Identifier,
        NodeType::ScopeAccess,
        NodeType::FunctionCall,
        NodeType::InlineControlFlow,
        NodeType::InlineLambda,
        NodeType::InlineListComprehension,
        NodeType::ForLoop,
        NodeType::WhileLoop,
        NodeType::IfStatement,
        NodeType::ElseIfStatement,
        NodeType::ElseStatement,
        NodeType::ContinueStatement,
        NodeType::BreakStatement,
        NodeType::SwitchStatement,
        NodeType::CaseStatement,
        NodeType::DefaultCaseStatement,
        NodeType::Assignment,
        NodeType::BlockStatement,
    ];

    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeType::ForLoop
                | NodeType::WhileLoop
                | NodeType::IfStatement
                | NodeType::ElseIfStatement
                | NodeType::ElseStatement
                | NodeType::ContinueStatement
                | NodeType::BreakStatement
                | NodeType::SwitchStatement
                | NodeType::CaseStatement
                | NodeType::DefaultCaseStatement
                | NodeType::Assignment
                | NodeType::BlockStatement
        )
    }
}

/// Variant payloads. Each arm exclusively owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Literal(Literal),
    BinaryOp(BinaryOp),
    UnaryOp(UnaryOp),
    SuffixOp(SuffixOp),
    Identifier(Identifier),
    ScopeAccess(ScopeAccess),
    FunctionCall(FunctionCall),
    InlineControlFlow(InlineControlFlow),
    InlineLambda(InlineLambda),
    InlineListComprehension(InlineListComprehension),
    ForLoop(ForLoop),
    WhileLoop(WhileLoop),
    IfStatement(IfStatement),
    ElseIfStatement(ElseIfStatement),
    ElseStatement(ElseStatement),
    ContinueStatement(ContinueStatement),
    BreakStatement(BreakStatement),
    SwitchStatement(SwitchStatement),
    CaseStatement(CaseStatement),
    DefaultCaseStatement(DefaultCaseStatement),
    Assignment(Assignment),
    BlockStatement(BlockStatement),
}

/// Identity of a node within its tree.
///
/// Every variant that owns a child consumes at least one token of its own,
/// so no two nodes of one tree cover the same token range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub start: usize,
    pub end: usize,
}

/// One syntax-tree node.
///
/// Nodes are built by the attempt-parse routines and never mutated
/// afterwards; passes annotate them through side tables keyed by [`NodeId`].
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    /// Absolute indices of the tokens this node was parsed from.
    pub tokens: Range<usize>,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span, tokens: Range<usize>) -> Self {
        Node { kind, span, tokens }
    }

    pub fn id(&self) -> NodeId {
        NodeId {
            start: self.tokens.start,
            end: self.tokens.end,
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn node_type(&self) -> NodeType {
        match &self.kind {
            NodeKind::Literal(_) => NodeType::Literal,
            NodeKind::BinaryOp(_) => NodeType::BinaryOp,
            NodeKind::UnaryOp(_) => NodeType::UnaryOp,
            NodeKind::SuffixOp(_) => NodeType::SuffixOp,
            NodeKind::Identifier(_) => NodeType::Identifier,
            NodeKind::ScopeAccess(_) => NodeType::ScopeAccess,
            NodeKind::FunctionCall(_) => NodeType::FunctionCall,
            NodeKind::InlineControlFlow(_) => NodeType::InlineControlFlow,
            NodeKind::InlineLambda(_) => NodeType::InlineLambda,
            NodeKind::InlineListComprehension(_) => NodeType::InlineListComprehension,
            NodeKind::ForLoop(_) => NodeType::ForLoop,
            NodeKind::WhileLoop(_) => NodeType::WhileLoop,
            NodeKind::IfStatement(_) => NodeType::IfStatement,
            NodeKind::ElseIfStatement(_) => NodeType::ElseIfStatement,
            NodeKind::ElseStatement(_) => NodeType::ElseStatement,
            NodeKind::ContinueStatement(_) => NodeType::ContinueStatement,
            NodeKind::BreakStatement(_) => NodeType::BreakStatement,
            NodeKind::SwitchStatement(_) => NodeType::SwitchStatement,
            NodeKind::CaseStatement(_) => NodeType::CaseStatement,
            NodeKind::DefaultCaseStatement(_) => NodeType::DefaultCaseStatement,
            NodeKind::Assignment(_) => NodeType::Assignment,
            NodeKind::BlockStatement(_) => NodeType::BlockStatement,
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<&Node> {
        let mut children: Vec<&Node> = vec![];

        match &self.kind {
            NodeKind::Literal(_)
            | NodeKind::Identifier(_)
            | NodeKind::ContinueStatement(_)
            | NodeKind::BreakStatement(_) => {}
            NodeKind::BinaryOp(op) => {
                children.push(&op.left);
                children.push(&op.right);
            }
            NodeKind::UnaryOp(op) => children.push(&op.operand),
            NodeKind::SuffixOp(op) => {
                children.push(&op.operand);
                children.extend(op.index.as_deref());
            }
            NodeKind::ScopeAccess(access) => children.push(&access.parent),
            NodeKind::FunctionCall(call) => {
                children.push(&call.callee);
                children.extend(call.positional.iter());
                children.extend(call.named.iter().map(|arg| &arg.value));
            }
            NodeKind::InlineControlFlow(flow) => {
                children.push(&flow.pass);
                children.push(&flow.condition);
                children.push(&flow.fail);
            }
            NodeKind::InlineLambda(lambda) => children.push(&lambda.body),
            NodeKind::InlineListComprehension(comp) => {
                children.push(&comp.element);
                children.push(&comp.iterable);
                children.extend(comp.filter.as_deref());
            }
            NodeKind::ForLoop(for_loop) => {
                match &for_loop.loop_kind {
                    ForLoopKind::Range { iterable, .. } => children.push(iterable),
                    ForLoopKind::CStyle {
                        init,
                        condition,
                        update,
                    } => {
                        children.extend(init.as_deref());
                        children.extend(condition.as_deref());
                        children.extend(update.as_deref());
                    }
                }
                children.extend(for_loop.suite.iter());
            }
            NodeKind::WhileLoop(while_loop) => {
                children.push(&while_loop.condition);
                children.extend(while_loop.suite.iter());
            }
            NodeKind::IfStatement(if_stmt) => {
                children.push(&if_stmt.condition);
                children.extend(if_stmt.suite.iter());
                children.extend(if_stmt.alternatives.iter());
            }
            NodeKind::ElseIfStatement(else_if) => {
                children.push(&else_if.condition);
                children.extend(else_if.suite.iter());
            }
            NodeKind::ElseStatement(else_stmt) => children.extend(else_stmt.suite.iter()),
            NodeKind::SwitchStatement(switch) => {
                children.push(&switch.subject);
                children.extend(switch.cases.iter());
            }
            NodeKind::CaseStatement(case) => {
                children.push(&case.condition);
                children.extend(case.suite.iter());
            }
            NodeKind::DefaultCaseStatement(default) => children.extend(default.suite.iter()),
            NodeKind::Assignment(assignment) => {
                children.push(&assignment.target);
                children.push(&assignment.value);
            }
            NodeKind::BlockStatement(block) => children.extend(block.suite.iter()),
        }

        children
    }
}
