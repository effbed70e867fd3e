/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree
///
/// Submodules:
/// - ast: The node type, its variant discriminant and identity
/// - expressions: Payloads of the expression variants
/// - statements: Payloads of the statement variants and `Suite`
/// - visitor: The double-dispatch traversal protocol
/// - side_table: Out-of-band per-node annotations and parent links
/// - printer: A visitor reconstructing source text from a tree
/// - json: A visitor serializing a tree to JSON
pub mod ast;
pub mod expressions;
pub mod json;
pub mod printer;
pub mod side_table;
pub mod statements;
pub mod visitor;

pub use ast::{Node, NodeId, NodeKind, NodeType};
