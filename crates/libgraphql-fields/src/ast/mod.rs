//! Typed AST for the executable subset of GraphQL that
//! [`GraphQLParser`](crate::GraphQLParser) accepts.
//!
//! Every node type is generic over the `'src` lifetime of the source text:
//! names and literal text borrow from it through `Cow<'src, str>`. Every
//! node also carries the [`GraphQLSourceSpan`](crate::GraphQLSourceSpan) it
//! was parsed from, which [`AstNode::to_source`] uses to slice the original
//! text back out.
//!
//! ```rust
//! use libgraphql_fields::GraphQLParser;
//! use libgraphql_fields::ast::Definition;
//!
//! let source = "query Hero { hero { name } }";
//! let doc = GraphQLParser::new(source).parse_document().unwrap();
//! let Definition::Operation(op) = &doc.definitions[0] else { panic!() };
//! assert_eq!(op.name.as_ref().map(|n| n.as_str()), Some("Hero"));
//! assert_eq!(op.selection_set.to_source(source), "{ hero { name } }");
//! ```

mod argument;
mod ast_node;
mod directive_annotation;
mod document;
mod field;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod name;
mod operation_definition;
mod selection;
mod selection_set;
mod type_annotation;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use ast_node::AstNode;
pub use directive_annotation::DirectiveAnnotation;
pub use document::Definition;
pub use document::Document;
pub use field::Field;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use name::Name;
pub use operation_definition::OperationDefinition;
pub use operation_definition::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use type_annotation::TypeAnnotation;
pub use value::ObjectField;
pub use value::Value;
pub use variable_definition::VariableDefinition;

#[cfg(test)]
mod tests;
