use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use inherent::inherent;

/// A parsed executable document: one or more definitions in source order.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,
    pub span: GraphQLSourceSpan,
}

impl<'src> Document<'src> {
    /// The first operation definition in document order, if any.
    pub fn first_operation(&self) -> Option<&OperationDefinition<'src>> {
        self.definitions.iter().find_map(|def| match def {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        })
    }

    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition<'src>> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition<'src>> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(_) => None,
            Definition::Fragment(frag) => Some(frag),
        })
    }
}

#[inherent]
impl AstNode for Document<'_> {
    pub fn to_source(&self, source: &str) -> String;

    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }
}

#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    Operation(OperationDefinition<'src>),
    Fragment(FragmentDefinition<'src>),
}

#[inherent]
impl AstNode for Definition<'_> {
    pub fn to_source(&self, source: &str) -> String;

    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Definition::Operation(op) => op.span,
            Definition::Fragment(frag) => frag.span,
        }
    }
}
