use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::Name;
use inherent::inherent;
use std::fmt;

/// A variable's declared type: `Episode`, `[Episode]`, `Episode!`,
/// `[Episode!]!`, ...
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation<'src> {
    Named(Name<'src>),
    List {
        inner: Box<TypeAnnotation<'src>>,
        span: GraphQLSourceSpan,
    },
    NonNull {
        inner: Box<TypeAnnotation<'src>>,
        span: GraphQLSourceSpan,
    },
}

impl TypeAnnotation<'_> {
    /// The named type at the core of any list/non-null wrapping.
    pub fn innermost_name(&self) -> &str {
        match self {
            TypeAnnotation::Named(name) => name.as_str(),
            TypeAnnotation::List { inner, .. } | TypeAnnotation::NonNull { inner, .. } => {
                inner.innermost_name()
            },
        }
    }
}

#[inherent]
impl AstNode for TypeAnnotation<'_> {
    pub fn to_source(&self, source: &str) -> String;

    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            TypeAnnotation::Named(name) => name.span,
            TypeAnnotation::List { span, .. } | TypeAnnotation::NonNull { span, .. } => *span,
        }
    }
}

/// Renders the annotation in canonical GraphQL syntax (no whitespace).
impl fmt::Display for TypeAnnotation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeAnnotation::Named(name) => f.write_str(name.as_str()),
            TypeAnnotation::List { inner, .. } => write!(f, "[{inner}]"),
            TypeAnnotation::NonNull { inner, .. } => write!(f, "{inner}!"),
        }
    }
}
