use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use inherent::inherent;
use std::borrow::Cow;

/// A GraphQL [name](https://spec.graphql.org/September2025/#sec-Names).
///
/// Used for field names, aliases, argument names, directive names, type
/// names, variable names (without the `$`), fragment names and enum values.
#[derive(Clone, Debug, PartialEq)]
pub struct Name<'src> {
    pub value: Cow<'src, str>,
    pub span: GraphQLSourceSpan,
}

impl<'src> Name<'src> {
    pub fn new(value: impl Into<Cow<'src, str>>, span: GraphQLSourceSpan) -> Self {
        Self {
            value: value.into(),
            span,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[inherent]
impl AstNode for Name<'_> {
    pub fn to_source(&self, source: &str) -> String;

    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }
}
