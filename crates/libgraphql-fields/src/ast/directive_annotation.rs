use crate::GraphQLSourceSpan;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Name;
use inherent::inherent;

/// A directive applied at a use site, e.g. `@include(if: $withFriends)`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation<'src> {
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for DirectiveAnnotation<'_> {
    pub fn to_source(&self, source: &str) -> String;

    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }
}
