use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Value;
use inherent::inherent;

/// `name: value` inside a field's or directive's parentheses.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for Argument<'_> {
    pub fn to_source(&self, source: &str) -> String;

    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }
}
