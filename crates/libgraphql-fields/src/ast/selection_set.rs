use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::Selection;
use inherent::inherent;

/// `{ selection+ }`. The parser never produces an empty one.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'src> {
    pub selections: Vec<Selection<'src>>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for SelectionSet<'_> {
    pub fn to_source(&self, source: &str) -> String;

    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }
}
