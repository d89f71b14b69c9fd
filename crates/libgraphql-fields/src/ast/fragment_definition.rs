use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::SelectionSet;
use inherent::inherent;

/// `fragment Name on Type @dirs { ... }`.
///
/// Fragment definitions are parsed so that documents carrying them are
/// accepted, but spreads are never resolved against them.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub name: Name<'src>,
    pub type_condition: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for FragmentDefinition<'_> {
    pub fn to_source(&self, source: &str) -> String;

    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }
}
