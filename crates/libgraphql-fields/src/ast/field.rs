use crate::GraphQLSourceSpan;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::SelectionSet;
use inherent::inherent;

/// `alias: name(args) @dirs { ... }`.
///
/// See [Fields](https://spec.graphql.org/September2025/#sec-Language.Fields).
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub alias: Option<Name<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
    pub span: GraphQLSourceSpan,
}

impl Field<'_> {
    /// The key this field appears under in a GraphQL response: the alias if
    /// present, otherwise the name.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }
}

#[inherent]
impl AstNode for Field<'_> {
    pub fn to_source(&self, source: &str) -> String;

    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }
}
