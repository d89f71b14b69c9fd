use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::Name;
use inherent::inherent;
use std::borrow::Cow;

/// An input value literal.
///
/// Values are kept structurally and never evaluated: `Int` and `Float`
/// keep their raw source text, `String` its unescaped contents.
///
/// See [Input Values](https://spec.graphql.org/September2025/#sec-Input-Values).
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    /// `$name`; `name` excludes the `$`.
    Variable {
        name: Name<'src>,
        span: GraphQLSourceSpan,
    },
    Int {
        raw: Cow<'src, str>,
        span: GraphQLSourceSpan,
    },
    Float {
        raw: Cow<'src, str>,
        span: GraphQLSourceSpan,
    },
    String {
        value: Cow<'src, str>,
        is_block: bool,
        span: GraphQLSourceSpan,
    },
    Boolean {
        value: bool,
        span: GraphQLSourceSpan,
    },
    Null {
        span: GraphQLSourceSpan,
    },
    /// A bare name in value position, e.g. `EMPIRE`.
    Enum(Name<'src>),
    List {
        values: Vec<Value<'src>>,
        span: GraphQLSourceSpan,
    },
    Object {
        fields: Vec<ObjectField<'src>>,
        span: GraphQLSourceSpan,
    },
}

impl Value<'_> {
    /// Whether this value or any value nested in it is a variable reference.
    pub fn contains_variable(&self) -> bool {
        match self {
            Value::Variable { .. } => true,
            Value::List { values, .. } => values.iter().any(Value::contains_variable),
            Value::Object { fields, .. } => {
                fields.iter().any(|field| field.value.contains_variable())
            },
            Value::Int { .. }
            | Value::Float { .. }
            | Value::String { .. }
            | Value::Boolean { .. }
            | Value::Null { .. }
            | Value::Enum(_) => false,
        }
    }
}

#[inherent]
impl AstNode for Value<'_> {
    pub fn to_source(&self, source: &str) -> String;

    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Value::Enum(name) => name.span,
            Value::Variable { span, .. }
            | Value::Int { span, .. }
            | Value::Float { span, .. }
            | Value::String { span, .. }
            | Value::Boolean { span, .. }
            | Value::Null { span }
            | Value::List { span, .. }
            | Value::Object { span, .. } => *span,
        }
    }
}

/// `name: value` inside an object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for ObjectField<'_> {
    pub fn to_source(&self, source: &str) -> String;

    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }
}
