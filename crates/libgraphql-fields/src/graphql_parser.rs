//! Recursive descent parser for GraphQL query documents.
//!
//! [`GraphQLParser`] is generic over any
//! [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource). It accepts
//! the executable subset of GraphQL (operations and fragment definitions) and
//! stops at the first problem it finds: a lexer `Error` token surfaces as
//! [`GraphQLParseError::Lex`], a grammar violation as
//! [`GraphQLParseError::Syntax`]. No partial document is ever returned.
//!
//! Every grammar rule has a `parse_*` method. Methods that descend into a
//! nested construct (selection sets, values, list types) go through
//! `enter_recursion()`/`exit_recursion()` so adversarial input such as
//! `[[[[[[...` cannot overflow the stack.

use crate::GraphQLLexError;
use crate::GraphQLParseError;
use crate::GraphQLSourceSpan;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;
use crate::GraphQLTokenStream;
use crate::SourcePosition;
use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use smallvec::SmallVec;

const TYPE_SYSTEM_KEYWORDS: &[&str] = &[
    "directive",
    "enum",
    "extend",
    "input",
    "interface",
    "scalar",
    "schema",
    "type",
    "union",
];

const DEFINITION_STARTS: &[&str] = &["query", "mutation", "subscription", "fragment", "{"];

type ParseResult<T> = Result<T, GraphQLParseError>;

// =============================================================================
// Delimiter tracking
// =============================================================================

/// What an open delimiter belongs to, for "unclosed delimiter" notes.
#[derive(Debug, Clone, Copy)]
enum DelimiterContext {
    SelectionSet,
    FieldArguments,
    DirectiveArguments,
    VariableDefinitions,
    ListType,
    ListValue,
    ObjectValue,
}

impl DelimiterContext {
    fn description(&self) -> &'static str {
        match self {
            DelimiterContext::SelectionSet => "selection set",
            DelimiterContext::FieldArguments => "field arguments",
            DelimiterContext::DirectiveArguments => "directive arguments",
            DelimiterContext::VariableDefinitions => "variable definitions",
            DelimiterContext::ListType => "list type annotation",
            DelimiterContext::ListValue => "list value",
            DelimiterContext::ObjectValue => "object value",
        }
    }

    fn open_str(&self) -> &'static str {
        match self {
            DelimiterContext::SelectionSet | DelimiterContext::ObjectValue => "{",
            DelimiterContext::FieldArguments
            | DelimiterContext::DirectiveArguments
            | DelimiterContext::VariableDefinitions => "(",
            DelimiterContext::ListType | DelimiterContext::ListValue => "[",
        }
    }
}

#[derive(Debug, Clone)]
struct OpenDelimiter {
    span: GraphQLSourceSpan,
    context: DelimiterContext,
}

/// Where a value is being parsed. Variables are only allowed in
/// `AllowVariables`.
#[derive(Clone, Copy, Debug)]
enum ConstContext {
    AllowVariables,
    VariableDefaultValue,
    VariableDirective,
}

impl ConstContext {
    fn description(&self) -> &'static str {
        match self {
            ConstContext::AllowVariables => "this position",
            ConstContext::VariableDefaultValue => "variable default values",
            ConstContext::VariableDirective => "directives on variable definitions",
        }
    }
}

/// What the parser found where it wanted something else. Extracted from a
/// peeked token so the borrow on the token stream ends before the error is
/// built.
enum Found {
    EndOfInput,
    LexError(GraphQLLexError),
    Token {
        span: GraphQLSourceSpan,
        display: String,
    },
}

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for GraphQL query documents.
///
/// ```
/// use libgraphql_fields::GraphQLParser;
/// use libgraphql_fields::ast::Definition;
///
/// let doc = GraphQLParser::new("{ hero { name } }").parse_document().unwrap();
/// assert!(matches!(&doc.definitions[0], Definition::Operation(op) if op.is_shorthand));
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_stream: GraphQLTokenStream<'src, TTokenSource>,

    /// Delimiters opened but not yet closed, innermost last. Consulted when
    /// the input ends early.
    delimiter_stack: SmallVec<[OpenDelimiter; 8]>,

    /// Shared depth counter for selection sets, values and type annotations.
    recursion_depth: usize,

    /// End of the most recently consumed token. Anchors end-of-input errors
    /// and the end of node spans.
    last_end_position: Option<SourcePosition>,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a parser over `source`, lexing it with
    /// [`StrGraphQLTokenSource`].
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source.as_ref()))
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Maximum nesting depth of selection sets, values and list types
    /// combined.
    pub const MAX_RECURSION_DEPTH: usize = 64;

    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            delimiter_stack: SmallVec::new(),
            recursion_depth: 0,
            last_end_position: None,
        }
    }

    /// Parses a whole document: one or more operation or fragment
    /// definitions followed by end of input.
    pub fn parse_document(mut self) -> ParseResult<ast::Document<'src>> {
        let mut definitions = Vec::new();
        while !self.token_stream.is_at_end() {
            definitions.push(self.parse_definition()?);
        }

        let Some(first) = definitions.first() else {
            return Err(self.unexpected(DEFINITION_STARTS));
        };
        let span = self.make_span(first.span());
        Ok(ast::Document { definitions, span })
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn consume_token(&mut self) -> Option<GraphQLToken<'src>> {
        let token = self.token_stream.consume();
        if let Some(t) = &token {
            self.last_end_position = Some(t.span.end_exclusive);
        }
        token
    }

    /// Consumes the next token, which the caller has already peeked at.
    fn bump(&mut self) -> ParseResult<GraphQLToken<'src>> {
        match self.consume_token() {
            Some(token) => Ok(token),
            None => Err(self.unexpected(&[])),
        }
    }

    fn peek_is(&mut self, kind: &GraphQLTokenKind) -> bool {
        self.token_stream
            .peek()
            .is_some_and(|token| token.kind.same_kind_as(kind))
    }

    /// `true` if the next token is a `Name` spelled `keyword`. Never matches
    /// `true`/`false`/`null`.
    fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        self.token_stream.peek().is_some_and(
            |token| matches!(&token.kind, GraphQLTokenKind::Name(name) if name == keyword),
        )
    }

    /// `true` if the next token can be read as a name (including
    /// `true`/`false`/`null`).
    fn peek_is_name(&mut self) -> bool {
        self.token_stream
            .peek()
            .is_some_and(|token| token.kind.as_name().is_some())
    }

    fn peek_span(&mut self) -> GraphQLSourceSpan {
        match self.token_stream.peek() {
            Some(token) => token.span,
            None => self.eof_span(),
        }
    }

    fn expect(&mut self, kind: &GraphQLTokenKind) -> ParseResult<GraphQLToken<'src>> {
        if self.peek_is(kind) {
            return self.bump();
        }
        let expected = kind.as_punctuator_str().unwrap_or("token");
        Err(self.unexpected(&[expected]))
    }

    /// Expects a name. `true`, `false` and `null` are accepted: they match
    /// the Name grammar even though the lexer gives them their own kinds.
    fn expect_name(&mut self) -> ParseResult<ast::Name<'src>> {
        if !self.peek_is_name() {
            return Err(self.unexpected(&["name"]));
        }
        let token = self.bump()?;
        let value = match token.kind {
            GraphQLTokenKind::Name(value) => value,
            other => other.as_name().unwrap_or_default().to_string().into(),
        };
        Ok(ast::Name::new(value, token.span))
    }

    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<GraphQLSourceSpan> {
        if !self.peek_is_keyword(keyword) {
            return Err(self.unexpected(&[keyword]));
        }
        Ok(self.bump()?.span)
    }

    /// A zero-width span at the end of the last consumed token.
    fn eof_span(&self) -> GraphQLSourceSpan {
        GraphQLSourceSpan::empty_at(self.last_end_position.unwrap_or(SourcePosition::START))
    }

    /// From the start of `start` to the end of the last consumed token.
    fn make_span(&self, start: GraphQLSourceSpan) -> GraphQLSourceSpan {
        let end = self.last_end_position.unwrap_or(start.end_exclusive);
        GraphQLSourceSpan::new(start.start_inclusive, end)
    }

    fn push_delimiter(&mut self, span: GraphQLSourceSpan, context: DelimiterContext) {
        self.delimiter_stack.push(OpenDelimiter { span, context });
    }

    fn pop_delimiter(&mut self) {
        self.delimiter_stack.pop();
    }

    // =========================================================================
    // Errors
    // =========================================================================

    fn peek_found(&mut self) -> Found {
        match self.token_stream.peek() {
            None => Found::EndOfInput,
            Some(token) => match &token.kind {
                GraphQLTokenKind::Eof => Found::EndOfInput,
                GraphQLTokenKind::Error { message, error_notes } => Found::LexError(
                    GraphQLLexError::new(message.clone(), token.span, error_notes.clone()),
                ),
                other => Found::Token {
                    span: token.span,
                    display: other.to_string(),
                },
            },
        }
    }

    /// Builds the error for "the next token is not one of `expected`".
    ///
    /// A lexer error token is reported as the lex error itself. Running out
    /// of input inside an open delimiter is reported as an unclosed
    /// delimiter.
    fn unexpected(&mut self, expected: &[&str]) -> GraphQLParseError {
        let expected_owned: Vec<String> = expected.iter().map(|e| e.to_string()).collect();
        match self.peek_found() {
            Found::LexError(err) => err.into(),
            Found::Token { span, display } => GraphQLSyntaxError::new(
                format!("expected {}, found `{display}`", describe_expected(expected)),
                span,
                GraphQLSyntaxErrorKind::UnexpectedToken {
                    expected: expected_owned,
                    found: display,
                },
            )
            .into(),
            Found::EndOfInput => match self.delimiter_stack.last() {
                Some(open) => {
                    let delimiter = open.context.open_str();
                    GraphQLSyntaxError::new(
                        format!("unclosed `{delimiter}`"),
                        self.eof_span(),
                        GraphQLSyntaxErrorKind::UnclosedDelimiter {
                            delimiter: delimiter.to_string(),
                        },
                    )
                    .with_note_at(
                        format!("opening `{delimiter}` in {} here", open.context.description()),
                        open.span,
                    )
                    .into()
                },
                None => GraphQLSyntaxError::new(
                    format!("expected {}, found end of input", describe_expected(expected)),
                    self.eof_span(),
                    GraphQLSyntaxErrorKind::UnexpectedEof {
                        expected: expected_owned,
                    },
                )
                .into(),
            },
        }
    }

    fn empty_construct(
        &self,
        message: &str,
        construct: &str,
        span: GraphQLSourceSpan,
    ) -> GraphQLParseError {
        GraphQLSyntaxError::new(
            message,
            span,
            GraphQLSyntaxErrorKind::InvalidEmptyConstruct {
                construct: construct.to_string(),
            },
        )
        .into()
    }

    fn enter_recursion(&mut self) -> ParseResult<()> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            let span = self.peek_span();
            return Err(GraphQLSyntaxError::new(
                "maximum nesting depth exceeded",
                span,
                GraphQLSyntaxErrorKind::MaxDepthExceeded,
            )
            .with_help(format!(
                "selection sets, values and list types may nest at most {} levels deep",
                Self::MAX_RECURSION_DEPTH,
            ))
            .into());
        }
        self.recursion_depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_definition(&mut self) -> ParseResult<ast::Definition<'src>> {
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)
            || self.peek_is_keyword("query")
            || self.peek_is_keyword("mutation")
            || self.peek_is_keyword("subscription")
        {
            return Ok(ast::Definition::Operation(self.parse_operation_definition()?));
        }
        if self.peek_is_keyword("fragment") {
            return Ok(ast::Definition::Fragment(self.parse_fragment_definition()?));
        }

        if let Some(keyword) = self.peek_type_system_keyword(0) {
            return Err(self.unsupported_definition(keyword));
        }
        // A description string in front of a type system definition.
        let starts_with_string = self
            .token_stream
            .peek()
            .is_some_and(|token| matches!(token.kind, GraphQLTokenKind::StringValue { .. }));
        if starts_with_string {
            if let Some(keyword) = self.peek_type_system_keyword(1) {
                return Err(self.unsupported_definition(keyword));
            }
        }

        Err(self.unexpected(DEFINITION_STARTS))
    }

    fn peek_type_system_keyword(&mut self, n: usize) -> Option<&'static str> {
        let token = self.token_stream.peek_nth(n)?;
        let GraphQLTokenKind::Name(name) = &token.kind else {
            return None;
        };
        TYPE_SYSTEM_KEYWORDS
            .iter()
            .copied()
            .find(|keyword| name == keyword)
    }

    fn unsupported_definition(&mut self, keyword: &str) -> GraphQLParseError {
        GraphQLSyntaxError::new(
            format!("`{keyword}` definitions are not allowed in a query document"),
            self.peek_span(),
            GraphQLSyntaxErrorKind::UnsupportedDefinition {
                keyword: keyword.to_string(),
            },
        )
        .with_help("only operations and fragment definitions can be read")
        .into()
    }

    /// `OperationType Name? VariableDefinitions? Directives? SelectionSet`
    /// or a bare `SelectionSet`.
    fn parse_operation_definition(&mut self) -> ParseResult<ast::OperationDefinition<'src>> {
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::OperationDefinition {
                kind: ast::OperationKind::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                span: selection_set.span,
                selection_set,
                is_shorthand: true,
            });
        }

        let kind = self
            .token_stream
            .peek()
            .and_then(|token| match &token.kind {
                GraphQLTokenKind::Name(name) => ast::OperationKind::from_keyword(name),
                _ => None,
            });
        let Some(kind) = kind else {
            return Err(self.unexpected(&["query", "mutation", "subscription"]));
        };
        let keyword_span = self.bump()?.span;

        let name = if self.peek_is_name() {
            Some(self.expect_name()?)
        } else {
            None
        };

        let variable_definitions = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_variable_definitions()?
        } else {
            Vec::new()
        };

        let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            kind,
            name,
            variable_definitions,
            directives,
            selection_set,
            is_shorthand: false,
            span: self.make_span(keyword_span),
        })
    }

    /// `fragment Name on Type Directives? SelectionSet`
    fn parse_fragment_definition(&mut self) -> ParseResult<ast::FragmentDefinition<'src>> {
        let keyword_span = self.expect_keyword("fragment")?;

        let name = self.expect_name()?;
        if name.value == "on" {
            return Err(GraphQLSyntaxError::new(
                "fragment name cannot be `on`",
                name.span,
                GraphQLSyntaxErrorKind::ReservedName {
                    name: "on".to_string(),
                },
            )
            .with_spec("https://spec.graphql.org/September2025/#sec-Language.Fragments")
            .into());
        }

        self.expect_keyword("on")?;
        let type_condition = self.expect_name()?;
        let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            span: self.make_span(keyword_span),
        })
    }

    // =========================================================================
    // Variable definitions and type annotations
    // =========================================================================

    fn parse_variable_definitions(&mut self) -> ParseResult<Vec<ast::VariableDefinition<'src>>> {
        let open = self.expect(&GraphQLTokenKind::ParenOpen)?;
        if self.peek_is(&GraphQLTokenKind::ParenClose) {
            self.bump()?;
            return Err(self.empty_construct(
                "variable definitions cannot be empty; omit the parentheses instead",
                "variable definitions",
                self.make_span(open.span),
            ));
        }
        self.push_delimiter(open.span, DelimiterContext::VariableDefinitions);

        let mut definitions = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::ParenClose) {
            definitions.push(self.parse_variable_definition()?);
        }

        self.expect(&GraphQLTokenKind::ParenClose)?;
        self.pop_delimiter();
        Ok(definitions)
    }

    /// `$name: Type (= ConstValue)? Directives[Const]?`
    fn parse_variable_definition(&mut self) -> ParseResult<ast::VariableDefinition<'src>> {
        let dollar = self.expect(&GraphQLTokenKind::Dollar)?;
        let variable = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type_annotation()?;

        let default_value = if self.peek_is(&GraphQLTokenKind::Equals) {
            self.bump()?;
            Some(self.parse_value(ConstContext::VariableDefaultValue)?)
        } else {
            None
        };

        let directives = self.parse_directive_annotations(ConstContext::VariableDirective)?;

        Ok(ast::VariableDefinition {
            variable,
            var_type,
            default_value,
            directives,
            span: self.make_span(dollar.span),
        })
    }

    fn parse_type_annotation(&mut self) -> ParseResult<ast::TypeAnnotation<'src>> {
        self.enter_recursion()?;
        let result = self.parse_type_annotation_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_annotation_impl(&mut self) -> ParseResult<ast::TypeAnnotation<'src>> {
        let base = if self.peek_is(&GraphQLTokenKind::SquareBracketOpen) {
            let open = self.bump()?;
            self.push_delimiter(open.span, DelimiterContext::ListType);
            let inner = self.parse_type_annotation()?;
            self.expect(&GraphQLTokenKind::SquareBracketClose)?;
            self.pop_delimiter();
            ast::TypeAnnotation::List {
                inner: Box::new(inner),
                span: self.make_span(open.span),
            }
        } else if self.peek_is_name() {
            ast::TypeAnnotation::Named(self.expect_name()?)
        } else {
            return Err(self.unexpected(&["name", "["]));
        };

        if self.peek_is(&GraphQLTokenKind::Bang) {
            self.bump()?;
            let span = self.make_span(base.span());
            return Ok(ast::TypeAnnotation::NonNull {
                inner: Box::new(base),
                span,
            });
        }
        Ok(base)
    }

    // =========================================================================
    // Directives and arguments
    // =========================================================================

    fn parse_directive_annotations(
        &mut self,
        context: ConstContext,
    ) -> ParseResult<Vec<ast::DirectiveAnnotation<'src>>> {
        let mut directives = Vec::new();
        while self.peek_is(&GraphQLTokenKind::At) {
            let at = self.bump()?;
            let name = self.expect_name()?;
            let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
                self.parse_arguments(DelimiterContext::DirectiveArguments, context)?
            } else {
                Vec::new()
            };
            directives.push(ast::DirectiveAnnotation {
                name,
                arguments,
                span: self.make_span(at.span),
            });
        }
        Ok(directives)
    }

    /// `( (Name : Value)+ )`
    fn parse_arguments(
        &mut self,
        delimiter_context: DelimiterContext,
        const_context: ConstContext,
    ) -> ParseResult<Vec<ast::Argument<'src>>> {
        let open = self.expect(&GraphQLTokenKind::ParenOpen)?;
        if self.peek_is(&GraphQLTokenKind::ParenClose) {
            self.bump()?;
            return Err(self.empty_construct(
                "argument list cannot be empty; omit the parentheses instead",
                "argument list",
                self.make_span(open.span),
            ));
        }
        self.push_delimiter(open.span, delimiter_context);

        let mut arguments = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::ParenClose) {
            let name = self.expect_name()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let value = self.parse_value(const_context)?;
            arguments.push(ast::Argument {
                span: self.make_span(name.span),
                name,
                value,
            });
        }

        self.expect(&GraphQLTokenKind::ParenClose)?;
        self.pop_delimiter();
        Ok(arguments)
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value(&mut self, context: ConstContext) -> ParseResult<ast::Value<'src>> {
        self.enter_recursion()?;
        let result = self.parse_value_impl(context);
        self.exit_recursion();
        result
    }

    fn parse_value_impl(&mut self, context: ConstContext) -> ParseResult<ast::Value<'src>> {
        if self.peek_is(&GraphQLTokenKind::SquareBracketOpen) {
            return self.parse_list_value(context);
        }
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            return self.parse_object_value(context);
        }
        if self.peek_is(&GraphQLTokenKind::Dollar) {
            if !matches!(context, ConstContext::AllowVariables) {
                let span = self.peek_span();
                return Err(GraphQLSyntaxError::new(
                    format!("variables are not allowed in {}", context.description()),
                    span,
                    GraphQLSyntaxErrorKind::UnexpectedToken {
                        expected: vec!["constant value".to_string()],
                        found: "$".to_string(),
                    },
                )
                .into());
            }
            let dollar = self.bump()?;
            let name = self.expect_name()?;
            return Ok(ast::Value::Variable {
                name,
                span: self.make_span(dollar.span),
            });
        }

        let is_literal = self.token_stream.peek().is_some_and(|token| {
            token.kind.is_scalar_literal() || matches!(token.kind, GraphQLTokenKind::Name(_))
        });
        if !is_literal {
            return Err(self.unexpected(&["value"]));
        }

        let token = self.bump()?;
        let span = token.span;
        Ok(match token.kind {
            GraphQLTokenKind::IntValue(raw) => ast::Value::Int { raw, span },
            GraphQLTokenKind::FloatValue(raw) => ast::Value::Float { raw, span },
            GraphQLTokenKind::StringValue { value, is_block } => ast::Value::String {
                value,
                is_block,
                span,
            },
            GraphQLTokenKind::True => ast::Value::Boolean { value: true, span },
            GraphQLTokenKind::False => ast::Value::Boolean { value: false, span },
            GraphQLTokenKind::Null => ast::Value::Null { span },
            GraphQLTokenKind::Name(name) => ast::Value::Enum(ast::Name::new(name, span)),
            _ => unreachable!("checked by is_literal above"),
        })
    }

    fn parse_list_value(&mut self, context: ConstContext) -> ParseResult<ast::Value<'src>> {
        let open = self.expect(&GraphQLTokenKind::SquareBracketOpen)?;
        self.push_delimiter(open.span, DelimiterContext::ListValue);

        let mut values = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::SquareBracketClose) {
            values.push(self.parse_value(context)?);
        }

        self.expect(&GraphQLTokenKind::SquareBracketClose)?;
        self.pop_delimiter();
        Ok(ast::Value::List {
            values,
            span: self.make_span(open.span),
        })
    }

    fn parse_object_value(&mut self, context: ConstContext) -> ParseResult<ast::Value<'src>> {
        let open = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        self.push_delimiter(open.span, DelimiterContext::ObjectValue);

        let mut fields = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
            let name = self.expect_name()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let value = self.parse_value(context)?;
            fields.push(ast::ObjectField {
                span: self.make_span(name.span),
                name,
                value,
            });
        }

        self.expect(&GraphQLTokenKind::CurlyBraceClose)?;
        self.pop_delimiter();
        Ok(ast::Value::Object {
            fields,
            span: self.make_span(open.span),
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> ParseResult<ast::SelectionSet<'src>> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self) -> ParseResult<ast::SelectionSet<'src>> {
        let open = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
            self.bump()?;
            return Err(self.empty_construct(
                "selection set cannot be empty",
                "selection set",
                self.make_span(open.span),
            ));
        }
        self.push_delimiter(open.span, DelimiterContext::SelectionSet);

        let mut selections = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
            selections.push(self.parse_selection()?);
        }

        self.expect(&GraphQLTokenKind::CurlyBraceClose)?;
        self.pop_delimiter();
        Ok(ast::SelectionSet {
            selections,
            span: self.make_span(open.span),
        })
    }

    fn parse_selection(&mut self) -> ParseResult<ast::Selection<'src>> {
        if !self.peek_is(&GraphQLTokenKind::Ellipsis) {
            return Ok(ast::Selection::Field(self.parse_field()?));
        }

        let ellipsis = self.bump()?;
        if self.peek_is_keyword("on")
            || self.peek_is(&GraphQLTokenKind::At)
            || self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)
        {
            return Ok(ast::Selection::InlineFragment(
                self.parse_inline_fragment(ellipsis.span)?,
            ));
        }

        let name = self.expect_name()?;
        let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
        Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
            name,
            directives,
            span: self.make_span(ellipsis.span),
        }))
    }

    /// `(Alias :)? Name Arguments? Directives? SelectionSet?`
    fn parse_field(&mut self) -> ParseResult<ast::Field<'src>> {
        let first = self.expect_name()?;
        let start_span = first.span;
        let (alias, name) = if self.peek_is(&GraphQLTokenKind::Colon) {
            self.bump()?;
            (Some(first), self.expect_name()?)
        } else {
            (None, first)
        };

        let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_arguments(DelimiterContext::FieldArguments, ConstContext::AllowVariables)?
        } else {
            Vec::new()
        };

        let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;

        let selection_set = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            span: self.make_span(start_span),
        })
    }

    /// `... (on Type)? Directives? SelectionSet`, after the `...`.
    fn parse_inline_fragment(
        &mut self,
        ellipsis_span: GraphQLSourceSpan,
    ) -> ParseResult<ast::InlineFragment<'src>> {
        let type_condition = if self.peek_is_keyword("on") {
            self.bump()?;
            Some(self.expect_name()?)
        } else {
            None
        };
        let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::InlineFragment {
            type_condition,
            directives,
            selection_set,
            span: self.make_span(ellipsis_span),
        })
    }
}

/// `["name"]` -> "name", `[":"]` -> "`:`", `["a", "b", "c"]` ->
/// "one of `a`, `b`, `c`".
fn describe_expected(expected: &[&str]) -> String {
    let quoted: Vec<String> = expected
        .iter()
        .map(|item| match *item {
            "name" | "value" | "token" => item.to_string(),
            _ => format!("`{item}`"),
        })
        .collect();
    match quoted.as_slice() {
        [] => "more input".to_string(),
        [one] => one.clone(),
        _ => format!("one of {}", quoted.join(", ")),
    }
}
