//! Tests for the errors the parser reports. Each case checks the error kind,
//! the message, and where relevant the span the error points at.

use crate::GraphQLErrorNoteKind;
use crate::GraphQLParseError;
use crate::GraphQLSyntaxErrorKind;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_syntax_err;

// =============================================================================
// Empty constructs
// =============================================================================

#[test]
fn empty_selection_set() {
    let err = parse_syntax_err("{ }");
    assert_eq!(err.message(), "selection set cannot be empty");
    assert_eq!(
        err.kind(),
        &GraphQLSyntaxErrorKind::InvalidEmptyConstruct {
            construct: "selection set".to_string(),
        },
    );
    assert_eq!(err.span().start_inclusive.col_utf8(), 0);
    assert_eq!(err.span().end_exclusive.col_utf8(), 3);
}

#[test]
fn empty_nested_selection_set() {
    let err = parse_syntax_err("{ hero {} }");
    assert_eq!(err.message(), "selection set cannot be empty");
    assert_eq!(err.span().start_inclusive.col_utf8(), 7);
}

#[test]
fn empty_argument_list() {
    let err = parse_syntax_err("{ f() }");
    assert_eq!(err.message(), "argument list cannot be empty; omit the parentheses instead");
    assert!(matches!(
        err.kind(),
        GraphQLSyntaxErrorKind::InvalidEmptyConstruct { construct } if construct == "argument list"
    ));
}

#[test]
fn empty_directive_argument_list() {
    let err = parse_syntax_err("{ f @skip() }");
    assert!(matches!(err.kind(), GraphQLSyntaxErrorKind::InvalidEmptyConstruct { .. }));
}

#[test]
fn empty_variable_definitions() {
    let err = parse_syntax_err("query Q() { a }");
    assert_eq!(
        err.message(),
        "variable definitions cannot be empty; omit the parentheses instead",
    );
}

// =============================================================================
// Unclosed delimiters
// =============================================================================

#[test]
fn unclosed_selection_set() {
    let err = parse_syntax_err("{ hero { name }");
    assert_eq!(err.message(), "unclosed `{`");
    assert_eq!(
        err.kind(),
        &GraphQLSyntaxErrorKind::UnclosedDelimiter {
            delimiter: "{".to_string(),
        },
    );
    assert_eq!(err.span().start_inclusive.col_utf8(), 15);

    let note = &err.notes()[0];
    assert_eq!(note.kind, GraphQLErrorNoteKind::General);
    assert_eq!(note.message, "opening `{` in selection set here");
    assert_eq!(note.span.map(|s| s.start_inclusive.col_utf8()), Some(0));
}

#[test]
fn unclosed_innermost_delimiter_is_reported() {
    let err = parse_syntax_err("{ hero(ids: [1, 2");
    assert_eq!(err.message(), "unclosed `[`");
    assert_eq!(err.notes()[0].message, "opening `[` in list value here");
    assert_eq!(err.notes()[0].span.map(|s| s.start_inclusive.col_utf8()), Some(12));
}

#[test]
fn unclosed_arguments() {
    let err = parse_syntax_err("{ hero(episode: EMPIRE");
    assert_eq!(err.message(), "unclosed `(`");
    assert_eq!(err.notes()[0].message, "opening `(` in field arguments here");
}

#[test]
fn unclosed_object_value() {
    let err = parse_syntax_err("{ f(o: { a: 1 ");
    assert_eq!(err.notes()[0].message, "opening `{` in object value here");
}

#[test]
fn unclosed_variable_definitions_and_list_type() {
    let err = parse_syntax_err("query Q($a: Int");
    assert_eq!(err.notes()[0].message, "opening `(` in variable definitions here");

    let err = parse_syntax_err("query Q($a: [Int");
    assert_eq!(err.message(), "unclosed `[`");
    assert_eq!(err.notes()[0].message, "opening `[` in list type annotation here");
}

// =============================================================================
// Unexpected tokens and end of input
// =============================================================================

#[test]
fn empty_document() {
    for source in ["", "   \n\t", "# just a comment", ",,,"] {
        let err = parse_syntax_err(source);
        assert_eq!(
            err.message(),
            "expected one of `query`, `mutation`, `subscription`, `fragment`, `{`, found end of input",
            "{source:?}",
        );
        assert!(matches!(
            err.kind(),
            GraphQLSyntaxErrorKind::UnexpectedEof { expected } if expected.len() == 5
        ));
    }
}

#[test]
fn operation_without_selection_set() {
    let err = parse_syntax_err("mutation DoIt");
    assert_eq!(err.message(), "expected `{`, found end of input");
    assert_eq!(err.span().start_inclusive.col_utf8(), 13);
}

#[test]
fn stray_closing_brace() {
    let err = parse_syntax_err("query Q { a } }");
    assert_eq!(
        err.message(),
        "expected one of `query`, `mutation`, `subscription`, `fragment`, `{`, found `}`",
    );
    assert_eq!(err.span().start_inclusive.col_utf8(), 14);
}

#[test]
fn unexpected_token_kinds() {
    let cases = [
        ("{ a: }", "expected name, found `}`"),
        ("{ f(a: 1 }", "expected name, found `}`"),
        ("{ f(a: ) }", "expected value, found `)`"),
        ("query Q($a) { x }", "expected `:`, found `)`"),
        ("query Q($a: ) { x }", "expected one of name, `[`, found `)`"),
        ("query Q($a: Int!!) { x }", "expected `$`, found `!`"),
        ("query Q(a: Int) { x }", "expected `$`, found `a`"),
        ("fragment F T { a }", "expected `on`, found `T`"),
        ("{ ... on }", "expected name, found `}`"),
        ("{ a @ }", "expected name, found `}`"),
        ("{ a(b: 1) 42 }", "expected name, found `42`"),
        ("\"desc\" { a }", "expected one of `query`, `mutation`, `subscription`, `fragment`, `{`, found `string`"),
        ("Query { a }", "expected one of `query`, `mutation`, `subscription`, `fragment`, `{`, found `Query`"),
    ];
    for (source, message) in cases {
        let err = parse_syntax_err(source);
        assert_eq!(err.message(), message, "{source}");
        assert!(
            matches!(err.kind(), GraphQLSyntaxErrorKind::UnexpectedToken { .. }),
            "{source}: {:?}",
            err.kind(),
        );
    }
}

#[test]
fn unexpected_token_records_found_and_expected() {
    let err = parse_syntax_err("query Q($a Int) { x }");
    assert_eq!(
        err.kind(),
        &GraphQLSyntaxErrorKind::UnexpectedToken {
            expected: vec![":".to_string()],
            found: "Int".to_string(),
        },
    );
}

// =============================================================================
// Rejected constructs
// =============================================================================

#[test]
fn type_system_definitions_are_unsupported() {
    for keyword in ["type", "interface", "schema", "scalar", "enum", "union", "input", "directive", "extend"] {
        let source = format!("{keyword} Thing {{ a: Int }}");
        let err = parse_syntax_err(&source);
        assert_eq!(
            err.kind(),
            &GraphQLSyntaxErrorKind::UnsupportedDefinition {
                keyword: keyword.to_string(),
            },
        );
        assert_eq!(
            err.message(),
            format!("`{keyword}` definitions are not allowed in a query document"),
        );
    }
}

#[test]
fn described_type_definition_is_unsupported() {
    let err = parse_syntax_err("\"\"\"The root\"\"\" type Query { a: Int }");
    assert!(matches!(
        err.kind(),
        GraphQLSyntaxErrorKind::UnsupportedDefinition { keyword } if keyword == "type"
    ));
    assert_eq!(err.span().start_inclusive.col_utf8(), 0);
}

#[test]
fn type_definition_after_operation_is_unsupported() {
    let err = parse_syntax_err("{ a }\ntype Query { a: Int }");
    assert_eq!(err.span().start_inclusive.line(), 1);
}

#[test]
fn fragment_named_on() {
    let err = parse_syntax_err("fragment on on User { id }");
    assert_eq!(err.message(), "fragment name cannot be `on`");
    assert_eq!(
        err.kind(),
        &GraphQLSyntaxErrorKind::ReservedName {
            name: "on".to_string(),
        },
    );
    assert_eq!(err.span().start_inclusive.col_utf8(), 9);
    assert!(err.notes().iter().any(|note| note.kind == GraphQLErrorNoteKind::Spec));
}

#[test]
fn variable_in_default_value() {
    let err = parse_syntax_err("query Q($a: Int = $b) { x }");
    assert_eq!(err.message(), "variables are not allowed in variable default values");
    assert!(matches!(
        err.kind(),
        GraphQLSyntaxErrorKind::UnexpectedToken { found, .. } if found == "$"
    ));
    assert_eq!(err.span().start_inclusive.col_utf8(), 18);
}

#[test]
fn variable_nested_in_default_value() {
    let err = parse_syntax_err("query Q($a: [Int] = [1, $b]) { x }");
    assert_eq!(err.message(), "variables are not allowed in variable default values");
}

#[test]
fn variable_in_variable_directive() {
    let err = parse_syntax_err("query Q($a: Int @dir(arg: $b)) { x }");
    assert_eq!(
        err.message(),
        "variables are not allowed in directives on variable definitions",
    );
}

// =============================================================================
// Depth limit
// =============================================================================

#[test]
fn deeply_nested_selection_sets() {
    let source = "{ a ".repeat(65) + &" }".repeat(65);
    let err = parse_syntax_err(&source);
    assert_eq!(err.message(), "maximum nesting depth exceeded");
    assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::MaxDepthExceeded);
    assert_eq!(err.span().start_inclusive.col_utf8(), 64 * 4);
}

#[test]
fn deeply_nested_list_values() {
    let source = format!("{{ f(a: {}1{}) }}", "[".repeat(100), "]".repeat(100));
    let err = parse_syntax_err(&source);
    assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::MaxDepthExceeded);
}

#[test]
fn deeply_nested_list_types() {
    let source = format!("query Q($a: {}Int{}) {{ x }}", "[".repeat(100), "]".repeat(100));
    let err = parse_syntax_err(&source);
    assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::MaxDepthExceeded);
}

// =============================================================================
// Lex errors surface unchanged
// =============================================================================

#[test]
fn lex_error_is_surfaced() {
    let GraphQLParseError::Lex(err) = parse_err("{ hero ? }") else {
        panic!("expected a lex error");
    };
    assert_eq!(err.message(), "Unexpected character `?`");
    assert_eq!(err.span().start_inclusive.col_utf8(), 7);
}

#[test]
fn lex_error_in_value_position() {
    let GraphQLParseError::Lex(err) = parse_err("{ f(a: \"unterminated) }") else {
        panic!("expected a lex error");
    };
    assert_eq!(err.message(), "Unterminated string literal");
}

#[test]
fn lex_error_wins_over_unclosed_delimiter() {
    let err = parse_err("{ hero { name .. }");
    assert!(matches!(err, GraphQLParseError::Lex(_)), "{err:?}");
}

#[test]
fn first_error_wins() {
    let err = parse_syntax_err("{ a: } { }");
    assert_eq!(err.message(), "expected name, found `}`");
}
