use crate::GraphQLParser;
use crate::ast::Selection;
use crate::ast::Value;

fn first_argument_value(source: &str) -> Value<'_> {
    let doc = GraphQLParser::new(source).parse_document().unwrap();
    let op = doc.first_operation().unwrap();
    let Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field");
    };
    field.arguments[0].value.clone()
}

#[test]
fn contains_variable_finds_nested_variables() {
    assert!(first_argument_value("{ f(a: $v) }").contains_variable());
    assert!(first_argument_value("{ f(a: [1, [2, $v]]) }").contains_variable());
    assert!(first_argument_value("{ f(a: { b: { c: $v } }) }").contains_variable());
}

#[test]
fn contains_variable_false_for_constants() {
    assert!(!first_argument_value("{ f(a: [1, 2.5, \"s\", true, null, ENUM]) }").contains_variable());
    assert!(!first_argument_value("{ f(a: {}) }").contains_variable());
}

#[test]
fn literal_payloads() {
    assert!(matches!(first_argument_value("{ f(a: -12) }"), Value::Int { raw, .. } if raw == "-12"));
    assert!(matches!(first_argument_value("{ f(a: 1.5e3) }"), Value::Float { raw, .. } if raw == "1.5e3"));
    assert!(matches!(
        first_argument_value(r#"{ f(a: "a\nb") }"#),
        Value::String { value, is_block: false, .. } if value == "a\nb"
    ));
    assert!(matches!(first_argument_value("{ f(a: false) }"), Value::Boolean { value: false, .. }));
    assert!(matches!(first_argument_value("{ f(a: null) }"), Value::Null { .. }));
    assert!(matches!(first_argument_value("{ f(a: JEDI) }"), Value::Enum(name) if name.as_str() == "JEDI"));
}
