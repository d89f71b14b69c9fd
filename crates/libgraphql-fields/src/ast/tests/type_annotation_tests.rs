use crate::GraphQLParser;
use crate::ast::TypeAnnotation;

fn var_type(source: &str) -> String {
    let doc = GraphQLParser::new(source).parse_document().unwrap();
    let op = doc.first_operation().unwrap();
    op.variable_definitions[0].var_type.to_string()
}

#[test]
fn display_is_canonical() {
    assert_eq!(var_type("query ($a: Int) { f }"), "Int");
    assert_eq!(var_type("query ($a: [ Int ! ] !) { f }"), "[Int!]!");
    assert_eq!(var_type("query ($a: [[ID]]) { f }"), "[[ID]]");
}

#[test]
fn innermost_name_unwraps() {
    let source = "query ($a: [[Episode!]]!) { f }";
    let doc = GraphQLParser::new(source).parse_document().unwrap();
    let var_type = &doc.first_operation().unwrap().variable_definitions[0].var_type;
    assert_eq!(var_type.innermost_name(), "Episode");
    assert!(matches!(var_type, TypeAnnotation::NonNull { .. }));
    assert_eq!(var_type.to_source(source), "[[Episode!]]!");
}
