//! Tests for the span/source helpers shared by every AST node.

use crate::GraphQLParser;
use crate::ast::AstNode;
use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::OperationKind;
use crate::ast::Selection;

fn parse(source: &str) -> Document<'_> {
    GraphQLParser::new(source).parse_document().unwrap()
}

#[test]
fn to_source_slices_each_node() {
    let source = "query Hero($ep: Episode = JEDI) {\n  hero(episode: $ep) @live { name }\n}";
    let doc = parse(source);
    let op = doc.first_operation().unwrap();

    assert_eq!(op.name.as_ref().unwrap().to_source(source), "Hero");
    assert_eq!(op.variable_definitions[0].to_source(source), "$ep: Episode = JEDI");
    assert_eq!(op.to_source(source), source);

    let Selection::Field(hero) = &op.selection_set.selections[0] else {
        panic!("expected a field");
    };
    assert_eq!(hero.to_source(source), "hero(episode: $ep) @live { name }");
    assert_eq!(hero.arguments[0].to_source(source), "episode: $ep");
    assert_eq!(hero.directives[0].to_source(source), "@live");
}

#[test]
fn append_source_concatenates() {
    let source = "{ a b }";
    let doc = parse(source);
    let op = doc.first_operation().unwrap();

    let mut sink = String::new();
    for selection in &op.selection_set.selections {
        selection.append_source(&mut sink, source);
    }
    assert_eq!(sink, "ab");
}

#[test]
fn to_source_with_foreign_text_is_empty() {
    let doc = parse("{ somewhatLongFieldName }");
    assert_eq!(doc.to_source("{ }"), "");
}

#[test]
fn document_span_covers_all_definitions() {
    let source = "  fragment F on T { a }\nquery Q { b }  ";
    let doc = parse(source);
    assert_eq!(doc.to_source(source), "fragment F on T { a }\nquery Q { b }");
    assert_eq!(doc.definitions[1].to_source(source), "query Q { b }");
}

#[test]
fn first_operation_skips_fragments() {
    let doc = parse("fragment F on T { a } mutation M { b } query Q { c }");
    let op = doc.first_operation().unwrap();
    assert_eq!(op.kind, OperationKind::Mutation);
    assert_eq!(op.name.as_ref().map(|n| n.as_str()), Some("M"));
    assert_eq!(doc.operations().count(), 2);
    assert_eq!(doc.fragments().count(), 1);
}

#[test]
fn first_operation_none_for_fragment_only_document() {
    let doc = parse("fragment F on T { a }");
    assert!(doc.first_operation().is_none());
    assert!(matches!(&doc.definitions[0], Definition::Fragment(f) if f.name.as_str() == "F"));
}

#[test]
fn response_key_prefers_alias() {
    let doc = parse("{ smallPic: profilePic(size: 64) plain }");
    let op = doc.first_operation().unwrap();
    let keys: Vec<&str> = op
        .selection_set
        .selections
        .iter()
        .map(|selection| match selection {
            Selection::Field(field) => field.response_key(),
            _ => panic!("expected fields only"),
        })
        .collect();
    assert_eq!(keys, vec!["smallPic", "plain"]);
}

#[test]
fn operation_kind_keywords() {
    assert_eq!(OperationKind::from_keyword("query"), Some(OperationKind::Query));
    assert_eq!(OperationKind::from_keyword("subscription"), Some(OperationKind::Subscription));
    assert_eq!(OperationKind::from_keyword("Query"), None);
    assert_eq!(OperationKind::Mutation.to_string(), "mutation");
}
