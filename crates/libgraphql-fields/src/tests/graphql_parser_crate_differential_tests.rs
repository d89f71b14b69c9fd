//! Differential tests: the field map computed from this crate's parser must
//! match one computed the same way from the `graphql-parser` crate's AST.

use crate::FieldMap;
use crate::FieldSelection;
use crate::query_to_field_map;
use crate::tests::property_tests::Style;
use crate::tests::property_tests::plain_name;
use crate::tests::property_tests::render;
use crate::tests::property_tests::selection_tree;
use crate::tests::property_tests::style;
use graphql_parser::query as gp;
use proptest::prelude::*;

fn reduce_gp_selection_set(selection_set: &gp::SelectionSet<'_, String>) -> FieldMap {
    let mut field_map = FieldMap::new();
    for item in &selection_set.items {
        match item {
            gp::Selection::Field(field) => {
                let selection = if field.selection_set.items.is_empty() {
                    FieldSelection::Leaf
                } else {
                    FieldSelection::Nested(reduce_gp_selection_set(&field.selection_set))
                };
                field_map.insert(field.name.clone(), selection);
            },
            gp::Selection::InlineFragment(inline) => {
                field_map.merge(reduce_gp_selection_set(&inline.selection_set));
            },
            gp::Selection::FragmentSpread(spread) => {
                panic!("corpus query contains fragment spread `{}`", spread.fragment_name);
            },
        }
    }
    field_map
}

fn reduce_with_graphql_parser(source: &str) -> FieldMap {
    let doc = graphql_parser::parse_query::<String>(source).expect("graphql-parser accepts corpus query");
    for definition in &doc.definitions {
        if let gp::Definition::Operation(operation) = definition {
            let selection_set = match operation {
                gp::OperationDefinition::SelectionSet(selection_set) => selection_set,
                gp::OperationDefinition::Query(query) => &query.selection_set,
                gp::OperationDefinition::Mutation(mutation) => &mutation.selection_set,
                gp::OperationDefinition::Subscription(subscription) => &subscription.selection_set,
            };
            return reduce_gp_selection_set(selection_set);
        }
    }
    panic!("corpus query has no operation");
}

const CORPUS: &[&str] = &[
    "{ hero { name } }",
    r#"{ human(id: "1000") { name height(unit: FOOT) } }"#,
    "{ empireHero: hero(episode: EMPIRE) { name } jediHero: hero(episode: JEDI) { name } }",
    "query Hero($w: Boolean!) { hero(episode: $episode) { name friends @include(if: $w) { name } } }",
    "query H($ep: Episode!) { hero(episode: $ep) { name ... on Droid { primaryFunction } ... on Human { height } } }",
    "mutation M($ep: Episode!, $review: ReviewInput!) { createReview(episode: $ep, review: $review) { stars commentary } }",
    "subscription OnReview { reviewAdded(episode: JEDI) { stars commentary episode } }",
    "query {\n  # comment\n  hero {\n    name # trailing\n  }\n}",
    r#"query Search($text: String = "R2") {
        search(text: $text, first: 10, filter: { kinds: [HUMAN, DROID], minHeight: 1.5e0 }) {
            __typename
            ... on Human { name height mass }
            ... on Droid { name primaryFunction }
            ... on Starship { name length }
        }
    }"#,
    r#"{ hero { friendsConnection(first: 2, after: "Y3Vyc29yMQ==") { totalCount edges { node { name } cursor } pageInfo { hasNextPage } } } }"#,
    "{ a b a { x } a { y z } ... @skip(if: false) { b { c } } }",
    "fragment Unused on Character { name } { hero { id } }",
    "query First { a } query Second { b }",
    r#"{ f(s: """
        block
          string
    """) }"#,
];

#[test]
fn corpus_matches_graphql_parser() {
    for source in CORPUS {
        assert_eq!(
            query_to_field_map(source).unwrap(),
            reduce_with_graphql_parser(source),
            "{source}",
        );
    }
}

#[test]
fn rendered_plain_tree_matches_graphql_parser() {
    let source = render(
        &[
            crate::tests::property_tests::Node {
                name: "xa".to_string(),
                children: Vec::new(),
            },
        ],
        &Style::plain(),
    );
    assert_eq!(query_to_field_map(&source).unwrap(), reduce_with_graphql_parser(&source));
}

proptest! {
    #[test]
    fn generated_queries_match_graphql_parser(tree in selection_tree(plain_name()), style in style()) {
        let source = render(&tree, &style);
        prop_assert_eq!(
            query_to_field_map(&source).unwrap(),
            reduce_with_graphql_parser(&source),
            "source: {}",
            source,
        );
    }
}
