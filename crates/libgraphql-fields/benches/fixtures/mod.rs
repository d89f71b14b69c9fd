use std::fmt::Write;

pub const SMALL_QUERY: &str = "{ hero { name } }";

pub const MEDIUM_QUERY: &str = r#"
query HeroComparison($first: Int = 3, $episode: Episode = JEDI) {
  # Compare the heroes of two episodes
  leftComparison: hero(episode: EMPIRE) {
    name
    appearsIn
    friendsConnection(first: $first) {
      totalCount
      edges {
        node {
          name
          ... on Droid { primaryFunction }
          ... on Human { height(unit: METER) mass }
        }
        cursor
      }
      pageInfo { hasNextPage endCursor }
    }
  }
  rightComparison: hero(episode: $episode) @include(if: true) {
    name
    appearsIn
    friendsConnection(first: $first) {
      totalCount
      edges { node { name } }
    }
  }
  search(text: "an", filter: { kinds: [HUMAN, DROID, STARSHIP], minLength: 1.5 }) {
    __typename
    ... on Starship { name length(unit: FOOT) coordinates }
  }
}
"#;

/// A wide and moderately deep query: `width` top-level fields, each with a
/// four-level nested selection, aliases, arguments and inline fragments.
pub fn large_query(width: usize) -> String {
    let mut query = String::from("query Large($id: ID!, $flag: Boolean!) {\n");
    for i in 0..width {
        let _ = writeln!(
            query,
            "  alias{i}: field{i}(id: $id, limit: {i}) @skip(if: $flag) {{\n    \
                 id name\n    \
                 child{i}(filter: {{ tags: [\"a\", \"b\"] }}) {{ a b c ... on T{i} {{ d e nested {{ f g h }} }} }}\n  }}",
        );
    }
    query.push('}');
    query
}
