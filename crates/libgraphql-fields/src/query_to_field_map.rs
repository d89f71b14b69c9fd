use crate::FieldMap;
use crate::FieldMapError;
use crate::GraphQLParser;
use crate::selection_reducer;

/// Parses `source` and reduces its first operation to a [`FieldMap`].
///
/// ```
/// use libgraphql_fields::query_to_field_map;
///
/// let field_map = query_to_field_map("{ hero { name } }").unwrap();
/// let hero = field_map.get("hero").and_then(|s| s.as_nested()).unwrap();
/// assert!(hero.get("name").is_some_and(|s| s.is_leaf()));
/// ```
pub fn query_to_field_map(source: &str) -> Result<FieldMap, FieldMapError> {
    let document = GraphQLParser::new(source).parse_document()?;
    log::trace!("parsed {} definition(s)", document.definitions.len());
    selection_reducer::reduce_document(&document)
}
