//! Collapses parsed selection sets into [`FieldMap`]s.
//!
//! Only the selected field names survive: aliases, arguments, directives
//! and inline fragment type conditions are dropped, and inline fragments are
//! flattened into their parent. Named fragment spreads are never resolved;
//! reaching one fails the whole reduction.

use crate::FieldMap;
use crate::FieldMapError;
use crate::FieldSelection;
use crate::ast::Document;
use crate::ast::Selection;
use crate::ast::SelectionSet;

/// Reduces the first operation definition of `document`.
///
/// Fragment definitions are skipped, and so is every operation after the
/// first one.
pub fn reduce_document(document: &Document<'_>) -> Result<FieldMap, FieldMapError> {
    let Some(operation) = document.first_operation() else {
        return Err(FieldMapError::NoOperation);
    };
    log::trace!(
        "reducing {} `{}`",
        operation.kind,
        operation.name.as_ref().map_or("<anonymous>", |name| name.as_str()),
    );
    reduce_selection_set(&operation.selection_set)
}

/// Reduces one selection set, recursing into nested selection sets and
/// inline fragments.
pub fn reduce_selection_set(selection_set: &SelectionSet<'_>) -> Result<FieldMap, FieldMapError> {
    let mut field_map = FieldMap::new();
    for selection in &selection_set.selections {
        match selection {
            Selection::Field(field) => {
                let field_selection = match &field.selection_set {
                    Some(nested) => FieldSelection::Nested(reduce_selection_set(nested)?),
                    None => FieldSelection::Leaf,
                };
                field_map.insert(field.name.as_str(), field_selection);
            },

            Selection::InlineFragment(inline) => {
                field_map.merge(reduce_selection_set(&inline.selection_set)?);
            },

            Selection::FragmentSpread(spread) => {
                log::debug!("rejecting fragment spread `...{}`", spread.name.as_str());
                return Err(FieldMapError::UnresolvedFragmentReference {
                    name: spread.name.as_str().to_string(),
                    span: spread.span,
                });
            },
        }
    }
    Ok(field_map)
}
