use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// What a query selects under one field name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldSelection {
    /// The field is selected with no sub-selection. Serializes as `true`.
    Leaf,

    /// The field is selected with a sub-selection.
    Nested(FieldMap),
}

impl FieldSelection {
    pub fn is_leaf(&self) -> bool {
        matches!(self, FieldSelection::Leaf)
    }

    pub fn as_nested(&self) -> Option<&FieldMap> {
        match self {
            FieldSelection::Leaf => None,
            FieldSelection::Nested(field_map) => Some(field_map),
        }
    }

    /// Combines two selections of the same field name.
    ///
    /// A nested selection always wins over a leaf; two nested selections
    /// are unioned key by key.
    pub fn merge(self, other: FieldSelection) -> FieldSelection {
        match (self, other) {
            (FieldSelection::Leaf, FieldSelection::Leaf) => FieldSelection::Leaf,
            (FieldSelection::Leaf, nested @ FieldSelection::Nested(_))
            | (nested @ FieldSelection::Nested(_), FieldSelection::Leaf) => nested,
            (FieldSelection::Nested(mut ours), FieldSelection::Nested(theirs)) => {
                ours.merge(theirs);
                FieldSelection::Nested(ours)
            },
        }
    }
}

impl Serialize for FieldSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldSelection::Leaf => serializer.serialize_bool(true),
            FieldSelection::Nested(field_map) => field_map.serialize(serializer),
        }
    }
}

/// The fields a query selects, keyed by field name (never by alias).
///
/// Iteration and serialization are in ascending byte order of the names at
/// every level, so two queries that select the same fields produce
/// identical output regardless of how they were written.
///
/// ```
/// use libgraphql_fields::FieldMap;
/// use libgraphql_fields::FieldSelection;
///
/// let mut field_map = FieldMap::new();
/// field_map.insert("name", FieldSelection::Leaf);
/// field_map.insert("id", FieldSelection::Leaf);
/// assert_eq!(field_map.keys().collect::<Vec<_>>(), vec!["id", "name"]);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldMap {
    fields: BTreeMap<String, FieldSelection>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `selection` under `name`, merging with any selection already
    /// present (see [`FieldSelection::merge`]).
    pub fn insert(&mut self, name: impl Into<String>, selection: FieldSelection) {
        match self.fields.entry(name.into()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(selection);
            },
            btree_map::Entry::Occupied(mut entry) => {
                let existing = std::mem::replace(entry.get_mut(), FieldSelection::Leaf);
                *entry.get_mut() = existing.merge(selection);
            },
        }
    }

    /// Inserts every entry of `other` individually.
    pub fn merge(&mut self, other: FieldMap) {
        for (name, selection) in other.fields {
            self.insert(name, selection);
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldSelection> {
        self.fields.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSelection)> {
        self.fields
            .iter()
            .map(|(name, selection)| (name.as_str(), selection))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldSelection)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, FieldSelection)>>(iter: I) -> Self {
        let mut field_map = FieldMap::new();
        for (name, selection) in iter {
            field_map.insert(name, selection);
        }
        field_map
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, FieldSelection);
    type IntoIter = btree_map::IntoIter<String, FieldSelection>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, selection) in &self.fields {
            map.serialize_entry(name, selection)?;
        }
        map.end()
    }
}
