//! Derived table layout for one enumeration.
use super::*;

/// Semantic type tag for a generated column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Auto-assigned, strictly increasing integer primary key. Its value is
    /// the row ordinal.
    Identity,
    /// Bounded-width code, reserved for extensible enumerations.
    Code,
    /// Variable-length text.
    Text,
}

/// One column of a generated lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub annotation: Option<String>,
}

impl Column {
    fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
            annotation: None,
        }
    }

    fn annotated(name: impl Into<String>, kind: ColumnKind, text: String) -> Self {
        Self {
            name: name.into(),
            kind,
            annotation: Some(text),
        }
    }
}

/// Immutable description of the lookup table generated for one enumeration.
///
/// Computed once at generation time and consumed by the schema and data
/// statement builders; never persisted in the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTable {
    pub schema: String,
    pub name: String,
    pub columns: Vec<Column>,
}

impl GeneratedTable {
    /// Derives the fixed column layout for an enumeration: identity key,
    /// code, short description, description. Descriptor identifiers get
    /// their two text columns annotated.
    pub fn derive(namespace: &str, enumeration: &Enumeration) -> Self {
        assert!(
            !enumeration.identifier.is_empty(),
            "enumeration identifier must not be empty"
        );
        let id = &enumeration.identifier;
        let columns = if is_descriptor(id) {
            vec![
                Column::new(format!("{id}Id"), ColumnKind::Identity),
                Column::new(CODE_VALUE, ColumnKind::Code),
                Column::annotated(SHORT_DESCRIPTION, ColumnKind::Text, value_annotation(id)),
                Column::annotated(DESCRIPTION, ColumnKind::Text, description_annotation(id)),
            ]
        } else {
            vec![
                Column::new(format!("{id}Id"), ColumnKind::Identity),
                Column::new(CODE_VALUE, ColumnKind::Code),
                Column::new(SHORT_DESCRIPTION, ColumnKind::Text),
                Column::new(DESCRIPTION, ColumnKind::Text),
            ]
        };
        Self {
            schema: namespace.to_string(),
            name: table_name(id),
            columns,
        }
    }

    /// The identity primary-key column. Layout puts it first.
    pub fn identity(&self) -> &Column {
        &self.columns[0]
    }

    /// Schema-qualified, quote-delimited table reference.
    pub fn qualified(&self) -> String {
        format!("\"{}\".\"{}\"", self.schema, self.name)
    }

    /// Catalog address of this table, for introspection.
    pub fn address(&self) -> DatabaseTable {
        DatabaseTable::new(&self.schema, &self.name)
    }
}
