//! Catalog constants and introspection addresses.
//!
//! The engine's metadata catalog reports column data types under fixed
//! names; [`ColumnType`] enumerates the ones the generator and its
//! verification checks are allowed to encounter. The `Database*` structs are
//! pure value objects addressing a schema/table/column combination for one
//! introspection call.

/// Engine data types as named by the metadata catalog. Boundary constants,
/// never computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Boolean,
    Date,
    Timestamp,
    Decimal,
    Integer,
    Money,
    Varchar,
    SmallInt,
    Time,
    Uuid,
}

impl ColumnType {
    pub const ALL: [ColumnType; 10] = [
        ColumnType::Boolean,
        ColumnType::Date,
        ColumnType::Timestamp,
        ColumnType::Decimal,
        ColumnType::Integer,
        ColumnType::Money,
        ColumnType::Varchar,
        ColumnType::SmallInt,
        ColumnType::Time,
        ColumnType::Uuid,
    ];

    /// The exact data-type name reported by the information schema.
    pub fn catalog_name(self) -> &'static str {
        match self {
            ColumnType::Boolean => "boolean",
            ColumnType::Date => "date",
            ColumnType::Timestamp => "timestamp without time zone",
            ColumnType::Decimal => "numeric",
            ColumnType::Integer => "integer",
            ColumnType::Money => "money",
            ColumnType::Varchar => "character varying",
            ColumnType::SmallInt => "smallint",
            ColumnType::Time => "time without time zone",
            ColumnType::Uuid => "uuid",
        }
    }
}

/// Address of one table in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseTable {
    pub schema: String,
    pub table: String,
}

impl DatabaseTable {
    pub fn new(schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
        }
    }

    pub fn column(&self, name: impl Into<String>) -> DatabaseColumn {
        DatabaseColumn::new(&self.schema, &self.table, name)
    }
}

/// Address of one column in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseColumn {
    pub schema: String,
    pub table: String,
    pub column: String,
}

impl DatabaseColumn {
    pub fn new(
        schema: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
            column: column.into(),
        }
    }
}

/// Address of one index in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseIndex {
    pub schema: String,
    pub table: String,
    pub index: String,
}

impl DatabaseIndex {
    pub fn new(
        schema: impl Into<String>,
        table: impl Into<String>,
        index: impl Into<String>,
    ) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
            index: index.into(),
        }
    }
}

/// Address of one foreign-key constraint in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseForeignKey {
    pub schema: String,
    pub table: String,
    pub constraint: String,
}

impl DatabaseForeignKey {
    pub fn new(
        schema: impl Into<String>,
        table: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
            constraint: constraint.into(),
        }
    }
}

/// Typed row address: the row of a table whose key column, rendered as text,
/// equals the key value. Resolved through a parameterized query, never by
/// splicing the value into SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowKey {
    pub column: String,
    pub value: String,
}

impl RowKey {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Addresses the row holding the nth identity value.
    pub fn ordinal(column: impl Into<String>, n: usize) -> Self {
        Self::new(column, n.to_string())
    }
}
