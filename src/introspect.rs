//! Read-only schema and row lookups.
//!
//! All SELECTs against the system catalog and the generated tables are
//! consolidated here. Queries run on the scenario transaction, so they see
//! exactly the objects and rows committed by the most recent batch execution
//! within the current transaction scope. Existence checks report absence as
//! `false`; value lookups against absent rows are errors.
use super::*;
use tokio_postgres::Transaction;

/// Introspect defines the read interface used by verification checks.
#[async_trait::async_trait]
pub trait Introspect {
    async fn table_exists(&self, table: &DatabaseTable) -> Result<bool, PgErr>;
    async fn column_exists(&self, column: &DatabaseColumn) -> Result<bool, PgErr>;
    async fn column_type(&self, column: &DatabaseColumn) -> Result<Option<String>, PgErr>;
    async fn column_annotation(&self, column: &DatabaseColumn) -> Result<Option<String>, PgErr>;
    async fn index_exists(&self, index: &DatabaseIndex) -> Result<bool, PgErr>;
    async fn foreign_key_exists(&self, key: &DatabaseForeignKey) -> Result<bool, PgErr>;
    /// Value of `column` in the row with the smallest identity value.
    async fn first_row(&self, column: &DatabaseColumn) -> Result<String, PgErr>;
    /// Value of `column` in the row addressed by `key`.
    async fn row_value(&self, column: &DatabaseColumn, key: &RowKey) -> Result<String, PgErr>;
}

#[async_trait::async_trait]
impl Introspect for Transaction<'_> {
    async fn table_exists(&self, table: &DatabaseTable) -> Result<bool, PgErr> {
        const SQL: &str = "SELECT 1 \
                           FROM   information_schema.tables \
                           WHERE  table_schema = $1 \
                           AND    table_name   = $2";
        Ok(self
            .query_opt(SQL, &[&table.schema, &table.table])
            .await?
            .is_some())
    }

    async fn column_exists(&self, column: &DatabaseColumn) -> Result<bool, PgErr> {
        const SQL: &str = "SELECT 1 \
                           FROM   information_schema.columns \
                           WHERE  table_schema = $1 \
                           AND    table_name   = $2 \
                           AND    column_name  = $3";
        Ok(self
            .query_opt(SQL, &[&column.schema, &column.table, &column.column])
            .await?
            .is_some())
    }

    async fn column_type(&self, column: &DatabaseColumn) -> Result<Option<String>, PgErr> {
        const SQL: &str = "SELECT data_type \
                           FROM   information_schema.columns \
                           WHERE  table_schema = $1 \
                           AND    table_name   = $2 \
                           AND    column_name  = $3";
        Ok(self
            .query_opt(SQL, &[&column.schema, &column.table, &column.column])
            .await?
            .map(|row| row.get(0)))
    }

    async fn column_annotation(&self, column: &DatabaseColumn) -> Result<Option<String>, PgErr> {
        const SQL: &str = "SELECT col_description(c.oid, a.attnum) \
                           FROM   pg_catalog.pg_class     c \
                           JOIN   pg_catalog.pg_namespace n ON n.oid = c.relnamespace \
                           JOIN   pg_catalog.pg_attribute a ON a.attrelid = c.oid \
                           WHERE  n.nspname = $1 \
                           AND    c.relname = $2 \
                           AND    a.attname = $3";
        Ok(self
            .query_opt(SQL, &[&column.schema, &column.table, &column.column])
            .await?
            .and_then(|row| row.get(0)))
    }

    async fn index_exists(&self, index: &DatabaseIndex) -> Result<bool, PgErr> {
        const SQL: &str = "SELECT 1 \
                           FROM   pg_catalog.pg_indexes \
                           WHERE  schemaname = $1 \
                           AND    tablename  = $2 \
                           AND    indexname  = $3";
        Ok(self
            .query_opt(SQL, &[&index.schema, &index.table, &index.index])
            .await?
            .is_some())
    }

    async fn foreign_key_exists(&self, key: &DatabaseForeignKey) -> Result<bool, PgErr> {
        const SQL: &str = "SELECT 1 \
                           FROM   information_schema.table_constraints \
                           WHERE  constraint_schema = $1 \
                           AND    table_name        = $2 \
                           AND    constraint_name   = $3 \
                           AND    constraint_type   = 'FOREIGN KEY'";
        Ok(self
            .query_opt(SQL, &[&key.schema, &key.table, &key.constraint])
            .await?
            .is_some())
    }

    async fn first_row(&self, column: &DatabaseColumn) -> Result<String, PgErr> {
        const SQL: &str = "SELECT column_name \
                           FROM   information_schema.columns \
                           WHERE  table_schema = $1 \
                           AND    table_name   = $2 \
                           AND    is_identity  = 'YES'";
        let identity: String = self
            .query_one(SQL, &[&column.schema, &column.table])
            .await?
            .get(0);
        let sql = format!(
            "SELECT \"{}\" FROM \"{}\".\"{}\" ORDER BY \"{}\" LIMIT 1",
            column.column, column.schema, column.table, identity
        );
        Ok(self.query_one(&sql, &[]).await?.get(0))
    }

    async fn row_value(&self, column: &DatabaseColumn, key: &RowKey) -> Result<String, PgErr> {
        let sql = format!(
            "SELECT \"{}\" FROM \"{}\".\"{}\" WHERE \"{}\"::text = $1",
            column.column, column.schema, column.table, key.column
        );
        Ok(self.query_one(&sql, &[&key.value]).await?.get(0))
    }
}

#[async_trait::async_trait]
impl Introspect for Scenario<'_> {
    async fn table_exists(&self, table: &DatabaseTable) -> Result<bool, PgErr> {
        self.tx.table_exists(table).await
    }

    async fn column_exists(&self, column: &DatabaseColumn) -> Result<bool, PgErr> {
        self.tx.column_exists(column).await
    }

    async fn column_type(&self, column: &DatabaseColumn) -> Result<Option<String>, PgErr> {
        self.tx.column_type(column).await
    }

    async fn column_annotation(&self, column: &DatabaseColumn) -> Result<Option<String>, PgErr> {
        self.tx.column_annotation(column).await
    }

    async fn index_exists(&self, index: &DatabaseIndex) -> Result<bool, PgErr> {
        self.tx.index_exists(index).await
    }

    async fn foreign_key_exists(&self, key: &DatabaseForeignKey) -> Result<bool, PgErr> {
        self.tx.foreign_key_exists(key).await
    }

    async fn first_row(&self, column: &DatabaseColumn) -> Result<String, PgErr> {
        self.tx.first_row(column).await
    }

    async fn row_value(&self, column: &DatabaseColumn, key: &RowKey) -> Result<String, PgErr> {
        self.tx.row_value(column, key).await
    }
}
