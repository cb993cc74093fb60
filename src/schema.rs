//! DDL generation for one lookup table.
use super::*;

/// Renders the column clause for one generated column.
fn definition(column: &Column) -> String {
    match column.kind {
        ColumnKind::Identity => format!("\"{}\" INT GENERATED ALWAYS AS IDENTITY", column.name),
        ColumnKind::Code => format!("\"{}\" VARCHAR(50) NOT NULL", column.name),
        ColumnKind::Text => format!("\"{}\" VARCHAR NOT NULL", column.name),
    }
}

/// Emits the ordered DDL for one generated table: a single CREATE TABLE with
/// the fixed column layout and identity primary key, then one COMMENT ON
/// COLUMN per annotated column.
///
/// Table shape depends only on the column layout, so this succeeds even for
/// an enumeration with no items; row contents are the data builder's concern.
pub fn creates(table: &GeneratedTable) -> Vec<String> {
    let columns = table
        .columns
        .iter()
        .map(definition)
        .collect::<Vec<_>>()
        .join(",\n    ");
    let mut statements = vec![format!(
        "CREATE TABLE {} (\n    {},\n    PRIMARY KEY (\"{}\")\n)",
        table.qualified(),
        columns,
        table.identity().name
    )];
    for column in &table.columns {
        if let Some(text) = &column.annotation {
            statements.push(format!(
                "COMMENT ON COLUMN {}.\"{}\" IS '{}'",
                table.qualified(),
                column.name,
                escape(text)
            ));
        }
    }
    statements
}
