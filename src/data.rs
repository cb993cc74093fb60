//! DML generation for one lookup table.
use super::*;

/// Emits one INSERT per enumeration item, in declaration order.
///
/// Order is load-bearing: downstream consumers locate a row by its identity
/// value, so item N must receive identity N. CodeValue is always the empty
/// string, and Description mirrors ShortDescription exactly; item
/// documentation text is never inserted.
pub fn inserts(table: &GeneratedTable, enumeration: &Enumeration) -> Vec<String> {
    enumeration
        .items
        .iter()
        .map(|item| {
            let text = escape(&item.short_description);
            format!(
                "INSERT INTO {} (\"{}\", \"{}\", \"{}\") VALUES ('', '{}', '{}')",
                table.qualified(),
                CODE_VALUE,
                SHORT_DESCRIPTION,
                DESCRIPTION,
                text,
                text
            )
        })
        .collect()
}
