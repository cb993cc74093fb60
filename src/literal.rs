//! SQL string-literal escaping.
//!
//! The engine's only literal escape is the doubled single quote; newlines and
//! every other character pass through a standard string literal unchanged, so
//! arbitrary text round-trips losslessly.

/// Escapes raw text for inclusion in a single-quoted SQL literal.
pub fn escape(raw: &str) -> String {
    raw.replace('\'', "''")
}

/// Collapses doubled quotes back to raw text. Inverse of [`escape`].
pub fn unescape(literal: &str) -> String {
    literal.replace("''", "'")
}
