//! Table-name and annotation-subject derivation.
//!
//! Lookup tables follow a suffix convention: an enumeration whose identifier
//! already ends in `Type` is a descriptor and keeps its name; any other
//! identifier gains the suffix. Only descriptors receive catalog annotations,
//! phrased around the identifier with the suffix stripped.

const SUFFIX: &str = "Type";

/// Returns the lookup-table name for an enumeration identifier.
pub fn table_name(identifier: &str) -> String {
    if is_descriptor(identifier) {
        identifier.to_string()
    } else {
        format!("{identifier}{SUFFIX}")
    }
}

/// True iff the identifier names a descriptor (ends in `Type`).
pub fn is_descriptor(identifier: &str) -> bool {
    identifier.ends_with(SUFFIX)
}

/// Returns the identifier with one trailing `Type` stripped, for use as the
/// subject of annotation sentences. Interior occurrences are untouched.
pub fn annotation_subject(identifier: &str) -> &str {
    identifier.strip_suffix(SUFFIX).unwrap_or(identifier)
}

/// Annotation sentence for the `ShortDescription` column of a descriptor.
pub fn value_annotation(identifier: &str) -> String {
    format!("The value for the {} type.", annotation_subject(identifier))
}

/// Annotation sentence for the `Description` column of a descriptor.
pub fn description_annotation(identifier: &str) -> String {
    format!(
        "The description for the {} type.",
        annotation_subject(identifier)
    )
}
