//! Batch assembly across enumerations.
use super::*;

/// An ordered sequence of SQL statements.
///
/// Ordering is a first-class invariant of the batch, not an accident of
/// string concatenation: statements are held individually and serialized to
/// the wire format only at the execution boundary via [`Batch::script`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    statements: Vec<String>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: String) {
        self.statements.push(statement);
    }

    pub fn extend(&mut self, statements: impl IntoIterator<Item = String>) {
        self.statements.extend(statements);
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Serializes the batch as one sequential script.
    pub fn script(&self) -> String {
        let mut script = self.statements.join(";\n");
        if !script.is_empty() {
            script.push(';');
        }
        script
    }
}

/// Generates the full SQL batch for one namespace: the schema itself, then
/// per enumeration its DDL immediately followed by its INSERTs.
///
/// Schema and data statements of different enumerations never interleave;
/// the batch executes as one sequential script, so a later CREATE TABLE must
/// not overtake an earlier enumeration's rows.
pub fn generate(namespace: &Namespace) -> Batch {
    namespace.validate();
    log::info!(
        "generating lookup tables ({}, {} enumerations)",
        namespace.name,
        namespace.enumerations.len()
    );
    let mut batch = Batch::new();
    batch.push(format!("CREATE SCHEMA IF NOT EXISTS \"{}\"", namespace.name));
    for enumeration in &namespace.enumerations {
        let table = GeneratedTable::derive(&namespace.name, enumeration);
        batch.extend(creates(&table));
        batch.extend(inserts(&table, enumeration));
    }
    batch
}

/// Generates one batch across all namespaces, namespace by namespace.
pub fn generate_all(namespaces: &[Namespace]) -> Batch {
    let mut batch = Batch::new();
    for namespace in namespaces {
        batch.extend(generate(namespace).statements().iter().cloned());
    }
    batch
}
