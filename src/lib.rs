//! Lookup-table generation and verification for enumerated descriptor types.
//!
//! Turns a declarative model of closed enumerations into PostgreSQL DDL and
//! DML: one lookup table per enumeration, one row per item, with catalog
//! annotations for descriptor types. Generation is pure and deterministic;
//! execution and introspection run against an isolated database.
//!
//! ## Generation
//!
//! - [`Namespace`] / [`Enumeration`] / [`EnumerationItem`] — the input model
//! - [`GeneratedTable`] — derived table layout for one enumeration
//! - [`generate`] — ordered statement [`Batch`] for a whole namespace
//!
//! ## Verification
//!
//! - [`db()`] — Establishes a database connection from `DB_URL`
//! - [`Session`] — Isolated database lifecycle for one verification suite
//! - [`Scenario`] — One transaction, rolled back after its assertions
//! - [`Introspect`] — Read-only schema and row lookups
mod catalog;
mod data;
mod generate;
mod harness;
mod introspect;
mod literal;
mod model;
mod naming;
mod schema;
mod table;

#[cfg(test)]
mod scenarios;

pub use catalog::*;
pub use data::*;
pub use generate::*;
pub use harness::*;
pub use introspect::*;
pub use literal::*;
pub use model::*;
pub use naming::*;
pub use schema::*;
pub use table::*;

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Fixed-width code column, reserved for extensible enumerations. Always
/// populated with an empty string.
#[rustfmt::skip]
pub const CODE_VALUE:        &str = "CodeValue";
/// Short human-readable text for one enumeration item.
#[rustfmt::skip]
pub const SHORT_DESCRIPTION: &str = "ShortDescription";
/// Long-form text for one enumeration item; mirrors the short description.
#[rustfmt::skip]
pub const DESCRIPTION:       &str = "Description";
