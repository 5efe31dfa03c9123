//! Compile-time schema contract.
//!
//! The mapping layer describes each record type explicitly — table name,
//! column list, named relations — instead of discovering it at runtime.
//! The core consumes these as plain data.

use crate::builder::{SelectBuilder, select};
use crate::context::FromRow;
use crate::relation::RelationDef;

/// Implemented per record type by the mapping layer.
pub trait Record: FromRow {
    /// Table the record maps to.
    const TABLE: &'static str;

    /// Columns selected when materializing the record, in declaration
    /// order.
    const COLUMNS: &'static [&'static str];

    /// Look up a named relation on this record type.
    fn relation(name: &str) -> Option<RelationDef> {
        let _ = name;
        None
    }
}

/// Start a SELECT over a record's table and columns.
pub fn select_record<R: Record>() -> SelectBuilder {
    select(R::TABLE).columns(R::COLUMNS.iter().copied())
}
