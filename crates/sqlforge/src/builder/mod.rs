//! Statement builders.
//!
//! Each builder owns the clause builders relevant to its statement kind and
//! is mutable while it accumulates them. `to_sql_statement` is the single
//! production operation: it allocates one parameter collection, renders the
//! owned clauses in a fixed, statement-kind-specific order, substitutes the
//! fragments into the per-kind template, and returns an immutable
//! [`SqlStatement`](crate::statement::SqlStatement). Builders never execute
//! anything; execution belongs to the
//! [`ExecutionContext`](crate::context::ExecutionContext) collaborator.
//!
//! Statements end with `;\n`; keyword casing (`Select`, `Insert Into`,
//! `Update`, `Delete From`, `Set `, `Where`, `Group By`, `Order By`) is an
//! observable contract.

mod delete;
mod insert;
mod select;
mod update;

pub use delete::DeleteBuilder;
pub use insert::InsertBuilder;
pub use select::SelectBuilder;
pub use update::UpdateBuilder;

/// Start a SELECT against a table.
pub fn select(table: impl Into<String>) -> SelectBuilder {
    SelectBuilder::new(table)
}

/// Start an INSERT into a table.
pub fn insert(table: impl Into<String>) -> InsertBuilder {
    InsertBuilder::new(table)
}

/// Start an UPDATE of a table.
pub fn update(table: impl Into<String>) -> UpdateBuilder {
    UpdateBuilder::new(table)
}

/// Start a DELETE from a table.
pub fn delete(table: impl Into<String>) -> DeleteBuilder {
    DeleteBuilder::new(table)
}

/// Join non-empty fragments with single spaces and terminate the statement.
pub(crate) fn assemble(fragments: &[&str]) -> String {
    let mut out = String::new();
    for fragment in fragments {
        if fragment.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(fragment);
    }
    out.push_str(";\n");
    out
}

#[cfg(feature = "tracing")]
pub(crate) fn trace_statement(kind: &'static str, statement: &crate::statement::SqlStatement) {
    tracing::debug!(
        sql = statement.text(),
        params = statement.params().len(),
        "built {kind} statement"
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn trace_statement(_kind: &'static str, _statement: &crate::statement::SqlStatement) {}

#[cfg(test)]
mod tests;
