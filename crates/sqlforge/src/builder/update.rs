//! UPDATE statement builder.

use crate::builder::{assemble, trace_statement};
use crate::clause::{Clause, SetClause};
use crate::condition::Condition;
use crate::dialect::Dialect;
use crate::error::OrmResult;
use crate::param::BindMode;
use crate::render::Renderer;
use crate::statement::SqlStatement;
use crate::value::Value;

/// Builds `Update {table} Set {pairs} Where {cond};\n`.
#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    table: String,
    set: SetClause,
    filter: Condition,
}

impl UpdateBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            set: SetClause::new(),
            filter: Condition::empty(),
        }
    }

    /// Add one SET pair. Insertion order is preserved in the SQL.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set.set(column, value);
        self
    }

    /// Replace the WHERE condition. The empty condition omits the `Where`
    /// keyword entirely.
    pub fn filter(mut self, condition: Condition) -> Self {
        self.filter = condition;
        self
    }

    /// Produce the immutable statement in parameterized mode.
    pub fn to_sql_statement(&self, dialect: &dyn Dialect) -> OrmResult<SqlStatement> {
        self.to_sql_statement_with(dialect, BindMode::default())
    }

    /// Produce the immutable statement with an explicit bind mode.
    ///
    /// Render order is SET first, then WHERE, so parameter positions follow
    /// the statement text left to right.
    pub fn to_sql_statement_with(
        &self,
        dialect: &dyn Dialect,
        mode: BindMode,
    ) -> OrmResult<SqlStatement> {
        let mut r = Renderer::new(dialect, mode);
        let set = self.set.to_sql_text(&mut r);
        let where_part = where_fragment(&self.filter, &mut r);
        let text = assemble(&[
            "Update",
            &dialect.quote_table(&self.table),
            &set,
            &where_part,
        ]);
        let statement = SqlStatement::new(text, r.finish());
        trace_statement("update", &statement);
        Ok(statement)
    }
}

/// Render `Where {cond}`, or "" for the empty condition.
pub(crate) fn where_fragment(condition: &Condition, r: &mut Renderer<'_>) -> String {
    if condition.is_empty() {
        return String::new();
    }
    format!("Where {}", condition.to_sql_text(r))
}
