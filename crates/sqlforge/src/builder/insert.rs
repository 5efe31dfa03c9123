//! INSERT statement builder.

use crate::builder::{assemble, trace_statement};
use crate::clause::{Clause, ValuesClause};
use crate::dialect::Dialect;
use crate::error::OrmResult;
use crate::param::BindMode;
use crate::render::Renderer;
use crate::statement::SqlStatement;
use crate::value::Value;

/// Builds `Insert Into {table} ({cols}) Values ({vals});\n`.
#[derive(Debug, Clone)]
pub struct InsertBuilder {
    table: String,
    values: ValuesClause,
}

impl InsertBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            values: ValuesClause::new(),
        }
    }

    /// Add one column value. Insertion order is preserved in the SQL.
    pub fn value(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.add(column, value);
        self
    }

    /// Produce the immutable statement in parameterized mode.
    pub fn to_sql_statement(&self, dialect: &dyn Dialect) -> OrmResult<SqlStatement> {
        self.to_sql_statement_with(dialect, BindMode::default())
    }

    /// Produce the immutable statement with an explicit bind mode.
    pub fn to_sql_statement_with(
        &self,
        dialect: &dyn Dialect,
        mode: BindMode,
    ) -> OrmResult<SqlStatement> {
        let mut r = Renderer::new(dialect, mode);
        let values = self.values.to_sql_text(&mut r);
        let text = assemble(&["Insert Into", &dialect.quote_table(&self.table), &values]);
        let statement = SqlStatement::new(text, r.finish());
        trace_statement("insert", &statement);
        Ok(statement)
    }
}
