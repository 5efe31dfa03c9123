//! DELETE statement builder.

use crate::builder::update::where_fragment;
use crate::builder::{assemble, trace_statement};
use crate::condition::Condition;
use crate::dialect::Dialect;
use crate::error::OrmResult;
use crate::param::BindMode;
use crate::render::Renderer;
use crate::statement::SqlStatement;

/// Builds `Delete From {table} Where {cond};\n`.
#[derive(Debug, Clone)]
pub struct DeleteBuilder {
    table: String,
    filter: Condition,
}

impl DeleteBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            filter: Condition::empty(),
        }
    }

    /// Replace the WHERE condition. The empty condition omits the `Where`
    /// keyword entirely, which deletes every row.
    pub fn filter(mut self, condition: Condition) -> Self {
        self.filter = condition;
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
        let where_part = where_fragment(&self.filter, &mut r);
        let text = assemble(&[
            "Delete From",
            &dialect.quote_table(&self.table),
            &where_part,
        ]);
        let statement = SqlStatement::new(text, r.finish());
        trace_statement("delete", &statement);
        Ok(statement)
    }
}
