//! SELECT statement builder.

use crate::builder::update::where_fragment;
use crate::builder::{assemble, trace_statement};
use crate::clause::{Clause, GroupBy, OrderBy, Range};
use crate::condition::Condition;
use crate::dialect::{Dialect, SelectFragments};
use crate::error::OrmResult;
use crate::param::BindMode;
use crate::render::Renderer;
use crate::statement::SqlStatement;

/// Builds `Select {cols} From {table} Where .. Group By .. Order By ..;\n`,
/// delegating to the dialect's paging strategy when a [`Range`] is set.
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    table: String,
    columns: Vec<String>,
    filter: Condition,
    group: Option<GroupBy>,
    order: Option<OrderBy>,
    range: Option<Range>,
}

impl SelectBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            filter: Condition::empty(),
            group: None,
            order: None,
            range: None,
        }
    }

    /// Set the column list. Without one, the select renders `*`.
    pub fn columns(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Append one column.
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Replace the WHERE condition. The empty condition omits the `Where`
    /// keyword entirely.
    pub fn filter(mut self, condition: Condition) -> Self {
        self.filter = condition;
        self
    }

    /// Set the grouping. Applied before any row-numbering or limiting the
    /// dialect's paging strategy adds.
    pub fn group_by(mut self, group: impl Into<Option<GroupBy>>) -> Self {
        self.group = group.into();
        self
    }

    /// Set the ordering. `None` (for example from
    /// [`OrderBy::parse`](crate::clause::OrderBy::parse) on empty input)
    /// omits ORDER BY.
    pub fn order_by(mut self, order: impl Into<Option<OrderBy>>) -> Self {
        self.order = order.into();
        self
    }

    /// Bound the result to the inclusive, 1-based row positions of `range`.
    pub fn range(mut self, range: Range) -> Self {
        self.range = Some(range);
        self
    }

    /// Produce the immutable statement in parameterized mode.
    pub fn to_sql_statement(&self, dialect: &dyn Dialect) -> OrmResult<SqlStatement> {
        self.to_sql_statement_with(dialect, BindMode::default())
    }

    /// Produce the immutable statement with an explicit bind mode.
    ///
    /// Clause render order is WHERE, GROUP BY, ORDER BY, so parameter
    /// positions follow the statement text left to right.
    pub fn to_sql_statement_with(
        &self,
        dialect: &dyn Dialect,
        mode: BindMode,
    ) -> OrmResult<SqlStatement> {
        let mut r = Renderer::new(dialect, mode);

        let columns = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns
                .iter()
                .map(|c| dialect.quote_column(c))
                .collect::<Vec<_>>()
                .join(",")
        };
        let table = dialect.quote_table(&self.table);
        let where_part = where_fragment(&self.filter, &mut r);
        let group_part = match &self.group {
            Some(group) => group.to_sql_text(&mut r),
            None => String::new(),
        };
        let order_part = match &self.order {
            Some(order) => order.to_sql_text(&mut r),
            None => String::new(),
        };

        let text = match &self.range {
            Some(range) => {
                let parts = SelectFragments {
                    columns: &columns,
                    table: &table,
                    where_clause: &where_part,
                    group_by: &group_part,
                    order_by: &order_part,
                };
                let body = dialect.ranged_select(&parts, range.start, range.end)?;
                format!("{body};\n")
            }
            None => {
                let head = format!("Select {columns}");
                assemble(&[&head, "From", &table, &where_part, &group_part, &order_part])
            }
        };

        let statement = SqlStatement::new(text, r.finish());
        trace_statement("select", &statement);
        Ok(statement)
    }
}
