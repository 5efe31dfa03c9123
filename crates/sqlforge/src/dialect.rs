//! Database dialect strategies.
//!
//! A [`Dialect`] translates abstract statement structure into concrete SQL
//! text for one engine family: identifier quoting, parameter-name prefixes,
//! inline literal shapes, and the paging strategy for bounded range
//! selects. Dialects are stateless and safe to share across threads; adding
//! an engine means adding an implementation here, never touching clause or
//! statement builders.

use crate::error::{OrmError, OrmResult};
use crate::value::{Value, hex, quote_literal};

/// The rendered pieces of a SELECT, handed to the dialect when a bounded
/// range must be applied.
///
/// `where_clause`, `group_by` and `order_by` carry their leading keyword
/// (`Where ...`, `Group By ...`, `Order By ...`) or are empty.
#[derive(Debug, Clone, Copy)]
pub struct SelectFragments<'a> {
    pub columns: &'a str,
    pub table: &'a str,
    pub where_clause: &'a str,
    pub group_by: &'a str,
    pub order_by: &'a str,
}

/// Per-engine SQL rendering rules.
pub trait Dialect: Send + Sync {
    /// Engine family name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Quote a column name.
    fn quote_column(&self, name: &str) -> String;

    /// Quote a table name.
    fn quote_table(&self, name: &str) -> String {
        self.quote_column(name)
    }

    /// Prefix for generated parameter names (`@`, `:`, ...).
    fn param_prefix(&self) -> &'static str;

    /// Render a value as a dialect-correct inline literal.
    ///
    /// Text, uuid, date and timestamp escaping is uniform across dialects
    /// (single quotes doubled); only bytes and bool shapes vary per engine.
    fn inline_literal(&self, value: &Value) -> String {
        value.default_literal()
    }

    /// Render a SELECT bounded to the inclusive, 1-based row positions
    /// `start..=end`.
    fn ranged_select(
        &self,
        parts: &SelectFragments<'_>,
        start: i64,
        end: i64,
    ) -> OrmResult<String>;
}

/// Bracket-quote an identifier, escaping `]` as `]]`.
fn bracket_quote(name: &str) -> String {
    format!("[{}]", name.replace(']', "]]"))
}

/// Range rendering for engines with a native `Limit n Offset m` clause.
fn limit_offset_select(parts: &SelectFragments<'_>, start: i64, end: i64) -> String {
    let mut out = format!("Select {} From {}", parts.columns, parts.table);
    for fragment in [parts.where_clause, parts.group_by, parts.order_by] {
        if !fragment.is_empty() {
            out.push(' ');
            out.push_str(fragment);
        }
    }
    out.push_str(&format!(" Limit {} Offset {}", end - start + 1, start - 1));
    out
}

/// Microsoft SQL Server: bracket quoting, `@` parameters, ROW_NUMBER paging.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlServer;

impl Dialect for SqlServer {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn quote_column(&self, name: &str) -> String {
        bracket_quote(name)
    }

    fn param_prefix(&self) -> &'static str {
        "@"
    }

    fn inline_literal(&self, value: &Value) -> String {
        match value {
            Value::Bool(true) => "1".to_string(),
            Value::Bool(false) => "0".to_string(),
            Value::Bytes(b) => format!("0x{}", hex(b)),
            other => other.default_literal(),
        }
    }

    /// Wraps the inner query in a derived table that adds a computed
    /// `__rownumber__` column ordered per the original ORDER BY, then
    /// filters the bounds in an outer WHERE. The ORDER BY moves into the
    /// window; the outer query does not re-order.
    fn ranged_select(
        &self,
        parts: &SelectFragments<'_>,
        start: i64,
        end: i64,
    ) -> OrmResult<String> {
        if parts.order_by.is_empty() {
            return Err(OrmError::validation(
                "a ranged select on SqlServer requires an Order By",
            ));
        }

        let mut inner = format!(
            "Select {}, ROW_NUMBER() Over ({}) As __rownumber__ From {}",
            parts.columns, parts.order_by, parts.table
        );
        for fragment in [parts.where_clause, parts.group_by] {
            if !fragment.is_empty() {
                inner.push(' ');
                inner.push_str(fragment);
            }
        }

        Ok(format!(
            "Select {} From ({}) As T Where T.__rownumber__ >= {} And T.__rownumber__ <= {}",
            parts.columns, inner, start, end
        ))
    }
}

/// SQLite: bracket quoting, `@` parameters, native LIMIT/OFFSET.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn quote_column(&self, name: &str) -> String {
        bracket_quote(name)
    }

    fn param_prefix(&self) -> &'static str {
        "@"
    }

    fn ranged_select(
        &self,
        parts: &SelectFragments<'_>,
        start: i64,
        end: i64,
    ) -> OrmResult<String> {
        Ok(limit_offset_select(parts, start, end))
    }
}

/// PostgreSQL: double-quote quoting, `:` parameters, native LIMIT/OFFSET.
#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn quote_column(&self, name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }

    fn param_prefix(&self) -> &'static str {
        ":"
    }

    fn inline_literal(&self, value: &Value) -> String {
        match value {
            Value::Bytes(b) => quote_literal(&format!("\\x{}", hex(b))),
            other => other.default_literal(),
        }
    }

    fn ranged_select(
        &self,
        parts: &SelectFragments<'_>,
        start: i64,
        end: i64,
    ) -> OrmResult<String> {
        Ok(limit_offset_select(parts, start, end))
    }
}
