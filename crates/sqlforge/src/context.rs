//! Execution context contract and row materialization.
//!
//! The core never talks to a database connection. It hands an immutable
//! [`SqlStatement`](crate::statement::SqlStatement) to an
//! [`ExecutionContext`] and gets back materialized [`Row`]s, a scalar, or an
//! affected-row count. Connection management, retries, timeouts and
//! failure policy all live behind this contract.

use crate::dialect::Dialect;
use crate::error::{OrmError, OrmResult};
use crate::statement::SqlStatement;
use crate::value::Value;

/// One materialized result row: ordered column names paired with values.
#[derive(Debug, Clone)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Row {
    pub fn new(columns: Vec<String>, values: Vec<Value>) -> OrmResult<Self> {
        if columns.len() != values.len() {
            return Err(OrmError::validation(format!(
                "row has {} columns but {} values",
                columns.len(),
                values.len()
            )));
        }
        Ok(Self { columns, values })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Look up a column by name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| &self.values[i])
    }

    /// Look up a column by name, failing with a decode error if absent.
    pub fn try_get(&self, column: &str) -> OrmResult<&Value> {
        self.get(column)
            .ok_or_else(|| OrmError::decode(column, "column not present in row"))
    }

    pub fn try_i64(&self, column: &str) -> OrmResult<i64> {
        let value = self.try_get(column)?;
        value
            .as_i64()
            .ok_or_else(|| OrmError::decode(column, format!("expected Int, got {:?}", value.kind())))
    }

    pub fn try_text(&self, column: &str) -> OrmResult<String> {
        let value = self.try_get(column)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| OrmError::decode(column, format!("expected Text, got {:?}", value.kind())))
    }

    pub fn try_bool(&self, column: &str) -> OrmResult<bool> {
        let value = self.try_get(column)?;
        value
            .as_bool()
            .ok_or_else(|| OrmError::decode(column, format!("expected Bool, got {:?}", value.kind())))
    }

    pub fn try_f64(&self, column: &str) -> OrmResult<f64> {
        let value = self.try_get(column)?;
        value
            .as_f64()
            .ok_or_else(|| OrmError::decode(column, format!("expected Float, got {:?}", value.kind())))
    }
}

/// Map a [`Row`] into a typed record.
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> OrmResult<Self>;
}

/// The narrow accept-statement/return-rows contract the core depends on.
///
/// Implementations own the connection and all failure policy; nothing at
/// this layer retries or times out. The context exposes its dialect so
/// statement builders and lazy relations can render for the engine the
/// context actually talks to.
pub trait ExecutionContext {
    /// The dialect statements issued through this context are rendered for.
    fn dialect(&self) -> &dyn Dialect;

    /// Execute a statement and return all rows.
    fn query(&self, statement: &SqlStatement) -> OrmResult<Vec<Row>>;

    /// Execute a statement and return the first column of the first row.
    fn query_scalar(&self, statement: &SqlStatement) -> OrmResult<Option<Value>> {
        let rows = self.query(statement)?;
        Ok(rows
            .into_iter()
            .next()
            .and_then(|row| row.values.into_iter().next()))
    }

    /// Execute a statement and return the affected row count.
    fn execute(&self, statement: &SqlStatement) -> OrmResult<u64>;
}
