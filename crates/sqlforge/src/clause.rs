//! Clause builders: SET, VALUES, ORDER BY, GROUP BY and RANGE.
//!
//! Each clause converts its in-memory representation into dialect-specific
//! SQL text while appending any introduced values to the shared renderer.
//! Empty clauses render as empty strings; they never fail.

use crate::error::{OrmError, OrmResult};
use crate::render::Renderer;
use crate::value::{Value, ValueKind};

/// A clause that can render itself into a statement being built.
pub trait Clause {
    fn to_sql_text(&self, r: &mut Renderer<'_>) -> String;
}

/// One (column, value) pair of a SET or VALUES clause.
#[derive(Debug, Clone)]
pub struct KeyValue {
    column: String,
    value: Value,
    kind: ValueKind,
}

impl KeyValue {
    pub fn new(column: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        let kind = value.kind();
        Self {
            column: column.into(),
            value,
            kind,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}

/// Ordered collection of [`KeyValue`] pairs; insertion order is preserved
/// and observable in the generated SQL.
#[derive(Debug, Clone, Default)]
pub struct KeyValueCollection {
    items: Vec<KeyValue>,
}

impl KeyValueCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: KeyValue) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeyValue> {
        self.items.iter()
    }
}

/// The `Set col=value,...` clause of an UPDATE.
#[derive(Debug, Clone, Default)]
pub struct SetClause {
    items: KeyValueCollection,
}

impl SetClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.items.push(KeyValue::new(column, value));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Clause for SetClause {
    fn to_sql_text(&self, r: &mut Renderer<'_>) -> String {
        // Guarded: an empty collection yields "" rather than a trimming error.
        if self.items.is_empty() {
            return String::new();
        }
        let pairs: Vec<String> = self
            .items
            .iter()
            .map(|kv| {
                let rhs = r.value(kv.column(), kv.value());
                format!("{}={}", r.dialect().quote_column(kv.column()), rhs)
            })
            .collect();
        format!("Set {}", pairs.join(","))
    }
}

/// The `(cols) Values (vals)` clause of an INSERT.
#[derive(Debug, Clone, Default)]
pub struct ValuesClause {
    items: KeyValueCollection,
}

impl ValuesClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.items.push(KeyValue::new(column, value));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Clause for ValuesClause {
    fn to_sql_text(&self, r: &mut Renderer<'_>) -> String {
        if self.items.is_empty() {
            return String::new();
        }
        let mut columns = Vec::with_capacity(self.items.len());
        let mut values = Vec::with_capacity(self.items.len());
        for kv in self.items.iter() {
            columns.push(r.dialect().quote_column(kv.column()));
            values.push(r.value(kv.column(), kv.value()));
        }
        format!("({}) Values ({})", columns.join(","), values.join(","))
    }
}

/// Sort direction of one ORDER BY item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// An ordered sequence of (column, direction) pairs.
///
/// Both construction paths — [`parse`](Self::parse) and the explicit
/// [`asc`](Self::asc)/[`desc`](Self::desc) builders — render identical SQL
/// for equivalent input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    items: Vec<(String, Direction)>,
}

impl OrderBy {
    /// Start an ordering with one ascending column.
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            items: vec![(column.into(), Direction::Asc)],
        }
    }

    /// Start an ordering with one descending column.
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            items: vec![(column.into(), Direction::Desc)],
        }
    }

    pub fn then_asc(mut self, column: impl Into<String>) -> Self {
        self.items.push((column.into(), Direction::Asc));
        self
    }

    pub fn then_desc(mut self, column: impl Into<String>) -> Self {
        self.items.push((column.into(), Direction::Desc));
        self
    }

    /// Parse a comma-separated `column [desc]` ordering string.
    ///
    /// Parsing is lenient: segments are trimmed, empty segments are
    /// skipped, the `desc`/`asc` suffix is case-insensitive, and anything
    /// after it is ignored. Empty or all-whitespace input is not an error —
    /// it yields `None`, meaning "omit ORDER BY".
    pub fn parse(text: &str) -> Option<Self> {
        let mut items = Vec::new();
        for segment in text.split(',') {
            let mut tokens = segment.split_whitespace();
            let Some(column) = tokens.next() else {
                continue;
            };
            let direction = match tokens.next() {
                Some(t) if t.eq_ignore_ascii_case("desc") => Direction::Desc,
                _ => Direction::Asc,
            };
            items.push((column.to_string(), direction));
        }
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }
}

impl Clause for OrderBy {
    fn to_sql_text(&self, r: &mut Renderer<'_>) -> String {
        if self.items.is_empty() {
            return String::new();
        }
        let items: Vec<String> = self
            .items
            .iter()
            .map(|(column, direction)| {
                format!("{} {}", r.dialect().quote_column(column), direction.as_sql())
            })
            .collect();
        format!("Order By {}", items.join(", "))
    }
}

/// The `Group By col,...` clause of a SELECT.
#[derive(Debug, Clone, Default)]
pub struct GroupBy {
    columns: Vec<String>,
}

impl GroupBy {
    pub fn of(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}

impl Clause for GroupBy {
    fn to_sql_text(&self, r: &mut Renderer<'_>) -> String {
        if self.columns.is_empty() {
            return String::new();
        }
        let columns: Vec<String> = self
            .columns
            .iter()
            .map(|c| r.dialect().quote_column(c))
            .collect();
        format!("Group By {}", columns.join(","))
    }
}

/// Inclusive, 1-based row bounds delegated to the dialect's paging strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: i64,
    pub end: i64,
}

impl Range {
    pub fn new(start: i64, end: i64) -> OrmResult<Self> {
        if start < 1 {
            return Err(OrmError::validation(format!(
                "range start must be >= 1, got {start}"
            )));
        }
        if end < start {
            return Err(OrmError::validation(format!(
                "range end must be >= start, got {start}..{end}"
            )));
        }
        Ok(Self { start, end })
    }
}
