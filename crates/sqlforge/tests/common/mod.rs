//! Shared test fixtures: a recording execution context and a small record
//! type.

use sqlforge::{
    Dialect, ExecutionContext, FromRow, OrmResult, Record, RelationDef, Row, SqlStatement, Value,
};
use std::cell::RefCell;
use std::collections::VecDeque;

/// An execution context that records every statement it receives and
/// replays canned row responses.
pub struct RecordingContext<D> {
    dialect: D,
    statements: RefCell<Vec<String>>,
    responses: RefCell<VecDeque<Vec<Row>>>,
}

impl<D: Dialect> RecordingContext<D> {
    pub fn new(dialect: D) -> Self {
        Self {
            dialect,
            statements: RefCell::new(Vec::new()),
            responses: RefCell::new(VecDeque::new()),
        }
    }

    /// Queue the rows the next query should return.
    pub fn push_response(&self, rows: Vec<Row>) {
        self.responses.borrow_mut().push_back(rows);
    }

    pub fn statement_count(&self) -> usize {
        self.statements.borrow().len()
    }

    pub fn last_statement(&self) -> Option<String> {
        self.statements.borrow().last().cloned()
    }
}

impl<D: Dialect> ExecutionContext for RecordingContext<D> {
    fn dialect(&self) -> &dyn Dialect {
        &self.dialect
    }

    fn query(&self, statement: &SqlStatement) -> OrmResult<Vec<Row>> {
        self.statements
            .borrow_mut()
            .push(statement.text().to_string());
        Ok(self.responses.borrow_mut().pop_front().unwrap_or_default())
    }

    fn execute(&self, statement: &SqlStatement) -> OrmResult<u64> {
        self.statements
            .borrow_mut()
            .push(statement.text().to_string());
        Ok(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i64,
    pub name: String,
}

impl FromRow for Person {
    fn from_row(row: &Row) -> OrmResult<Self> {
        Ok(Self {
            id: row.try_i64("Id")?,
            name: row.try_text("Name")?,
        })
    }
}

impl Record for Person {
    const TABLE: &'static str = "People";
    const COLUMNS: &'static [&'static str] = &["Id", "Name"];

    fn relation(name: &str) -> Option<RelationDef> {
        match name {
            "Computers" => Some(PERSON_COMPUTERS),
            _ => None,
        }
    }
}

pub const PERSON_COMPUTERS: RelationDef = RelationDef {
    name: "Computers",
    table: "PCs",
    key_column: "Person_Id",
    columns: &["Id", "Name", "Person_Id"],
};

pub fn person_row(id: i64, name: &str) -> Row {
    Row::new(
        vec!["Id".into(), "Name".into()],
        vec![Value::Int(id), Value::from(name)],
    )
    .unwrap()
}
