//! Lazy relation loading against an in-memory execution context.
//!
//! Run with: cargo run --example lazy_relations -p sqlforge

use sqlforge::{
    CollectionRelation, Dialect, ExecutionContext, FromRow, OrmError, OrmResult, RelationDef, Row,
    SqlServer, SqlStatement, Value,
};
use std::cell::{Cell, RefCell};
use std::sync::Arc;

/// A toy context that serves canned rows and counts queries.
struct InMemoryContext {
    dialect: SqlServer,
    rows: RefCell<Vec<Row>>,
    queries: Cell<usize>,
}

impl InMemoryContext {
    fn new(rows: Vec<Row>) -> Self {
        Self {
            dialect: SqlServer,
            rows: RefCell::new(rows),
            queries: Cell::new(0),
        }
    }
}

impl ExecutionContext for InMemoryContext {
    fn dialect(&self) -> &dyn Dialect {
        &self.dialect
    }

    fn query(&self, statement: &SqlStatement) -> OrmResult<Vec<Row>> {
        self.queries.set(self.queries.get() + 1);
        println!("issued: {}", statement.text().trim_end());
        Ok(self.rows.borrow().clone())
    }

    fn execute(&self, _statement: &SqlStatement) -> OrmResult<u64> {
        Ok(0)
    }
}

#[derive(Debug)]
struct Computer {
    name: String,
}

impl FromRow for Computer {
    fn from_row(row: &Row) -> OrmResult<Self> {
        Ok(Self {
            name: row.try_text("Name")?,
        })
    }
}

const PERSON_COMPUTERS: RelationDef = RelationDef {
    name: "Computers",
    table: "PCs",
    key_column: "Person_Id",
    columns: &["Id", "Name", "Person_Id"],
};

fn main() -> Result<(), OrmError> {
    let rows = vec![
        Row::new(
            vec!["Id".into(), "Name".into(), "Person_Id".into()],
            vec![Value::Int(1), Value::from("IBM"), Value::Int(2)],
        )?,
        Row::new(
            vec!["Id".into(), "Name".into(), "Person_Id".into()],
            vec![Value::Int(2), Value::from("DELL"), Value::Int(2)],
        )?,
    ];
    let context = Arc::new(InMemoryContext::new(rows));

    let mut computers: CollectionRelation<Computer> =
        CollectionRelation::new(PERSON_COMPUTERS, 2_i64);
    computers.attach(context.clone());

    // Nothing has been fetched yet.
    assert!(!computers.is_loaded());
    assert_eq!(context.queries.get(), 0);

    // First read issues exactly one select.
    for computer in computers.get()? {
        println!("loaded: {}", computer.name);
    }
    assert_eq!(context.queries.get(), 1);

    // Repeated reads serve the cache.
    println!("cached: {} computers", computers.get()?.len());
    assert_eq!(context.queries.get(), 1);

    Ok(())
}
