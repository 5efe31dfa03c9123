//! # sqlforge
//!
//! A dialect-pluggable SQL statement builder with lazy relation loading.
//!
//! ## Features
//!
//! - **Composable clauses**: WHERE condition trees, SET/VALUES pairs,
//!   ORDER BY, GROUP BY and paging ranges render independently into one
//!   shared parameter collection
//! - **Pluggable dialects**: identifier quoting, parameter prefixes and
//!   paging strategies (LIMIT/OFFSET vs ROW_NUMBER windowing) per engine
//! - **Two bind modes**: parameterized placeholders by default, dialect-safe
//!   inline literals on request — chosen per statement, never global
//! - **Immutable statements**: builders produce a decoupled
//!   `SqlStatement` (text + ordered parameters); execution stays behind the
//!   narrow `ExecutionContext` contract
//! - **Lazy relations**: scalar and collection relations fetch their
//!   foreign entities at-most-once, on first read
//!
//! ## Example
//!
//! ```
//! use sqlforge::{Condition, OrderBy, Range, SqlServer, select};
//!
//! let sql = select("People")
//!     .columns(["Id", "Name"])
//!     .filter(Condition::gt("Age", 18_i64))
//!     .order_by(OrderBy::asc("Id"))
//!     .range(Range::new(3, 5)?)
//!     .to_sql_statement(&SqlServer)?;
//!
//! assert!(sql.text().contains("__rownumber__"));
//! assert_eq!(sql.params().len(), 1);
//! # Ok::<(), sqlforge::OrmError>(())
//! ```

pub mod builder;
pub mod clause;
pub mod condition;
pub mod context;
pub mod dialect;
pub mod error;
pub mod param;
pub mod relation;
pub mod render;
pub mod schema;
pub mod statement;
pub mod value;

pub use builder::{DeleteBuilder, InsertBuilder, SelectBuilder, UpdateBuilder};
pub use builder::{delete, insert, select, update};
pub use clause::{Clause, Direction, GroupBy, KeyValue, KeyValueCollection, OrderBy, Range};
pub use condition::{CompareOp, Condition, Operand, col};
pub use context::{ExecutionContext, FromRow, Row};
pub use dialect::{Dialect, Postgres, SelectFragments, SqlServer, Sqlite};
pub use error::{OrmError, OrmResult};
pub use param::{BindMode, DataParameter, ParameterCollection};
pub use relation::{CollectionRelation, RelationDef, RelationState, ScalarRelation};
pub use render::Renderer;
pub use schema::{Record, select_record};
pub use statement::{CommandKind, SqlStatement};
pub use value::{Value, ValueKind};
