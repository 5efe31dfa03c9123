//! WHERE condition trees.
//!
//! This module provides [`Condition`], an immutable binary expression tree
//! over column references, literal values and logical operators. Composition
//! is pure: `and`/`or` build new nodes and never mutate their operands, so a
//! condition can be reused across statements. [`Condition::empty`] is the
//! neutral element — it contributes no predicate text and no parameters, and
//! statement builders omit the `Where` keyword for it entirely.
//!
//! # Example
//! ```
//! use sqlforge::condition::{Condition, col};
//!
//! // ([Age] > @Age_0) And ([Name] = @Name_1)
//! let c = Condition::gt("Age", 18_i64).and(Condition::eq("Name", "Tom"));
//!
//! // Column-to-column comparison, never parameterized: [Age] > [Count]
//! let c = Condition::gt("Age", col("Count"));
//! # let _ = c;
//! ```

use crate::render::Renderer;
use crate::value::Value;
use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

/// Comparison operator of a leaf condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    Like,
}

impl CompareOp {
    fn as_sql(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Like => "Like",
        }
    }
}

/// Right-hand side of a comparison: a literal value or a column reference.
#[derive(Debug, Clone)]
pub enum Operand {
    Value(Value),
    Column(String),
}

/// Reference another column as the right-hand side of a comparison.
///
/// A column-to-column comparison never contributes a parameter, in either
/// bind mode, because both sides are column references.
pub fn col(name: impl Into<String>) -> Operand {
    Operand::Column(name.into())
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Value(v)
    }
}

macro_rules! operand_from_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Operand {
                fn from(v: $t) -> Self {
                    Operand::Value(v.into())
                }
            }
        )*
    };
}

operand_from_value!(bool, i32, i64, f64, &str, String, Vec<u8>, Uuid, NaiveDate, NaiveDateTime);

#[derive(Debug, Clone)]
enum CondInner {
    Empty,
    Compare {
        column: String,
        op: CompareOp,
        rhs: Operand,
    },
    And(Box<Condition>, Box<Condition>),
    Or(Box<Condition>, Box<Condition>),
}

/// An immutable WHERE condition tree.
#[derive(Debug, Clone)]
pub struct Condition(CondInner);

impl Condition {
    /// The neutral condition: renders as empty text, binds nothing, and is
    /// the identity for [`and`](Self::and) and [`or`](Self::or).
    pub fn empty() -> Self {
        Condition(CondInner::Empty)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.0, CondInner::Empty)
    }

    /// Create a leaf comparison.
    pub fn cmp(column: impl Into<String>, op: CompareOp, rhs: impl Into<Operand>) -> Self {
        Condition(CondInner::Compare {
            column: column.into(),
            op,
            rhs: rhs.into(),
        })
    }

    /// column = rhs
    pub fn eq(column: impl Into<String>, rhs: impl Into<Operand>) -> Self {
        Self::cmp(column, CompareOp::Eq, rhs)
    }

    /// column <> rhs
    pub fn ne(column: impl Into<String>, rhs: impl Into<Operand>) -> Self {
        Self::cmp(column, CompareOp::Ne, rhs)
    }

    /// column > rhs
    pub fn gt(column: impl Into<String>, rhs: impl Into<Operand>) -> Self {
        Self::cmp(column, CompareOp::Gt, rhs)
    }

    /// column >= rhs
    pub fn ge(column: impl Into<String>, rhs: impl Into<Operand>) -> Self {
        Self::cmp(column, CompareOp::Ge, rhs)
    }

    /// column < rhs
    pub fn lt(column: impl Into<String>, rhs: impl Into<Operand>) -> Self {
        Self::cmp(column, CompareOp::Lt, rhs)
    }

    /// column <= rhs
    pub fn le(column: impl Into<String>, rhs: impl Into<Operand>) -> Self {
        Self::cmp(column, CompareOp::Le, rhs)
    }

    /// column Like rhs
    pub fn like(column: impl Into<String>, rhs: impl Into<Operand>) -> Self {
        Self::cmp(column, CompareOp::Like, rhs)
    }

    /// Combine two conditions with `And`, producing a new node.
    ///
    /// An empty operand is the identity: the other operand is returned
    /// unchanged instead of wrapping it in a one-sided `And`.
    pub fn and(self, other: Condition) -> Condition {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Condition(CondInner::And(Box::new(self), Box::new(other)))
    }

    /// Combine two conditions with `Or`, producing a new node.
    pub fn or(self, other: Condition) -> Condition {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Condition(CondInner::Or(Box::new(self), Box::new(other)))
    }

    /// Render this condition. Internal nodes parenthesize both operands so
    /// correctness never depends on operator precedence; the empty
    /// condition renders as "".
    pub fn to_sql_text(&self, r: &mut Renderer<'_>) -> String {
        match &self.0 {
            CondInner::Empty => String::new(),
            CondInner::Compare { column, op, rhs } => {
                let lhs = r.dialect().quote_column(column);
                let rhs = match rhs {
                    Operand::Column(c) => r.dialect().quote_column(c),
                    Operand::Value(v) => r.value(column, v),
                };
                format!("{} {} {}", lhs, op.as_sql(), rhs)
            }
            CondInner::And(l, rt) => {
                format!("({}) And ({})", l.to_sql_text(r), rt.to_sql_text(r))
            }
            CondInner::Or(l, rt) => {
                format!("({}) Or ({})", l.to_sql_text(r), rt.to_sql_text(r))
            }
        }
    }
}
