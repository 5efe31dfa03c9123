//! Immutable executable statements.

use crate::dialect::Dialect;
use crate::error::{OrmError, OrmResult};
use crate::param::{DataParameter, ParameterCollection};
use crate::value::Value;

/// How the command text should be interpreted by the execution context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandKind {
    #[default]
    Text,
    StoredProcedure,
}

/// An immutable pair of command text and parameter collection, tagged with
/// a [`CommandKind`]. This is the unit exchanged between statement builders
/// and the execution context; once produced it is safe to hand across
/// threads.
#[derive(Debug, Clone)]
pub struct SqlStatement {
    kind: CommandKind,
    text: String,
    params: ParameterCollection,
}

impl SqlStatement {
    /// Create a text statement.
    pub fn new(text: impl Into<String>, params: ParameterCollection) -> Self {
        Self {
            kind: CommandKind::Text,
            text: text.into(),
            params,
        }
    }

    /// Create a stored-procedure call.
    pub fn procedure(name: impl Into<String>, params: ParameterCollection) -> Self {
        Self {
            kind: CommandKind::StoredProcedure,
            text: name.into(),
            params,
        }
    }

    /// Build a statement from hand-written SQL with `?` placeholders,
    /// pairing each placeholder with the next value in order.
    ///
    /// Placeholders inside single-quoted literals are left untouched, so
    /// `Name Like '%?%'` survives intact. Generated parameters are named
    /// `{prefix}p{index}`. The number of placeholders outside literals must
    /// match the number of values.
    pub fn parameterize(
        dialect: &dyn Dialect,
        text: &str,
        values: impl IntoIterator<Item = Value>,
    ) -> OrmResult<Self> {
        let mut values = values.into_iter();
        let mut out = String::with_capacity(text.len());
        let mut params = ParameterCollection::new();
        let mut in_literal = false;

        for ch in text.chars() {
            match ch {
                '\'' => {
                    in_literal = !in_literal;
                    out.push(ch);
                }
                '?' if !in_literal => {
                    let Some(value) = values.next() else {
                        return Err(OrmError::validation(
                            "more '?' placeholders than values",
                        ));
                    };
                    let name = format!("{}p{}", dialect.param_prefix(), params.len());
                    out.push_str(&name);
                    params.add(DataParameter::new(name, value));
                }
                _ => out.push(ch),
            }
        }

        if values.next().is_some() {
            return Err(OrmError::validation("more values than '?' placeholders"));
        }

        Ok(Self::new(out, params))
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    /// The rendered command text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The ordered parameter bindings.
    pub fn params(&self) -> &ParameterCollection {
        &self.params
    }
}
