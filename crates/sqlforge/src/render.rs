//! Shared rendering context threaded through clause builders.

use crate::dialect::Dialect;
use crate::param::{BindMode, DataParameter, ParameterCollection};
use crate::value::Value;

/// Build-time rendering state: the target dialect, the bind mode, and the
/// parameter collection shared by every clause of one statement.
///
/// A `Renderer` lives for exactly one `to_sql_statement` call, which is what
/// keeps the two bind modes from ever mixing within a statement.
pub struct Renderer<'a> {
    dialect: &'a dyn Dialect,
    mode: BindMode,
    params: ParameterCollection,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect, mode: BindMode) -> Self {
        Self {
            dialect,
            mode,
            params: ParameterCollection::new(),
        }
    }

    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect
    }

    pub fn mode(&self) -> BindMode {
        self.mode
    }

    /// Render a value position in generated SQL.
    ///
    /// Parameterized mode yields a placeholder named
    /// `{prefix}{column}_{index}` (index is the collection length at this
    /// moment, so names stay unique and positional) and registers the value.
    /// Inline mode yields a dialect-correct literal and registers nothing.
    pub fn value(&mut self, column: &str, value: &Value) -> String {
        match self.mode {
            BindMode::Parameterized => {
                let name = format!(
                    "{}{}_{}",
                    self.dialect.param_prefix(),
                    column,
                    self.params.len()
                );
                self.params
                    .add(DataParameter::new(name.clone(), value.clone()));
                name
            }
            BindMode::Inline => self.dialect.inline_literal(value),
        }
    }

    /// Consume the renderer and hand back the accumulated parameters.
    pub fn finish(self) -> ParameterCollection {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::SqlServer;

    #[test]
    fn parameterized_names_embed_position() {
        let mut r = Renderer::new(&SqlServer, BindMode::Parameterized);
        assert_eq!(r.value("Age", &Value::Int(18)), "@Age_0");
        assert_eq!(r.value("Age", &Value::Int(23)), "@Age_1");

        let params = r.finish();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get(0).unwrap().name(), "@Age_0");
        assert_eq!(params.get(1).unwrap().name(), "@Age_1");
    }

    #[test]
    fn inline_registers_nothing() {
        let mut r = Renderer::new(&SqlServer, BindMode::Inline);
        assert_eq!(r.mode(), BindMode::Inline);
        assert_eq!(r.value("Name", &Value::from("abc")), "'abc'");
        assert!(r.finish().is_empty());
    }
}
