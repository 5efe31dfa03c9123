//! Data parameters and the ordered collection accumulated during a build.

use crate::value::{Value, ValueKind};

/// How clause builders render the values they introduce.
///
/// The mode is a rendering argument passed into each `to_sql_statement`
/// call, never global state: the same clause tree can render differently
/// depending on the mode it is rendered with. The two modes are mutually
/// exclusive within one statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindMode {
    /// Every value becomes a named placeholder plus a collection entry.
    #[default]
    Parameterized,
    /// Every value is serialized to a dialect-correct literal; the
    /// collection stays empty.
    Inline,
}

/// A single named parameter binding. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct DataParameter {
    name: String,
    value: Value,
    kind: ValueKind,
}

impl DataParameter {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        let kind = value.kind();
        Self {
            name: name.into(),
            value,
            kind,
        }
    }

    /// Placeholder name including the dialect prefix, e.g. `@Age_0`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}

/// Ordered collection of [`DataParameter`]s.
///
/// Insertion order defines wire position for positional binding. Names are
/// unique within one statement because every generated name embeds the
/// collection length at the time it was added (`{prefix}{column}_{index}`).
#[derive(Debug, Clone, Default)]
pub struct ParameterCollection {
    items: Vec<DataParameter>,
}

impl ParameterCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. The current [`len`](Self::len) is the positional
    /// index the next generated name should carry.
    pub fn add(&mut self, parameter: DataParameter) {
        self.items.push(parameter);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DataParameter> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataParameter> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a ParameterCollection {
    type Item = &'a DataParameter;
    type IntoIter = std::slice::Iter<'a, DataParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
