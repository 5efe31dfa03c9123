//! Lazy relations.
//!
//! A relation wraps a not-yet-fetched related entity
//! ([`ScalarRelation`]) or entity collection ([`CollectionRelation`]).
//! The first read while [`RelationState::NotLoaded`] issues exactly one
//! SELECT through the attached execution context, caches the result, and
//! clears the context reference — the instance is inert afterwards.
//! Writing a value directly marks the relation loaded without querying,
//! for callers that already hold the related entity.
//!
//! Relations are deliberately not thread-safe: concurrent first reads may
//! both observe `NotLoaded` and load twice (last write wins). Callers
//! needing concurrent safety serialize access externally.

use crate::builder::select;
use crate::condition::Condition;
use crate::context::{ExecutionContext, FromRow};
use crate::error::{OrmError, OrmResult};
use crate::statement::SqlStatement;
use crate::value::Value;
use std::sync::Arc;

/// Description of a named relation, supplied by the mapping layer: which
/// foreign table to fetch, which column matches the owner's key, and which
/// columns to select.
#[derive(Debug, Clone, Copy)]
pub struct RelationDef {
    pub name: &'static str,
    pub table: &'static str,
    pub key_column: &'static str,
    pub columns: &'static [&'static str],
}

/// Load state of a relation. Transitions `NotLoaded` → `Loaded` exactly
/// once per instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationState<V> {
    NotLoaded,
    Loaded(V),
}

impl<V> RelationState<V> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, RelationState::Loaded(_))
    }
}

fn fetch_statement(
    def: &RelationDef,
    owner_key: &Value,
    context: &dyn ExecutionContext,
) -> OrmResult<SqlStatement> {
    select(def.table)
        .columns(def.columns.iter().copied())
        .filter(Condition::eq(def.key_column, owner_key.clone()))
        .to_sql_statement(context.dialect())
}

fn detached(def: &RelationDef) -> OrmError {
    OrmError::validation(format!(
        "relation '{}' read before an execution context was attached",
        def.name
    ))
}

/// A lazily loaded single related entity (one-to-one / belongs-to).
pub struct ScalarRelation<T> {
    def: RelationDef,
    owner_key: Value,
    context: Option<Arc<dyn ExecutionContext>>,
    state: RelationState<Option<T>>,
}

impl<T: FromRow> ScalarRelation<T> {
    /// Create a not-loaded relation for the owner identified by
    /// `owner_key`.
    pub fn new(def: RelationDef, owner_key: impl Into<Value>) -> Self {
        Self {
            def,
            owner_key: owner_key.into(),
            context: None,
            state: RelationState::NotLoaded,
        }
    }

    /// Attach the execution context the first read will fetch through.
    pub fn attach(&mut self, context: Arc<dyn ExecutionContext>) {
        self.context = Some(context);
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    /// Read the related entity, fetching it on first access.
    ///
    /// Returns `None` when the foreign row does not exist. Repeated reads
    /// return the cached value with no further I/O.
    pub fn get(&mut self) -> OrmResult<Option<&T>> {
        if !self.state.is_loaded() {
            let context = self.context.as_ref().ok_or_else(|| detached(&self.def))?;
            let statement = fetch_statement(&self.def, &self.owner_key, context.as_ref())?;
            #[cfg(feature = "tracing")]
            tracing::debug!(relation = self.def.name, "loading scalar relation");
            let rows = context.query(&statement)?;
            let value = rows.first().map(T::from_row).transpose()?;
            self.state = RelationState::Loaded(value);
            self.context = None;
        }
        match &self.state {
            RelationState::Loaded(value) => Ok(value.as_ref()),
            RelationState::NotLoaded => Ok(None),
        }
    }

    /// Seed the relation with a value the caller already has. Marks the
    /// relation loaded without querying and releases the context.
    pub fn set(&mut self, value: Option<T>) {
        self.state = RelationState::Loaded(value);
        self.context = None;
    }
}

/// A lazily loaded collection of related entities (one-to-many).
pub struct CollectionRelation<T> {
    def: RelationDef,
    owner_key: Value,
    context: Option<Arc<dyn ExecutionContext>>,
    state: RelationState<Vec<T>>,
}

impl<T: FromRow> CollectionRelation<T> {
    pub fn new(def: RelationDef, owner_key: impl Into<Value>) -> Self {
        Self {
            def,
            owner_key: owner_key.into(),
            context: None,
            state: RelationState::NotLoaded,
        }
    }

    pub fn attach(&mut self, context: Arc<dyn ExecutionContext>) {
        self.context = Some(context);
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    /// Read the related entities, fetching them on first access.
    pub fn get(&mut self) -> OrmResult<&[T]> {
        if !self.state.is_loaded() {
            let context = self.context.as_ref().ok_or_else(|| detached(&self.def))?;
            let statement = fetch_statement(&self.def, &self.owner_key, context.as_ref())?;
            #[cfg(feature = "tracing")]
            tracing::debug!(relation = self.def.name, "loading collection relation");
            let rows = context.query(&statement)?;
            let items = rows
                .iter()
                .map(T::from_row)
                .collect::<OrmResult<Vec<T>>>()?;
            self.state = RelationState::Loaded(items);
            self.context = None;
        }
        match &self.state {
            RelationState::Loaded(items) => Ok(items),
            RelationState::NotLoaded => Ok(&[]),
        }
    }

    /// Seed the relation with entities the caller already has.
    pub fn set(&mut self, items: Vec<T>) {
        self.state = RelationState::Loaded(items);
        self.context = None;
    }
}
