use crate::{Value, truncate_long};
use std::{
    borrow::Cow,
    fmt::{self, Display},
    slice,
    sync::Arc,
};

/// Named placeholder values, kept in the order they were bound.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Params {
    values: Vec<(Cow<'static, str>, Value)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }
    /// Binds `value` to the placeholder `name`, replacing a previous binding.
    pub fn bind(&mut self, name: impl Into<Cow<'static, str>>, value: Value) -> &mut Self {
        let name = name.into();
        match self.values.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.values.push((name, value)),
        }
        self
    }
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(k, _)| k.as_ref())
    }
    pub fn iter(&self) -> slice::Iter<'_, (Cow<'static, str>, Value)> {
        self.values.iter()
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a (Cow<'static, str>, Value);
    type IntoIter = slice::Iter<'a, (Cow<'static, str>, Value)>;
    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// A SQL statement and the values of its named placeholders, ready to be
/// submitted to an [`Executor`](crate::Executor).
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Query {
    pub sql: String,
    pub params: Params,
}

impl Query {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Params::new(),
        }
    }
    pub fn with_params(sql: impl Into<String>, params: Params) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
    pub fn clear(&mut self) {
        self.sql.clear();
        self.params.clear();
    }
}

impl From<&str> for Query {
    fn from(value: &str) -> Self {
        Query::new(value)
    }
}

impl From<String> for Query {
    fn from(value: String) -> Self {
        Query::new(value)
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", truncate_long!(self.sql))?;
        for (i, (name, value)) in self.params.iter().enumerate() {
            f.write_str(if i == 0 { " with " } else { ", " })?;
            write!(f, ":{name} = {value}")?;
        }
        Ok(())
    }
}

/// Metadata about modify operations.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowsAffected {
    /// Total number of rows impacted.
    pub rows_affected: u64,
    /// Backend-specific last inserted / affected identifier when available.
    pub last_affected_id: Option<i64>,
}

/// Shared reference-counted column label list.
pub type RowNames = Arc<[String]>;
/// Owned row value slice matching `RowNames` length.
pub type Row = Box<[Value]>;

/// A result row with its corresponding column labels.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLabeled {
    /// Column labels.
    pub labels: RowNames,
    /// Data values (aligned by index with `labels`).
    pub values: Row,
}

impl RowLabeled {
    pub fn new(labels: RowNames, values: Row) -> Self {
        Self { labels, values }
    }
    pub fn names(&self) -> &[String] {
        &self.labels
    }
    pub fn values(&self) -> &[Value] {
        &self.values
    }
    pub fn get_column(&self, name: &str) -> Option<&Value> {
        self.labels
            .iter()
            .position(|v| v == name)
            .map(|i| &self.values()[i])
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

/// Items emitted by `Executor::run`, either rows or modify results.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    /// A labeled row.
    Row(RowLabeled),
    /// A modify effect.
    Affected(RowsAffected),
}

impl From<RowLabeled> for QueryResult {
    fn from(value: RowLabeled) -> Self {
        QueryResult::Row(value)
    }
}

impl From<RowsAffected> for QueryResult {
    fn from(value: RowsAffected) -> Self {
        QueryResult::Affected(value)
    }
}
