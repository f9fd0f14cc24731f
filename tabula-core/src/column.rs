use crate::Value;
use std::{borrow::Cow, slice};

/// Descriptor of a single table column together with its current value.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Column {
    name: Cow<'static, str>,
    alias: Cow<'static, str>,
    column_type: Cow<'static, str>,
    value: Value,
    primary: bool,
}

impl Column {
    /// New column whose alias defaults to its name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        Self {
            alias: name.clone(),
            name,
            ..Default::default()
        }
    }
    pub fn alias(mut self, alias: impl Into<Cow<'static, str>>) -> Self {
        self.alias = alias.into();
        self
    }
    /// Semantic type, for example `int` or `varchar`.
    pub fn column_type(mut self, column_type: impl Into<Cow<'static, str>>) -> Self {
        self.column_type = column_type.into();
        self
    }
    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn get_alias(&self) -> &str {
        &self.alias
    }
    pub fn get_type(&self) -> &str {
        &self.column_type
    }
    pub fn is_primary(&self) -> bool {
        self.primary
    }
    pub fn get_value(&self) -> &Value {
        &self.value
    }
    pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.value = value.into();
        self
    }
    /// True when the alias is empty or equal to the name.
    pub fn alias_is_name(&self) -> bool {
        self.alias.is_empty() || self.alias == self.name
    }
}

/// Ordered collection of columns, unique by name.
///
/// Insertion order is the canonical column order of every generated statement.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the column, or replaces the one with the same name keeping its position.
    pub fn hydrate(&mut self, column: Column) -> &mut Self {
        match self.columns.iter_mut().find(|v| v.name == column.name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
        self
    }

    /// Chaining variant of [`ColumnSet::hydrate`] used while declaring a schema.
    pub fn with(mut self, column: Column) -> Self {
        self.hydrate(column);
        self
    }

    /// Column with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|v| v.name == name)
    }

    /// Column matching `key` by name, otherwise the first one matching it by alias.
    pub fn find_by(&self, key: &str) -> Option<&Column> {
        self.position_by(key).map(|i| &self.columns[i])
    }

    pub fn find_by_mut(&mut self, key: &str) -> Option<&mut Column> {
        self.position_by(key).map(|i| &mut self.columns[i])
    }

    fn position_by(&self, key: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|v| v.name == key)
            .or_else(|| self.columns.iter().position(|v| v.alias == key))
    }

    /// First column flagged as primary key.
    pub fn primary(&self) -> Option<&Column> {
        self.columns.iter().find(|v| v.primary)
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|v| v.name()).collect()
    }

    /// `name AS alias` for every column.
    pub fn aliased_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|v| format!("{} AS {}", v.name, v.alias))
            .collect()
    }

    /// Sets every value back to `Value::Null`.
    pub fn reset_values(&mut self) {
        for column in &mut self.columns {
            column.value = Value::Null;
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, Column> {
        self.columns.iter()
    }
    pub fn len(&self) -> usize {
        self.columns.len()
    }
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<Column> for ColumnSet {
    fn from_iter<T: IntoIterator<Item = Column>>(iter: T) -> Self {
        let mut result = ColumnSet::new();
        for column in iter {
            result.hydrate(column);
        }
        result
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a Column;
    type IntoIter = slice::Iter<'a, Column>;
    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
