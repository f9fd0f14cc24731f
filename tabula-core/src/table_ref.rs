use std::borrow::Cow;

/// Identity of a mapped table.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    /// Table name.
    pub name: Cow<'static, str>,
    /// Alias used to qualify every column in generated SQL.
    pub alias: Cow<'static, str>,
    /// Identifier of the mapping type that owns the table (may be empty).
    pub namespace: Cow<'static, str>,
}

impl TableRef {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
    pub fn with_alias(mut self, alias: impl Into<Cow<'static, str>>) -> Self {
        self.alias = alias.into();
        self
    }
    pub fn with_namespace(mut self, namespace: impl Into<Cow<'static, str>>) -> Self {
        self.namespace = namespace.into();
        self
    }
    /// Namespace and name joined by `::`, just the name when there is no namespace.
    pub fn full_name(&self) -> String {
        let mut result = String::new();
        if !self.namespace.is_empty() {
            result.push_str(&self.namespace);
            result.push_str("::");
        }
        result.push_str(&self.name);
        result
    }
}
