use crate::{AsValue, AttributeError, Content, Result, RowLabeled, Schema, Value};
use std::{borrow::Cow, collections::BTreeMap};

/// Fields declared on a record, by name.
pub type Attributes = BTreeMap<Cow<'static, str>, Value>;

/// A row bound to the [`Schema`] it was read from, with dynamically resolved
/// attributes.
///
/// An attribute is resolved, in order, against:
/// 1. the fields declared on the record ([`ActiveRecord::attributes`]);
/// 2. the columns of the schema, by name, yielding their current value;
/// 3. the content object, when the record has one ([`ActiveRecord::content`]).
///
/// The first source having the attribute wins. When none has it the caller
/// gets an [`AttributeError`].
pub trait ActiveRecord {
    fn schema(&self) -> &Schema;
    fn attributes(&self) -> &Attributes;
    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Semi-structured fallback object, `None` when the record has none.
    fn content(&self) -> Option<Box<dyn Content + '_>> {
        None
    }

    /// Methods declared by the record type, `None` when `method` is not one of them.
    fn call_declared(&mut self, _method: &str, _args: &[Value]) -> Option<Result<Value>> {
        None
    }

    fn is_declared(&self, name: &str) -> bool {
        self.attributes().contains_key(name)
    }

    fn lookup_declared(&self, name: &str) -> Option<Value> {
        self.attributes().get(name).cloned()
    }

    fn lookup_column(&self, name: &str) -> Option<Value> {
        self.schema()
            .columns()
            .find(name)
            .map(|v| v.get_value().clone())
    }

    fn lookup_content(&self, name: &str) -> Option<Value> {
        self.content()?.get(name)
    }

    /// Fills the record from a result row.
    ///
    /// Labels that are already declared fields are left untouched. Other
    /// labels are matched against the schema columns by name or alias and
    /// stored under the column name. Labels matching nothing are dropped.
    fn hydrate(&mut self, row: &RowLabeled) {
        for (label, value) in row.iter() {
            if self.is_declared(label) {
                continue;
            }
            let Some(name) = self
                .schema()
                .columns()
                .find_by(label)
                .map(|v| v.name().to_owned())
            else {
                log::trace!(
                    "Dropping `{}`, it is not a column of `{}`",
                    label,
                    self.schema().name()
                );
                continue;
            };
            self.attributes_mut().insert(name.into(), value.clone());
        }
    }

    fn get(&self, name: &str) -> Result<Value> {
        self.lookup_declared(name)
            .or_else(|| self.lookup_column(name))
            .or_else(|| self.lookup_content(name))
            .ok_or_else(|| {
                AttributeError::NotFound {
                    attribute: name.to_owned(),
                    table: self.schema().table().full_name(),
                }
                .into()
            })
    }

    fn get_as<T: AsValue>(&self, name: &str) -> Result<T>
    where
        Self: Sized,
    {
        T::try_from_value(self.get(name)?)
    }

    /// Assigns a declared field, creating it when missing. The schema is not consulted.
    fn set(&mut self, name: &str, value: impl Into<Value>) -> &mut Self
    where
        Self: Sized,
    {
        self.attributes_mut()
            .insert(name.to_owned().into(), value.into());
        self
    }

    /// Calls a method declared by the record, otherwise the content object's one.
    fn call(&mut self, method: &str, args: &[Value]) -> Result<Value> {
        if let Some(result) = self.call_declared(method, args) {
            return result;
        }
        if let Some(result) = self.content().and_then(|v| v.invoke(method, args)) {
            return result;
        }
        Err(AttributeError::MethodNotFound {
            method: method.to_owned(),
            table: self.schema().table().full_name(),
        }
        .into())
    }
}

/// General purpose record.
///
/// It may declare fields upfront and name the attribute or column holding its
/// JSON content.
#[derive(Debug, Clone)]
pub struct Record<'s> {
    schema: &'s Schema,
    attributes: Attributes,
    content: Option<Cow<'static, str>>,
}

impl<'s> Record<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            attributes: Attributes::new(),
            content: None,
        }
    }

    /// Declares fields, each starting as NULL.
    pub fn with_declared(mut self, names: impl IntoIterator<Item = &'static str>) -> Self {
        for name in names {
            self.attributes.entry(name.into()).or_default();
        }
        self
    }

    /// Uses the JSON stored in the attribute or column `name` as content object.
    ///
    /// A declared field that is NULL does not hide the column with the same name.
    pub fn with_content(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.content = Some(name.into());
        self
    }
}

impl ActiveRecord for Record<'_> {
    fn schema(&self) -> &Schema {
        self.schema
    }
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }
    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
    fn content(&self) -> Option<Box<dyn Content + '_>> {
        let name = self.content.as_deref()?;
        let value = self
            .lookup_declared(name)
            .filter(|v| !v.is_null())
            .or_else(|| self.lookup_column(name))
            .filter(|v| !v.is_null())?;
        match serde_json::Value::try_from_value(value) {
            Ok(json) => Some(Box::new(json)),
            Err(e) => {
                log::warn!("Content of `{}` is not valid json: {:#}", name, e);
                None
            }
        }
    }
}
