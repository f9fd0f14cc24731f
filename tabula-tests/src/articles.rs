use tabula::{
    ActiveRecord, Attributes, Column, ColumnSet, Content, Entity, Error, Result, Schema, TableRef,
    Value,
};

/// `articles AS a`: the `title` column is exposed as `headline` and `body`
/// holds a JSON document.
pub struct Articles {
    schema: Schema,
}

impl Articles {
    pub fn new() -> Self {
        let columns = ColumnSet::new()
            .with(Column::new("id").column_type("int").primary(true))
            .with(Column::new("title").alias("headline").column_type("varchar"))
            .with(Column::new("body").column_type("json"));
        Self {
            schema: Schema::new(TableRef::new("articles").with_alias("a"))
                .with_columns(columns),
        }
    }
}

impl Default for Articles {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Articles {
    type Record<'s> = Article<'s>;

    fn schema(&self) -> &Schema {
        &self.schema
    }
    fn schema_mut(&mut self) -> &mut Schema {
        &mut self.schema
    }
    fn active_record(&self) -> Self::Record<'_> {
        let mut attributes = Attributes::new();
        attributes.insert("slug".into(), Value::Varchar(None));
        Article {
            schema: &self.schema,
            attributes,
        }
    }
}

/// Article row: declares `slug` and a `title_length` method, reads its
/// content from the `body` JSON, hydrated or set on the schema.
pub struct Article<'s> {
    schema: &'s Schema,
    attributes: Attributes,
}

impl ActiveRecord for Article<'_> {
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
        let body = self
            .lookup_declared("body")
            .or_else(|| self.lookup_column("body"))?;
        match body {
            Value::Json(Some(json)) => Some(Box::new(json)),
            _ => None,
        }
    }
    fn call_declared(&mut self, method: &str, args: &[Value]) -> Option<Result<Value>> {
        match method {
            "title_length" => Some(if args.is_empty() {
                self.get("title").and_then(|v| match v {
                    Value::Varchar(Some(v)) => Ok(Value::UInt64(Some(v.chars().count() as _))),
                    v => Err(Error::msg(format!("Title {v:?} is not a string"))),
                })
            } else {
                Err(Error::msg("title_length takes no arguments"))
            }),
            _ => None,
        }
    }
}
