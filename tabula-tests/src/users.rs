use tabula::{Column, ColumnSet, Entity, Record, Schema, TableRef};

/// `users AS u` with a primary `id` and an `email`.
pub struct Users {
    schema: Schema,
}

impl Users {
    pub fn new() -> Self {
        let columns = ColumnSet::new()
            .with(Column::new("id").column_type("int").primary(true))
            .with(Column::new("email").column_type("varchar"));
        Self {
            schema: Schema::new(
                TableRef::new("users")
                    .with_alias("u")
                    .with_namespace("tabula_tests::users"),
            )
            .with_columns(columns),
        }
    }
}

impl Default for Users {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Users {
    type Record<'s> = Record<'s>;

    fn schema(&self) -> &Schema {
        &self.schema
    }
    fn schema_mut(&mut self) -> &mut Schema {
        &mut self.schema
    }
    fn active_record(&self) -> Self::Record<'_> {
        Record::new(&self.schema)
    }
}
