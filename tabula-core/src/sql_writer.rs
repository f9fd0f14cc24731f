use crate::{Column, Params, Result, Schema, SchemaError, TableRef, separated_by};

/// Renders schemas into SQL text.
///
/// Every method has a default implementation producing the dialect this crate
/// documents: `table AS alias` declarations, columns qualified by the table
/// alias and `:name` placeholders. Drivers override single hooks to adapt it.
pub trait SqlWriter {
    /// Fails when the table cannot be qualified: empty alias or no columns.
    fn check_qualifiable(&self, schema: &Schema) -> Result<()> {
        let table = schema.table();
        if table.alias.is_empty() {
            return Err(SchemaError::MissingAlias {
                table: table.name.to_string(),
            }
            .into());
        }
        if schema.columns().is_empty() {
            return Err(SchemaError::MissingColumns {
                table: table.name.to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// `name AS alias`
    fn write_table_declaration(&self, out: &mut String, table: &TableRef) -> Result<()> {
        if table.alias.is_empty() {
            return Err(SchemaError::MissingAlias {
                table: table.name.to_string(),
            }
            .into());
        }
        out.push_str(&table.name);
        out.push_str(" AS ");
        out.push_str(&table.alias);
        Ok(())
    }

    /// `alias.column_name`
    fn write_column_ref(&self, out: &mut String, table: &TableRef, column: &Column) {
        out.push_str(&table.alias);
        out.push('.');
        out.push_str(column.name());
    }

    /// Output column: `alias.column_name`, followed by `AS column_alias` when
    /// the column alias differs from its name.
    fn write_column_declaration(&self, out: &mut String, table: &TableRef, column: &Column) {
        self.write_column_ref(out, table, column);
        if !column.alias_is_name() {
            out.push_str(" AS ");
            out.push_str(column.get_alias());
        }
    }

    fn write_placeholder(&self, out: &mut String, column: &Column) {
        out.push(':');
        out.push_str(column.name());
    }

    fn write_qualified_columns(&self, out: &mut String, schema: &Schema) -> Result<()> {
        self.check_qualifiable(schema)?;
        separated_by(
            out,
            schema.columns(),
            |out, column| self.write_column_ref(out, schema.table(), column),
            ",",
        );
        Ok(())
    }

    fn write_full_qualified_columns(&self, out: &mut String, schema: &Schema) -> Result<()> {
        self.check_qualifiable(schema)?;
        separated_by(
            out,
            schema.columns(),
            |out, column| self.write_column_declaration(out, schema.table(), column),
            ",",
        );
        Ok(())
    }

    /// `SELECT <columns> FROM <table declaration>`
    fn write_select_from(&self, out: &mut String, schema: &Schema) -> Result<()> {
        out.reserve(64 + schema.columns().len() * 32);
        out.push_str("SELECT ");
        self.write_full_qualified_columns(out, schema)?;
        out.push_str(" FROM ");
        self.write_table_declaration(out, schema.table())
    }

    fn write_select_all(&self, out: &mut String, schema: &Schema) -> Result<()> {
        self.write_select_from(out, schema)
    }

    /// Select filtered by equality on every column holding a non null value,
    /// binding those values in `params`.
    fn write_select_by(&self, out: &mut String, params: &mut Params, schema: &Schema) -> Result<()> {
        self.write_select_from(out, schema)?;
        let table = schema.table();
        let mut filled = schema
            .columns()
            .iter()
            .filter(|v| !v.get_value().is_null())
            .peekable();
        if filled.peek().is_none() {
            return Ok(());
        }
        out.push_str(" WHERE ");
        separated_by(
            out,
            filled,
            |out, column| {
                self.write_column_ref(out, table, column);
                out.push('=');
                self.write_placeholder(out, column);
                params.bind(column.name().to_owned(), column.get_value().clone());
            },
            " AND ",
        );
        Ok(())
    }
}

/// Writer using the default dialect unchanged.
#[derive(Default, Debug, Clone, Copy)]
pub struct GenericSqlWriter;

impl GenericSqlWriter {
    pub const fn new() -> Self {
        Self
    }
}

impl SqlWriter for GenericSqlWriter {}
