use crate::{
    AttributeError, Column, ColumnSet, Driver, Error, Executor, GenericSqlWriter, Query, Result,
    RowLabeled, SqlWriter, TableRef, Value,
    future::TryFutureExt,
    stream::Stream,
};
use std::{
    borrow::Cow,
    fmt::{self, Display},
};

/// Shape of a mapped table: its identity, its ordered columns and the last
/// query built from them.
///
/// Building a query overwrites the transient query of the previous call, the
/// `&mut self` receivers of [`Schema::select_all`] and [`Schema::select_by`]
/// keep a schema from serving two statements at the same time.
#[derive(Default, Debug, Clone)]
pub struct Schema {
    table: TableRef,
    columns: ColumnSet,
    query: Query,
}

impl Schema {
    pub fn new(table: TableRef) -> Self {
        Self {
            table,
            ..Default::default()
        }
    }

    /// Installs the column definitions, every value starts as NULL.
    ///
    /// Calling it again replaces the previous definitions and clears all values.
    pub fn set_columns(&mut self, columns: ColumnSet) -> &mut Self {
        self.columns = columns;
        self.columns.reset_values();
        self
    }

    /// Chaining variant of [`Schema::set_columns`].
    pub fn with_columns(mut self, columns: ColumnSet) -> Self {
        self.set_columns(columns);
        self
    }

    /// Adds a single column definition, or replaces the one with the same name.
    pub fn hydrate(&mut self, column: Column) -> &mut Self {
        self.columns.hydrate(column);
        self
    }

    pub fn table(&self) -> &TableRef {
        &self.table
    }
    pub fn name(&self) -> &str {
        &self.table.name
    }
    pub fn alias(&self) -> &str {
        &self.table.alias
    }
    pub fn set_alias(&mut self, alias: impl Into<Cow<'static, str>>) -> &mut Self {
        self.table.alias = alias.into();
        self
    }
    pub fn namespace(&self) -> &str {
        &self.table.namespace
    }
    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }
    pub fn columns_mut(&mut self) -> &mut ColumnSet {
        &mut self.columns
    }

    /// Sets the value of the column having `key` as name or alias.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<&mut Self> {
        let Some(column) = self.columns.find_by_mut(key) else {
            let error = AttributeError::UnknownColumn {
                column: key.to_owned(),
                table: self.table.full_name(),
            };
            log::warn!("{}", error);
            return Err(error.into());
        };
        column.set_value(value);
        Ok(self)
    }

    /// Current value of the column having `key` as name or alias.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.columns.find_by(key).map(Column::get_value)
    }

    /// Sets every column value back to NULL.
    pub fn clear_values(&mut self) -> &mut Self {
        self.columns.reset_values();
        self
    }

    /// First column flagged as primary key, if any.
    pub fn primary_column(&self) -> Option<&Column> {
        self.columns.primary()
    }

    /// `name AS alias`
    pub fn aliased_name(&self) -> Result<String> {
        let mut out = String::new();
        GenericSqlWriter::new().write_table_declaration(&mut out, &self.table)?;
        Ok(out)
    }

    /// `alias.column,...` in column order.
    pub fn qualified_columns(&self) -> Result<String> {
        let mut out = String::new();
        GenericSqlWriter::new().write_qualified_columns(&mut out, self)?;
        Ok(out)
    }

    /// Output column list, `alias.column AS column_alias` where the alias differs.
    pub fn full_qualified_columns(&self) -> Result<String> {
        let mut out = String::new();
        GenericSqlWriter::new().write_full_qualified_columns(&mut out, self)?;
        Ok(out)
    }

    /// The query built by the last SELECT call, empty before the first one.
    pub fn last_query(&self) -> &Query {
        &self.query
    }

    /// Builds the unconditional SELECT and stores it as the last query.
    pub fn prepare_select_all(&mut self, writer: &impl SqlWriter) -> Result<&Query> {
        self.query.clear();
        let mut sql = String::new();
        writer.write_select_all(&mut sql, self)?;
        self.query.sql = sql;
        log::debug!("{}", self.query);
        Ok(&self.query)
    }

    /// Builds the SELECT filtered by the non null column values and stores it
    /// as the last query.
    pub fn prepare_select_by(&mut self, writer: &impl SqlWriter) -> Result<&Query> {
        self.query.clear();
        let mut query = Query::default();
        writer.write_select_by(&mut query.sql, &mut query.params, self)?;
        self.query = query;
        log::debug!("{}", self.query);
        Ok(&self.query)
    }

    /// Selects every row of the table.
    pub fn select_all<'e, Exec: Executor>(
        &mut self,
        executor: &'e mut Exec,
    ) -> impl Stream<Item = Result<RowLabeled>> + Send + use<'e, Exec> {
        let query = self
            .prepare_select_all(&executor.driver().sql_writer())
            .cloned();
        async move { Ok::<_, Error>(executor.fetch(query?)) }.try_flatten_stream()
    }

    /// Selects the rows equal to the current column values on every non null column.
    pub fn select_by<'e, Exec: Executor>(
        &mut self,
        executor: &'e mut Exec,
    ) -> impl Stream<Item = Result<RowLabeled>> + Send + use<'e, Exec> {
        let query = self
            .prepare_select_by(&executor.driver().sql_writer())
            .cloned();
        async move { Ok::<_, Error>(executor.fetch(query?)) }.try_flatten_stream()
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.table.name)?;
        if !self.table.alias.is_empty() {
            write!(f, " AS {}", self.table.alias)?;
        }
        for column in &self.columns {
            write!(f, "\n  {} [{}]", column.name(), column.get_type())?;
            if column.is_primary() {
                f.write_str(" primary")?;
            }
        }
        Ok(())
    }
}
