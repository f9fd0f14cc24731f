use crate::{ActiveRecord, ColumnSet, Executor, Result, RowLabeled, Schema, Value, stream::Stream};

/// A concrete table mapping.
///
/// Implementors own a [`Schema`], declare its columns once when they are
/// constructed and decide which record type represents their rows.
pub trait Entity {
    type Record<'s>: ActiveRecord
    where
        Self: 's;

    fn schema(&self) -> &Schema;
    fn schema_mut(&mut self) -> &mut Schema;

    /// A new, empty record bound to this entity's schema.
    fn active_record(&self) -> Self::Record<'_>;

    fn columns(&self) -> &ColumnSet {
        self.schema().columns()
    }

    /// Sets the value of a column, found by name or alias, used by [`Entity::select_by`].
    fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        self.schema_mut().set(key, value).map(|_| ())
    }

    fn select_all<'e, Exec: Executor>(
        &mut self,
        executor: &'e mut Exec,
    ) -> impl Stream<Item = Result<RowLabeled>> + Send {
        self.schema_mut().select_all(executor)
    }

    fn select_by<'e, Exec: Executor>(
        &mut self,
        executor: &'e mut Exec,
    ) -> impl Stream<Item = Result<RowLabeled>> + Send {
        self.schema_mut().select_by(executor)
    }

    /// A record of this entity filled from a result row.
    fn hydrate_record(&self, row: &RowLabeled) -> Self::Record<'_> {
        let mut record = self.active_record();
        record.hydrate(row);
        record
    }
}
