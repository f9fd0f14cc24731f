use async_stream::try_stream;
use std::sync::Arc;
use tabula::{
    Driver, Error, Executor, GenericSqlWriter, Query, QueryResult, Result, RowLabeled,
    RowsAffected, Value, stream::Stream,
};

#[derive(Clone, Copy, Default)]
pub struct RecordingDriver;

impl RecordingDriver {
    pub const fn new() -> Self {
        Self
    }
}

impl Driver for RecordingDriver {
    type SqlWriter = GenericSqlWriter;
    const NAME: &'static str = "recording";
    fn sql_writer(&self) -> Self::SqlWriter {
        GenericSqlWriter::new()
    }
}

/// Executor that keeps every submitted query and answers with canned rows.
#[derive(Default)]
pub struct RecordingExecutor {
    pub queries: Vec<Query>,
    rows: Vec<RowLabeled>,
    affected: Option<RowsAffected>,
    failure: Option<String>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }
    /// Rows returned by every query.
    pub fn with_rows(mut self, rows: impl IntoIterator<Item = RowLabeled>) -> Self {
        self.rows = rows.into_iter().collect();
        self
    }
    /// Modify result emitted after the rows.
    pub fn with_affected(mut self, affected: RowsAffected) -> Self {
        self.affected = Some(affected);
        self
    }
    /// Every query fails with `message` after being recorded.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }
    pub fn last_query(&self) -> Option<&Query> {
        self.queries.last()
    }
}

impl Executor for RecordingExecutor {
    type Driver = RecordingDriver;

    fn driver(&self) -> &Self::Driver {
        &RecordingDriver {}
    }

    fn run(&mut self, query: Query) -> impl Stream<Item = Result<QueryResult>> + Send {
        log::debug!("Recording {}", query);
        self.queries.push(query);
        let rows = self.rows.clone();
        let affected = self.affected;
        let failure = self.failure.clone();
        try_stream! {
            if let Some(message) = failure {
                Err::<(), Error>(Error::msg(message))?;
            }
            for row in rows {
                yield QueryResult::Row(row);
            }
            if let Some(affected) = affected {
                yield QueryResult::Affected(affected);
            }
        }
    }
}

/// Builds a result row from labels and values.
pub fn row<const N: usize>(labels: [&str; N], values: [Value; N]) -> RowLabeled {
    RowLabeled::new(
        labels.iter().map(|v| v.to_string()).collect::<Arc<[_]>>(),
        values.into(),
    )
}
