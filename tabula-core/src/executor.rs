use crate::{
    Driver, Query, QueryResult, Result, RowLabeled,
    stream::{Stream, StreamExt},
};

/// Statement execution collaborator.
///
/// The returned stream is the result cursor: dropping it releases whatever
/// the backend holds for the statement. Errors raised by the backend are
/// yielded by the stream unchanged.
pub trait Executor: Send + Sized {
    type Driver: Driver;

    fn driver(&self) -> &Self::Driver;

    /// General method to send any query and return any result type (either row or count)
    fn run(&mut self, query: Query) -> impl Stream<Item = Result<QueryResult>> + Send;

    /// Execute the query and returns the rows.
    fn fetch(&mut self, query: Query) -> impl Stream<Item = Result<RowLabeled>> + Send {
        self.run(query).filter_map(|v| async move {
            match v {
                Ok(QueryResult::Row(v)) => Some(Ok(v)),
                Err(e) => Some(Err(e)),
                _ => None,
            }
        })
    }
}
