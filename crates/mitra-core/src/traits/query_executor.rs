use crate::errors::MitraResult;

/// Queryable data source used by the chain invoker.
pub trait IQueryExecutor: Send + Sync {
    /// Execute a statement and render its rows as text. No rows renders as `""`.
    fn run(&self, query: &str) -> MitraResult<String>;

    /// Schema description handed to the query model.
    fn table_info(&self) -> MitraResult<String>;
}
