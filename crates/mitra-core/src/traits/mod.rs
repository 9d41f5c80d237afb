mod activity_reader;
mod language_model;
mod query_executor;
mod sleeper;

pub use activity_reader::IActivityReader;
pub use language_model::ILanguageModel;
pub use query_executor::IQueryExecutor;
pub use sleeper::{ISleeper, ThreadSleeper};
