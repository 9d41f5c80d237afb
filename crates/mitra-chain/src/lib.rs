//! # mitra-chain
//!
//! Three-stage language-model chain: a question becomes a SQL query, the
//! query runs against the data source, and the result becomes a
//! natural-language answer.
//!
//! ## Stages
//!
//! | Stage | Work |
//! |-------|------|
//! | Generate query | few-shot prompt + schema to the query model, output sanitized |
//! | Execute query | run against the data source, extract result columns |
//! | Check empty | empty result swaps in the mitra's cluster lookup query |
//! | Generate answer | question, query, columns and result to the answer model |
//!
//! Any fault restarts at query generation after an exponentially growing
//! wait. After `max_attempts` faults the chain gives up with an empty answer.

pub mod backoff;
pub mod columns;
pub mod fallback;
pub mod invoker;
pub mod prompt;
pub mod providers;
pub mod runner;
pub mod sanitize;

pub use backoff::RetrySchedule;
pub use columns::{columns_from_query, format_columns};
pub use fallback::fallback_query;
pub use invoker::{ChainInvoker, ChainRequest, ChainResponse};
pub use prompt::{ExampleSelector, FewShotExample};
pub use providers::GeminiModel;
pub use runner::{SummaryReport, SummaryRunner};
pub use sanitize::clean_query;
