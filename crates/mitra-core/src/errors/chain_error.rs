/// Transient invocation faults raised inside the chain stages.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("model {model} unavailable: {reason}")]
    ModelUnavailable { model: String, reason: String },

    #[error("model {model} rate limited")]
    RateLimited { model: String },

    #[error("malformed model response: {reason}")]
    MalformedResponse { reason: String },

    #[error("query execution failed: {reason}")]
    ExecutionFailed { query: String, reason: String },
}
