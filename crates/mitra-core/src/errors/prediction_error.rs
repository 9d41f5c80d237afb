/// Purchase-probability estimation errors. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("empty input: no {what} supplied")]
    EmptyInput { what: String },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },
}
