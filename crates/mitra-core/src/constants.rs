/// Mitra pipeline version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum analysis window, in whole months, guaranteed by the resampler.
pub const MIN_WINDOW_MONTHS: u32 = 6;

/// Upper bound on the chain retry delay, in seconds.
pub const MAX_RETRY_DELAY_SECS: u64 = 30;

/// Cell values longer than this are truncated when query results are rendered.
pub const MAX_RESULT_CELL_CHARS: usize = 100;

/// Column whose presence in a chain result marks a substitution-model answer.
pub const SUBSTITUTION_MARKER_COLUMN: &str = "produk_substitusi";

/// Summary source label for substitution-model answers.
pub const SOURCE_SUBSTITUTION: &str = "Mystique";

/// Summary source label for GMV-contribution answers.
pub const SOURCE_GMV_CONTRIBUTION: &str = "GMV Contribution";
