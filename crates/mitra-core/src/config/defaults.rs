// Single source of truth for all default values.

// --- Prediction ---
pub const DEFAULT_N_TRIALS: usize = 1_000;
pub const DEFAULT_EXPONENTIAL_SCALE: f64 = 1.0;
pub const DEFAULT_MIN_WINDOW_MONTHS: u32 = 6;
pub const DEFAULT_PARALLEL_TRIALS: bool = true;

// --- Chain ---
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_INITIAL_RETRY_DELAY_SECS: u64 = 3;
pub const DEFAULT_MAX_RETRY_DELAY_SECS: u64 = 30;
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_FEW_SHOT_K: usize = 5;

// --- Model ---
pub const DEFAULT_QUERY_MODEL: &str = "gemini-pro";
pub const DEFAULT_ANSWER_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const DEFAULT_TEMPERATURE: f64 = 0.0;
pub const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 60;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "context_enrichment.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_SAMPLE_ROWS_IN_TABLE_INFO: usize = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
