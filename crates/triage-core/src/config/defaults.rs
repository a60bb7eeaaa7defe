// Single source of truth for all default values.

// --- Inference (model-backed classification tier) ---
pub const DEFAULT_INFERENCE_ENABLED: bool = true;
pub const DEFAULT_INFERENCE_URL: &str = "http://localhost:11434";
pub const DEFAULT_INFERENCE_MODEL: &str = "llama3.2:3b";
pub const DEFAULT_INFERENCE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TEMPERATURE: f64 = 0.1;
pub const DEFAULT_TOP_P: f64 = 0.9;
pub const DEFAULT_MAX_TOKENS: u32 = 50;

// --- Backend endpoints ---
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CLASSIFY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_FEEDBACK_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_HEALTH_TIMEOUT_SECS: u64 = 5;

// --- Feedback store ---
pub const DEFAULT_FEEDBACK_PATH: &str = "data/feedback.json";
pub const DEFAULT_CATEGORIES_PATH: &str = "data/categories.json";

// --- Training loop ---
pub const DEFAULT_CYCLES: u32 = 3;
pub const DEFAULT_BATCH_SIZE: usize = 10;
pub const DEFAULT_DELAY_SECS: u64 = 30;
pub const DEFAULT_PARALLEL_CLASSIFICATION: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
