/// Triage system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound on examples requested from the generator in one call.
pub const MAX_GENERATION_BATCH: usize = 50;

/// Confidence assigned when the model returns an exact category label.
pub const CONFIDENCE_MODEL_EXACT: f64 = 0.85;
/// Confidence assigned when the model label was repaired by substring match.
pub const CONFIDENCE_MODEL_REPAIRED: f64 = 0.75;
/// Confidence assigned by a keyword-group hit.
pub const CONFIDENCE_KEYWORD: f64 = 0.6;
/// Confidence assigned when falling back to a general/inquiry category.
pub const CONFIDENCE_GENERAL: f64 = 0.3;
/// Confidence assigned when nothing matched and the first category is used.
pub const CONFIDENCE_FIRST_CATEGORY: f64 = 0.2;

/// Sentinel returned when classification runs against an empty category set.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Category list used when no category file exists yet.
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Complaint - Product/Service",
    "Sales Opportunity - New Business",
    "Action Required - Urgent Response",
    "Legal Escalation - Threat/Litigation",
    "Good News - Customer Success",
    "Technical Support - Bug Report",
    "General Inquiry",
];
