pub mod category_set;
pub mod cycle_result;
pub mod feedback_record;
pub mod labeled_example;
pub mod prediction;

pub use category_set::CategorySet;
pub use cycle_result::{accuracy_percent, CycleFailure, CycleResult};
pub use feedback_record::FeedbackRecord;
pub use labeled_example::{AnswerKeyEntry, LabeledExample};
pub use prediction::{DecisionPath, Prediction};
