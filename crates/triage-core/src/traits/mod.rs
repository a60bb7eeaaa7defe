//! Collaborator seams. Every external dependency of the training loop sits
//! behind one of these traits so it can be swapped for a scripted fake.

pub mod cancellation;
pub mod category_source;
pub mod classifier;
pub mod feedback_sink;
pub mod generator;
pub mod inference;

pub use cancellation::{Cancellable, CancellationToken};
pub use category_source::ICategorySource;
pub use classifier::IClassifier;
pub use feedback_sink::IFeedbackSink;
pub use generator::IExampleGenerator;
pub use inference::{IInference, NoInference};
