//! Scripted implementations of the collaborator traits.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use triage_core::errors::{ConfigError, ServiceError, TriageError, TriageResult};
use triage_core::models::{LabeledExample, Prediction};
use triage_core::traits::{IClassifier, IExampleGenerator, IFeedbackSink, IInference};

/// Body marker read by [`ScriptedClassifier::oracle`].
pub const PREDICT_PREFIX: &str = "predict:";

/// Category the oracle predicts for deliberately wrong examples.
pub const WRONG_CATEGORY: &str = "Spam - Definitely Wrong";

fn down(service: &str) -> ServiceError {
    ServiceError::Network {
        service: service.to_string(),
        reason: "connection refused".to_string(),
    }
}

// ── Generator ───────────────────────────────────────────────────────────

/// One scripted answer of [`ScriptedGenerator`].
#[derive(Debug, Clone)]
pub enum GenerationStep {
    Batch(Vec<LabeledExample>),
    ServiceDown,
    MissingCredential,
}

/// Replays generation steps in order, then repeats the last one.
pub struct ScriptedGenerator {
    steps: Mutex<VecDeque<GenerationStep>>,
    last: Mutex<Option<GenerationStep>>,
    calls: AtomicUsize,
    ready: bool,
}

impl ScriptedGenerator {
    pub fn new(steps: Vec<GenerationStep>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            last: Mutex::new(None),
            calls: AtomicUsize::new(0),
            ready: true,
        }
    }

    /// Always returns the same batch.
    pub fn repeating(batch: Vec<LabeledExample>) -> Self {
        Self::new(vec![GenerationStep::Batch(batch)])
    }

    /// Readiness probe fails with a missing-credential error.
    pub fn not_ready(mut self) -> Self {
        self.ready = false;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_step(&self) -> Option<GenerationStep> {
        let mut steps = self.steps.lock().unwrap();
        let mut last = self.last.lock().unwrap();
        if let Some(step) = steps.pop_front() {
            *last = Some(step);
        }
        last.clone()
    }
}

impl IExampleGenerator for ScriptedGenerator {
    fn generate(&self, count: usize) -> TriageResult<Vec<LabeledExample>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.next_step() {
            Some(GenerationStep::Batch(mut batch)) => {
                batch.truncate(count);
                Ok(batch)
            }
            Some(GenerationStep::ServiceDown) => Err(down("generator").into()),
            Some(GenerationStep::MissingCredential) => Err(missing_key().into()),
            None => Ok(Vec::new()),
        }
    }

    fn check_ready(&self) -> TriageResult<()> {
        if self.ready {
            Ok(())
        } else {
            Err(missing_key().into())
        }
    }
}

fn missing_key() -> ConfigError {
    ConfigError::MissingCredential {
        service: "generator".to_string(),
        hint: "set the generator API key".to_string(),
    }
}

// ── Classifier ──────────────────────────────────────────────────────────

type Rule = dyn Fn(usize, &str, &str) -> Option<String> + Send + Sync;

/// Classifier driven by a rule over (call index, subject, body).
/// `None` from the rule is a service failure.
pub struct ScriptedClassifier {
    rule: Box<Rule>,
    calls: AtomicUsize,
}

impl ScriptedClassifier {
    pub fn from_fn<F>(rule: F) -> Self
    where
        F: Fn(usize, &str, &str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            rule: Box::new(rule),
            calls: AtomicUsize::new(0),
        }
    }

    /// Predicts whatever follows [`PREDICT_PREFIX`] in the body.
    pub fn oracle() -> Self {
        Self::from_fn(|_, _, body| read_prediction(body))
    }

    /// Oracle that fails every call whose index is in `range`.
    pub fn oracle_failing(range: std::ops::Range<usize>) -> Self {
        Self::from_fn(move |call, _, body| {
            if range.contains(&call) {
                None
            } else {
                read_prediction(body)
            }
        })
    }

    /// Every call fails.
    pub fn unavailable() -> Self {
        Self::from_fn(|_, _, _| None)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn read_prediction(body: &str) -> Option<String> {
    body.lines()
        .find_map(|l| l.strip_prefix(PREDICT_PREFIX))
        .map(|s| s.trim().to_string())
}

impl IClassifier for ScriptedClassifier {
    fn classify(&self, subject: &str, body: &str) -> TriageResult<Prediction> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        match (self.rule)(call, subject, body) {
            Some(category) => Ok(Prediction::new(category, 0.9)),
            None => Err(down("classifier").into()),
        }
    }
}

// ── Inference ───────────────────────────────────────────────────────────

/// Replays completions in order, then repeats the last one.
/// `None` entries are service failures.
pub struct ScriptedInference {
    replies: Mutex<VecDeque<Option<String>>>,
    last: Mutex<Option<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedInference {
    pub fn new(replies: Vec<Option<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            last: Mutex::new(None),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn always(reply: &str) -> Self {
        Self::new(vec![Some(reply.to_string())])
    }

    pub fn failing() -> Self {
        Self::new(vec![None])
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl IInference for ScriptedInference {
    fn complete(&self, prompt: &str) -> Result<String, ServiceError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let mut replies = self.replies.lock().unwrap();
        let mut last = self.last.lock().unwrap();
        if let Some(reply) = replies.pop_front() {
            *last = reply;
        }
        last.clone().ok_or_else(|| down(self.name()))
    }

    fn name(&self) -> &str {
        "scripted-inference"
    }
}

// ── Feedback sink ───────────────────────────────────────────────────────

/// A correction captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFeedback {
    pub subject: String,
    pub body: String,
    pub correct_category: String,
}

/// Keeps every correction in memory. Optionally fails for chosen subjects.
#[derive(Default)]
pub struct RecordingSink {
    recorded: Mutex<Vec<RecordedFeedback>>,
    fail_subjects: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes for these subjects fail with a store error.
    pub fn failing_on<I, S>(subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            recorded: Mutex::new(Vec::new()),
            fail_subjects: subjects.into_iter().map(Into::into).collect(),
        }
    }

    pub fn recorded(&self) -> Vec<RecordedFeedback> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.recorded.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IFeedbackSink for RecordingSink {
    fn record_feedback(&self, subject: &str, body: &str, correct_category: &str) -> TriageResult<()> {
        if self.fail_subjects.iter().any(|s| s == subject) {
            return Err(TriageError::Store(
                triage_core::errors::StoreError::Io {
                    path: "recording-sink".to_string(),
                    reason: "disk full".to_string(),
                },
            ));
        }
        self.recorded.lock().unwrap().push(RecordedFeedback {
            subject: subject.to_string(),
            body: body.to_string(),
            correct_category: correct_category.to_string(),
        });
        Ok(())
    }
}
