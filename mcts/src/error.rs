use thiserror::Error;

/// Failure reported by an [`crate::Evaluator`] implementation.
///
/// A failed evaluation aborts the current search iteration; the tree is
/// never left with half-updated statistics.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("evaluator failed: {0}")]
pub struct EvaluatorError(String);

impl EvaluatorError {
    pub fn new(message: impl Into<String>) -> Self {
        EvaluatorError(message.into())
    }
}
