use thiserror::Error;

/// Failures at the storage boundary. Evaluation itself never fails: a
/// malformed payload or a stale question reference grades as zero instead of
/// surfacing here.
#[derive(Debug, Error)]
pub enum GradingError {
    #[error("question set for quiz {quiz_id} is unavailable")]
    QuestionSetUnavailable {
        quiz_id: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("attempt storage failure: {context}")]
    AttemptStorage {
        context: String,
        #[source]
        source: anyhow::Error,
    },
}
