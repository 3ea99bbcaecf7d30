use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One learner answer inside an attempt. The payload shape depends on the
/// question type: a plain string for multiple-choice and free-form types, a
/// `gap_<i>`/`dropdown_<i>`/`hint_<i>` keyed map for slotted types, an array
/// of option indices for checkboxes, an array of `{text}` spans for
/// highlights. The payload is coerced defensively at grading time; a
/// malformed shape grades as incorrect, never as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    pub question_id: String,
    #[serde(default)]
    pub answer: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UngradedReason {
    /// The answer referenced a question missing from the quiz snapshot.
    /// Scored as zero by policy, but tagged so telemetry can tell it apart
    /// from a genuinely wrong answer.
    UnknownQuestion,
    /// Free-form response waiting for a human grader.
    ManualReview,
}

/// Per-question grading outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question_id: String,
    /// `None` while manual grading is pending.
    pub is_correct: Option<bool>,
    /// Display score, rounded to 2 decimal places.
    pub score: f64,
    /// Full-precision totals; aggregation sums these, not `score`.
    pub earned_points: f64,
    pub possible_points: f64,
    pub requires_manual_grading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ungraded_reason: Option<UngradedReason>,
}

/// Attempt-level aggregate derived from the per-question results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttemptScore {
    pub earned_points: f64,
    pub possible_points: f64,
    /// Integer percentage in [0, 100]; 0 when nothing was auto-gradable.
    pub final_score_percent: u32,
    pub passed: bool,
}

/// Persisted record of one graded attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub id: String,
    pub user_id: String,
    pub quiz_id: String,
    pub answers: Vec<SubmittedAnswer>,
    pub results: Vec<QuestionResult>,
    pub earned_points: f64,
    pub possible_points: f64,
    /// Final percentage, the stored `score` field.
    pub score: u32,
    pub passed: bool,
    pub submitted_at: DateTime<Utc>,
}

impl AttemptRecord {
    /// Ordering key for best-attempt selection: highest score wins, ties go
    /// to the most recent submission.
    pub fn ranking_key(&self) -> (u32, DateTime<Utc>) {
        (self.score, self.submitted_at)
    }
}
