use serde::{Deserialize, Serialize};

/// Parallel rows rendered by the attempt review screen. All four vectors are
/// index-aligned, one entry per sub-unit, in the same positional order the
/// comparators score in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionReview {
    pub question_id: String,
    /// Human labels per sub-unit ("Gap 1", "Dropdown 2", option text, ...).
    pub question_parts: Vec<String>,
    pub correct_answers: Vec<String>,
    pub user_answers: Vec<String>,
    pub answer_status: Vec<bool>,
}
