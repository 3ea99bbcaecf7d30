use serde_json::Value;
use std::collections::HashMap;

use crate::models::answer::{QuestionResult, SubmittedAnswer, UngradedReason};
use crate::models::question::Question;

use super::comparators::{self, Comparison};
use super::scoring::round2;

/// Pure, stateless grading of submitted answers against an immutable
/// question snapshot. Dispatches per question type through the comparators
/// and applies the normalized point weight. Never fails: malformed payloads
/// and stale question references grade as zero.
pub struct AnswerEvaluator;

impl AnswerEvaluator {
    /// Grades one submitted payload against its question.
    pub fn evaluate(question: &Question, answer: &Value) -> QuestionResult {
        let comparison = comparators::compare(question, answer);

        if comparison.manual {
            return QuestionResult {
                question_id: question.id.clone(),
                is_correct: None,
                score: 0.0,
                earned_points: 0.0,
                possible_points: 0.0,
                requires_manual_grading: true,
                ungraded_reason: Some(UngradedReason::ManualReview),
            };
        }

        Self::warn_on_unknown_keys(question, answer, &comparison);

        let weight = question.effective_points();
        let earned = f64::from(comparison.correct_units()) * weight;
        let possible = f64::from(comparison.total_units()) * weight;

        QuestionResult {
            question_id: question.id.clone(),
            is_correct: Some(comparison.all_matched()),
            score: round2(earned),
            earned_points: earned,
            possible_points: possible,
            requires_manual_grading: false,
            ungraded_reason: None,
        }
    }

    /// Grades a full attempt against one question snapshot. A submitted
    /// answer whose question is missing from the snapshot degrades to a
    /// zero-scored result instead of failing the attempt, so the learner
    /// always receives a score.
    pub fn evaluate_attempt(
        questions: &[Question],
        answers: &[SubmittedAnswer],
    ) -> Vec<QuestionResult> {
        let by_id: HashMap<&str, &Question> =
            questions.iter().map(|q| (q.id.as_str(), q)).collect();

        answers
            .iter()
            .map(|submitted| match by_id.get(submitted.question_id.as_str()) {
                Some(question) => Self::evaluate(question, &submitted.answer),
                None => {
                    tracing::warn!(
                        "Answer references unknown question {}; scoring as zero",
                        submitted.question_id
                    );
                    Self::unknown_question_result(&submitted.question_id)
                }
            })
            .collect()
    }

    /// Applies a human grader's verdict to an essay/description/speaking
    /// question. The resolved result flows through the same aggregator as
    /// auto-graded ones; resolution is what moves the question's weight into
    /// the possible total.
    pub fn resolve_manual(question: &Question, correct: bool) -> QuestionResult {
        if !question.question_type.is_manual() {
            tracing::warn!(
                "Applying a manual grade to auto-gradable question {}",
                question.id
            );
        }

        let weight = question.effective_points();
        let earned = if correct { weight } else { 0.0 };

        QuestionResult {
            question_id: question.id.clone(),
            is_correct: Some(correct),
            score: round2(earned),
            earned_points: earned,
            possible_points: weight,
            requires_manual_grading: false,
            ungraded_reason: None,
        }
    }

    fn unknown_question_result(question_id: &str) -> QuestionResult {
        QuestionResult {
            question_id: question_id.to_string(),
            is_correct: Some(false),
            score: 0.0,
            earned_points: 0.0,
            possible_points: 0.0,
            requires_manual_grading: false,
            ungraded_reason: Some(UngradedReason::UnknownQuestion),
        }
    }

    // Submitted slot keys that address no gap/dropdown/hint are a contract
    // violation between authoring and submission. They are ignored for
    // scoring but logged for diagnosis.
    fn warn_on_unknown_keys(question: &Question, answer: &Value, comparison: &Comparison) {
        if !question.question_type.is_slotted() {
            return;
        }
        if let Some(map) = answer.as_object() {
            for key in map.keys() {
                if !comparison.units.iter().any(|u| u.key == *key) {
                    tracing::warn!(
                        "Ignoring out-of-range answer key {} for question {}",
                        key,
                        question.id
                    );
                }
            }
        }
    }
}
