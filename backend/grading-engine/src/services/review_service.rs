use std::collections::HashMap;

use crate::models::answer::{AttemptRecord, SubmittedAnswer};
use crate::models::question::Question;
use crate::models::review::QuestionReview;

use super::comparators;

/// Read-side projection for the attempt review screen. Replays the same
/// comparator output that scoring consumed, so the positional sub-unit keys
/// and match verdicts can never drift from what was actually graded.
pub struct ReviewProjection;

impl ReviewProjection {
    /// Review rows for every submitted answer that still has a matching
    /// question in the snapshot. Stale references have nothing to display
    /// and are skipped.
    pub fn project(questions: &[Question], answers: &[SubmittedAnswer]) -> Vec<QuestionReview> {
        let by_id: HashMap<&str, &Question> =
            questions.iter().map(|q| (q.id.as_str(), q)).collect();

        answers
            .iter()
            .filter_map(|submitted| {
                let question = by_id.get(submitted.question_id.as_str())?;
                Some(Self::project_question(question, submitted))
            })
            .collect()
    }

    pub fn project_question(question: &Question, submitted: &SubmittedAnswer) -> QuestionReview {
        let comparison = comparators::compare(question, &submitted.answer);

        let mut review = QuestionReview {
            question_id: question.id.clone(),
            question_parts: Vec::with_capacity(comparison.units.len()),
            correct_answers: Vec::with_capacity(comparison.units.len()),
            user_answers: Vec::with_capacity(comparison.units.len()),
            answer_status: Vec::with_capacity(comparison.units.len()),
        };

        for unit in comparison.units {
            review.question_parts.push(unit.label);
            review.correct_answers.push(unit.expected);
            review.user_answers.push(unit.submitted.unwrap_or_default());
            review.answer_status.push(unit.matched);
        }

        review
    }

    /// Best stored attempt per (user, quiz) pair: highest score, ties
    /// resolved to the most recent submission.
    pub fn best_attempts(attempts: &[AttemptRecord]) -> HashMap<(String, String), &AttemptRecord> {
        let mut best: HashMap<(String, String), &AttemptRecord> = HashMap::new();

        for attempt in attempts {
            let key = (attempt.user_id.clone(), attempt.quiz_id.clone());
            match best.get(&key) {
                Some(current) if current.ranking_key() >= attempt.ranking_key() => {}
                _ => {
                    best.insert(key, attempt);
                }
            }
        }

        best
    }

    /// Best stored attempt for one (user, quiz) pair.
    pub fn best_attempt<'a>(
        attempts: &'a [AttemptRecord],
        user_id: &str,
        quiz_id: &str,
    ) -> Option<&'a AttemptRecord> {
        attempts
            .iter()
            .filter(|a| a.user_id == user_id && a.quiz_id == quiz_id)
            .max_by_key(|a| a.ranking_key())
    }
}
