use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::GradingError;
use crate::models::answer::{AttemptRecord, SubmittedAnswer};
use crate::models::question::Question;
use crate::models::review::QuestionReview;

use super::evaluator::AnswerEvaluator;
use super::review_service::ReviewProjection;
use super::scoring::ScoreAggregator;

/// Read contract for the question snapshot. Implementations must return the
/// full ordered question list with gaps, dropdowns, hint words, options and
/// points populated before grading begins.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn questions_for_quiz(&self, quiz_id: &str) -> Result<Vec<Question>>;
}

/// Write/read contract for graded attempts.
#[async_trait]
pub trait AttemptStore: Send + Sync {
    async fn save_attempt(&self, attempt: &AttemptRecord) -> Result<()>;
    async fn attempts_for_user(&self, user_id: &str, quiz_id: &str) -> Result<Vec<AttemptRecord>>;
}

/// Orchestrates one grading pass: fetch the question snapshot once, evaluate
/// every answer against that same snapshot, aggregate, persist. Storage
/// failures surface as hard errors; grading itself cannot fail.
pub struct GradingService<Q, A> {
    questions: Q,
    attempts: A,
}

impl<Q: QuestionStore, A: AttemptStore> GradingService<Q, A> {
    pub fn new(questions: Q, attempts: A) -> Self {
        Self {
            questions,
            attempts,
        }
    }

    pub async fn grade_submission(
        &self,
        quiz_id: &str,
        user_id: &str,
        answers: Vec<SubmittedAnswer>,
    ) -> Result<AttemptRecord, GradingError> {
        tracing::info!(
            "Grading submission: quiz={}, user={}, answers={}",
            quiz_id,
            user_id,
            answers.len()
        );

        // One snapshot per attempt; every answer grades against it.
        let questions = self
            .questions
            .questions_for_quiz(quiz_id)
            .await
            .map_err(|source| GradingError::QuestionSetUnavailable {
                quiz_id: quiz_id.to_string(),
                source,
            })?;

        let results = AnswerEvaluator::evaluate_attempt(&questions, &answers);
        let score = ScoreAggregator::aggregate(&results);

        let attempt = AttemptRecord {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            quiz_id: quiz_id.to_string(),
            answers,
            results,
            earned_points: score.earned_points,
            possible_points: score.possible_points,
            score: score.final_score_percent,
            passed: score.passed,
            submitted_at: Utc::now(),
        };

        self.attempts
            .save_attempt(&attempt)
            .await
            .map_err(|source| GradingError::AttemptStorage {
                context: format!("saving attempt {}", attempt.id),
                source,
            })?;

        tracing::info!(
            "Submission graded: quiz={}, user={}, percent={}, passed={}",
            quiz_id,
            user_id,
            attempt.score,
            attempt.passed
        );

        Ok(attempt)
    }

    /// Best stored attempt for one (user, quiz) pair: highest score, ties
    /// resolved to the most recent submission.
    pub async fn best_attempt(
        &self,
        user_id: &str,
        quiz_id: &str,
    ) -> Result<Option<AttemptRecord>, GradingError> {
        let attempts = self
            .attempts
            .attempts_for_user(user_id, quiz_id)
            .await
            .map_err(|source| GradingError::AttemptStorage {
                context: format!("listing attempts for user {} quiz {}", user_id, quiz_id),
                source,
            })?;

        Ok(ReviewProjection::best_attempt(&attempts, user_id, quiz_id).cloned())
    }

    /// Review rows for a stored attempt, replayed through the comparators.
    pub async fn review_attempt(
        &self,
        attempt: &AttemptRecord,
    ) -> Result<Vec<QuestionReview>, GradingError> {
        let questions = self
            .questions
            .questions_for_quiz(&attempt.quiz_id)
            .await
            .map_err(|source| GradingError::QuestionSetUnavailable {
                quiz_id: attempt.quiz_id.clone(),
                source,
            })?;

        Ok(ReviewProjection::project(&questions, &attempt.answers))
    }
}
