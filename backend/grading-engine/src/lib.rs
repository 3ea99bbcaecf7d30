pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::GradingError;
pub use models::answer::{
    AttemptRecord, AttemptScore, QuestionResult, SubmittedAnswer, UngradedReason,
};
pub use models::question::{AnswerOption, DropdownSlot, Gap, HintWord, Question, QuestionType};
pub use models::review::QuestionReview;
pub use services::evaluator::AnswerEvaluator;
pub use services::grading_service::{AttemptStore, GradingService, QuestionStore};
pub use services::review_service::ReviewProjection;
pub use services::scoring::{PASS_THRESHOLD_PERCENT, ScoreAggregator};
