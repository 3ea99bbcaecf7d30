pub mod answer;
pub mod question;
pub mod review;

pub use answer::{AttemptRecord, AttemptScore, QuestionResult, SubmittedAnswer, UngradedReason};
pub use question::{AnswerOption, DropdownSlot, Gap, HintWord, Question, QuestionType};
pub use review::QuestionReview;
