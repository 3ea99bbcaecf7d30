use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed set of question type tags produced by the authoring side.
/// `Unknown` absorbs tags introduced by newer authoring versions so a quiz
/// snapshot always deserializes; those questions grade through the literal
/// comparator against the stored `correct_answer` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    BlankBoxes,
    GeneratedDropdowns,
    DragDropMatching,
    Reading,
    FindHighlight,
    MultipleChoice,
    Checkboxes,
    Essay,
    Description,
    Speaking,
    #[serde(other)]
    Unknown,
}

impl QuestionType {
    /// Types graded from the gap/dropdown/hint slot collections.
    pub fn is_slotted(&self) -> bool {
        matches!(
            self,
            QuestionType::BlankBoxes
                | QuestionType::GeneratedDropdowns
                | QuestionType::DragDropMatching
                | QuestionType::Reading
        )
    }

    /// Types that are never auto-graded.
    pub fn is_manual(&self) -> bool {
        matches!(
            self,
            QuestionType::Essay | QuestionType::Description | QuestionType::Speaking
        )
    }
}

/// A blank embedded in question text. Several alternative strings may all be
/// accepted as correct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gap {
    pub correct_answers: Vec<String>,
}

/// A blank offering a closed set of choices; exactly one is correct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropdownSlot {
    pub correct_answer: String,
}

/// A blank word with a displayed hint, expecting one exact word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HintWord {
    pub word: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
}

/// Immutable question snapshot the engine grades against. The three slot
/// collections are independently zero-indexed: submitted keys `gap_<i>`,
/// `dropdown_<i>` and `hint_<i>` each count within their own collection, not
/// through a shared counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question_type: QuestionType,
    /// Authored weight per scored sub-unit. Missing or non-positive values
    /// normalize to 1, see `effective_points`.
    #[serde(default)]
    pub points: Option<i32>,
    #[serde(default)]
    pub gaps: Vec<Gap>,
    #[serde(default)]
    pub dropdowns: Vec<DropdownSlot>,
    #[serde(default)]
    pub hint_words: Vec<HintWord>,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
    /// Stored correct value for questions graded by the literal comparator.
    #[serde(default)]
    pub correct_answer: Option<Value>,
}

impl Question {
    /// The authored weight when positive, otherwise 1.
    pub fn effective_points(&self) -> f64 {
        match self.points {
            Some(p) if p > 0 => f64::from(p),
            _ => 1.0,
        }
    }
}
