#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;

use quizground_grading::{
    AnswerOption, AttemptRecord, AttemptStore, DropdownSlot, Gap, HintWord, Question,
    QuestionStore, QuestionType, SubmittedAnswer,
};

pub fn init_tracing() {
    // Initialize tracing for tests
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn question(id: &str, question_type: QuestionType) -> Question {
    Question {
        id: id.to_string(),
        question_type,
        points: None,
        gaps: Vec::new(),
        dropdowns: Vec::new(),
        hint_words: Vec::new(),
        options: Vec::new(),
        correct_answer: None,
    }
}

pub fn gap(alternatives: &[&str]) -> Gap {
    Gap {
        correct_answers: alternatives.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn dropdown(correct: &str) -> DropdownSlot {
    DropdownSlot {
        correct_answer: correct.to_string(),
    }
}

pub fn hint(word: &str) -> HintWord {
    HintWord {
        word: word.to_string(),
    }
}

pub fn option(text: &str, is_correct: bool) -> AnswerOption {
    AnswerOption {
        text: text.to_string(),
        is_correct,
    }
}

pub fn answer(question_id: &str, payload: Value) -> SubmittedAnswer {
    SubmittedAnswer {
        question_id: question_id.to_string(),
        answer: payload,
    }
}

/// Question store backed by a map, standing in for the external storage
/// collaborator in flow tests.
#[derive(Default, Clone)]
pub struct InMemoryQuestionStore {
    quizzes: HashMap<String, Vec<Question>>,
}

impl InMemoryQuestionStore {
    pub fn with_quiz(quiz_id: &str, questions: Vec<Question>) -> Self {
        let mut quizzes = HashMap::new();
        quizzes.insert(quiz_id.to_string(), questions);
        Self { quizzes }
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    async fn questions_for_quiz(&self, quiz_id: &str) -> Result<Vec<Question>> {
        self.quizzes
            .get(quiz_id)
            .cloned()
            .ok_or_else(|| anyhow!("quiz {} not found", quiz_id))
    }
}

/// Attempt store with shared interior so tests can inspect what the service
/// persisted.
#[derive(Default, Clone)]
pub struct InMemoryAttemptStore {
    attempts: Arc<Mutex<Vec<AttemptRecord>>>,
}

impl InMemoryAttemptStore {
    pub fn saved(&self) -> Vec<AttemptRecord> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AttemptStore for InMemoryAttemptStore {
    async fn save_attempt(&self, attempt: &AttemptRecord) -> Result<()> {
        self.attempts.lock().unwrap().push(attempt.clone());
        Ok(())
    }

    async fn attempts_for_user(&self, user_id: &str, quiz_id: &str) -> Result<Vec<AttemptRecord>> {
        Ok(self
            .attempts
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id && a.quiz_id == quiz_id)
            .cloned()
            .collect())
    }
}
