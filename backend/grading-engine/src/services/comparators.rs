use serde_json::Value;
use std::collections::BTreeSet;

use crate::models::question::{Question, QuestionType};
use crate::utils::text::{normalize, normalize_highlight};

/// One independently scored piece of a question: a gap, a dropdown slot, a
/// hint word, a checkbox option, or the whole answer for single-unit types.
#[derive(Debug, Clone)]
pub struct UnitMatch {
    /// Positional key the submission addresses this unit by (`gap_0`,
    /// `dropdown_1`, `hint_0`, ...). Single-unit types use a fixed key.
    pub key: String,
    /// Human label for the review rows.
    pub label: String,
    /// Display form of the expected value.
    pub expected: String,
    /// What the learner submitted for this unit, if anything usable.
    pub submitted: Option<String>,
    pub matched: bool,
}

/// Raw comparator verdict, before the point weight is applied.
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    pub units: Vec<UnitMatch>,
    /// Deferred to a human grader: no units, no possible points.
    pub manual: bool,
    /// Checkbox selections that are not correct options. They never subtract
    /// points but they do veto question-level correctness.
    pub stray_selections: u32,
}

impl Comparison {
    fn manual_review() -> Self {
        Self {
            manual: true,
            ..Self::default()
        }
    }

    pub fn correct_units(&self) -> u32 {
        self.units.iter().filter(|u| u.matched).count() as u32
    }

    pub fn total_units(&self) -> u32 {
        self.units.len() as u32
    }

    /// Question-level correctness: every unit matched and nothing stray.
    pub fn all_matched(&self) -> bool {
        self.stray_selections == 0 && self.units.iter().all(|u| u.matched)
    }
}

/// Applies the type-specific comparison between a question and one submitted
/// payload. Scoring and the review projection both consume this single
/// function, so the positional key scheme and match verdicts cannot drift
/// between the two.
pub fn compare(question: &Question, answer: &Value) -> Comparison {
    match question.question_type {
        QuestionType::BlankBoxes
        | QuestionType::GeneratedDropdowns
        | QuestionType::DragDropMatching
        | QuestionType::Reading => compare_slotted(question, answer),
        QuestionType::MultipleChoice => compare_multiple_choice(question, answer),
        QuestionType::Checkboxes => compare_checkboxes(question, answer),
        QuestionType::FindHighlight => compare_highlights(question, answer),
        QuestionType::Essay | QuestionType::Description | QuestionType::Speaking => {
            Comparison::manual_review()
        }
        QuestionType::Unknown => compare_literal(question, answer),
    }
}

/// Gap + dropdown + hint sub-units, concatenated in that order. Each
/// collection is keyed from zero independently.
fn compare_slotted(question: &Question, answer: &Value) -> Comparison {
    let mut units = Vec::new();

    for (i, gap) in question.gaps.iter().enumerate() {
        let key = format!("gap_{}", i);
        let submitted = slot_value(answer, &key);
        let matched = submitted.as_deref().is_some_and(|s| {
            let normalized = normalize(s);
            gap.correct_answers.iter().any(|c| normalize(c) == normalized)
        });
        units.push(UnitMatch {
            label: format!("Gap {}", i + 1),
            expected: gap.correct_answers.join(" / "),
            submitted,
            matched,
            key,
        });
    }

    for (i, slot) in question.dropdowns.iter().enumerate() {
        let key = format!("dropdown_{}", i);
        let submitted = slot_value(answer, &key);
        let matched = submitted
            .as_deref()
            .is_some_and(|s| normalize(s) == normalize(&slot.correct_answer));
        units.push(UnitMatch {
            label: format!("Dropdown {}", i + 1),
            expected: slot.correct_answer.clone(),
            submitted,
            matched,
            key,
        });
    }

    for (i, hint) in question.hint_words.iter().enumerate() {
        let key = format!("hint_{}", i);
        let submitted = slot_value(answer, &key);
        let matched = submitted
            .as_deref()
            .is_some_and(|s| normalize(s) == normalize(&hint.word));
        units.push(UnitMatch {
            label: format!("Hint {}", i + 1),
            expected: hint.word.clone(),
            submitted,
            matched,
            key,
        });
    }

    Comparison {
        units,
        ..Comparison::default()
    }
}

fn compare_multiple_choice(question: &Question, answer: &Value) -> Comparison {
    let correct = match question.options.iter().find(|o| o.is_correct) {
        Some(option) => option,
        // No correct option authored: nothing to score.
        None => return Comparison::default(),
    };

    let submitted = answer.as_str().map(str::to_string);
    let matched = submitted
        .as_deref()
        .is_some_and(|s| normalize(s) == normalize(&correct.text));

    Comparison {
        units: vec![UnitMatch {
            key: "choice".to_string(),
            label: "Choice".to_string(),
            expected: correct.text.clone(),
            submitted,
            matched,
        }],
        ..Comparison::default()
    }
}

/// One sub-unit per correct option. Stray selections earn nothing and cost
/// nothing, but any stray forces question-level correctness to false.
fn compare_checkboxes(question: &Question, answer: &Value) -> Comparison {
    let selected = selected_indices(answer);
    let mut units = Vec::new();

    for (i, option) in question.options.iter().enumerate() {
        if !option.is_correct {
            continue;
        }
        let matched = selected.contains(&i);
        units.push(UnitMatch {
            key: format!("option_{}", i),
            label: option.text.clone(),
            expected: option.text.clone(),
            submitted: matched.then(|| option.text.clone()),
            matched,
        });
    }

    let stray_selections = selected
        .iter()
        .filter(|&&i| !question.options.get(i).is_some_and(|o| o.is_correct))
        .count() as u32;

    Comparison {
        units,
        stray_selections,
        ..Comparison::default()
    }
}

/// One sub-unit per gap; each gap's first correct answer is matched against
/// the submitted highlight list under highlight normalization. Matching is
/// greedy and order-insensitive with one-to-one consumption: a highlight
/// spent on one gap cannot satisfy another.
fn compare_highlights(question: &Question, answer: &Value) -> Comparison {
    let highlights = highlight_texts(answer);
    let mut consumed = vec![false; highlights.len()];
    let mut units = Vec::new();

    for (i, gap) in question.gaps.iter().enumerate() {
        let expected_raw = gap.correct_answers.first().cloned().unwrap_or_default();
        let expected_norm = normalize_highlight(&expected_raw);

        let hit = if expected_norm.is_empty() {
            None
        } else {
            highlights
                .iter()
                .enumerate()
                .find(|(j, text)| !consumed[*j] && normalize_highlight(text) == expected_norm)
                .map(|(j, _)| j)
        };
        if let Some(j) = hit {
            consumed[j] = true;
        }

        units.push(UnitMatch {
            key: format!("gap_{}", i),
            label: format!("Highlight {}", i + 1),
            expected: expected_raw,
            submitted: hit.map(|j| highlights[j].clone()),
            matched: hit.is_some(),
        });
    }

    Comparison {
        units,
        ..Comparison::default()
    }
}

/// Fallback for unrecognized types: exact structural equality between the
/// submitted JSON value and the question's stored `correct_answer`.
fn compare_literal(question: &Question, answer: &Value) -> Comparison {
    let expected = match question.correct_answer.as_ref() {
        Some(value) => value,
        None => return Comparison::default(),
    };
    let matched = answer == expected;

    Comparison {
        units: vec![UnitMatch {
            key: "answer".to_string(),
            label: "Answer".to_string(),
            expected: display_value(expected),
            submitted: if answer.is_null() {
                None
            } else {
                Some(display_value(answer))
            },
            matched,
        }],
        ..Comparison::default()
    }
}

/// Reads one slot answer out of the submitted payload. Accepts an object
/// with string or numeric values; any other shape is treated as absent.
fn slot_value(answer: &Value, key: &str) -> Option<String> {
    match answer.as_object()?.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// De-duplicates the submitted checkbox payload into a set of option
/// indices. Accepts an array of integers or numeric strings; anything else
/// contributes nothing.
fn selected_indices(answer: &Value) -> BTreeSet<usize> {
    let mut indices = BTreeSet::new();
    if let Some(items) = answer.as_array() {
        for item in items {
            let parsed = match item {
                Value::Number(n) => n.as_u64().map(|v| v as usize),
                Value::String(s) => s.trim().parse::<usize>().ok(),
                _ => None,
            };
            if let Some(i) = parsed {
                indices.insert(i);
            }
        }
    }
    indices
}

/// Extracts highlighted span texts from the submitted payload. Accepts an
/// array of `{text}` objects or plain strings.
fn highlight_texts(answer: &Value) -> Vec<String> {
    answer
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Object(map) => {
                        map.get("text").and_then(Value::as_str).map(str::to_string)
                    }
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
