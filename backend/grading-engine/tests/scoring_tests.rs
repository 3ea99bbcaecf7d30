mod common;

use common::{gap, option, question};
use quizground_grading::{
    AnswerEvaluator, QuestionResult, QuestionType, ScoreAggregator, PASS_THRESHOLD_PERCENT,
};
use serde_json::json;

fn result(earned: f64, possible: f64) -> QuestionResult {
    QuestionResult {
        question_id: "q".to_string(),
        is_correct: Some(earned >= possible),
        score: earned,
        earned_points: earned,
        possible_points: possible,
        requires_manual_grading: false,
        ungraded_reason: None,
    }
}

#[test]
fn multiple_choice_plus_gap_scenario_scores_full_marks() {
    let mut choice = question("mc", QuestionType::MultipleChoice);
    choice.points = Some(10);
    choice.options = vec![
        option("Paris", true),
        option("London", false),
        option("Rome", false),
    ];

    let mut blank = question("gap", QuestionType::BlankBoxes);
    blank.points = Some(5);
    blank.gaps = vec![gap(&["cat", "kitten"])];

    let results = AnswerEvaluator::evaluate_attempt(
        &[choice, blank],
        &[
            common::answer("mc", json!("Paris")),
            common::answer("gap", json!({"gap_0": "Kitten"})),
        ],
    );
    let score = ScoreAggregator::aggregate(&results);

    assert_eq!(score.earned_points, 15.0);
    assert_eq!(score.possible_points, 15.0);
    assert_eq!(score.final_score_percent, 100);
    assert!(score.passed);
}

#[test]
fn partial_checkbox_scenario_scores_half() {
    let mut boxes = question("cb", QuestionType::Checkboxes);
    boxes.points = Some(2);
    boxes.options = vec![option("A", true), option("B", true), option("C", false)];

    let results =
        AnswerEvaluator::evaluate_attempt(&[boxes], &[common::answer("cb", json!([0]))]);
    let score = ScoreAggregator::aggregate(&results);

    assert_eq!(score.earned_points, 2.0);
    assert_eq!(score.possible_points, 4.0);
    assert_eq!(score.final_score_percent, 50);
    assert!(!score.passed);
}

#[test]
fn empty_attempt_scores_zero_without_dividing() {
    let score = ScoreAggregator::aggregate(&[]);

    assert_eq!(score.earned_points, 0.0);
    assert_eq!(score.possible_points, 0.0);
    assert_eq!(score.final_score_percent, 0);
    assert!(!score.passed);
}

#[test]
fn manual_only_attempt_scores_zero() {
    let essay = question("essay", QuestionType::Essay);

    let results = AnswerEvaluator::evaluate_attempt(
        &[essay],
        &[common::answer("essay", json!("my response"))],
    );
    let score = ScoreAggregator::aggregate(&results);

    assert_eq!(score.possible_points, 0.0);
    assert_eq!(score.final_score_percent, 0);
    assert!(!score.passed);
}

#[test]
fn pass_threshold_is_ninety_percent() {
    assert_eq!(PASS_THRESHOLD_PERCENT, 90);

    let passing = ScoreAggregator::aggregate(&[result(90.0, 100.0)]);
    assert_eq!(passing.final_score_percent, 90);
    assert!(passing.passed);

    let failing = ScoreAggregator::aggregate(&[result(89.0, 100.0)]);
    assert_eq!(failing.final_score_percent, 89);
    assert!(!failing.passed);
}

#[test]
fn percentage_rounds_to_nearest_integer() {
    // 2 of 3 units: 66.67% rounds to 67.
    let score = ScoreAggregator::aggregate(&[result(2.0, 3.0)]);
    assert_eq!(score.final_score_percent, 67);

    let score = ScoreAggregator::aggregate(&[result(1.0, 3.0)]);
    assert_eq!(score.final_score_percent, 33);
}

#[test]
fn aggregation_uses_full_precision_totals() {
    // Three thirds make a whole; summing the display-rounded 0.33 scores
    // would only reach 99%.
    let third = 1.0 / 3.0;
    let results = vec![
        result(third, third),
        result(third, third),
        result(third, third),
    ];

    let score = ScoreAggregator::aggregate(&results);
    assert_eq!(score.final_score_percent, 100);
}

#[test]
fn resolving_manual_grades_moves_weight_into_the_total() {
    let mut blank = question("gap", QuestionType::BlankBoxes);
    blank.points = Some(5);
    blank.gaps = vec![gap(&["alpha"])];

    let mut essay = question("essay", QuestionType::Essay);
    essay.points = Some(5);

    let questions = vec![blank, essay.clone()];
    let mut results = AnswerEvaluator::evaluate_attempt(
        &questions,
        &[
            common::answer("gap", json!({"gap_0": "alpha"})),
            common::answer("essay", json!("free-form response")),
        ],
    );

    // Before resolution the essay is excluded entirely.
    let before = ScoreAggregator::aggregate(&results);
    assert_eq!(before.final_score_percent, 100);

    results[1] = AnswerEvaluator::resolve_manual(&essay, false);
    let rejected = ScoreAggregator::aggregate(&results);
    assert_eq!(rejected.earned_points, 5.0);
    assert_eq!(rejected.possible_points, 10.0);
    assert_eq!(rejected.final_score_percent, 50);

    results[1] = AnswerEvaluator::resolve_manual(&essay, true);
    let accepted = ScoreAggregator::aggregate(&results);
    assert_eq!(accepted.final_score_percent, 100);
    assert!(accepted.passed);
}
