use crate::models::answer::{AttemptScore, QuestionResult};

/// Fixed pass threshold. A policy constant, not configuration.
pub const PASS_THRESHOLD_PERCENT: u32 = 90;

/// Reduces per-question results to the attempt-level score.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Sums full-precision earned/possible totals across results and derives
    /// the integer percentage and pass flag. Manual-grading questions carry
    /// zero possible points until resolved, so they never dilute the
    /// percentage; an attempt with nothing auto-gradable scores 0 rather
    /// than dividing by zero.
    pub fn aggregate(results: &[QuestionResult]) -> AttemptScore {
        let earned_points: f64 = results.iter().map(|r| r.earned_points).sum();
        let possible_points: f64 = results.iter().map(|r| r.possible_points).sum();

        let final_score_percent = if possible_points == 0.0 {
            0
        } else {
            (earned_points / possible_points * 100.0).round() as u32
        };

        AttemptScore {
            earned_points,
            possible_points,
            final_score_percent,
            passed: final_score_percent >= PASS_THRESHOLD_PERCENT,
        }
    }
}

/// 2-decimal rounding applied to stored per-question scores. Aggregation
/// always reads the full-precision totals instead of these.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_rounds_to_two_places() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(2.333_333), 2.33);
        assert_eq!(round2(5.0), 5.0);
    }
}
