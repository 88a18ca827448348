//! Overall-score aggregation.
//!
//! The overall score is the average of the per-question scores for every
//! question that has recorded feedback. Questions without feedback
//! contribute nothing — they are excluded from both the sum and the
//! divisor, so an unevaluated question does not drag the average toward
//! zero.

use crate::store::FeedbackStore;

/// Round to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the overall session score from recorded feedback.
///
/// Averages the scores of questions that have feedback, rounded to 2
/// decimals. Returns 0.0 when no question has feedback. Pure function of
/// the store contents; recomputed on demand, never cached.
pub fn overall_score(feedback: &FeedbackStore, questions: &[String]) -> f64 {
    let scores: Vec<f64> = questions
        .iter()
        .filter_map(|q| feedback.get(q).map(|f| f.score))
        .collect();

    if scores.is_empty() {
        return 0.0;
    }

    round2(scores.iter().sum::<f64>() / scores.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Feedback;

    fn feedback(score: f64) -> Feedback {
        Feedback {
            sentiment: 0.0,
            keyword_coverage: 0.0,
            score,
            tips: vec![],
        }
    }

    fn questions(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Q{i}")).collect()
    }

    #[test]
    fn no_feedback_scores_zero() {
        let store = FeedbackStore::default();
        assert_eq!(overall_score(&store, &questions(3)), 0.0);
        assert_eq!(overall_score(&store, &[]), 0.0);
    }

    #[test]
    fn averages_recorded_scores() {
        let mut store = FeedbackStore::default();
        store.record("Q1", feedback(80.0));
        store.record("Q2", feedback(90.0));

        assert_eq!(overall_score(&store, &questions(2)), 85.00);
    }

    #[test]
    fn single_score_passes_through() {
        let mut store = FeedbackStore::default();
        store.record("Q1", feedback(70.0));

        assert_eq!(overall_score(&store, &questions(1)), 70.00);
    }

    #[test]
    fn unevaluated_questions_contribute_nothing() {
        let mut store = FeedbackStore::default();
        store.record("Q1", feedback(60.0));
        store.record("Q3", feedback(100.0));

        // Q2 has no feedback: divisor is 2, not 3.
        assert_eq!(overall_score(&store, &questions(3)), 80.00);
    }

    #[test]
    fn rounds_to_two_decimals() {
        let mut store = FeedbackStore::default();
        store.record("Q1", feedback(1.0));
        store.record("Q2", feedback(2.0));
        store.record("Q3", feedback(2.0));

        assert_eq!(overall_score(&store, &questions(3)), 1.67);
    }

    #[test]
    fn ignores_feedback_for_unknown_questions() {
        let mut store = FeedbackStore::default();
        store.record("Q1", feedback(50.0));
        store.record("stale question", feedback(100.0));

        assert_eq!(overall_score(&store, &questions(1)), 50.00);
    }
}
