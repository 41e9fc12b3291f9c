//! Compliance scoring over recorded answers.
//!
//! The score of an audit is the percentage of distinct answered questions
//! that have at least one compliant attempt. Multiple attempts exist so a
//! remediated answer can flip a question to compliant without deleting the
//! failed first attempt; hence the logical OR across attempts.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

/// One recorded answer, reduced to what scoring needs.
///
/// `is_compliant = None` means "answered but not yet assessed" and counts
/// as non-compliant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub question_id: Uuid,
    pub is_compliant: Option<bool>,
}

impl AnswerOutcome {
    pub fn new(question_id: Uuid, is_compliant: Option<bool>) -> Self {
        Self {
            question_id,
            is_compliant,
        }
    }
}

/// Aggregated scoring result for one audit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreSummary {
    /// Distinct questions with at least one recorded attempt.
    pub answered_questions: usize,
    /// Questions where at least one attempt was marked compliant.
    pub compliant_questions: usize,
    /// Percentage, rounded to two decimals. 0.0 when nothing was answered.
    pub score: f64,
}

/// Aggregates answer outcomes into a [`ScoreSummary`].
///
/// Outcomes are grouped by question; a question counts as compliant when
/// any of its attempts has `is_compliant = Some(true)`. Input order does
/// not matter. An empty input yields a zero summary rather than an error.
pub fn summarize(outcomes: &[AnswerOutcome]) -> ScoreSummary {
    let mut compliant_by_question: HashMap<Uuid, bool> = HashMap::new();
    for outcome in outcomes {
        let entry = compliant_by_question
            .entry(outcome.question_id)
            .or_insert(false);
        *entry |= outcome.is_compliant == Some(true);
    }

    let answered_questions = compliant_by_question.len();
    let compliant_questions = compliant_by_question
        .values()
        .filter(|compliant| **compliant)
        .count();

    let score = if answered_questions == 0 {
        0.0
    } else {
        round_two_decimals(compliant_questions as f64 / answered_questions as f64 * 100.0)
    };

    ScoreSummary {
        answered_questions,
        compliant_questions,
        score,
    }
}

/// Convenience wrapper returning only the percentage.
pub fn global_score(outcomes: &[AnswerOutcome]) -> f64 {
    summarize(outcomes).score
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn question(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(global_score(&[]), 0.0);
    }

    #[test]
    fn remediated_attempt_flips_question_to_compliant() {
        let outcomes = [
            AnswerOutcome::new(question(1), Some(false)),
            AnswerOutcome::new(question(1), Some(true)),
        ];
        assert_eq!(global_score(&outcomes), 100.0);
    }

    #[test]
    fn one_of_two_questions_compliant_scores_fifty() {
        let outcomes = [
            AnswerOutcome::new(question(1), Some(true)),
            AnswerOutcome::new(question(2), Some(false)),
        ];
        assert_eq!(global_score(&outcomes), 50.0);
    }

    #[test]
    fn unassessed_answers_count_as_non_compliant() {
        let outcomes = [
            AnswerOutcome::new(question(1), None),
            AnswerOutcome::new(question(2), Some(true)),
        ];
        assert_eq!(global_score(&outcomes), 50.0);
    }

    #[test]
    fn all_attempts_failed_scores_zero() {
        let outcomes = [
            AnswerOutcome::new(question(1), Some(false)),
            AnswerOutcome::new(question(1), None),
        ];
        assert_eq!(global_score(&outcomes), 0.0);
    }

    #[test]
    fn score_is_rounded_to_two_decimals() {
        let outcomes = [
            AnswerOutcome::new(question(1), Some(true)),
            AnswerOutcome::new(question(2), Some(false)),
            AnswerOutcome::new(question(3), Some(false)),
        ];
        assert_eq!(global_score(&outcomes), 33.33);

        let outcomes = [
            AnswerOutcome::new(question(1), Some(true)),
            AnswerOutcome::new(question(2), Some(true)),
            AnswerOutcome::new(question(3), Some(false)),
        ];
        assert_eq!(global_score(&outcomes), 66.67);
    }

    #[test]
    fn summary_reports_grouped_counts() {
        let outcomes = [
            AnswerOutcome::new(question(1), Some(false)),
            AnswerOutcome::new(question(1), Some(true)),
            AnswerOutcome::new(question(2), Some(false)),
            AnswerOutcome::new(question(3), None),
        ];
        let summary = summarize(&outcomes);
        assert_eq!(summary.answered_questions, 3);
        assert_eq!(summary.compliant_questions, 1);
        assert_eq!(summary.score, 33.33);
    }

    fn arbitrary_outcomes() -> impl Strategy<Value = Vec<AnswerOutcome>> {
        prop::collection::vec(
            (0u128..16, prop::option::of(any::<bool>()))
                .prop_map(|(q, compliant)| AnswerOutcome::new(question(q), compliant)),
            0..64,
        )
    }

    proptest! {
        #[test]
        fn score_stays_within_percentage_bounds(outcomes in arbitrary_outcomes()) {
            let score = global_score(&outcomes);
            prop_assert!((0.0..=100.0).contains(&score));
        }

        #[test]
        fn score_ignores_answer_order(outcomes in arbitrary_outcomes()) {
            let mut reversed = outcomes.clone();
            reversed.reverse();
            prop_assert_eq!(global_score(&outcomes), global_score(&reversed));
        }

        #[test]
        fn appending_a_compliant_attempt_never_lowers_the_score(
            outcomes in arbitrary_outcomes(),
            q in 0u128..16,
        ) {
            let before = global_score(&outcomes);
            let mut extended = outcomes.clone();
            extended.push(AnswerOutcome::new(question(q), Some(true)));
            prop_assert!(global_score(&extended) >= before);
        }
    }
}
