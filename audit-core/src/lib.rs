//! Audit lifecycle domain rules for AuditFlow.
//!
//! This crate holds the pieces of the audit domain that are independent of
//! storage and transport:
//! - Closed enumerations for audit status, non-conformity severity and
//!   non-conformity status, with their wire forms
//! - The answer attempt policy (first attempt plus one remediation re-answer)
//! - The compliance scoring algorithm applied when an audit is completed
//!   without an explicit score

pub mod score;
pub mod status;

pub use score::{global_score, summarize, AnswerOutcome, ScoreSummary};
pub use status::{AuditStatus, EnumParseError, NcStatus, Severity};

/// First valid answer attempt number.
pub const MIN_ATTEMPT: i16 = 1;

/// Last valid answer attempt number. Attempt 2 models the single
/// remediation re-answer allowed after a failed first attempt.
pub const MAX_ATTEMPT: i16 = 2;

/// Whether `attempt` falls inside the allowed attempt window.
///
/// Attempts are intentionally unordered: recording attempt 2 before
/// attempt 1 is permitted, only the bounds are enforced.
pub fn is_valid_attempt(attempt: i16) -> bool {
    (MIN_ATTEMPT..=MAX_ATTEMPT).contains(&attempt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_window_accepts_first_and_remediation() {
        assert!(is_valid_attempt(1));
        assert!(is_valid_attempt(2));
    }

    #[test]
    fn attempt_window_rejects_out_of_range() {
        assert!(!is_valid_attempt(0));
        assert!(!is_valid_attempt(3));
        assert!(!is_valid_attempt(-1));
    }
}
