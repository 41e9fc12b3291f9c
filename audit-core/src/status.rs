//! Closed enumerations shared by the audit lifecycle.
//!
//! Each enumeration round-trips through the lowercase snake_case wire form
//! used both in request bodies and in the relational store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a wire string does not belong to a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} '{value}', expected one of: {expected}")]
pub struct EnumParseError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl EnumParseError {
    fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

/// Lifecycle state of an audit session. Transitions only move forward,
/// `InProgress` to `Completed`; an audit is never reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    InProgress,
    Completed,
}

impl AuditStatus {
    pub const EXPECTED: &'static str = "in_progress, completed";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditStatus {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(EnumParseError::new("audit status", other, Self::EXPECTED)),
        }
    }
}

/// Severity of a recorded non-conformity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Minor,
    Major,
    Critical,
}

impl Severity {
    pub const EXPECTED: &'static str = "minor, major, critical";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "minor",
            Self::Major => "major",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minor" => Ok(Self::Minor),
            "major" => Ok(Self::Major),
            "critical" => Ok(Self::Critical),
            other => Err(EnumParseError::new("severity", other, Self::EXPECTED)),
        }
    }
}

/// Workflow state of a non-conformity. The register accepts any of these
/// at creation time; it does not enforce a transition workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NcStatus {
    Open,
    InProgress,
    Closed,
}

impl NcStatus {
    pub const EXPECTED: &'static str = "open, in_progress, closed";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for NcStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NcStatus {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "closed" => Ok(Self::Closed),
            other => Err(EnumParseError::new(
                "non-conformity status",
                other,
                Self::EXPECTED,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_status_round_trips() {
        for status in [AuditStatus::InProgress, AuditStatus::Completed] {
            assert_eq!(status.as_str().parse::<AuditStatus>(), Ok(status));
        }
    }

    #[test]
    fn severity_round_trips() {
        for severity in [Severity::Minor, Severity::Major, Severity::Critical] {
            assert_eq!(severity.as_str().parse::<Severity>(), Ok(severity));
        }
    }

    #[test]
    fn nc_status_round_trips() {
        for status in [NcStatus::Open, NcStatus::InProgress, NcStatus::Closed] {
            assert_eq!(status.as_str().parse::<NcStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert!("reopened".parse::<AuditStatus>().is_err());
        assert!("blocker".parse::<Severity>().is_err());
        assert!("done".parse::<NcStatus>().is_err());
    }

    #[test]
    fn parse_error_names_the_field_and_choices() {
        let err = "huge".parse::<Severity>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("severity"));
        assert!(message.contains("minor, major, critical"));
    }

    #[test]
    fn wire_form_is_snake_case() {
        let json = serde_json::to_string(&NcStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
