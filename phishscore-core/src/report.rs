// phishscore-core/src/report.rs
//! Data structures for explainable scoring output.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::verdict::{score_percentage, RiskLevel, Verdict};

/// Severity tier of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        write!(f, "{}", label)
    }
}

/// One triggered check's contribution to the total score.
///
/// Produced by exactly one check invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckFinding {
    /// Display name of the check that fired.
    pub check: String,
    /// Points this finding contributed to the total.
    pub points: u32,
    /// Human-readable rationale.
    pub description: String,
    /// Severity tier for caller-side styling.
    pub severity: Severity,
}

impl CheckFinding {
    pub fn new(
        check: impl Into<String>,
        points: u32,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            check: check.into(),
            points,
            description: description.into(),
            severity,
        }
    }
}

/// Aggregate result of analyzing one URL.
///
/// Constructed once per analysis and immutable thereafter. `details` holds
/// the findings in check evaluation order; verdict, risk level, and the
/// saturating percentage all derive solely from the summed score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub verdict: Verdict,
    pub score: u32,
    pub risk_level: RiskLevel,
    pub score_percentage: u32,
    pub details: Vec<CheckFinding>,
}

impl AnalysisResult {
    /// Folds accumulated findings into a classified result.
    pub fn from_findings(details: Vec<CheckFinding>) -> Self {
        let score = details.iter().map(|finding| finding.points).sum();
        Self {
            verdict: Verdict::from_score(score),
            score,
            risk_level: RiskLevel::from_score(score),
            score_percentage: score_percentage(score),
            details,
        }
    }
}
