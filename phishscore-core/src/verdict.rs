//! Verdict tiers and score scaling.
//!
//! Both tiers derive solely from the total score; nothing else feeds the
//! classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{
    MAX_MEANINGFUL_SCORE, PHISHING_SCORE_THRESHOLD, SUSPICIOUS_SCORE_THRESHOLD,
};

/// Coarse three-tier classification of a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Phishing (High Risk)")]
    Phishing,
    #[serde(rename = "Suspicious (Medium Risk)")]
    Suspicious,
    #[serde(rename = "Likely Legitimate")]
    LikelyLegitimate,
}

impl Verdict {
    pub fn from_score(score: u32) -> Self {
        if score >= PHISHING_SCORE_THRESHOLD {
            Verdict::Phishing
        } else if score >= SUSPICIOUS_SCORE_THRESHOLD {
            Verdict::Suspicious
        } else {
            Verdict::LikelyLegitimate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Phishing => "Phishing (High Risk)",
            Verdict::Suspicious => "Suspicious (Medium Risk)",
            Verdict::LikelyLegitimate => "Likely Legitimate",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Risk tier for caller-side styling, mirroring the verdict thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Danger,
    Warning,
    Success,
}

impl RiskLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= PHISHING_SCORE_THRESHOLD {
            RiskLevel::Danger
        } else if score >= SUSPICIOUS_SCORE_THRESHOLD {
            RiskLevel::Warning
        } else {
            RiskLevel::Success
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Danger => "danger",
            RiskLevel::Warning => "warning",
            RiskLevel::Success => "success",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scales a total score to a percentage of [`MAX_MEANINGFUL_SCORE`],
/// rounded and saturating at 100.
pub fn score_percentage(score: u32) -> u32 {
    let max = MAX_MEANINGFUL_SCORE as u64;
    let scaled = (score as u64 * 100 + max / 2) / max;
    scaled.min(100) as u32
}
