//! Random-token detection across host, path, and query components.

use log::debug;
use phishscore_randomness::TokenClassifier;

use crate::config::AnalyzerConfig;
use crate::report::{CheckFinding, Severity};
use crate::url_parts::UrlParts;

/// Scans the URL's components for machine-generated tokens.
///
/// Candidates are examined in a fixed scan order: host labels, then path
/// segments (above the length cutoff), then query values (above theirs).
/// Flagged tokens are deduped by value; the sub-score is capped so a pile
/// of random tokens cannot dominate the total on its own.
pub fn check_random_tokens(
    parts: &UrlParts,
    config: &AnalyzerConfig,
    classifier: &TokenClassifier,
) -> Option<CheckFinding> {
    let mut seen: Vec<String> = Vec::new();
    let mut found: Vec<String> = Vec::new();

    {
        let mut flag = |candidate: &str, display: &str| {
            if seen.iter().any(|token| token == candidate) {
                return;
            }
            if classifier.is_random(candidate) {
                seen.push(candidate.to_string());
                found.push(display.to_string());
            }
        };

        for label in parts.host_labels() {
            flag(label, label);
        }
        for segment in parts.path_segments() {
            if segment.chars().count() >= config.min_path_segment_len {
                flag(segment, segment);
            }
        }
        for (_key, value) in parts.query_pairs() {
            if value.chars().count() >= config.min_query_value_len {
                // Long values are shortened in the finding text only; the
                // classifier always sees the full value.
                let display = truncate_for_display(value, config.query_value_display_len);
                flag(value, &display);
            }
        }
    }

    if found.is_empty() {
        return None;
    }

    debug!("randomness scan flagged {} token(s)", found.len());
    let points = (config.points_per_random_token * found.len() as u32)
        .min(config.randomness_score_cap);
    let examples = found
        .iter()
        .take(config.randomness_example_limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    Some(CheckFinding::new(
        "Random Character Sequences",
        points,
        format!("Contains suspicious random sequences: {}", examples),
        Severity::Medium,
    ))
}

fn truncate_for_display(value: &str, limit: usize) -> String {
    if value.chars().count() > limit {
        let head: String = value.chars().take(limit).collect();
        format!("{}...", head)
    } else {
        value.to_string()
    }
}
