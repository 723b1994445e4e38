//! Suspicious keyword detection over the full URL text.

use log::debug;

use crate::config::{AnalyzerConfig, SUSPICIOUS_KEYWORDS};
use crate::report::{CheckFinding, Severity};
use crate::url_parts::UrlParts;

/// Scans the lowercased, hyphen-stripped URL for suspicious keywords.
///
/// Hyphen stripping lets "secure-login" match the same tokens as
/// "securelogin". Matches are deduped by value, so a keyword occurring
/// twice (or listed twice) contributes exactly once to the score.
pub fn check_keywords(parts: &UrlParts, config: &AnalyzerConfig) -> Option<CheckFinding> {
    let haystack = parts.raw().to_lowercase().replace('-', "");

    let mut matched: Vec<&str> = Vec::new();
    for &keyword in SUSPICIOUS_KEYWORDS {
        if !matched.contains(&keyword) && haystack.contains(keyword) {
            matched.push(keyword);
        }
    }

    if matched.is_empty() {
        return None;
    }

    debug!("keyword scan matched {:?}", matched);
    let points = config.points_per_keyword * matched.len() as u32;
    Some(CheckFinding::new(
        "Suspicious Keywords",
        points,
        format!("Contains suspicious keywords: {}", matched.join(", ")),
        Severity::Medium,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(url: &str) -> UrlParts {
        UrlParts::parse(url).unwrap()
    }

    #[test]
    fn test_no_keywords_no_finding() {
        let config = AnalyzerConfig::default();
        assert!(check_keywords(&parts("http://example.com/"), &config).is_none());
    }

    #[test]
    fn test_two_points_per_distinct_keyword() {
        let config = AnalyzerConfig::default();
        let finding =
            check_keywords(&parts("http://example.com/login?step=verify"), &config).unwrap();
        assert_eq!(finding.points, 4);
        assert!(finding.description.contains("login"));
        assert!(finding.description.contains("verify"));
    }

    #[test]
    fn test_hyphen_stripping_joins_tokens() {
        let config = AnalyzerConfig::default();
        let finding = check_keywords(&parts("http://secure-login.example.com/"), &config).unwrap();
        assert!(finding.description.contains("secure"));
        assert!(finding.description.contains("login"));
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let config = AnalyzerConfig::default();
        let finding = check_keywords(&parts("http://login.example.com/login"), &config).unwrap();
        assert_eq!(finding.points, 2);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let config = AnalyzerConfig::default();
        let finding = check_keywords(&parts("http://example.com/LOGIN"), &config).unwrap();
        assert_eq!(finding.points, 2);
    }
}
