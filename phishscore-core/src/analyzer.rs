// phishscore-core/src/analyzer.rs
//! The scoring engine: runs the check suite in its fixed order and folds
//! the findings into a classified result.

use log::{debug, info};
use once_cell::sync::Lazy;
use phishscore_randomness::TokenClassifier;

use crate::checks::{keywords, randomness, structural};
use crate::config::AnalyzerConfig;
use crate::errors::AnalysisError;
use crate::report::{AnalysisResult, CheckFinding};
use crate::url_parts::UrlParts;

/// Heuristic URL analyzer.
///
/// Holds the tunable cutoffs and the compiled allowlist automaton. The
/// analyzer is `Send + Sync` and reusable: configuration is immutable after
/// construction, so `analyze` is safely callable from any number of threads
/// without locking.
pub struct UrlAnalyzer {
    config: AnalyzerConfig,
    classifier: TokenClassifier,
}

impl UrlAnalyzer {
    /// Creates an analyzer with the canonical configuration.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Creates an analyzer with explicit cutoffs.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        let classifier = TokenClassifier::with_config(config.randomness.clone());
        Self { config, classifier }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Scores a URL and classifies the total.
    ///
    /// Fails with [`AnalysisError::EmptyUrl`] for empty input and
    /// [`AnalysisError::MalformedUrl`] when the text does not parse after
    /// scheme normalization. A parse failure aborts the call with no
    /// partial result.
    pub fn analyze(&self, url: &str) -> Result<AnalysisResult, AnalysisError> {
        let parts = UrlParts::parse(url)?;
        debug!("analyzing normalized URL '{}'", parts.raw());

        let mut details: Vec<CheckFinding> = Vec::new();
        {
            let mut record = |finding: Option<CheckFinding>| {
                if let Some(finding) = finding {
                    debug!("check '{}' fired for {} point(s)", finding.check, finding.points);
                    details.push(finding);
                }
            };

            record(structural::check_ip_literal(&parts));
            record(structural::check_at_symbol(&parts));
            record(structural::check_url_length(&parts, &self.config));
            record(structural::check_scheme(&parts));
            record(structural::check_subdomain_depth(&parts, &self.config));
            record(structural::check_hyphenated_host(&parts));
            record(structural::check_shortener_host(&parts));
            record(structural::check_free_hosting(&parts));
            record(structural::check_tld_risk(&parts));
            record(structural::check_double_slash_path(&parts));
            record(structural::check_encoded_characters(&parts));
            record(structural::check_nonstandard_port(&parts));
            record(keywords::check_keywords(&parts, &self.config));
            record(randomness::check_random_tokens(&parts, &self.config, &self.classifier));
        }

        let result = AnalysisResult::from_findings(details);
        info!("analysis complete: score {} -> {}", result.score, result.verdict);
        Ok(result)
    }
}

impl Default for UrlAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_ANALYZER: Lazy<UrlAnalyzer> = Lazy::new(UrlAnalyzer::new);

/// Analyzes a URL with the canonical configuration.
///
/// Convenience wrapper over a process-wide [`UrlAnalyzer`] so callers do
/// not rebuild the allowlist automaton per call.
pub fn analyze_url(url: &str) -> Result<AnalysisResult, AnalysisError> {
    DEFAULT_ANALYZER.analyze(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_findings_follow_check_order() {
        let analyzer = UrlAnalyzer::new();
        let result = analyzer
            .analyze("http://user@secure-update.tk:8080/a//b?id=xqzkwjvqz")
            .unwrap();

        let names: Vec<&str> = result.details.iter().map(|f| f.check.as_str()).collect();
        let expected = [
            "@ Symbol Detected",
            "No HTTPS",
            "Hyphens in Domain",
            "Suspicious TLD",
            "Double Slash in Path",
            "Non-Standard Port",
            "Suspicious Keywords",
            "Random Character Sequences",
        ];
        assert_eq!(names, expected);
    }

    #[test]
    fn test_analyzer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UrlAnalyzer>();
    }
}
