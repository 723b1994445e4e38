// phishscore-randomness/src/classifier/mod.rs
use daachorse::DoubleArrayAhoCorasick;
extern crate alloc;
use alloc::string::String;
use core::fmt;

use crate::alternation::alternating_pairs;
use crate::bigrams::common_bigram_count;
use crate::streaks::measure_streaks;

/// Common substrings that mark a token as human-chosen.
///
/// A candidate containing any of these is never classified as random, no
/// matter what the statistical signals say.
const ALLOWLIST: &[&str] = &[
    "www", "blog", "shop", "news", "admin", "user", "test", "dev", "api",
    "cdn", "static", "assets", "media", "images", "index", "home", "about",
    "contact", "login", "register", "google", "facebook", "amazon",
    "microsoft", "apple",
];

/// Thresholds for the randomness signals.
///
/// The defaults are empirical constants; downstream scoring behavior is
/// calibrated against them.
#[derive(Debug, Clone)]
pub struct RandomnessConfig {
    /// Tokens shorter than this are never classified as random.
    pub min_token_len: usize,
    /// A vowel run at least this long fires the streak signal.
    pub vowel_run_threshold: usize,
    /// A consonant run at least this long fires the streak signal.
    pub consonant_run_threshold: usize,
    /// Bigram sparsity is only evaluated for tokens longer than this.
    pub bigram_min_len: usize,
    /// A common-bigram count below `len * ratio` fires the sparsity signal.
    pub bigram_ratio: f64,
    /// Letter/digit flips at or above `(len - 1) * ratio` fire the
    /// alternation signal.
    pub alternation_ratio: f64,
}

impl Default for RandomnessConfig {
    fn default() -> Self {
        Self {
            min_token_len: 6,
            vowel_run_threshold: 3,
            consonant_run_threshold: 4,
            bigram_min_len: 8,
            bigram_ratio: 0.15,
            alternation_ratio: 0.4,
        }
    }
}

/// Which of the three signals fired for a candidate token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignalReport {
    pub streak: bool,
    pub bigram_sparsity: bool,
    pub alternation: bool,
}

impl SignalReport {
    /// True when at least one signal fired.
    pub fn any(&self) -> bool {
        self.streak || self.bigram_sparsity || self.alternation
    }
}

/// Classifies tokens as human-chosen or machine-generated.
pub struct TokenClassifier {
    allowlist: DoubleArrayAhoCorasick<usize>,
    config: RandomnessConfig,
}

impl fmt::Debug for TokenClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenClassifier")
            .field("allowlist", &"<DoubleArrayAhoCorasick>")
            .field("config", &self.config)
            .finish()
    }
}

impl TokenClassifier {
    /// Creates a classifier with the default thresholds.
    pub fn new() -> Self {
        Self::with_config(RandomnessConfig::default())
    }

    /// Creates a classifier with explicit thresholds.
    pub fn with_config(config: RandomnessConfig) -> Self {
        let allowlist = DoubleArrayAhoCorasick::new(ALLOWLIST.iter().copied())
            .expect("Failed to build Aho-Corasick automaton for the allowlist");

        Self { allowlist, config }
    }

    pub fn config(&self) -> &RandomnessConfig {
        &self.config
    }

    /// True when the token contains an allowlisted word as a
    /// case-insensitive substring.
    pub fn is_allowlisted(&self, token: &str) -> bool {
        let lower = token.to_lowercase();
        self.allowlist.find_iter(lower.as_bytes()).next().is_some()
    }

    /// Evaluates the three statistical signals for a token, ignoring the
    /// allowlist and the length pre-condition.
    pub fn signals(&self, token: &str) -> SignalReport {
        let lower: String = token.to_lowercase();
        let len = lower.chars().count();

        let profile = measure_streaks(&lower);
        let streak = profile.max_vowel_run >= self.config.vowel_run_threshold
            || profile.max_consonant_run >= self.config.consonant_run_threshold;

        let bigram_sparsity = len > self.config.bigram_min_len
            && (common_bigram_count(&lower) as f64) < len as f64 * self.config.bigram_ratio;

        let transitions = len.saturating_sub(1);
        let alternation = transitions > 0
            && (alternating_pairs(token) as f64)
                >= transitions as f64 * self.config.alternation_ratio;

        SignalReport {
            streak,
            bigram_sparsity,
            alternation,
        }
    }

    /// True when the token looks machine-generated.
    ///
    /// A token qualifies only if it meets the minimum length, contains no
    /// allowlisted word, and at least one signal fires.
    pub fn is_random(&self, token: &str) -> bool {
        if token.chars().count() < self.config.min_token_len {
            return false;
        }
        if self.is_allowlisted(token) {
            return false;
        }
        self.signals(token).any()
    }
}

impl Default for TokenClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_tokens_never_random() {
        let classifier = TokenClassifier::new();
        assert!(!classifier.is_random("xqzkw"));
        assert!(!classifier.is_random(""));
    }

    #[test]
    fn test_consonant_streak_fires() {
        let classifier = TokenClassifier::new();
        assert!(classifier.is_random("xkcdqzv"));
        assert!(classifier.signals("xkcdqzv").streak);
    }

    #[test]
    fn test_vowel_streak_fires() {
        let classifier = TokenClassifier::new();
        assert!(classifier.signals("zaeiouz").streak);
    }

    #[test]
    fn test_bigram_sparsity_fires_for_long_tokens_only() {
        let classifier = TokenClassifier::new();
        // No common bigrams, but too short for the sparsity signal.
        assert!(!classifier.signals("axbxcxdx").bigram_sparsity);
        assert!(classifier.signals("axbxcxdxex").bigram_sparsity);
    }

    #[test]
    fn test_alternation_fires() {
        let classifier = TokenClassifier::new();
        let report = classifier.signals("a1b2c3");
        assert!(report.alternation);
        assert!(classifier.is_random("a1b2c3"));
    }

    #[test]
    fn test_natural_word_not_random() {
        let classifier = TokenClassifier::new();
        assert!(!classifier.is_random("entertainment"));
        assert!(!classifier.is_random("banana"));
    }

    #[test]
    fn test_allowlist_overrides_signals() {
        let classifier = TokenClassifier::new();
        // Each token would fire a signal on its own merits.
        assert!(!classifier.is_random("google8f2k1x"));
        assert!(!classifier.is_random("adminxkcdqzv"));
        assert!(!classifier.is_random("API0xqzkwjv"));
    }

    #[test]
    fn test_query_token_from_campaign_url() {
        let classifier = TokenClassifier::new();
        assert!(classifier.is_random("aksjdhf82kd"));
    }

    #[test]
    fn test_custom_thresholds() {
        let config = RandomnessConfig {
            min_token_len: 12,
            ..RandomnessConfig::default()
        };
        let classifier = TokenClassifier::with_config(config);
        assert!(!classifier.is_random("xkcdqzv"));
    }
}
