//! Configuration data for the check suite.
//!
//! The lookup tables here are process-wide, read-only heuristic data:
//! initialized once at startup and never mutated afterwards. The tunable
//! cutoffs live in [`AnalyzerConfig`], whose `Default` impl carries the
//! canonical values.
//!
//! License: MIT OR Apache-2.0

use once_cell::sync::Lazy;
use phishscore_randomness::RandomnessConfig;
use std::collections::{HashMap, HashSet};

/// Tokens that commonly appear in credential-harvesting URLs.
///
/// Matching is substring containment over the lowercased, hyphen-stripped
/// URL. Matches are deduped by value, so repeating an entry here (or a
/// token appearing twice in a URL) never double counts.
pub static SUSPICIOUS_KEYWORDS: &[&str] = &[
    // finance / access
    "account", "myaccount", "banking", "paypal", "ebay", "ebayisapi",
    "alibaba", "dropbox",
    // auth / session
    "login", "signin", "signout", "logout", "verify", "verification",
    "validate", "validation", "authenticate", "secure", "secured",
    "securewebsession", "server", "client", "password", "mfa",
    // urgency
    "confirm", "suspended", "suspend", "recovery", "restore",
    "required", "update", "resolution", "submit", "limited",
    // prizes / scams
    "lucky", "bonus", "reward", "giveaway", "refund", "billing",
    // web platform abuse
    "wordpress", "wp", "themes", "plugins", "admin", "includes",
    "webscr", "webservis", "webspace", "webnode", "000webhostapp",
    // misc tech
    "redirectme", "click", "browser", "content", "images", "js",
    "css", "site", "view",
    // mail & cloud
    "mailbox", "outlook", "webmail",
];

/// Hosts of known URL-shortening services, compared case-insensitively
/// against the full host.
pub static SHORTENER_HOSTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set = HashSet::new();
    set.extend([
        "bit.ly", "tinyurl.com", "t.co", "goo.gl", "ow.ly",
        "is.gd", "buff.ly", "adf.ly", "bl.ink", "lnkd.in",
    ]);
    set
});

/// Free-hosting platforms frequently abused for throwaway phishing pages,
/// matched as host suffixes.
pub static FREE_HOSTING_SUFFIXES: &[&str] = &[
    "weebly.com", "wixsite.com", "blogspot.com",
    "000webhostapp.com", "webnode.page",
];

/// Risk weights per top-level domain, reflecting historical phishing rates.
/// Unknown TLDs contribute nothing.
pub static TLD_RISK_WEIGHTS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("buzz", 5), ("wang", 5), ("host", 5), ("icu", 5), ("live", 5),
        ("cfd", 5), ("win", 5), ("pw", 5),
        ("tk", 4), ("gq", 4), ("cf", 4), ("ga", 4), ("ml", 4),
        ("top", 4), ("info", 4), ("cyou", 4), ("click", 4),
        ("fun", 4), ("vip", 4), ("work", 4), ("page", 4),
        ("app", 4), ("mx", 4), ("shop", 4), ("cloud", 4),
        ("xyz", 3), ("online", 3), ("cn", 3), ("us", 3),
        ("gp", 3), ("gy", 3), ("gd", 3),
        ("link", 3), ("ng", 3), ("ws", 3),
        ("network", 3), ("io", 3), ("id", 3), ("dev", 3), ("club", 3),
        ("site", 3),
        ("net", 2), ("ug", 2),
        ("bz", 2), ("li", 2), ("do", 2), ("py", 2),
        ("ly", 2), ("ph", 2), ("za", 2), ("it", 2), ("cc", 2),
        ("org", 1), ("ru", 1),
    ])
});

/// Ports that do not by themselves raise suspicion.
pub static STANDARD_PORTS: &[u16] = &[80, 443];

/// Total score at or above which a URL is classified as phishing.
pub const PHISHING_SCORE_THRESHOLD: u32 = 8;

/// Total score at or above which a URL is classified as suspicious.
pub const SUSPICIOUS_SCORE_THRESHOLD: u32 = 4;

/// Score treated as the maximum meaningful total when scaling to a
/// percentage; higher totals saturate at 100%.
pub const MAX_MEANINGFUL_SCORE: u32 = 20;

/// Tunable cutoffs for the check suite.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// URLs longer than this many characters are penalized.
    pub max_url_length: usize,
    /// The subdomain-depth check fires when the host contains at least this
    /// many dots.
    pub subdomain_dot_threshold: usize,
    /// Points per distinct suspicious keyword.
    pub points_per_keyword: u32,
    /// Points per distinct random-looking token.
    pub points_per_random_token: u32,
    /// Upper bound on the randomness sub-score.
    pub randomness_score_cap: u32,
    /// Maximum example tokens listed in the randomness finding text.
    pub randomness_example_limit: usize,
    /// Path segments shorter than this are not randomness candidates.
    pub min_path_segment_len: usize,
    /// Query values shorter than this are not randomness candidates.
    pub min_query_value_len: usize,
    /// Query values are truncated to this many characters in finding text.
    pub query_value_display_len: usize,
    /// Thresholds for the lexical randomness classifier.
    pub randomness: RandomnessConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_url_length: 75,
            subdomain_dot_threshold: 3,
            points_per_keyword: 2,
            points_per_random_token: 2,
            randomness_score_cap: 6,
            randomness_example_limit: 3,
            min_path_segment_len: 7,
            min_query_value_len: 9,
            query_value_display_len: 15,
            randomness: RandomnessConfig::default(),
        }
    }
}
