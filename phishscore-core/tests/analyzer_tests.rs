// phishscore-core/tests/analyzer_tests.rs
//! Integration tests for the analyzer's end-to-end behavior: scoring,
//! classification, normalization, and the documented scenario fixtures.

use phishscore_core::{analyze_url, AnalysisError, RiskLevel, Severity, UrlAnalyzer, Verdict};
use test_log::test; // For integrating with `env_logger` in tests

fn finding<'a>(
    result: &'a phishscore_core::AnalysisResult,
    check: &str,
) -> Option<&'a phishscore_core::CheckFinding> {
    result.details.iter().find(|f| f.check == check)
}

#[test]
fn test_empty_input_fails() {
    assert!(matches!(analyze_url(""), Err(AnalysisError::EmptyUrl)));
}

#[test]
fn test_malformed_input_fails_without_partial_result() {
    assert!(matches!(
        analyze_url("http://example.com:99999/"),
        Err(AnalysisError::MalformedUrl(_))
    ));
}

#[test]
fn test_scheme_normalization_is_transparent() {
    let bare = analyze_url("example.com/x").unwrap();
    let explicit = analyze_url("http://example.com/x").unwrap();
    assert_eq!(bare, explicit);
}

#[test]
fn test_analysis_is_idempotent() {
    let url = "http://secure-paypal-verify.tk/login.php?id=aksjdhf82kd";
    let first = analyze_url(url).unwrap();
    let second = analyze_url(url).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_clean_https_url_is_legitimate() {
    let result = analyze_url("https://www.example.com").unwrap();
    assert_eq!(result.score, 0);
    assert!(result.details.is_empty());
    assert_eq!(result.verdict, Verdict::LikelyLegitimate);
    assert_eq!(result.risk_level, RiskLevel::Success);
    assert_eq!(result.score_percentage, 0);
}

#[test]
fn test_ip_host_with_keyword_path() {
    let result = analyze_url("http://192.168.1.1/login").unwrap();

    let ip = finding(&result, "IP Address Usage").expect("IP finding present");
    assert_eq!(ip.points, 5);
    assert_eq!(ip.severity, Severity::High);

    let keywords = finding(&result, "Suspicious Keywords").expect("keyword finding present");
    assert!(keywords.description.contains("login"));

    assert!(result.score >= 7);
    assert_eq!(result.verdict, Verdict::from_score(result.score));
    assert_eq!(result.risk_level, RiskLevel::from_score(result.score));
}

#[test]
fn test_phishing_campaign_url() {
    let result = analyze_url("http://secure-paypal-verify.tk/login.php?id=aksjdhf82kd").unwrap();

    assert!(finding(&result, "No HTTPS").is_some());
    assert!(finding(&result, "Hyphens in Domain").is_some());

    let tld = finding(&result, "Suspicious TLD").expect("TLD finding present");
    assert_eq!(tld.points, 4);
    assert_eq!(tld.severity, Severity::High);

    let keywords = finding(&result, "Suspicious Keywords").expect("keyword finding present");
    for expected in ["secure", "paypal", "verify", "login"] {
        assert!(
            keywords.description.contains(expected),
            "missing keyword {}",
            expected
        );
    }

    let random = finding(&result, "Random Character Sequences").expect("randomness finding");
    assert!(random.description.contains("aksjdhf82kd"));

    assert!(result.score > 8);
    assert_eq!(result.verdict, Verdict::Phishing);
    assert_eq!(result.risk_level, RiskLevel::Danger);
}

#[test]
fn test_keyword_substring_deduped() {
    let result = analyze_url("http://example.com/login/login").unwrap();
    let keywords = finding(&result, "Suspicious Keywords").unwrap();
    assert_eq!(keywords.points, 2);
}

#[test]
fn test_allowlisted_tokens_never_flagged_random() {
    for url in [
        "http://google8f2k1x.example.com/",
        "http://example.com/adminxkcdqzv",
        "http://example.com/?key=api0xqzkwjvq",
    ] {
        let result = analyze_url(url).unwrap();
        assert!(
            finding(&result, "Random Character Sequences").is_none(),
            "unexpected randomness finding for {}",
            url
        );
    }
}

#[test]
fn test_score_percentage_bounds_and_saturation() {
    // Well past the saturation point: every points source fires.
    let url = "http://user@secure-paypal-verify-update.tk:8080//login.php//next?id=aksjdhf82kd&tok=xqzkwjvqzpq&p=%2e%2e";
    let result = analyze_url(url).unwrap();
    assert!(result.score >= 20);
    assert_eq!(result.score_percentage, 100);

    for url in ["https://www.example.com", "http://example.org/"] {
        let result = analyze_url(url).unwrap();
        assert!(result.score_percentage <= 100);
    }
}

#[test]
fn test_custom_subdomain_threshold() {
    use phishscore_core::AnalyzerConfig;

    let strict = UrlAnalyzer::with_config(AnalyzerConfig {
        subdomain_dot_threshold: 4,
        ..AnalyzerConfig::default()
    });
    let relaxed = UrlAnalyzer::new();

    let url = "http://a.b.example.com/";
    assert!(relaxed
        .analyze(url)
        .unwrap()
        .details
        .iter()
        .any(|f| f.check == "Multiple Subdomains"));
    assert!(!strict
        .analyze(url)
        .unwrap()
        .details
        .iter()
        .any(|f| f.check == "Multiple Subdomains"));
}

#[test]
fn test_shortener_host_scores() {
    let result = analyze_url("http://bit.ly/3xYzAbC").unwrap();
    let shortener = finding(&result, "URL Shortener").expect("shortener finding present");
    assert_eq!(shortener.points, 3);
}

#[test]
fn test_free_hosting_suffix_scores() {
    let result = analyze_url("https://offers.weebly.com/claim").unwrap();
    let free = finding(&result, "Free-Hosting Domain").expect("free-hosting finding present");
    assert_eq!(free.points, 2);
}
