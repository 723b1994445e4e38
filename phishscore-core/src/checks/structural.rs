//! Structural checks over the parsed URL.
//!
//! Each function inspects one structural property and returns a finding
//! when it triggers. Absent components (no host, no port) never trigger.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{
    AnalyzerConfig, FREE_HOSTING_SUFFIXES, SHORTENER_HOSTS, STANDARD_PORTS, TLD_RISK_WEIGHTS,
};
use crate::report::{CheckFinding, Severity};
use crate::url_parts::UrlParts;

/// TLD weights at or above this value are reported as high severity.
const HIGH_RISK_TLD_POINTS: u32 = 4;

static IP_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d{1,3}\.){3}\d{1,3}$").expect("IP literal pattern compiles")
});

static PERCENT_ENCODED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%[0-9a-fA-F]{2}").expect("percent-encoding pattern compiles"));

/// Host is a dotted-quad IP literal rather than a domain name.
pub fn check_ip_literal(parts: &UrlParts) -> Option<CheckFinding> {
    let host = parts.host()?;
    if !IP_LITERAL.is_match(host) {
        return None;
    }
    Some(CheckFinding::new(
        "IP Address Usage",
        5,
        "URL uses IP address instead of domain name",
        Severity::High,
    ))
}

/// An `@` anywhere in the URL can hide the real destination.
pub fn check_at_symbol(parts: &UrlParts) -> Option<CheckFinding> {
    if !parts.raw().contains('@') {
        return None;
    }
    Some(CheckFinding::new(
        "@ Symbol Detected",
        3,
        "URL contains @ symbol which can hide the real destination",
        Severity::Medium,
    ))
}

/// Overlong URLs are a common obfuscation vehicle.
pub fn check_url_length(parts: &UrlParts, config: &AnalyzerConfig) -> Option<CheckFinding> {
    let length = parts.raw().chars().count();
    if length <= config.max_url_length {
        return None;
    }
    Some(CheckFinding::new(
        "Long URL",
        2,
        format!(
            "URL is {} characters long (suspicious if >{})",
            length, config.max_url_length
        ),
        Severity::Low,
    ))
}

/// Anything other than `https` is penalized.
pub fn check_scheme(parts: &UrlParts) -> Option<CheckFinding> {
    if parts.scheme() == "https" {
        return None;
    }
    Some(CheckFinding::new(
        "No HTTPS",
        2,
        "URL does not use secure HTTPS protocol",
        Severity::Medium,
    ))
}

/// Deeply nested subdomains are often used to bury a trusted-looking label.
pub fn check_subdomain_depth(parts: &UrlParts, config: &AnalyzerConfig) -> Option<CheckFinding> {
    let host = parts.host()?;
    let dots = host.matches('.').count();
    if dots < config.subdomain_dot_threshold {
        return None;
    }
    Some(CheckFinding::new(
        "Multiple Subdomains",
        2,
        format!(
            "Domain has {} dots (suspicious if >={})",
            dots, config.subdomain_dot_threshold
        ),
        Severity::Medium,
    ))
}

/// Hyphenated hosts can mimic legitimate brand domains.
pub fn check_hyphenated_host(parts: &UrlParts) -> Option<CheckFinding> {
    let host = parts.host()?;
    if !host.contains('-') {
        return None;
    }
    Some(CheckFinding::new(
        "Hyphens in Domain",
        1,
        "Domain contains hyphens which can mimic legitimate sites",
        Severity::Low,
    ))
}

/// Known URL-shortener hosts hide the real destination.
pub fn check_shortener_host(parts: &UrlParts) -> Option<CheckFinding> {
    let host = parts.host()?;
    if !SHORTENER_HOSTS.contains(host.to_lowercase().as_str()) {
        return None;
    }
    Some(CheckFinding::new(
        "URL Shortener",
        3,
        "Uses URL shortener which can hide malicious destinations",
        Severity::Medium,
    ))
}

/// Free-hosting platforms are a cheap venue for throwaway phishing pages.
pub fn check_free_hosting(parts: &UrlParts) -> Option<CheckFinding> {
    let host = parts.host()?;
    if !FREE_HOSTING_SUFFIXES.iter().any(|suffix| host.ends_with(suffix)) {
        return None;
    }
    Some(CheckFinding::new(
        "Free-Hosting Domain",
        2,
        "Hosted on a free platform often abused for phishing",
        Severity::Medium,
    ))
}

/// The rightmost host label is weighed against the TLD risk table.
pub fn check_tld_risk(parts: &UrlParts) -> Option<CheckFinding> {
    let host = parts.host()?;
    let tld = host.rsplit('.').next()?.to_lowercase();
    let points = *TLD_RISK_WEIGHTS.get(tld.as_str())?;

    let severity = if points >= HIGH_RISK_TLD_POINTS {
        Severity::High
    } else {
        Severity::Medium
    };
    Some(CheckFinding::new(
        "Suspicious TLD",
        points,
        format!("TLD \".{}\" has high historical phishing rates", tld),
        severity,
    ))
}

/// A `//` inside the path often marks an embedded redirect target.
pub fn check_double_slash_path(parts: &UrlParts) -> Option<CheckFinding> {
    if !parts.path().contains("//") {
        return None;
    }
    Some(CheckFinding::new(
        "Double Slash in Path",
        2,
        "Path contains \"//\" which may indicate redirection or obfuscation",
        Severity::Medium,
    ))
}

/// Percent-encoded bytes in path or query can disguise intent.
pub fn check_encoded_characters(parts: &UrlParts) -> Option<CheckFinding> {
    if !PERCENT_ENCODED.is_match(parts.path()) && !PERCENT_ENCODED.is_match(parts.query()) {
        return None;
    }
    Some(CheckFinding::new(
        "Encoded Characters",
        1,
        "URL contains encoded characters like %2e or %40 which may hide intent",
        Severity::Low,
    ))
}

/// Ports other than 80 and 443 are uncommon for public web content.
pub fn check_nonstandard_port(parts: &UrlParts) -> Option<CheckFinding> {
    let port = parts.port()?;
    if STANDARD_PORTS.contains(&port) {
        return None;
    }
    Some(CheckFinding::new(
        "Non-Standard Port",
        2,
        format!("Uses uncommon port {}, which may indicate malicious intent", port),
        Severity::Medium,
    ))
}
