//! Structural decomposition of a URL for the check suite.
//!
//! Parsing here is purely syntactic: nothing is resolved, fetched, or
//! validated for reachability.

use url::Url;

use crate::errors::AnalysisError;

/// Read-only structural view of a normalized URL.
///
/// `host` and `port` are `None` when the component is absent, which is
/// distinct from an empty host or port zero: every check treats an absent
/// component as "cannot trigger" rather than as a failing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    raw: String,
    scheme: String,
    host: Option<String>,
    port: Option<u16>,
    path: String,
    query: String,
}

impl UrlParts {
    /// Normalizes and parses a raw URL string.
    ///
    /// When the input does not already begin with `http://` or `https://`
    /// the default `http://` prefix is prepended before parsing. Fails with
    /// [`AnalysisError::EmptyUrl`] for empty input and
    /// [`AnalysisError::MalformedUrl`] when the normalized string cannot be
    /// structurally parsed (invalid port, invalid IP literal, empty host).
    pub fn parse(input: &str) -> Result<Self, AnalysisError> {
        if input.is_empty() {
            return Err(AnalysisError::EmptyUrl);
        }

        let raw = normalize_scheme(input);
        let parsed = Url::parse(&raw)?;

        Ok(Self {
            scheme: parsed.scheme().to_string(),
            host: parsed.host_str().map(str::to_string),
            // Default ports (80 for http, 443 for https) are reported as
            // absent by the parser.
            port: parsed.port(),
            path: parsed.path().to_string(),
            query: parsed.query().unwrap_or_default().to_string(),
            raw,
        })
    }

    /// The normalized URL string the checks run against.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The raw query string, empty when absent.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Dot-separated host labels, in order; empty when the host is absent.
    pub fn host_labels(&self) -> impl Iterator<Item = &str> {
        self.host.as_deref().into_iter().flat_map(|host| host.split('.'))
    }

    /// Slash-separated path segments, in order.
    pub fn path_segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/')
    }

    /// Ordered key/value pairs of the raw query string. Fragments without
    /// an `=` separator are skipped.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query.split('&').filter_map(|pair| pair.split_once('='))
    }
}

fn normalize_scheme(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("http://{}", input)
    }
}
