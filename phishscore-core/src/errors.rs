//! errors.rs - Custom error types for the phishscore-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `phishscore-core`
/// library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
///
/// Both variants are terminal and non-retryable: a failed analysis produces
/// no partial result.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AnalysisError {
    /// No URL text was supplied.
    #[error("URL cannot be empty")]
    EmptyUrl,

    /// The text does not parse as a URL even after default-scheme
    /// normalization.
    #[error("Invalid URL format: {0}")]
    MalformedUrl(#[from] url::ParseError),
}
