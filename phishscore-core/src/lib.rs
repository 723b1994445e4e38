// phishscore-core/src/lib.rs
//! # PhishScore Core Library
//!
//! `phishscore-core` provides the fundamental, platform-independent logic for
//! heuristic URL risk scoring. It parses a URL into structural parts, runs a
//! fixed ordered list of independent checks against those parts, accumulates
//! points and human-readable findings, and classifies the total into a
//! verdict and risk tier.
//!
//! The library is designed to be pure and stateless: every analysis is a
//! single synchronous computation over local inputs and immutable
//! configuration tables, with no I/O, no network access, and no persistence.
//! The URL is never resolved or fetched.
//!
//! ## Modules
//!
//! * `url_parts`: Scheme normalization and structural decomposition of a URL.
//! * `checks`: The structural check suite, the keyword matcher, and the
//!   random-token detector.
//! * `config`: Static heuristic data tables and tunable scoring cutoffs.
//! * `report`: Finding and result data structures for explainable output.
//! * `verdict`: Verdict tiers, risk levels, and score scaling.
//! * `analyzer`: The engine that runs the checks and folds findings into a
//!   result.
//! * `errors`: The error taxonomy for unparseable input.
//!
//! ## Usage Example
//!
//! ```rust
//! use phishscore_core::{analyze_url, Verdict};
//!
//! fn main() -> Result<(), phishscore_core::AnalysisError> {
//!     let report = analyze_url("http://secure-paypal-verify.tk/login.php")?;
//!
//!     println!("{} (score {})", report.verdict, report.score);
//!     for finding in &report.details {
//!         println!("  +{} {}", finding.points, finding.description);
//!     }
//!
//!     assert_eq!(report.verdict, Verdict::Phishing);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! `analyze` fails with [`AnalysisError::EmptyUrl`] when no URL text is
//! supplied and [`AnalysisError::MalformedUrl`] when the text cannot be
//! structurally parsed after default-scheme normalization. Both are terminal
//! for that call: there is no fallback scoring and no partial result. No
//! other operation in the library can fail; checks treat absent optional
//! components (no host, no port) as simply non-triggering.
//!
//! ## Design Principles
//!
//! * **Explainable:** Every point of the total score is traceable to one
//!   named finding with a human-readable rationale.
//! * **Stateless:** No shared mutable state; [`UrlAnalyzer`] is `Send + Sync`
//!   and safely callable from any number of threads.
//! * **Deterministic:** Identical input always yields an identical result;
//!   finding order is the fixed check evaluation order.
//! * **Flat:** The check list is a plain ordered sequence of pure functions
//!   combined by the aggregator, not a trait hierarchy.

pub mod analyzer;
pub mod checks;
pub mod config;
pub mod errors;
pub mod report;
pub mod url_parts;
pub mod verdict;

/// Re-exports the analyzer entry points.
pub use analyzer::{analyze_url, UrlAnalyzer};

/// Re-exports the tunable scoring cutoffs.
pub use config::AnalyzerConfig;

/// Re-exports the error taxonomy.
pub use errors::AnalysisError;

/// Re-exports the finding and result data structures.
pub use report::{AnalysisResult, CheckFinding, Severity};

/// Re-exports the structural URL view.
pub use url_parts::UrlParts;

/// Re-exports verdict tiers and score scaling.
pub use verdict::{score_percentage, RiskLevel, Verdict};
