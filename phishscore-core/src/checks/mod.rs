//! The heuristic check suite.
//!
//! Every check is a pure function from the parsed URL (plus configuration)
//! to an optional finding. Checks are evaluated unconditionally and
//! independently in a fixed order; the order determines only the finding
//! sequence, never the score.

pub mod keywords;
pub mod randomness;
pub mod structural;
