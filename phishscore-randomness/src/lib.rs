// phishscore-randomness/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod alternation;
pub mod bigrams;
pub mod classifier;
pub mod streaks;

pub use classifier::{RandomnessConfig, SignalReport, TokenClassifier};
