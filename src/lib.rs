//! # phonix
//!
//! Locality-sensitive phonetic hashing for fuzzy word matching.
//!
//! Words that sound alike hash to numerically close 64-bit
//! fingerprints, which makes ranking spell-correction candidates and
//! approximate lookup cheap: one hash per word up front, then constant
//! time XOR arithmetic per comparison instead of an edit-distance pass.
//!
//! A word flows through feature extraction (case folding, phonetic
//! classification, collapse of adjacent same-class letters) into a
//! packed [`Hash`]; two hashes subtract into a [`Difference`] that
//! answers three distance queries and a similarity verdict.
//!
//! ## Example
//!
//! ```rust
//! use phonix::Hash;
//!
//! // Spelling variants of the same sounds collide by design.
//! assert_eq!(Hash::new("color"), Hash::new("colour"));
//!
//! let diff = Hash::new("rust") - Hash::new("dust");
//! assert!(diff.similar());
//!
//! let diff = Hash::new("color") - Hash::new("banana");
//! assert!(!diff.similar());
//! ```
//!
//! Every operation is total and pure: no input fails to hash, and all
//! values are `Copy` types safe to share across threads without
//! synchronization.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod difference;
pub mod features;
pub mod hash;

pub use difference::{Difference, BYTE_WEIGHTS, SIMILARITY_THRESHOLD};
pub use features::PhoneClass;
pub use hash::Hash;

/// Whether two words sound alike.
///
/// Thin composition of [`Hash::new`] and [`Difference::similar`], kept
/// for callers of the old one-shot API. Hash the words yourself when
/// you compare a word against more than one candidate, so each word is
/// hashed once.
#[deprecated(note = "hash the words with `Hash::new` and query `Difference::similar`")]
pub fn similar(a: &str, b: &str) -> bool {
    (Hash::new(a) - Hash::new(b)).similar()
}
