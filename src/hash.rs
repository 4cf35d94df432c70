//! The phonetic fingerprint itself.
//!
//! A [`Hash`] is a 64-bit code packed most-significant byte first:
//!
//! ```text
//! byte 0 (MSB)   leading letter, case-folded, verbatim
//! bytes 1..=7    up to seven phonetic class codes, in word order
//! ```
//!
//! Trailing bytes a short word does not fill hold the
//! [`NO_CLASS`](crate::features::NO_CLASS) sentinel, so "cat" and
//! "catastrophe" still agree on every byte "cat" defines.
//!
//! The mapping is deterministic and total but deliberately not
//! injective: collisions between words that sound alike are the point
//! of a locality-sensitive hash.

use std::fmt;
use std::ops;

use crate::difference::Difference;
use crate::features::extract;

/// A phonetic fingerprint of one word.
///
/// Subtracting two hashes yields their [`Difference`]:
///
/// ```rust
/// use phonix::Hash;
///
/// let diff = Hash::new("color") - Hash::new("colour");
/// assert!(diff.similar());
/// ```
///
/// Ordering and hashing delegate to the underlying integer; the order
/// is suitable for container placement but carries no phonetic
/// meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hash {
    bits: u64,
}

impl Hash {
    /// Phonetically hash a word.
    ///
    /// Total over all strings: empty input, letterless input, and
    /// non-ASCII input all produce a defined fingerprint.
    ///
    /// # Example
    ///
    /// ```rust
    /// use phonix::Hash;
    ///
    /// assert_eq!(Hash::new("Apple"), Hash::new("apple"));
    /// ```
    #[inline]
    pub fn new(word: &str) -> Hash {
        let features = extract(word);

        let mut bits = (features.lead as u64) << 56;
        // The leading letter's own class is skipped: byte 0 already
        // carries that letter verbatim, which is strictly more
        // information than its class code.
        for (pos, class) in features.codes.iter().skip(1).take(7).enumerate() {
            bits |= (class.code() as u64) << (48 - 8 * pos as u32);
        }

        Hash { bits }
    }

    /// The underlying 64-bit code.
    #[inline]
    pub fn value(self) -> u64 {
        self.bits
    }
}

/// Lossless conversion to the underlying integer.
impl From<Hash> for u64 {
    #[inline]
    fn from(hash: Hash) -> u64 {
        hash.bits
    }
}

/// Reconstruct a `Hash` from a previously extracted integer.
impl From<u64> for Hash {
    #[inline]
    fn from(bits: u64) -> Hash {
        Hash { bits }
    }
}

/// Compute the difference of two fingerprints.
impl ops::Sub for Hash {
    type Output = Difference;

    #[inline]
    fn sub(self, rhs: Hash) -> Difference {
        Difference::new(self, rhs)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.bits)
    }
}
