//! Distance metrics between two fingerprints.
//!
//! A [`Difference`] is derived from exactly two [`Hash`] values and
//! answers three independent distance questions plus a boolean
//! similarity verdict:
//!
//! - [`xor`](Difference::xor) — the raw bitwise difference
//! - [`hamming`](Difference::hamming) — population count of the XOR
//! - [`graduated`](Difference::graduated) — position-weighted byte
//!   mismatch count, the metric the similarity verdict is built on
//!
//! All three are symmetric in the two inputs: a `Difference` stores
//! only the XOR of the two codes, and XOR commutes.

use crate::hash::Hash;

/// Per-position weights for the graduated distance, most-significant
/// byte first.
///
/// The sequence strictly decreases from the leading-letter byte down to
/// the last classified sound: a mismatch early in the word hurts
/// perceived similarity more than one at the end. These constants are a
/// tunable parameter set; they were chosen so that a lone
/// leading-letter mismatch (weight 32) stays under
/// [`SIMILARITY_THRESHOLD`] while early class divergence pushes a pair
/// over it. The maximum graduated distance is their sum, 121.
pub const BYTE_WEIGHTS: [u32; 8] = [32, 25, 20, 16, 12, 8, 5, 3];

/// Graduated distance at or below this value counts as similar.
///
/// Tolerates a leading-letter substitution plus tail noise
/// (32 + 5 + 3 = 40) but not a leading-letter substitution combined
/// with a mismatch in any of the first four class positions.
pub const SIMILARITY_THRESHOLD: u32 = 40;

/// The difference between two phonetically hashed words.
///
/// # Example
///
/// ```rust
/// use phonix::{Difference, Hash};
///
/// let diff = Difference::new(Hash::new("rust"), Hash::new("dust"));
/// assert!(diff.similar());
/// assert_eq!(diff.hamming(), (b'r' ^ b'd').count_ones());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difference {
    xor: u64,
}

impl Difference {
    /// Compute the difference of two fingerprints.
    ///
    /// Argument order is irrelevant to every query on the result.
    #[inline]
    pub fn new(a: Hash, b: Hash) -> Difference {
        Difference {
            xor: u64::from(a) ^ u64::from(b),
        }
    }

    /// The bitwise (XOR) distance.
    ///
    /// Zero means the two fingerprints agree on every byte. Prefer
    /// [`graduated`](Self::graduated) unless you specifically need the
    /// raw bit pattern.
    #[inline]
    pub fn xor(self) -> u64 {
        self.xor
    }

    /// The flat Hamming distance: the number of differing bits, in
    /// `[0, 64]`. Every bit carries the same weight regardless of
    /// position.
    #[inline]
    pub fn hamming(self) -> u32 {
        self.xor.count_ones()
    }

    /// The graduated distance.
    ///
    /// Each of the eight byte positions that differs between the two
    /// fingerprints contributes its [`BYTE_WEIGHTS`] entry, so
    /// divergence at the start of a word costs more than divergence at
    /// the end. This is the preferred metric for ranking
    /// spell-correction candidates.
    #[inline]
    pub fn graduated(self) -> u32 {
        let mut dist = 0;
        for (pos, &weight) in BYTE_WEIGHTS.iter().enumerate() {
            if (self.xor >> (56 - 8 * pos as u32)) & 0xff != 0 {
                dist += weight;
            }
        }
        dist
    }

    /// Does this difference constitute similarity?
    ///
    /// True iff [`graduated`](Self::graduated) is at most
    /// [`SIMILARITY_THRESHOLD`].
    #[inline]
    pub fn similar(self) -> bool {
        self.graduated() <= SIMILARITY_THRESHOLD
    }
}
