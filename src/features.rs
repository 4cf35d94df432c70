//! Phonetic feature extraction.
//!
//! This module turns an arbitrary input word into the two signals the
//! fingerprint encoder packs into a [`Hash`](crate::Hash):
//!
//! 1. the case-folded leading letter, kept verbatim (word-initial sound
//!    is the strongest discriminator for perceived similarity), and
//! 2. an ordered sequence of [`PhoneClass`] codes, one per run of
//!    adjacent letters that fall into the same phonetic group.
//!
//! Extraction is total: any string — empty, punctuation-only, mixed
//! case, non-ASCII — produces a defined result. Non-alphabetic
//! characters are skipped, never rejected.
//!
//! # Example
//!
//! ```rust
//! use phonix::features::{extract, PhoneClass};
//!
//! let features = extract("Apple");
//! assert_eq!(features.lead, b'a');
//! // a-pp-l-e: the doubled "pp" collapses to one labial code.
//! assert_eq!(
//!     features.codes.as_slice(),
//!     &[
//!         PhoneClass::Vowel,
//!         PhoneClass::Labial,
//!         PhoneClass::Liquid,
//!         PhoneClass::Vowel,
//!     ]
//! );
//! ```

use smallvec::SmallVec;

/// Reserved sentinel code for empty fingerprint slots.
///
/// This value never collides with a real class code: classification
/// always yields a [`PhoneClass`] whose code is in `1..=8`. The encoder
/// uses it to pad trailing bytes when a word produces fewer than seven
/// classified codes, and as the leading-letter placeholder for input
/// that contains no letters at all.
pub const NO_CLASS: u8 = 0;

/// Phonetic group of a single letter.
///
/// Letters that commonly substitute for one another in pronunciation
/// share a group, so spelling variants of the same sound map to the
/// same code. The discriminant doubles as the code packed into the
/// fingerprint bytes; `0` is reserved for [`NO_CLASS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PhoneClass {
    /// Lip sounds: b, p, f, v, and the rounded glide w.
    Labial = 1,
    /// Tongue-tip stops: d, t.
    Dental = 2,
    /// Back-of-mouth stops: c, g, k, q.
    Velar = 3,
    /// Nasal sounds: m, n.
    Nasal = 4,
    /// Liquids: l, r.
    Liquid = 5,
    /// Hissing sounds: j, s, x, z.
    Sibilant = 6,
    /// Vowels: a, e, i, o, u, and y.
    Vowel = 7,
    /// Any alphabetic character outside the table (h, non-Latin
    /// letters, ...). Still a real class, distinct from [`NO_CLASS`].
    Other = 8,
}

impl PhoneClass {
    /// The byte code packed into a fingerprint for this class.
    ///
    /// Always in `1..=8`, so it is distinguishable from the
    /// [`NO_CLASS`] padding sentinel.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for PhoneClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PhoneClass::Labial => "Labial",
            PhoneClass::Dental => "Dental",
            PhoneClass::Velar => "Velar",
            PhoneClass::Nasal => "Nasal",
            PhoneClass::Liquid => "Liquid",
            PhoneClass::Sibilant => "Sibilant",
            PhoneClass::Vowel => "Vowel",
            PhoneClass::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// Classify a single case-folded letter into its phonetic group.
///
/// Callers are expected to lowercase first; uppercase ASCII would fall
/// through to [`PhoneClass::Other`].
#[inline]
pub fn classify(letter: char) -> PhoneClass {
    match letter {
        'b' | 'p' | 'f' | 'v' | 'w' => PhoneClass::Labial,
        'd' | 't' => PhoneClass::Dental,
        'c' | 'g' | 'k' | 'q' => PhoneClass::Velar,
        'm' | 'n' => PhoneClass::Nasal,
        'l' | 'r' => PhoneClass::Liquid,
        'j' | 's' | 'x' | 'z' => PhoneClass::Sibilant,
        'a' | 'e' | 'i' | 'o' | 'u' | 'y' => PhoneClass::Vowel,
        _ => PhoneClass::Other,
    }
}

/// Extracted phonetic features of one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Features {
    /// The first letter of the word, case-folded and narrowed to a
    /// byte. [`NO_CLASS`] when the input contains no letters.
    pub lead: u8,
    /// Class codes for every letter of the word (the leading letter
    /// included), with runs of same-class letters collapsed to one
    /// entry.
    pub codes: SmallVec<[PhoneClass; 12]>,
}

/// Extract the phonetic features of `word`.
///
/// Case is folded to lowercase, non-alphabetic characters are skipped,
/// and consecutive letters in the same phonetic group contribute a
/// single code, so "pp" and "p" read the same. Never fails.
pub fn extract(word: &str) -> Features {
    let mut lead = NO_CLASS;
    let mut codes: SmallVec<[PhoneClass; 12]> = SmallVec::new();
    let mut prev: Option<PhoneClass> = None;

    for ch in word.chars().filter(|c| c.is_alphabetic()) {
        // to_lowercase may expand one char into several (e.g. 'İ');
        // each resulting letter is classified on its own.
        for folded in ch.to_lowercase() {
            if !folded.is_alphabetic() {
                continue;
            }
            if lead == NO_CLASS {
                lead = folded as u8;
            }
            let class = classify(folded);
            if prev != Some(class) {
                codes.push(class);
                prev = Some(class);
            }
        }
    }

    Features { lead, codes }
}
