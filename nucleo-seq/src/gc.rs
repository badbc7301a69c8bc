//! GC content classification.
//!
//! A DNA sequence is GC-rich when at least [`GC_RICH_THRESHOLD`] of its bases
//! are G or C. Comparison is case-insensitive.

use std::fmt;

use nucleo_core::{NucleoError, Result};

use crate::seq::DnaSequence;

/// Minimum GC fraction (inclusive) for a sequence to count as GC-rich.
pub const GC_RICH_THRESHOLD: f64 = 0.60;

/// Base-composition class of a DNA sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GcClass {
    #[cfg_attr(feature = "serde", serde(rename = "GC-rich"))]
    GcRich,
    #[cfg_attr(feature = "serde", serde(rename = "AT-rich"))]
    AtRich,
}

impl GcClass {
    /// The class label: `"GC-rich"` or `"AT-rich"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            GcClass::GcRich => "GC-rich",
            GcClass::AtRich => "AT-rich",
        }
    }
}

impl fmt::Display for GcClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fraction of bases in `seq` that are G or C.
///
/// Fails with [`NucleoError::EmptySequence`] on an empty sequence. Only DNA is
/// classified: `U` is not a DNA base, so RNA must be reverse-transcribed
/// (U replaced by T) first or `DnaSequence::new` reports
/// [`NucleoError::InvalidBase`].
pub fn gc_fraction(seq: &DnaSequence) -> Result<f64> {
    if seq.is_empty() {
        return Err(NucleoError::EmptySequence);
    }
    Ok(seq.count_either(*b"GC") as f64 / seq.len() as f64)
}

/// Classifier with a configurable GC-rich cutoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GcClassifier {
    threshold: f64,
}

impl Default for GcClassifier {
    fn default() -> Self {
        Self {
            threshold: GC_RICH_THRESHOLD,
        }
    }
}

impl GcClassifier {
    /// Create a classifier whose cutoff is `threshold`, a fraction in `[0, 1]`.
    pub fn new(threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(NucleoError::InvalidInput(format!(
                "GC threshold must be in [0, 1], got {}",
                threshold
            )));
        }
        Ok(Self { threshold })
    }

    /// The inclusive GC fraction cutoff.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Classify a DNA sequence. A fraction equal to the cutoff is GC-rich.
    pub fn classify(&self, seq: &DnaSequence) -> Result<GcClass> {
        let fraction = gc_fraction(seq)?;
        Ok(if fraction >= self.threshold {
            GcClass::GcRich
        } else {
            GcClass::AtRich
        })
    }
}

/// Classify a DNA sequence as GC-rich (≥ 60% G/C) or AT-rich.
///
/// ```
/// use nucleo_seq::{classify_gc_content, GcClass};
///
/// assert_eq!(classify_gc_content("GCgcGCgC").unwrap(), GcClass::GcRich);
/// assert_eq!(classify_gc_content("AATTAA").unwrap().as_str(), "AT-rich");
/// ```
pub fn classify_gc_content(seq: &str) -> Result<GcClass> {
    DnaSequence::new(seq)?.classify_gc()
}

impl DnaSequence {
    /// Fraction of G+C bases. Fails on an empty sequence.
    pub fn gc_content(&self) -> Result<f64> {
        gc_fraction(self)
    }

    /// Classify with the default 60% cutoff.
    pub fn classify_gc(&self) -> Result<GcClass> {
        GcClassifier::default().classify(self)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![
                Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T'),
                Just(b'a'), Just(b'c'), Just(b'g'), Just(b't'),
            ],
            1..=max_len,
        )
    }

    proptest! {
        #[test]
        fn case_does_not_matter(seq in dna(200)) {
            let swapped: Vec<u8> = seq
                .iter()
                .map(|b| if b.is_ascii_uppercase() { b.to_ascii_lowercase() } else { b.to_ascii_uppercase() })
                .collect();
            let c = GcClassifier::default();
            prop_assert_eq!(
                c.classify(&DnaSequence::new(&seq).unwrap()).unwrap(),
                c.classify(&DnaSequence::new(&swapped).unwrap()).unwrap()
            );
        }

        #[test]
        fn class_matches_fraction(seq in dna(200)) {
            let dna = DnaSequence::new(&seq).unwrap();
            let fraction = gc_fraction(&dna).unwrap();
            prop_assert!((0.0..=1.0).contains(&fraction));
            let expected = if fraction >= GC_RICH_THRESHOLD { GcClass::GcRich } else { GcClass::AtRich };
            prop_assert_eq!(GcClassifier::default().classify(&dna).unwrap(), expected);
        }

        #[test]
        fn gc_count_over_length(gc in 0usize..50, at in 0usize..50) {
            prop_assume!(gc + at > 0);
            let mut seq = vec![b'G'; gc];
            seq.extend(std::iter::repeat(b'T').take(at));
            let expected = if gc * 5 >= (gc + at) * 3 { GcClass::GcRich } else { GcClass::AtRich };
            let dna = DnaSequence::new(&seq).unwrap();
            prop_assert_eq!(GcClassifier::default().classify(&dna).unwrap(), expected);
        }
    }
}
