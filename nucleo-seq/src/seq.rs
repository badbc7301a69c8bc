//! Case-normalized DNA and RNA sequences.
//!
//! [`ValidatedSeq<A>`] owns uppercase bases drawn from the four-letter
//! alphabet `A`. Lowercase input is accepted and folded on construction; any
//! other byte is rejected with [`NucleoError::InvalidBase`]. Downstream code
//! can therefore compare bases against uppercase literals only.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use nucleo_core::{NucleoError, Result};

/// A four-base nucleotide alphabet.
pub trait Alphabet: Copy + Eq + fmt::Debug + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// The uppercase bases, in A, C, G, T/U order.
    const BASES: [u8; 4];
}

/// `ACGT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dna;

impl Alphabet for Dna {
    const NAME: &'static str = "DNA";
    const BASES: [u8; 4] = *b"ACGT";
}

/// `ACGU`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rna;

impl Alphabet for Rna {
    const NAME: &'static str = "RNA";
    const BASES: [u8; 4] = *b"ACGU";
}

/// Uppercase bases checked against alphabet `A`.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatedSeq<A: Alphabet> {
    bases: Vec<u8>,
    _alphabet: PhantomData<A>,
}

/// A DNA sequence over `ACGT`.
pub type DnaSequence = ValidatedSeq<Dna>;

/// An RNA sequence over `ACGU`.
pub type RnaSequence = ValidatedSeq<Rna>;

impl<A: Alphabet> ValidatedSeq<A> {
    /// Uppercase `input` and check every base against `A`.
    ///
    /// The empty sequence is valid; operations that need at least one base
    /// report [`NucleoError::EmptySequence`] themselves.
    pub fn new(input: impl AsRef<[u8]>) -> Result<Self> {
        let bases = input
            .as_ref()
            .iter()
            .enumerate()
            .map(|(position, &b)| {
                let upper = b.to_ascii_uppercase();
                if A::BASES.contains(&upper) {
                    Ok(upper)
                } else {
                    Err(NucleoError::InvalidBase {
                        alphabet: A::NAME,
                        base: char::from(b),
                        position,
                    })
                }
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self::from_validated(bases))
    }

    fn from_validated(bases: Vec<u8>) -> Self {
        Self {
            bases,
            _alphabet: PhantomData,
        }
    }

    /// Number of bases matching either of `targets`.
    pub(crate) fn count_either(&self, targets: [u8; 2]) -> usize {
        self.bases.iter().filter(|b| targets.contains(b)).count()
    }
}

impl DnaSequence {
    /// Transcribe to RNA by replacing every T with U.
    pub fn transcribe(&self) -> RnaSequence {
        RnaSequence::from_validated(
            self.bases
                .iter()
                .map(|&b| if b == b'T' { b'U' } else { b })
                .collect(),
        )
    }
}

impl<A: Alphabet> Deref for ValidatedSeq<A> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bases
    }
}

impl<A: Alphabet> AsRef<[u8]> for ValidatedSeq<A> {
    fn as_ref(&self) -> &[u8] {
        &self.bases
    }
}

impl<A: Alphabet> fmt::Debug for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", A::NAME, String::from_utf8_lossy(&self.bases))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_lowercase() {
        let dna = DnaSequence::new("GCgcAt").unwrap();
        assert_eq!(&dna[..], b"GCGCAT");
    }

    #[test]
    fn empty_is_valid() {
        assert!(RnaSequence::new("").unwrap().is_empty());
    }

    #[test]
    fn dna_rejects_u() {
        assert_eq!(
            DnaSequence::new("ACGU").unwrap_err(),
            NucleoError::InvalidBase {
                alphabet: "DNA",
                base: 'U',
                position: 3,
            }
        );
    }

    #[test]
    fn rna_rejects_t_and_ambiguity_codes() {
        assert!(RnaSequence::new("AUGT").is_err());
        assert!(matches!(
            RnaSequence::new("AnG"),
            Err(NucleoError::InvalidBase { base: 'n', position: 1, .. })
        ));
    }

    #[test]
    fn rejects_non_ascii() {
        assert!(matches!(
            DnaSequence::new("ACé"),
            Err(NucleoError::InvalidBase { position: 2, .. })
        ));
    }

    #[test]
    fn transcription_replaces_t() {
        let rna = DnaSequence::new("ccgatggcttaa").unwrap().transcribe();
        assert_eq!(&rna[..], b"CCGAUGGCUUAA");
    }

    #[test]
    fn counts_pair_of_bases() {
        let dna = DnaSequence::new("ATGCGC").unwrap();
        assert_eq!(dna.count_either(*b"GC"), 4);
        assert_eq!(dna.count_either(*b"AT"), 2);
    }

    #[test]
    fn debug_shows_alphabet() {
        let rna = RnaSequence::new("aug").unwrap();
        assert_eq!(format!("{rna:?}"), "RNA(AUG)");
    }
}
