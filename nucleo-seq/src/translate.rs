//! mRNA-to-protein translation.
//!
//! Translation starts at the leftmost `AUG` (at any offset, not just multiples
//! of three), reads non-overlapping codons in that frame, and ends at the first
//! stop codon or when fewer than three bases remain. The stop codon is never
//! emitted. [`Translator`] walks this as an explicit state machine, one
//! transition per [`Iterator::next`] call:
//!
//! ```text
//! ScanningForStart --AUG found (emit Met)--> Translating { cursor }
//! ScanningForStart --no AUG-------------->  Stopped
//! Translating ------sense codon (emit)---->  Translating { cursor + 3 }
//! Translating ------stop / partial codon-->  Stopped
//! Translating ------unknown codon (error)->  Stopped
//! ```

use std::iter::FusedIterator;

use nucleo_core::{NucleoError, Result};
use tracing::{debug, trace};

use crate::codon::{lookup_codon, START_AMINO_ACID, START_CODON, STOP};
use crate::seq::RnaSequence;

/// Where a [`Translator`] is in its walk over the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationState {
    /// No start codon has been searched for yet.
    ScanningForStart,
    /// Reading in frame; `cursor` is the offset of the next codon.
    Translating { cursor: usize },
    /// Terminal. No further amino acids will be emitted.
    Stopped,
}

/// Offset of the leftmost `AUG` in an uppercase sequence.
pub fn find_start(seq: &[u8]) -> Option<usize> {
    seq.windows(3).position(|w| w == START_CODON)
}

/// Lazily translates an mRNA sequence into three-letter amino acid codes.
///
/// Input is uppercased on construction but otherwise not validated: an in-frame
/// codon outside the codon table yields [`NucleoError::UnknownCodon`], after
/// which the translator is stopped.
#[derive(Debug, Clone)]
pub struct Translator {
    seq: Vec<u8>,
    state: TranslationState,
}

impl Translator {
    /// Start a translator over an owned, uppercased copy of `seq`.
    ///
    /// Nothing is scanned until the first call to [`Iterator::next`].
    pub fn new(seq: impl AsRef<[u8]>) -> Self {
        Self {
            seq: seq.as_ref().to_ascii_uppercase(),
            state: TranslationState::ScanningForStart,
        }
    }

    /// Current state.
    pub fn state(&self) -> TranslationState {
        self.state
    }
}

impl Iterator for Translator {
    type Item = Result<&'static str>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            TranslationState::Stopped => None,
            TranslationState::ScanningForStart => match find_start(&self.seq) {
                Some(offset) => {
                    debug!(offset, "start codon found");
                    self.state = TranslationState::Translating { cursor: offset + 3 };
                    Some(Ok(START_AMINO_ACID))
                }
                None => {
                    debug!(len = self.seq.len(), "no start codon");
                    self.state = TranslationState::Stopped;
                    None
                }
            },
            TranslationState::Translating { cursor } => {
                let Some(codon) = self.seq.get(cursor..cursor + 3) else {
                    trace!(cursor, remaining = self.seq.len() - cursor, "end of sequence");
                    self.state = TranslationState::Stopped;
                    return None;
                };
                match lookup_codon(codon) {
                    Some(STOP) => {
                        debug!(cursor, "stop codon reached");
                        self.state = TranslationState::Stopped;
                        None
                    }
                    Some(amino_acid) => {
                        trace!(cursor, amino_acid, "codon translated");
                        self.state = TranslationState::Translating { cursor: cursor + 3 };
                        Some(Ok(amino_acid))
                    }
                    None => {
                        self.state = TranslationState::Stopped;
                        Some(Err(NucleoError::UnknownCodon {
                            codon: String::from_utf8_lossy(codon).into_owned(),
                            position: cursor,
                        }))
                    }
                }
            }
        }
    }
}

impl FusedIterator for Translator {}

/// Translate an mRNA sequence from its first `AUG` to the first stop codon.
///
/// Returns an empty vector when the sequence has no start codon.
///
/// ```
/// use nucleo_seq::translate_mrna;
///
/// assert_eq!(translate_mrna("CCGAUGGCUUAA").unwrap(), vec!["Met", "Ala"]);
/// assert!(translate_mrna("CCGAGGGCUUAA").unwrap().is_empty());
/// ```
pub fn translate_mrna(seq: &str) -> Result<Vec<&'static str>> {
    Translator::new(seq).collect()
}

impl RnaSequence {
    /// Translate from the first `AUG` to the first stop codon.
    pub fn translate(&self) -> Result<Vec<&'static str>> {
        Translator::new(self).collect()
    }
}
