//! GC content classification and mRNA translation over nucleotide strings.
//!
//! - **Sequences** — [`DnaSequence`], [`RnaSequence`], uppercased and checked
//!   against their four-base alphabet
//! - **GC content** — [`classify_gc_content`] labels DNA as GC-rich (≥ 60% G/C)
//!   or AT-rich
//! - **Codon table** — [`CODON_TABLE`], the standard genetic code over RNA codons
//! - **Translation** — [`translate_mrna`] and the lazy [`Translator`]
//!
//! # Example
//!
//! ```
//! use nucleo_seq::{classify_gc_content, translate_mrna, DnaSequence, GcClass};
//!
//! assert_eq!(classify_gc_content("GCGCGC").unwrap(), GcClass::GcRich);
//! assert_eq!(translate_mrna("CCGAUGGCUGGG").unwrap(), vec!["Met", "Ala", "Gly"]);
//!
//! // DNA must be transcribed before translation
//! let rna = DnaSequence::new("atggcttaa").unwrap().transcribe();
//! assert_eq!(rna.translate().unwrap(), vec!["Met", "Ala"]);
//! ```

pub mod codon;
pub mod gc;
pub mod seq;
pub mod translate;

pub use seq::{Alphabet, Dna, DnaSequence, Rna, RnaSequence, ValidatedSeq};

pub use codon::{lookup_codon, CODON_TABLE, STOP};
pub use gc::{classify_gc_content, gc_fraction, GcClass, GcClassifier, GC_RICH_THRESHOLD};
pub use translate::{translate_mrna, TranslationState, Translator};
