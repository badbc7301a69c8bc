//! Structured error types for the nucleo crates.

use thiserror::Error;

/// Unified error type for all nucleo operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NucleoError {
    /// A length-normalized statistic was requested for a zero-length sequence.
    #[error("empty sequence")]
    EmptySequence,

    /// A base outside the sequence's alphabet.
    #[error("'{base}' is not a {alphabet} base (position {position})")]
    InvalidBase {
        /// Alphabet name, e.g. "DNA".
        alphabet: &'static str,
        base: char,
        /// 0-based offset in the input.
        position: usize,
    },

    /// Out-of-range parameters
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An in-frame codon with no entry in the codon table.
    #[error("unknown codon '{codon}' at position {position}")]
    UnknownCodon {
        /// The three bytes read, uppercased.
        codon: String,
        /// 0-based offset of the codon's first base.
        position: usize,
    },
}

/// Convenience alias used throughout the nucleo crates.
pub type Result<T> = std::result::Result<T, NucleoError>;
