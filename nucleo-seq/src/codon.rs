//! The standard genetic code as a constant RNA codon table.
//!
//! Codons are looked up through a 2-bit base encoding (A=0, C=1, G=2, U=3),
//! so [`CODON_TABLE`] is stored in index order and a lookup is a single array
//! access. Only uppercase RNA codons are keys; `T` from unconverted DNA is not.

/// Sentinel value for the three stop codons.
pub const STOP: &str = "STOP";

/// The start codon, which also encodes methionine.
pub const START_CODON: &[u8; 3] = b"AUG";

/// Amino acid encoded by [`START_CODON`].
pub const START_AMINO_ACID: &str = "Met";

// ---------------------------------------------------------------------------
// Base encoding: A=0, C=1, G=2, U=3
// ---------------------------------------------------------------------------

fn base_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'U' => Some(3),
        _ => None,
    }
}

/// Convert a 3-base codon to an index in [0, 64).
fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let b1 = base_index(codon[0])?;
    let b2 = base_index(codon[1])?;
    let b3 = base_index(codon[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

// ---------------------------------------------------------------------------
// Standard code (NCBI Table 1)
// ---------------------------------------------------------------------------

/// Every RNA codon mapped to its amino acid's three-letter code, or [`STOP`].
///
/// Entry `i` holds the codon whose 2-bit encoding is `i`.
pub const CODON_TABLE: [(&str, &str); 64] = [
    ("AAA", "Lys"), ("AAC", "Asn"), ("AAG", "Lys"), ("AAU", "Asn"),
    ("ACA", "Thr"), ("ACC", "Thr"), ("ACG", "Thr"), ("ACU", "Thr"),
    ("AGA", "Arg"), ("AGC", "Ser"), ("AGG", "Arg"), ("AGU", "Ser"),
    ("AUA", "Ile"), ("AUC", "Ile"), ("AUG", "Met"), ("AUU", "Ile"),
    ("CAA", "Gln"), ("CAC", "His"), ("CAG", "Gln"), ("CAU", "His"),
    ("CCA", "Pro"), ("CCC", "Pro"), ("CCG", "Pro"), ("CCU", "Pro"),
    ("CGA", "Arg"), ("CGC", "Arg"), ("CGG", "Arg"), ("CGU", "Arg"),
    ("CUA", "Leu"), ("CUC", "Leu"), ("CUG", "Leu"), ("CUU", "Leu"),
    ("GAA", "Glu"), ("GAC", "Asp"), ("GAG", "Glu"), ("GAU", "Asp"),
    ("GCA", "Ala"), ("GCC", "Ala"), ("GCG", "Ala"), ("GCU", "Ala"),
    ("GGA", "Gly"), ("GGC", "Gly"), ("GGG", "Gly"), ("GGU", "Gly"),
    ("GUA", "Val"), ("GUC", "Val"), ("GUG", "Val"), ("GUU", "Val"),
    ("UAA", STOP),  ("UAC", "Tyr"), ("UAG", STOP),  ("UAU", "Tyr"),
    ("UCA", "Ser"), ("UCC", "Ser"), ("UCG", "Ser"), ("UCU", "Ser"),
    ("UGA", STOP),  ("UGC", "Cys"), ("UGG", "Trp"), ("UGU", "Cys"),
    ("UUA", "Leu"), ("UUC", "Phe"), ("UUG", "Leu"), ("UUU", "Phe"),
];

/// Look up an uppercase RNA codon.
///
/// Returns the three-letter amino acid code or [`STOP`]; `None` if `codon`
/// is not a key of [`CODON_TABLE`].
pub fn lookup_codon(codon: &[u8]) -> Option<&'static str> {
    codon_index(codon).map(|idx| CODON_TABLE[idx].1)
}

/// Check whether a codon is one of UAA, UAG, UGA.
pub fn is_stop(codon: &[u8]) -> bool {
    lookup_codon(codon) == Some(STOP)
}

/// The 20 distinct amino acid codes in the table, sorted.
pub fn amino_acids() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CODON_TABLE
        .iter()
        .map(|&(_, aa)| aa)
        .filter(|&aa| aa != STOP)
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

/// All codons encoding `amino_acid` (or [`STOP`]), in table order.
pub fn codons_for(amino_acid: &str) -> Vec<&'static str> {
    CODON_TABLE
        .iter()
        .filter(|&&(_, aa)| aa == amino_acid)
        .map(|&(codon, _)| codon)
        .collect()
}
