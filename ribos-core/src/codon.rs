//! The standard genetic code.
//!
//! Maps each of the 64 RNA codons to a three-letter amino-acid code or to a
//! stop signal. This is configuration data for building the ribosome
//! automaton; nothing here interprets codon structure.

/// What a codon means to the ribosome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodonMeaning {
    /// Codes for an amino acid (three-letter code)
    AminoAcid(&'static str),
    /// Terminates the protein (UAA, UAG, UGA)
    Stop,
}

use CodonMeaning::{AminoAcid, Stop};

/// Standard genetic code (NCBI translation table 1), RNA alphabet.
pub const CODON_TABLE: [(&str, CodonMeaning); 64] = [
    ("AUG", AminoAcid("Met")),
    ("UAA", Stop),
    ("UAG", Stop),
    ("UGA", Stop),
    ("UUU", AminoAcid("Phe")),
    ("UUC", AminoAcid("Phe")),
    ("UUA", AminoAcid("Leu")),
    ("UUG", AminoAcid("Leu")),
    ("CUU", AminoAcid("Leu")),
    ("CUC", AminoAcid("Leu")),
    ("CUA", AminoAcid("Leu")),
    ("CUG", AminoAcid("Leu")),
    ("AUU", AminoAcid("Ile")),
    ("AUC", AminoAcid("Ile")),
    ("AUA", AminoAcid("Ile")),
    ("GUU", AminoAcid("Val")),
    ("GUC", AminoAcid("Val")),
    ("GUA", AminoAcid("Val")),
    ("GUG", AminoAcid("Val")),
    ("UCU", AminoAcid("Ser")),
    ("UCC", AminoAcid("Ser")),
    ("UCA", AminoAcid("Ser")),
    ("UCG", AminoAcid("Ser")),
    ("AGU", AminoAcid("Ser")),
    ("AGC", AminoAcid("Ser")),
    ("CCU", AminoAcid("Pro")),
    ("CCC", AminoAcid("Pro")),
    ("CCA", AminoAcid("Pro")),
    ("CCG", AminoAcid("Pro")),
    ("ACU", AminoAcid("Thr")),
    ("ACC", AminoAcid("Thr")),
    ("ACA", AminoAcid("Thr")),
    ("ACG", AminoAcid("Thr")),
    ("GCU", AminoAcid("Ala")),
    ("GCC", AminoAcid("Ala")),
    ("GCA", AminoAcid("Ala")),
    ("GCG", AminoAcid("Ala")),
    ("UAU", AminoAcid("Tyr")),
    ("UAC", AminoAcid("Tyr")),
    ("CAU", AminoAcid("His")),
    ("CAC", AminoAcid("His")),
    ("CAA", AminoAcid("Gln")),
    ("CAG", AminoAcid("Gln")),
    ("AAU", AminoAcid("Asn")),
    ("AAC", AminoAcid("Asn")),
    ("AAA", AminoAcid("Lys")),
    ("AAG", AminoAcid("Lys")),
    ("GAU", AminoAcid("Asp")),
    ("GAC", AminoAcid("Asp")),
    ("GAA", AminoAcid("Glu")),
    ("GAG", AminoAcid("Glu")),
    ("UGU", AminoAcid("Cys")),
    ("UGC", AminoAcid("Cys")),
    ("UGG", AminoAcid("Trp")),
    ("CGU", AminoAcid("Arg")),
    ("CGC", AminoAcid("Arg")),
    ("CGA", AminoAcid("Arg")),
    ("CGG", AminoAcid("Arg")),
    ("AGA", AminoAcid("Arg")),
    ("AGG", AminoAcid("Arg")),
    ("GGU", AminoAcid("Gly")),
    ("GGC", AminoAcid("Gly")),
    ("GGA", AminoAcid("Gly")),
    ("GGG", AminoAcid("Gly")),
];

/// Looks up a codon given as three RNA bases.
///
/// # Examples
///
/// ```rust
/// use ribos_core::codon::{CodonMeaning, translate_codon};
///
/// assert_eq!(translate_codon(b"UGG"), Some(CodonMeaning::AminoAcid("Trp")));
/// assert_eq!(translate_codon(b"UGA"), Some(CodonMeaning::Stop));
/// assert_eq!(translate_codon(b"TGG"), None);
/// ```
pub fn translate_codon(codon: &[u8]) -> Option<CodonMeaning> {
    CODON_TABLE
        .iter()
        .find(|(entry, _)| entry.as_bytes() == codon)
        .map(|&(_, meaning)| meaning)
}

/// Every distinct amino-acid code in the table, in first-seen order.
pub fn amino_acids() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = Vec::new();
    for (_, meaning) in CODON_TABLE {
        if let AminoAcid(code) = meaning {
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
    }
    codes
}
