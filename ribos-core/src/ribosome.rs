//! RNA-to-protein translation as a lenient pushdown transduction.
//!
//! The ribosome is a [`TransitionTable`] generated from the [codon
//! table](crate::codon::CODON_TABLE). It walks an RNA strand in three phases:
//!
//! 1. **Search**: read bases until `AUG` is seen, then push `Met`.
//! 2. **Translate**: read codons. The first base replaces the bottom marker on
//!    the stack, the second is remembered in the state, and the third
//!    completes the codon: an amino acid is pushed under a fresh marker, or a
//!    stop codon pushes `Stop` and returns to the search phase.
//! 3. **Rollback**: once input is exhausted, epsilon transitions discard any
//!    protein that was started but never stopped, down to the previous `Stop`
//!    (which is removed as well) or the bottom of the stack, and accept.
//!
//! Bytes that are not RNA bases are skipped by the lenient scan, as are any
//! bases outside a gene. The final stack, read bottom to top, therefore holds
//! the residues of every complete gene in order, separated by `Stop` markers.
//!
//! ## Example
//!
//! ```rust
//! use ribos_core::ribosome::{Ribosome, format_protein};
//!
//! let ribosome = Ribosome::new()?;
//! let tokens = ribosome.translate("CCAUGUUUUAAGGAUGCUCUAG")?;
//! assert_eq!(format_protein(&tokens), "Met-Phe Met-Leu");
//! # Ok::<(), ribos_core::types::RibosError>(())
//! ```

use tracing::debug;

use crate::automaton::{StackTop, TransitionTable, TransitionTableBuilder};
use crate::codon::{CodonMeaning, amino_acids, translate_codon};
use crate::constants::RNA_BASES;
use crate::sequence::alphabet::{Token, tokenize};
use crate::types::{DefinitionError, RibosError};

/// States of the translating automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RibosomeState {
    /// Looking for a start codon, nothing matched yet
    Searching,
    /// Looking for a start codon, last base was A
    FoundA,
    /// Looking for a start codon, last bases were AU
    FoundAu,
    /// At a codon boundary, or after the first base of a codon
    Translating,
    /// After the second base of a codon (the base is kept here)
    SecondBase(u8),
    /// Discarding an unterminated protein
    Rollback,
    /// Accepting state
    Done,
}

const SEARCH_STATES: [RibosomeState; 3] = [
    RibosomeState::Searching,
    RibosomeState::FoundA,
    RibosomeState::FoundAu,
];

/// A translator wrapping the generated codon automaton.
///
/// Build it once and share it; [`translate`](Ribosome::translate) takes
/// `&self` and allocates a fresh stack on every call.
#[derive(Debug, Clone)]
pub struct Ribosome {
    table: TransitionTable<RibosomeState, Token>,
}

impl Ribosome {
    /// Generates and validates the translation table.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError`] if the generated table is inconsistent,
    /// which would indicate a defect in the codon data.
    pub fn new() -> Result<Self, DefinitionError> {
        let table = build_ribosome_table()?;
        debug!(transitions = table.len(), "ribosome ready");
        Ok(Self { table })
    }

    pub const fn table(&self) -> &TransitionTable<RibosomeState, Token> {
        &self.table
    }

    /// Translates an RNA strand, returning the final stack bottom to top.
    ///
    /// # Errors
    ///
    /// Returns [`RibosError::Stuck`] if the automaton cannot reach its
    /// accepting state, which would indicate a defect in the table.
    pub fn translate(&self, rna: &str) -> Result<Vec<Token>, RibosError> {
        self.translate_bytes(rna.as_bytes())
    }

    /// Byte-slice form of [`translate`](Ribosome::translate).
    ///
    /// # Errors
    ///
    /// See [`translate`](Ribosome::translate).
    pub fn translate_bytes(&self, rna: &[u8]) -> Result<Vec<Token>, RibosError> {
        Ok(self.table.scan(&tokenize(rna))?)
    }

    /// Translates an RNA strand and returns the proteins found, one string per gene.
    ///
    /// # Errors
    ///
    /// See [`translate`](Ribosome::translate).
    pub fn proteins(&self, rna: &str) -> Result<Vec<String>, RibosError> {
        Ok(split_proteins(&self.translate(rna)?))
    }
}

fn build_ribosome_table() -> Result<TransitionTable<RibosomeState, Token>, DefinitionError> {
    use RibosomeState::{Done, FoundA, FoundAu, Rollback, Searching, SecondBase, Translating};

    let bottom = StackTop::Symbol(Token::Bottom);
    let residues = amino_acids();

    let mut builder = TransitionTableBuilder::new(Searching, Token::Bottom);
    builder
        .states(SEARCH_STATES)
        .states([Translating, Rollback, Done])
        .states(RNA_BASES.iter().map(|&base| SecondBase(base)))
        .input_alphabet(RNA_BASES.iter().map(|&base| Token::Base(base)))
        .stack_alphabet(RNA_BASES.iter().map(|&base| Token::Base(base)))
        .stack_alphabet(residues.iter().map(|&code| Token::Residue(code)))
        .stack_alphabet([Token::Stop, Token::Bottom])
        .final_states([Done]);

    // Search for AUG, restarting whenever the partial match breaks.
    for state in SEARCH_STATES {
        for base in RNA_BASES {
            let (target, push) = match (state, base) {
                (FoundA, b'U') => (FoundAu, vec![Token::Bottom]),
                (FoundAu, b'G') => (Translating, vec![Token::Residue("Met"), Token::Bottom]),
                (_, b'A') => (FoundA, vec![Token::Bottom]),
                _ => (Searching, vec![Token::Bottom]),
            };
            builder.consuming(state, Token::Base(base), bottom.clone(), target, push);
        }
        builder.epsilon(state, bottom.clone(), Done, vec![]);
    }

    // Codon reading.
    for first in RNA_BASES {
        let held = StackTop::Symbol(Token::Base(first));
        builder.consuming(
            Translating,
            Token::Base(first),
            bottom.clone(),
            Translating,
            vec![Token::Base(first)],
        );

        for second in RNA_BASES {
            builder.consuming(
                Translating,
                Token::Base(second),
                held.clone(),
                SecondBase(second),
                vec![Token::Base(first)],
            );

            for third in RNA_BASES {
                let codon = [first, second, third];
                let (target, push) = match codon_meaning(&codon)? {
                    CodonMeaning::Stop => (Searching, vec![Token::Stop, Token::Bottom]),
                    CodonMeaning::AminoAcid(code) => {
                        (Translating, vec![Token::Residue(code), Token::Bottom])
                    }
                };
                builder.consuming(SecondBase(second), Token::Base(third), held.clone(), target, push);
            }
        }
    }

    // Rollback of an unterminated protein once input runs out.
    builder.epsilon(Translating, bottom.clone(), Rollback, vec![]);
    for base in RNA_BASES {
        let held = StackTop::Symbol(Token::Base(base));
        builder.epsilon(Translating, held.clone(), Rollback, vec![]);
        for second in RNA_BASES {
            builder.epsilon(SecondBase(second), held.clone(), Rollback, vec![]);
        }
    }
    for &code in &residues {
        builder.epsilon(Rollback, StackTop::Symbol(Token::Residue(code)), Rollback, vec![]);
    }
    builder
        .epsilon(Rollback, StackTop::Symbol(Token::Stop), Rollback, vec![Token::Bottom])
        .epsilon(Rollback, bottom, Done, vec![])
        .epsilon(Rollback, StackTop::Empty, Done, vec![]);

    builder.build()
}

fn codon_meaning(codon: &[u8; 3]) -> Result<CodonMeaning, DefinitionError> {
    translate_codon(codon).ok_or_else(|| DefinitionError::InvalidMapping {
        mapping: String::from_utf8_lossy(codon).into_owned(),
        reason: "codon missing from the genetic code".to_string(),
    })
}

/// Groups the residues of a translation into proteins.
///
/// `Stop` markers separate proteins; bases and markers are ignored.
pub fn split_proteins(tokens: &[Token]) -> Vec<String> {
    tokens
        .split(|token| *token == Token::Stop)
        .map(|gene| {
            gene.iter()
                .filter_map(|token| match token {
                    Token::Residue(code) => Some(*code),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("-")
        })
        .filter(|protein| !protein.is_empty())
        .collect()
}

/// Renders a translation as residues joined by `-`, one space between proteins.
///
/// # Examples
///
/// ```rust
/// use ribos_core::ribosome::format_protein;
/// use ribos_core::sequence::alphabet::Token;
///
/// let tokens = [
///     Token::Residue("Met"),
///     Token::Residue("Phe"),
///     Token::Stop,
///     Token::Residue("Met"),
///     Token::Stop,
/// ];
/// assert_eq!(format_protein(&tokens), "Met-Phe Met");
/// ```
pub fn format_protein(tokens: &[Token]) -> String {
    split_proteins(tokens).join(" ")
}
