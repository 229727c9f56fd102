use std::fmt;

use crate::automaton::{StackTop, TransitionTable, TransitionTableBuilder};
use crate::constants::{DNA_BASES, RNA_BASES};
use crate::types::DefinitionError;

/// Symbol type shared by the nucleotide recognizers and the ribosome.
///
/// Input sequences are tokenised byte by byte into [`Token::Base`], whether or
/// not the byte is a valid nucleotide; it is the automaton's input alphabet
/// that decides which bases count.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A single input character (A, C, G, T, U, or anything else read from a file)
    Base(u8),
    /// A translated amino acid, as its three-letter code
    Residue(&'static str),
    /// End-of-protein marker left by a stop codon
    Stop,
    /// Bottom-of-stack marker Z0
    Bottom,
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base(base) => write!(f, "{:?}", char::from(*base)),
            Self::Residue(code) => write!(f, "{code}"),
            Self::Stop => write!(f, "Stop"),
            Self::Bottom => write!(f, "Z0"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base(base) => write!(f, "{}", char::from(*base)),
            other => fmt::Debug::fmt(other, f),
        }
    }
}

/// Splits a raw sequence into input tokens.
pub fn tokenize(sequence: &[u8]) -> Vec<Token> {
    sequence.iter().copied().map(Token::Base).collect()
}

/// The single state of a nucleotide recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecognizerState {
    Reading,
}

/// A strict-mode automaton that accepts exactly the strings over a base alphabet.
pub type NucleotideRecognizer = TransitionTable<RecognizerState, Token>;

/// Builds a recognizer for strings made only of `bases`.
///
/// The machine has one accepting state; each base rewrites the bottom marker
/// with itself, and any other byte has no transition, so strict validation
/// rejects it.
///
/// # Errors
///
/// Construction of this fixed shape cannot fail for any byte set, but the
/// table constructor's error is passed through unchanged.
pub fn nucleotide_recognizer(bases: &[u8]) -> Result<NucleotideRecognizer, DefinitionError> {
    let mut builder = TransitionTableBuilder::new(RecognizerState::Reading, Token::Bottom);
    builder
        .states([RecognizerState::Reading])
        .input_alphabet(bases.iter().copied().map(Token::Base))
        .stack_alphabet([Token::Bottom])
        .final_states([RecognizerState::Reading]);

    for &base in bases {
        builder.consuming(
            RecognizerState::Reading,
            Token::Base(base),
            StackTop::Symbol(Token::Bottom),
            RecognizerState::Reading,
            vec![Token::Bottom],
        );
    }

    builder.build()
}

/// Recognizer for uppercase DNA (A, C, G, T).
///
/// # Errors
///
/// See [`nucleotide_recognizer`].
pub fn dna_recognizer() -> Result<NucleotideRecognizer, DefinitionError> {
    nucleotide_recognizer(&DNA_BASES)
}

/// Recognizer for uppercase RNA (A, C, G, U).
///
/// # Errors
///
/// See [`nucleotide_recognizer`].
pub fn rna_recognizer() -> Result<NucleotideRecognizer, DefinitionError> {
    nucleotide_recognizer(&RNA_BASES)
}
