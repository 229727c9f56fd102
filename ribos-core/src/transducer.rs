//! Finite-state transducers (Mealy machines).
//!
//! A Mealy machine is the tuple `(Q, Σ, Γ, δ, λ, q0)` where δ gives the next
//! state and λ the output symbol for each `(state, input)` pair. Every input
//! symbol yields exactly one output symbol, so the output has the same length
//! as the input.
//!
//! DNA-to-RNA transcription is the one machine this crate ships: see
//! [`dna_to_rna`].

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::automaton::Label;
use crate::types::{DefinitionError, RibosError};

/// The 6-tuple of a Mealy machine, as supplied by a caller.
#[derive(Debug, Clone)]
pub struct MealyDefinition<Q, I, O> {
    pub states: HashSet<Q>,
    pub input_alphabet: HashSet<I>,
    pub output_alphabet: HashSet<O>,
    /// δ: `(state, input) -> next state`
    pub transitions: HashMap<(Q, I), Q>,
    /// λ: `(state, input) -> output`
    pub outputs: HashMap<(Q, I), O>,
    pub initial_state: Q,
}

/// A validated, immutable Mealy machine.
#[derive(Debug, Clone)]
pub struct FiniteTransducer<Q, I, O> {
    input_alphabet: HashSet<I>,
    transitions: HashMap<(Q, I), Q>,
    outputs: HashMap<(Q, I), O>,
    initial_state: Q,
}

impl<Q: Label, I: Label, O: Label> FiniteTransducer<Q, I, O> {
    /// Checks every state and symbol referenced by δ and λ and freezes the machine.
    ///
    /// # Errors
    ///
    /// - [`DefinitionError::UndeclaredInitialState`] if `q0 ∉ Q`
    /// - [`DefinitionError::InvalidMapping`] for the first δ or λ entry that
    ///   mentions an undeclared state, input symbol or output symbol
    pub fn construct(definition: MealyDefinition<Q, I, O>) -> Result<Self, DefinitionError> {
        let MealyDefinition {
            states,
            input_alphabet,
            output_alphabet,
            transitions,
            outputs,
            initial_state,
        } = definition;

        if !states.contains(&initial_state) {
            return Err(DefinitionError::UndeclaredInitialState(format!(
                "{initial_state:?}"
            )));
        }

        for ((state, input), target) in &transitions {
            let mapping = || format!("δ({state:?}, {input:?}) = {target:?}");
            check_pair(&states, &input_alphabet, state, input, mapping)?;
            if !states.contains(target) {
                return Err(invalid(mapping(), "target state is not declared"));
            }
        }

        for ((state, input), output) in &outputs {
            let mapping = || format!("λ({state:?}, {input:?}) = {output:?}");
            check_pair(&states, &input_alphabet, state, input, mapping)?;
            if !output_alphabet.contains(output) {
                return Err(invalid(mapping(), "output symbol is not in the output alphabet"));
            }
        }

        debug!(
            states = states.len(),
            transitions = transitions.len(),
            "transducer constructed"
        );

        Ok(Self {
            input_alphabet,
            transitions,
            outputs,
            initial_state,
        })
    }

    pub const fn initial_state(&self) -> &Q {
        &self.initial_state
    }

    /// Runs the machine over `input`, collecting one output per input symbol.
    ///
    /// # Errors
    ///
    /// - [`RibosError::InvalidSequence`] on a symbol outside Σ
    /// - [`RibosError::UndefinedTransduction`] when δ or λ has no entry for
    ///   the current state and symbol
    pub fn transduce(&self, input: &[I]) -> Result<Vec<O>, RibosError> {
        let mut state = &self.initial_state;
        let mut output = Vec::with_capacity(input.len());

        for (position, symbol) in input.iter().enumerate() {
            if !self.input_alphabet.contains(symbol) {
                return Err(RibosError::InvalidSequence(format!(
                    "symbol {symbol:?} at position {position} is not in the input alphabet"
                )));
            }

            // Lookups need an owned key; clone once per step.
            let key = (state.clone(), symbol.clone());
            let next = self.transitions.get(&key).ok_or_else(|| {
                RibosError::UndefinedTransduction(format!("no transition for {key:?}"))
            })?;
            let emitted = self.outputs.get(&key).ok_or_else(|| {
                RibosError::UndefinedTransduction(format!("no output for {key:?}"))
            })?;

            output.push(emitted.clone());
            state = next;
        }

        Ok(output)
    }
}

fn check_pair<Q: Label, I: Label>(
    states: &HashSet<Q>,
    input_alphabet: &HashSet<I>,
    state: &Q,
    input: &I,
    mapping: impl Fn() -> String,
) -> Result<(), DefinitionError> {
    if !states.contains(state) {
        return Err(invalid(mapping(), "origin state is not declared"));
    }
    if !input_alphabet.contains(input) {
        return Err(invalid(mapping(), "input symbol is not in the input alphabet"));
    }
    Ok(())
}

fn invalid(mapping: String, reason: &str) -> DefinitionError {
    DefinitionError::InvalidMapping {
        mapping,
        reason: reason.to_string(),
    }
}

/// The single state of the transcriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscriberState {
    Transcribing,
}

/// Transcribes a DNA template strand into RNA, one base at a time.
pub type Transcriber = FiniteTransducer<TranscriberState, u8, char>;

/// Complementary base pairs, template DNA base first.
const TRANSCRIPTION_PAIRS: [(u8, char); 4] = [(b'A', 'U'), (b'T', 'A'), (b'C', 'G'), (b'G', 'C')];

/// Builds the DNA-to-RNA transcriber: `A→U`, `T→A`, `C→G`, `G→C`.
///
/// # Errors
///
/// The fixed definition is always valid; the constructor's error is passed
/// through unchanged.
///
/// # Examples
///
/// ```rust
/// use ribos_core::transducer::{dna_to_rna, transcribe};
///
/// let transcriber = dna_to_rna()?;
/// assert_eq!(transcribe(&transcriber, "GATTACA")?, "CUAAUGU");
/// # Ok::<(), ribos_core::types::RibosError>(())
/// ```
pub fn dna_to_rna() -> Result<Transcriber, DefinitionError> {
    let state = TranscriberState::Transcribing;
    let transitions = TRANSCRIPTION_PAIRS
        .iter()
        .map(|&(base, _)| ((state, base), state))
        .collect();
    let outputs = TRANSCRIPTION_PAIRS
        .iter()
        .map(|&(base, complement)| ((state, base), complement))
        .collect();

    FiniteTransducer::construct(MealyDefinition {
        states: HashSet::from([state]),
        input_alphabet: TRANSCRIPTION_PAIRS.iter().map(|&(base, _)| base).collect(),
        output_alphabet: TRANSCRIPTION_PAIRS.iter().map(|&(_, rna)| rna).collect(),
        transitions,
        outputs,
        initial_state: state,
    })
}

/// Runs `transcriber` over a DNA string and returns the RNA string.
///
/// # Errors
///
/// See [`FiniteTransducer::transduce`].
pub fn transcribe(transcriber: &Transcriber, dna: &str) -> Result<String, RibosError> {
    Ok(transcriber.transduce(dna.as_bytes())?.into_iter().collect())
}
