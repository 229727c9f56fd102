use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::automaton::table::TransitionTable;
use crate::types::DefinitionError;

/// Bounds shared by every state and symbol type an automaton can be built over.
///
/// States and symbols are opaque: the engine only compares, hashes, clones and
/// prints them (the latter for error messages).
pub trait Label: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Label for T {}

/// The stack top observed by a transition.
///
/// `Empty` is the sentinel substituted when the stack holds no symbols. It is
/// never a member of the stack alphabet and can never be pushed, but a
/// transition may be keyed on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StackTop<S> {
    Symbol(S),
    Empty,
}

impl<S> StackTop<S> {
    /// Returns the symbol, or `None` for the empty-stack sentinel.
    pub fn into_symbol(self) -> Option<S> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            Self::Empty => None,
        }
    }

    pub const fn as_symbol(&self) -> Option<&S> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            Self::Empty => None,
        }
    }
}

impl<S> From<Option<S>> for StackTop<S> {
    fn from(symbol: Option<S>) -> Self {
        symbol.map_or(Self::Empty, Self::Symbol)
    }
}

/// Left-hand side of δ: `(state, input symbol or ε, stack top)`.
///
/// `input == None` marks an epsilon transition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitionKey<Q, S> {
    pub state: Q,
    pub input: Option<S>,
    pub top: StackTop<S>,
}

impl<Q, S> TransitionKey<Q, S> {
    /// Key of a transition that consumes `input`.
    pub const fn consuming(state: Q, input: S, top: StackTop<S>) -> Self {
        Self {
            state,
            input: Some(input),
            top,
        }
    }

    /// Key of a transition that consumes nothing.
    pub const fn epsilon(state: Q, top: StackTop<S>) -> Self {
        Self {
            state,
            input: None,
            top,
        }
    }
}

/// Right-hand side of δ: the next state and the symbols that replace the popped top.
///
/// `push` is applied left to right, so its last element becomes the new top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<Q, S> {
    pub target: Q,
    pub push: Vec<S>,
}

impl<Q, S> Transition<Q, S> {
    pub const fn new(target: Q, push: Vec<S>) -> Self {
        Self { target, push }
    }
}

/// The 7-tuple `(Q, Σ, Γ, δ, q0, Z0, F)` as supplied by a caller.
///
/// δ is kept as an ordered list of entries so that a source containing the
/// same key twice can be detected and refused instead of silently overwritten.
/// Nothing here is checked until [`TransitionTable::construct`] runs.
#[derive(Debug, Clone)]
pub struct AutomatonDefinition<Q, S> {
    pub states: HashSet<Q>,
    pub input_alphabet: HashSet<S>,
    pub stack_alphabet: HashSet<S>,
    pub transitions: Vec<(TransitionKey<Q, S>, Transition<Q, S>)>,
    pub initial_state: Q,
    pub initial_stack_symbol: S,
    pub final_states: HashSet<Q>,
}

/// Accumulates the pieces of a definition and validates them exactly once in [`build`].
///
/// Generated tables (such as the codon translator) are easier to write as a
/// loop of `add_transition` calls than as one literal.
///
/// # Examples
///
/// ```rust
/// use ribos_core::automaton::{StackTop, TransitionTableBuilder};
///
/// let mut builder = TransitionTableBuilder::new("q0", 'Z');
/// builder
///     .states(["q0", "q1"])
///     .input_alphabet(['a'])
///     .stack_alphabet(['Z'])
///     .final_states(["q1"])
///     .consuming("q0", 'a', StackTop::Symbol('Z'), "q1", vec!['Z']);
///
/// let table = builder.build()?;
/// assert!(table.validate(&['a'])?);
/// # Ok::<(), ribos_core::types::RibosError>(())
/// ```
///
/// [`build`]: TransitionTableBuilder::build
#[derive(Debug, Clone)]
pub struct TransitionTableBuilder<Q, S> {
    definition: AutomatonDefinition<Q, S>,
}

impl<Q: Label, S: Label> TransitionTableBuilder<Q, S> {
    pub fn new(initial_state: Q, initial_stack_symbol: S) -> Self {
        Self {
            definition: AutomatonDefinition {
                states: HashSet::new(),
                input_alphabet: HashSet::new(),
                stack_alphabet: HashSet::new(),
                transitions: Vec::new(),
                initial_state,
                initial_stack_symbol,
                final_states: HashSet::new(),
            },
        }
    }

    pub fn states(&mut self, states: impl IntoIterator<Item = Q>) -> &mut Self {
        self.definition.states.extend(states);
        self
    }

    pub fn input_alphabet(&mut self, symbols: impl IntoIterator<Item = S>) -> &mut Self {
        self.definition.input_alphabet.extend(symbols);
        self
    }

    pub fn stack_alphabet(&mut self, symbols: impl IntoIterator<Item = S>) -> &mut Self {
        self.definition.stack_alphabet.extend(symbols);
        self
    }

    pub fn final_states(&mut self, states: impl IntoIterator<Item = Q>) -> &mut Self {
        self.definition.final_states.extend(states);
        self
    }

    pub fn add_transition(
        &mut self,
        key: TransitionKey<Q, S>,
        transition: Transition<Q, S>,
    ) -> &mut Self {
        self.definition.transitions.push((key, transition));
        self
    }

    /// Shorthand for an input-consuming transition.
    pub fn consuming(
        &mut self,
        state: Q,
        input: S,
        top: StackTop<S>,
        target: Q,
        push: Vec<S>,
    ) -> &mut Self {
        self.add_transition(
            TransitionKey::consuming(state, input, top),
            Transition::new(target, push),
        )
    }

    /// Shorthand for an epsilon transition.
    pub fn epsilon(&mut self, state: Q, top: StackTop<S>, target: Q, push: Vec<S>) -> &mut Self {
        self.add_transition(TransitionKey::epsilon(state, top), Transition::new(target, push))
    }

    /// The definition collected so far, unvalidated.
    pub fn into_definition(self) -> AutomatonDefinition<Q, S> {
        self.definition
    }

    /// Validates the accumulated definition and freezes it into a table.
    ///
    /// # Errors
    ///
    /// Returns the first [`DefinitionError`] found; see [`TransitionTable::construct`].
    pub fn build(self) -> Result<TransitionTable<Q, S>, DefinitionError> {
        TransitionTable::construct(self.definition)
    }
}

/// Renders a transition as `(state, input, top) -> (target, [push])` for diagnostics.
pub(crate) fn describe_transition<Q: fmt::Debug, S: fmt::Debug>(
    key: &TransitionKey<Q, S>,
    transition: &Transition<Q, S>,
) -> String {
    format!(
        "{} -> ({:?}, {:?})",
        describe_key(key),
        transition.target,
        transition.push
    )
}

pub(crate) fn describe_key<Q: fmt::Debug, S: fmt::Debug>(key: &TransitionKey<Q, S>) -> String {
    let input = key
        .input
        .as_ref()
        .map_or_else(|| "ε".to_string(), |symbol| format!("{symbol:?}"));
    format!("({:?}, {}, {})", key.state, input, describe_top(&key.top))
}

pub(crate) fn describe_top<S: fmt::Debug>(top: &StackTop<S>) -> String {
    match top {
        StackTop::Symbol(symbol) => format!("{symbol:?}"),
        StackTop::Empty => "<empty>".to_string(),
    }
}
