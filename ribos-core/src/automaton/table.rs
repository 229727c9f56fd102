use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::automaton::definition::{
    AutomatonDefinition, Label, StackTop, Transition, TransitionKey, describe_key,
    describe_transition,
};
use crate::automaton::simulator::Simulator;
use crate::types::{DefinitionError, StuckState};

/// A validated, immutable transition function δ together with the rest of the 7-tuple.
///
/// A `TransitionTable` only exists once every invariant of its definition has
/// been checked, and it never changes afterwards. It can therefore be shared by
/// reference between any number of simultaneous simulations.
#[derive(Debug, Clone)]
pub struct TransitionTable<Q, S> {
    states: HashSet<Q>,
    input_alphabet: HashSet<S>,
    stack_alphabet: HashSet<S>,
    transitions: HashMap<TransitionKey<Q, S>, Transition<Q, S>>,
    initial_state: Q,
    initial_stack_symbol: S,
    final_states: HashSet<Q>,
}

impl<Q: Label, S: Label> TransitionTable<Q, S> {
    /// Checks a definition and turns it into a table.
    ///
    /// The checks run in a fixed order: initial state, final states, initial
    /// stack symbol, then every transition in the order it was supplied.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant:
    /// - [`DefinitionError::UndeclaredInitialState`] if `q0 ∉ Q`
    /// - [`DefinitionError::FinalStatesNotSubset`] if `F ⊄ Q`
    /// - [`DefinitionError::UndeclaredInitialStackSymbol`] if `Z0 ∉ Γ`
    /// - one of the transition variants if an entry of δ mentions an undeclared
    ///   state or symbol
    /// - [`DefinitionError::ConflictingTransition`] if the same key appears
    ///   twice with different right-hand sides
    pub fn construct(definition: AutomatonDefinition<Q, S>) -> Result<Self, DefinitionError> {
        let AutomatonDefinition {
            states,
            input_alphabet,
            stack_alphabet,
            transitions: entries,
            initial_state,
            initial_stack_symbol,
            final_states,
        } = definition;

        if !states.contains(&initial_state) {
            return Err(DefinitionError::UndeclaredInitialState(format!(
                "{initial_state:?}"
            )));
        }

        let mut stray_finals: Vec<String> = final_states
            .difference(&states)
            .map(|state| format!("{state:?}"))
            .collect();
        if !stray_finals.is_empty() {
            stray_finals.sort();
            return Err(DefinitionError::FinalStatesNotSubset(format!(
                "{{{}}}",
                stray_finals.join(", ")
            )));
        }

        if !stack_alphabet.contains(&initial_stack_symbol) {
            return Err(DefinitionError::UndeclaredInitialStackSymbol(format!(
                "{initial_stack_symbol:?}"
            )));
        }

        let mut transitions = HashMap::with_capacity(entries.len());
        for (key, transition) in entries {
            check_transition(&states, &input_alphabet, &stack_alphabet, &key, &transition)?;

            match transitions.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(transition);
                }
                Entry::Occupied(slot) => {
                    if *slot.get() != transition {
                        return Err(DefinitionError::ConflictingTransition {
                            key: describe_key(slot.key()),
                            existing: format!("{:?}", slot.get()),
                            conflicting: format!("{transition:?}"),
                        });
                    }
                }
            }
        }

        debug!(
            states = states.len(),
            transitions = transitions.len(),
            "constructed transition table"
        );

        Ok(Self {
            states,
            input_alphabet,
            stack_alphabet,
            transitions,
            initial_state,
            initial_stack_symbol,
            final_states,
        })
    }

    /// Looks up δ(state, input, top). `input == None` asks for the epsilon transition.
    pub fn lookup(
        &self,
        state: &Q,
        input: Option<&S>,
        top: &StackTop<S>,
    ) -> Option<&Transition<Q, S>> {
        let key = TransitionKey {
            state: state.clone(),
            input: input.cloned(),
            top: top.clone(),
        };
        self.transitions.get(&key)
    }

    pub const fn initial_state(&self) -> &Q {
        &self.initial_state
    }

    pub const fn initial_stack_symbol(&self) -> &S {
        &self.initial_stack_symbol
    }

    pub fn is_final(&self, state: &Q) -> bool {
        self.final_states.contains(state)
    }

    /// Whether `symbol` belongs to the input alphabet Σ.
    pub fn accepts_input(&self, symbol: &S) -> bool {
        self.input_alphabet.contains(symbol)
    }

    pub const fn states(&self) -> &HashSet<Q> {
        &self.states
    }

    pub const fn stack_alphabet(&self) -> &HashSet<S> {
        &self.stack_alphabet
    }

    /// Number of entries in δ.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Runs `input` in strict mode. See [`Simulator::validate`].
    ///
    /// # Errors
    ///
    /// Fails with [`StuckState::NonTerminatingClosure`] if an epsilon run cycles.
    pub fn validate(&self, input: &[S]) -> Result<bool, StuckState> {
        Simulator::new(self).validate(input)
    }

    /// Runs `input` in lenient mode. See [`Simulator::scan`].
    ///
    /// # Errors
    ///
    /// Fails with [`StuckState`] if no final state can be reached after the input.
    pub fn scan(&self, input: &[S]) -> Result<Vec<S>, StuckState> {
        Simulator::new(self).scan(input)
    }
}

fn check_transition<Q: Label, S: Label>(
    states: &HashSet<Q>,
    input_alphabet: &HashSet<S>,
    stack_alphabet: &HashSet<S>,
    key: &TransitionKey<Q, S>,
    transition: &Transition<Q, S>,
) -> Result<(), DefinitionError> {
    let describe = || describe_transition(key, transition);

    if !states.contains(&key.state) {
        return Err(DefinitionError::UndeclaredOriginState {
            transition: describe(),
            state: format!("{:?}", key.state),
        });
    }

    if let Some(input) = &key.input {
        if !input_alphabet.contains(input) {
            return Err(DefinitionError::UndeclaredInputSymbol {
                transition: describe(),
                symbol: format!("{input:?}"),
            });
        }
    }

    if let StackTop::Symbol(top) = &key.top {
        if !stack_alphabet.contains(top) {
            return Err(DefinitionError::UndeclaredStackTop {
                transition: describe(),
                symbol: format!("{top:?}"),
            });
        }
    }

    if !states.contains(&transition.target) {
        return Err(DefinitionError::UndeclaredTargetState {
            transition: describe(),
            state: format!("{:?}", transition.target),
        });
    }

    let stray_pushes: Vec<&S> = transition
        .push
        .iter()
        .filter(|symbol| !stack_alphabet.contains(*symbol))
        .collect();
    if !stray_pushes.is_empty() {
        return Err(DefinitionError::UndeclaredPushedSymbols {
            transition: describe(),
            symbols: format!("{stray_pushes:?}"),
        });
    }

    Ok(())
}
