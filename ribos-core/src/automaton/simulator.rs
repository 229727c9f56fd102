use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, trace};

use crate::automaton::definition::{Label, StackTop, Transition, describe_top};
use crate::automaton::stack::Stack;
use crate::automaton::table::TransitionTable;
use crate::types::StuckState;

/// What to do when neither an input-consuming nor an epsilon transition applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingTransitionPolicy {
    /// Stop and reject the input. Used by [`Simulator::validate`].
    Reject,
    /// Drop the current input symbol and carry on in the same configuration.
    /// Used by [`Simulator::scan`]. Symbols outside Σ are dropped the same way.
    Skip,
}

/// How far the epsilon closure runs once input is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClosureGoal {
    /// Follow epsilon transitions until none applies.
    Exhaust,
    /// Follow epsilon transitions until a final state is reached; running out first is an error.
    ReachFinal,
}

#[derive(Debug, Clone)]
struct Configuration<Q, S> {
    state: Q,
    stack: Stack<S>,
}

impl<Q: Label, S: Label> Configuration<Q, S> {
    fn initial(table: &TransitionTable<Q, S>) -> Self {
        Self {
            state: table.initial_state().clone(),
            stack: Stack::with_bottom(table.initial_stack_symbol().clone()),
        }
    }

    /// Pops the top for inspection, returning the sentinel on an empty stack.
    fn take_top(&mut self) -> StackTop<S> {
        StackTop::from(self.stack.pop_top())
    }

    /// Puts back a top taken by [`take_top`](Self::take_top).
    fn restore(&mut self, top: StackTop<S>) {
        if let Some(symbol) = top.into_symbol() {
            self.stack.push_sequence(std::slice::from_ref(&symbol));
        }
    }

    fn apply(&mut self, transition: &Transition<Q, S>) {
        self.state = transition.target.clone();
        self.stack.push_sequence(&transition.push);
    }
}

/// Result of the input-consuming phase.
struct Run<Q, S> {
    configuration: Configuration<Q, S>,
    rejected_at: Option<usize>,
}

/// Detects epsilon runs that can never end.
///
/// Each epsilon step records `(state, top)` with the stack depth it was taken
/// at. If the same pair comes round again at the same or a greater depth and
/// the stack never dipped below the recorded level in between, the symbols
/// underneath were not touched, so the run is bound to repeat forever. Entries
/// are forgotten as soon as the stack shrinks past them, which keeps chains
/// that pop many copies of the same symbol from being flagged.
#[derive(Debug)]
struct CycleGuard<Q, S> {
    visited: HashMap<(Q, StackTop<S>), usize>,
}

impl<Q: Label, S: Label> CycleGuard<Q, S> {
    fn new() -> Self {
        Self {
            visited: HashMap::new(),
        }
    }

    fn enter(&mut self, state: &Q, top: &StackTop<S>, depth: usize) -> Result<(), StuckState> {
        self.visited.retain(|_, seen| *seen <= depth);
        match self.visited.entry((state.clone(), top.clone())) {
            Entry::Occupied(_) => Err(StuckState::NonTerminatingClosure {
                state: format!("{state:?}"),
                top: describe_top(top),
            }),
            Entry::Vacant(slot) => {
                slot.insert(depth);
                Ok(())
            }
        }
    }

    fn clear(&mut self) {
        self.visited.clear();
    }
}

/// Runs inputs against a borrowed [`TransitionTable`].
///
/// The simulator holds no per-run state: every call to [`validate`] or
/// [`scan`] starts from `(q0, input, [Z0])` with a fresh stack, so one
/// simulator (or one table shared across threads) can serve any number of
/// calls.
///
/// At each step the stack top is popped and δ is consulted for the current
/// input symbol first and for ε second, so an input-consuming transition
/// always wins over an epsilon transition on the same `(state, top)`.
///
/// # Examples
///
/// ```rust
/// use ribos_core::automaton::{Simulator, StackTop, TransitionTableBuilder};
///
/// let mut builder = TransitionTableBuilder::new("s0", 'Z');
/// builder
///     .states(["s0", "s1", "s2", "s3"])
///     .input_alphabet(['A', 'U', 'G'])
///     .stack_alphabet(['Z', 'M'])
///     .final_states(["s3"])
///     .consuming("s0", 'A', StackTop::Symbol('Z'), "s1", vec!['Z'])
///     .consuming("s1", 'U', StackTop::Symbol('Z'), "s2", vec!['Z'])
///     .consuming("s2", 'G', StackTop::Symbol('Z'), "s3", vec!['M', 'Z']);
/// let table = builder.build()?;
///
/// let simulator = Simulator::new(&table);
/// assert!(simulator.validate(&['A', 'U', 'G'])?);
/// assert!(!simulator.validate(&['A', 'U', 'C'])?);
/// assert_eq!(simulator.scan(&['X', 'A', 'U', 'G', 'Y'])?, vec!['M', 'Z']);
/// # Ok::<(), ribos_core::types::RibosError>(())
/// ```
///
/// [`validate`]: Simulator::validate
/// [`scan`]: Simulator::scan
#[derive(Debug, Clone, Copy)]
pub struct Simulator<'t, Q, S> {
    table: &'t TransitionTable<Q, S>,
}

impl<'t, Q: Label, S: Label> Simulator<'t, Q, S> {
    pub const fn new(table: &'t TransitionTable<Q, S>) -> Self {
        Self { table }
    }

    pub const fn table(&self) -> &'t TransitionTable<Q, S> {
        self.table
    }

    /// Strict recognition: accepts iff the whole input is consumed and the
    /// epsilon closure afterwards ends in a final state.
    ///
    /// Input containing a symbol outside Σ, or a symbol for which neither an
    /// input-consuming nor an epsilon transition exists, is rejected with
    /// `Ok(false)`. Acceptance is by final state only; the stack contents
    /// play no part in the verdict.
    ///
    /// # Errors
    ///
    /// Returns [`StuckState::NonTerminatingClosure`] if an epsilon run cycles.
    pub fn validate(&self, input: &[S]) -> Result<bool, StuckState> {
        let run = self.consume(input, MissingTransitionPolicy::Reject)?;
        if let Some(position) = run.rejected_at {
            debug!(position, "input rejected");
            return Ok(false);
        }

        let mut configuration = run.configuration;
        self.close(&mut configuration, ClosureGoal::Exhaust)?;
        Ok(self.table.is_final(&configuration.state))
    }

    /// Lenient transduction: skips input it cannot use and returns the final
    /// stack contents, bottom to top.
    ///
    /// Symbols outside Σ and symbols without an applicable transition are
    /// discarded without changing state or stack. After the input is
    /// exhausted, epsilon transitions are followed until a final state is
    /// reached.
    ///
    /// # Errors
    ///
    /// - [`StuckState::NoFinalState`] if the epsilon transitions run out in a
    ///   non-final state
    /// - [`StuckState::NonTerminatingClosure`] if an epsilon run cycles
    pub fn scan(&self, input: &[S]) -> Result<Vec<S>, StuckState> {
        let mut configuration = self
            .consume(input, MissingTransitionPolicy::Skip)?
            .configuration;
        self.close(&mut configuration, ClosureGoal::ReachFinal)?;
        Ok(configuration.stack.into_sequence())
    }

    fn consume(
        &self,
        input: &[S],
        policy: MissingTransitionPolicy,
    ) -> Result<Run<Q, S>, StuckState> {
        let mut configuration = Configuration::initial(self.table);
        let mut guard = CycleGuard::new();
        let mut position = 0;

        while let Some(symbol) = input.get(position) {
            if !self.table.accepts_input(symbol) {
                match policy {
                    MissingTransitionPolicy::Reject => {
                        return Ok(Run {
                            configuration,
                            rejected_at: Some(position),
                        });
                    }
                    MissingTransitionPolicy::Skip => {
                        trace!(position, ?symbol, "skipping symbol outside the input alphabet");
                        guard.clear();
                        position += 1;
                        continue;
                    }
                }
            }

            let depth = configuration.stack.len();
            let top = configuration.take_top();

            if let Some(transition) = self.table.lookup(&configuration.state, Some(symbol), &top) {
                configuration.apply(transition);
                guard.clear();
                position += 1;
            } else if let Some(transition) = self.table.lookup(&configuration.state, None, &top) {
                guard.enter(&configuration.state, &top, depth)?;
                configuration.apply(transition);
            } else {
                configuration.restore(top);
                match policy {
                    MissingTransitionPolicy::Reject => {
                        return Ok(Run {
                            configuration,
                            rejected_at: Some(position),
                        });
                    }
                    MissingTransitionPolicy::Skip => {
                        trace!(position, ?symbol, "skipping symbol without a transition");
                        guard.clear();
                        position += 1;
                    }
                }
            }
        }

        Ok(Run {
            configuration,
            rejected_at: None,
        })
    }

    fn close(
        &self,
        configuration: &mut Configuration<Q, S>,
        goal: ClosureGoal,
    ) -> Result<(), StuckState> {
        let mut guard = CycleGuard::new();

        loop {
            if goal == ClosureGoal::ReachFinal && self.table.is_final(&configuration.state) {
                return Ok(());
            }

            let depth = configuration.stack.len();
            let top = configuration.take_top();

            let Some(transition) = self.table.lookup(&configuration.state, None, &top) else {
                configuration.restore(top);
                return match goal {
                    ClosureGoal::Exhaust => Ok(()),
                    ClosureGoal::ReachFinal => Err(StuckState::NoFinalState {
                        state: format!("{:?}", configuration.state),
                    }),
                };
            };

            guard.enter(&configuration.state, &top, depth)?;
            configuration.apply(transition);
        }
    }
}

/// Strict recognition of `input` by `table`. See [`Simulator::validate`].
///
/// # Errors
///
/// Returns [`StuckState::NonTerminatingClosure`] if an epsilon run cycles.
pub fn validate<Q: Label, S: Label>(
    table: &TransitionTable<Q, S>,
    input: &[S],
) -> Result<bool, StuckState> {
    Simulator::new(table).validate(input)
}

/// Lenient transduction of `input` by `table`. See [`Simulator::scan`].
///
/// # Errors
///
/// Returns [`StuckState`] if no final state is reachable after the input.
pub fn scan<Q: Label, S: Label>(
    table: &TransitionTable<Q, S>,
    input: &[S],
) -> Result<Vec<S>, StuckState> {
    Simulator::new(table).scan(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::definition::{TransitionKey, TransitionTableBuilder};
    use proptest::prelude::*;

    const Z: StackTop<char> = StackTop::Symbol('Z');

    /// Recognises the single codon AUG, pushing `M` under the marker on success.
    fn codon_table(finals: &[&'static str]) -> TransitionTable<&'static str, char> {
        let mut builder = TransitionTableBuilder::new("s0", 'Z');
        builder
            .states(["s0", "s1", "s2", "s3"])
            .input_alphabet(['A', 'U', 'G'])
            .stack_alphabet(['Z', 'M'])
            .final_states(finals.iter().copied())
            .consuming("s0", 'A', Z, "s1", vec!['Z'])
            .consuming("s1", 'U', Z, "s2", vec!['Z'])
            .consuming("s2", 'G', Z, "s3", vec!['M', 'Z']);
        builder.build().unwrap()
    }

    fn chars(input: &str) -> Vec<char> {
        input.chars().collect()
    }

    #[test]
    fn test_validate_accepts_aug() {
        let table = codon_table(&["s3"]);
        assert!(validate(&table, &chars("AUG")).unwrap());
    }

    #[test]
    fn test_validate_rejects_missing_transition() {
        let table = codon_table(&["s3"]);
        assert!(!validate(&table, &chars("AUA")).unwrap());
    }

    #[test]
    fn test_validate_rejects_symbol_outside_alphabet() {
        let table = codon_table(&["s3"]);
        assert!(!validate(&table, &chars("AUC")).unwrap());
    }

    #[test]
    fn test_validate_rejects_trailing_input() {
        let table = codon_table(&["s3"]);
        assert!(!validate(&table, &chars("AUGA")).unwrap());
    }

    #[test]
    fn test_validate_rejects_prefix_in_non_final_state() {
        let table = codon_table(&["s3"]);
        assert!(!validate(&table, &chars("AU")).unwrap());
        assert!(!validate(&table, &[]).unwrap());
    }

    #[test]
    fn test_scan_skips_filler() {
        let table = codon_table(&["s0", "s3"]);
        let noisy = scan(&table, &chars("XXAUGYY")).unwrap();
        let clean = scan(&table, &chars("AUG")).unwrap();
        assert_eq!(noisy, clean);
        assert_eq!(noisy, vec!['M', 'Z']);
    }

    #[test]
    fn test_scan_empty_input_returns_initial_stack() {
        let table = codon_table(&["s0", "s3"]);
        assert_eq!(scan(&table, &[]).unwrap(), vec!['Z']);
    }

    #[test]
    fn test_scan_stuck_when_no_epsilon_reaches_final() {
        let table = codon_table(&["s3"]);
        let error = scan(&table, &[]).unwrap_err();
        assert_eq!(
            error,
            StuckState::NoFinalState {
                state: "\"s0\"".to_string()
            }
        );
    }

    #[test]
    fn test_scan_skips_symbol_in_alphabet_without_transition() {
        let table = codon_table(&["s0", "s3"]);
        // 'G' in s0 and the second 'A' in s1 have no transition and are dropped.
        assert_eq!(scan(&table, &chars("GAAUG")).unwrap(), vec!['M', 'Z']);
    }

    fn priority_table() -> TransitionTable<&'static str, char> {
        let mut builder = TransitionTableBuilder::new("q0", 'Z');
        builder
            .states(["q0", "consumed", "epsilon"])
            .input_alphabet(['a'])
            .stack_alphabet(['Z'])
            .final_states(["consumed"])
            .consuming("q0", 'a', Z, "consumed", vec!['Z'])
            .epsilon("q0", Z, "epsilon", vec!['Z']);
        builder.build().unwrap()
    }

    #[test]
    fn test_input_transition_takes_priority_over_epsilon() {
        let table = priority_table();
        assert!(validate(&table, &['a']).unwrap());
    }

    #[test]
    fn test_epsilon_applies_when_input_transition_missing() {
        let mut builder = TransitionTableBuilder::new("q0", 'Z');
        builder
            .states(["q0", "q1", "q2"])
            .input_alphabet(['a'])
            .stack_alphabet(['Z', 'B'])
            .final_states(["q2"])
            .epsilon("q0", Z, "q1", vec!['Z', 'B'])
            .consuming("q1", 'a', StackTop::Symbol('B'), "q2", vec![]);
        let table = builder.build().unwrap();

        assert!(validate(&table, &['a']).unwrap());
        assert_eq!(scan(&table, &['a']).unwrap(), vec!['Z']);
    }

    #[test]
    fn test_epsilon_closure_runs_after_input() {
        let mut builder = TransitionTableBuilder::new("q0", 'Z');
        builder
            .states(["q0", "q1", "done"])
            .input_alphabet(['a'])
            .stack_alphabet(['Z', 'A'])
            .final_states(["done"])
            .consuming("q0", 'a', Z, "q1", vec!['Z', 'A'])
            .epsilon("q1", StackTop::Symbol('A'), "q1", vec![])
            .epsilon("q1", Z, "q1", vec![])
            .epsilon("q1", StackTop::Empty, "done", vec![]);
        let table = builder.build().unwrap();

        assert!(validate(&table, &['a']).unwrap());
        assert_eq!(scan(&table, &['a']).unwrap(), Vec::<char>::new());
    }

    #[test]
    fn test_strict_closure_stops_quietly_and_restores_top() {
        let mut builder = TransitionTableBuilder::new("q0", 'Z');
        builder
            .states(["q0", "q1"])
            .input_alphabet(['a'])
            .stack_alphabet(['Z', 'A'])
            .final_states(["q1"])
            .consuming("q0", 'a', Z, "q0", vec!['Z', 'A'])
            .epsilon("q0", StackTop::Symbol('A'), "q1", vec![]);
        let table = builder.build().unwrap();

        // One epsilon step to q1, then (q1, ε, Z) is missing and Z is put back.
        assert!(validate(&table, &['a']).unwrap());
        assert!(!validate(&table, &[]).unwrap());
    }

    #[test]
    fn test_acceptance_ignores_empty_stack() {
        let mut builder = TransitionTableBuilder::new("q0", 'Z');
        builder
            .states(["q0", "q1"])
            .input_alphabet(['a'])
            .stack_alphabet(['Z'])
            .final_states(["q1"])
            .consuming("q0", 'a', Z, "q0", vec![]);
        let table = builder.build().unwrap();

        // The stack is empty after 'a', but q0 is not final.
        assert!(!validate(&table, &['a']).unwrap());
    }

    #[test]
    fn test_transition_on_empty_stack_sentinel() {
        let mut builder = TransitionTableBuilder::new("q0", 'Z');
        builder
            .states(["q0", "q1"])
            .input_alphabet(['a', 'b'])
            .stack_alphabet(['Z'])
            .final_states(["q1"])
            .consuming("q0", 'a', Z, "q0", vec![])
            .consuming("q0", 'b', StackTop::Empty, "q1", vec![]);
        let table = builder.build().unwrap();

        assert!(validate(&table, &['a', 'b']).unwrap());
        assert!(!validate(&table, &['b']).unwrap());
    }

    #[test]
    fn test_ping_pong_epsilon_cycle_is_detected() {
        let mut builder = TransitionTableBuilder::new("p", 'Z');
        builder
            .states(["p", "q", "f"])
            .input_alphabet(['a'])
            .stack_alphabet(['Z'])
            .final_states(["f"])
            .epsilon("p", Z, "q", vec!['Z'])
            .epsilon("q", Z, "p", vec!['Z']);
        let table = builder.build().unwrap();

        let error = validate(&table, &[]).unwrap_err();
        assert_eq!(
            error,
            StuckState::NonTerminatingClosure {
                state: "\"p\"".to_string(),
                top: "'Z'".to_string(),
            }
        );
        assert!(scan(&table, &[]).is_err());
    }

    #[test]
    fn test_growing_epsilon_cycle_is_detected() {
        let mut builder = TransitionTableBuilder::new("p", 'Z');
        builder
            .states(["p"])
            .input_alphabet(['a'])
            .stack_alphabet(['Z'])
            .epsilon("p", Z, "p", vec!['Z', 'Z']);
        let table = builder.build().unwrap();

        assert!(matches!(
            validate(&table, &[]),
            Err(StuckState::NonTerminatingClosure { .. })
        ));
    }

    #[test]
    fn test_epsilon_cycle_during_input_is_detected() {
        let mut builder = TransitionTableBuilder::new("p", 'Z');
        builder
            .states(["p", "q"])
            .input_alphabet(['a'])
            .stack_alphabet(['Z'])
            .epsilon("p", Z, "q", vec!['Z'])
            .epsilon("q", Z, "p", vec!['Z']);
        let table = builder.build().unwrap();

        assert!(validate(&table, &['a']).is_err());
        assert!(scan(&table, &['a']).is_err());
    }

    #[test]
    fn test_popping_repeated_symbols_is_not_a_cycle() {
        let mut builder = TransitionTableBuilder::new("load", 'Z');
        builder
            .states(["load", "drain", "done"])
            .input_alphabet(['a'])
            .stack_alphabet(['Z', 'A'])
            .final_states(["done"])
            .consuming("load", 'a', Z, "load", vec!['A', 'Z'])
            .epsilon("load", Z, "drain", vec![])
            .epsilon("drain", StackTop::Symbol('A'), "drain", vec![])
            .epsilon("drain", StackTop::Empty, "done", vec![]);
        let table = builder.build().unwrap();

        let input = vec!['a'; 25];
        assert!(validate(&table, &input).unwrap());
        assert_eq!(scan(&table, &input).unwrap(), Vec::<char>::new());
    }

    #[test]
    fn test_scan_stops_at_first_final_state() {
        let mut builder = TransitionTableBuilder::new("q0", 'Z');
        builder
            .states(["q0", "q1"])
            .input_alphabet(['a'])
            .stack_alphabet(['Z'])
            .final_states(["q0"])
            .epsilon("q0", Z, "q1", vec![]);
        let table = builder.build().unwrap();

        // Strict mode exhausts the closure and ends in q1, lenient mode stops in q0.
        assert!(!validate(&table, &[]).unwrap());
        assert_eq!(scan(&table, &[]).unwrap(), vec!['Z']);
    }

    #[test]
    fn test_simulator_is_reusable() {
        let table = codon_table(&["s3"]);
        let simulator = Simulator::new(&table);
        assert!(simulator.validate(&chars("AUG")).unwrap());
        assert!(!simulator.validate(&chars("GUA")).unwrap());
        assert!(simulator.validate(&chars("AUG")).unwrap());
        assert_eq!(simulator.table().len(), 3);
    }

    proptest! {
        #[test]
        fn prop_outcome_is_deterministic(input in proptest::collection::vec(prop::sample::select(vec!['A', 'U', 'G', 'C', 'X']), 0..40)) {
            let table = codon_table(&["s0", "s3"]);
            prop_assert_eq!(validate(&table, &input), validate(&table, &input));
            prop_assert_eq!(scan(&table, &input), scan(&table, &input));
        }

        #[test]
        fn prop_scan_ignores_filler_around_codon(prefix in "[XYC]{0,10}", suffix in "[XYC]{0,10}") {
            let table = codon_table(&["s0", "s3"]);
            let input = chars(&format!("{prefix}AUG{suffix}"));
            prop_assert_eq!(scan(&table, &input).unwrap(), vec!['M', 'Z']);
        }

        #[test]
        fn prop_construction_is_idempotent(
            moves in prop::collection::btree_map(
                (0usize..4, prop::option::of(prop::sample::select(vec!['A', 'U', 'G'])), any::<bool>()),
                (0usize..4, prop::collection::vec(prop::sample::select(vec!['Z', 'M']), 0..3)),
                0..16,
            )
        ) {
            const STATES: [&str; 4] = ["s0", "s1", "s2", "s3"];
            let top_of = |marker: bool| if marker { Z } else { StackTop::Symbol('M') };

            let mut builder = TransitionTableBuilder::new("s0", 'Z');
            builder
                .states(STATES)
                .input_alphabet(['A', 'U', 'G'])
                .stack_alphabet(['Z', 'M'])
                .final_states(["s3"]);
            for (&(state, input, marker), (target, push)) in &moves {
                let key = match input {
                    Some(symbol) => TransitionKey::consuming(STATES[state], symbol, top_of(marker)),
                    None => TransitionKey::epsilon(STATES[state], top_of(marker)),
                };
                builder.add_transition(key, Transition::new(STATES[*target], push.clone()));
            }

            let first = builder.clone().build().unwrap();
            let second = builder.build().unwrap();
            prop_assert_eq!(first.len(), second.len());
            prop_assert_eq!(first.len(), moves.len());
            for state in STATES {
                for input in [None, Some('A'), Some('U'), Some('G')] {
                    for top in [Z, StackTop::Symbol('M'), StackTop::Empty] {
                        prop_assert_eq!(
                            first.lookup(&state, input.as_ref(), &top),
                            second.lookup(&state, input.as_ref(), &top)
                        );
                    }
                }
            }
        }

        #[test]
        fn prop_priority_law(extra in 0usize..5) {
            let table = priority_table();
            // Only the exact single 'a' is accepted: the epsilon branch is never preferred.
            let input = vec!['a'; 1 + extra];
            prop_assert_eq!(validate(&table, &input).unwrap(), extra == 0);
        }
    }
}
