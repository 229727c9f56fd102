//! Deterministic pushdown automata with epsilon transitions.
//!
//! An automaton is described by the usual 7-tuple `(Q, Σ, Γ, δ, q0, Z0, F)`.
//! The definition is validated once when a [`TransitionTable`] is constructed
//! and is immutable afterwards; a [`Simulator`] borrows the table and runs
//! inputs against it in one of two modes:
//!
//! - [`Simulator::validate`]: strict recognition, returns `true`/`false`
//! - [`Simulator::scan`]: lenient transduction that skips unusable input and
//!   returns the final stack contents
//!
//! ## Conventions
//!
//! - States and symbols are opaque values implementing [`Label`].
//! - An epsilon transition has `input == None` in its [`TransitionKey`].
//! - The stack top of an empty stack is [`StackTop::Empty`], a sentinel that is
//!   not part of Γ. Transitions may be keyed on it.
//! - A push sequence is applied left to right; its last symbol becomes the top.
//!   Stack contents are reported bottom to top.
//! - An input-consuming transition always takes precedence over an epsilon
//!   transition for the same `(state, top)`.
//! - Acceptance is by final state only.
//!
//! ## Example
//!
//! ```rust
//! use ribos_core::automaton::{StackTop, TransitionTableBuilder};
//!
//! // a^n b^n for n >= 1
//! let mut builder = TransitionTableBuilder::new("push", 'Z');
//! builder
//!     .states(["push", "pop", "accept"])
//!     .input_alphabet(['a', 'b'])
//!     .stack_alphabet(['Z', 'A'])
//!     .final_states(["accept"])
//!     .consuming("push", 'a', StackTop::Symbol('Z'), "push", vec!['Z', 'A'])
//!     .consuming("push", 'a', StackTop::Symbol('A'), "push", vec!['A', 'A'])
//!     .consuming("push", 'b', StackTop::Symbol('A'), "pop", vec![])
//!     .consuming("pop", 'b', StackTop::Symbol('A'), "pop", vec![])
//!     .epsilon("pop", StackTop::Symbol('Z'), "accept", vec![]);
//! let table = builder.build()?;
//!
//! assert!(table.validate(&['a', 'a', 'b', 'b'])?);
//! assert!(!table.validate(&['a', 'b', 'b'])?);
//! # Ok::<(), ribos_core::types::RibosError>(())
//! ```

pub mod definition;
pub mod simulator;
pub mod stack;
pub mod table;

pub use definition::{
    AutomatonDefinition, Label, StackTop, Transition, TransitionKey, TransitionTableBuilder,
};
pub use simulator::{MissingTransitionPolicy, Simulator, scan, validate};
pub use stack::Stack;
pub use table::TransitionTable;
