//! # Ribos - DNA to protein with pushdown automata
//!
//! Ribos transcribes DNA into RNA and translates RNA into proteins using
//! formal automata: a Mealy machine for transcription and a deterministic
//! pushdown automaton with epsilon transitions (DPDA-ε) for translation.
//!
//! ## Overview
//!
//! The pushdown engine in [`automaton`] is generic over its state and symbol
//! types. It runs in two modes:
//!
//! - **validate**: strict recognition, `true` iff the whole input is consumed
//!   and the automaton ends in a final state
//! - **scan**: lenient transduction that skips input it cannot use and
//!   returns the final stack contents
//!
//! The biology is configuration on top of that engine. A one-state DPDA
//! recognizes well-formed DNA, and the [`ribosome`] is a DPDA generated from
//! the standard genetic code whose final stack holds the translated proteins.
//!
//! ## Quick Start
//!
//! ```rust
//! use ribos_core::{RibosAnalyzer, config::RibosConfig};
//!
//! let analyzer = RibosAnalyzer::new(RibosConfig::default())?;
//! let results = analyzer.analyze_sequence("TACAAAATT", Some("demo".to_string()))?;
//!
//! assert_eq!(results.rna, "AUGUUUUAA");
//! assert_eq!(results.protein_string(), "Met-Phe");
//! # Ok::<(), ribos_core::types::RibosError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`automaton`]: transition tables, the stack and the simulator
//! - [`transducer`]: Mealy machines and DNA-to-RNA transcription
//! - [`codon`]: the standard genetic code
//! - [`ribosome`]: the translating pushdown automaton
//! - [`sequence`]: symbols, recognizers, generation, cleaning and file I/O
//! - [`engine`]: the complete DNA-to-protein pipeline
//! - [`config`]: configuration options
//! - [`results`]: per-record results
//! - [`output`]: plain and FASTA writers
//! - [`types`]: error types
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, RibosError>`](types::RibosError)
//! or a narrower error that converts into it:
//!
//! - Invalid automaton definitions ([`types::DefinitionError`])
//! - Automata that cannot finish in a final state ([`types::StuckState`])
//! - Invalid sequences and file names
//! - I/O and parse errors

pub mod automaton;
pub mod codon;
pub mod config;
pub mod constants;
pub mod engine;
pub mod output;
pub mod results;
pub mod ribosome;
pub mod sequence;
pub mod transducer;
pub mod types;

pub use engine::RibosAnalyzer;
pub use types::RibosError;
