//! Nucleotide sequences: symbols, generation, cleaning and file I/O.
//!
//! ## Modules
//!
//! - [`alphabet`]: the [`Token`](alphabet::Token) symbol type and the
//!   nucleotide recognizers built on the pushdown engine
//! - [`cleaning`]: normalisation of raw text into an uppercase sequence
//! - [`generation`]: random and gene-shaped DNA
//! - [`io`]: plain text and FASTA reading, plain text writing
//!
//! ## Examples
//!
//! ```rust
//! use ribos_core::sequence::{clean_sequence, dna_recognizer, tokenize};
//!
//! let dna = clean_sequence("tac gat\n12att");
//! assert_eq!(dna, "TACGATATT");
//!
//! let recognizer = dna_recognizer()?;
//! assert!(recognizer.validate(&tokenize(dna.as_bytes()))?);
//! # Ok::<(), ribos_core::types::RibosError>(())
//! ```

pub mod alphabet;
pub mod cleaning;
pub mod generation;
pub mod io;

pub use alphabet::{Token, dna_recognizer, rna_recognizer, tokenize};
pub use cleaning::*;
pub use generation::*;
pub use io::*;
