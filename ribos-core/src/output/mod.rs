//! Output formatting for transcription and translation results.
//!
//! This module provides writers for converting [`TranslationResults`] into
//! result files.
//!
//! ## Supported Formats
//!
//! - **Plain**: bare sequence text
//! - **FASTA**: one record for the RNA, one record per protein
//!
//! ## Examples
//!
//! ### Write to stdout
//!
//! ```rust
//! use ribos_core::{RibosAnalyzer, config::{RibosConfig, OutputFormat}};
//! use ribos_core::output::write_proteins;
//! use std::io::stdout;
//!
//! let analyzer = RibosAnalyzer::new(RibosConfig::default())?;
//! let results = analyzer.analyze_sequence("TACAAAATT", None)?;
//!
//! write_proteins(&mut stdout(), &results, OutputFormat::Fasta)?;
//! # Ok::<(), ribos_core::types::RibosError>(())
//! ```
//!
//! ### Write both result files into a directory
//!
//! ```rust,no_run
//! use ribos_core::{RibosAnalyzer, config::{RibosConfig, OutputFormat}};
//! use ribos_core::output::write_result_files;
//!
//! let analyzer = RibosAnalyzer::new(RibosConfig::default())?;
//! let results = analyzer.analyze_sequence("TACAAAATT", Some("demo".to_string()))?;
//!
//! // data/output/demo_rna.txt and data/output/demo_protein.txt
//! let files = write_result_files(&results, "data/output", OutputFormat::Plain)?;
//! println!("{}", files.protein.display());
//! # Ok::<(), ribos_core::types::RibosError>(())
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::sequence::{file_name_stem, write_sequence_file};
use crate::{RibosError, config::OutputFormat, results::TranslationResults};

mod formats {
    pub mod fasta;
    pub mod plain;
}

use formats::{
    fasta::{write_fasta_proteins, write_fasta_rna},
    plain::{write_plain_proteins, write_plain_rna},
};

/// Writes the transcribed RNA in the specified format.
///
/// # Errors
///
/// Returns [`RibosError::IoError`] if writing fails.
pub fn write_rna<W: Write>(
    writer: &mut W,
    results: &TranslationResults,
    format: OutputFormat,
) -> Result<(), RibosError> {
    match format {
        OutputFormat::Plain => write_plain_rna(writer, results),
        OutputFormat::Fasta => write_fasta_rna(writer, results),
    }
}

/// Writes the translated proteins in the specified format.
///
/// # Errors
///
/// Returns [`RibosError::IoError`] if writing fails.
pub fn write_proteins<W: Write>(
    writer: &mut W,
    results: &TranslationResults,
    format: OutputFormat,
) -> Result<(), RibosError> {
    match format {
        OutputFormat::Plain => write_plain_proteins(writer, results),
        OutputFormat::Fasta => write_fasta_proteins(writer, results),
    }
}

/// Paths of the two files written for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFiles {
    pub rna: PathBuf,
    pub protein: PathBuf,
}

/// Writes `<header>_rna.<ext>` and `<header>_protein.<ext>` into `directory`.
///
/// Characters that cannot appear in a file name are replaced in the header
/// (see [`file_name_stem`]); the records themselves keep the original header.
///
/// # Errors
///
/// Returns [`RibosError::IoError`] if `directory` does not exist or a write fails.
pub fn write_result_files<P: AsRef<Path>>(
    results: &TranslationResults,
    directory: P,
    format: OutputFormat,
) -> Result<ResultFiles, RibosError> {
    let directory = directory.as_ref();
    let header = file_name_stem(&results.sequence_info.header);
    let extension = format.extension();

    let files = ResultFiles {
        rna: directory.join(format!("{header}_rna.{extension}")),
        protein: directory.join(format!("{header}_protein.{extension}")),
    };

    let mut rna = Vec::new();
    write_rna(&mut rna, results, format)?;
    write_sequence_file(&files.rna, &String::from_utf8_lossy(&rna))?;

    let mut protein = Vec::new();
    write_proteins(&mut protein, results, format)?;
    write_sequence_file(&files.protein, &String::from_utf8_lossy(&protein))?;

    Ok(files)
}
