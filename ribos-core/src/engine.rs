use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::RibosConfig;
use crate::constants::DNA_BASES;
use crate::results::{SequenceInfo, TranslationResults};
use crate::ribosome::Ribosome;
use crate::sequence::alphabet::{NucleotideRecognizer, dna_recognizer, tokenize};
use crate::sequence::{FastaRecord, clean_sequence, read_fasta_sequences, read_sequences};
use crate::transducer::{Transcriber, dna_to_rna, transcribe};
use crate::types::RibosError;

/// Header given to sequences analyzed without a name.
const DEFAULT_HEADER: &str = "Ribos_Seq_1";

/// The DNA-to-protein pipeline.
///
/// Holds the three machines the pipeline runs, each built and validated once:
///
/// 1. a strict DNA recognizer that rejects anything but `A`, `C`, `G`, `T`
/// 2. the DNA-to-RNA transcriber
/// 3. the ribosome, which translates RNA leniently
///
/// All analysis methods take `&self`, so one analyzer can serve any number of
/// records, including from several threads at once.
///
/// # Examples
///
/// ```rust
/// use ribos_core::{RibosAnalyzer, config::RibosConfig};
///
/// let analyzer = RibosAnalyzer::new(RibosConfig::default())?;
/// let results = analyzer.analyze_sequence("ggTAC AAA ATT TAC GAG ATC", None)?;
///
/// assert_eq!(results.dna, "GGTACAAAATTTACGAGATC");
/// assert_eq!(results.protein_string(), "Met-Phe Met-Leu");
/// # Ok::<(), ribos_core::types::RibosError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RibosAnalyzer {
    config: RibosConfig,
    recognizer: NucleotideRecognizer,
    transcriber: Transcriber,
    ribosome: Ribosome,
}

impl RibosAnalyzer {
    /// Creates an analyzer, building every machine it needs.
    ///
    /// When [`RibosConfig::num_threads`] is set, the global Rayon pool is
    /// configured here; this can only happen once per process.
    ///
    /// # Errors
    ///
    /// - [`RibosError::InvalidDefinition`] if one of the built-in machines is
    ///   inconsistent
    /// - [`RibosError::ThreadPoolError`] if the thread pool was already
    ///   configured or cannot be built
    pub fn new(config: RibosConfig) -> Result<Self, RibosError> {
        if let Some(num_threads) = config.num_threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build_global()
                .map_err(|e| {
                    RibosError::ThreadPoolError(format!("Failed to configure thread pool: {e}"))
                })?;
            debug!(num_threads, "configured thread pool");
        }

        Ok(Self {
            config,
            recognizer: dna_recognizer()?,
            transcriber: dna_to_rna()?,
            ribosome: Ribosome::new()?,
        })
    }

    pub const fn config(&self) -> &RibosConfig {
        &self.config
    }

    pub const fn ribosome(&self) -> &Ribosome {
        &self.ribosome
    }

    /// Analyzes every record of a FASTA file, in parallel.
    ///
    /// # Errors
    ///
    /// Returns [`RibosError`] if the file cannot be read, the FASTA format is
    /// invalid, or any record fails analysis.
    pub fn analyze_fasta_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<TranslationResults>, RibosError> {
        let records = read_fasta_sequences(path)?;
        self.analyze_batch(records)
    }

    /// Analyzes a sequence file in FASTA or plain text form.
    ///
    /// A plain text file is one record named after the file stem.
    ///
    /// # Errors
    ///
    /// See [`read_sequences`] and [`analyze_batch`](Self::analyze_batch).
    pub fn analyze_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<TranslationResults>, RibosError> {
        let path = path.as_ref();
        info!(path = %path.display(), "reading sequence file");
        let records = read_sequences(path)?;
        self.analyze_batch(records)
    }

    /// Analyzes many records in parallel against the shared machines.
    ///
    /// Results come back in input order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing record (in no particular order
    /// when several fail).
    pub fn analyze_batch(
        &self,
        records: Vec<FastaRecord>,
    ) -> Result<Vec<TranslationResults>, RibosError> {
        debug!(records = records.len(), "analyzing batch");
        records
            .into_par_iter()
            .map(|(header, description, sequence)| {
                self.analyze_sequence_bytes(&sequence, header, description)
            })
            .collect()
    }

    /// Analyzes a single sequence from a string.
    ///
    /// # Errors
    ///
    /// See [`analyze_sequence_bytes`](Self::analyze_sequence_bytes).
    pub fn analyze_sequence(
        &self,
        sequence: &str,
        header: Option<String>,
    ) -> Result<TranslationResults, RibosError> {
        let header = header.unwrap_or_else(|| DEFAULT_HEADER.to_string());
        self.analyze_sequence_bytes(sequence.as_bytes(), header, None)
    }

    /// Runs the whole pipeline on raw sequence bytes.
    ///
    /// The input is cleaned (non-letters dropped, letters uppercased), checked
    /// by the strict DNA recognizer, transcribed to RNA and translated.
    ///
    /// # Errors
    ///
    /// Returns [`RibosError::InvalidSequence`] if the cleaned sequence holds
    /// anything other than `A`, `C`, `G`, `T`.
    pub fn analyze_sequence_bytes(
        &self,
        sequence: &[u8],
        header: String,
        description: Option<String>,
    ) -> Result<TranslationResults, RibosError> {
        info!(sequence = %header, "validating and cleaning DNA");
        let dna = clean_sequence(&String::from_utf8_lossy(sequence));
        if !self.recognizer.validate(&tokenize(dna.as_bytes()))? {
            return Err(invalid_dna(&header, &dna));
        }

        info!(sequence = %header, bases = dna.len(), "transcribing DNA to RNA");
        let rna = transcribe(&self.transcriber, &dna)?;

        info!(sequence = %header, "translating RNA to protein");
        let proteins = self.ribosome.proteins(&rna)?;
        if proteins.is_empty() {
            warn!(
                sequence = %header,
                "no gene structure (AUG...stop) found in the RNA; no protein produced"
            );
        } else {
            info!(sequence = %header, proteins = proteins.len(), "translation complete");
        }

        Ok(TranslationResults {
            sequence_info: SequenceInfo {
                header,
                description,
                length: dna.len(),
                num_proteins: proteins.len(),
            },
            dna,
            rna,
            proteins,
        })
    }
}

fn invalid_dna(header: &str, dna: &str) -> RibosError {
    let offending = dna
        .char_indices()
        .find(|&(_, c)| !u8::try_from(c).is_ok_and(|b| DNA_BASES.contains(&b)));
    let detail = match offending {
        Some((position, base)) => format!(" (found '{base}' at position {position})"),
        None => String::new(),
    };
    RibosError::InvalidSequence(format!(
        "{header}: DNA contains invalid bases{detail}; use only A, T, C and G"
    ))
}
