/// Everything produced for one DNA record.
///
/// # Examples
///
/// ```rust
/// use ribos_core::RibosAnalyzer;
/// use ribos_core::config::RibosConfig;
///
/// let analyzer = RibosAnalyzer::new(RibosConfig::default())?;
/// let results = analyzer.analyze_sequence("TACAAAATT", Some("demo".to_string()))?;
///
/// assert_eq!(results.rna, "AUGUUUUAA");
/// assert_eq!(results.protein_string(), "Met-Phe");
/// assert_eq!(results.sequence_info.num_proteins, 1);
/// # Ok::<(), ribos_core::types::RibosError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResults {
    /// The cleaned DNA template strand
    pub dna: String,

    /// The transcribed RNA, one base per DNA base
    pub rna: String,

    /// Each complete protein as residues joined by `-`, in reading order.
    ///
    /// Empty when no start codon is followed by an in-frame stop.
    pub proteins: Vec<String>,

    /// Information about the analyzed sequence.
    pub sequence_info: SequenceInfo,
}

impl TranslationResults {
    /// Proteins separated by single spaces; empty when none were found.
    pub fn protein_string(&self) -> String {
        self.proteins.join(" ")
    }
}

/// Information about a processed sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceInfo {
    /// Record name, used for output file names.
    ///
    /// The FASTA identifier, or the file stem for plain text input.
    pub header: String,

    /// Description from the FASTA header line, if any.
    pub description: Option<String>,

    /// Length of the cleaned DNA in bases.
    pub length: usize,

    /// Number of complete proteins found.
    pub num_proteins: usize,
}
