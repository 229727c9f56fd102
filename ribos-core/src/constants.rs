// =============================================================================
// Nucleotides and codons
// =============================================================================

/// DNA bases in the order used by the generators
pub const DNA_BASES: [u8; 4] = *b"ACGT";

/// RNA bases
pub const RNA_BASES: [u8; 4] = *b"ACGU";

/// Length of a codon in bases
pub const CODON_LENGTH: usize = 3;

/// Template-strand codon that transcribes to the AUG start codon
pub const TEMPLATE_START_CODON: &str = "TAC";

/// Template-strand codons that transcribe to the UAG, UGA and UAA stop codons
pub const TEMPLATE_STOP_CODONS: [&str; 3] = ["ATC", "ACT", "ATT"];

/// Minimum number of codons in a pseudo-random gene (start + stop)
pub const MIN_GENE_CODONS: usize = 2;

// =============================================================================
// Defaults
// =============================================================================

/// Codons generated by `--pseudorandom` when no count is given
pub const DEFAULT_PSEUDORANDOM_CODONS: usize = 1000;

/// Bases generated by `--random` when no count is given
pub const DEFAULT_RANDOM_BASES: usize = 10_000;

/// Characters of each sequence shown in a summary
pub const DEFAULT_PREVIEW_LENGTH: usize = 60;

/// Width of summary banners
pub const SUMMARY_LINE_WIDTH: usize = 100;

/// Directory generated DNA is written to
pub const DEFAULT_INPUT_DIR: &str = "data/input";

/// Directory transcription and translation results are written to
pub const DEFAULT_OUTPUT_DIR: &str = "data/output";

/// Characters that may not appear in a file name
pub const FORBIDDEN_FILE_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Bases or residues per sequence line in FASTA output
pub const FASTA_LINE_WIDTH: usize = 60;
