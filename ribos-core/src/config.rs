use crate::constants::DEFAULT_PREVIEW_LENGTH;

/// Output format options for transcription and translation results.
///
/// # Formats
///
/// - **Plain**: the bare sequence, as the next tool in a pipeline expects it
/// - **FASTA**: a `>` header line naming the record, then the sequence
///
/// # Examples
///
/// ```rust
/// use ribos_core::config::{OutputFormat, RibosConfig};
///
/// let config = RibosConfig {
///     output_format: OutputFormat::Fasta,
///     ..Default::default()
/// };
/// assert_eq!(config.output_format.extension(), "fasta");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Sequence text only.
    ///
    /// RNA files hold the RNA string; protein files hold the proteins joined
    /// by single spaces, exactly as printed in the summary.
    Plain,

    /// FASTA records.
    ///
    /// One record for the RNA, and one record per protein numbered from 1.
    Fasta,
}

impl OutputFormat {
    /// File extension used for result files in this format.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Plain => "txt",
            Self::Fasta => "fasta",
        }
    }
}

/// Configuration settings for a Ribos run.
///
/// # Examples
///
/// ```rust
/// use ribos_core::config::RibosConfig;
///
/// let config = RibosConfig {
///     num_threads: Some(4),
///     quiet: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct RibosConfig {
    /// Suppress informational output during processing.
    ///
    /// When `true`, the summary blocks are not printed and only warnings and
    /// errors are logged.
    ///
    /// **Default**: `false`
    pub quiet: bool,

    /// Format of generated result files.
    ///
    /// **Default**: [`OutputFormat::Plain`]
    pub output_format: OutputFormat,

    /// Number of threads used to translate batches of records.
    ///
    /// When set, configures the global Rayon thread pool the first time an
    /// analyzer is built. Set to `None` for automatic detection.
    ///
    /// **Default**: `None` (use all available cores)
    pub num_threads: Option<usize>,

    /// Characters of each sequence shown in a summary before it is cut off.
    ///
    /// **Default**: 60
    pub preview_length: usize,
}

impl Default for RibosConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            output_format: OutputFormat::Plain,
            num_threads: None,
            preview_length: DEFAULT_PREVIEW_LENGTH,
        }
    }
}
