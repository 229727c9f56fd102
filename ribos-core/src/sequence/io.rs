use std::fs;
use std::io;
use std::path::Path;

use bio::io::fasta;
use tracing::debug;

use crate::constants::FORBIDDEN_FILE_NAME_CHARS;
use crate::types::RibosError;

/// A named sequence: `(id, description, bases)`.
pub type FastaRecord = (String, Option<String>, Vec<u8>);

/// Whether `name` is usable as a file name on every common file system.
///
/// Blank names and names containing any of `<>:"/\|?*` are refused.
pub fn is_valid_file_name(name: &str) -> bool {
    !name.trim().is_empty() && !name.contains(FORBIDDEN_FILE_NAME_CHARS)
}

/// Turns a record name into something [`is_valid_file_name`] accepts.
///
/// Forbidden characters become `_`, so FASTA ids such as
/// `sp|P12345|GENE_HUMAN` keep their shape. A blank name becomes `unnamed`.
pub fn file_name_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| {
            if FORBIDDEN_FILE_NAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();
    if stem.is_empty() { "unnamed".to_string() } else { stem }
}

fn checked_file_name(path: &Path) -> Result<&str, RibosError> {
    let name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");
    if is_valid_file_name(name) {
        Ok(name)
    } else {
        Err(RibosError::InvalidFileName(name.to_string()))
    }
}

/// Reads a whole text file after checking its name.
///
/// # Errors
///
/// - [`RibosError::InvalidFileName`] if the file name is blank or contains
///   forbidden characters
/// - [`RibosError::IoError`] (`NotFound`) if no such file exists, or on any
///   other read failure
pub fn read_sequence_file<P: AsRef<Path>>(path: P) -> Result<String, RibosError> {
    let path = path.as_ref();
    checked_file_name(path)?;
    if !path.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("file not found: {}", path.display()),
        )
        .into());
    }
    Ok(fs::read_to_string(path)?)
}

/// Writes `contents` to a text file, replacing any previous contents.
///
/// The destination directory must already exist.
///
/// # Errors
///
/// - [`RibosError::InvalidFileName`] if the file name is blank or contains
///   forbidden characters
/// - [`RibosError::IoError`] (`NotFound`) if the parent directory does not exist
pub fn write_sequence_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), RibosError> {
    let path = path.as_ref();
    checked_file_name(path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("destination directory {} does not exist", parent.display()),
            )
            .into());
        }
    }
    fs::write(path, contents)?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote sequence file");
    Ok(())
}

/// Reads every record of a FASTA file using rust-bio.
///
/// # Errors
///
/// Returns [`RibosError::IoError`] if the file cannot be opened and
/// [`RibosError::ParseError`] on malformed FASTA.
pub fn read_fasta_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>, RibosError> {
    let file = fs::File::open(path)?;
    parse_fasta(fasta::Reader::new(file))
}

fn parse_fasta<R: io::Read>(
    reader: fasta::Reader<io::BufReader<R>>,
) -> Result<Vec<FastaRecord>, RibosError> {
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| RibosError::ParseError(e.to_string()))?;
        let id = record.id().to_string();
        let description = record.desc().map(String::from);
        let seq = record.seq().to_vec();
        sequences.push((id, description, seq));
    }

    Ok(sequences)
}

/// Reads a sequence file in either FASTA or plain text form.
///
/// A file whose first non-blank character is `>` is parsed as FASTA and may
/// hold many records. Anything else is taken as one raw sequence, named after
/// the file stem; cleaning is left to the caller.
///
/// # Errors
///
/// See [`read_sequence_file`] and [`read_fasta_sequences`].
///
/// # Examples
///
/// ```rust,no_run
/// use ribos_core::sequence::read_sequences;
///
/// for (name, _, bases) in read_sequences("data/input/gene.txt")? {
///     println!("{name}: {} bases", bases.len());
/// }
/// # Ok::<(), ribos_core::types::RibosError>(())
/// ```
pub fn read_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>, RibosError> {
    let path = path.as_ref();
    let contents = read_sequence_file(path)?;

    let trimmed = contents.trim_start();
    if trimmed.starts_with('>') {
        debug!(path = %path.display(), "reading as FASTA");
        return parse_fasta(fasta::Reader::new(trimmed.as_bytes()));
    }

    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| RibosError::InvalidFileName(path.display().to_string()))?;
    Ok(vec![(name.to_string(), None, contents.into_bytes())])
}
