use std::io::Write;

use crate::{RibosError, constants::FASTA_LINE_WIDTH, results::TranslationResults};

fn write_record<W: Write>(writer: &mut W, header: &str, sequence: &str) -> Result<(), RibosError> {
    writeln!(writer, ">{header}")?;
    // Sequences are ASCII, so byte chunks never split a character.
    for line in sequence.as_bytes().chunks(FASTA_LINE_WIDTH) {
        writer.write_all(line)?;
        writeln!(writer)?;
    }
    Ok(())
}

fn record_header(results: &TranslationResults, suffix: &str) -> String {
    let info = &results.sequence_info;
    match &info.description {
        Some(description) => format!("{}_{suffix} {description}", info.header),
        None => format!("{}_{suffix}", info.header),
    }
}

/// Write the RNA as one FASTA record named `<header>_rna`
pub fn write_fasta_rna<W: Write>(
    writer: &mut W,
    results: &TranslationResults,
) -> Result<(), RibosError> {
    write_record(writer, &record_header(results, "rna"), &results.rna)
}

/// Write each protein as its own record, `<header>_protein_1`, `<header>_protein_2`, ...
pub fn write_fasta_proteins<W: Write>(
    writer: &mut W,
    results: &TranslationResults,
) -> Result<(), RibosError> {
    for (index, protein) in results.proteins.iter().enumerate() {
        let header = record_header(results, &format!("protein_{}", index + 1));
        write_record(writer, &header, protein)?;
    }
    Ok(())
}
