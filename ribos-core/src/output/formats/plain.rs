use std::io::Write;

use crate::{RibosError, results::TranslationResults};

fn write_line<W: Write>(writer: &mut W, text: &str) -> Result<(), RibosError> {
    if !text.is_empty() {
        writeln!(writer, "{text}")?;
    }
    Ok(())
}

/// Write the RNA as a single bare line
pub fn write_plain_rna<W: Write>(
    writer: &mut W,
    results: &TranslationResults,
) -> Result<(), RibosError> {
    write_line(writer, &results.rna)
}

/// Write all proteins on one line, separated by spaces
pub fn write_plain_proteins<W: Write>(
    writer: &mut W,
    results: &TranslationResults,
) -> Result<(), RibosError> {
    write_line(writer, &results.protein_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::SequenceInfo;

    fn create_test_results(proteins: &[&str]) -> TranslationResults {
        TranslationResults {
            dna: "TACAAAATT".to_string(),
            rna: "AUGUUUUAA".to_string(),
            proteins: proteins.iter().map(|p| p.to_string()).collect(),
            sequence_info: SequenceInfo {
                header: "test_seq".to_string(),
                description: None,
                length: 9,
                num_proteins: proteins.len(),
            },
        }
    }

    #[test]
    fn test_write_plain_rna() {
        let mut buffer = Vec::new();
        write_plain_rna(&mut buffer, &create_test_results(&["Met-Phe"])).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "AUGUUUUAA\n");
    }

    #[test]
    fn test_write_plain_proteins() {
        let mut buffer = Vec::new();
        let results = create_test_results(&["Met-Phe", "Met-Leu"]);
        write_plain_proteins(&mut buffer, &results).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Met-Phe Met-Leu\n");
    }

    #[test]
    fn test_write_plain_no_proteins() {
        let mut buffer = Vec::new();
        write_plain_proteins(&mut buffer, &create_test_results(&[])).unwrap();
        assert!(buffer.is_empty());
    }
}
