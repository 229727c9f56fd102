use rand::Rng;

use crate::constants::{
    CODON_LENGTH, DNA_BASES, MIN_GENE_CODONS, TEMPLATE_START_CODON, TEMPLATE_STOP_CODONS,
};
use crate::types::RibosError;

/// Generates `length` bases drawn uniformly from `ACGT`.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use ribos_core::sequence::random_dna;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let dna = random_dna(12, &mut rng);
/// assert_eq!(dna.len(), 12);
/// ```
pub fn random_dna<R: Rng + ?Sized>(length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| char::from(DNA_BASES[rng.gen_range(0..DNA_BASES.len())]))
        .collect()
}

/// Every template-strand codon that does not transcribe to a stop codon (61 of them).
pub fn template_sense_codons() -> Vec<String> {
    let mut codons = Vec::with_capacity(61);
    for first in DNA_BASES {
        for second in DNA_BASES {
            for third in DNA_BASES {
                let codon: String = [first, second, third].iter().map(|&b| char::from(b)).collect();
                if !TEMPLATE_STOP_CODONS.contains(&codon.as_str()) {
                    codons.push(codon);
                }
            }
        }
    }
    codons
}

/// Generates a DNA template strand shaped like a single gene.
///
/// The strand is `codons` codons long: `TAC` (transcribing to the `AUG`
/// start), then `codons - 2` codons that never transcribe to a stop, then one
/// of `ATC`, `ACT` or `ATT` (transcribing to a stop). Translated, it always
/// yields exactly one protein of `codons - 1` residues.
///
/// # Errors
///
/// Returns [`RibosError::InvalidSequence`] if `codons` is less than 2.
pub fn pseudorandom_gene<R: Rng + ?Sized>(codons: usize, rng: &mut R) -> Result<String, RibosError> {
    if codons < MIN_GENE_CODONS {
        return Err(RibosError::InvalidSequence(format!(
            "a gene needs at least {MIN_GENE_CODONS} codons (start and stop), got {codons}"
        )));
    }

    let sense = template_sense_codons();
    let mut gene = String::with_capacity(codons * CODON_LENGTH);
    gene.push_str(TEMPLATE_START_CODON);
    for _ in 0..codons - MIN_GENE_CODONS {
        gene.push_str(&sense[rng.gen_range(0..sense.len())]);
    }
    gene.push_str(TEMPLATE_STOP_CODONS[rng.gen_range(0..TEMPLATE_STOP_CODONS.len())]);

    Ok(gene)
}
