//! # Ribos CLI - DNA to Protein
//!
//! A command-line interface for transcribing DNA to RNA and translating RNA to
//! proteins with formal automata.
//!
//! ## Usage
//!
//! ```bash
//! # Generate a gene-shaped strand of 1000 codons and translate it
//! ribos -p
//!
//! # Generate 500 random bases, reproducibly
//! ribos -a 500 --seed 42
//!
//! # Translate a file from data/input (plain text or FASTA)
//! ribos -l my_dna
//!
//! # FASTA output to a custom directory
//! ribos -l genes.fasta -f fasta --output-dir results
//! ```
//!
//! ## Options
//!
//! - `-p, --pseudorandom [N_CODONS]`: Generate a gene-shaped DNA strand (default: 1000 codons)
//! - `-a, --random [N_BASES]`: Generate random DNA (default: 10000 bases)
//! - `-l, --read-file <FILE>`: Read DNA from a file, falling back to `<input-dir>/<FILE stem>.txt`
//! - `--input-dir <DIR>`: Where generated DNA is saved (default: data/input)
//! - `--output-dir <DIR>`: Where results are saved (default: data/output)
//! - `-f, --format <FORMAT>`: Result format: plain or fasta (default: plain)
//! - `-s, --seed <SEED>`: Seed for the DNA generators
//! - `-j, --threads <N>`: Threads used to translate multi-record files
//! - `-q, --quiet`: Only log warnings and errors, no summaries
//! - `-v, --verbose`: Log debug output
//!
//! Several actions may be given at once; they run in the order `-p`, `-a`, `-l`.

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ribos_core::config::{OutputFormat, RibosConfig};
use ribos_core::constants::{
    DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_PSEUDORANDOM_CODONS, DEFAULT_RANDOM_BASES,
    SUMMARY_LINE_WIDTH,
};
use ribos_core::output::write_result_files;
use ribos_core::results::TranslationResults;
use ribos_core::sequence::{preview, pseudorandom_gene, random_dna, write_sequence_file};
use ribos_core::{RibosAnalyzer, RibosError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

fn build_cli() -> Command {
    Command::new("ribos")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Genetic translator: converts DNA into proteins using automata theory")
        .arg(
            Arg::new("pseudorandom")
                .short('p')
                .long("pseudorandom")
                .value_name("N_CODONS")
                .help(format!(
                    "Generate gene-shaped DNA with N_CODONS codons (default: {DEFAULT_PSEUDORANDOM_CODONS})"
                ))
                .num_args(0..=1)
                .default_missing_value("1000")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("random")
                .short('a')
                .long("random")
                .value_name("N_BASES")
                .help(format!(
                    "Generate random DNA with N_BASES bases (default: {DEFAULT_RANDOM_BASES})"
                ))
                .num_args(0..=1)
                .default_missing_value("10000")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("read-file")
                .short('l')
                .long("read-file")
                .value_name("FILE")
                .help("Read DNA from a plain text or FASTA file (e.g. 'my_dna.txt' or 'data/input/my_dna.txt')"),
        )
        .arg(
            Arg::new("input-dir")
                .long("input-dir")
                .value_name("DIR")
                .help("Directory generated DNA is saved to and files are looked up in")
                .default_value(DEFAULT_INPUT_DIR),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .value_name("DIR")
                .help("Directory RNA and protein files are saved to")
                .default_value(DEFAULT_OUTPUT_DIR),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Result file format")
                .value_parser(["plain", "fasta"])
                .default_value("plain"),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .help("Seed for the DNA generators (default: random)")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("threads")
                .short('j')
                .long("threads")
                .value_name("N")
                .help("Threads used to translate multi-record files (default: all cores)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log warnings and errors; do not print summaries")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug output")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet"),
        )
}

/// Main entry point for the Ribos CLI application.
///
/// Parses command-line arguments, runs the requested actions and writes
/// results to the output directory.
fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    let quiet = matches.get_flag("quiet");
    let log_level = if quiet {
        "warn"
    } else if matches.get_flag("verbose") {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let has_action = ["pseudorandom", "random", "read-file"]
        .iter()
        .any(|id| matches.contains_id(id));
    if !has_action {
        if let Err(e) = build_cli().print_help() {
            error!("failed to print help: {e}");
        }
        error!("you must provide at least one action (-p, -a or -l)");
        return ExitCode::from(2);
    }

    info!("starting");
    let outcome = run(&matches, quiet);
    info!("finished");

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches, quiet: bool) -> Result<(), RibosError> {
    let config = RibosConfig {
        quiet,
        output_format: match matches.get_one::<String>("format").map(String::as_str) {
            Some("fasta") => OutputFormat::Fasta,
            _ => OutputFormat::Plain,
        },
        num_threads: matches.get_one::<usize>("threads").copied(),
        ..Default::default()
    };

    let input_dir = PathBuf::from(dir_arg(matches, "input-dir", DEFAULT_INPUT_DIR));
    let output_dir = PathBuf::from(dir_arg(matches, "output-dir", DEFAULT_OUTPUT_DIR));
    fs::create_dir_all(&input_dir)?;
    fs::create_dir_all(&output_dir)?;

    let analyzer = RibosAnalyzer::new(config)?;
    let mut rng = match matches.get_one::<u64>("seed") {
        Some(&seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if let Some(&codons) = matches.get_one::<usize>("pseudorandom") {
        banner(&analyzer, " MODE: PSEUDORANDOM DNA ");
        let dna = pseudorandom_gene(codons, &mut rng)?;
        save_generated(&input_dir, "pseudorandom", &dna)?;
        let results = analyzer.analyze_sequence(&dna, Some("pseudorandom".to_string()))?;
        report(&analyzer, &results, &output_dir)?;
    }

    if let Some(&bases) = matches.get_one::<usize>("random") {
        banner(&analyzer, " MODE: RANDOM DNA ");
        let dna = random_dna(bases, &mut rng);
        save_generated(&input_dir, "random", &dna)?;
        let results = analyzer.analyze_sequence(&dna, Some("random".to_string()))?;
        report(&analyzer, &results, &output_dir)?;
    }

    if let Some(file) = matches.get_one::<String>("read-file") {
        banner(&analyzer, " MODE: READ FILE ");
        let path = resolve_input(Path::new(file), &input_dir)?;
        info!(path = %path.display(), "reading file");
        for results in analyzer.analyze_file(&path)? {
            report(&analyzer, &results, &output_dir)?;
        }
    }

    Ok(())
}

fn dir_arg<'a>(matches: &'a ArgMatches, id: &str, default: &'a str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map_or(default, String::as_str)
}

/// Uses `file` if it exists, else `<input_dir>/<file stem>.txt`.
fn resolve_input(file: &Path, input_dir: &Path) -> Result<PathBuf, RibosError> {
    if file.exists() {
        return Ok(file.to_path_buf());
    }

    let fallback = input_dir.join(file.with_extension("txt").file_name().unwrap_or_default());
    if fallback.is_file() {
        return Ok(fallback);
    }

    Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!(
            "file not found; checked '{}' and '{}'",
            file.display(),
            fallback.display()
        ),
    )
    .into())
}

fn save_generated(input_dir: &Path, name: &str, dna: &str) -> Result<(), RibosError> {
    let path = input_dir.join(format!("{name}_dna.txt"));
    info!(path = %path.display(), "saving generated DNA");
    write_sequence_file(&path, dna)
}

fn banner(analyzer: &RibosAnalyzer, title: &str) {
    if !analyzer.config().quiet {
        println!("\n{title:#^width$}", width = SUMMARY_LINE_WIDTH);
    }
}

fn report(
    analyzer: &RibosAnalyzer,
    results: &TranslationResults,
    output_dir: &Path,
) -> Result<(), RibosError> {
    let config = analyzer.config();

    if !config.quiet {
        print_summary(results, config.preview_length);
    }

    let files = write_result_files(results, output_dir, config.output_format)?;
    info!(
        rna = %files.rna.display(),
        protein = %files.protein.display(),
        "saved result files"
    );
    Ok(())
}

fn print_summary(results: &TranslationResults, preview_length: usize) {
    let title = format!(" RESULTS: {} ", results.sequence_info.header);
    let proteins = if results.proteins.is_empty() {
        "N/A".to_string()
    } else {
        results
            .proteins
            .iter()
            .map(|protein| preview(protein, preview_length))
            .collect::<Vec<_>>()
            .join("\n    ")
    };

    println!("\n{title:=^width$}", width = SUMMARY_LINE_WIDTH);
    println!(
        "Processed DNA ({} bases):\n    {}",
        results.dna.len(),
        preview(&results.dna, preview_length)
    );
    println!(
        "Transcribed RNA ({} bases):\n    {}",
        results.rna.len(),
        preview(&results.rna, preview_length)
    );
    println!("Protein(s):\n    {proteins}");
    println!("{}", "=".repeat(SUMMARY_LINE_WIDTH));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_generator_defaults() {
        let matches = build_cli().try_get_matches_from(["ribos", "-p", "-a"]).unwrap();
        assert_eq!(
            matches.get_one::<usize>("pseudorandom"),
            Some(&DEFAULT_PSEUDORANDOM_CODONS)
        );
        assert_eq!(matches.get_one::<usize>("random"), Some(&DEFAULT_RANDOM_BASES));
    }

    #[test]
    fn test_generator_explicit_counts() {
        let matches = build_cli()
            .try_get_matches_from(["ribos", "-p", "12", "--random", "30"])
            .unwrap();
        assert_eq!(matches.get_one::<usize>("pseudorandom"), Some(&12));
        assert_eq!(matches.get_one::<usize>("random"), Some(&30));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(build_cli().try_get_matches_from(["ribos", "-q", "-v", "-p"]).is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(build_cli().try_get_matches_from(["ribos", "-p", "-f", "gbk"]).is_err());
    }

    #[test]
    fn test_resolve_input_falls_back_to_input_dir() {
        let dir = tempfile::tempdir().unwrap();
        let stored = dir.path().join("my_dna.txt");
        fs::write(&stored, "TACATT").unwrap();

        let resolved = resolve_input(Path::new("my_dna"), dir.path()).unwrap();
        assert_eq!(resolved, stored);

        let resolved = resolve_input(Path::new("elsewhere/my_dna.fasta"), dir.path()).unwrap();
        assert_eq!(resolved, stored);
    }

    #[test]
    fn test_resolve_input_missing() {
        let dir = tempfile::tempdir().unwrap();
        let error = resolve_input(Path::new("absent"), dir.path()).unwrap_err();
        assert!(error.to_string().contains("absent.txt"));
    }
}
