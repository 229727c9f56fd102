use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ribos_core::RibosAnalyzer;
use ribos_core::config::RibosConfig;
use ribos_core::ribosome::Ribosome;
use ribos_core::sequence::{pseudorandom_gene, random_dna};
use ribos_core::transducer::{dna_to_rna, transcribe};

mod criterion_config;
use criterion_config::configure_criterion;

const LENGTHS: [usize; 3] = [1_000, 10_000, 100_000];

fn benchmark_ribosome(c: &mut Criterion) {
    let ribosome = Ribosome::new().unwrap();
    let transcriber = dna_to_rna().unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let mut group = c.benchmark_group("ribosome_translate");
    for length in LENGTHS {
        let random_rna = transcribe(&transcriber, &random_dna(length, &mut rng)).unwrap();
        let gene_rna =
            transcribe(&transcriber, &pseudorandom_gene(length / 3, &mut rng).unwrap()).unwrap();

        group.throughput(Throughput::Bytes(length as u64));
        group.bench_with_input(BenchmarkId::new("random", length), &random_rna, |b, rna| {
            b.iter(|| ribosome.translate(black_box(rna)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("single_gene", length), &gene_rna, |b, rna| {
            b.iter(|| ribosome.translate(black_box(rna)).unwrap());
        });
    }
    group.finish();
}

fn benchmark_pipeline(c: &mut Criterion) {
    let analyzer = RibosAnalyzer::new(RibosConfig::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(2);

    let mut group = c.benchmark_group("pipeline");
    for length in LENGTHS {
        let dna = random_dna(length, &mut rng);
        group.throughput(Throughput::Bytes(length as u64));
        group.bench_with_input(BenchmarkId::new("analyze_sequence", length), &dna, |b, dna| {
            b.iter(|| analyzer.analyze_sequence(black_box(dna), None).unwrap());
        });
    }

    let records: Vec<_> = (0..64)
        .map(|i| (format!("seq{i}"), None, random_dna(10_000, &mut rng).into_bytes()))
        .collect();
    group.throughput(Throughput::Bytes(64 * 10_000));
    group.bench_function("analyze_batch_64x10k", |b| {
        b.iter(|| analyzer.analyze_batch(black_box(records.clone())).unwrap());
    });
    group.finish();
}

criterion_group!(
    name = benches;
    config = configure_criterion();
    targets = benchmark_ribosome, benchmark_pipeline
);
criterion_main!(benches);
