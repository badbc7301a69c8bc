use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nucleo_seq::{classify_gc_content, translate_mrna};

fn random_seq(len: usize, bases: [u8; 4]) -> String {
    let mut seq = Vec::with_capacity(len);
    let mut state: u64 = 42;
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.push(bases[((state >> 33) % 4) as usize]);
    }
    String::from_utf8(seq).unwrap()
}

/// AUG followed by sense codons only, so translation runs the full length.
fn open_reading_frame(codons: usize) -> String {
    let sense = ["GCU", "GGG", "UUU", "CAC", "AAA", "UCG"];
    let mut seq = String::from("AUG");
    for i in 0..codons {
        seq.push_str(sense[i % sense.len()]);
    }
    seq
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_gc_content");

    for len in [100, 10_000] {
        let seq = random_seq(len, *b"ACGT");
        group.bench_with_input(BenchmarkId::from_parameter(len), &seq, |b, seq| {
            b.iter(|| classify_gc_content(black_box(seq)))
        });
    }

    group.finish();
}

fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate_mrna");

    let orf = open_reading_frame(3_000);
    group.bench_function("orf_9kb", |b| b.iter(|| translate_mrna(black_box(&orf))));

    let random = random_seq(10_000, *b"ACGU");
    group.bench_function("random_10kb", |b| b.iter(|| translate_mrna(black_box(&random))));

    group.finish();
}

criterion_group!(benches, bench_classify, bench_translate);
criterion_main!(benches);
