use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use timing_attack::{Comparator, ConstantTimeComparator, LeakyComparator};

const SECRET: &[u8] = b"s3cr3tnavneet";

fn bench_comparators(c: &mut Criterion) {
    // Zero delays expose the raw cost of the comparison logic itself.
    let leaky = LeakyComparator::new(Duration::ZERO, Duration::ZERO);
    let ct = ConstantTimeComparator::new();

    let mut group = c.benchmark_group("compare");
    for (label, guess) in [
        ("first_byte_wrong", b"x3cr3tnavneet"),
        ("last_byte_wrong", b"s3cr3tnavneex"),
        ("exact", b"s3cr3tnavneet"),
    ] {
        group.bench_function(format!("leaky/{}", label), |b| {
            b.iter(|| leaky.compare(black_box(guess), black_box(SECRET)))
        });
        group.bench_function(format!("constant_time/{}", label), |b| {
            b.iter(|| ct.compare(black_box(guess), black_box(SECRET)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_comparators);
criterion_main!(benches);
