use criterion::{black_box, criterion_group, criterion_main, Criterion};
use penner_easing::Easing;

fn bench_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("curves");
    for easing in Easing::all() {
        group.bench_function(easing.id(), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for i in 0..=64 {
                    acc += easing.apply(black_box(i as f64 / 64.0));
                }
                acc
            })
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_in_out_elastic", |b| {
        b.iter(|| black_box("inOutElastic").parse::<Easing>())
    });
}

criterion_group!(benches, bench_curves, bench_parse);
criterion_main!(benches);
