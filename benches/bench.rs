use criterion::{criterion_group, criterion_main};

mod verify_benchmark {
    use criterion::Criterion;
    use std::hint::black_box;
    use tax_id::{verify, Country, Validator};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let candidates = vec![
            "86095742719",
            "86095742710",
            "12345678901",
            "O1234567890",
            "86 095 742 719",
        ];

        c.bench_function("verify", |b| {
            b.iter(|| {
                for candidate in &candidates {
                    black_box(verify(black_box(candidate)));
                }
            })
        });

        c.bench_function("verify_country", |b| {
            b.iter(|| {
                for candidate in &candidates {
                    black_box(Country::Germany.is_valid_match(black_box(candidate)));
                }
            })
        });
    }
}

mod format_benchmark {
    use criterion::Criterion;
    use std::hint::black_box;
    use tax_id::{to_human_form, to_machine_form, Country};

    pub fn criterion_benchmark(c: &mut Criterion) {
        c.bench_function("to_machine_form", |b| {
            b.iter(|| black_box(to_machine_form(black_box("DE 860 957 427 19"))))
        });

        c.bench_function("to_human_form", |b| {
            b.iter(|| {
                black_box(to_human_form(
                    black_box("86095742719"),
                    Some(Country::Germany),
                ))
            })
        });
    }
}

criterion_group!(
    benches,
    verify_benchmark::criterion_benchmark,
    format_benchmark::criterion_benchmark
);
criterion_main!(benches);
