use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tc_engine::{compute_term_end, term_details_at, CalendarConfig};
use tc_time::{ymd, DateExt};

fn bench_term_details(c: &mut Criterion) {
    let epoch = ymd(2024, 9, 16).unwrap();
    let config = CalendarConfig::new(epoch, &[14, 10, 21])
        .unwrap()
        .with_public_holidays([ymd(2024, 10, 1).unwrap(), ymd(2024, 12, 25).unwrap()]);

    let mut group = c.benchmark_group("term_details_at");
    for years in [0i64, 5, 25] {
        let now = epoch.add_days(years * 365 + 40).unwrap();
        group.bench_function(format!("{years}y_after_epoch"), |b| {
            b.iter(|| term_details_at(black_box(&config), black_box(now)).unwrap())
        });
    }
    group.finish();

    c.bench_function("compute_term_end", |b| {
        b.iter(|| compute_term_end(black_box(epoch)).unwrap())
    });
}

criterion_group!(benches, bench_term_details);
criterion_main!(benches);
