use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use market_data::MovingAverageEngine;
use rust_decimal::Decimal;

fn bench_add_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("moving_average_add_price");

    // Update cost should stay flat as the window grows
    for window in [20usize, 200, 2_000, 20_000] {
        group.bench_with_input(BenchmarkId::from_parameter(window), &window, |b, &window| {
            let mut sma = MovingAverageEngine::new(window).unwrap();
            let mut tick: i64 = 4_500_000;
            b.iter(|| {
                tick = if tick > 4_600_000 { 4_400_000 } else { tick + 7 };
                sma.add_price(Decimal::new(tick, 2)).unwrap();
                black_box(sma.average())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add_price);
criterion_main!(benches);
