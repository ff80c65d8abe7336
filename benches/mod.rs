//! Criterion benchmarks for the pricing and solving hot paths.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use optionchain_rs::analytics::{
    AnalyticsEngine, EngineConfig, OptionQuote, OptionRight, black_scholes, implied_volatility,
};

fn bench_pricer(c: &mut Criterion) {
    c.bench_function("black_scholes_price_atm", |b| {
        b.iter(|| {
            black_scholes::price(
                black_box(OptionRight::Call),
                black_box(100.0),
                black_box(100.0),
                black_box(0.5),
                black_box(0.02),
                black_box(0.25),
            )
        })
    });
}

fn bench_solver(c: &mut Criterion) {
    let config = EngineConfig::default();
    let price = black_scholes::price(OptionRight::Call, 100.0, 100.0, 0.5, 0.02, 0.25).unwrap();
    let atm = OptionQuote::new(OptionRight::Call, 100.0, 100.0, 0.5, 0.02, price);

    c.bench_function("implied_vol_atm", |b| {
        b.iter(|| implied_volatility(black_box(&atm), &config))
    });

    let price = black_scholes::price(OptionRight::Call, 100.0, 130.0, 0.1, 0.02, 0.4).unwrap();
    let otm = OptionQuote::new(OptionRight::Call, 100.0, 130.0, 0.1, 0.02, price);

    c.bench_function("implied_vol_otm_short_dated", |b| {
        b.iter(|| implied_volatility(black_box(&otm), &config))
    });
}

fn bench_batch(c: &mut Criterion) {
    let engine = AnalyticsEngine::new(EngineConfig::default());
    let quotes: Vec<OptionQuote> = (0..1000)
        .map(|i| {
            let strike = 70.0 + 0.06 * f64::from(i);
            let price =
                black_scholes::price(OptionRight::Call, 100.0, strike, 0.5, 0.02, 0.3).unwrap();
            OptionQuote::new(OptionRight::Call, 100.0, strike, 0.5, 0.02, price)
        })
        .collect();

    c.bench_function("analyze_batch_1000", |b| {
        b.iter(|| engine.analyze_batch(black_box(&quotes)))
    });
}

criterion_group!(benches, bench_pricer, bench_solver, bench_batch);
criterion_main!(benches);
