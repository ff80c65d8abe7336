//! End-to-end engine behavior: scenarios, batches, budgets.

use std::time::Duration;

use optionchain_rs::analytics::{
    AnalyticsEngine, AnalyticsError, EngineConfig, OptionQuote, OptionRight, black_scholes,
};

fn engine() -> AnalyticsEngine {
    AnalyticsEngine::new(EngineConfig::default())
}

#[test]
fn textbook_call_scenario() {
    // S=100, K=100, t=1y, r=5%: a 10.4506 premium implies 20% vol.
    let quote = OptionQuote::new(OptionRight::Call, 100.0, 100.0, 1.0, 0.05, 10.4506);
    let analytics = engine().analyze(&quote).unwrap();

    assert!((analytics.sigma - 0.20).abs() < 1e-3);
    assert!((analytics.greeks.delta - 0.6368).abs() < 1e-3);
    assert!(analytics.greeks.vega > 0.0);
    assert!(analytics.greeks.gamma > 0.0);
    assert!(analytics.greeks.theta < 0.0);
}

#[test]
fn solver_iterations_stay_small_in_friendly_regimes() {
    let engine = engine();
    for strike in [90.0, 100.0, 110.0] {
        let price = black_scholes::price(OptionRight::Call, 100.0, strike, 0.5, 0.02, 0.3).unwrap();
        let quote = OptionQuote::new(OptionRight::Call, 100.0, strike, 0.5, 0.02, price);
        let analytics = engine.analyze(&quote).unwrap();
        assert!(
            analytics.iterations <= 10,
            "strike {strike} took {} iterations",
            analytics.iterations
        );
    }
}

#[test]
fn one_bad_quote_never_aborts_a_batch() {
    let fair = black_scholes::price(OptionRight::Put, 100.0, 100.0, 0.5, 0.02, 0.25).unwrap();
    let quotes = vec![
        OptionQuote::new(OptionRight::Put, 100.0, 100.0, 0.5, 0.02, fair),
        // Stale: quoted below discounted intrinsic.
        OptionQuote::new(OptionRight::Put, 80.0, 100.0, 0.5, 0.02, 2.0),
        // Expired.
        OptionQuote::new(OptionRight::Call, 100.0, 100.0, 0.0, 0.02, 1.0),
        // Negative premium.
        OptionQuote::new(OptionRight::Call, 100.0, 100.0, 0.5, 0.02, -1.0),
        OptionQuote::new(OptionRight::Put, 100.0, 100.0, 0.5, 0.02, fair),
    ];

    let results = engine().analyze_batch(&quotes);
    assert_eq!(results.len(), 5);
    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(AnalyticsError::BelowIntrinsic { .. })
    ));
    assert!(matches!(results[2], Err(AnalyticsError::InvalidInput { .. })));
    assert!(matches!(results[3], Err(AnalyticsError::InvalidInput { .. })));
    assert!(results[4].is_ok());

    // The two good quotes are identical and so are their solutions.
    let a = results[0].as_ref().unwrap();
    let b = results[4].as_ref().unwrap();
    assert_eq!(a.sigma.to_bits(), b.sigma.to_bits());
}

#[test]
fn exhausted_budget_marks_quotes_skipped() {
    let fair = black_scholes::price(OptionRight::Call, 100.0, 100.0, 0.5, 0.02, 0.25).unwrap();
    let quotes =
        vec![OptionQuote::new(OptionRight::Call, 100.0, 100.0, 0.5, 0.02, fair); 100];

    let results = engine().analyze_batch_with_budget(&quotes, Duration::ZERO);
    assert!(
        results
            .iter()
            .all(|r| matches!(r, Err(AnalyticsError::BudgetExceeded { .. })))
    );

    let results = engine().analyze_batch_with_budget(&quotes, Duration::from_secs(30));
    assert!(results.iter().all(Result::is_ok));
}

#[test]
fn tight_tolerance_still_converges_for_liquid_quotes() {
    let config = EngineConfig::default().with_tolerance(1e-12);
    let engine = AnalyticsEngine::new(config);

    let price = black_scholes::price(OptionRight::Call, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
    let quote = OptionQuote::new(OptionRight::Call, 100.0, 100.0, 1.0, 0.05, price);
    let analytics = engine.analyze(&quote).unwrap();
    assert!((analytics.sigma - 0.2).abs() < 1e-9);
}
