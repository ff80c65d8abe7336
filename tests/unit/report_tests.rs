//! Report data built from enriched sessions.

use chrono::NaiveDate;
use optionchain_rs::analytics::{AnalyticsEngine, EngineConfig, OptionRight, black_scholes};
use optionchain_rs::chain::{ChainRecord, ChainSnapshot, enrich_snapshot};
use optionchain_rs::report::{
    OpenInterestProfile, SkewCurve, StrategyLeg, expiry_payoff, open_interest_shift,
    theoretical_value, underlying_grid,
};

fn session() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn expiry() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
}

fn record(right: OptionRight, strike: f64, last_price: f64, oi: u64) -> ChainRecord {
    ChainRecord {
        session_date: session(),
        expiration_date: expiry(),
        strike,
        right,
        last_price,
        open_price: None,
        high_price: None,
        low_price: None,
        volume: 10,
        open_interest: oi,
    }
}

#[test]
fn skew_curve_from_an_enriched_session() {
    let time = 184.0 / 365.0;
    let (spot, rate) = (100.0, 0.02);
    // Seed a put skew: higher vol below spot.
    let seeded = [(85.0, 0.34), (95.0, 0.28), (100.0, 0.25), (110.0, 0.24)];

    let records: Vec<ChainRecord> = seeded
        .iter()
        .map(|&(strike, vol)| {
            let price =
                black_scholes::price(OptionRight::Put, spot, strike, time, rate, vol).unwrap();
            record(OptionRight::Put, strike, price, 100)
        })
        .collect();
    let snapshot = ChainSnapshot::new("ITX", session(), records);

    let engine = AnalyticsEngine::new(EngineConfig::default());
    let enriched = enrich_snapshot(&engine, &snapshot, spot, rate);
    let curve = SkewCurve::for_expiry(&enriched, expiry(), OptionRight::Put);

    assert_eq!(curve.points.len(), 4);
    for (point, &(strike, vol)) in curve.points.iter().zip(&seeded) {
        assert_eq!(point.strike, strike);
        assert!((point.iv - vol).abs() < 1e-4);
    }
    // The seeded smile slopes down toward and past the money.
    assert!(curve.points[0].iv > curve.points[3].iv);
    let atm = curve.vol_nearest(spot).unwrap();
    assert!((atm - 0.25).abs() < 1e-4);
}

#[test]
fn open_interest_profile_and_shift() {
    let day1 = ChainSnapshot::new(
        "BBVA",
        session(),
        vec![
            record(OptionRight::Call, 95.0, 1.0, 4000),
            record(OptionRight::Call, 100.0, 1.0, 9000),
            record(OptionRight::Put, 95.0, 1.0, 7000),
            record(OptionRight::Call, 120.0, 1.0, 300), // below 10% of max
        ],
    );
    let profile = OpenInterestProfile::from_snapshot(&day1, expiry(), 0.1);
    assert_eq!(profile.levels.len(), 3);
    assert_eq!(profile.active_range(), Some((95.0, 100.0)));

    let day2 = ChainSnapshot::new(
        "BBVA",
        session().succ_opt().unwrap(),
        vec![
            record(OptionRight::Call, 95.0, 1.0, 3500),
            record(OptionRight::Call, 100.0, 1.0, 9800),
            record(OptionRight::Put, 95.0, 1.0, 7000),
        ],
    );

    let shift = open_interest_shift(&day1, &day2, expiry());
    let at = |strike: f64| shift.iter().find(|c| c.strike == strike).unwrap();
    assert_eq!(at(95.0).call_delta, -500);
    assert_eq!(at(95.0).put_delta, 0);
    assert_eq!(at(100.0).call_delta, 800);
    assert_eq!(at(120.0).call_delta, -300); // position closed out
}

#[test]
fn straddle_risk_graph() {
    let call_premium = 4.0;
    let put_premium = 3.5;
    let legs = vec![
        StrategyLeg {
            right: OptionRight::Call,
            strike: 100.0,
            premium: call_premium,
            quantity: 1.0,
            iv: 0.25,
        },
        StrategyLeg {
            right: OptionRight::Put,
            strike: 100.0,
            premium: put_premium,
            quantity: 1.0,
            iv: 0.28,
        },
    ];

    let grid = underlying_grid(&legs, 97.0, 201);
    assert_eq!(grid.len(), 201);

    let payoff = expiry_payoff(&legs, &grid);
    // The V bottoms out at the shared strike, losing both premiums.
    let worst = payoff
        .iter()
        .min_by(|a, b| a.value.total_cmp(&b.value))
        .unwrap();
    assert!((worst.value + call_premium + put_premium).abs() < 0.2);

    // Before expiry the graph sits above the expiration V everywhere.
    let now = theoretical_value(&legs, &grid, 0.25, 0.01).unwrap();
    for (n, e) in now.iter().zip(&payoff) {
        assert!(n.value >= e.value - 1e-9);
    }
}
