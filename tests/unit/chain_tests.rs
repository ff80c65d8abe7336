//! Chain layer end to end: feed-shaped JSON in, enriched analytics out.

use chrono::NaiveDate;
use optionchain_rs::analytics::{AnalyticsEngine, EngineConfig, OptionRight, black_scholes};
use optionchain_rs::chain::{
    ChainRecord, ChainSnapshot, ChainSnapshotPackage, enrich_snapshot,
};

/// JSON in the exact shape the exchange converters emit.
const FEED_JSON: &str = r#"[
    {"session_date": "01/03/2024", "expiration_date": "21/06/2024", "strike": 4800.0,
     "right": "C", "last_price": 152.0, "volume": 412, "open_interest": 10321},
    {"session_date": "01/03/2024", "expiration_date": "21/06/2024", "strike": 4800.0,
     "right": "P", "last_price": 98.5, "volume": 230, "open_interest": 15002},
    {"session_date": "01/03/2024", "expiration_date": "21/06/2024", "strike": 5200.0,
     "right": "C", "last_price": 0.0, "volume": 0, "open_interest": 55}
]"#;

#[test]
fn feed_json_parses_into_records() {
    let records: Vec<ChainRecord> = serde_json::from_str(FEED_JSON).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].right, OptionRight::Call);
    assert_eq!(records[1].right, OptionRight::Put);
    assert_eq!(
        records[0].session_date,
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    );
    assert_eq!(
        records[0].expiration_date,
        NaiveDate::from_ymd_opt(2024, 6, 21).unwrap()
    );
    assert_eq!(records[0].open_price, None);
}

#[test]
fn snapshot_package_survives_persistence() {
    let records: Vec<ChainRecord> = serde_json::from_str(FEED_JSON).unwrap();
    let snapshot = ChainSnapshot::new(
        "ESTX50",
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        records,
    );

    let package = ChainSnapshotPackage::new(snapshot.clone()).unwrap();
    let json = package.to_json().unwrap();
    let restored = ChainSnapshotPackage::from_json(&json)
        .unwrap()
        .into_snapshot()
        .unwrap();

    assert_eq!(restored, snapshot);
    assert_eq!(restored.total_call_open_interest(), 10376);
    assert_eq!(restored.total_put_open_interest(), 15002);
}

#[test]
fn enrichment_round_trips_a_synthetic_chain() {
    // Build a chain whose last prices come from the pricer itself, so the
    // enriched IVs must recover the seeded vols.
    let session = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let expiry = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(); // 184 days out
    let time = 184.0 / 365.0;
    let (spot, rate) = (5000.0, 0.03);

    let seeded = [(4600.0, 0.28), (4800.0, 0.25), (5000.0, 0.22), (5200.0, 0.21)];
    let records: Vec<ChainRecord> = seeded
        .iter()
        .map(|&(strike, vol)| ChainRecord {
            session_date: session,
            expiration_date: expiry,
            strike,
            right: OptionRight::Call,
            last_price: black_scholes::price(OptionRight::Call, spot, strike, time, rate, vol)
                .unwrap(),
            open_price: None,
            high_price: None,
            low_price: None,
            volume: 100,
            open_interest: 1000,
        })
        .collect();

    let snapshot = ChainSnapshot::new("ESTX50", session, records);
    let engine = AnalyticsEngine::new(EngineConfig::default());
    let enriched = enrich_snapshot(&engine, &snapshot, spot, rate);

    assert_eq!(enriched.len(), 4);
    for (enriched, &(strike, vol)) in enriched.iter().zip(&seeded) {
        assert_eq!(enriched.record.strike, strike);
        let iv = enriched.iv.expect("solve should succeed");
        assert!((iv - vol).abs() < 1e-5, "strike {strike}: got {iv}");
        assert!(enriched.delta.unwrap() > 0.0 && enriched.delta.unwrap() < 1.0);
        assert!(enriched.vega.unwrap() > 0.0);
    }
}

#[test]
fn enriched_json_keeps_original_fields_next_to_analytics() {
    let session = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let expiry = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    let record = ChainRecord {
        session_date: session,
        expiration_date: expiry,
        strike: 100.0,
        right: OptionRight::Put,
        last_price: 0.0, // untraded: analytics must come out null
        open_price: None,
        high_price: None,
        low_price: None,
        volume: 0,
        open_interest: 12,
    };
    let snapshot = ChainSnapshot::new("SAN", session, vec![record]);

    let engine = AnalyticsEngine::new(EngineConfig::default());
    let enriched = enrich_snapshot(&engine, &snapshot, 100.0, 0.02);
    let json = serde_json::to_string(&enriched).unwrap();

    assert!(json.contains("\"expiration_date\":\"21/06/2024\""));
    assert!(json.contains("\"right\":\"P\""));
    assert!(json.contains("\"iv\":null"));
    assert!(json.contains("\"theta\":null"));
}
