//! End-to-end integration test for the screening pipeline.
//!
//! This test demonstrates the complete flow:
//! 1. Build a universe and its reference table
//! 2. Feed per-symbol daily series (healthy, short, and broken ones)
//! 3. Run the engine and verify ranking, metrics and panel views

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use screener_core::domain::{DailyBar, DailySeries};
use screener_data::{ReferenceTable, SymbolTranslator, Universe};
use screener_engine::{ScreenerEngine, SkipReason};

/// Builds a series of `days` bars ending with the given last close/volume.
/// All earlier bars carry the base close and volume.
fn series(
    symbol: &str,
    days: usize,
    base_close: Decimal,
    base_volume: Decimal,
    last_close: Decimal,
    last_volume: Decimal,
) -> DailySeries {
    let start = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
    let bars: Vec<DailyBar> = (0..days)
        .map(|i| {
            let last = i == days - 1;
            DailyBar {
                date: start + chrono::Days::new(i as u64),
                open: None,
                high: None,
                low: None,
                close: if last { last_close } else { base_close },
                volume: Some(if last { last_volume } else { base_volume }),
            }
        })
        .collect();
    DailySeries::new(symbol, bars)
}

#[test]
fn test_full_pipeline_ranks_and_classifies() {
    let universe = Universe::new(vec![
        "SAP.DE".to_string(),
        "MC.PA".to_string(),
        "HSBA.L".to_string(),
        "NOVO-B.CO".to_string(),
        "NOKIA.HE".to_string(),
    ]);
    let translator = SymbolTranslator::new();
    translator.ensure_injective(&universe).unwrap();
    let reference = ReferenceTable::from_universe(&universe, &translator);

    let mut map = HashMap::new();
    // Gainer with a volume spike: +5%, volume 4x the trailing average.
    map.insert(
        "SAP.DE".to_string(),
        series("SAP.DE", 25, dec!(200), dec!(100000), dec!(210), dec!(400000)),
    );
    // Mild loser on quiet volume.
    map.insert(
        "MC.PA".to_string(),
        series("MC.PA", 25, dec!(600), dec!(50000), dec!(588), dec!(50000)),
    );
    // Flat close, elevated volume.
    map.insert(
        "HSBA.L".to_string(),
        series("HSBA.L", 25, dec!(700), dec!(80000), dec!(700), dec!(200000)),
    );
    // Short history: fewer than two bars, must be skipped.
    map.insert(
        "NOVO-B.CO".to_string(),
        series("NOVO-B.CO", 1, dec!(900), dec!(10000), dec!(900), dec!(10000)),
    );
    // NOKIA.HE has no series at all.

    let engine = ScreenerEngine::new();
    let (panel, skips) = engine
        .build_panel_with_report(&map, &reference, &universe)
        .unwrap();

    // Ranking is descending by percent change.
    let symbols: Vec<&str> = panel.records().iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["SAP.DE", "HSBA.L", "MC.PA"]);

    let sap = &panel.records()[0];
    assert_eq!(sap.percent_change, dec!(5.00));
    assert_eq!(sap.volume_ratio, dec!(4.00));
    assert_eq!(sap.display_name, "SAP");
    assert_eq!(sap.currency.code(), "EUR");
    assert_eq!(sap.high_30d, dec!(210.00));

    let hsba = &panel.records()[1];
    assert_eq!(hsba.percent_change, dec!(0.00));
    assert_eq!(hsba.volume_ratio, dec!(2.50));
    assert_eq!(hsba.currency.code(), "GBp");

    let mc = &panel.records()[2];
    assert_eq!(mc.percent_change, dec!(-2.00));

    // Panel views.
    let gainers = panel.gainers(10);
    assert_eq!(gainers.len(), 1);
    assert_eq!(gainers[0].symbol, "SAP.DE");

    let losers = panel.losers(10);
    assert_eq!(losers.len(), 1);
    assert_eq!(losers[0].symbol, "MC.PA");

    let anomalies = panel.volume_anomalies(dec!(2), 10);
    let anomaly_symbols: Vec<&str> =
        anomalies.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(anomaly_symbols, vec!["SAP.DE", "HSBA.L"]);

    // Skip accounting for the two unusable symbols.
    assert_eq!(skips.len(), 2);
    assert_eq!(
        skips.entries()[0],
        ("NOVO-B.CO".to_string(), SkipReason::TooShort { bars: 1 })
    );
    assert_eq!(
        skips.entries()[1],
        ("NOKIA.HE".to_string(), SkipReason::MissingSeries)
    );

    // Summary over surviving records.
    let summary = panel.summary().unwrap();
    assert_eq!(summary.count, 3);
    assert_eq!(summary.positive_count, 1);
    assert_eq!(summary.mean_percent_change, dec!(1.00));
    assert_eq!(summary.top.symbol, "SAP.DE");
    assert_eq!(summary.bottom.symbol, "MC.PA");
}

#[test]
fn test_full_default_universe_with_synthetic_data() {
    let universe = Universe::european();
    let translator = SymbolTranslator::new();
    let reference = ReferenceTable::from_universe(&universe, &translator);

    // Every symbol gets a usable two-bar series with a distinct move.
    let mut map = HashMap::new();
    for (i, symbol) in universe.iter().enumerate() {
        let last = dec!(100) + Decimal::from(i as u64);
        map.insert(
            symbol.to_string(),
            series(symbol, 2, dec!(100), dec!(1000), last, dec!(1000)),
        );
    }

    let panel = ScreenerEngine::new()
        .build_panel(&map, &reference, &universe)
        .unwrap();

    assert_eq!(panel.len(), universe.len());
    // Biggest move is the last universe entry, flat one ranks last.
    assert_eq!(panel.records()[0].percent_change, dec!(84.00));
    assert_eq!(panel.records()[panel.len() - 1].percent_change, dec!(0.00));
}
