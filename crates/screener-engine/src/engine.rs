//! 스크리너 엔진.
//!
//! 종목별 시계열 맵 + 참조 테이블 + 유니버스 → 랭킹된 패널.
//! I/O가 없는 동기·순수 변환이며, 같은 입력에는 항상 같은 출력을
//! 만듭니다.

use std::collections::HashMap;

use screener_core::domain::{DailySeries, ScreenerPanel, ScreenerRecord};
use screener_core::ScreenerError;
use screener_data::{ReferenceTable, Universe};
use thiserror::Error;
use tracing::{debug, info};

use crate::metrics::{derive_metrics, SkipReason};

/// 엔진 하드 에러.
///
/// 종목 단위 소프트 결함은 여기 포함되지 않습니다 — 그것들은
/// [`SkipReason`]으로 패널에서 제외될 뿐입니다.
#[derive(Debug, Error)]
pub enum EngineError {
    /// 유니버스 심볼이 참조 테이블에 없음 (유니버스/테이블 불일치)
    #[error("참조 테이블에 항목이 없습니다: {symbol}")]
    MissingReference { symbol: String },

    /// 유니버스 전체에서 레코드가 하나도 남지 않음 (업스트림 장애 의심)
    #[error("유니버스 전체에서 사용 가능한 데이터가 없습니다")]
    NoUsableData,
}

/// 엔진 작업을 위한 Result 타입.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<EngineError> for ScreenerError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::MissingReference { .. } => ScreenerError::Config(err.to_string()),
            EngineError::NoUsableData => ScreenerError::NoUsableData,
        }
    }
}

/// 제외 내역 보고서.
///
/// 어떤 심볼이 왜 패널에서 빠졌는지 호출자가 들여다볼 수 있게 합니다.
#[derive(Debug, Default)]
pub struct SkipReport {
    skips: Vec<(String, SkipReason)>,
}

impl SkipReport {
    /// 제외된 심볼과 이유를 순서대로 반환합니다.
    pub fn entries(&self) -> &[(String, SkipReason)] {
        &self.skips
    }

    /// 제외된 심볼 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.skips.len()
    }

    /// 제외가 없었는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.skips.is_empty()
    }

    fn push(&mut self, symbol: &str, reason: SkipReason) {
        debug!(symbol, %reason, "Symbol excluded from panel");
        self.skips.push((symbol.to_string(), reason));
    }
}

/// 정규화-지표 엔진.
#[derive(Debug, Default)]
pub struct ScreenerEngine;

impl ScreenerEngine {
    /// 새 엔진을 생성합니다.
    pub fn new() -> Self {
        Self
    }

    /// 랭킹된 패널을 만듭니다.
    ///
    /// 유니버스를 순서대로 처리합니다. 시계열이 없거나 계산이 불가능한
    /// 종목은 조용히 제외되고, 참조 테이블에 없는 심볼은 설정 결함으로
    /// 즉시 실패하며, 살아남은 레코드가 하나도 없으면
    /// [`EngineError::NoUsableData`]로 실패합니다.
    pub fn build_panel(
        &self,
        series_map: &HashMap<String, DailySeries>,
        reference: &ReferenceTable,
        universe: &Universe,
    ) -> EngineResult<ScreenerPanel> {
        self.build_panel_with_report(series_map, reference, universe)
            .map(|(panel, _)| panel)
    }

    /// [`build_panel`](Self::build_panel)과 같지만 제외 내역도 돌려줍니다.
    pub fn build_panel_with_report(
        &self,
        series_map: &HashMap<String, DailySeries>,
        reference: &ReferenceTable,
        universe: &Universe,
    ) -> EngineResult<(ScreenerPanel, SkipReport)> {
        // 참조 테이블 검증을 먼저 한다: 불일치는 데이터 상황과 무관한
        // 설정 결함이므로 수집 결과가 어떻든 실행을 중단해야 한다.
        for symbol in universe.iter() {
            if reference.get(symbol).is_none() {
                return Err(EngineError::MissingReference {
                    symbol: symbol.to_string(),
                });
            }
        }

        let mut records = Vec::with_capacity(universe.len());
        let mut report = SkipReport::default();

        for symbol in universe.iter() {
            let Some(series) = series_map.get(symbol) else {
                report.push(symbol, SkipReason::MissingSeries);
                continue;
            };

            let metrics = match derive_metrics(series) {
                Ok(m) => m,
                Err(reason) => {
                    report.push(symbol, reason);
                    continue;
                }
            };

            // 위에서 전수 검증했으므로 조회는 실패할 수 없음
            let entry = reference.get(symbol).ok_or_else(|| {
                EngineError::MissingReference {
                    symbol: symbol.to_string(),
                }
            })?;

            records.push(ScreenerRecord {
                symbol: symbol.to_string(),
                display_name: entry.display_name.clone(),
                exchange: entry.exchange,
                sector: entry.sector.clone(),
                currency: entry.exchange.currency(),
                last_close: metrics.last_close.round_dp(2),
                previous_close: metrics.previous_close.round_dp(2),
                percent_change: metrics.percent_change.round_dp(2),
                last_volume: metrics.last_volume.trunc(),
                average_volume_20: metrics.average_volume_20.round_dp(2),
                volume_ratio: metrics.volume_ratio.round_dp(2),
                high_30d: metrics.high_30d.round_dp(2),
            });
        }

        if records.is_empty() {
            return Err(EngineError::NoUsableData);
        }

        info!(
            records = records.len(),
            skipped = report.len(),
            "Panel built"
        );
        Ok((ScreenerPanel::new(records), report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use screener_core::domain::DailyBar;
    use screener_data::SymbolTranslator;

    fn close_series(symbol: &str, closes: &[Decimal]) -> DailySeries {
        let start = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let mut bar =
                    DailyBar::from_close(start + chrono::Days::new(i as u64), *c);
                bar.volume = Some(dec!(1000));
                bar
            })
            .collect();
        DailySeries::new(symbol, bars)
    }

    fn setup(symbols: &[&str]) -> (Universe, ReferenceTable) {
        let universe = Universe::new(symbols.iter().map(|s| s.to_string()).collect());
        let table = ReferenceTable::from_universe(&universe, &SymbolTranslator::new());
        (universe, table)
    }

    #[test]
    fn test_build_panel_ranks_by_percent_change() {
        let (universe, table) = setup(&["AAA.DE", "BBB.DE", "CCC.DE"]);
        let mut map = HashMap::new();
        map.insert("AAA.DE".to_string(), close_series("AAA.DE", &[dec!(100), dec!(101)]));
        map.insert("BBB.DE".to_string(), close_series("BBB.DE", &[dec!(100), dec!(105)]));
        map.insert("CCC.DE".to_string(), close_series("CCC.DE", &[dec!(100), dec!(97)]));

        let panel = ScreenerEngine::new()
            .build_panel(&map, &table, &universe)
            .unwrap();

        let symbols: Vec<&str> = panel.records().iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["BBB.DE", "AAA.DE", "CCC.DE"]);
        assert_eq!(panel.records()[0].percent_change, dec!(5.00));
        assert_eq!(panel.records()[2].percent_change, dec!(-3.00));
    }

    #[test]
    fn test_soft_defects_are_excluded_not_fatal() {
        let (universe, table) = setup(&["AAA.DE", "BBB.DE", "CCC.DE", "DDD.DE"]);
        let mut map = HashMap::new();
        // AAA: 정상, BBB: 일봉 1개, CCC: 직전 종가 0, DDD: 시계열 없음
        map.insert("AAA.DE".to_string(), close_series("AAA.DE", &[dec!(10), dec!(11)]));
        map.insert("BBB.DE".to_string(), close_series("BBB.DE", &[dec!(10)]));
        map.insert(
            "CCC.DE".to_string(),
            close_series("CCC.DE", &[dec!(10), Decimal::ZERO, dec!(11)]),
        );

        let (panel, report) = ScreenerEngine::new()
            .build_panel_with_report(&map, &table, &universe)
            .unwrap();

        assert_eq!(panel.len(), 1);
        assert_eq!(panel.records()[0].symbol, "AAA.DE");

        assert_eq!(report.len(), 3);
        assert_eq!(
            report.entries()[0],
            ("BBB.DE".to_string(), SkipReason::TooShort { bars: 1 })
        );
        assert_eq!(
            report.entries()[1],
            ("CCC.DE".to_string(), SkipReason::ZeroPreviousClose)
        );
        assert_eq!(
            report.entries()[2],
            ("DDD.DE".to_string(), SkipReason::MissingSeries)
        );
    }

    #[test]
    fn test_missing_reference_is_hard_error() {
        let universe = Universe::new(vec!["AAA.DE".to_string(), "BBB.DE".to_string()]);
        // 테이블에는 AAA만 있음
        let table = ReferenceTable::from_universe(
            &Universe::new(vec!["AAA.DE".to_string()]),
            &SymbolTranslator::new(),
        );
        let mut map = HashMap::new();
        map.insert("AAA.DE".to_string(), close_series("AAA.DE", &[dec!(10), dec!(11)]));

        // AAA가 계산 가능해도 설정 결함이 우선
        let err = ScreenerEngine::new()
            .build_panel(&map, &table, &universe)
            .unwrap_err();
        assert!(matches!(err, EngineError::MissingReference { symbol } if symbol == "BBB.DE"));
    }

    #[test]
    fn test_empty_series_map_is_no_usable_data() {
        let (universe, table) = setup(&["AAA.DE", "BBB.DE"]);
        let map = HashMap::new();

        let err = ScreenerEngine::new()
            .build_panel(&map, &table, &universe)
            .unwrap_err();
        assert!(matches!(err, EngineError::NoUsableData));
    }

    #[test]
    fn test_build_panel_is_deterministic() {
        let (universe, table) = setup(&["AAA.DE", "BBB.DE", "CCC.DE"]);
        let mut map = HashMap::new();
        // 동률 변동률: 유니버스 순서가 타이브레이크
        map.insert("AAA.DE".to_string(), close_series("AAA.DE", &[dec!(10), dec!(11)]));
        map.insert("BBB.DE".to_string(), close_series("BBB.DE", &[dec!(20), dec!(22)]));
        map.insert("CCC.DE".to_string(), close_series("CCC.DE", &[dec!(10), dec!(12)]));

        let engine = ScreenerEngine::new();
        let first = engine.build_panel(&map, &table, &universe).unwrap();
        let second = engine.build_panel(&map, &table, &universe).unwrap();
        assert_eq!(first, second);

        let symbols: Vec<&str> = first.records().iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["CCC.DE", "AAA.DE", "BBB.DE"]);
    }

    #[test]
    fn test_record_fields_rounded_for_display() {
        let (universe, table) = setup(&["AAA.DE"]);
        let mut map = HashMap::new();
        map.insert(
            "AAA.DE".to_string(),
            close_series("AAA.DE", &[dec!(3), dec!(10)]),
        );

        let panel = ScreenerEngine::new()
            .build_panel(&map, &table, &universe)
            .unwrap();
        let record = &panel.records()[0];

        // (10 - 3) / 3 * 100 = 233.333... → 233.33
        assert_eq!(record.percent_change, dec!(233.33));
        assert_eq!(record.currency, record.exchange.currency());
        assert_eq!(record.display_name, "AAA");
    }
}
