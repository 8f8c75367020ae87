//! 일봉 시계열 타입.
//!
//! 이 모듈은 외부 시세 수집기에서 넘어오는 원시 OHLCV 데이터를 정의합니다:
//! - `DailyBar` - 하루치 OHLCV 관측값
//! - `DailySeries` - 한 종목의 날짜 오름차순 일봉 시계열
//!
//! 종가(`close`)만 필수이며 나머지 컬럼은 소스에 따라 없을 수 있습니다.
//! 누락 컬럼의 기본값은 여기에서 한 번만 해석합니다:
//! 거래량은 0, 고가는 종가로 간주합니다.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 하루치 OHLCV 관측값.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBar {
    /// 관측 날짜
    pub date: NaiveDate,
    /// 시가 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<Decimal>,
    /// 고가 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Decimal>,
    /// 저가 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Decimal>,
    /// 종가 (필수)
    pub close: Decimal,
    /// 거래량 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,
}

impl DailyBar {
    /// 종가만으로 일봉을 생성합니다. 나머지 컬럼은 누락 상태입니다.
    pub fn from_close(date: NaiveDate, close: Decimal) -> Self {
        Self {
            date,
            open: None,
            high: None,
            low: None,
            close,
            volume: None,
        }
    }

    /// 거래량을 반환합니다. 누락 시 0으로 간주합니다.
    pub fn volume_or_zero(&self) -> Decimal {
        self.volume.unwrap_or(Decimal::ZERO)
    }

    /// 고가를 반환합니다. 누락 시 종가로 간주합니다.
    pub fn high_or_close(&self) -> Decimal {
        self.high.unwrap_or(self.close)
    }
}

/// 한 종목의 일봉 시계열.
///
/// 수집기 계약상 날짜 오름차순이지만, 소비 측은
/// [`sorted_by_date`](Self::sorted_by_date)로 방어적으로 재정렬할 수 있습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySeries {
    /// 유니버스 심볼 (예: SAP.DE)
    pub symbol: String,
    /// 일봉 목록 (과거 → 최신)
    pub bars: Vec<DailyBar>,
}

impl DailySeries {
    /// 새 시계열을 생성합니다.
    pub fn new(symbol: impl Into<String>, bars: Vec<DailyBar>) -> Self {
        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    /// 일봉 개수를 반환합니다.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// 일봉이 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// 날짜 오름차순인지 확인합니다 (중복 날짜는 위반으로 간주).
    pub fn is_chronological(&self) -> bool {
        self.bars.windows(2).all(|w| w[0].date < w[1].date)
    }

    /// 날짜 오름차순으로 정렬한 사본을 반환합니다.
    ///
    /// 업스트림 정렬 위반에 대한 방어선입니다. 안정 정렬이므로
    /// 같은 날짜의 일봉은 수신 순서를 유지합니다.
    pub fn sorted_by_date(&self) -> Self {
        let mut bars = self.bars.clone();
        bars.sort_by_key(|b| b.date);
        Self {
            symbol: self.symbol.clone(),
            bars,
        }
    }

    /// 마지막 일봉을 반환합니다.
    pub fn last_bar(&self) -> Option<&DailyBar> {
        self.bars.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    #[test]
    fn test_missing_column_defaults() {
        let bar = DailyBar::from_close(date(3), dec!(101.5));
        assert_eq!(bar.volume_or_zero(), Decimal::ZERO);
        assert_eq!(bar.high_or_close(), dec!(101.5));
    }

    #[test]
    fn test_sorted_by_date() {
        let series = DailySeries::new(
            "SAP.DE",
            vec![
                DailyBar::from_close(date(5), dec!(103)),
                DailyBar::from_close(date(3), dec!(101)),
                DailyBar::from_close(date(4), dec!(102)),
            ],
        );
        assert!(!series.is_chronological());

        let sorted = series.sorted_by_date();
        assert!(sorted.is_chronological());
        assert_eq!(sorted.bars[0].close, dec!(101));
        assert_eq!(sorted.last_bar().unwrap().close, dec!(103));

        // 원본은 변경되지 않음
        assert_eq!(series.bars[0].close, dec!(103));
    }

    #[test]
    fn test_duplicate_dates_not_chronological() {
        let series = DailySeries::new(
            "SAP.DE",
            vec![
                DailyBar::from_close(date(3), dec!(101)),
                DailyBar::from_close(date(3), dec!(102)),
            ],
        );
        assert!(!series.is_chronological());
    }
}
