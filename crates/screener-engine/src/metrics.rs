//! 종목별 지표 파생.
//!
//! 일봉 시계열 하나에서 스크리너 레코드에 필요한 파생값을 계산합니다:
//! - 최근/직전 종가와 일간 변동률
//! - 직전 20일 평균 거래량과 거래량 비율
//! - 30일 최고가
//!
//! 계산 불가능한 시계열은 에러가 아니라 [`SkipReason`]으로 끝납니다.
//! 반환값은 반올림하지 않은 원시 정밀도입니다 — 표시용 반올림은
//! 레코드를 만드는 쪽의 몫입니다.

use std::borrow::Cow;

use rust_decimal::Decimal;
use screener_core::domain::DailySeries;
use thiserror::Error;

/// 직전 평균 거래량 윈도우 크기 (마지막 일봉 제외 20개).
pub const TRAILING_VOLUME_WINDOW: usize = 20;

/// 종목이 패널에서 제외되는 이유.
///
/// 전부 소프트 결함입니다: 해당 종목만 제외되고 실행은 계속됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// 수집기가 시계열을 돌려주지 않음
    #[error("시계열이 없습니다")]
    MissingSeries,

    /// 일봉이 2개 미만이라 일간 변동률을 계산할 수 없음
    #[error("일봉이 부족합니다: {bars}개")]
    TooShort { bars: usize },

    /// 직전 종가가 0이라 변동률이 정의되지 않음
    #[error("직전 종가가 0입니다")]
    ZeroPreviousClose,
}

/// 시계열 하나에서 파생된 지표 묶음 (반올림 전).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMetrics {
    /// 최근 종가
    pub last_close: Decimal,
    /// 직전 종가
    pub previous_close: Decimal,
    /// 일간 변동률 (%)
    pub percent_change: Decimal,
    /// 최근 일봉 거래량
    pub last_volume: Decimal,
    /// 직전 20일 평균 거래량
    pub average_volume_20: Decimal,
    /// 거래량 비율
    pub volume_ratio: Decimal,
    /// 30일 최고가
    pub high_30d: Decimal,
}

/// 일봉 시계열에서 지표를 파생합니다.
///
/// 업스트림 정렬 위반을 방어하기 위해 날짜순이 아닐 때만 정렬 사본을
/// 만들고, "최근 두 종가"는 항상 날짜 기준으로 뽑습니다.
///
/// 평균 거래량은 일봉이 21개 이상이면 마지막 일봉을 제외한 직전
/// 20개의 평균이고, 그보다 짧으면 마지막 일봉을 포함한 전체 평균으로
/// 대체합니다. 평균이 0이면 거래량 비율은 중립값 1.0입니다.
pub fn derive_metrics(series: &DailySeries) -> Result<SymbolMetrics, SkipReason> {
    let n = series.len();
    if n < 2 {
        return Err(SkipReason::TooShort { bars: n });
    }

    let series: Cow<'_, DailySeries> = if series.is_chronological() {
        Cow::Borrowed(series)
    } else {
        Cow::Owned(series.sorted_by_date())
    };
    let bars = &series.bars;

    let last = &bars[n - 1];
    let previous = &bars[n - 2];
    if previous.close.is_zero() {
        return Err(SkipReason::ZeroPreviousClose);
    }

    let percent_change =
        (last.close - previous.close) / previous.close * Decimal::ONE_HUNDRED;

    let last_volume = last.volume_or_zero();
    let average_volume_20 = if n > TRAILING_VOLUME_WINDOW {
        // 마지막 일봉을 제외한 직전 20개
        mean_volume(&bars[n - 1 - TRAILING_VOLUME_WINDOW..n - 1])
    } else {
        // 짧은 시계열: 마지막 일봉을 포함한 전체 평균
        mean_volume(bars)
    };

    let volume_ratio = if average_volume_20 > Decimal::ZERO {
        last_volume / average_volume_20
    } else {
        Decimal::ONE
    };

    let high_30d = bars
        .iter()
        .map(|b| b.high_or_close())
        .max()
        .unwrap_or(last.close);

    Ok(SymbolMetrics {
        last_close: last.close,
        previous_close: previous.close,
        percent_change,
        last_volume,
        average_volume_20,
        volume_ratio,
        high_30d,
    })
}

fn mean_volume(bars: &[screener_core::domain::DailyBar]) -> Decimal {
    if bars.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = bars.iter().map(|b| b.volume_or_zero()).sum();
    sum / Decimal::from(bars.len() as u64)
}
