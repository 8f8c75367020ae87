//! 스크리너 레코드.
//!
//! 한 종목에 대한 랭킹 결과 한 줄입니다. 엔진이 실행마다 새로 만들며,
//! 생성 이후 변경되지 않습니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Currency, Exchange};

/// 종목 하나의 랭킹 결과 레코드.
///
/// 표시용 금액/비율 필드는 생성 시점에 소수 둘째 자리로 반올림되어
/// 있습니다. 이후 계산에 재사용하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenerRecord {
    /// 유니버스 심볼 (예: SAP.DE)
    pub symbol: String,
    /// 표시 이름 (접미사를 제거한 티커 또는 참조 테이블의 이름)
    pub display_name: String,
    /// 거래소
    pub exchange: Exchange,
    /// 섹터 (참조 테이블에 있을 때만)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    /// 표시 통화 (거래소에서 파생)
    pub currency: Currency,
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
    /// 거래량 비율 (최근 거래량 / 평균 거래량, 평균 0이면 1.0)
    pub volume_ratio: Decimal,
    /// 30일 최고가
    pub high_30d: Decimal,
}

impl ScreenerRecord {
    /// 상승 종목인지 확인합니다.
    pub fn is_gainer(&self) -> bool {
        self.percent_change > Decimal::ZERO
    }

    /// 하락 종목인지 확인합니다.
    pub fn is_loser(&self) -> bool {
        self.percent_change < Decimal::ZERO
    }

    /// 거래량 비율이 임계값을 초과하는지 확인합니다.
    pub fn is_volume_anomaly(&self, threshold: Decimal) -> bool {
        self.volume_ratio > threshold
    }
}
