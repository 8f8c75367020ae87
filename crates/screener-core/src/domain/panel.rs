//! 스크리너 패널.
//!
//! 한 번의 실행이 만들어내는 전체 랭킹 테이블입니다. 생성 시점에
//! 변동률 내림차순으로 정렬되며 이후 변경되지 않습니다. 상승/하락/
//! 이상 거래량 부분집합은 별도 저장소가 아니라 패널에서 매번 다시
//! 계산되는 읽기 전용 뷰입니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::record::ScreenerRecord;

/// 실행 한 번의 전체 랭킹 결과.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenerPanel {
    records: Vec<ScreenerRecord>,
}

impl ScreenerPanel {
    /// 레코드 목록으로 패널을 생성합니다.
    ///
    /// 입력 순서는 유니버스 순서로 가정합니다. 변동률 내림차순으로
    /// 안정 정렬하므로 변동률이 같은 종목은 유니버스 순서를 유지하며,
    /// 같은 입력에 대해 항상 같은 출력을 만듭니다.
    pub fn new(mut records: Vec<ScreenerRecord>) -> Self {
        records.sort_by(|a, b| b.percent_change.cmp(&a.percent_change));
        Self { records }
    }

    /// 정렬된 전체 레코드를 반환합니다.
    pub fn records(&self) -> &[ScreenerRecord] {
        &self.records
    }

    /// 레코드 개수를 반환합니다.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 패널이 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 상승 종목 뷰.
    ///
    /// 변동률이 0보다 큰 레코드를 패널의 기존 내림차순 그대로
    /// 최대 `limit`개 반환합니다.
    pub fn gainers(&self, limit: usize) -> Vec<&ScreenerRecord> {
        self.records
            .iter()
            .filter(|r| r.is_gainer())
            .take(limit)
            .collect()
    }

    /// 하락 종목 뷰.
    ///
    /// 변동률이 0보다 작은 레코드를 변동률 오름차순(가장 큰 하락부터)
    /// 으로 재정렬해 최대 `limit`개 반환합니다.
    pub fn losers(&self, limit: usize) -> Vec<&ScreenerRecord> {
        let mut losers: Vec<&ScreenerRecord> =
            self.records.iter().filter(|r| r.is_loser()).collect();
        losers.sort_by(|a, b| a.percent_change.cmp(&b.percent_change));
        losers.truncate(limit);
        losers
    }

    /// 이상 거래량 뷰.
    ///
    /// 거래량 비율이 `threshold`를 초과하는 레코드를 비율 내림차순으로
    /// 최대 `limit`개 반환합니다.
    pub fn volume_anomalies(&self, threshold: Decimal, limit: usize) -> Vec<&ScreenerRecord> {
        let mut anomalies: Vec<&ScreenerRecord> = self
            .records
            .iter()
            .filter(|r| r.is_volume_anomaly(threshold))
            .collect();
        anomalies.sort_by(|a, b| b.volume_ratio.cmp(&a.volume_ratio));
        anomalies.truncate(limit);
        anomalies
    }

    /// 요약 통계를 계산합니다. 빈 패널이면 `None`입니다.
    ///
    /// 캐시하지 않고 매번 패널에서 다시 계산합니다.
    pub fn summary(&self) -> Option<PanelSummary> {
        let first = self.records.first()?;
        let last = self.records.last()?;

        let count = self.records.len();
        let positive_count = self.records.iter().filter(|r| r.is_gainer()).count();
        let sum: Decimal = self.records.iter().map(|r| r.percent_change).sum();
        let mean_percent_change = (sum / Decimal::from(count as u64)).round_dp(2);

        Some(PanelSummary {
            count,
            positive_count,
            mean_percent_change,
            top: first.clone(),
            bottom: last.clone(),
        })
    }
}

/// 패널 요약 통계.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSummary {
    /// 전체 레코드 수
    pub count: usize,
    /// 상승 종목 수
    pub positive_count: usize,
    /// 평균 변동률 (%)
    pub mean_percent_change: Decimal,
    /// 최대 상승 레코드
    pub top: ScreenerRecord,
    /// 최대 하락 레코드
    pub bottom: ScreenerRecord,
}
