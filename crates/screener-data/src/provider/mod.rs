//! 시계열 Provider 모듈.
//!
//! 외부 시세 소스에서 일봉 시계열을 가져오는 Provider를 정의합니다.
//!
//! ## stooq.com
//! - `StooqProvider`: stooq 일봉 CSV 엔드포인트 클라이언트 (인증키 불필요)
//!
//! 수집 계약: 종목마다 일봉 시계열을 돌려주거나 명시적 부재(`None`)를
//! 돌려줍니다. 종목 단위 실패는 부재로 격하되며 전체 실행을 중단하지
//! 않습니다 — 전체 실패 판정은 엔진의 몫입니다.

pub mod stooq;

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use screener_core::config::FetchConfig;
use screener_core::domain::{DailyBar, DailySeries};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::translator::SymbolTranslator;
use crate::universe::Universe;

/// 일봉 시계열 Provider trait.
#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// Provider 이름.
    fn name(&self) -> &str;

    /// 한 종목의 일봉 시계열을 가져옵니다.
    ///
    /// `Ok(None)`은 명시적 부재 신호입니다: 소스에 해당 종목 데이터가
    /// 없거나 쓸 수 없는 응답이 왔다는 뜻이며 에러가 아닙니다.
    async fn fetch_daily(
        &self,
        provider_symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Option<Vec<DailyBar>>>;
}

/// 유니버스 수집 결과.
#[derive(Debug)]
pub struct FetchOutcome {
    /// 심볼 → 일봉 시계열 (부재 심볼은 키 없음)
    pub series: HashMap<String, DailySeries>,
    /// 건너뛴 심볼 수 (부재 또는 일봉 2개 미만)
    pub skipped: usize,
}

/// 유니버스 전체를 순서대로 수집합니다.
///
/// 소스에 부담을 주지 않도록 `pause_every` 종목마다 `pause_secs`초
/// 쉽니다. 일봉이 2개 미만인 시계열은 일간 변동률을 계산할 수 없으므로
/// 여기서부터 제외하고 건너뛴 것으로 셉니다.
pub async fn fetch_universe<F>(
    provider: &dyn SeriesProvider,
    translator: &SymbolTranslator,
    universe: &Universe,
    config: &FetchConfig,
    from: NaiveDate,
    to: NaiveDate,
    mut on_progress: F,
) -> FetchOutcome
where
    F: FnMut(&str),
{
    info!(
        provider = provider.name(),
        symbols = universe.len(),
        %from,
        %to,
        "Fetching universe"
    );

    let mut series = HashMap::new();
    let mut skipped = 0;

    for (i, symbol) in universe.iter().enumerate() {
        on_progress(symbol);
        let provider_symbol = translator.to_provider_symbol(symbol);

        match provider.fetch_daily(&provider_symbol, from, to).await {
            Ok(Some(bars)) if bars.len() >= 2 => {
                series.insert(symbol.to_string(), DailySeries::new(symbol, bars));
            }
            Ok(Some(bars)) => {
                debug!(symbol, bars = bars.len(), "Series too short, skipping");
                skipped += 1;
            }
            Ok(None) => {
                debug!(symbol, provider_symbol, "No data, skipping");
                skipped += 1;
            }
            Err(err) => {
                // 종목 단위 결함은 부재로 격하
                warn!(symbol, %err, "Fetch failed, skipping");
                skipped += 1;
            }
        }

        if config.pause_every > 0 && (i + 1) % config.pause_every == 0 {
            tokio::time::sleep(std::time::Duration::from_secs(config.pause_secs)).await;
        }
    }

    info!(loaded = series.len(), skipped, "Universe fetch finished");
    FetchOutcome { series, skipped }
}
