//! stooq.com 일봉 CSV Provider.
//!
//! `https://stooq.com/q/d/l/?s=sap.de&d1=20260701&d2=20260823&i=d` 형태의
//! 엔드포인트에서 일봉 CSV를 내려받습니다. 인증키가 필요 없는 대신
//! 브라우저 User-Agent를 요구하며, 모르는 심볼에는 에러 대신 빈
//! 본문이나 안내 문구를 돌려줍니다 — 그래서 짧은 본문과 Close 컬럼
//! 부재를 부재 신호로 해석합니다.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use screener_core::config::FetchConfig;
use screener_core::domain::DailyBar;

use super::SeriesProvider;
use crate::error::{DataError, Result};

/// stooq가 요구하는 브라우저 User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36";

/// 이보다 짧은 본문은 데이터 없음으로 간주 (헤더 한 줄 수준).
const MIN_BODY_LEN: usize = 50;

/// stooq.com 일봉 CSV 클라이언트.
#[derive(Debug, Clone)]
pub struct StooqProvider {
    client: reqwest::Client,
    base_url: String,
}

impl StooqProvider {
    /// 수집 설정으로 Provider를 생성합니다.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DataError::Fetch(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl SeriesProvider for StooqProvider {
    fn name(&self) -> &str {
        "stooq"
    }

    async fn fetch_daily(
        &self,
        provider_symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Option<Vec<DailyBar>>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("s", provider_symbol),
                ("d1", &from.format("%Y%m%d").to_string()),
                ("d2", &to.format("%Y%m%d").to_string()),
                ("i", "d"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let body = response.text().await?;
        if body.len() < MIN_BODY_LEN {
            return Ok(None);
        }

        Ok(parse_daily_csv(&body))
    }
}

/// stooq 일봉 CSV를 파싱합니다.
///
/// 헤더 행으로 컬럼 위치를 잡으므로 컬럼 순서가 바뀌거나 선택 컬럼이
/// 빠져도 동작합니다. Date와 Close 컬럼이 없으면 데이터 없음(`None`)
/// 입니다. 셀 단위로 깨진 행은 건너뛰고, 남은 일봉을 날짜 오름차순으로
/// 정렬해 돌려줍니다.
fn parse_daily_csv(body: &str) -> Option<Vec<DailyBar>> {
    let mut lines = body.lines();
    let header = lines.next()?;

    let columns: Vec<String> = header
        .split(',')
        .map(|c| c.trim().to_lowercase())
        .collect();
    let index_of = |name: &str| columns.iter().position(|c| c == name);

    let date_idx = index_of("date")?;
    let close_idx = index_of("close")?;
    let open_idx = index_of("open");
    let high_idx = index_of("high");
    let low_idx = index_of("low");
    let volume_idx = index_of("volume");

    let mut bars = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split(',').collect();

        let Some(date) = cells
            .get(date_idx)
            .and_then(|c| NaiveDate::parse_from_str(c.trim(), "%Y-%m-%d").ok())
        else {
            continue;
        };
        let Some(close) = parse_cell(&cells, Some(close_idx)) else {
            continue;
        };

        bars.push(DailyBar {
            date,
            open: parse_cell(&cells, open_idx),
            high: parse_cell(&cells, high_idx),
            low: parse_cell(&cells, low_idx),
            close,
            volume: parse_cell(&cells, volume_idx),
        });
    }

    if bars.is_empty() {
        return None;
    }

    bars.sort_by_key(|b| b.date);
    Some(bars)
}

/// 선택 컬럼 셀을 Decimal로 파싱합니다. 컬럼 부재/빈 셀/깨진 값은 `None`.
fn parse_cell(cells: &[&str], idx: Option<usize>) -> Option<Decimal> {
    cells
        .get(idx?)
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .and_then(|c| c.parse::<Decimal>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE_CSV: &str = "\
Date,Open,High,Low,Close,Volume
2026-08-18,100.0,102.0,99.5,101.0,150000
2026-08-19,101.0,103.5,100.0,103.0,180000
2026-08-20,103.0,104.0,101.5,102.0,120000
";

    #[test]
    fn test_parse_full_csv() {
        let bars = parse_daily_csv(SAMPLE_CSV).unwrap();
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].close, dec!(101.0));
        assert_eq!(bars[0].high, Some(dec!(102.0)));
        assert_eq!(bars[2].volume, Some(dec!(120000)));
    }

    #[test]
    fn test_parse_missing_volume_column() {
        let body = "\
Date,Open,High,Low,Close
2026-08-18,100.0,102.0,99.5,101.0
2026-08-19,101.0,103.5,100.0,103.0
";
        let bars = parse_daily_csv(body).unwrap();
        assert_eq!(bars.len(), 2);
        assert!(bars[0].volume.is_none());
        assert_eq!(bars[0].volume_or_zero(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_skips_broken_rows() {
        let body = "\
Date,Open,High,Low,Close,Volume
2026-08-18,100.0,102.0,99.5,101.0,150000
not-a-date,x,y,z,w,v
2026-08-19,101.0,103.5,100.0,,180000
2026-08-20,103.0,104.0,101.5,102.0,120000
";
        let bars = parse_daily_csv(body).unwrap();
        // 날짜가 깨진 행과 종가가 빈 행은 제외
        assert_eq!(bars.len(), 2);
    }

    #[test]
    fn test_parse_no_close_column() {
        let body = "\
Date,Open,High,Low,Volume
2026-08-18,100.0,102.0,99.5,150000
";
        assert!(parse_daily_csv(body).is_none());
    }

    #[test]
    fn test_parse_sorts_by_date() {
        let body = "\
Date,Close
2026-08-20,102.0
2026-08-18,101.0
2026-08-19,103.0
";
        let bars = parse_daily_csv(body).unwrap();
        assert_eq!(bars[0].date.to_string(), "2026-08-18");
        assert_eq!(bars[2].date.to_string(), "2026-08-20");
    }

    fn test_config(base_url: String) -> FetchConfig {
        FetchConfig {
            base_url,
            ..Default::default()
        }
    }

    fn window() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2026, 7, 14).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_fetch_daily_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(mockito::Matcher::UrlEncoded("s".into(), "sap.de".into()))
            .with_status(200)
            .with_body(SAMPLE_CSV)
            .create_async()
            .await;

        let provider = StooqProvider::new(&test_config(server.url())).unwrap();
        let (from, to) = window();
        let bars = provider.fetch_daily("sap.de", from, to).await.unwrap();

        mock.assert_async().await;
        assert_eq!(bars.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_daily_http_error_is_absence() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let provider = StooqProvider::new(&test_config(server.url())).unwrap();
        let (from, to) = window();
        let bars = provider.fetch_daily("nope.xx", from, to).await.unwrap();
        assert!(bars.is_none());
    }

    #[tokio::test]
    async fn test_fetch_daily_short_body_is_absence() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("No data")
            .create_async()
            .await;

        let provider = StooqProvider::new(&test_config(server.url())).unwrap();
        let (from, to) = window();
        let bars = provider.fetch_daily("sap.de", from, to).await.unwrap();
        assert!(bars.is_none());
    }
}
