//! 설정 관리.
//!
//! 이 모듈은 스크리너 실행 설정을 정의하고 관리합니다. 유니버스와
//! 조회 테이블은 모듈 전역이 아니라 명시적으로 전달되는 불변 설정
//! 구조체로 다룹니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 스크리너 실행 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScreenerConfig {
    /// 데이터 수집 설정
    #[serde(default)]
    pub fetch: FetchConfig,
    /// 리포트 설정
    #[serde(default)]
    pub report: ReportConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 유니버스 재정의 (미지정 시 기본 유럽 유니버스)
    #[serde(default)]
    pub universe: Option<Vec<String>>,
}

/// 데이터 수집 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    /// 시세 소스 기본 URL
    pub base_url: String,
    /// 조회 기간 (달력일)
    pub lookback_days: i64,
    /// 몇 종목마다 쉴지
    pub pause_every: usize,
    /// 쉬는 시간 (초)
    pub pause_secs: u64,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://stooq.com/q/d/l/".to_string(),
            lookback_days: 40,
            pause_every: 15,
            pause_secs: 1,
            timeout_secs: 10,
        }
    }
}

/// 리포트 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// 부분집합당 최대 레코드 수
    pub top_limit: usize,
    /// 이상 거래량 임계값 (거래량 비율)
    pub volume_threshold: Decimal,
    /// 출력 파일 경로
    pub output_path: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_limit: 20,
            volume_threshold: Decimal::TWO,
            output_path: "docs/index.html".to_string(),
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl ScreenerConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 환경 변수는 `SCREENER__` 접두사와 `__` 구분자를 사용합니다
    /// (예: `SCREENER__REPORT__TOP_LIMIT=10`).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("SCREENER")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 환경 변수만으로 설정을 로드합니다 (파일 없이 실행할 때).
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("SCREENER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
