//! 스크리너 공통 에러 타입.
//!
//! 경계 크레이트(screener-data, screener-engine)의 에러는 최상위에서
//! 이 타입으로 수렴합니다.

use thiserror::Error;

/// 최상위 스크리너 에러.
#[derive(Debug, Error)]
pub enum ScreenerError {
    /// 설정 에러 (유니버스/참조 테이블 불일치 포함)
    #[error("설정 에러: {0}")]
    Config(String),

    /// 데이터 수집 에러
    #[error("데이터 수집 에러: {0}")]
    Fetch(String),

    /// 데이터 파싱 에러
    #[error("데이터 파싱 에러: {0}")]
    Parse(String),

    /// 유니버스 전체에서 사용 가능한 데이터가 없음
    #[error("사용 가능한 데이터가 없습니다")]
    NoUsableData,

    /// 리포트 생성 에러
    #[error("리포트 생성 에러: {0}")]
    Render(String),

    /// 입출력 에러
    #[error("입출력 에러: {0}")]
    Io(String),
}

/// 스크리너 작업을 위한 Result 타입.
pub type ScreenerResult<T> = Result<T, ScreenerError>;

impl ScreenerError {
    /// 재시도로 해결될 수 없는 에러인지 확인합니다.
    ///
    /// 설정 에러는 유니버스와 참조 테이블의 불일치를 뜻하므로
    /// 재실행이 아니라 수정이 필요합니다.
    pub fn is_configuration(&self) -> bool {
        matches!(self, ScreenerError::Config(_))
    }

    /// 업스트림 장애 조사가 필요한 에러인지 확인합니다.
    pub fn is_data_outage(&self) -> bool {
        matches!(self, ScreenerError::NoUsableData)
    }
}

impl From<std::io::Error> for ScreenerError {
    fn from(err: std::io::Error) -> Self {
        ScreenerError::Io(err.to_string())
    }
}

impl From<config::ConfigError> for ScreenerError {
    fn from(err: config::ConfigError) -> Self {
        ScreenerError::Config(err.to_string())
    }
}
