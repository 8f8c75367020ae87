//! 데이터 경계 에러 타입.

use screener_core::ScreenerError;
use thiserror::Error;

/// 데이터 수집/변환 관련 에러.
#[derive(Debug, Error)]
pub enum DataError {
    /// 외부 소스 요청 실패
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// 응답 본문 파싱 실패
    #[error("Parse error: {0}")]
    Parse(String),

    /// 잘못된 데이터 형식
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// 설정 결함 (심볼 변환 충돌 등)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        DataError::Fetch(err.to_string())
    }
}

impl From<DataError> for ScreenerError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::Fetch(msg) => ScreenerError::Fetch(msg),
            DataError::Parse(msg) => ScreenerError::Parse(msg),
            DataError::InvalidData(msg) => ScreenerError::Parse(msg),
            DataError::Config(msg) => ScreenerError::Config(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
