//! # Screener Engine
//!
//! 스크리너의 핵심인 정규화-지표 엔진입니다. 종목별 원시 일봉
//! 시계열 맵과 참조 테이블을 받아 결정적이고 순수한 변환으로
//! 랭킹된 [`ScreenerPanel`](screener_core::ScreenerPanel)을 만듭니다.
//!
//! - 종목 단위 데이터 결함(시계열 부재, 일봉 부족, 직전 종가 0)은
//!   [`SkipReason`]으로 제외될 뿐 실행을 중단하지 않습니다.
//! - 참조 테이블 불일치와 전체 데이터 부재만이
//!   [`EngineError`]로 호출자에게 올라갑니다.

pub mod engine;
pub mod metrics;

pub use engine::{EngineError, EngineResult, ScreenerEngine, SkipReport};
pub use metrics::{derive_metrics, SkipReason, SymbolMetrics, TRAILING_VOLUME_WINDOW};
