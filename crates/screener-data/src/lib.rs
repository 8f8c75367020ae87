//! # Screener Data
//!
//! 스크리너의 데이터 경계 크레이트입니다. 엔진 바깥의 협력자들을
//! 제공합니다:
//! - `Universe` - 실행이 처리하는 고정 심볼 목록
//! - `SymbolTranslator` - 야후식 접미사 → stooq 국가 도메인 변환
//! - `ReferenceTable` - 심볼 → 표시 이름/거래소/섹터/공급자 심볼
//! - `SeriesProvider` / `StooqProvider` - 일봉 시계열 수집

pub mod error;
pub mod provider;
pub mod reference;
pub mod translator;
pub mod universe;

pub use error::{DataError, Result};
pub use provider::{fetch_universe, FetchOutcome, SeriesProvider};
pub use provider::stooq::StooqProvider;
pub use reference::{ReferenceEntry, ReferenceTable};
pub use translator::SymbolTranslator;
pub use universe::Universe;
