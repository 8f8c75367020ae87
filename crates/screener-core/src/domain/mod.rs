//! 스크리너 도메인 모델.
//!
//! - `DailyBar` / `DailySeries` - 외부 시세 소스에서 수신한 일봉 시계열
//! - `ScreenerRecord` - 종목 하나의 랭킹 결과 레코드
//! - `ScreenerPanel` - 한 번의 실행이 만들어내는 전체 랭킹 테이블

pub mod bar;
pub mod panel;
pub mod record;

pub use bar::{DailyBar, DailySeries};
pub use panel::{PanelSummary, ScreenerPanel};
pub use record::ScreenerRecord;
