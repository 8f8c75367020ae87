//! # Screener Report
//!
//! 스크리너 패널을 정적 HTML 리포트로 렌더링합니다. 외부 템플릿
//! 엔진 없이 문자열 조립으로 만들며, 결과물은 서버 없이 열 수 있는
//! 단일 파일입니다 (탭/검색/정렬은 인라인 스크립트).
//!
//! 렌더링은 순수합니다: 같은 패널과 같은 시각 입력에는 항상 같은
//! HTML이 나옵니다. 파일 쓰기는 [`write_report`]로 분리되어 있습니다.

pub mod html;

pub use html::{write_report, HtmlReport};
