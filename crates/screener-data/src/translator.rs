//! 심볼 변환기.
//!
//! 야후식 티커(`SAP.DE`)를 stooq 심볼(`sap.de`)로 변환하고, 접미사에서
//! 거래소를 파생합니다. stooq는 거래소 접미사 대신 국가 도메인을
//! 사용합니다 (예: XETRA `.DE` → 독일 `.de`, 파리 `.PA` → 프랑스 `.fr`).
//!
//! 순수 테이블 기반이며, 가장 구체적인(긴) 접미사가 먼저 매칭됩니다.
//! 매핑되지 않은 심볼은 실패 대신 소문자 그대로 통과시키고 거래소는
//! `Unknown` 센티널로 분류합니다.

use std::collections::HashMap;

use screener_core::types::Exchange;

use crate::error::{DataError, Result};
use crate::universe::Universe;

/// 접미사 변환 규칙.
struct SuffixRule {
    /// 야후식 접미사 (예: ".DE")
    yahoo: &'static str,
    /// stooq 국가 도메인 접미사 (예: ".de")
    stooq: &'static str,
    /// 파생 거래소
    exchange: Exchange,
}

const SUFFIX_RULES: &[SuffixRule] = &[
    SuffixRule { yahoo: ".DE", stooq: ".de", exchange: Exchange::Xetra },
    SuffixRule { yahoo: ".PA", stooq: ".fr", exchange: Exchange::Paris },
    SuffixRule { yahoo: ".SW", stooq: ".sw", exchange: Exchange::Zurich },
    SuffixRule { yahoo: ".L", stooq: ".uk", exchange: Exchange::London },
    SuffixRule { yahoo: ".AS", stooq: ".nl", exchange: Exchange::Amsterdam },
    SuffixRule { yahoo: ".MC", stooq: ".es", exchange: Exchange::Madrid },
    SuffixRule { yahoo: ".MI", stooq: ".it", exchange: Exchange::Milan },
    SuffixRule { yahoo: ".ST", stooq: ".se", exchange: Exchange::Stockholm },
    SuffixRule { yahoo: ".CO", stooq: ".dk", exchange: Exchange::Copenhagen },
    SuffixRule { yahoo: ".OL", stooq: ".no", exchange: Exchange::Oslo },
    SuffixRule { yahoo: ".HE", stooq: ".fi", exchange: Exchange::Helsinki },
    SuffixRule { yahoo: ".BR", stooq: ".be", exchange: Exchange::Brussels },
    SuffixRule { yahoo: ".VI", stooq: ".at", exchange: Exchange::Vienna },
];

/// 접미사 테이블 기반 심볼 변환기.
#[derive(Debug, Default)]
pub struct SymbolTranslator;

impl SymbolTranslator {
    /// 새 변환기를 생성합니다.
    pub fn new() -> Self {
        Self
    }

    /// 매칭되는 접미사 규칙을 찾습니다. 가장 긴 접미사가 우선합니다.
    fn matching_rule(&self, symbol: &str) -> Option<&'static SuffixRule> {
        SUFFIX_RULES
            .iter()
            .filter(|rule| symbol.ends_with(rule.yahoo))
            .max_by_key(|rule| rule.yahoo.len())
    }

    /// 야후식 티커를 stooq 심볼로 변환합니다.
    ///
    /// 접미사를 국가 도메인으로 바꾸고 본체는 소문자로, `-`는 `_`로
    /// 바꿉니다 (예: `VOLV-B.ST` → `volv_b.se`). 매칭되는 접미사가
    /// 없으면 소문자로만 바꿔 그대로 통과시킵니다.
    pub fn to_provider_symbol(&self, symbol: &str) -> String {
        match self.matching_rule(symbol) {
            Some(rule) => {
                let base = symbol[..symbol.len() - rule.yahoo.len()]
                    .to_lowercase()
                    .replace('-', "_");
                format!("{}{}", base, rule.stooq)
            }
            None => symbol.to_lowercase(),
        }
    }

    /// 접미사에서 거래소를 파생합니다. 매칭 실패 시 `Unknown`입니다.
    pub fn exchange_for(&self, symbol: &str) -> Exchange {
        self.matching_rule(symbol)
            .map(|rule| rule.exchange)
            .unwrap_or(Exchange::Unknown)
    }

    /// 표시 이름을 파생합니다 (알려진 접미사 제거).
    pub fn display_name(&self, symbol: &str) -> String {
        match self.matching_rule(symbol) {
            Some(rule) => symbol[..symbol.len() - rule.yahoo.len()].to_string(),
            None => symbol.to_string(),
        }
    }

    /// 유니버스 전체에 대해 변환이 단사인지 검증합니다.
    ///
    /// 서로 다른 두 심볼이 같은 공급자 심볼로 변환되면 잘못된 종목을
    /// 조회하게 되므로, 조용히 허용하지 않고 설정 결함으로 보고합니다.
    pub fn ensure_injective(&self, universe: &Universe) -> Result<()> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for symbol in universe.iter() {
            let provider = self.to_provider_symbol(symbol);
            if let Some(existing) = seen.insert(provider.clone(), symbol) {
                return Err(DataError::Config(format!(
                    "symbol translation collision: {existing} and {symbol} both map to {provider}"
                )));
            }
        }
        Ok(())
    }
}
