//! 정적 참조 테이블.
//!
//! 심볼 → {표시 이름, 거래소, 섹터, 공급자 심볼} 조회 테이블입니다.
//! 실행 시작 시 한 번 만들어지며 이후 읽기 전용입니다. 유니버스의
//! 심볼이 테이블에 없으면 데이터 결함이 아니라 설정 결함입니다 —
//! 그 판정은 엔진이 내립니다.

use std::collections::HashMap;

use screener_core::types::Exchange;
use serde::{Deserialize, Serialize};

use crate::translator::SymbolTranslator;
use crate::universe::Universe;

/// 심볼 하나의 참조 정보.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// 표시 이름 (예: SAP)
    pub display_name: String,
    /// 거래소
    pub exchange: Exchange,
    /// 섹터 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    /// 시세 소스가 요구하는 심볼 (예: sap.de)
    pub provider_symbol: String,
}

/// 심볼 → 참조 정보 조회 테이블.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceTable {
    entries: HashMap<String, ReferenceEntry>,
}

impl ReferenceTable {
    /// 빈 테이블을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 유니버스와 변환기로 기본 테이블을 만듭니다.
    ///
    /// 표시 이름은 접미사를 제거한 티커이고 섹터는 비워 둡니다.
    /// 유니버스의 모든 심볼에 대해 정확히 하나의 항목이 생깁니다.
    pub fn from_universe(universe: &Universe, translator: &SymbolTranslator) -> Self {
        let entries = universe
            .iter()
            .map(|symbol| {
                let entry = ReferenceEntry {
                    display_name: translator.display_name(symbol),
                    exchange: translator.exchange_for(symbol),
                    sector: None,
                    provider_symbol: translator.to_provider_symbol(symbol),
                };
                (symbol.to_string(), entry)
            })
            .collect();
        Self { entries }
    }

    /// 항목을 추가하거나 교체합니다.
    pub fn insert(&mut self, symbol: impl Into<String>, entry: ReferenceEntry) {
        self.entries.insert(symbol.into(), entry);
    }

    /// 심볼의 참조 정보를 조회합니다.
    pub fn get(&self, symbol: &str) -> Option<&ReferenceEntry> {
        self.entries.get(symbol)
    }

    /// 항목 개수를 반환합니다.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 테이블이 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_universe_covers_every_symbol() {
        let universe = Universe::european();
        let table = ReferenceTable::from_universe(&universe, &SymbolTranslator::new());
        assert_eq!(table.len(), universe.len());
        for symbol in universe.iter() {
            assert!(table.get(symbol).is_some(), "missing entry: {symbol}");
        }
    }

    #[test]
    fn test_derived_entry_fields() {
        let universe = Universe::new(vec!["NOVO-B.CO".to_string()]);
        let table = ReferenceTable::from_universe(&universe, &SymbolTranslator::new());

        let entry = table.get("NOVO-B.CO").unwrap();
        assert_eq!(entry.display_name, "NOVO-B");
        assert_eq!(entry.exchange, Exchange::Copenhagen);
        assert_eq!(entry.provider_symbol, "novo_b.dk");
        assert!(entry.sector.is_none());
    }

    #[test]
    fn test_lookup_miss() {
        let table = ReferenceTable::new();
        assert!(table.get("SAP.DE").is_none());
    }

    #[test]
    fn test_insert_overrides_sector() {
        let universe = Universe::new(vec!["SAP.DE".to_string()]);
        let mut table = ReferenceTable::from_universe(&universe, &SymbolTranslator::new());

        let mut entry = table.get("SAP.DE").unwrap().clone();
        entry.sector = Some("Technology".to_string());
        table.insert("SAP.DE", entry);

        assert_eq!(
            table.get("SAP.DE").unwrap().sector.as_deref(),
            Some("Technology")
        );
    }
}
