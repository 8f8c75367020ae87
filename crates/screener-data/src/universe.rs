//! 스크리너 유니버스.
//!
//! 실행 한 번이 처리하는 고정 심볼 목록입니다. 목록의 순서가 곧
//! 처리 순서이며, 변동률이 같은 종목의 타이브레이크 기준이 됩니다.

use serde::{Deserialize, Serialize};

/// 기본 유럽 유니버스 (야후식 티커).
const EUROPEAN_TICKERS: &[&str] = &[
    // 독일
    "SAP.DE", "SIE.DE", "ALV.DE", "MRK.DE", "DTE.DE", "BAYN.DE", "BMW.DE",
    "MBG.DE", "VOW3.DE", "BAS.DE", "RWE.DE", "EON.DE", "DBK.DE", "CBK.DE",
    "ADS.DE", "IFX.DE", "HEN3.DE", "MUV2.DE", "MTX.DE",
    // 프랑스
    "MC.PA", "OR.PA", "TTE.PA", "SAN.PA", "AIR.PA", "BNP.PA", "AXA.PA",
    "SU.PA", "RI.PA", "SGO.PA", "KER.PA", "STM.PA", "VIV.PA", "ENGI.PA",
    "LR.PA", "RNO.PA", "ORA.PA",
    // 스위스
    "NESN.SW", "NOVN.SW", "ZURN.SW", "SIKA.SW", "LONN.SW", "CFR.SW", "HOLN.SW",
    // 영국
    "HSBA.L", "SHEL.L", "AZN.L", "ULVR.L", "BP.L", "GSK.L", "RIO.L",
    "VOD.L", "REL.L", "NG.L", "BARC.L", "LLOY.L", "NWG.L", "PRU.L",
    // 네덜란드
    "ASML.AS", "HEIA.AS", "PHIA.AS", "ING.AS", "AD.AS",
    // 스페인
    "ITX.MC", "BBVA.MC", "SAN.MC", "IBE.MC", "REP.MC", "TEF.MC",
    // 이탈리아
    "ENI.MI", "ENEL.MI", "UCG.MI", "RACE.MI",
    // 스웨덴
    "VOLV-B.ST", "ERIC-B.ST", "HM-B.ST", "SAND.ST",
    // 덴마크
    "NOVO-B.CO", "DSV.CO",
    // 노르웨이
    "EQNR.OL", "DNB.OL",
    // 핀란드
    "NOKIA.HE",
    // 벨기에
    "UCB.BR", "ABI.BR",
    // 오스트리아
    "OMV.VI", "ERSTE.VI",
];

/// 순서가 있는 심볼 유니버스.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Universe {
    symbols: Vec<String>,
}

impl Universe {
    /// 심볼 목록으로 유니버스를 생성합니다. 순서가 보존됩니다.
    pub fn new(symbols: Vec<String>) -> Self {
        Self { symbols }
    }

    /// 기본 유럽 유니버스를 반환합니다.
    pub fn european() -> Self {
        Self {
            symbols: EUROPEAN_TICKERS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// 심볼 목록을 순서대로 반환합니다.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// 심볼 개수를 반환합니다.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// 유니버스가 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// 심볼을 순서대로 순회합니다.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(|s| s.as_str())
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::european()
    }
}
