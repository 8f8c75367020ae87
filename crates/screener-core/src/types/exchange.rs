//! 거래소 및 통화 정의.
//!
//! 이 모듈은 스크리너 유니버스가 다루는 유럽 거래소와
//! 거래소별 표시 통화를 정의합니다:
//! - `Exchange` - 13개 유럽 거래소 + 미확인 거래소 센티널
//! - `Currency` - 거래소에서 파생되는 표시 통화

use serde::{Deserialize, Serialize};
use std::fmt;

/// 유럽 거래소 분류.
///
/// 티커 접미사에서 파생됩니다 (예: `.DE` → XETRA).
/// 접미사가 매핑되지 않은 심볼은 `Unknown`으로 분류되며,
/// 실패가 아니라 표시용 센티널로 처리됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exchange {
    /// 독일 XETRA
    Xetra,
    /// 파리 (Euronext Paris)
    Paris,
    /// 취리히 (SIX Swiss Exchange)
    Zurich,
    /// 런던 (LSE)
    London,
    /// 암스테르담 (Euronext Amsterdam)
    Amsterdam,
    /// 마드리드 (BME)
    Madrid,
    /// 밀라노 (Borsa Italiana)
    Milan,
    /// 스톡홀름 (Nasdaq Stockholm)
    Stockholm,
    /// 코펜하겐 (Nasdaq Copenhagen)
    Copenhagen,
    /// 오슬로 (Oslo Børs)
    Oslo,
    /// 헬싱키 (Nasdaq Helsinki)
    Helsinki,
    /// 브뤼셀 (Euronext Brussels)
    Brussels,
    /// 빈 (Wiener Börse)
    Vienna,
    /// 미확인 거래소 센티널
    Unknown,
}

impl Exchange {
    /// 거래소의 표시 통화를 반환합니다.
    ///
    /// 고정 매핑이며, 매핑되지 않은 거래소는 모두 EUR로 표시합니다.
    pub fn currency(&self) -> Currency {
        match self {
            Exchange::London => Currency::Gbx,
            Exchange::Zurich => Currency::Chf,
            Exchange::Stockholm => Currency::Sek,
            Exchange::Oslo => Currency::Nok,
            Exchange::Copenhagen => Currency::Dkk,
            _ => Currency::Eur,
        }
    }

    /// 리포트에 쓰이는 거래소 라벨을 반환합니다.
    pub fn label(&self) -> &'static str {
        match self {
            Exchange::Xetra => "XETRA",
            Exchange::Paris => "Paris",
            Exchange::Zurich => "Zürich",
            Exchange::London => "London",
            Exchange::Amsterdam => "Amsterdam",
            Exchange::Madrid => "Madrid",
            Exchange::Milan => "Mailand",
            Exchange::Stockholm => "Stockholm",
            Exchange::Copenhagen => "Kopenhagen",
            Exchange::Oslo => "Oslo",
            Exchange::Helsinki => "Helsinki",
            Exchange::Brussels => "Brüssel",
            Exchange::Vienna => "Wien",
            Exchange::Unknown => "–",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 표시 통화.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    /// 유로
    Eur,
    /// 영국 펜스 (GBp)
    Gbx,
    /// 스위스 프랑
    Chf,
    /// 스웨덴 크로나
    Sek,
    /// 노르웨이 크로네
    Nok,
    /// 덴마크 크로네
    Dkk,
}

impl Currency {
    /// 리포트에 쓰이는 통화 코드를 반환합니다.
    ///
    /// 런던 종목은 파운드가 아닌 펜스(GBp)로 호가됩니다.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Gbx => "GBp",
            Currency::Chf => "CHF",
            Currency::Sek => "SEK",
            Currency::Nok => "NOK",
            Currency::Dkk => "DKK",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_mapping() {
        assert_eq!(Exchange::London.currency(), Currency::Gbx);
        assert_eq!(Exchange::Zurich.currency(), Currency::Chf);
        assert_eq!(Exchange::Stockholm.currency(), Currency::Sek);
        assert_eq!(Exchange::Oslo.currency(), Currency::Nok);
        assert_eq!(Exchange::Copenhagen.currency(), Currency::Dkk);

        // 매핑되지 않은 거래소는 모두 EUR
        assert_eq!(Exchange::Xetra.currency(), Currency::Eur);
        assert_eq!(Exchange::Milan.currency(), Currency::Eur);
        assert_eq!(Exchange::Unknown.currency(), Currency::Eur);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Exchange::Xetra.to_string(), "XETRA");
        assert_eq!(Exchange::Unknown.to_string(), "–");
        assert_eq!(Currency::Gbx.to_string(), "GBp");
    }
}
