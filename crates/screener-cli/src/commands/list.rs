//! `list` 명령어: 유니버스와 심볼 변환 결과 출력.

use screener_data::{SymbolTranslator, Universe};

use super::load_config;

/// 유니버스 심볼 목록을 표 형식으로 출력합니다.
pub fn execute(config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let universe = match &config.universe {
        Some(symbols) => Universe::new(symbols.clone()),
        None => Universe::european(),
    };
    let translator = SymbolTranslator::new();

    println!("{:<12} {:<12} {:<12} {}", "Ticker", "Stooq", "Börse", "Währung");
    println!("{}", "-".repeat(48));
    for symbol in universe.iter() {
        let exchange = translator.exchange_for(symbol);
        println!(
            "{:<12} {:<12} {:<12} {}",
            symbol,
            translator.to_provider_symbol(symbol),
            exchange.label(),
            exchange.currency().code(),
        );
    }
    println!("\n{} Symbole insgesamt", universe.len());

    Ok(())
}
