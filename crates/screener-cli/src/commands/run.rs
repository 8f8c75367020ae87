//! `run` 명령어: 수집 → 엔진 → HTML 리포트.

use std::path::Path;

use anyhow::Context;
use chrono::{Days, Local, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use screener_core::logging::{init_logging, LogConfig, LogFormat};
use screener_core::ScreenerError;
use screener_data::{fetch_universe, ReferenceTable, StooqProvider, SymbolTranslator, Universe};
use screener_engine::ScreenerEngine;
use screener_report::{write_report, HtmlReport};
use tracing::{info, warn};

use super::load_config;

/// 스크리닝 한 사이클을 실행합니다.
pub async fn execute(
    config_path: Option<&str>,
    output: Option<&str>,
    date: Option<&str>,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let log_format: LogFormat = config.logging.format.parse().unwrap_or_default();
    if let Err(err) = init_logging(LogConfig::new(&config.logging.level).with_format(log_format)) {
        eprintln!("logging init failed: {err}");
    }

    let trade_date = match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("invalid date: {raw} (expected YYYY-MM-DD)"))?,
        None => Local::now().date_naive(),
    };
    let from = trade_date
        .checked_sub_days(Days::new(config.fetch.lookback_days.unsigned_abs()))
        .context("lookback window underflows the calendar")?;

    let universe = match &config.universe {
        Some(symbols) => Universe::new(symbols.clone()),
        None => Universe::european(),
    };
    let translator = SymbolTranslator::new();
    translator
        .ensure_injective(&universe)
        .map_err(ScreenerError::from)?;
    let reference = ReferenceTable::from_universe(&universe, &translator);

    info!(symbols = universe.len(), %trade_date, "Screener run started");

    let provider = StooqProvider::new(&config.fetch).map_err(ScreenerError::from)?;

    // 진행률 표시줄
    let pb = ProgressBar::new(universe.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30}] {pos}/{len} {msg}")
            .unwrap(),
    );

    let outcome = fetch_universe(
        &provider,
        &translator,
        &universe,
        &config.fetch,
        from,
        trade_date,
        |symbol| {
            pb.set_message(symbol.to_string());
            pb.inc(1);
        },
    )
    .await;
    pb.finish_and_clear();

    if outcome.skipped > 0 {
        warn!(skipped = outcome.skipped, "Some symbols had no usable data");
    }

    let engine = ScreenerEngine::new();
    let (panel, skips) = engine
        .build_panel_with_report(&outcome.series, &reference, &universe)
        .map_err(ScreenerError::from)?;

    let report = HtmlReport::new(&config.report);
    let html = report.render(&panel, trade_date, Local::now())?;

    let output_path = output.unwrap_or(&config.report.output_path);
    write_report(Path::new(output_path), &html)?;

    // 수집 단계에서 빠진 심볼은 엔진 제외 내역에도 잡히므로 한 번만 센다
    println!(
        "✅ {} Aktien analysiert, {} übersprungen → {}",
        panel.len(),
        skips.len(),
        output_path
    );
    if let Some(summary) = panel.summary() {
        println!(
            "   Top: {} ({}%) · Flop: {} ({}%)",
            summary.top.display_name,
            summary.top.percent_change,
            summary.bottom.display_name,
            summary.bottom.percent_change,
        );
    }

    Ok(())
}
