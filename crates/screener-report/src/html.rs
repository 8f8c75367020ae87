//! HTML 리포트 렌더러.
//!
//! 다크 테마 대시보드 한 장을 생성합니다: 요약 카드 4개(최대 상승,
//! 최대 하락, 시장 폭, 평균 변동률)와 탭 4개(상승/하락/이상 거래량/
//! 전체). 각 탭은 동일한 6컬럼 테이블이고, 거래량 비율 셀에는 3배
//! 이상이면 🔥, 2배 이상이면 ↑ 배지가 붙습니다.

use std::path::Path;

use chrono::{DateTime, Local, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use screener_core::config::ReportConfig;
use screener_core::domain::{ScreenerPanel, ScreenerRecord};
use screener_core::{ScreenerError, ScreenerResult};
use tracing::info;

/// 거래량 배지 "🔥 Hoch" 기준 비율.
const HOT_VOLUME_RATIO: Decimal = dec!(3);
/// 거래량 배지 "↑ Erhöht" 기준 비율.
const ELEVATED_VOLUME_RATIO: Decimal = dec!(2);

/// 패널 → HTML 문서 렌더러.
#[derive(Debug, Clone)]
pub struct HtmlReport {
    top_limit: usize,
    volume_threshold: Decimal,
}

impl HtmlReport {
    /// 리포트 설정으로 렌더러를 생성합니다.
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            top_limit: config.top_limit,
            volume_threshold: config.volume_threshold,
        }
    }

    /// 패널을 완성된 HTML 문서로 렌더링합니다.
    ///
    /// 빈 패널은 렌더링 대상이 아닙니다 — 엔진이 이미 걸러냈어야
    /// 하므로 여기서는 [`ScreenerError::Render`]로 보고합니다.
    pub fn render(
        &self,
        panel: &ScreenerPanel,
        trade_date: NaiveDate,
        generated_at: DateTime<Local>,
    ) -> ScreenerResult<String> {
        let summary = panel
            .summary()
            .ok_or_else(|| ScreenerError::Render("cannot render an empty panel".to_string()))?;

        let gainers = panel.gainers(self.top_limit);
        let losers = panel.losers(self.top_limit);
        let anomalies = panel.volume_anomalies(self.volume_threshold, self.top_limit);

        let date_str = trade_date.format("%Y-%m-%d").to_string();
        let generated_str = generated_at.format("%Y-%m-%d %H:%M %Z").to_string();

        let mean = summary.mean_percent_change;
        let mean_sign = if mean >= Decimal::ZERO { "+" } else { "" };

        let html = format!(
            r#"<!DOCTYPE html>
<html lang="de">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>European EOD Screener – {date_str}</title>
<style>
{STYLE}
</style>
</head>
<body>
<div class="header">
  <div class="header-top">
    <div class="brand">
      <div class="brand-icon">🇪🇺</div>
      <div>
        <h1>European EOD Screener</h1>
        <div class="subtitle">End of Day · Swing Trading</div>
      </div>
    </div>
    <div class="date-badge">📅 {date_str}</div>
  </div>
  <div class="stats-bar">
    <div class="stat-card up">
      <div class="stat-label">Top Gainer</div>
      <div class="stat-value up">+{top_pct:.1}%</div>
      <div class="stat-sub">{top_name}</div>
    </div>
    <div class="stat-card down">
      <div class="stat-label">Top Loser</div>
      <div class="stat-value down">{bottom_pct:.1}%</div>
      <div class="stat-sub">{bottom_name}</div>
    </div>
    <div class="stat-card neutral">
      <div class="stat-label">Markt-Breite</div>
      <div class="stat-value neutral">{positive}/{total}</div>
      <div class="stat-sub">Aktien im Plus</div>
    </div>
    <div class="stat-card volume">
      <div class="stat-label">Ø Tagesveränderung</div>
      <div class="stat-value volume">{mean_sign}{mean:.2}%</div>
      <div class="stat-sub">{total} Aktien analysiert</div>
    </div>
  </div>
</div>
<div class="main">
  <div class="search-bar">
    <span class="search-icon">🔍</span>
    <input id="searchInput" type="text" placeholder="Ticker oder Name filtern…" oninput="filterTable()">
  </div>
  <div class="tabs">
    <div class="tab active"  onclick="showTab('gainers',event)">📈 Top Gainer</div>
    <div class="tab"         onclick="showTab('losers',event)">📉 Top Loser</div>
    <div class="tab"         onclick="showTab('volume',event)">🔥 Volumen-Anomalien</div>
    <div class="tab"         onclick="showTab('all',event)">📋 Alle Aktien</div>
  </div>
  {gainers_table}
  {losers_table}
  {volume_table}
  {all_table}
</div>
<div class="footer">
  <div>Daten: stooq.com · Kein Anlageberatungsersatz · Nur zur Information</div>
  <div>Automatisch generiert am {generated_str}</div>
</div>
<script>
{SCRIPT}
</script>
</body>
</html>"#,
            top_pct = summary.top.percent_change,
            top_name = escape_html(&summary.top.display_name),
            bottom_pct = summary.bottom.percent_change,
            bottom_name = escape_html(&summary.bottom.display_name),
            positive = summary.positive_count,
            total = summary.count,
            gainers_table = table_section(
                "gainers",
                true,
                "📈 Top Gainer",
                "Stärkste Aufwärtsbewegungen heute",
                &gainers,
            ),
            losers_table = table_section(
                "losers",
                false,
                "📉 Top Loser",
                "Stärkste Abwärtsbewegungen heute",
                &losers,
            ),
            volume_table = table_section(
                "volume",
                false,
                "🔥 Volumen-Anomalien",
                "Volumen &gt; 2× 20-Tage-Durchschnitt",
                &anomalies,
            ),
            all_table = table_section(
                "all",
                false,
                "📋 Alle Aktien",
                "Sortierbar per Klick · nach % Change",
                &panel.records().iter().collect::<Vec<_>>(),
            ),
        );

        Ok(html)
    }
}

/// 탭 패널 하나를 렌더링합니다 (헤더 + 6컬럼 테이블).
fn table_section(
    id: &str,
    active: bool,
    title: &str,
    subtitle: &str,
    records: &[&ScreenerRecord],
) -> String {
    let active_class = if active { " active" } else { "" };
    format!(
        r#"<div id="tab-{id}" class="tab-panel{active_class}">
    <div class="table-wrap">
      <div class="table-header">
        <div class="table-title">{title} <span class="count-badge">{count}</span></div>
        <div class="table-sub">{subtitle}</div>
      </div>
      <table><thead><tr>
        <th onclick="sortTable(this)">Ticker</th><th onclick="sortTable(this)">Name</th>
        <th onclick="sortTable(this)">Börse</th><th onclick="sortTable(this)" class="num">Kurs</th>
        <th onclick="sortTable(this)" class="num">% Change</th>
        <th onclick="sortTable(this)" class="num">Vol. Ratio</th>
      </tr></thead><tbody>{rows}</tbody></table>
    </div>
  </div>"#,
        count = records.len(),
        rows = rows_html(records),
    )
}

/// 레코드 목록을 `<tr>` 행으로 렌더링합니다.
fn rows_html(records: &[&ScreenerRecord]) -> String {
    let mut html = String::new();
    for record in records {
        let pct = record.percent_change;
        let (color_class, arrow) = if pct >= Decimal::ZERO {
            ("pos", "▲")
        } else {
            ("neg", "▼")
        };
        let badge = if record.volume_ratio >= HOT_VOLUME_RATIO {
            r#" <span class="badge badge-hot">🔥 Hoch</span>"#
        } else if record.volume_ratio >= ELEVATED_VOLUME_RATIO {
            r#" <span class="badge badge-watch">↑ Erhöht</span>"#
        } else {
            ""
        };

        html.push_str(&format!(
            r#"
        <tr>
            <td><span class="ticker-tag">{ticker}</span></td>
            <td class="name-cell">{name}</td>
            <td><span class="exchange-badge">{exchange}</span></td>
            <td class="num">{close:.2} <span class="currency">{currency}</span></td>
            <td class="num {color_class} bold">{arrow} {abs_pct:.2}%</td>
            <td class="num">{ratio:.1}x{badge}</td>
        </tr>"#,
            ticker = escape_html(&record.symbol),
            name = escape_html(&record.display_name),
            exchange = record.exchange.label(),
            close = record.last_close,
            currency = record.currency.code(),
            abs_pct = pct.abs(),
            ratio = record.volume_ratio,
        ));
    }
    html
}

/// HTML 특수문자를 이스케이프합니다.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// 렌더링된 HTML을 파일로 씁니다. 상위 디렉터리가 없으면 만듭니다.
pub fn write_report(path: &Path, html: &str) -> ScreenerResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    info!(path = %path.display(), bytes = html.len(), "Report written");
    Ok(())
}

const STYLE: &str = r#"  :root {
    --bg:#0a0c0f; --surface:#111318; --surface2:#171b22;
    --border:#1e2430; --border2:#252d3a;
    --text:#e2e8f0; --text-dim:#64748b;
    --green:#22c55e; --red:#ef4444; --gold:#f59e0b; --blue:#3b82f6;
  }
  * { margin:0; padding:0; box-sizing:border-box; }
  body { background:var(--bg); color:var(--text); font-family:"Space Mono",ui-monospace,monospace; font-size:13px; }
  .header { padding:24px 32px; border-bottom:1px solid var(--border); }
  .header-top { display:flex; justify-content:space-between; align-items:center; }
  .brand { display:flex; align-items:center; gap:12px; }
  .brand-icon { font-size:28px; }
  h1 { font-size:20px; font-weight:700; }
  .subtitle { font-size:11px; color:var(--text-dim); letter-spacing:2px; text-transform:uppercase; margin-top:2px; }
  .date-badge { background:var(--surface2); border:1px solid var(--border2); border-radius:6px; padding:8px 16px; font-size:12px; color:var(--text-dim); letter-spacing:1px; }
  .stats-bar { display:grid; grid-template-columns:repeat(4,1fr); gap:12px; margin-top:20px; }
  .stat-card { background:var(--surface); border:1px solid var(--border); border-radius:8px; padding:14px 16px; }
  .stat-label { font-size:10px; color:var(--text-dim); letter-spacing:1px; text-transform:uppercase; }
  .stat-value { font-size:22px; font-weight:700; margin-top:4px; }
  .stat-value.up { color:var(--green); }
  .stat-value.down { color:var(--red); }
  .stat-value.volume { color:var(--gold); }
  .stat-sub { font-size:11px; color:var(--text-dim); margin-top:2px; }
  .main { padding:24px 32px; }
  .search-bar { display:flex; align-items:center; gap:8px; background:var(--surface); border:1px solid var(--border); border-radius:8px; padding:8px 14px; margin-bottom:16px; }
  .search-bar input { flex:1; background:none; border:none; outline:none; color:var(--text); font:inherit; }
  .tabs { display:flex; gap:4px; margin-bottom:16px; }
  .tab { padding:8px 16px; border:1px solid var(--border); border-radius:6px; cursor:pointer; color:var(--text-dim); }
  .tab.active { background:var(--surface2); color:var(--text); border-color:var(--border2); }
  .tab-panel { display:none; }
  .tab-panel.active { display:block; }
  .table-wrap { background:var(--surface); border:1px solid var(--border); border-radius:8px; overflow:hidden; }
  .table-header { display:flex; justify-content:space-between; align-items:center; padding:12px 16px; border-bottom:1px solid var(--border); }
  .table-title { font-size:14px; font-weight:700; display:flex; align-items:center; gap:8px; }
  .table-sub { font-size:11px; color:var(--text-dim); }
  .count-badge { background:var(--surface2); border:1px solid var(--border2); border-radius:20px; padding:2px 10px; font-size:11px; color:var(--text-dim); }
  table { width:100%; border-collapse:collapse; }
  th { text-align:left; padding:10px 16px; font-size:10px; color:var(--text-dim); letter-spacing:1px; text-transform:uppercase; cursor:pointer; border-bottom:1px solid var(--border); }
  td { padding:10px 16px; border-bottom:1px solid var(--border); }
  .num { text-align:right; }
  .pos { color:var(--green); }
  .neg { color:var(--red); }
  .bold { font-weight:700; }
  .ticker-tag { background:var(--surface2); border:1px solid var(--border2); border-radius:4px; padding:2px 8px; font-size:11px; }
  .name-cell { color:var(--text); }
  .exchange-badge { background:var(--surface2); border:1px solid var(--border2); border-radius:4px; padding:2px 8px; font-size:10px; color:var(--text-dim); white-space:nowrap; }
  .currency { font-size:10px; color:var(--text-dim); }
  .badge { border-radius:4px; padding:1px 6px; font-size:10px; margin-left:6px; }
  .badge-hot { background:rgba(239,68,68,.15); color:var(--red); border:1px solid rgba(239,68,68,.2); }
  .badge-watch { background:rgba(245,158,11,.12); color:var(--gold); border:1px solid rgba(245,158,11,.2); }
  .footer { display:flex; justify-content:space-between; padding:16px 32px; border-top:1px solid var(--border); font-size:11px; color:var(--text-dim); }"#;

const SCRIPT: &str = r#"function showTab(name,e){
  document.querySelectorAll('.tab-panel').forEach(p=>p.classList.remove('active'));
  document.querySelectorAll('.tab').forEach(t=>t.classList.remove('active'));
  document.getElementById('tab-'+name).classList.add('active');
  e.target.classList.add('active');
}
function filterTable(){
  const q=document.getElementById('searchInput').value.toLowerCase();
  document.querySelectorAll('.tab-panel tbody tr').forEach(row=>{
    row.style.display=row.textContent.toLowerCase().includes(q)?'':'none';
  });
}
function sortTable(th){
  const table=th.closest('table');
  const tbody=table.querySelector('tbody');
  const idx=[...th.parentElement.children].indexOf(th);
  const asc=th.dataset.sort!=='asc';
  th.parentElement.querySelectorAll('th').forEach(t=>delete t.dataset.sort);
  th.dataset.sort=asc?'asc':'desc';
  const rows=[...tbody.querySelectorAll('tr')];
  rows.sort((a,b)=>{
    const av=a.cells[idx].textContent.replace(/[^0-9.\-]/g,'')||a.cells[idx].textContent;
    const bv=b.cells[idx].textContent.replace(/[^0-9.\-]/g,'')||b.cells[idx].textContent;
    const an=parseFloat(av),bn=parseFloat(bv);
    if(!isNaN(an)&&!isNaN(bn)) return asc?an-bn:bn-an;
    return asc?av.localeCompare(bv):bv.localeCompare(av);
  });
  rows.forEach(r=>tbody.appendChild(r));
}"#;
