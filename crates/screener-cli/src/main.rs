//! 유럽 주식 EOD 스크리너 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 기본 유니버스로 스크리닝 실행 후 docs/index.html 생성
//! screener run
//!
//! # 설정 파일과 출력 경로 지정
//! screener run -c config/default.toml -o out/report.html
//!
//! # 특정 거래일 기준으로 실행
//! screener run --date 2026-08-21
//!
//! # 유니버스 목록 보기
//! screener list
//! ```

use clap::{Parser, Subcommand};
use tracing::error;

mod commands;

#[derive(Parser)]
#[command(name = "screener")]
#[command(about = "European equity EOD screener - stooq.com 기반 일일 스크리닝", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 스크리닝 실행 및 HTML 리포트 생성
    Run {
        /// 설정 파일 (TOML, 미지정 시 기본값 + 환경 변수)
        #[arg(short, long)]
        config: Option<String>,

        /// 출력 파일 경로 (설정의 report.output_path 재정의)
        #[arg(short, long)]
        output: Option<String>,

        /// 기준 거래일 (YYYY-MM-DD, 기본: 오늘)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// 유니버스 심볼 목록 보기
    List {
        /// 설정 파일 (TOML, 미지정 시 기본 유니버스)
        #[arg(short, long)]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            output,
            date,
        } => commands::run::execute(config.as_deref(), output.as_deref(), date.as_deref()).await,
        Commands::List { config } => commands::list::execute(config.as_deref()),
    };

    if let Err(ref err) = result {
        error!(%err, "Command failed");
    }
    result
}
