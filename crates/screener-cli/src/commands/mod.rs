//! CLI 명령어 구현 모듈.

pub mod list;
pub mod run;

pub(crate) use shared::load_config;

mod shared {
    use anyhow::Context;
    use screener_core::config::ScreenerConfig;

    /// 설정을 로드합니다.
    ///
    /// 경로가 주어지면 해당 파일(+환경 변수)을, 없으면 환경 변수만
    /// 읽습니다. 환경 변수도 없으면 전부 기본값입니다.
    pub fn load_config(path: Option<&str>) -> anyhow::Result<ScreenerConfig> {
        match path {
            Some(path) => ScreenerConfig::load(path)
                .with_context(|| format!("failed to load config from {path}")),
            None => ScreenerConfig::from_env().context("failed to load config from environment"),
        }
    }
}
