//! 로깅 데모
//!
//! 환경 설정으로 라우터를 만들고 메시지를 기록합니다.
//!
//! 환경변수:
//! - QWM_LOG_LEVEL: 로그 레벨 (기본값: "info")
//! - QWM_LOG_FILE: 로그 파일 경로 (error/warning 레벨에서 필요)
//! - QWM_LOG_MAX_SIZE: 최대 파일 크기 (기본값: 1048576)
//! - QWM_LOG_CREATE_DIRS: 상위 디렉토리 생성 여부 (기본값: "false")
//! - QWM_LOG_DEMO_COUNT: 기록할 메시지 수 (기본값: 10)

use anyhow::{Context, Result};
use qwm_log::logging::{LogRouter, LoggerConfig};
use tracing::info;

fn main() -> Result<()> {
    // .env 파일이 없어도 계속 진행
    let _ = dotenv::dotenv();

    // 로깅 설정
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = LoggerConfig::from_env();
    config.validate().context("로깅 설정 유효성 검증 실패")?;

    let count: usize = std::env::var("QWM_LOG_DEMO_COUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    info!(
        severity = %config.severity,
        file = ?config.file_path,
        max_size = ?config.max_size_bytes,
        "=== 로깅 데모 시작 ==="
    );

    let mut router = LogRouter::from_config(&config);
    for i in 1..=count {
        router.log(&format!("demo message #{i}"));
    }

    info!(sink = ?router.sink_kind(), count, "=== 로깅 데모 종료 ===");
    Ok(())
}
