//! 로깅 시스템
//!
//! 로그 레벨에 따라 파일, 콘솔, 무시 싱크 중 하나로 메시지를 보냅니다.
//!
//! # 주요 기능
//! - **레벨별 싱크 선택**: error/warning은 파일, info는 콘솔, 그 외는 무시
//! - **크기 기반 순환**: 제한 도달 시 `.bak` 백업 한 세대 유지
//! - **즉시 기록**: 레코드마다 플러시, 버퍼링 없음
//! - **실패 무시**: I/O 실패로 호스트 프로그램이 중단되지 않음
//!
//! # 사용 예시
//! ```rust,no_run
//! use qwm_log::logging::{LogRouter, Severity, StandardLoggers};
//!
//! let mut loggers = StandardLoggers::new();
//! loggers.error("연결 실패");
//! qwm_log::log_info!(loggers, "서버 시작: port={}", 4000);
//!
//! let mut router = LogRouter::new(Severity::Warning, Some("warning.log".into()), Some(1024));
//! router.log("디스크 사용량 90%");
//! ```

pub mod config;
pub mod formatter;
pub mod rotation;
pub mod system;
pub mod writer;

pub use config::{LoggerConfig, DEFAULT_MAX_SIZE_BYTES};
pub use formatter::{Severity, TimestampFormatter};
pub use rotation::{backup_path_for, RotatingFileSink, RotationOptions};
pub use system::{LogRouter, StandardLoggers, ERROR_LOG_FILE, WARNING_LOG_FILE};
pub use writer::{ConsoleSink, LogSink, NullSink, SinkKind};
