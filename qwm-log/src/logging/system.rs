//! 로그 라우터
//!
//! 로그 레벨에 따라 싱크를 선택해 소유하고, `log` 호출을 전달합니다.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::logging::{
    config::{LoggerConfig, DEFAULT_MAX_SIZE_BYTES},
    formatter::Severity,
    rotation::{RotatingFileSink, RotationOptions},
    writer::{ConsoleSink, LogSink, NullSink, SinkKind},
};

/// 오류 로그 파일 이름
pub const ERROR_LOG_FILE: &str = "error.log";

/// 경고 로그 파일 이름
pub const WARNING_LOG_FILE: &str = "warning.log";

/// 레벨별 싱크 라우터
///
/// 생성 시점에 싱크 하나를 선택해 소유합니다.
/// - `Error`, `Warning` → 순환 파일 싱크
/// - `Info` → 콘솔 싱크 (경로/크기 무시)
/// - 그 외 → 무시 싱크
///
/// 생성은 실패하지 않습니다. 빈 경로도 허용되며 이 경우 기록이 조용히 무시됩니다.
pub struct LogRouter {
    level: Severity,
    sink: Box<dyn LogSink>,
}

impl LogRouter {
    /// 새 라우터 생성 (경로 없음 → 빈 경로, 크기 없음 → 0)
    pub fn new(level: Severity, file_path: Option<PathBuf>, max_size_bytes: Option<u64>) -> Self {
        Self::build(
            level,
            file_path,
            max_size_bytes,
            RotationOptions::default(),
        )
    }

    /// 설정에서 라우터 생성
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::build(
            config.severity,
            config.file_path.clone(),
            config.max_size_bytes,
            RotationOptions {
                create_parent_dirs: config.create_parent_dirs,
            },
        )
    }

    /// 지정된 싱크로 라우터 생성
    pub fn with_sink(level: Severity, sink: Box<dyn LogSink>) -> Self {
        Self { level, sink }
    }

    fn build(
        level: Severity,
        file_path: Option<PathBuf>,
        max_size_bytes: Option<u64>,
        options: RotationOptions,
    ) -> Self {
        let sink: Box<dyn LogSink> = match level {
            Severity::Error | Severity::Warning => Box::new(RotatingFileSink::with_options(
                file_path.unwrap_or_default(),
                max_size_bytes.unwrap_or(0),
                options,
            )),
            Severity::Info => Box::new(ConsoleSink::new()),
            Severity::None => Box::new(NullSink),
        };

        debug!(level = %level, sink = ?sink.kind(), "로그 싱크 선택됨");

        Self { level, sink }
    }

    /// 메시지 기록
    pub fn log(&mut self, message: &str) {
        self.sink.log(message);
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn sink_kind(&self) -> SinkKind {
        self.sink.kind()
    }
}

/// 표준 로거 묶음
///
/// `error.log`(1MB), `warning.log`(1MB), 콘솔 라우터를 한 번만 생성해 재사용합니다.
/// 호출마다 파일을 여닫지 않으며 출력 형식은 동일합니다.
pub struct StandardLoggers {
    pub error: LogRouter,
    pub warning: LogRouter,
    pub info: LogRouter,
}

impl StandardLoggers {
    /// 현재 디렉토리 기준 표준 로거 생성
    pub fn new() -> Self {
        Self::in_dir("")
    }

    /// 지정된 디렉토리에 표준 로거 생성
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            error: LogRouter::new(
                Severity::Error,
                Some(dir.join(ERROR_LOG_FILE)),
                Some(DEFAULT_MAX_SIZE_BYTES),
            ),
            warning: LogRouter::new(
                Severity::Warning,
                Some(dir.join(WARNING_LOG_FILE)),
                Some(DEFAULT_MAX_SIZE_BYTES),
            ),
            info: LogRouter::new(Severity::Info, None, None),
        }
    }

    pub fn error(&mut self, message: &str) {
        self.error.log(message);
    }

    pub fn warning(&mut self, message: &str) {
        self.warning.log(message);
    }

    pub fn info(&mut self, message: &str) {
        self.info.log(message);
    }
}

impl Default for StandardLoggers {
    fn default() -> Self {
        Self::new()
    }
}

/// 오류 로그 기록 (`format!` 인자 지원)
#[macro_export]
macro_rules! log_error {
    ($loggers:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $loggers.error(&__msg);
    }};
}

/// 경고 로그 기록 (`format!` 인자 지원)
#[macro_export]
macro_rules! log_warning {
    ($loggers:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $loggers.warning(&__msg);
    }};
}

/// 정보 로그 기록 (`format!` 인자 지원)
#[macro_export]
macro_rules! log_info {
    ($loggers:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $loggers.info(&__msg);
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_sink_selection() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.log");

        let cases = [
            (Severity::Error, SinkKind::File),
            (Severity::Warning, SinkKind::File),
            (Severity::Info, SinkKind::Console),
            (Severity::None, SinkKind::Null),
        ];

        for (level, kind) in cases {
            let router = LogRouter::new(level, Some(path.clone()), Some(1024));
            assert_eq!(router.level(), level);
            assert_eq!(router.sink_kind(), kind, "{level} 레벨 싱크 불일치");
        }
    }

    #[test]
    fn test_info_router_ignores_file_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("info.log");

        let mut router = LogRouter::new(Severity::Info, Some(path.clone()), Some(1));
        router.log("console only");

        assert!(!path.exists());
    }

    #[test]
    fn test_none_router_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("none.log");

        let mut router = LogRouter::new(Severity::None, Some(path.clone()), Some(1));
        router.log("ignored");

        assert!(!path.exists());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_file_router_without_path_never_fails() {
        let mut router = LogRouter::new(Severity::Error, None, None);
        router.log("no path configured");
        assert_eq!(router.sink_kind(), SinkKind::File);
    }

    #[test]
    fn test_from_config_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("error.log");
        let config = LoggerConfig {
            create_parent_dirs: true,
            ..LoggerConfig::for_severity(Severity::Error, &path, 1024)
        };

        let mut router = LogRouter::from_config(&config);
        router.log("disk failure");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("] disk failure\n"));
    }

    #[test]
    fn test_with_sink() {
        let mut router = LogRouter::with_sink(Severity::Warning, Box::new(NullSink));
        router.log("custom sink");
        assert_eq!(router.level(), Severity::Warning);
        assert_eq!(router.sink_kind(), SinkKind::Null);
    }

    #[test]
    fn test_standard_loggers_in_dir() {
        let temp_dir = TempDir::new().unwrap();
        let mut loggers = StandardLoggers::in_dir(temp_dir.path());

        loggers.error("db connection lost");
        log_warning!(loggers, "retrying in {}s", 5);
        log_info!(loggers, "started");

        let errors = fs::read_to_string(temp_dir.path().join(ERROR_LOG_FILE)).unwrap();
        let warnings = fs::read_to_string(temp_dir.path().join(WARNING_LOG_FILE)).unwrap();
        assert!(errors.ends_with("] db connection lost\n"));
        assert!(warnings.ends_with("] retrying in 5s\n"));
        assert_eq!(loggers.info.sink_kind(), SinkKind::Console);
    }
}
