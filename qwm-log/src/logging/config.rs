//! 로깅 설정 관리
//!
//! 로거 생성 파라미터(레벨, 파일 경로, 최대 크기)를 정의하고 환경변수에서 읽어옵니다.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error_handling::{LogError, LogResult};
use crate::logging::formatter::Severity;

/// 기본 최대 로그 파일 크기 (1MB)
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 1024 * 1024;

/// 로거 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// 로그 레벨 (기본값: info)
    pub severity: Severity,

    /// 로그 파일 경로 (파일 레벨에서 필요)
    pub file_path: Option<PathBuf>,

    /// 최대 로그 파일 크기 (바이트 단위, 기본값: 1MB)
    pub max_size_bytes: Option<u64>,

    /// 상위 디렉토리 자동 생성 여부 (기본값: false)
    pub create_parent_dirs: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            severity: Severity::Info,
            file_path: None,
            max_size_bytes: Some(DEFAULT_MAX_SIZE_BYTES),
            create_parent_dirs: false,
        }
    }
}

impl LoggerConfig {
    /// 레벨, 경로, 크기로 설정 생성
    pub fn for_severity<P: Into<PathBuf>>(severity: Severity, path: P, max_size_bytes: u64) -> Self {
        Self {
            severity,
            file_path: Some(path.into()),
            max_size_bytes: Some(max_size_bytes),
            ..Default::default()
        }
    }

    /// 환경변수에서 설정 로드
    ///
    /// - `QWM_LOG_LEVEL`: error | warning | info | none
    /// - `QWM_LOG_FILE`: 로그 파일 경로
    /// - `QWM_LOG_MAX_SIZE`: 최대 크기 (바이트)
    /// - `QWM_LOG_CREATE_DIRS`: true | false
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 조회 함수로 설정 로드 (파싱 실패 값은 기본값 유지)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("QWM_LOG_LEVEL") {
            if let Ok(severity) = val.parse() {
                config.severity = severity;
            }
        }

        if let Some(val) = lookup("QWM_LOG_FILE") {
            if !val.trim().is_empty() {
                config.file_path = Some(PathBuf::from(val.trim()));
            }
        }

        if let Some(val) = lookup("QWM_LOG_MAX_SIZE") {
            if let Ok(size) = val.trim().parse() {
                config.max_size_bytes = Some(size);
            }
        }

        if let Some(val) = lookup("QWM_LOG_CREATE_DIRS") {
            config.create_parent_dirs = val.trim().to_lowercase() == "true";
        }

        config
    }

    /// 설정 유효성 검증
    pub fn validate(&self) -> LogResult<()> {
        if !self.severity.is_file_backed() {
            return Ok(());
        }

        match &self.file_path {
            None => {
                return Err(LogError::InvalidConfig(format!(
                    "{} 레벨은 file_path가 필요합니다",
                    self.severity
                )))
            }
            Some(path) if path.as_os_str().is_empty() => {
                return Err(LogError::InvalidConfig("file_path가 비어 있습니다".to_string()))
            }
            Some(_) => {}
        }

        if self.max_size_bytes == Some(0) {
            return Err(LogError::InvalidConfig(
                "max_size_bytes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
