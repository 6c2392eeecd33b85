//! 로그 포매터
//!
//! 로그 레벨 정의와 레코드 타임스탬프 형식화를 담당합니다.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error_handling::LogError;

/// 로그 레벨 열거형
///
/// 필터링 임계값이 아니라 싱크 선택에만 사용됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// 오류 상황 (파일 기록)
    Error,
    /// 경고 상황 (파일 기록)
    Warning,
    /// 일반 정보 (콘솔 출력)
    Info,
    /// 기록하지 않음
    None,
}

impl Severity {
    /// 로그 레벨을 문자열로 변환
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::None => "NONE",
        }
    }

    /// 파일 싱크를 사용하는 레벨인지 확인
    pub fn is_file_backed(&self) -> bool {
        matches!(self, Severity::Error | Severity::Warning)
    }

    /// 알 수 없는 문자열은 `Severity::None`으로 처리
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Severity::None)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "none" | "off" => Ok(Severity::None),
            _ => Err(LogError::UnknownSeverity(s.to_string())),
        }
    }
}

/// 타임스탬프 포매터
///
/// 로컬 시간대 기준 `"[YYYY-MM-DD HH:MM:SS] "` 형식의 고정 폭 접두사를 만듭니다.
pub struct TimestampFormatter;

impl TimestampFormatter {
    /// 접두사 형식 (chrono strftime)
    pub const PATTERN: &'static str = "[%Y-%m-%d %H:%M:%S] ";

    /// 접두사 길이 (바이트)
    pub const WIDTH: usize = 22;

    /// 지정된 시각을 접두사로 포매팅
    pub fn format(now: &DateTime<Local>) -> String {
        now.format(Self::PATTERN).to_string()
    }

    /// 현재 시각을 접두사로 포매팅
    pub fn now() -> String {
        Self::format(&Local::now())
    }

    /// 접두사와 메시지로 한 줄 레코드 생성
    ///
    /// 메시지 안의 줄바꿈은 그대로 기록됩니다.
    pub fn format_record(prefix: &str, message: &str) -> String {
        let mut line = String::with_capacity(prefix.len() + message.len() + 1);
        line.push_str(prefix);
        line.push_str(message);
        line.push('\n');
        line
    }
}
