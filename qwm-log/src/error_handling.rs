//! 로깅 에러 처리
//!
//! 로그 파일 I/O 실패를 분류하고, 호출자에게 전파하지 않고 삼키는 도구를 제공합니다.
//!
//! # 설계 원칙
//! - 로거는 호스트 프로그램을 중단시키지 않음
//! - 내부 함수는 `LogResult`를 반환하고, 공개 `log` 경로에서만 에러를 삼킴
//! - 삼킨 에러는 `tracing` 이벤트로만 남음

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 로깅 시스템 에러 타입
#[derive(Error, Debug)]
pub enum LogError {
    #[error("로그 파일 열기 실패: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("로그 파일 순환 실패: {} -> {}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("로그 기록 실패: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("로그 디렉토리 생성 실패: {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("알 수 없는 로그 레벨: {0}")]
    UnknownSeverity(String),

    #[error("잘못된 로깅 설정: {0}")]
    InvalidConfig(String),
}

/// Result 타입 별칭
pub type LogResult<T> = Result<T, LogError>;

/// 에러를 호출자에게 전달하지 않고 삼키는 트레이트
///
/// 로거의 공개 API는 실패를 알리지 않습니다. 실패는 `tracing::warn!`으로만
/// 기록되며, 구독자가 설치되지 않은 호스트에서는 아무 흔적도 남지 않습니다.
pub trait SwallowError<T> {
    /// 에러를 기록하고 `None`으로 변환
    fn swallow(self, context: &str) -> Option<T>;
}

impl<T> SwallowError<T> for LogResult<T> {
    fn swallow(self, context: &str) -> Option<T> {
        match self {
            Ok(val) => Some(val),
            Err(e) => {
                tracing::warn!(error = %e, context, "로깅 I/O 실패 무시됨");
                None
            }
        }
    }
}
