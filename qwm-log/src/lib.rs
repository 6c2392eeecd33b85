//! qwm 로깅 라이브러리
//!
//! 레벨별 싱크 선택과 크기 기반 로그 파일 순환을 제공합니다.

pub mod error_handling;
pub mod logging;

pub use error_handling::{LogError, LogResult, SwallowError};
