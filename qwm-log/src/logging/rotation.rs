//! 로그 파일 순환
//!
//! 크기 제한 파일에 레코드를 추가하고, 제한에 도달하면 `.bak` 백업으로 순환합니다.
//!
//! # 순환 규칙
//! - 크기 검사는 기록 **전에** 수행합니다. 따라서 파일은 레코드 한 건 길이만큼
//!   `max_size_bytes`를 넘을 수 있습니다.
//! - 백업은 한 세대만 유지합니다. 기존 `.bak`은 덮어씁니다.
//! - 파일 열기·이름 변경·기록 실패는 호출자에게 전달되지 않습니다.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error_handling::{LogError, LogResult, SwallowError};
use crate::logging::formatter::TimestampFormatter;
use crate::logging::writer::{LogSink, SinkKind};

/// 백업 파일 확장자
pub const BACKUP_SUFFIX: &str = ".bak";

/// 원본 경로 뒤에 `.bak`을 붙인 백업 경로 반환
pub fn backup_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// 순환 파일 싱크 옵션
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotationOptions {
    /// 열기 전에 상위 디렉토리 생성 (기본값: false)
    pub create_parent_dirs: bool,
}

/// 크기 제한 순환 파일 싱크
///
/// 파일 핸들은 생성 시 추가 모드로 열리고, 순환 직후 다시 열리며,
/// 싱크가 drop될 때 닫힙니다. 열기에 실패하면 핸들 없이 동작하며
/// 이후 `log` 호출은 아무것도 기록하지 않습니다.
#[derive(Debug)]
pub struct RotatingFileSink {
    path: PathBuf,
    backup_path: PathBuf,
    max_size_bytes: u64,
    options: RotationOptions,
    file: Option<File>,
}

impl RotatingFileSink {
    /// 새 순환 파일 싱크 생성
    pub fn new<P: Into<PathBuf>>(path: P, max_size_bytes: u64) -> Self {
        Self::with_options(path, max_size_bytes, RotationOptions::default())
    }

    /// 옵션을 지정해 순환 파일 싱크 생성
    pub fn with_options<P: Into<PathBuf>>(
        path: P,
        max_size_bytes: u64,
        options: RotationOptions,
    ) -> Self {
        let path = path.into();
        let backup_path = backup_path_for(&path);
        let file = open_append(&path, options).swallow("로그 파일 열기");

        Self {
            path,
            backup_path,
            max_size_bytes,
            options,
            file,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    /// 파일 핸들이 열려 있는지 확인
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// 현재 파일 크기 (핸들이 없거나 조회 실패 시 0)
    pub fn current_size(&self) -> u64 {
        self.file
            .as_ref()
            .and_then(|f| f.metadata().ok())
            .map_or(0, |m| m.len())
    }

    /// 로그 파일 순환
    ///
    /// 핸들을 닫고, 원본을 백업 경로로 이름 변경(기존 백업 덮어쓰기)한 뒤
    /// 원본 경로를 다시 엽니다. 이름 변경에 실패해도 원본 경로를 다시 열어
    /// 기존 파일에 계속 기록합니다.
    pub fn rotate(&mut self) {
        self.file = None;

        let renamed = fs::rename(&self.path, &self.backup_path)
            .map_err(|source| LogError::Rename {
                from: self.path.clone(),
                to: self.backup_path.clone(),
                source,
            })
            .swallow("로그 파일 순환");

        self.file = open_append(&self.path, self.options).swallow("로그 파일 다시 열기");

        if renamed.is_some() {
            debug!(
                path = %self.path.display(),
                backup = %self.backup_path.display(),
                "로그 파일 순환 완료"
            );
        }
    }

    fn write_record(&mut self, line: &str) -> LogResult<()> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };

        file.write_all(line.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|source| LogError::Write {
                path: self.path.clone(),
                source,
            })
    }
}

impl LogSink for RotatingFileSink {
    fn log(&mut self, message: &str) {
        // 열리지 않은 핸들의 크기는 0으로 보고 순환하지 않음
        if self.file.is_none() {
            return;
        }

        if self.current_size() >= self.max_size_bytes {
            self.rotate();
        }

        let line = TimestampFormatter::format_record(&TimestampFormatter::now(), message);
        self.write_record(&line).swallow("로그 기록");
    }

    fn kind(&self) -> SinkKind {
        SinkKind::File
    }
}

/// 추가 모드로 파일 열기 (없으면 생성)
fn open_append(path: &Path, options: RotationOptions) -> LogResult<File> {
    if options.create_parent_dirs {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| LogError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::Open {
            path: path.to_path_buf(),
            source,
        })
}
