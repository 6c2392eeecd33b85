//! 로그 싱크
//!
//! 로그 레코드를 받아 기록하거나 버리는 싱크 인터페이스와 기본 구현을 제공합니다.

use std::io::{self, Write};

use crate::logging::formatter::TimestampFormatter;

/// 싱크 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// 크기 제한 파일 (순환)
    File,
    /// 표준 출력
    Console,
    /// 버림
    Null,
}

/// 로그 싱크 트레이트
///
/// `log`는 어떤 파일 시스템 상태에서도 에러를 반환하거나 패닉하지 않습니다.
pub trait LogSink: Send {
    /// 메시지 한 건 기록
    fn log(&mut self, message: &str);

    /// 싱크 종류 반환
    fn kind(&self) -> SinkKind;
}

/// 아무것도 기록하지 않는 싱크
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    #[inline]
    fn log(&mut self, _message: &str) {}

    fn kind(&self) -> SinkKind {
        SinkKind::Null
    }
}

/// 콘솔 싱크
///
/// 레코드마다 한 줄씩 기록하고 즉시 플러시합니다.
pub struct ConsoleSink {
    out: Box<dyn Write + Send>,
}

impl ConsoleSink {
    /// 표준 출력 싱크 생성
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    /// 임의의 출력 대상으로 싱크 생성
    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for ConsoleSink {
    fn log(&mut self, message: &str) {
        let line = TimestampFormatter::format_record(&TimestampFormatter::now(), message);
        // 표준 출력 실패는 보고하지 않음
        let _ = self
            .out
            .write_all(line.as_bytes())
            .and_then(|_| self.out.flush());
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_console_sink_writes_timestamped_line() {
        let buffer = SharedBuffer::default();
        let mut sink = ConsoleSink::with_writer(Box::new(buffer.clone()));

        sink.log("server started");

        let output = String::from_utf8(buffer.0.lock().clone()).unwrap();
        assert_eq!(output.len(), TimestampFormatter::WIDTH + "server started\n".len());
        assert!(output.starts_with('['));
        assert!(output.ends_with("] server started\n"));
    }

    #[test]
    fn test_console_sink_one_line_per_record() {
        let buffer = SharedBuffer::default();
        let mut sink = ConsoleSink::with_writer(Box::new(buffer.clone()));

        sink.log("one");
        sink.log("two");

        let output = String::from_utf8(buffer.0.lock().clone()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("one"));
        assert!(lines[1].ends_with("two"));
    }

    #[test]
    fn test_console_sink_ignores_write_failure() {
        let mut sink = ConsoleSink::with_writer(Box::new(BrokenPipe));
        sink.log("nobody is listening");
        assert_eq!(sink.kind(), SinkKind::Console);
    }

    #[test]
    fn test_null_sink_does_nothing() {
        let mut sink = NullSink;
        sink.log("dropped");
        assert_eq!(sink.kind(), SinkKind::Null);
    }
}
