//! 輸出端

use std::io::{self, Write};

/// 平台行分隔符號
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// 配料過程的輸出端
pub trait OutputSink {
    /// 輸出一行文字（引擎不會傳入空字串）
    fn write_line(&mut self, line: &str);

    /// 一個單位配料完成
    fn end_unit(&mut self) {}
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }

    fn end_unit(&mut self) {
        (**self).end_unit();
    }
}

/// 收集輸出，供測試或嵌入使用
impl OutputSink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// 寫入任意 `io::Write` 的輸出端
///
/// 寫入失敗（例如下游管線已關閉）只記錄日誌，不中斷配料。
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, line: &str) {
        if let Err(err) = writeln!(self.writer, "{}", line) {
            if err.kind() == io::ErrorKind::BrokenPipe {
                tracing::debug!("輸出管線已關閉: {}", err);
            } else {
                tracing::warn!("輸出失敗: {}", err);
            }
        }
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        self.emit(line);
    }

    fn end_unit(&mut self) {
        self.emit("");
    }
}

/// 標準輸出
pub type ConsoleSink = WriterSink<io::Stdout>;

impl Default for ConsoleSink {
    fn default() -> Self {
        WriterSink::new(io::stdout())
    }
}
