//! Line sources feeding the tokenizer
//!
//! The tokenizer never reads files itself. Anything that can hand out one line at a time
//! implements [LineSource]; the two implementations here cover in-memory text and buffered
//! readers.

use std::collections::VecDeque;
use std::io::{self, BufRead};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// A source of text lines, without their terminators.
pub trait LineSource {
    /// Read the next line, or `None` once the input is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }
}

/// Splits text at `\n`, `\r\n` or a lone `\r`. A final terminator does not start another
/// line.
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let Some(end) = self.rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut self.rest));
        };
        let (line, tail) = self.rest.split_at(end);
        self.rest = tail
            .strip_prefix("\r\n")
            .or_else(|| tail.get(1..))
            .unwrap_or("");
        Some(line)
    }
}

pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

/// Lines of an in-memory string
#[derive(Debug, Clone)]
pub struct StrLines<'a> {
    lines: SplitLines<'a>,
}

impl<'a> StrLines<'a> {
    pub fn new(text: &'a str) -> Self {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        Self {
            lines: split_lines(text),
        }
    }
}

impl LineSource for StrLines<'_> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.next().map(str::to_owned))
    }
}

/// Lines of a buffered reader, split like [split_lines].
#[derive(Debug)]
pub struct ReaderLines<R> {
    reader: R,
    buffer: String,
    /// Lines of the last chunk separated by a lone `\r`
    pending: VecDeque<String>,
    first: bool,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            pending: VecDeque::new(),
            first: true,
        }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.pending.is_empty() {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            let mut chunk = self.buffer.as_str();
            if std::mem::replace(&mut self.first, false) {
                chunk = chunk.strip_prefix(BYTE_ORDER_MARK).unwrap_or(chunk);
            }
            self.pending.extend(split_lines(chunk).map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }
}
