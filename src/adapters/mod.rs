// Adapters layer: concrete side sources for the session (terminal/reader input, argument lists).

use crate::domain::model::SideLabel;
use crate::domain::ports::SideSource;
use crate::utils::error::Result;
use std::collections::VecDeque;
use std::io::BufRead;

/// Reads one line per side from any buffered reader, usually locked stdin.
pub struct ReaderSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> SideSource for ReaderSource<R> {
    fn next_line(&mut self, label: SideLabel) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self.reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            tracing::debug!("Reader exhausted before {}", label);
            return Ok(None);
        }
        // Undecodable bytes stay in the line so they surface as a parse error.
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn interactive(&self) -> bool {
        true
    }
}

/// Sides handed over up front, e.g. from command-line arguments.
#[derive(Debug, Clone)]
pub struct ArgsSource {
    values: VecDeque<String>,
}

impl ArgsSource {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl SideSource for ArgsSource {
    fn next_line(&mut self, _label: SideLabel) -> Result<Option<String>> {
        Ok(self.values.pop_front())
    }

    fn interactive(&self) -> bool {
        false
    }
}
