use std::io;
use std::path::Path;

use crate::error::WordStatError;
use crate::input::LineReader;
use crate::stats::report::Report;
use crate::stats::tokenizer;
use crate::stats::types::{LengthHistogram, StatsSnapshot};

/// Outcome of feeding one source through [`WordStats::load_lines`]
#[derive(Debug, Default)]
pub struct LoadSummary {
    /// Lines read before the source ended or failed, blank lines included
    pub lines_read: usize,
    /// Read failure that cut the source short; aggregates up to it are kept
    pub interrupted: Option<WordStatError>,
}

impl LoadSummary {
    pub fn is_complete(&self) -> bool {
        self.interrupted.is_none()
    }
}

/// Running word statistics over streamed lines of text
#[derive(Debug, Clone, Default)]
pub struct WordStats {
    word_count: usize,
    total_word_length: usize,
    histogram: LengthHistogram,
}

impl WordStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an accumulator already populated from `path`
    pub fn from_path(path: Option<&Path>) -> Result<(Self, LoadSummary), WordStatError> {
        let mut stats = Self::new();
        let summary = stats.load(path)?;
        Ok((stats, summary))
    }

    /// Re-bind to the input at `path`.
    ///
    /// Opening failures are returned before anything is reset, so the
    /// previous aggregates survive a bad path.
    pub fn load(&mut self, path: Option<&Path>) -> Result<LoadSummary, WordStatError> {
        let lines = LineReader::open(path)?;
        Ok(self.load_lines(lines))
    }

    /// Reset, then process `lines` in order until they end or fail.
    ///
    /// A read failure stops the load but keeps everything counted so far;
    /// it is logged and reported in the summary rather than returned.
    pub fn load_lines<I>(&mut self, lines: I) -> LoadSummary
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        self.reset();

        let mut summary = LoadSummary::default();
        for line in lines {
            match line {
                Ok(line) => {
                    self.process_line(&line);
                    summary.lines_read += 1;
                }
                Err(e) => {
                    log::error!(
                        "Read failed after {} lines, reporting partial input: {}",
                        summary.lines_read,
                        e
                    );
                    summary.interrupted = Some(WordStatError::Io(e));
                    break;
                }
            }
        }

        log::debug!(
            "Loaded {} lines: {} words, {} distinct lengths",
            summary.lines_read,
            self.word_count,
            self.histogram.len()
        );
        summary
    }

    /// Count every word on one line
    pub fn process_line(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        for word in tokenizer::words(line) {
            self.record(word);
        }
    }

    fn record(&mut self, word: &str) {
        let length = word.chars().count();
        self.word_count += 1;
        self.total_word_length += length;
        self.histogram.increment(length);
    }

    /// Drop all aggregates
    pub fn reset(&mut self) {
        self.word_count = 0;
        self.total_word_length = 0;
        self.histogram.clear();
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            word_count: self.word_count,
            total_word_length: self.total_word_length,
            histogram: self.histogram.clone(),
        }
    }

    pub fn report(&self) -> Report {
        Report::new(self.snapshot())
    }
}

#[cfg(test)]
#[path = "accumulator_tests.rs"]
mod accumulator_tests;
