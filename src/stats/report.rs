//! Rendering word statistics as text or JSON

use std::fmt;

use serde::Serialize;

use crate::stats::types::StatsSnapshot;

/// Separator between tied most-frequent word lengths
const TIE_SEPARATOR: &str = " & ";

/// Report over one statistics snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    snapshot: StatsSnapshot,
}

/// One histogram bucket in the JSON report
#[derive(Debug, Serialize)]
struct LengthCount {
    length: usize,
    count: usize,
}

/// JSON shape of a report
#[derive(Debug, Serialize)]
struct JsonReport {
    word_count: usize,
    average_word_length: String,
    lengths: Vec<LengthCount>,
    max_frequency: usize,
    most_frequent_lengths: Vec<usize>,
}

impl Report {
    pub fn new(snapshot: StatsSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &StatsSnapshot {
        &self.snapshot
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let report = JsonReport {
            word_count: self.snapshot.word_count,
            average_word_length: self.snapshot.formatted_average(),
            lengths: self
                .snapshot
                .histogram
                .iter()
                .map(|(length, count)| LengthCount { length, count })
                .collect(),
            max_frequency: self.snapshot.max_frequency(),
            most_frequent_lengths: self.snapshot.most_frequent_lengths(),
        };
        serde_json::to_string_pretty(&report)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = &self.snapshot;

        writeln!(f, "Word count = {}", snapshot.word_count)?;
        write!(f, "Average word length = {}", snapshot.formatted_average())?;
        for (length, count) in &snapshot.histogram {
            write!(f, "\nNumber of words of length {} is {}", length, count)?;
        }

        write!(
            f,
            "\nThe most frequently occurring word length appears {} times",
            snapshot.max_frequency()
        )?;
        let modes = snapshot.most_frequent_lengths();
        if !modes.is_empty() {
            let joined = modes
                .iter()
                .map(|length| length.to_string())
                .collect::<Vec<_>>()
                .join(TIE_SEPARATOR);
            write!(f, ", for words of length {}", joined)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
