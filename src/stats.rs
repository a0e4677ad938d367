//! Stats module for counting words and summarising their lengths
//!
//! Lines are split on single spaces, each token is trimmed and classified,
//! and accepted words feed a running count, total length and length
//! histogram.

mod accumulator;
mod report;
mod tokenizer;
mod types;

// Re-export public types
pub use accumulator::{LoadSummary, WordStats};
pub use report::Report;
pub use tokenizer::{classify, tokens, words};
pub use types::{HistogramIter, LengthHistogram, StatsSnapshot};
