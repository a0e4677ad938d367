//! Word count, average word length and word-length distribution for text.
//!
//! ```no_run
//! use std::path::Path;
//! use wordstat::stats::WordStats;
//!
//! let mut stats = WordStats::new();
//! stats.load(Some(Path::new("notes.txt")))?;
//! println!("{}", stats.report());
//! # Ok::<(), wordstat::error::WordStatError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod stats;
