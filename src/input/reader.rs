use crate::error::WordStatError;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Path argument that selects standard input instead of a file
pub const STDIN_PATH: &str = "-";

/// Ordered lines of one input, without line terminators
pub type LineSource = LossyLines<Box<dyn BufRead>>;

/// Line iterator that ends lines at `\n`, `\r\n` or a lone `\r`.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD instead of
/// failing the read, so only real I/O errors surface as `Err`. After an
/// error the iterator is exhausted.
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
    pending: VecDeque<String>,
    done: bool,
}

impl<R: BufRead> LossyLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Split one `\n`-terminated chunk on `\r` and queue the pieces
    fn queue_chunk(&mut self) {
        let chunk = self.buf.as_slice();
        let chunk = chunk.strip_suffix(b"\n").unwrap_or(chunk);
        let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
        for line in chunk.split(|&b| b == b'\r') {
            self.pending
                .push_back(String::from_utf8_lossy(line).into_owned());
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            if self.done {
                return None;
            }

            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => self.done = true,
                Ok(_) => self.queue_chunk(),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Resolve a path into a line source
pub struct LineReader;

impl LineReader {
    /// Open the text at `path` for line-by-line reading
    ///
    /// # Arguments
    /// * `path` - File path, or `-` for stdin. `None` or a blank path is rejected.
    ///
    /// # Returns
    /// * `Ok(LineSource)` - Lazy line iterator owning the file handle
    /// * `Err(WordStatError)` - `InvalidPath` or `FileNotFound`, before anything is read
    pub fn open(path: Option<&Path>) -> Result<LineSource, WordStatError> {
        let path = match path {
            Some(p) if !p.as_os_str().to_string_lossy().trim().is_empty() => p,
            _ => return Err(WordStatError::InvalidPath),
        };

        if path.as_os_str() == STDIN_PATH {
            log::debug!("Reading words from stdin");
            let reader: Box<dyn BufRead> = Box::new(io::stdin().lock());
            return Ok(LossyLines::new(reader));
        }

        if path.is_dir() {
            return Err(WordStatError::FileNotFound {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "path is a directory"),
            });
        }

        let file = File::open(path).map_err(|source| WordStatError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Reading words from {}", path.display());

        let reader: Box<dyn BufRead> = Box::new(BufReader::new(file));
        Ok(LossyLines::new(reader))
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
