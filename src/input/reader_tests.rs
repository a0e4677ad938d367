//! Tests for input reader

use super::*;
use std::io::Write;
use std::path::PathBuf;

use tempfile::{NamedTempFile, TempDir};

fn temp_file_with(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_read_lines_from_file() {
    let file = temp_file_with("This text \nIs split over \nA few lines");
    let lines: Vec<String> = LineReader::open(Some(file.path()))
        .unwrap()
        .map(|line| line.unwrap())
        .collect();

    assert_eq!(lines, vec!["This text ", "Is split over ", "A few lines"]);
}

#[test]
fn test_lines_have_no_terminators() {
    let file = temp_file_with("first\r\nsecond\n");
    let lines: Vec<String> = LineReader::open(Some(file.path()))
        .unwrap()
        .map(|line| line.unwrap())
        .collect();

    assert_eq!(lines, vec!["first", "second"]);
}

#[test]
fn test_empty_file_has_no_lines() {
    let file = temp_file_with("");
    let mut lines = LineReader::open(Some(file.path())).unwrap();
    assert!(lines.next().is_none());
}

#[test]
fn test_fixture_file() {
    let path = PathBuf::from("tests/fixtures/sample.txt");
    let lines = LineReader::open(Some(&path)).unwrap();
    assert_eq!(lines.count(), 1);
}

#[test]
fn test_missing_path_returns_invalid_path() {
    let result = LineReader::open(None);
    assert!(matches!(result, Err(WordStatError::InvalidPath)));
}

#[test]
fn test_blank_path_returns_invalid_path() {
    let result = LineReader::open(Some(Path::new("")));
    assert!(matches!(result, Err(WordStatError::InvalidPath)));

    let result = LineReader::open(Some(Path::new("   ")));
    assert!(matches!(result, Err(WordStatError::InvalidPath)));
}

#[test]
fn test_file_not_found_returns_error() {
    let path = PathBuf::from("ThisDoesntActuallyExist");
    let result = LineReader::open(Some(&path));

    match result {
        Err(WordStatError::FileNotFound { path: reported, source }) => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        _ => panic!("Expected FileNotFound error"),
    }
}

#[test]
fn test_directory_returns_file_not_found() {
    let dir = TempDir::new().unwrap();
    let result = LineReader::open(Some(dir.path()));
    assert!(matches!(result, Err(WordStatError::FileNotFound { .. })));
}

fn collect_lines(bytes: &[u8]) -> Vec<String> {
    LossyLines::new(bytes).map(|line| line.unwrap()).collect()
}

#[test]
fn test_lone_carriage_return_ends_a_line() {
    assert_eq!(collect_lines(b"one\rtwo"), vec!["one", "two"]);
    assert_eq!(collect_lines(b"one\rtwo\r"), vec!["one", "two"]);
}

#[test]
fn test_mixed_line_endings() {
    assert_eq!(
        collect_lines(b"unix\nwindows\r\nmac\rlast"),
        vec!["unix", "windows", "mac", "last"]
    );
}

#[test]
fn test_blank_lines_are_kept() {
    assert_eq!(collect_lines(b"\n\r\n\r\rend\n"), vec!["", "", "", "", "end"]);
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let lines = collect_lines(b"Caf\xe9 is open\nThis is basic text\n");
    assert_eq!(lines, vec!["Caf\u{FFFD} is open", "This is basic text"]);
}

#[test]
fn test_invalid_utf8_file_reads_every_line() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Caf\xe9 is open\nThis is basic text\n").unwrap();

    let lines: Vec<io::Result<String>> = LineReader::open(Some(file.path())).unwrap().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.is_ok()));
}

/// Reader that yields some bytes and then fails
struct FailingReader {
    data: &'static [u8],
}

impl io::Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::other("device went away"));
        }
        let n = self.data.len().min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[test]
fn test_read_error_ends_iteration() {
    let reader = BufReader::new(FailingReader {
        data: b"first line\n",
    });
    let mut lines = LossyLines::new(reader);

    assert_eq!(lines.next().unwrap().unwrap(), "first line");
    let err = lines.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
    assert!(lines.next().is_none());
}
