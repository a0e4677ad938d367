mod reader;

pub use reader::{LineReader, LineSource, LossyLines, STDIN_PATH};
