use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{config::DEFAULT_BLOCK_LINES, errors::errors::Error};

/// Lazily splits a file into blocks of whole lines.
///
/// Every block holds `block_lines` lines except the last, which holds what is
/// left. Lines keep their newline, so the blocks concatenate back to the file.
/// The file is closed as soon as the end is reached or a read fails.
pub struct ChunkReader {
    path: PathBuf,
    reader: Option<BufReader<File>>,
    block_lines: usize,
    lines_read: usize,
}

impl ChunkReader {
    pub fn stream(path: impl AsRef<Path>) -> Result<ChunkReader, Error> {
        ChunkReader::stream_with(path, DEFAULT_BLOCK_LINES)
    }

    pub fn stream_with(path: impl AsRef<Path>, block_lines: usize) -> Result<ChunkReader, Error> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|e| Error::source_unreadable(path.display(), e))?;

        debug!(path = %path.display(), block_lines, "opened source");

        Ok(ChunkReader {
            path,
            reader: Some(BufReader::new(file)),
            block_lines: block_lines.max(1),
            lines_read: 0,
        })
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    fn next_block(&mut self) -> Result<Option<String>, Error> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };

        let mut block = String::new();
        let mut lines = 0;

        while lines < self.block_lines {
            let read = match reader.read_line(&mut block) {
                Ok(read) => read,
                Err(e) => {
                    self.reader = None;
                    return Err(Error::source_unreadable(self.path.display(), e));
                }
            };

            if read == 0 {
                self.reader = None;
                break;
            }

            lines += 1;
        }

        self.lines_read += lines;

        if block.is_empty() {
            Ok(None)
        } else {
            Ok(Some(block))
        }
    }
}

impl Iterator for ChunkReader {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_block().transpose()
    }
}
