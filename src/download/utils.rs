use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::Path;

/// Splits a reader into owned chunks of at most `chunk_size` bytes.
pub struct ReadChunks<R> {
    reader: R,
    chunk_size: usize,
    done: bool,
}

impl<R: Read> ReadChunks<R> {
    pub fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk_size,
            done: false,
        }
    }
}

impl<R: Read> Iterator for ReadChunks<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut buffer = vec![0; self.chunk_size];
        match self.reader.read(&mut buffer[..]) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(data) => {
                buffer.truncate(data);
                Some(Ok(buffer))
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Some(Ok(Vec::new())),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Writes every non-empty chunk to `destination`, replacing whatever was there.
/// Returns the number of bytes written.
pub fn save_response_content<I>(chunks: I, destination: &Path) -> Result<u64>
where
    I: IntoIterator<Item = io::Result<Vec<u8>>>,
{
    let mut dest = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(destination)
        .with_context(|| format!("Cannot open '{}' for writing", destination.display()))?;
    let mut written = 0;
    for chunk in chunks {
        let chunk = chunk.context("Failed reading response body")?;
        // keep-alive artifacts
        if chunk.is_empty() {
            continue;
        }
        dest.write_all(&chunk)
            .with_context(|| format!("Failed writing to '{}'", destination.display()))?;
        written += chunk.len() as u64;
    }
    dest.sync_all()?;
    Ok(written)
}
