//! Input module: feeds URL lists into the deduplicator
//!
//! URL lists are read line by line from any [`BufRead`] source, which covers
//! both files and standard input. Lines that are not valid UTF-8 are decoded
//! lossily instead of aborting the run.

use crate::dedup::Deduplicator;
use crate::UddupError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Streams every line of `reader` into the deduplicator
///
/// # Returns
///
/// * `Ok(usize)` - Number of lines read
/// * `Err(UddupError)` - The underlying reader failed
pub fn feed_reader<R: BufRead>(
    mut reader: R,
    dedup: &mut Deduplicator<'_>,
) -> Result<usize, UddupError> {
    let mut buf = Vec::new();
    let mut lines = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines += 1;
        dedup.process(&String::from_utf8_lossy(&buf));
    }

    tracing::debug!("Read {} lines", lines);
    Ok(lines)
}

/// Opens a URL list file and streams it into the deduplicator
pub fn feed_file(path: &Path, dedup: &mut Deduplicator<'_>) -> Result<usize, UddupError> {
    tracing::info!("Reading URLs from: {}", path.display());
    let file = File::open(path)?;
    feed_reader(BufReader::new(file), dedup)
}
