// Pattern: Batched File Writes
// Reopening the file for every line vs one buffered handle.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

// Bad: an open, a write syscall and a close for every line.
pub fn inefficient(path: &Path, lines: usize) -> io::Result<()> {
    for i in 0..lines {
        let mut file = open_append(path)?;
        writeln!(file, "Line {}", i)?;
    }
    Ok(())
}

// Good: one open, writes coalesced by BufWriter.
pub fn optimized(path: &Path, lines: usize) -> io::Result<()> {
    let mut writer = BufWriter::new(open_append(path)?);
    for i in 0..lines {
        writeln!(writer, "Line {}", i)?;
    }
    writer.flush()
}
