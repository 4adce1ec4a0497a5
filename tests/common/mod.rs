#![allow(dead_code)]

use std::{fs, path::Path};

/// Number of newline characters in the file at `path`.
///
/// Missing or unreadable files count as zero lines.
pub fn count_lines<P: AsRef<Path>>(path: P) -> usize {
    fs::read_to_string(path)
        .map(|contents| contents.matches('\n').count())
        .unwrap_or(0)
}

/// Number of file descriptors currently open in this process.
///
/// Reads `/dev/fd`. The descriptor the read itself uses biases a
/// before/after pair equally, so differences stay meaningful.
pub fn count_open_fds() -> usize {
    fs::read_dir("/dev/fd")
        .map(|entries| entries.count())
        .unwrap_or(0)
}
