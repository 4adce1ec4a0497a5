use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

use fs2::FileExt;

/// A caller-owned output stream, shared with the log center.
///
/// The center only ever holds one clone; replacing the sink drops that
/// clone, so the caller's stream stays open and usable.
pub type SharedStream = Arc<Mutex<dyn Write + Send>>;

/// One log output destination.
///
/// The variant carries the ownership rule: only `File` was opened by the
/// center, and only `File` is closed (by drop) when the sink is replaced.
pub enum Sink {
    /// The process standard output stream.
    Stdout,
    /// The process standard error stream.
    Stderr,
    /// A caller-supplied stream; the caller closes it.
    Stream(SharedStream),
    /// A file the center opened and will close on replacement.
    File(File),
}

impl Sink {
    /// Opens `path` for writing, truncating any existing contents.
    pub(crate) fn open(path: &Path) -> io::Result<Sink> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        Ok(Sink::File(file))
    }

    /// Whether the underlying handle was opened, and will be closed, by
    /// the log center.
    #[must_use]
    pub fn is_owned(&self) -> bool {
        matches!(self, Sink::File(_))
    }

    /// Takes the advisory cross-process lock on file-backed sinks.
    ///
    /// Best-effort: std streams and opaque caller streams expose no
    /// descriptor to lock, and lock failures are ignored rather than
    /// failing the log call.
    pub(crate) fn lock_file(&self) {
        if let Sink::File(file) = self {
            let _ = file.lock_exclusive();
        }
    }

    /// Releases the advisory lock taken by [`Sink::lock_file`].
    pub(crate) fn unlock_file(&self) {
        if let Sink::File(file) = self {
            let _ = file.unlock();
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Stdout => io::stdout().write(buf),
            Sink::Stderr => io::stderr().write(buf),
            Sink::Stream(stream) => stream
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .write(buf),
            Sink::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stdout => io::stdout().flush(),
            Sink::Stderr => io::stderr().flush(),
            Sink::Stream(stream) => stream
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .flush(),
            Sink::File(file) => file.flush(),
        }
    }
}
