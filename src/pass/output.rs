//! Batch generation to stdout, a file, or an in-memory buffer.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use super::{GenerateError, GenerationRequest, generate, validate};
use crate::entropy::EntropySource;

const WRITER_CAPACITY: usize = 8 * 1024;
/// Upper bound on the up-front reservation for `to_string`.
const MAX_RESERVE: usize = 1024 * 1024;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("failed to write passwords: {0}")]
    Io(#[from] io::Error),
}

/// Buffered writer that wipes its buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(WRITER_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let res = self.inner.write_all(&self.buf);
        self.buf[..].zeroize();
        self.buf.clear();
        res
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > WRITER_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= WRITER_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
        // Wipes spare capacity too.
        self.buf.zeroize();
    }
}

/// Write `count` passwords to `out`, one per line. The first failure stops
/// the batch.
pub fn write_batch<W, S>(
    request: &GenerationRequest,
    count: usize,
    source: &mut S,
    out: &mut W,
) -> Result<(), OutputError>
where
    W: Write,
    S: EntropySource + ?Sized,
{
    debug!(count, length = request.length, "writing password batch");
    for _ in 0..count {
        let mut line = Zeroizing::new(generate(request, source)?);
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Collect `count` passwords into one newline separated string, for the
/// clipboard.
pub fn to_string<S>(
    request: &GenerationRequest,
    count: usize,
    source: &mut S,
) -> Result<Zeroizing<String>, GenerateError>
where
    S: EntropySource + ?Sized,
{
    validate(request)?;

    // Reallocation leaves unwiped copies; reserve up front, bounded.
    let wanted = count.saturating_mul(request.length.saturating_add(1));
    let mut passwords = Zeroizing::new(String::with_capacity(wanted.min(MAX_RESERVE)));
    for _ in 0..count {
        let pass = Zeroizing::new(generate(request, source)?);
        passwords.push_str(&pass);
        passwords.push('\n');
    }
    Ok(passwords)
}

pub fn to_stdout<S>(
    request: &GenerationRequest,
    count: usize,
    source: &mut S,
) -> Result<(), OutputError>
where
    S: EntropySource + ?Sized,
{
    let stdout = io::stdout();
    let mut out = SecureBufWriter::new(stdout.lock());
    write_batch(request, count, source, &mut out)
}

/// Append to `path`, creating it and any missing parent directories.
pub fn to_file<S>(
    path: &Path,
    request: &GenerationRequest,
    count: usize,
    source: &mut S,
) -> Result<(), OutputError>
where
    S: EntropySource + ?Sized,
{
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = SecureBufWriter::new(file);
    write_batch(request, count, source, &mut out)
}
