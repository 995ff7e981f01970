//! `/dev/urandom` source backed by a small pooled buffer.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zeroize::Zeroize;

use super::{EntropyError, EntropySource};

const URANDOM_PATH: &str = "/dev/urandom";
const POOL_SIZE: usize = 4096;

/// Reads the device in `POOL_SIZE` chunks. Consumed bytes are wiped, and the
/// whole pool is wiped before each refill and on drop.
pub struct UrandomSource {
    file: File,
    pool: Box<[u8]>,
    read_pos: usize,
}

impl UrandomSource {
    pub fn open() -> Result<Self, EntropyError> {
        Self::from_path(URANDOM_PATH)
    }

    /// Open any readable byte stream as a source. A short read surfaces as
    /// an error rather than a truncated draw.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EntropyError> {
        let file = File::open(path)?;
        Ok(Self {
            file,
            pool: vec![0u8; POOL_SIZE].into_boxed_slice(),
            read_pos: POOL_SIZE,
        })
    }

    pub fn is_available() -> bool {
        Path::new(URANDOM_PATH).exists()
    }

    #[cold]
    fn refill(&mut self) -> Result<(), EntropyError> {
        self.pool[..].zeroize();
        self.read_pos = POOL_SIZE;
        self.file.read_exact(&mut self.pool[..])?;
        self.read_pos = 0;
        Ok(())
    }
}

impl EntropySource for UrandomSource {
    fn next_u64(&mut self) -> Result<u64, EntropyError> {
        if self.read_pos + 8 > POOL_SIZE {
            self.refill()?;
        }

        let chunk = &mut self.pool[self.read_pos..self.read_pos + 8];
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        chunk.zeroize();
        self.read_pos += 8;

        let v = u64::from_le_bytes(bytes);
        bytes.zeroize();
        Ok(v)
    }

    fn name(&self) -> &'static str {
        "/dev/urandom"
    }
}

impl Drop for UrandomSource {
    fn drop(&mut self) {
        self.pool[..].zeroize();
    }
}
