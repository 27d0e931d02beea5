//! Raw byte storage.
//!
//! [`RawFile`] is a thin handle over [`std::fs::File`] for code that works
//! with whole buffers and absolute offsets: header sniffing, raw element
//! dumps, and loading raw buffers of a known size.

use crate::IoResult;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// An open file for raw byte access.
#[derive(Debug)]
pub struct RawFile {
    file: File,
    path: PathBuf,
}

impl RawFile {
    /// Opens an existing file for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        Ok(Self {
            file: File::open(path)?,
            path: path.to_path_buf(),
        })
    }

    /// Creates or truncates a file for writing.
    pub fn create<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        Ok(Self {
            file: File::create(path)?,
            path: path.to_path_buf(),
        })
    }

    /// Path this handle was opened with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File size in bytes.
    pub fn size(&self) -> IoResult<u64> {
        Ok(self.file.metadata()?.len())
    }

    /// Moves the cursor to absolute byte offset `pos`.
    pub fn seek(&mut self, pos: u64) -> IoResult<()> {
        self.file.seek(SeekFrom::Start(pos))?;
        Ok(())
    }

    /// Reads up to `buf.len()` bytes; returns how many were read.
    ///
    /// Keeps reading until the buffer is full or the file ends.
    pub fn read_into(&mut self, buf: &mut [u8]) -> IoResult<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.file.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(filled)
    }

    /// Reads from the cursor to the end of the file.
    pub fn read_to_end(&mut self) -> IoResult<Vec<u8>> {
        let mut out = Vec::new();
        self.file.read_to_end(&mut out)?;
        Ok(out)
    }

    /// Writes the whole buffer at the cursor.
    pub fn write_all(&mut self, bytes: &[u8]) -> IoResult<()> {
        self.file.write_all(bytes)?;
        Ok(())
    }
}
