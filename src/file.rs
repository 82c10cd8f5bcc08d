use log::{debug, trace};

use crate::{FileError, Handle, Metadata, Result};

/// Reference point for [`MockFile::seek`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    /// Offset is relative to the start of the file.
    Start,
    /// Offset is relative to the current cursor.
    Current,
    /// Offset is relative to the end of the stored content.
    End,
}

/// An in-memory file handle.
///
/// Reads and seeks go through a signed cursor, while writes always append to
/// the end of the buffer and leave the cursor where it is. The cursor is
/// never clamped; reading from a position outside the stored content yields
/// [`FileError::Eof`].
#[derive(Debug, Clone, Default)]
pub struct MockFile {
    name: String,
    data: Vec<u8>,
    cursor: i64,
}

impl MockFile {
    /// Creates an empty file with the cursor at 0.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_contents(name, Vec::new())
    }

    /// Creates a file whose buffer already holds `data`. The cursor starts at 0.
    pub fn with_contents(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        let file = Self {
            name: name.into(),
            data: data.into(),
            cursor: 0,
        };
        debug!("created mock file {:?} with {} bytes", file.name, file.data.len());
        file
    }

    pub fn name(&self) -> &str { &self.name }

    /// The full stored content, independent of the cursor.
    pub fn contents(&self) -> &[u8] { &self.data }

    /// Current cursor. May be negative or past the end after a seek.
    pub fn position(&self) -> i64 { self.cursor }

    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Releases the handle. There is nothing to release, so this always succeeds.
    pub fn close(&mut self) -> Result<()> {
        debug!("closed mock file {:?}", self.name);
        Ok(())
    }

    /// Reads from the cursor into `buf` and advances the cursor by the number
    /// of bytes copied.
    ///
    /// # Errors
    ///
    /// Returns `FileError::Eof` if no bytes were copied.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = self.read_at(buf, self.cursor)?;
        self.cursor = self.cursor.saturating_add(n as i64);
        Ok(n)
    }

    /// Reads from `offset` into `buf` without moving the cursor.
    ///
    /// # Errors
    ///
    /// Returns `FileError::Eof` if no bytes were copied, either because
    /// nothing is stored at `offset` or because `buf` is empty.
    pub fn read_at(&self, buf: &mut [u8], offset: i64) -> Result<usize> {
        let available = self.tail(offset);
        let n = std::cmp::min(buf.len(), available.len());
        if n == 0 {
            trace!("read at {offset} of {:?}: end of file", self.name);
            return Err(FileError::Eof);
        }

        buf[..n].copy_from_slice(&available[..n]);
        trace!("read {n} bytes at {offset} of {:?}", self.name);
        Ok(n)
    }

    /// Moves the cursor and returns its new value. No bounds checking is done.
    pub fn seek(&mut self, delta: i64, whence: Whence) -> Result<i64> {
        self.cursor = self.resolve(delta, whence);
        trace!("seek {delta} from {whence:?} in {:?}: cursor at {}", self.name, self.cursor);
        Ok(self.cursor)
    }

    /// Appends `data` to the end of the file. The cursor is not moved.
    pub fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.data.extend_from_slice(data);
        trace!("appended {} bytes to {:?}", data.len(), self.name);
        Ok(data.len())
    }

    /// Keeps the first `size` bytes. Sizes past the end leave the file unchanged.
    pub fn truncate(&mut self, size: u64) -> Result<()> {
        let size = usize::try_from(size).unwrap_or(usize::MAX).min(self.data.len());
        self.data.truncate(size);
        debug!("truncated {:?} to {size} bytes", self.name);
        Ok(())
    }

    /// Returns the file's metadata.
    pub fn stat(&self) -> Result<Metadata> {
        Ok(Metadata::new(self.name.clone(), self.data.len() as u64))
    }

    pub(crate) fn resolve(&self, delta: i64, whence: Whence) -> i64 {
        match whence {
            Whence::Start => delta,
            Whence::Current => self.cursor.saturating_add(delta),
            Whence::End => (self.data.len() as i64).saturating_add(delta),
        }
    }

    fn tail(&self, offset: i64) -> &[u8] {
        usize::try_from(offset)
            .ok()
            .and_then(|offset| self.data.get(offset..))
            .unwrap_or_default()
    }
}

impl Handle for MockFile {
    fn close(&mut self) -> Result<()> { MockFile::close(self) }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> { MockFile::read(self, buf) }

    fn read_at(&self, buf: &mut [u8], offset: i64) -> Result<usize> {
        MockFile::read_at(self, buf, offset)
    }

    fn seek(&mut self, delta: i64, whence: Whence) -> Result<i64> {
        MockFile::seek(self, delta, whence)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> { MockFile::write(self, data) }

    fn truncate(&mut self, size: u64) -> Result<()> { MockFile::truncate(self, size) }

    fn stat(&self) -> Result<Metadata> { MockFile::stat(self) }
}
