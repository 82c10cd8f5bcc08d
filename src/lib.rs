pub mod error;
mod file;
mod io;
mod metadata;

pub use error::FileError;
pub use file::{MockFile, Whence};
pub use metadata::Metadata;

pub type Result<T> = std::result::Result<T, FileError>;

/// The operations a consumer needs from a file handle.
///
/// Code that depends only on this trait can be tested against a
/// [`MockFile`] instead of a real file. It must not rely on POSIX semantics
/// for overlapping writes, sparse files or directory metadata.
///
/// # Examples
///
/// ```rust
/// use mockfile::{Handle, MockFile, Whence};
///
/// fn last_byte(handle: &mut dyn Handle) -> mockfile::Result<u8> {
///     let mut buf = [0u8; 1];
///     handle.seek(-1, Whence::End)?;
///     handle.read(&mut buf)?;
///     Ok(buf[0])
/// }
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut file = MockFile::new("log.txt");
///     file.write(b"hello")?;
///
///     assert_eq!(last_byte(&mut file)?, b'o');
///     Ok(())
/// }
/// ```
pub trait Handle {
    /// Releases the handle.
    fn close(&mut self) -> Result<()>;

    /// Reads from the cursor and advances it by the number of bytes read.
    ///
    /// # Errors
    ///
    /// Returns `FileError::Eof` when no bytes were copied.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Reads from `offset` without moving the cursor.
    ///
    /// # Errors
    ///
    /// Returns `FileError::Eof` when no bytes were copied.
    fn read_at(&self, buf: &mut [u8], offset: i64) -> Result<usize>;

    /// Moves the cursor relative to `whence` and returns the new position.
    fn seek(&mut self, delta: i64, whence: Whence) -> Result<i64>;

    /// Writes `data` and returns the number of bytes written.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Shrinks the content to at most `size` bytes.
    fn truncate(&mut self, size: u64) -> Result<()>;

    /// Returns the file's metadata.
    fn stat(&self) -> Result<Metadata>;
}

#[cfg(test)]
pub(crate) fn init_logger() { let _ = env_logger::builder().is_test(true).try_init(); }
