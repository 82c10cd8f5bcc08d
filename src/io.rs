//! `std::io` and `tokio::io` implementations for [`MockFile`].
//!
//! These follow the stream conventions of the respective traits: end of data
//! is `Ok(0)` rather than an error, and seeking to a negative position fails
//! without moving the cursor. Writes still append to the end.
//!
//! ```rust
//! use tokio::io::{AsyncReadExt, AsyncWriteExt};
//!
//! # tokio_test::block_on(async {
//! let mut file = mockfile::MockFile::new("/async.txt");
//! file.write_all(b"hello").await.unwrap();
//!
//! let mut content = String::new();
//! file.read_to_string(&mut content).await.unwrap();
//! assert_eq!(content, "hello");
//! # });
//! ```

use std::{
    io,
    pin::Pin,
    task::{Context, Poll},
};

use tokio::io::{AsyncRead, AsyncSeek, AsyncWrite, ReadBuf};

use crate::{FileError, MockFile, Whence};

fn invalid_seek() -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        "invalid seek to a negative or overflowing position",
    )
}

impl io::Read for MockFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match MockFile::read(self, buf) {
            Ok(n) => Ok(n),
            Err(FileError::Eof) => Ok(0),
        }
    }
}

impl io::Write for MockFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(MockFile::write(self, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

impl io::Seek for MockFile {
    fn seek(&mut self, pos: io::SeekFrom) -> io::Result<u64> {
        let target = match pos {
            io::SeekFrom::Start(offset) => i64::try_from(offset).map_err(|_| invalid_seek())?,
            io::SeekFrom::End(delta) => self.resolve(delta, Whence::End),
            io::SeekFrom::Current(delta) => self.resolve(delta, Whence::Current),
        };

        let position = u64::try_from(target).map_err(|_| invalid_seek())?;
        MockFile::seek(self, target, Whence::Start)?;
        Ok(position)
    }
}

impl AsyncRead for MockFile {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let n = match io::Read::read(self.get_mut(), buf.initialize_unfilled()) {
            Ok(n) => n,
            Err(err) => return Poll::Ready(Err(err)),
        };
        buf.advance(n);
        Poll::Ready(Ok(()))
    }
}

impl AsyncWrite for MockFile {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Ready(io::Write::write(self.get_mut(), buf))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(MockFile::close(self.get_mut()).map_err(io::Error::from))
    }
}

impl AsyncSeek for MockFile {
    fn start_seek(self: Pin<&mut Self>, position: io::SeekFrom) -> io::Result<()> {
        io::Seek::seek(self.get_mut(), position).map(drop)
    }

    fn poll_complete(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<u64>> {
        Poll::Ready(u64::try_from(self.position()).map_err(|_| invalid_seek()))
    }
}
