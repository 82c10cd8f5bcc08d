use std::{any::Any, time::SystemTime};

/// A snapshot of a mock file's metadata, as returned by `stat`.
///
/// Only the name and size carry information. Everything else reports the
/// fixed values of a plain regular file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    name: String,
    size: u64,
}

impl Metadata {
    pub(crate) fn new(name: String, size: u64) -> Self { Self { name, size } }

    /// The name the file was created with.
    pub fn name(&self) -> &str { &self.name }

    /// Size of the stored content in bytes.
    pub fn len(&self) -> u64 { self.size }

    pub fn is_empty(&self) -> bool { self.size == 0 }

    /// Permission bits. Always zero.
    pub fn mode(&self) -> u32 { 0 }

    /// Last modification time. Always the Unix epoch.
    pub fn modified(&self) -> SystemTime { SystemTime::UNIX_EPOCH }

    pub fn is_dir(&self) -> bool { false }

    pub fn is_file(&self) -> bool { true }

    /// Platform specific data. There is none.
    pub fn sys(&self) -> Option<&dyn Any> { None }
}
