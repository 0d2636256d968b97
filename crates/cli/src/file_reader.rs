// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Haystack reading with size-based strategy.
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. Concurrent modification of the input file is the caller's problem
#![allow(unsafe_code)]
//!
//! - < 64KB: Direct read into buffer
//! - >= 64KB: Memory-mapped I/O

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use memmap2::Mmap;

/// Files at or above this size are memory-mapped.
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Haystack bytes, either owned or memory-mapped.
///
/// Bytes are validated as UTF-8 only by [`Haystack::as_str`], whatever the source.
pub enum Haystack {
    /// Argument, stdin, or small file read into memory.
    Owned(Vec<u8>),
    /// Large file memory-mapped.
    Mapped(MappedContent),
}

/// Memory-mapped file content with UTF-8 validation.
pub struct MappedContent {
    mmap: Mmap,
}

impl MappedContent {
    /// Get content as string slice.
    /// Returns None if content is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.mmap).ok()
    }
}

impl From<String> for Haystack {
    fn from(text: String) -> Self {
        Haystack::Owned(text.into_bytes())
    }
}

impl Haystack {
    /// Read file using appropriate strategy based on size.
    pub fn read(path: &Path) -> io::Result<Self> {
        let meta = fs::metadata(path)?;
        let size = meta.len();

        if size < MMAP_THRESHOLD {
            Ok(Haystack::Owned(fs::read(path)?))
        } else {
            let file = File::open(path)?;
            // SAFETY: File handle is valid (just opened) and we don't mutate the mapped memory.
            let mmap = unsafe { Mmap::map(&file)? };
            tracing::debug!("memory-mapped {} ({} bytes)", path.display(), size);
            Ok(Haystack::Mapped(MappedContent { mmap }))
        }
    }

    /// Read all of `reader` (typically stdin) into memory.
    pub fn read_from(mut reader: impl Read) -> io::Result<Self> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;
        Ok(Haystack::Owned(content))
    }

    /// Get content as string slice.
    /// Returns None if content is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Haystack::Owned(bytes) => std::str::from_utf8(bytes).ok(),
            Haystack::Mapped(m) => m.as_str(),
        }
    }
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
