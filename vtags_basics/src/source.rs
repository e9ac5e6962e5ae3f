//! Data structures that keep the scanned source code in memory and handle
//! decoding of source location data:
//!
//! - There is one SourceManager per tool run that owns all source text
//!   involved.
//! - The source is made of SourceChunks, one per input file, wholesale loaded
//!   into memory as a single str.  New chunks can be added given only a
//!   shared reference, so chunk references stay valid while the manager
//!   grows.
//! - A location within a chunk is a plain byte index into its text.  When a
//!   file/line/column triple is needed (for export to something that has a
//!   fixed idea of a location), call get_line_info on the chunk; the line
//!   table backing it is computed lazily, on the first lookup.

use elsa::FrozenVec;
use once_cell::unsync::OnceCell;
use std::fmt;
use std::fmt::Debug;

/// A contiguous chunk of source code, belonging to a SourceManager.
/// Corresponds to one loaded source file.
pub struct SourceChunk {
    /// The source file name.
    pub file_name: Box<str>,
    /// The meat of this chunk.
    pub text: Box<str>,
    /// Vector of all text indices that start a new line, lazily computed.
    raw_line_table: OnceCell<Box<[usize]>>,
}

/// A catalogue of all source files involved in a tool run.  New files can be
/// inserted given only a shared reference.
pub struct SourceManager {
    chunks: FrozenVec<Box<SourceChunk>>,
}

/// Result of looking up a position within a chunk.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SourceLineInfo<'a> {
    /// Line number, 1-based.
    pub line_num: usize,
    /// The line text (including its terminator, if any).
    pub line: &'a str,
    /// Offset, in bytes, within the line text.
    pub line_offset: usize,
}

impl SourceChunk {
    /// Returns the raw line table, materializing it first if necessary.
    fn get_raw_line_table(&self) -> &[usize] {
        self.raw_line_table.get_or_init(|| {
            let mut res = vec![0];
            let mut pos = 0;
            while let Some(n) = self.text[pos..].find(&['\r', '\n'][..]) {
                pos += n;
                if self.text[pos..].starts_with("\r\n") {
                    pos += 2;
                } else {
                    pos += 1;
                }
                res.push(pos);
            }
            res.into_boxed_slice()
        })
    }

    /// Decodes a raw position into line number and related information.
    pub fn get_line_info(&self, pos: usize) -> SourceLineInfo {
        assert!(pos <= self.text.len());
        let raw_line_table = self.get_raw_line_table();
        let line_num = raw_line_table.partition_point(|x| *x <= pos);
        let line_idx = line_num - 1;
        let line_start = raw_line_table[line_idx];
        let line_end = raw_line_table
            .get(line_idx + 1)
            .copied()
            .unwrap_or(self.text.len());
        SourceLineInfo {
            line_num,
            line: &self.text[line_start..line_end],
            line_offset: pos - line_start,
        }
    }
}

impl Debug for SourceChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("SourceChunk")
            .field("file_name", &self.file_name)
            .finish()
    }
}

impl SourceManager {
    /// Creates a new SourceManager.
    pub fn new() -> Self {
        SourceManager {
            chunks: FrozenVec::new(),
        }
    }

    /// Adds a new file, returning a reference to the created chunk.
    pub fn add_file(
        &self,
        file_name: impl Into<Box<str>>,
        text: impl Into<Box<str>>,
    ) -> &SourceChunk {
        self.chunks.push_get(Box::new(SourceChunk {
            file_name: file_name.into(),
            text: text.into(),
            raw_line_table: OnceCell::new(),
        }))
    }

    /// Iterates over all chunks, in insertion order.
    pub fn iter_chunks(&self) -> impl Iterator<Item = &SourceChunk> {
        (0..self.chunks.len()).map(|i| &self.chunks[i])
    }
}

impl Default for SourceManager {
    fn default() -> Self {
        SourceManager::new()
    }
}

impl SourceLineInfo<'_> {
    /// Column number, 1-based.  Columns count bytes, as code navigation
    /// tools expect.
    pub fn column_num(&self) -> usize {
        self.line_offset + 1
    }
}

#[cfg(test)]
mod tests;
