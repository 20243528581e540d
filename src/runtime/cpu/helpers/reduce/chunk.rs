//! Deterministic chunk partitioning
//!
//! Chunk boundaries are a pure function of the array length and the chunk
//! size. Nothing here may depend on thread counts or scheduling: the number
//! of chunks and the span of each chunk must be the same on every run.

use std::ops::Range;

/// Number of chunks covering `n` elements, `ceil(n / chunk_size)`
///
/// # Panics
///
/// Panics if `chunk_size` is zero.
#[inline]
pub fn chunk_count(n: usize, chunk_size: usize) -> usize {
    assert!(chunk_size > 0, "chunk_size must be non-zero");
    n.div_ceil(chunk_size)
}

/// Index range of chunk `index`, `[index * chunk_size, min((index + 1) * chunk_size, n))`
///
/// # Panics
///
/// Panics if `chunk_size` is zero or `index` is not below [`chunk_count`].
#[inline]
pub fn chunk_range(n: usize, chunk_size: usize, index: usize) -> Range<usize> {
    assert!(
        index < chunk_count(n, chunk_size),
        "chunk index {index} out of range for n={n}, chunk_size={chunk_size}"
    );
    let start = index * chunk_size;
    start..(start + chunk_size).min(n)
}

/// Fixed partition of `[0, n)` into contiguous chunks
///
/// `Chunks` is `Copy` and `Sync`, so workers share it and look up the range
/// of any chunk index they are assigned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Chunks {
    n: usize,
    chunk_size: usize,
}

impl Chunks {
    /// Partition `n` elements into chunks of `chunk_size`
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn new(n: usize, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be non-zero");
        Self { n, chunk_size }
    }

    /// Target chunk size (the last chunk may be shorter)
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of chunks
    #[inline]
    pub fn len(&self) -> usize {
        chunk_count(self.n, self.chunk_size)
    }

    /// Returns true when there are no chunks (`n == 0`)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Index range of chunk `index`
    #[inline]
    pub fn range(&self, index: usize) -> Range<usize> {
        chunk_range(self.n, self.chunk_size, index)
    }

    /// Iterator over all chunk ranges in index order
    pub fn iter(&self) -> ChunkRanges {
        ChunkRanges {
            chunks: *self,
            next: 0,
        }
    }
}

impl IntoIterator for Chunks {
    type Item = Range<usize>;
    type IntoIter = ChunkRanges;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the ranges of a [`Chunks`] partition
#[derive(Clone, Debug)]
pub struct ChunkRanges {
    chunks: Chunks,
    next: usize,
}

impl Iterator for ChunkRanges {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.chunks.len() {
            return None;
        }
        let range = self.chunks.range(self.next);
        self.next += 1;
        Some(range)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.chunks.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChunkRanges {}
