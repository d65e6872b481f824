//! Cutting a byte stream into cipher blocks and ranking them by
//! frequency.

use std::collections::HashMap;
use tracing::debug;

use crate::error::Error;

/// Length in bytes of a block, the block size of AES.
pub const BLOCK_SIZE: usize = 16;

/// A [`BLOCK_SIZE`] bytes slice of the input.  Two blocks are equal
/// iff their bytes are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Block<'a>(&'a [u8]);

impl<'a> Block<'a> {
    /// The bytes of the block.
    #[inline]
    pub fn bytes(&self) -> &'a [u8] { self.0 }
}

/// Split `bytes` into consecutive blocks, in input order.  Trailing
/// bytes not filling a whole block are dropped.
///
/// Fails with [`Error::EmptyInput`] if `bytes` is shorter than a
/// block.
pub fn segment(bytes: &[u8]) -> Result<Vec<Block<'_>>, Error> {
    let chunks = bytes.chunks_exact(BLOCK_SIZE);
    let dropped = chunks.remainder().len();
    let blocks: Vec<_> = chunks.map(Block).collect();
    if blocks.is_empty() {
        return Err(Error::EmptyInput { len: bytes.len() });
    }
    debug!(blocks = blocks.len(), dropped, "segmented input");
    Ok(blocks)
}

/// A distinct block together with its number of occurrences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrequencyEntry<'a> {
    pub block: Block<'a>,
    pub count: usize,
    /// Position of the first occurrence in the block sequence.
    pub first_seen: usize,
}

/// Distinct blocks sorted by decreasing count.  Blocks with the same
/// count keep the order of their first occurrence.
#[derive(Clone, Debug)]
pub struct RankedList<'a> {
    entries: Vec<FrequencyEntry<'a>>,
}

impl<'a> RankedList<'a> {
    /// Count the occurrences of each distinct block of `blocks` and
    /// rank them.
    pub fn rank(blocks: &[Block<'a>]) -> Self {
        let mut index: HashMap<Block<'a>, usize> = HashMap::new();
        let mut entries: Vec<FrequencyEntry<'a>> = Vec::new();
        for (pos, &block) in blocks.iter().enumerate() {
            let i = *index.entry(block).or_insert_with(|| {
                entries.push(FrequencyEntry { block, count: 0, first_seen: pos });
                entries.len() - 1
            });
            entries[i].count += 1;
        }
        // `entries` is in first-seen order and the sort is stable.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        debug!(distinct = entries.len(), "ranked blocks");
        RankedList { entries }
    }

    /// Number of distinct blocks.
    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Entry of rank `i` (0 being the most frequent).
    pub fn get(&self, i: usize) -> Option<&FrequencyEntry<'a>> {
        self.entries.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyEntry<'a>> {
        self.entries.iter()
    }

    /// Sum of the counts, i.e., the number of blocks ranked.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }
}

impl<'a, 'r> IntoIterator for &'r RankedList<'a> {
    type Item = &'r FrequencyEntry<'a>;
    type IntoIter = std::slice::Iter<'r, FrequencyEntry<'a>>;

    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}
