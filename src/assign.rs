//! Coloring blocks by rank and expanding them into pixels.

use std::collections::HashMap;
use tracing::debug;

use crate::{blocks::{Block, RankedList}, palettes::Palette, RGBColor};

/// The color of every distinct block.
pub struct ColorAssignment<'a, Color> {
    colors: HashMap<Block<'a>, Color>,
    fallback: Color,
}

impl<'a, Color> ColorAssignment<'a, Color>
where Color: RGBColor + Copy {
    /// Give the block of rank `i` the color `palette[i]` as long as
    /// `i < palette.len() - 1`.  All other blocks get the last color
    /// (black).
    pub fn new(ranked: &RankedList<'a>, palette: &Palette<Color>) -> Self {
        let last = palette.len() - 1;
        let fallback = palette.fallback();
        let colors = ranked.iter().enumerate()
            .map(|(i, e)| {
                let c = if i < last { palette.get(i) } else { None };
                (e.block, c.unwrap_or(fallback))
            })
            .collect();
        debug!(distinct = ranked.len(), colored = ranked.len().min(last),
               "assigned colors");
        ColorAssignment { colors, fallback }
    }

    /// Color of `block`, black if it was not ranked.
    pub fn color(&self, block: &Block<'_>) -> Color {
        self.colors.get(block).copied().unwrap_or(self.fallback)
    }

    /// Replay `blocks` in order, each one as `repeat` pixels of its
    /// color.
    pub fn expand(&self, blocks: &[Block<'_>], repeat: usize) -> Vec<Color> {
        let mut pixels = Vec::with_capacity(blocks.len() * repeat);
        for b in blocks {
            let c = self.color(b);
            pixels.extend(std::iter::repeat(c).take(repeat));
        }
        debug!(pixels = pixels.len(), repeat, "expanded blocks");
        pixels
    }
}
