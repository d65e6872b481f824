//! Laying pixels out on a near-square grid and encoding it.

use std::io::Cursor;
use image::{
    error::{ImageError, ParameterError, ParameterErrorKind},
    ImageBuffer, ImageFormat, Rgba, RgbaImage,
};
use rgb::RGBA8;
use tracing::debug;

use crate::RGBColor;

/// A `width × height` grid of colors.  Cells not covered by a pixel
/// are unset (`None`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas<Color> {
    width: usize,
    height: usize,
    cells: Vec<Option<Color>>, // row-major, length = width * height
}

/// ⌊√n⌋
fn isqrt(n: usize) -> usize {
    let mut r = (n as f64).sqrt() as usize;
    while r * r > n { r -= 1 }
    while (r + 1).checked_mul(r + 1).is_some_and(|s| s <= n) { r += 1 }
    r
}

impl<Color: Copy> Canvas<Color> {
    /// Lay `pixels` row after row on a grid of width ⌊√n⌋ and the
    /// height needed to hold the `n` pixels.  If `flip`, rows are
    /// filled from the bottom, as in bitmaps.
    pub fn render(pixels: &[Color], flip: bool) -> Self {
        let n = pixels.len();
        if n == 0 {
            return Canvas { width: 0, height: 0, cells: vec![] };
        }
        let width = isqrt(n);
        let height = (n + width - 1) / width;
        let mut cells = vec![None; width * height];
        for (k, &c) in pixels.iter().enumerate() {
            let (x, y) = (k % width, k / width);
            if y >= height { break }
            let y = if flip { height - 1 - y } else { y };
            cells[y * width + x] = Some(c);
        }
        debug!(width, height, flip, "rendered canvas");
        Canvas { width, height, cells }
    }

    #[inline]
    pub fn width(&self) -> usize { self.width }

    #[inline]
    pub fn height(&self) -> usize { self.height }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) { (self.width, self.height) }

    /// Color of the cell at column `x` and row `y` (row 0 at the top),
    /// `None` if unset or out of the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            None
        }
    }

    /// Iterator over the rows, from the top.
    pub fn rows(&self) -> std::slice::Chunks<'_, Option<Color>> {
        self.cells.chunks(self.width.max(1))
    }

    /// The same canvas upside down.
    pub fn flipped(&self) -> Self {
        let cells = self.rows().rev().flatten().copied().collect();
        Canvas { width: self.width, height: self.height, cells }
    }
}

impl<Color: RGBColor + Copy> Canvas<Color> {
    /// Convert to an RGBA image.  Unset cells are transparent.
    pub fn to_image(&self) -> Result<RgbaImage, ImageError> {
        let (Ok(w), Ok(h)) = (u32::try_from(self.width),
                              u32::try_from(self.height)) else {
            return Err(ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch)));
        };
        Ok(ImageBuffer::from_fn(w, h, |x, y| {
            match self.get(x as usize, y as usize) {
                Some(c) => {
                    let RGBA8 { r, g, b, a } = RGBA8::from_rgba(c.to_rgba());
                    Rgba([r, g, b, a])
                }
                None => Rgba([0; 4]),
            }
        }))
    }

    /// Encode the canvas as a PNG byte stream.
    pub fn encode_png(&self) -> Result<Vec<u8>, ImageError> {
        let mut out = Cursor::new(Vec::new());
        self.to_image()?.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }
}
