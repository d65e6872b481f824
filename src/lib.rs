//! Render the block-repetition pattern of a file encrypted with a
//! block cipher in ECB mode.
//!
//! ECB encrypts identical plaintext blocks to identical ciphertext
//! blocks, so coloring each ciphertext block according to how often it
//! occurs often reveals the picture that was encrypted.
//!
//! The transformation is a pipeline of pure stages:
//!
//! - [`segment`] cuts the bytes into [`BLOCK_SIZE`] blocks;
//! - [`RankedList::rank`] sorts the distinct blocks by frequency;
//! - [`Palette::new`] provides the colors;
//! - [`ColorAssignment`] gives a color to each block by rank and
//!   expands the block sequence into pixels;
//! - [`Canvas::render`] lays the pixels out on a near-square grid.
//!
//! [`visualize`] chains them and [`render_file`] adds reading the
//! input and writing a PNG.

use std::{ffi::OsString, fs, path::{Path, PathBuf}};
use rgb::{RGBA, RGB8, RGBA8};
use tracing::info;

mod assign;
mod blocks;
mod canvas;
mod config;
mod error;
mod palettes;

pub use assign::ColorAssignment;
pub use blocks::{segment, Block, FrequencyEntry, RankedList, BLOCK_SIZE};
pub use canvas::Canvas;
pub use config::Config;
pub use error::{ConfigError, Error};
pub use palettes::{Palette, DEFAULT_COLORS};

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r as u8,  g: c.g as u8,  b: c.b as u8 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r as u8,  g: c.g as u8,  b: c.b as u8, a: c.a as u8 }
    }
}


/// Render `bytes` according to `config`.
///
/// # Example
///
/// ```
/// use rgb::RGBA8;
/// use ecb_viz::{visualize, Config};
/// let canvas = visualize::<RGBA8>(&[0; 32], &Config::default()).unwrap();
/// assert_eq!(canvas.dimensions(), (1, 2));
/// assert_eq!(canvas.get(0, 0), Some(RGBA8::new(255, 255, 255, 255)));
/// ```
pub fn visualize<Color>(bytes: &[u8], config: &Config)
                        -> Result<Canvas<Color>, Error>
where Color: RGBColor + Copy {
    run(bytes, config).map(|(canvas, _)| canvas)
}

/// Number of blocks and of distinct blocks.
struct Counts { blocks: usize, distinct: usize }

fn run<Color>(bytes: &[u8], config: &Config)
              -> Result<(Canvas<Color>, Counts), Error>
where Color: RGBColor + Copy {
    config.validate()?;
    let blocks = segment(bytes)?;
    let ranked = RankedList::rank(&blocks);
    let palette = Palette::new(config.colors)?;
    let assignment = ColorAssignment::new(&ranked, &palette);
    let pixels = assignment.expand(&blocks, config.pixel_repeat());
    let counts = Counts { blocks: blocks.len(), distinct: ranked.len() };
    Ok((Canvas::render(&pixels, config.flip), counts))
}

/// Default output path for `input`: `_aes.png` appended to its file
/// name.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push("_aes.png");
    PathBuf::from(name)
}

/// Summary of a [`render_file`] run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub blocks: usize,
    pub distinct: usize,
    pub width: usize,
    pub height: usize,
    pub output: PathBuf,
}

/// Read `input`, render it and write the PNG to `output`.
pub fn render_file(input: &Path, output: &Path, config: &Config)
                   -> Result<Report, Error> {
    config.validate()?;
    let bytes = fs::read(input).map_err(|source| Error::InputRead {
        path: input.to_path_buf(), source })?;
    let (canvas, Counts { blocks, distinct }) = run::<RGBA8>(&bytes, config)?;
    let png = canvas.encode_png()?;
    fs::write(output, png).map_err(|source| Error::OutputWrite {
        path: output.to_path_buf(), source })?;
    let (width, height) = canvas.dimensions();
    info!(input = %input.display(), blocks, distinct, width, height,
          "rendered");
    Ok(Report { blocks, distinct, width, height,
                output: output.to_path_buf() })
}
