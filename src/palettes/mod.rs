//! Palettes assigning a color to each frequency rank.

use std::marker::PhantomData;
use lazy_static::lazy_static;
use rgb::RGBA;
use tracing::debug;

use crate::{error::ConfigError, RGBColor};

pub(crate) mod ty;

/// Number of colors of the default palette.
pub const DEFAULT_COLORS: usize = 254;

lazy_static! {
    /// One period of the middle colors.
    static ref CYCLE: Vec<RGBA<f64>> = (0 .. ty::PERIOD).map(ty::middle).collect();
}

/// An ordered list of colors: white first, black last and
/// deterministic colors in between.
///
/// The same length always gives the same palette, so images rendered
/// with the same number of colors can be compared.  Colors are computed
/// from their index, so the length costs no memory.
///
/// # Example
///
/// ```
/// use rgb::RGBA8;
/// use ecb_viz::Palette;
/// let p = Palette::<RGBA8>::new(4).unwrap();
/// assert_eq!(p.colors(), [RGBA8::new(255, 255, 255, 255),
///                         RGBA8::new(50, 80, 110, 255),
///                         RGBA8::new(100, 160, 220, 255),
///                         RGBA8::new(0, 0, 0, 255)]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Palette<Color> {
    len: usize, // Invariant: len ≥ 2
    color: PhantomData<Color>,
}

impl<Color: RGBColor> Palette<Color> {
    /// Return the palette with `len` colors.  Fails unless `len ≥ 2`
    /// since white and black are always present.
    pub fn new(len: usize) -> Result<Self, ConfigError> {
        if len < 2 {
            return Err(ConfigError::TooFewColors(len));
        }
        debug!(colors = len, "palette");
        Ok(Self { len, color: PhantomData })
    }

    /// Returns the number of colors in the palette (at least 2).
    pub fn len(&self) -> usize { self.len }

    /// Always `false`: a palette holds white and black.
    pub fn is_empty(&self) -> bool { false }

    /// Returns the color of index `i`, if any.
    pub fn get(&self, i: usize) -> Option<Color> {
        let rgba = if i == 0 { ty::WHITE }
                   else if i == self.len - 1 { ty::BLACK }
                   else if i < self.len { CYCLE[i % ty::PERIOD] }
                   else { return None };
        Some(Color::from_rgba(rgba))
    }

    /// The last color (black), given to blocks beyond the palette.
    pub fn fallback(&self) -> Color { Color::from_rgba(ty::BLACK) }

    /// Returns the colors of the palette.  This allocates [`len`]
    /// colors.
    ///
    /// [`len`]: Palette::len
    pub fn colors(&self) -> Vec<Color> {
        (0 .. self.len).filter_map(|i| self.get(i)).collect()
    }
}

impl<Color: RGBColor> Default for Palette<Color> {
    fn default() -> Self {
        Self { len: DEFAULT_COLORS, color: PhantomData }
    }
}
