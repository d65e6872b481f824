use crate::{blocks::BLOCK_SIZE, error::ConfigError, palettes::DEFAULT_COLORS};

/// Parameters of a rendering run.
///
/// Fields can be set directly or with the chained setters:
///
/// ```
/// use ecb_viz::Config;
/// let config = Config::new().colors(8).flip(false).pix_width(4);
/// assert_eq!(config.pixel_repeat(), 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Size of the palette, white and black included.  At least 2.
    pub colors: usize,
    /// Put the first block on the bottom row, as bitmaps store rows
    /// bottom-up.
    pub flip: bool,
    /// Number of bytes of a block represented by one pixel.  Must
    /// divide [`BLOCK_SIZE`].
    pub pix_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config { colors: DEFAULT_COLORS, flip: true, pix_width: BLOCK_SIZE }
    }
}

impl Config {
    pub fn new() -> Self { Self::default() }

    pub fn colors(mut self, n: usize) -> Self {
        self.colors = n;
        self
    }

    pub fn flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    pub fn pix_width(mut self, w: usize) -> Self {
        self.pix_width = w;
        self
    }

    /// Check the constraints between the parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.colors < 2 {
            return Err(ConfigError::TooFewColors(self.colors));
        }
        if self.pix_width == 0 || self.pix_width > BLOCK_SIZE {
            return Err(ConfigError::PixWidthOutOfRange(self.pix_width));
        }
        if BLOCK_SIZE % self.pix_width != 0 {
            return Err(ConfigError::PixWidthNotDivisor(self.pix_width));
        }
        Ok(())
    }

    /// Number of pixels each block occurrence expands to.
    #[inline]
    pub fn pixel_repeat(&self) -> usize { BLOCK_SIZE / self.pix_width }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!((c.colors, c.flip, c.pix_width), (254, true, 16));
        assert_eq!(c.pixel_repeat(), 1);
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn rejects_small_palettes() {
        for n in [0, 1] {
            assert_eq!(Config::new().colors(n).validate(),
                       Err(ConfigError::TooFewColors(n)));
        }
        assert!(Config::new().colors(2).validate().is_ok());
    }

    #[test]
    fn pix_width_must_divide_block_size() {
        for w in [1, 2, 4, 8, 16] {
            assert!(Config::new().pix_width(w).validate().is_ok(), "{w}");
        }
        assert_eq!(Config::new().pix_width(0).validate(),
                   Err(ConfigError::PixWidthOutOfRange(0)));
        assert_eq!(Config::new().pix_width(32).validate(),
                   Err(ConfigError::PixWidthOutOfRange(32)));
        for w in [3, 5, 6, 7, 9, 15] {
            assert_eq!(Config::new().pix_width(w).validate(),
                       Err(ConfigError::PixWidthNotDivisor(w)));
        }
    }
}
