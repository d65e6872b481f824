use rgb::RGBA;

/// Components are in \[0, 255\].
pub(crate) const WHITE: RGBA<f64> = RGBA { r: 255., g: 255., b: 255., a: 255. };
pub(crate) const BLACK: RGBA<f64> = RGBA { r: 0., g: 0., b: 0., a: 255. };

/// Middle colors repeat with this period: 50, 80 and 110 times 51 are
/// all multiples of 255.
pub(crate) const PERIOD: usize = 51;

/// Color of the middle index `i`: `(50 i, 80 i, 110 i) mod 255`.
/// Only depends on `i mod PERIOD`.
pub(crate) fn middle(i: usize) -> RGBA<f64> {
    let i = i % PERIOD;
    RGBA { r: ((i * 50) % 255) as f64,
           g: ((i * 80) % 255) as f64,
           b: ((i * 110) % 255) as f64,
           a: 255. }
}
