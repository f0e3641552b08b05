//! Burn decision for a single pixel coordinate
//!
//! The oracle answers "should the laser be firing at this location" for any
//! coordinate, including ones outside the canvas. Out-of-canvas coordinates
//! always answer yes: the scan envelope extends past the image on both
//! sides, and the state machine in the scanline encoder must enter the
//! visible area already settled at full power intent. Which motion segments
//! actually carry power is decided there, not here.

use image::{Rgba, RgbaImage};

/// Channel cutoff separating "light" from "dark". Any channel above this
/// value makes the pixel light (no burn).
pub const BURN_THRESHOLD: u8 = 10;

/// Pure burn predicate over a decoded image
pub struct PixelOracle<'a> {
    image: &'a RgbaImage,
    width: i32,
    height: i32,
}

impl<'a> PixelOracle<'a> {
    pub fn new(image: &'a RgbaImage) -> Self {
        Self {
            image,
            width: image.width() as i32,
            height: image.height() as i32,
        }
    }

    /// Whether the laser should be firing at pixel coordinate `(x, y)`.
    ///
    /// `y` is in Cartesian machine orientation: row 0 is the bottom of the
    /// image, so in-canvas samples read row `height - 1 - y` of the stored
    /// image. Alpha is ignored.
    pub fn should_burn(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.width {
            return true;
        }
        if y < 0 || y >= self.height {
            return true;
        }

        let flipped_y = self.height - 1 - y;
        let Rgba([r, g, b, _]) = *self.image.get_pixel(x as u32, flipped_y as u32);

        r <= BURN_THRESHOLD && g <= BURN_THRESHOLD && b <= BURN_THRESHOLD
    }
}
