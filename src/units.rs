//! Pixel/millimeter conversion
//!
//! All physical coordinates in the output are derived from the source
//! image density (DPI); raw pixel counts never appear in emitted G-code.

/// Converts between pixel space and physical millimeter space for a given
/// image density
#[derive(Debug, Clone, Copy)]
pub struct UnitConverter {
    dots_per_mm: f64,
}

impl UnitConverter {
    /// Create a converter for an image of the given density in dots per
    /// inch. The caller must have validated `density > 0`.
    pub fn new(density: f64) -> Self {
        Self {
            dots_per_mm: density / 25.4,
        }
    }

    pub fn dots_per_mm(&self) -> f64 {
        self.dots_per_mm
    }

    /// Physical length of a pixel count, in mm. Coordinates may be
    /// negative (margin traversal).
    pub fn pixels_to_mm(&self, pixels: i32) -> f64 {
        f64::from(pixels) / self.dots_per_mm
    }

    /// Pixel count covered by a physical length. Truncates toward negative
    /// infinity: a partial pixel of margin is dropped, never added.
    pub fn mm_to_pixels(&self, mm: f64) -> i32 {
        (mm * self.dots_per_mm).floor() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_254_is_ten_dots_per_mm() {
        let units = UnitConverter::new(254.0);
        assert_eq!(units.dots_per_mm(), 10.0);
        assert_eq!(units.pixels_to_mm(1), 0.1);
        assert_eq!(units.pixels_to_mm(-20), -2.0);
        assert_eq!(units.mm_to_pixels(2.0), 20);
    }

    #[test]
    fn test_mm_to_pixels_floors() {
        let units = UnitConverter::new(100.0);
        // 0.1mm at 100dpi is 0.39 pixels, which truncates away
        assert_eq!(units.mm_to_pixels(0.1), 0);
        assert_eq!(units.mm_to_pixels(2.0), 7);
    }

    #[test]
    fn test_round_trip_drift_is_never_upward() {
        let units = UnitConverter::new(300.0);
        for px in 0..50 {
            let back = units.mm_to_pixels(units.pixels_to_mm(px));
            assert!(back <= px);
            assert!(back >= px - 1);
        }
    }
}
