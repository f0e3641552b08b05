//! Conversion parameters for the raster pass
//!
//! The original tool hardcoded these as script-level constants; here they
//! form an explicit configuration object so callers (and tests) can supply
//! alternate values.

/// Parameters controlling how the image is rastered into G-code
#[derive(Debug, Clone)]
pub struct RasterConfig {
    /// Vertical spacing between scanlines in mm
    pub raster_step_mm: f64,
    /// Margin past the image edge over which the laser keeps firing, in mm
    pub overburn_mm: f64,
    /// Laser-off travel margin past the image edge for acceleration
    /// clearance, in mm. Must be at least `overburn_mm`.
    pub overscan_mm: f64,
    /// Laser power level while burning (GRBL S value)
    pub laser_power: u32,
    /// Feed rate for engraving moves (mm/min)
    pub feed_rate: u32,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            raster_step_mm: 0.1,
            overburn_mm: 2.0,
            overscan_mm: 5.0,
            laser_power: 255,
            feed_rate: 2000,
        }
    }
}

impl RasterConfig {
    /// Check the configuration before any row is processed
    pub fn validate(&self) -> Result<(), String> {
        if !self.raster_step_mm.is_finite() || self.raster_step_mm <= 0.0 {
            return Err(format!(
                "Raster step must be positive, got {}",
                self.raster_step_mm
            ));
        }
        if !self.overburn_mm.is_finite() || self.overburn_mm < 0.0 {
            return Err(format!(
                "Overburn margin must not be negative, got {}",
                self.overburn_mm
            ));
        }
        if !self.overscan_mm.is_finite() || self.overscan_mm < self.overburn_mm {
            return Err(format!(
                "Overscan margin ({}) must be at least the overburn margin ({})",
                self.overscan_mm, self.overburn_mm
            ));
        }
        Ok(())
    }
}
