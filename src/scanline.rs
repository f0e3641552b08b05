//! Per-scanline state machine
//!
//! Walks one horizontal scanline and emits the minimal command sequence
//! reproducing its burn/no-burn pattern: only laser state transitions
//! produce a line, so a run of identical pixels collapses into one motion
//! segment. GRBL attaches the power on a move to the segment *ending* at
//! that move's target, which is why an off-to-on transition is written with
//! `S0` (the dark run has not started yet) and an on-to-off transition with
//! the full power (the dark run ends at this boundary). Shifting that
//! tagging by one transition shifts every burn mark on the workpiece.

use crate::config::RasterConfig;
use crate::gcode;
use crate::oracle::PixelOracle;
use crate::units::UnitConverter;

/// Encodes single scanlines into G-code lines
pub struct ScanlineEncoder<'a> {
    oracle: &'a PixelOracle<'a>,
    units: UnitConverter,
    config: &'a RasterConfig,
    width_px: i32,
    width_mm: f64,
    overburn_px: i32,
}

impl<'a> ScanlineEncoder<'a> {
    pub fn new(
        oracle: &'a PixelOracle<'a>,
        units: UnitConverter,
        config: &'a RasterConfig,
        width_px: i32,
    ) -> Self {
        Self {
            oracle,
            units,
            config,
            width_px,
            width_mm: units.pixels_to_mm(width_px),
            overburn_px: units.mm_to_pixels(config.overburn_mm),
        }
    }

    /// Emit the command sequence for the scanline at pixel row `y`, which
    /// may lie in the vertical overburn margin outside the canvas.
    pub fn encode_row(&self, y: i32, out: &mut Vec<String>) {
        let y_mm = self.units.pixels_to_mm(y);

        // Enter the scan envelope from the left, laser off, then feed up
        // to the overburn boundary at zero power to establish the state.
        out.push(gcode::rapid_move(-self.config.overscan_mm, y_mm));
        out.push(gcode::feed_move(
            -self.config.overburn_mm,
            y_mm,
            0,
            self.config.feed_rate,
        ));

        // Out-of-canvas is always "burn", so the row starts hot.
        let mut laser_on = self.oracle.should_burn(-self.overburn_px, y);

        for x in -self.overburn_px..self.width_px + self.overburn_px {
            let burn = self.oracle.should_burn(x, y);
            if burn != laser_on {
                let x_mm = self.units.pixels_to_mm(x);
                let power = if burn { 0 } else { self.config.laser_power };
                out.push(gcode::continuation_move(x_mm, power));
                laser_on = burn;
            }
        }

        // Close the row: finish the trailing segment at the overburn
        // boundary, then coast out to the overscan limit laser-off.
        let trailing_power = if laser_on { self.config.laser_power } else { 0 };
        out.push(gcode::continuation_move(
            self.width_mm + self.config.overburn_mm,
            trailing_power,
        ));
        out.push(gcode::continuation_move(
            self.width_mm + self.config.overscan_mm,
            0,
        ));
        out.push(String::new());
    }
}
