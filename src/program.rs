//! Full-program assembly
//!
//! Orchestrates the scanline encoder over every row of the scan envelope
//! (image height plus the vertical overburn margin on both sides) and wraps
//! the rows in the GRBL setup and teardown directives.

use image::RgbaImage;

use crate::config::RasterConfig;
use crate::gcode::fmt_mm;
use crate::oracle::PixelOracle;
use crate::scanline::ScanlineEncoder;
use crate::units::UnitConverter;

/// Convert a decoded image into a complete G-code program.
///
/// `density` is the source image resolution in dots per inch and must be
/// positive; `source` names the image in the program header. Returns the
/// program as an ordered list of lines, without trailing newlines.
pub fn build_program(
    image: &RgbaImage,
    density: f64,
    config: &RasterConfig,
    source: &str,
) -> Result<Vec<String>, String> {
    if !density.is_finite() || density <= 0.0 {
        return Err(format!("Density must be positive, got {}", density));
    }
    config.validate()?;

    let units = UnitConverter::new(density);
    let width_px = image.width() as i32;
    let height_px = image.height() as i32;
    let width_mm = units.pixels_to_mm(width_px);
    let height_mm = units.pixels_to_mm(height_px);

    let mut lines = Vec::new();

    lines.push(format!("; Rastered from {}", source));
    lines.push(format!(
        "; Resolution of source: {}x{} at {}dpi ({}dpmm)",
        width_px,
        height_px,
        fmt_mm(density),
        fmt_mm(units.dots_per_mm())
    ));
    lines.push(format!(
        "; Board size: {}x{}mm",
        fmt_mm(width_mm),
        fmt_mm(height_mm)
    ));
    lines.push(String::new());

    lines.push("G21         ; Set units to mm".to_string());
    lines.push("G90         ; Absolute positioning".to_string());
    lines.push("$32=1       ; GRBL Laser Mode on".to_string());
    lines.push("M4 S0       ; Enable Laser/Spindle (0 power)".to_string());
    lines.push(String::new());

    let oracle = PixelOracle::new(image);
    let encoder = ScanlineEncoder::new(&oracle, units, config, width_px);

    let overburn_px = units.mm_to_pixels(config.overburn_mm);
    // A raster step finer than one pixel would otherwise truncate to a
    // zero-pixel stride and never advance.
    let step_px = units.mm_to_pixels(config.raster_step_mm).max(1);

    let mut y = -overburn_px;
    while y < height_px + overburn_px {
        encoder.encode_row(y, &mut lines);
        y += step_px;
    }

    lines.push("M5          ; Laser off".to_string());
    lines.push("G0 X0 Y0    ; Return to zero".to_string());

    Ok(lines)
}
