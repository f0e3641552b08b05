//! # laser-raster
//!
//! A Rust library for converting raster images into G-code programs for
//! GRBL-based laser engravers.
//!
//! ## How it works
//!
//! Each horizontal scanline of the image is walked pixel by pixel and
//! compressed into the minimal set of motion/power commands reproducing its
//! burn pattern: only laser state transitions emit a command. Pixels are
//! thresholded into burn/no-burn (no greyscale power modulation), and every
//! row is scanned with configurable overburn and overscan margins past the
//! image edges.
//!
//! ## Example
//!
//! ```rust,ignore
//! use laser_raster::{RasterConfig, build_program};
//!
//! let img = image::open("input.png").unwrap().to_rgba8();
//! let lines = build_program(&img, 254.0, &RasterConfig::default(), "input.png").unwrap();
//! std::fs::write("output.gcode", lines.join("\n") + "\n").unwrap();
//! ```

pub mod config;
pub mod gcode;
pub mod oracle;
pub mod program;
pub mod scanline;
pub mod units;

// Re-export commonly used items
pub use config::RasterConfig;
pub use oracle::{BURN_THRESHOLD, PixelOracle};
pub use program::build_program;
pub use scanline::ScanlineEncoder;
pub use units::UnitConverter;
