use clap::Parser;
use laser_raster::{RasterConfig, build_program};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process;

/// Convert a raster image into a GRBL laser engraving G-code program
#[derive(Parser)]
#[command(name = "laser-raster", version)]
struct Args {
    /// Image file to process
    #[arg(short, long)]
    image: String,

    /// DPI of the image file
    #[arg(short, long)]
    density: f64,

    /// Output G-code file name
    #[arg(short, long)]
    output: String,

    /// Vertical spacing between scanlines in mm
    #[arg(long, default_value_t = 0.1)]
    raster_step: f64,

    /// Margin past the image edge the laser stays lit, in mm
    #[arg(long, default_value_t = 2.0)]
    overburn: f64,

    /// Laser-off travel margin past the image edge, in mm
    #[arg(long, default_value_t = 5.0)]
    overscan: f64,

    /// Laser power level while burning (GRBL S value)
    #[arg(long, default_value_t = 255)]
    laser_power: u32,

    /// Feed rate for engraving moves (mm/min)
    #[arg(long, default_value_t = 2000)]
    feed_rate: u32,
}

fn main() {
    let args = Args::parse();

    println!("laser-raster - loading {}", args.image);

    if !Path::new(&args.image).exists() {
        eprintln!("Image file '{}' could not be found", args.image);
        process::exit(1);
    }

    let img = match image::open(&args.image) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            eprintln!("Error decoding image file '{}': {}", args.image, e);
            process::exit(2);
        }
    };

    println!("Source resolution: {}x{}", img.width(), img.height());
    println!("Output file: {}", args.output);

    let config = RasterConfig {
        raster_step_mm: args.raster_step,
        overburn_mm: args.overburn,
        overscan_mm: args.overscan,
        laser_power: args.laser_power,
        feed_rate: args.feed_rate,
    };

    let lines = match build_program(&img, args.density, &config, &args.image) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(3);
        }
    };

    if let Err(e) = write_program(&args.output, &lines) {
        eprintln!("Error writing output file '{}': {}", args.output, e);
        process::exit(4);
    }
}

fn write_program(path: &str, lines: &[String]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}
