// Example runner for the `tintwork` library.
//
// Builds a synthetic gradient in memory, resizes it, copies its pixels out,
// applies one color operation to every pixel and reports what happened at each
// stage along with how long it took.

use std::env;
use std::str::FromStr;

use tintwork::{
    Color, Error, PixelBuffer, ResizeConfig, SequenceExt, Stopwatch, clamp, enum_to_name, measure,
    named_enum, parse_enum, resize,
};

named_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Operation {
        Quantize,
        Brighten,
        Darken,
        Halve,
    }
}

fn parse_arg<T: FromStr>(args: &[String], index: usize, name: &'static str, default: T) -> tintwork::Result<T>
where
    T::Err: std::fmt::Display,
{
    match args.get(index) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| Error::InvalidArgument {
            name,
            reason: format!("`{raw}`: {e}"),
        }),
    }
}

fn apply(operation: Operation, color: Color, amount: i32) -> tintwork::Result<Color> {
    let byte = clamp(amount, 0, 255) as u8;
    match operation {
        Operation::Quantize => color.quantize(amount),
        Operation::Brighten => Ok(color + byte),
        Operation::Darken => Ok(color - byte),
        Operation::Halve => color.checked_div(2.0_f64),
    }
}

fn main() -> tintwork::Result<()> {
    // --- 1. Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: tintwork <Quantize|Brighten|Darken|Halve> [amount] [width] [height]");
        return Ok(());
    }
    let operation: Operation = parse_enum(&args[1])?;
    let amount: i32 = parse_arg(&args, 2, "amount", 4)?;
    let width: u32 = parse_arg(&args, 3, "width", 64)?;
    let height: u32 = parse_arg(&args, 4, "height", 48)?;

    // --- 2. Source Image ---
    let source = image::RgbImage::from_fn(256, 256, |x, y| {
        Color::from_channels_clamped(x as i32, y as i32, (x + y) as i32 / 2).into()
    });
    let config = ResizeConfig {
        keep_aspect_ratio: true,
        ..ResizeConfig::default()
    };
    let (resized, took) = measure(|| resize(&source, width, height, &config));
    let resized = resized?;
    println!(
        "Resized 256x256 -> {}x{} in {took:.3?}",
        resized.width(),
        resized.height()
    );

    // --- 3. Pixel Extraction ---
    let mut stopwatch = Stopwatch::start_new();
    let buffer = PixelBuffer::from_image(&resized);
    stopwatch.stop();
    println!("Extracted {} pixels in {stopwatch}", buffer.pixels().len());

    // --- 4. Color Operation ---
    stopwatch.restart();
    let processed = buffer
        .pixels()
        .iter()
        .map(|&color| apply(operation, color, amount))
        .collect::<tintwork::Result<Vec<Color>>>()?;
    stopwatch.stop();

    let distinct = processed
        .iter()
        .copied()
        .aggregate(|mut seen: Vec<Color>, color| {
            if !seen.contains(&color) {
                seen.push(color);
            }
            seen
        })
        .len();
    let clipped = processed
        .iter()
        .select_where(|c| *c, |c| **c == Color::WHITE || **c == Color::BLACK)
        .count();

    println!(
        "{} ({amount}) produced {distinct} distinct colors, {clipped} at black or white, in {stopwatch}",
        enum_to_name(operation)
    );

    Ok(())
}
