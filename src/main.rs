use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;
use palex::{
    AudioCoverReader, FileKind, Kernel, LoftyCoverReader, Palette, PaletteBuilder, PaletteEntry,
};
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

#[derive(Parser, Debug)]
#[command(name = "palex")]
#[command(about = "Extract a color palette from images and audio file cover art")]
struct Args {
    /// Input image or audio file paths
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Resolution: 1 keeps the original size, >1 is a pixel size for the
    /// longer side, 0-1 is a scale factor
    #[arg(long, default_value_t = 100.0)]
    precision: f32,

    /// Exclude near-black, near-white and grayish colors
    #[arg(long)]
    unabw: bool,

    /// Color output format
    #[arg(long, value_enum, default_value_t = ColorSys::Hex)]
    colorsys: ColorSys,

    /// Maximum number of colors
    #[arg(long = "max", default_value = "5", value_parser = clap::value_parser!(u8).range(1..))]
    max_colors: u8,

    /// Show each color's share of the counted pixels
    #[arg(long)]
    present: bool,

    /// Interpolation kernel for the resize step
    #[arg(long, value_enum, default_value_t = Kernel::Linear)]
    interpolation: Kernel,

    /// Enable detailed debug output
    #[arg(long)]
    dev: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ColorSys {
    Hex,
    Rgb,
    Rgba,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.dev { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // every input gets its own attempt; one bad file must not take the rest
    // of the batch down with it
    let mut failures = 0usize;

    for input in &args.inputs {
        if let Err(error) = extract_one(input, &args) {
            eprintln!("{}: {error:#}", input.display());
            failures += 1;
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn extract_one(input: &Path, args: &Args) -> Result<()> {
    let builder = match palex::classify_path(input)? {
        FileKind::Image => Palette::from_path(input)?,
        FileKind::Audio => {
            debug!("extracting cover from audio file {}", input.display());
            let cover = LoftyCoverReader
                .read_cover(input)
                .context("failed to extract cover")?;

            PaletteBuilder::from_cover_art(&cover)?
        }
    };

    let mut builder = builder
        .resolution(args.precision)
        .max_colors(args.max_colors as usize)
        .kernel(args.interpolation);

    if args.unabw {
        builder = builder.exclude_black_white();
    }

    let palette = builder.generate().context("failed to extract colors")?;

    if args.inputs.len() > 1 {
        println!("{}:", input.display());
    }

    for entry in palette.entries() {
        println!("{}", format_color(*entry, args.colorsys, args.present));
    }

    Ok(())
}

fn format_color(entry: PaletteEntry, colorsys: ColorSys, show_percentage: bool) -> String {
    let value = match colorsys {
        ColorSys::Hex => entry.hex(),
        ColorSys::Rgb => entry.css_rgb(),
        ColorSys::Rgba => entry.css_rgba(),
    };

    if show_percentage {
        format!("{value} ({}%)", entry.percentage())
    } else {
        value
    }
}
