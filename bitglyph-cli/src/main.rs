//! `bitglyph` CLI: export baseline-aligned 1bpp glyphs as column-hex records.

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use log::{LevelFilter, debug};

use bitglyph_core::pipeline::{DEFAULT_PIXEL_SIZE, DEFAULT_RANGE};
use bitglyph_core::{ExportOptions, export};

#[derive(Parser)]
#[command(
    version,
    about = "Export baseline-aligned 1bpp glyphs as column-hex setGlyph records"
)]
struct Cli {
    /// Path to a .ttf/.otf font file
    #[arg(long, value_name = "PATH")]
    font: PathBuf,

    /// Pixel size to rasterize at
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_PIXEL_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    size: u32,

    /// Code points: an interval like 0x21-0x7E or a list like 0x20,0x41,0x7E
    #[arg(long, value_name = "SPEC", default_value = DEFAULT_RANGE, allow_hyphen_values = true)]
    range: String,

    /// Family identifier for the records (default: derived from the font file name)
    #[arg(long, value_name = "NAME")]
    family: Option<String>,

    /// Output file (default: <font>_glyphs_<size>px.txt)
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Log more (-v: info, -vv: debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn export_options(&self) -> ExportOptions {
        ExportOptions {
            font: self.font.clone(),
            pixel_size: self.size,
            range: self.range.clone(),
            family: self.family.clone(),
            output: self.out.clone(),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match export(&cli.export_options()) {
        Ok(summary) => {
            println!("Wrote {} ({} glyphs)", summary.output.display(), summary.glyphs);
        }
        Err(e) => {
            debug!("export failed: {e:?}");
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
