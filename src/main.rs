use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use camblock::{CameraConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH, FourCc, write_config_file};

/// Generate the camera's EEPROM configuration block
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The output file to write to
    output: PathBuf,

    /// Pixel format code, exactly four ASCII characters
    #[arg(long, default_value = "Y16 ")]
    fourcc: FourCc,

    /// Frame width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Frame height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = CameraConfig::new(args.fourcc, args.width, args.height);

    write_config_file(&args.output, &config)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}
