use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use turntable_core::consts::{DEFAULT_EXTENSION, DEFAULT_PREFIX};
use turntable_core::sequence::discover;

#[derive(Args)]
pub struct InfoArgs {
    /// Directory containing the frame sequence
    pub dir: PathBuf,

    /// Frame file name prefix
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Frame file extension
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let spec = discover(&args.dir, &args.prefix, &args.extension)?;
    let info = spec.probe()?;

    println!("Directory:   {}", info.dir.display());
    println!("Frames:      {}", info.count);
    println!("Dimensions:  {}x{}", info.width, info.height);
    println!(
        "Naming:      {} .. {}",
        spec.frame_file_name(0),
        spec.frame_file_name(spec.count - 1)
    );

    let total_mb = info.decoded_bytes() as f64 / (1024.0 * 1024.0);
    println!("Decoded:     {:.1} MB", total_mb);

    Ok(())
}
