use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use turntable_core::consts::{DEFAULT_EXTENSION, DEFAULT_PREFIX};
use turntable_core::loader::load_frame;
use turntable_core::player::Player;
use turntable_core::scrub::map_scroll_to_frame;
use turntable_core::sequence::discover;

#[derive(Args)]
pub struct RenderArgs {
    /// Directory containing the frame sequence
    pub dir: PathBuf,

    /// Frame file name prefix
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Frame file extension
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Frame index to render (0-based)
    #[arg(long, conflicts_with = "scroll")]
    pub frame: Option<usize>,

    /// Scroll offset in pixels; the frame is picked via the scrub mapping
    #[arg(long, requires = "scrollable")]
    pub scroll: Option<f64>,

    /// Scrollable distance in pixels, for --scroll
    #[arg(long)]
    pub scrollable: Option<f64>,

    /// Surface width
    #[arg(long, default_value = "1280")]
    pub width: u32,

    /// Surface height
    #[arg(long, default_value = "720")]
    pub height: u32,

    /// Output file path
    #[arg(short, long, default_value = "frame.png")]
    pub output: PathBuf,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let spec = discover(&args.dir, &args.prefix, &args.extension)?;

    let index = match (args.frame, args.scroll) {
        (Some(index), _) => index,
        (None, Some(offset)) => {
            let scrollable = args.scrollable.context("--scrollable is required with --scroll")?;
            map_scroll_to_frame(offset, scrollable, spec.count)
        }
        (None, None) => 0,
    };

    let frame = load_frame(&spec, index)
        .with_context(|| format!("failed to load {}", spec.frame_file_name(index)))?;

    let mut player = Player::new(spec, args.width, args.height)?;
    player.set_frame(index as i64);
    player.apply_load(index, Ok(frame))?;
    player.surface().save_png(&args.output)?;

    println!(
        "Rendered frame {index} at {}x{} to {}",
        args.width,
        args.height,
        args.output.display()
    );
    Ok(())
}
