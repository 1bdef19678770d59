use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use turntable_core::consts::{DEFAULT_EXTENSION, DEFAULT_PREFIX};
use turntable_core::loader::{load_frame, preload_rest};
use turntable_core::sequence::discover;

#[derive(Args)]
pub struct CheckArgs {
    /// Directory containing the frame sequence
    pub dir: PathBuf,

    /// Frame file name prefix
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Frame file extension
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,
}

/// Decode the whole sequence the way the player would: frame 0 eagerly,
/// the rest as an unordered batch. Individual failures are reported but do
/// not stop the run; only a broken first frame fails the check, since that
/// is the one the player cannot start without.
pub fn run(args: &CheckArgs) -> Result<()> {
    let spec = discover(&args.dir, &args.prefix, &args.extension)?;
    println!("Checking {} frames in {}", spec.count, spec.dir.display());

    let pb = ProgressBar::new(spec.count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Loading [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let first = load_frame(&spec, 0);
    let first_error = first.err();
    pb.inc(1);

    let report = preload_rest(&spec, |_, _| pb.inc(1));
    pb.finish();

    let ok = Style::new().green();
    let bad = Style::new().red().bold();
    let label = Style::new().dim();

    let loaded = report.loaded() + usize::from(first_error.is_none());
    let failed = report.failed.len() + usize::from(first_error.is_some());
    println!(
        "  {:<10}{}",
        label.apply_to("Loaded"),
        ok.apply_to(format!("{loaded}/{}", spec.count))
    );
    if failed > 0 {
        println!("  {:<10}{}", label.apply_to("Failed"), bad.apply_to(failed));
        if let Some(ref err) = first_error {
            println!("    {} ({err})", spec.frame_file_name(0));
        }
        for &index in &report.failed {
            println!("    {}", spec.frame_file_name(index));
        }
    }

    if let Some(err) = first_error {
        bail!("first frame failed to load: {err}");
    }
    Ok(())
}
