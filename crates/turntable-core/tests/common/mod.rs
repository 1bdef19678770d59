#![allow(dead_code)]

use std::path::Path;

use image::{Rgba, RgbaImage};
use turntable_core::frame::Frame;
use turntable_core::sequence::SequenceSpec;

/// Build a solid-color RGBA frame.
pub fn make_frame(width: u32, height: u32, rgba: [u8; 4]) -> Frame {
    Frame::new(RgbaImage::from_pixel(width, height, Rgba(rgba)))
}

/// Write one frame file using the sequence naming convention
/// (`<prefix><number, 4 digits>.png`, numbers starting at 1).
pub fn write_frame_file(dir: &Path, prefix: &str, number: usize, width: u32, height: u32) {
    let color = Rgba([(number % 256) as u8, 64, 128, 255]);
    let img = RgbaImage::from_pixel(width, height, color);
    let path = dir.join(format!("{prefix}{number:04}.png"));
    img.save(&path).expect("write frame png");
}

/// Build a synthetic sequence of `count` tiny frames in a temp directory.
///
/// The directory stays alive as long as the returned `TempDir` is not
/// dropped.
pub fn build_sequence(prefix: &str, count: usize, width: u32, height: u32) -> (tempfile::TempDir, SequenceSpec) {
    let dir = tempfile::tempdir().expect("create temp dir");
    for number in 1..=count {
        write_frame_file(dir.path(), prefix, number, width, height);
    }
    let spec = SequenceSpec::new(dir.path(), prefix, count);
    (dir, spec)
}
