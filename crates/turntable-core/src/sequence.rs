use std::path::{Path, PathBuf};

use crate::consts::{DEFAULT_EXTENSION, DEFAULT_PREFIX, FRAME_NUMBER_PAD};
use crate::error::{Result, TurntableError};

/// Naming convention of a turntable sequence on disk.
///
/// Frame index `i` (0-based) is stored as
/// `<dir>/<prefix><i+1, zero-padded to 4 digits>.<extension>`, so frame 0 of
/// the reference sequence is `male0001.png`. The prefix, extension, and
/// count are configurable; the pattern itself is the contract between the
/// player and its asset store.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SequenceSpec {
    pub dir: PathBuf,
    pub prefix: String,
    pub extension: String,
    pub count: usize,
}

impl SequenceSpec {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, count: usize) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            count,
        }
    }

    /// File name of a frame, without the directory.
    pub fn frame_file_name(&self, index: usize) -> String {
        format!(
            "{}{:0pad$}.{}",
            self.prefix,
            index + 1,
            self.extension,
            pad = FRAME_NUMBER_PAD
        )
    }

    /// Full path of a frame. Out-of-range indices are an error.
    pub fn frame_path(&self, index: usize) -> Result<PathBuf> {
        if index >= self.count {
            return Err(TurntableError::FrameIndexOutOfRange {
                index,
                total: self.count,
            });
        }
        Ok(self.dir.join(self.frame_file_name(index)))
    }

    /// Read the first frame's dimensions (header only, no pixel decode) and
    /// build a `SequenceInfo`.
    pub fn probe(&self) -> Result<SequenceInfo> {
        if self.count == 0 {
            return Err(TurntableError::EmptySequence(self.dir.clone()));
        }
        let first = self.frame_path(0)?;
        let (width, height) = image::image_dimensions(&first)?;
        Ok(SequenceInfo {
            dir: self.dir.clone(),
            prefix: self.prefix.clone(),
            count: self.count,
            width,
            height,
        })
    }
}

/// Metadata about a sequence, read from disk.
#[derive(Clone, Debug)]
pub struct SequenceInfo {
    pub dir: PathBuf,
    pub prefix: String,
    pub count: usize,
    pub width: u32,
    pub height: u32,
}

impl SequenceInfo {
    /// Estimated decoded size of the whole sequence (RGBA8), in bytes.
    pub fn decoded_bytes(&self) -> usize {
        self.width as usize * self.height as usize * 4 * self.count
    }
}

/// Scan a directory for the contiguous run of frames starting at number
/// 0001 and return the spec covering it.
///
/// Gaps terminate the run: `male0001..male0123` with `male0125` present but
/// `male0124` missing yields a count of 123.
pub fn discover(dir: &Path, prefix: &str, extension: &str) -> Result<SequenceSpec> {
    let mut spec = SequenceSpec {
        dir: dir.to_path_buf(),
        prefix: prefix.to_string(),
        extension: extension.to_string(),
        count: 0,
    };

    loop {
        let name = spec.frame_file_name(spec.count);
        if !dir.join(name).is_file() {
            break;
        }
        spec.count += 1;
    }

    if spec.count == 0 {
        return Err(TurntableError::EmptySequence(dir.to_path_buf()));
    }
    Ok(spec)
}

/// `discover` with the reference naming (`male*.png`).
pub fn discover_default(dir: &Path) -> Result<SequenceSpec> {
    discover(dir, DEFAULT_PREFIX, DEFAULT_EXTENSION)
}
