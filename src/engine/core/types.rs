use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Manifest written next to the working directory unless told otherwise
pub const DEFAULT_MANIFEST_PATH: &str = "concat.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "output.mp4";
pub const DEFAULT_OUTPUT_FRAME_RATE: f64 = 25.0;

/// One side of a target resolution.
///
/// `AutoScale` asks ffmpeg to derive this side from the other one so the
/// aspect ratio is preserved. It is rendered as `-1` in the scale filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Fixed(u32),
    AutoScale,
}

impl Dimension {
    pub fn is_valid(&self) -> bool {
        !matches!(self, Dimension::Fixed(0))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Fixed(px) => write!(f, "{}", px),
            Dimension::AutoScale => f.write_str("-1"),
        }
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") || s == "-1" {
            return Ok(Dimension::AutoScale);
        }

        match s.parse::<u32>() {
            Ok(0) => Err("dimension must be greater than zero".to_string()),
            Ok(px) => Ok(Dimension::Fixed(px)),
            Err(_) => Err(format!(
                "'{}' is not a pixel count, 'auto' or -1",
                s
            )),
        }
    }
}

/// Target output resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: Dimension,
    pub height: Dimension,
}

impl Resolution {
    pub fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }

    pub fn fixed(width: u32, height: u32) -> Self {
        Self::new(Dimension::Fixed(width), Dimension::Fixed(height))
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_valid() && self.height.is_valid()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses `WIDTHxHEIGHT`, e.g. `1280x720`, `-1x480` or `640xauto`
impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let (width, height) = lowered
            .split_once('x')
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;

        Ok(Self::new(width.parse()?, height.parse()?))
    }
}

/// Everything the sequencer needs to know to produce a manifest and a command.
///
/// Owned by [`super::SequenceBuilder`]; callers only ever see it read-only and
/// change it through the builder's setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Playback order; duplicates repeat a frame
    pub source_paths: Vec<PathBuf>,
    /// Seconds each image stays on screen, `1 / source fps`
    pub frame_duration: Option<f64>,
    pub manifest_path: PathBuf,
    pub output_path: PathBuf,
    pub output_frame_rate: f64,
    /// `None` keeps the source resolution and emits no filter at all
    pub output_resolution: Option<Resolution>,
    pub overwrite_existing: bool,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            source_paths: Vec::new(),
            frame_duration: None,
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            output_frame_rate: DEFAULT_OUTPUT_FRAME_RATE,
            output_resolution: None,
            overwrite_existing: false,
        }
    }
}
