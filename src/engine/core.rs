mod error;
mod ffmpeg_cmd;
mod ffmpeg_info;
mod manifest;
mod runner;
mod sequencer;
mod types;

pub use error::SequenceError;
pub use ffmpeg_cmd::{
    PIXEL_FORMAT, VIDEO_CODEC, build_ffmpeg_args, build_filter_chain, format_ffmpeg_cmd,
};
pub use ffmpeg_info::{encoder_version, parse_version_line};
pub use manifest::{render_manifest, write_manifest};
pub use runner::{FfmpegRunner, Filesystem, LocalFs, ProcessRunner, ToolOutput};
pub use sequencer::SequenceBuilder;
pub use types::{
    DEFAULT_MANIFEST_PATH, DEFAULT_OUTPUT_FRAME_RATE, DEFAULT_OUTPUT_PATH, Dimension, Resolution,
    SequenceConfig,
};
