use clap::{Args, Parser, Subcommand};
use image_sequencer::engine::Resolution;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "image-sequencer")]
#[command(about = "Turn a sequence of still images into a video with ffmpeg", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Append log records to this file instead of stderr
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// ffmpeg executable to use (overrides config)
    #[arg(long, value_name = "PROGRAM", global = true)]
    pub ffmpeg: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the concat manifest only
    Manifest(SequenceArgs),

    /// Print the ffmpeg command line without running it
    Command {
        #[command(flatten)]
        sequence: SequenceArgs,

        /// Print the argument list as a JSON array instead of a shell line
        #[arg(long)]
        json: bool,
    },

    /// Write the manifest and run ffmpeg
    Run(SequenceArgs),

    /// Show how many images are selected and how long the video will be
    Summary(SequenceArgs),

    /// Check if ffmpeg is installed
    CheckFfmpeg,

    /// Show config status and location, or create default config if missing
    InitConfig,
}

/// Options shared by every sequencing subcommand. Unset values fall back to config.
#[derive(Args, Debug, Clone, Default)]
pub struct SequenceArgs {
    /// Image files and/or directories, in playback order
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Rate the images are played at; each image lasts 1/FPS seconds
    #[arg(long, value_name = "FPS")]
    pub source_fps: Option<f64>,

    /// Frame rate of the encoded video
    #[arg(long, value_name = "FPS")]
    pub output_fps: Option<f64>,

    /// Output video file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Where to write the concat manifest
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Target resolution WIDTHxHEIGHT; use -1 or auto on one side to keep the aspect ratio
    #[arg(long, value_name = "WxH", allow_hyphen_values = true)]
    pub resolution: Option<Resolution>,

    /// Overwrite the output file if it already exists (overrides config)
    #[arg(long, conflicts_with = "no_overwrite")]
    pub overwrite: bool,

    /// Never overwrite an existing output file (overrides config)
    #[arg(long, conflicts_with = "overwrite")]
    pub no_overwrite: bool,
}

impl SequenceArgs {
    /// Overwrite setting from the flags, `None` when neither flag was given
    pub fn overwrite_override(&self) -> Option<bool> {
        if self.overwrite {
            Some(true)
        } else if self.no_overwrite {
            Some(false)
        } else {
            None
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
