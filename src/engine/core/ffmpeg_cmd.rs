use super::error::SequenceError;
use super::types::{Resolution, SequenceConfig};
use std::path::Path;

/// H.264 for the widest player support
pub const VIDEO_CODEC: &str = "libx264";
/// 4:2:0 chroma; requires even width and height
pub const PIXEL_FORMAT: &str = "yuv420p";

/// Trims one pixel off odd sides so yuv420p accepts the frame
const EVEN_DIMENSIONS_CROP: &str = "crop=trunc(iw/2)*2:trunc(ih/2)*2";
const SQUARE_PIXELS: &str = "setsar=1";

/// Compose the `-vf` expression for a target resolution.
/// Order matters: scale, then crop to even dimensions, then reset the aspect ratio.
pub fn build_filter_chain(resolution: &Resolution) -> String {
    format!(
        "scale={}:{}, {}, {}",
        resolution.width, resolution.height, EVEN_DIMENSIONS_CROP, SQUARE_PIXELS
    )
}

/// Build the encoder argument list (without the program name).
///
/// Pure: reads `config` and the current directory, never touches files.
pub fn build_ffmpeg_args(config: &SequenceConfig) -> Result<Vec<String>, SequenceError> {
    let manifest = std::path::absolute(&config.manifest_path)
        .map_err(|e| SequenceError::io("resolve manifest path", &config.manifest_path, e))?;

    let mut args = vec![
        "-f".to_string(),
        "concat".to_string(),
        // Manifest entries are absolute paths, which the demuxer rejects in safe mode
        "-safe".to_string(),
        "0".to_string(),
        "-i".to_string(),
        path_arg(&manifest),
        "-c:v".to_string(),
        VIDEO_CODEC.to_string(),
        "-pix_fmt".to_string(),
        PIXEL_FORMAT.to_string(),
        "-r".to_string(),
        config.output_frame_rate.to_string(),
    ];

    if let Some(resolution) = &config.output_resolution {
        args.push("-vf".to_string());
        args.push(build_filter_chain(resolution));
    }

    if config.overwrite_existing {
        args.push("-y".to_string());
    }

    args.push(path_arg(&config.output_path));

    Ok(args)
}

/// Format program + arguments as a single shell-safe line for display or reuse.
/// Fails only for arguments containing a NUL byte, which no process can receive.
pub fn format_ffmpeg_cmd(program: &str, args: &[String]) -> Result<String, SequenceError> {
    let parts = std::iter::once(program).chain(args.iter().map(String::as_str));
    shlex::try_join(parts)
        .map_err(|e| SequenceError::InvalidArgument(format!("cannot quote command line: {}", e)))
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
