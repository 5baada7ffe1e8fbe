// End-to-end tests that actually run FFmpeg
//
// These tests encode real PNG sequences and check the resulting video

use image_sequencer::engine::{Dimension, Resolution, SequenceBuilder, SequenceError};
use std::path::PathBuf;
use tempfile::TempDir;

use crate::common::ffmpeg_runner::*;
use crate::common::helpers::*;

// Helper to check if FFmpeg (with libx264) is available, skip test if not
macro_rules! require_ffmpeg {
    () => {
        if !is_ffmpeg_available() || !is_libx264_available() {
            eprintln!("Skipping test: FFmpeg with libx264 not available");
            return;
        }
    };
}

// ============================================================================
// SETUP: Test fixtures
// ============================================================================

fn create_frames(temp_dir: &TempDir, count: usize, width: u32, height: u32) -> Vec<PathBuf> {
    let colors = ["red", "green", "blue", "white"];
    (0..count)
        .map(|i| {
            let path = temp_dir.path().join(format!("frame_{:03}.png", i));
            generate_test_image(&path, width, height, colors[i % colors.len()])
                .expect("Failed to generate test image");
            path
        })
        .collect()
}

fn encoding_builder(temp_dir: &TempDir, frames: &[PathBuf]) -> SequenceBuilder {
    let mut builder = builder_in(temp_dir);
    builder.set_source_paths(frames);
    builder.set_source_frame_rate(10.0).unwrap();
    builder.set_output_frame_rate(10.0).unwrap();
    builder
}

// ============================================================================
// E2E TESTS
// ============================================================================

#[test]
fn e2e_test_encode_sequence() {
    require_ffmpeg!();

    let temp_dir = TempDir::new().unwrap();
    let frames = create_frames(&temp_dir, 3, 64, 48);
    let builder = encoding_builder(&temp_dir, &frames);

    builder.run().expect("Encoding failed");

    let output = builder.output_path();
    assert!(output.exists(), "Output video was not created");
    assert!(std::fs::metadata(output).unwrap().len() > 0);
    assert_eq!(read_manifest(&builder).len(), 3);
}

#[test]
fn e2e_test_odd_resolution_is_cropped_even() {
    require_ffmpeg!();
    if !is_ffprobe_available() {
        eprintln!("Skipping test: ffprobe not available");
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let frames = create_frames(&temp_dir, 2, 320, 240);
    let mut builder = encoding_builder(&temp_dir, &frames);
    builder
        .set_output_resolution(Some(Resolution::new(
            Dimension::Fixed(101),
            Dimension::AutoScale,
        )))
        .unwrap();

    builder.run().expect("Encoding failed");

    let (width, height) = probe_video_size(builder.output_path()).unwrap();
    assert_eq!(width, 100);
    assert_eq!(height % 2, 0, "height {} is not even", height);
}

#[test]
fn e2e_test_existing_output_needs_overwrite() {
    require_ffmpeg!();

    let temp_dir = TempDir::new().unwrap();
    let frames = create_frames(&temp_dir, 2, 64, 48);
    let mut builder = encoding_builder(&temp_dir, &frames);

    builder.run().expect("First encode failed");

    let err = builder.run().unwrap_err();
    match err {
        SequenceError::ExternalTool { program, exit_code, .. } => {
            assert_eq!(program, "ffmpeg");
            assert!(exit_code.is_some_and(|code| code != 0));
        }
        other => panic!("expected ExternalTool error, got {:?}", other),
    }

    builder.set_overwrite_existing(true);
    builder.run().expect("Overwriting encode failed");
}

#[test]
fn e2e_test_empty_sequence_fails_in_encoder() {
    require_ffmpeg!();

    let temp_dir = TempDir::new().unwrap();
    let builder = encoding_builder(&temp_dir, &[]);

    let err = builder.run().unwrap_err();
    assert!(
        matches!(err, SequenceError::ExternalTool { .. }),
        "expected ExternalTool error, got {:?}",
        err
    );
    // The manifest is written before the encoder is launched
    assert!(builder.manifest_path().exists());
}

#[test]
fn e2e_test_missing_program_is_external_tool_error() {
    use image_sequencer::engine::{FfmpegRunner, LocalFs};

    let temp_dir = TempDir::new().unwrap();
    let mut builder = SequenceBuilder::with_collaborators(
        FfmpegRunner::new("image-sequencer-no-such-encoder"),
        LocalFs,
    );
    builder.set_manifest_path(temp_dir.path().join("concat.txt"));
    builder.set_output_path(temp_dir.path().join("out.mp4"));
    builder.set_source_frame_rate(10.0).unwrap();

    let err = builder.run().unwrap_err();
    match err {
        SequenceError::ExternalTool { exit_code, .. } => assert_eq!(exit_code, None),
        other => panic!("expected ExternalTool error, got {:?}", other),
    }
}
