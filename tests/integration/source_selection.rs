// Integration tests for building the source list from files and folders

use image_sequencer::engine::SourceSelection;
use std::fs;
use tempfile::TempDir;

use crate::common::helpers::*;

#[test]
fn test_folder_is_sorted_and_shallow() {
    let temp_dir = TempDir::new().unwrap();
    touch_images(temp_dir.path(), &["frame_003.png", "frame_001.png", "frame_002.png"]);
    fs::create_dir(temp_dir.path().join("nested")).unwrap();
    touch_images(&temp_dir.path().join("nested"), &["frame_000.png"]);

    let mut selection = SourceSelection::new();
    selection.add_folder(temp_dir.path(), false).unwrap();

    let names: Vec<String> = selection
        .paths()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["frame_001.png", "frame_002.png", "frame_003.png"]);
    assert!(selection.paths().iter().all(|p| p.is_absolute()));
}

#[test]
fn test_append_versus_replace() {
    let temp_dir = TempDir::new().unwrap();
    let images = touch_images(temp_dir.path(), &["a.png", "b.png", "c.png"]);

    let mut selection = SourceSelection::new();
    selection.add_files(&images[..2], false).unwrap();
    selection.add_files(&images[2..], true).unwrap();
    assert_eq!(selection.len(), 3);
    assert_eq!(selection.count_label(), "3 Files Selected");

    selection.add_files(&images[2..], false).unwrap();
    assert_eq!(selection.len(), 1);
    assert_eq!(selection.count_label(), "1 File Selected");

    selection.clear();
    assert!(selection.is_empty());
    assert_eq!(selection.count_label(), "No File Selected");
}

#[test]
fn test_selection_feeds_the_builder() {
    let temp_dir = TempDir::new().unwrap();
    let frames = temp_dir.path().join("frames");
    fs::create_dir(&frames).unwrap();
    touch_images(&frames, &["b.png", "a.png"]);

    let mut selection = SourceSelection::new();
    selection.add_folder(&frames, false).unwrap();
    assert_eq!(selection.length_label(4.0), "Video Length: 0.5(s)");

    let mut builder = builder_in(&temp_dir);
    builder.set_source_paths(selection.into_paths());
    builder.set_source_frame_rate(4.0).unwrap();
    builder.generate_manifest().unwrap();

    let entries = read_manifest(&builder);
    assert_eq!(entries.len(), 2);
    assert!(entries[0].path.ends_with("a.png"));
    assert!(entries[1].path.ends_with("b.png"));
}

#[test]
fn test_add_folder_rejects_files() {
    let temp_dir = TempDir::new().unwrap();
    let images = touch_images(temp_dir.path(), &["a.png"]);

    let mut selection = SourceSelection::new();
    assert!(selection.add_folder(&images[0], false).is_err());
    assert!(selection.is_empty());
}
