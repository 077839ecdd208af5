//! End-to-end batch runs through the public API, with real pixels on disk.

use image::{GenericImageView, GrayImage, Luma, Rgb, RgbImage};
use squareset::config::ProcessorConfig;
use squareset::imaging::RustCodec;
use squareset::processor::{ImageProcessor, ProcessError};
use std::path::{Path, PathBuf};

fn write_solid_png(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(path)
        .unwrap();
}

/// The single run directory a batch created under `output_root`.
fn single_run_dir(output_root: &Path) -> PathBuf {
    let entries: Vec<_> = std::fs::read_dir(output_root)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1, "expected exactly one run directory");
    let name = entries[0].file_name().unwrap().to_str().unwrap();
    assert_eq!(name.len(), 14);
    assert!(name.chars().all(|c| c.is_ascii_digit()));
    entries[0].clone()
}

/// Resampling a solid color should reproduce it, but allow one count of
/// float slack per channel.
fn assert_close(pixel: &Rgb<u8>, expected: [u8; 3]) {
    for (got, want) in pixel.0.iter().zip(expected) {
        assert!(
            got.abs_diff(want) <= 1,
            "pixel {:?} too far from {:?}",
            pixel.0,
            expected
        );
    }
}

#[test]
fn landscape_image_is_letterboxed_bottom_padded() {
    let tmp = tempfile::TempDir::new().unwrap();
    let source = tmp.path().join("input_images");
    std::fs::create_dir(&source).unwrap();
    write_solid_png(&source.join("wide.png"), 800, 400, [200, 40, 40]);

    let config = ProcessorConfig {
        target_size: 640,
        output_root: tmp.path().join("dataset"),
    };
    let processor = ImageProcessor::new(RustCodec::new(), &source, config);
    processor.process_images_in_folder().unwrap();

    let run_dir = single_run_dir(&tmp.path().join("dataset"));
    let out = image::open(run_dir.join("wide.png")).unwrap();
    assert_eq!(out.dimensions(), (640, 640));

    let rgb = out.to_rgb8();
    // Top 640x320: resized content
    assert_close(rgb.get_pixel(0, 0), [200, 40, 40]);
    assert_close(rgb.get_pixel(639, 0), [200, 40, 40]);
    assert_close(rgb.get_pixel(320, 319), [200, 40, 40]);
    // Bottom 640x320: solid pad gray
    for &(x, y) in &[(0, 320), (639, 320), (0, 639), (639, 639), (320, 500)] {
        assert_eq!(rgb.get_pixel(x, y), &Rgb([114, 114, 114]), "at ({x},{y})");
    }
}

#[test]
fn portrait_grayscale_is_right_padded_with_gray() {
    let tmp = tempfile::TempDir::new().unwrap();
    let source = tmp.path().join("input_images");
    std::fs::create_dir(&source).unwrap();
    GrayImage::from_pixel(200, 400, Luma([30]))
        .save(source.join("tall.png"))
        .unwrap();

    let config = ProcessorConfig {
        target_size: 640,
        output_root: tmp.path().join("dataset"),
    };
    let processor = ImageProcessor::new(RustCodec::new(), &source, config);
    processor.process_images_in_folder().unwrap();

    let run_dir = single_run_dir(&tmp.path().join("dataset"));
    let out = image::open(run_dir.join("tall.png")).unwrap();
    assert_eq!(out.dimensions(), (640, 640));
    assert_eq!(out.color().channel_count(), 1);

    let gray = out.to_luma8();
    // Left 320x640: resized content
    assert!(gray.get_pixel(0, 0).0[0].abs_diff(30) <= 1);
    assert!(gray.get_pixel(319, 639).0[0].abs_diff(30) <= 1);
    // Right 320x640: single-channel pad value
    assert_eq!(gray.get_pixel(320, 0), &Luma([114]));
    assert_eq!(gray.get_pixel(639, 639), &Luma([114]));
}

#[test]
fn two_images_of_different_sizes_share_one_run_directory() {
    let tmp = tempfile::TempDir::new().unwrap();
    let source = tmp.path().join("input_images");
    std::fs::create_dir(&source).unwrap();
    write_solid_png(&source.join("wide.png"), 640, 160, [10, 120, 60]);
    write_solid_png(&source.join("square.png"), 300, 300, [90, 90, 200]);

    let config = ProcessorConfig {
        target_size: 640,
        output_root: tmp.path().join("dataset"),
    };
    let processor = ImageProcessor::new(RustCodec::new(), &source, config);
    processor.process_images_in_folder().unwrap();

    let run_dir = single_run_dir(&tmp.path().join("dataset"));
    for name in ["wide.png", "square.png"] {
        let out = image::open(run_dir.join(name)).unwrap();
        assert_eq!(out.dimensions(), (640, 640), "{name}");
    }
    // The square input was only resized, never padded
    let square = image::open(run_dir.join("square.png")).unwrap().to_rgb8();
    assert_close(square.get_pixel(639, 639), [90, 90, 200]);
}

#[test]
fn jpeg_keeps_its_name_and_format() {
    let tmp = tempfile::TempDir::new().unwrap();
    let source = tmp.path().join("input_images");
    std::fs::create_dir(&source).unwrap();
    RgbImage::from_pixel(400, 200, Rgb([128, 128, 128]))
        .save(source.join("photo.jpg"))
        .unwrap();

    let config = ProcessorConfig {
        target_size: 640,
        output_root: tmp.path().join("dataset"),
    };
    let processor = ImageProcessor::new(RustCodec::new(), &source, config);
    processor.process_images_in_folder().unwrap();

    let run_dir = single_run_dir(&tmp.path().join("dataset"));
    let out_path = run_dir.join("photo.jpg");
    assert!(out_path.exists());
    assert_eq!(
        image::ImageFormat::from_path(&out_path).unwrap(),
        image::ImageFormat::Jpeg
    );
    assert_eq!(image::open(&out_path).unwrap().dimensions(), (640, 640));
}

#[test]
fn missing_source_aborts_before_creating_output() {
    let tmp = tempfile::TempDir::new().unwrap();
    let output_root = tmp.path().join("dataset");

    let config = ProcessorConfig {
        target_size: 640,
        output_root: output_root.clone(),
    };
    let processor =
        ImageProcessor::new(RustCodec::new(), tmp.path().join("no_such_dir"), config);

    let result = processor.process_images_in_folder();
    assert!(matches!(result, Err(ProcessError::InvalidSourceFolder(_))));
    assert!(!output_root.exists());
}

#[test]
fn undecodable_file_halts_the_run() {
    let tmp = tempfile::TempDir::new().unwrap();
    let source = tmp.path().join("input_images");
    std::fs::create_dir(&source).unwrap();
    std::fs::write(source.join("README.txt"), "not an image").unwrap();

    let config = ProcessorConfig {
        target_size: 640,
        output_root: tmp.path().join("dataset"),
    };
    let processor = ImageProcessor::new(RustCodec::new(), &source, config);

    assert!(processor.process_images_in_folder().is_err());
}
