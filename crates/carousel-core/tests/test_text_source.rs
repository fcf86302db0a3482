use std::io::Write;

use tempfile::NamedTempFile;

use carousel_core::error::CarouselError;
use carousel_core::source::{load_images, open_source, AllowList, FileSource, StaticSource, TextSource};

fn write_temp(text: &str) -> NamedTempFile {
    let mut tmpfile = NamedTempFile::new().unwrap();
    tmpfile.write_all(text.as_bytes()).unwrap();
    tmpfile.flush().unwrap();
    tmpfile
}

#[test]
fn test_file_source_reads_text() {
    let tmp = write_temp("1|drive.google.com/a\n");
    let source = FileSource::new(tmp.path());
    assert_eq!(source.fetch().unwrap(), "1|drive.google.com/a\n");
    assert_eq!(source.name(), tmp.path().display().to_string());
}

#[test]
fn test_file_source_missing_is_load_failure() {
    let source = FileSource::new("/nonexistent/dir/files");
    let err = source.fetch().unwrap_err();
    assert!(err.is_load_failure(), "got: {err}");
}

#[test]
fn test_file_source_invalid_utf8_is_load_failure() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();
    tmp.flush().unwrap();

    let err = FileSource::new(tmp.path()).fetch().unwrap_err();
    assert!(matches!(err, CarouselError::LoadFailure { .. }), "got: {err}");
}

#[test]
fn test_open_source_picks_file_for_paths() {
    let tmp = write_temp("drive.google.com/a");
    let location = tmp.path().display().to_string();
    let source = open_source(&location).unwrap();
    assert_eq!(source.name(), location);
    assert_eq!(source.fetch().unwrap(), "drive.google.com/a");
}

#[test]
fn test_load_images_from_file() {
    let tmp = write_temp("1|https://drive.google.com/x\n2|  \n3|amazonaws.com/y\n");
    let source = FileSource::new(tmp.path());
    let images = load_images(&source, &AllowList::default()).unwrap();
    let urls: Vec<&str> = images.iter().map(|u| u.as_str()).collect();
    assert_eq!(urls, vec!["https://drive.google.com/x", "https://amazonaws.com/y"]);
}

#[test]
fn test_load_images_empty_listing_is_ok() {
    let source = StaticSource::new("inline", "1|\n2|\n");
    let images = load_images(&source, &AllowList::default()).unwrap();
    assert!(images.is_empty());
}
