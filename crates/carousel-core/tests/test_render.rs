mod common;

use carousel_core::carousel::Carousel;
use carousel_core::render::{mount, present, SlideSpec, SlideStatus};
use carousel_core::source::ImageList;

use common::{drive_images, RecordingSurface};

#[test]
fn test_mount_creates_slide_and_indicator_per_image() {
    let carousel = Carousel::new(drive_images(3));
    let mut surface = RecordingSurface::default();
    mount(&carousel, &mut surface);

    assert_eq!(surface.clears, 1);
    assert_eq!(surface.slides.len(), 3);
    assert_eq!(surface.indicators, vec![0, 1, 2]);
    assert_eq!(surface.slides[1].index, 1);
    assert_eq!(surface.slides[1].url.as_str(), "https://drive.google.com/uc?id=1");
}

#[test]
fn test_mount_presents_initial_view() {
    let carousel = Carousel::new(drive_images(3));
    let mut surface = RecordingSurface::default();
    mount(&carousel, &mut surface);

    assert_eq!(surface.offset, Some(0.0));
    assert_eq!(surface.active_indicator, Some(0));
    assert_eq!(
        surface.progress_text.as_deref(),
        Some("Check out these amazing images! (1/3)")
    );
    let (prev, next) = surface.controls.expect("controls set");
    assert!(!prev.enabled);
    assert!(next.enabled);
}

#[test]
fn test_present_after_navigation() {
    let mut carousel = Carousel::new(drive_images(4));
    let mut surface = RecordingSurface::default();
    mount(&carousel, &mut surface);

    carousel.go_to(3);
    present(&carousel.view_model(), &mut surface);

    assert_eq!(surface.offset, Some(0.75));
    assert_eq!(surface.active_indicator, Some(3));
    let (prev, next) = surface.controls.expect("controls set");
    assert!(prev.enabled);
    assert!(!next.enabled);
}

#[test]
fn test_mount_empty_carousel() {
    let carousel = Carousel::new(ImageList::default());
    let mut surface = RecordingSurface::default();
    mount(&carousel, &mut surface);

    assert!(surface.slides.is_empty());
    assert!(surface.indicators.is_empty());
    assert_eq!(surface.active_indicator, None);
    let (prev, next) = surface.controls.expect("controls set");
    assert!(!prev.enabled && !next.enabled);
}

#[test]
fn test_slide_placeholder_texts() {
    let carousel = Carousel::new(drive_images(2));
    let slide = SlideSpec {
        index: 1,
        url: carousel.images().as_slice()[1].clone(),
    };
    assert_eq!(
        SlideStatus::Loading.placeholder(&slide).as_deref(),
        Some("Loading image 2...")
    );
    assert_eq!(
        SlideStatus::Failed.placeholder(&slide).as_deref(),
        Some("Failed to load image 2")
    );
    assert_eq!(SlideStatus::Loaded.placeholder(&slide), None);
    assert_eq!(slide.alt_text(), "Image 2");
}
