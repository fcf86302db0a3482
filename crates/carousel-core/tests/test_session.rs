mod common;

use carousel_core::config::CarouselConfig;
use carousel_core::error::CarouselError;
use carousel_core::input::{InputEvent, SwipeConfig};
use carousel_core::session::{Session, SessionPhase};
use carousel_core::source::{FileSource, StaticSource};

use common::{drive_images, RecordingSurface};

#[test]
fn test_loading_ignores_input() {
    let mut session = Session::begin("files", SwipeConfig::default());
    assert!(session.is_loading());
    assert!(session.dispatch(InputEvent::NextButton).is_none());
    assert!(session.carousel().is_none());
}

#[test]
fn test_complete_ok_becomes_ready() {
    let mut session = Session::begin("files", SwipeConfig::default());
    assert!(session.complete(Ok(drive_images(3))));
    assert!(session.is_ready());

    let view = session.dispatch(InputEvent::NextButton).expect("moved");
    assert_eq!(view.current_index, 1);
}

#[test]
fn test_complete_only_once() {
    let mut session = Session::begin("files", SwipeConfig::default());
    assert!(session.complete(Ok(drive_images(1))));
    assert!(!session.complete(Err(CarouselError::load_failure("files", "late"))));
    assert!(session.is_ready());
}

#[test]
fn test_failed_session_is_permanent() {
    let mut session = Session::begin("files", SwipeConfig::default());
    session.complete(Err(CarouselError::load_failure("files", "not found")));
    assert!(session.is_failed());
    assert!(session.error().is_some_and(|e| e.is_load_failure()));

    assert!(!session.complete(Ok(drive_images(2))));
    assert!(session.is_failed());
    assert!(session.dispatch(InputEvent::NextButton).is_none());
}

#[test]
fn test_load_from_static_source() {
    let source = StaticSource::new("inline", "1|drive.google.com/a\n2|example.com/b\n3|amazonaws.com/c");
    let session = Session::load(&source, &CarouselConfig::default());

    let carousel = session.carousel().expect("ready");
    assert_eq!(carousel.images().len(), 2);
    assert_eq!(session.source_name(), "inline");
}

#[test]
fn test_load_missing_file_fails() {
    let source = FileSource::new("/nonexistent/carousel/files");
    let session = Session::load(&source, &CarouselConfig::default());
    assert!(matches!(
        session.phase(),
        SessionPhase::Failed(CarouselError::LoadFailure { .. })
    ));
}

#[test]
fn test_load_uses_configured_swipe() {
    let mut config = CarouselConfig::default();
    config.swipe.threshold = 5.0;
    let source = StaticSource::new("inline", "drive.google.com/a\ndrive.google.com/b");
    let mut session = Session::load(&source, &config);

    let view = session.dispatch(InputEvent::Swipe {
        start_x: 20.0,
        end_x: 10.0,
    });
    assert_eq!(view.map(|v| v.current_index), Some(1));
}

#[test]
fn test_render_failed_session_shows_error() {
    let mut session = Session::begin("files", SwipeConfig::default());
    session.complete(Err(CarouselError::load_failure("files", "boom")));

    let mut surface = RecordingSurface::default();
    session.render(&mut surface);

    let (message, hint) = surface.error.expect("error slide");
    assert_eq!(message, "Failed to load images");
    assert_eq!(hint, "Please check the 'files' file and try again.");
    assert!(surface.slides.is_empty());
}

#[test]
fn test_render_loading_session_draws_nothing() {
    let session = Session::begin("files", SwipeConfig::default());
    let mut surface = RecordingSurface::default();
    session.render(&mut surface);
    assert_eq!(surface.clears, 0);
    assert!(surface.error.is_none());
}
