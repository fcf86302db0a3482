pub mod allow_list;
pub mod image_url;
pub mod parser;
pub mod text_source;

#[cfg(feature = "http")]
pub mod http;

pub use allow_list::AllowList;
pub use image_url::{ImageList, ImageUrl};
pub use parser::{parse, parse_with_report, ParseReport, SkipReason, SkippedLine};
pub use text_source::{open_source, FileSource, StaticSource, TextSource};

use crate::error::Result;

/// Fetch the raw listing from `source` and parse it into an image list.
///
/// A fetch failure is reported as [`CarouselError::LoadFailure`]; lines that
/// fail validation are dropped, never reported as errors.
///
/// [`CarouselError::LoadFailure`]: crate::error::CarouselError::LoadFailure
pub fn load_images(source: &dyn TextSource, allowed_hosts: &AllowList) -> Result<ImageList> {
    let raw = source.fetch()?;
    let report = parse_with_report(&raw, allowed_hosts);

    for skipped in &report.skipped {
        tracing::debug!(
            line = skipped.line_number,
            reason = %skipped.reason,
            "Skipped source line: {:?}",
            skipped.text
        );
    }
    tracing::info!(
        source = source.name(),
        images = report.images.len(),
        skipped = report.skipped.len(),
        "Loaded images"
    );

    Ok(report.images)
}
