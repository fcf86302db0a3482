use std::sync::mpsc;

use anyhow::Context as _;
use carousel_core::source::{load_images, open_source, AllowList, ImageUrl};

use crate::convert::to_color_image;
use crate::messages::WorkerResult;

use super::{send, send_log, SlideFetcher};

pub(super) fn handle_load_source(
    generation: u64,
    location: &str,
    allowed_hosts: &AllowList,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    send(
        tx,
        ctx,
        WorkerResult::LoadStarted {
            generation,
            source_name: location.to_string(),
        },
    );

    let result = open_source(location).and_then(|source| load_images(source.as_ref(), allowed_hosts));
    if let Ok(images) = &result {
        send_log(tx, ctx, format!("Loaded {} images from {location}", images.len()));
    }
    send(tx, ctx, WorkerResult::LoadComplete { generation, result });
}

pub(super) fn handle_fetch_slide(
    generation: u64,
    index: usize,
    url: &ImageUrl,
    fetcher: Option<&SlideFetcher>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let result = match fetcher {
        Some(fetcher) => decode_slide(fetcher, url),
        None => Err(anyhow::anyhow!("image downloads unavailable")),
    };

    let message = match result {
        Ok(image) => WorkerResult::SlideLoaded {
            generation,
            index,
            image,
        },
        Err(e) => {
            tracing::warn!(index, url = %url, "Slide failed: {e:#}");
            WorkerResult::SlideFailed {
                generation,
                index,
                reason: format!("{e:#}"),
            }
        }
    };
    send(tx, ctx, message);
}

fn decode_slide(fetcher: &SlideFetcher, url: &ImageUrl) -> anyhow::Result<egui::ColorImage> {
    let bytes = fetcher
        .bytes(url.as_str())
        .with_context(|| format!("downloading {url}"))?;
    let image = image::load_from_memory(&bytes).with_context(|| format!("decoding {url}"))?;
    Ok(to_color_image(&image))
}
