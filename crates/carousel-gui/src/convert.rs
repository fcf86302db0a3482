/// Largest edge a slide texture is allowed to have; bigger images are
/// downscaled before upload.
pub const MAX_SLIDE_EDGE: u32 = 2048;

/// Convert a decoded image to an egui ColorImage, downscaling oversized input.
pub fn to_color_image(image: &image::DynamicImage) -> egui::ColorImage {
    let rgba = if image.width() > MAX_SLIDE_EDGE || image.height() > MAX_SLIDE_EDGE {
        image.thumbnail(MAX_SLIDE_EDGE, MAX_SLIDE_EDGE).to_rgba8()
    } else {
        image.to_rgba8()
    };
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}
