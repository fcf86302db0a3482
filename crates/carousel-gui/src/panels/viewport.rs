use carousel_core::input::InputEvent;

use crate::app::CarouselApp;
use crate::states::{Slide, TrackState};

/// Seconds the track takes to slide to a new position.
const SLIDE_ANIMATION_SECS: f32 = 0.5;

pub fn show(ctx: &egui::Context, app: &mut CarouselApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        if let Some((message, hint)) = &app.track.error {
            show_error_slide(ui, message, hint);
            return;
        }

        match app.session.as_ref() {
            None => {
                show_placeholder(ui, "Open an image listing to begin");
                return;
            }
            Some(session) if session.is_loading() => {
                show_placeholder(ui, "Loading images...");
                return;
            }
            Some(_) if app.track.slides.is_empty() => {
                show_placeholder(ui, "No images in this listing");
                return;
            }
            Some(_) => {}
        }

        let response = ui.allocate_rect(rect, egui::Sense::drag());
        let offset = ctx.animate_value_with_time(
            egui::Id::new("track_offset"),
            app.track.offset,
            SLIDE_ANIMATION_SECS,
        );
        draw_track(ui, &app.track, rect, offset);

        if let Some(event) = handle_swipe(ui, &response, app) {
            app.dispatch(event);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Lay the slides out side by side and shift them left by `offset` of the
/// whole track's width.
fn draw_track(ui: &egui::Ui, track: &TrackState, rect: egui::Rect, offset: f32) {
    let painter = ui.painter_at(rect);
    let width = rect.width();
    let shift = offset * track.slides.len() as f32 * width;

    for slide in &track.slides {
        let left = rect.left() + slide.spec.index as f32 * width - shift;
        let slide_rect = egui::Rect::from_min_size(egui::pos2(left, rect.top()), rect.size());
        if slide_rect.intersects(rect) {
            draw_slide(&painter, slide, slide_rect);
        }
    }
}

fn draw_slide(painter: &egui::Painter, slide: &Slide, rect: egui::Rect) {
    if let Some(texture) = &slide.texture {
        let size = texture.size_vec2();
        let scale = (rect.width() / size.x).min(rect.height() / size.y);
        let img_rect = egui::Rect::from_center_size(rect.center(), size * scale);
        painter.image(
            texture.id(),
            img_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
        return;
    }

    if let Some(text) = slide.status.placeholder(&slide.spec) {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(18.0),
            egui::Color32::from_gray(140),
        );
    }
}

/// Turn a completed primary-button drag into a swipe event.
fn handle_swipe(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut CarouselApp,
) -> Option<InputEvent> {
    if response.drag_started_by(egui::PointerButton::Primary) {
        app.ui_state.drag_start_x = ui.input(|i| i.pointer.press_origin()).map(|p| p.x);
    }
    if !response.drag_stopped_by(egui::PointerButton::Primary) {
        return None;
    }

    let start_x = app.ui_state.drag_start_x.take()?;
    let end_x = ui.input(|i| i.pointer.latest_pos())?.x;
    Some(InputEvent::Swipe { start_x, end_x })
}

fn show_error_slide(ui: &mut egui::Ui, message: &str, hint: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() / 2.0 - 30.0).max(0.0));
        ui.label(
            egui::RichText::new(message)
                .size(20.0)
                .strong()
                .color(egui::Color32::LIGHT_RED),
        );
        ui.add_space(6.0);
        ui.label(egui::RichText::new(hint).color(egui::Color32::from_gray(160)));
    });
}

fn show_placeholder(ui: &mut egui::Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
