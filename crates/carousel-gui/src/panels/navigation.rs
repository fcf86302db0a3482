use carousel_core::input::InputEvent;

use crate::app::CarouselApp;
use crate::panels::control_button;

/// Side up/down controls, mirroring previous/next.
pub fn show(ctx: &egui::Context, app: &mut CarouselApp) {
    egui::SidePanel::right("navigation")
        .resizable(false)
        .exact_width(44.0)
        .show(ctx, |ui| {
            let mut event = None;
            ui.vertical_centered(|ui| {
                ui.add_space((ui.available_height() / 2.0 - 40.0).max(0.0));
                if control_button(ui, "\u{25b2}", app.track.previous) {
                    event = Some(InputEvent::NavUp);
                }
                ui.add_space(8.0);
                if control_button(ui, "\u{25bc}", app.track.next) {
                    event = Some(InputEvent::NavDown);
                }
            });

            if let Some(event) = event {
                app.dispatch(event);
            }
        });
}
