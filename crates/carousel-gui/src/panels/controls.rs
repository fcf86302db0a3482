use carousel_core::input::InputEvent;

use crate::app::CarouselApp;
use crate::panels::control_button;

const ACTIVE_DOT: egui::Color32 = egui::Color32::from_gray(230);
const INACTIVE_DOT: egui::Color32 = egui::Color32::from_gray(110);

pub fn show(ctx: &egui::Context, app: &mut CarouselApp) {
    egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            ui.label(&app.track.progress_text);
        });

        let mut event = None;
        ui.horizontal(|ui| {
            if control_button(ui, "\u{25c0}", app.track.previous) {
                event = Some(InputEvent::PreviousButton);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if control_button(ui, "\u{25b6}", app.track.next) {
                    event = Some(InputEvent::NextButton);
                }

                ui.with_layout(
                    egui::Layout::left_to_right(egui::Align::Center).with_main_align(egui::Align::Center),
                    |ui| {
                        if let Some(index) = indicator_dots(ui, app) {
                            event = Some(InputEvent::IndicatorClicked(index));
                        }
                    },
                );
            });
        });
        ui.add_space(4.0);

        if let Some(event) = event {
            app.dispatch(event);
        }
    });
}

/// Draw one dot per slide. Returns the index of a clicked dot.
fn indicator_dots(ui: &mut egui::Ui, app: &CarouselApp) -> Option<usize> {
    let mut clicked = None;
    for &index in &app.track.indicators {
        let color = if app.track.active_indicator == Some(index) {
            ACTIVE_DOT
        } else {
            INACTIVE_DOT
        };
        let dot = egui::Button::new(egui::RichText::new("\u{25cf}").color(color)).frame(false);
        if ui
            .add(dot)
            .on_hover_text(format!("Image {}", index + 1))
            .clicked()
        {
            clicked = Some(index);
        }
    }
    clicked
}
