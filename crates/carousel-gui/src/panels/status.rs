use crate::app::CarouselApp;

pub fn show(ctx: &egui::Context, app: &mut CarouselApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            let Some(session) = app.session.as_ref() else {
                ui.label("No source");
                return;
            };
            ui.label(format!("Source: {}", session.source_name()));
            ui.separator();

            if session.is_loading() {
                ui.spinner();
                ui.label("Loading");
            } else if session.is_failed() {
                ui.colored_label(egui::Color32::LIGHT_RED, "Failed");
            } else {
                let total = app.track.slides.len();
                ui.label(format!("{total} images"));
                if total > 0 {
                    ui.separator();
                    ui.label(format!(
                        "Downloaded: {}/{total}",
                        app.ui_state.slides_settled
                    ));
                }
            }
        });

        ui.add_space(2.0);
    });
}
