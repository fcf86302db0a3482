pub mod controls;
pub mod menu_bar;
pub mod navigation;
pub mod status;
pub mod viewport;

use carousel_core::carousel::ControlState;

/// Navigation button drawn with the control's opacity; clicks only register
/// while the control is enabled.
pub(crate) fn control_button(ui: &mut egui::Ui, label: &str, state: ControlState) -> bool {
    ui.scope(|ui| {
        ui.set_opacity(state.opacity);
        ui.add_enabled(state.enabled, egui::Button::new(egui::RichText::new(label).size(18.0)))
            .clicked()
    })
    .inner
}
