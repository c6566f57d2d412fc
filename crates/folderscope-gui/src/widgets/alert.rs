/// Modal failure alerts, shown one at a time.
///
/// Every access failure from a scan is queued by `AppState` and surfaced
/// here as a centred, non-collapsible dialog. OK dismisses the frontmost
/// alert and reveals the next queued one.
use crate::state::AppState;

/// Draw the frontmost queued alert, if any.
pub fn alert_dialog(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.current_alert().map(str::to_owned) else {
        return;
    };
    let queued = state.alerts.len();

    let mut dismissed = false;
    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([380.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new("⚠")
                        .size(22.0)
                        .color(egui::Color32::from_rgb(0xfa, 0xb3, 0x87)),
                );
                ui.label(egui::RichText::new(&message).size(12.0));
            });
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                let label = if queued > 1 {
                    format!("OK ({} more)", queued - 1)
                } else {
                    "OK".to_string()
                };
                if ui.button(label).clicked() {
                    dismissed = true;
                }
            });
            ui.add_space(4.0);
        });

    if dismissed {
        state.dismiss_alert();
    }
}
