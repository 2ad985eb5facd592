use crate::app::PixviewApp;

pub fn show(ctx: &egui::Context, app: &mut PixviewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        ui.horizontal(|ui| {
            if let Some(size) = app.engine.image_size() {
                ui.label(format!("{}x{}", size.width, size.height));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.engine.scale() * 100.0));
            if let Some((index, total)) = app.navigator.position() {
                ui.separator();
                ui.label(format!("{index}/{total}"));
            }
            if app.ui_state.loading {
                ui.separator();
                ui.spinner();
            }
            if let Some(msg) = app.ui_state.last_log() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(msg);
                });
            }
        });

        ui.add_space(2.0);
    });
}
