use pixview_core::command::ViewerCommand;

use crate::app::PixviewApp;
use crate::shortcuts::{shortcut_for, AppAction};

pub fn show(ctx: &egui::Context, app: &mut PixviewApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                action_button(ui, app, "Open...", AppAction::Open);
                action_button(ui, app, "Reload", AppAction::Reload);

                ui.separator();

                action_button(ui, app, "Next Image", AppAction::Next);
                action_button(ui, app, "Previous Image", AppAction::Previous);

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                for cmd in [
                    ViewerCommand::ZoomIn,
                    ViewerCommand::ZoomOut,
                    ViewerCommand::Fit,
                    ViewerCommand::ActualSize,
                ] {
                    action_button(ui, app, &cmd.to_string(), AppAction::View(cmd));
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn action_button(ui: &mut egui::Ui, app: &mut PixviewApp, label: &str, action: AppAction) {
    let mut button = egui::Button::new(label);
    if let Some(shortcut) = shortcut_for(action) {
        button = button.shortcut_text(ui.ctx().format_shortcut(&shortcut));
    }
    if ui.add(button).clicked() {
        ui.close();
        app.dispatch(action);
    }
}
