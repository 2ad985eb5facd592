use pixview_core::command::ViewerCommand;
use pixview_core::geometry::{Placement, Vec2};
use pixview_core::input::{DeltaMode, PointerButton, PointerEvent, WheelEvent};

use crate::app::PixviewApp;
use crate::shortcuts::AppAction;

pub fn show(ctx: &egui::Context, app: &mut PixviewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);
        observe_rect(app, rect);

        let texture_info = app
            .viewport
            .texture
            .as_ref()
            .map(|t| (t.id(), egui::vec2(t.size()[0] as f32, t.size()[1] as f32)));

        if let Some((texture_id, tex_size)) = texture_info {
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            handle_pointer(ui, app, rect);
            handle_wheel(ui, &response, app);

            if response.double_clicked() {
                app.engine.apply(ViewerCommand::Fit);
            }

            let img_rect = compute_img_rect(rect, tex_size, app.engine.placement());
            draw_image(ui, texture_id, rect, img_rect);
        } else {
            show_placeholder(ui, app);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Feed the panel size to the rect observer and forward changes to the engine.
fn observe_rect(app: &mut PixviewApp, rect: egui::Rect) {
    let size = rect.size();
    let observer = &mut app.viewport.rect_observer;
    let changed = if observer.is_attached() {
        observer.report(size.x, size.y)
    } else {
        observer.attach(size.x, size.y);
        true
    };
    if changed {
        app.engine.set_viewport_rect(observer.current());
    }
}

fn to_local(pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y)
}

fn map_button(button: egui::PointerButton) -> PointerButton {
    match button {
        egui::PointerButton::Primary => PointerButton::Primary,
        egui::PointerButton::Secondary => PointerButton::Secondary,
        egui::PointerButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

/// Translate raw egui pointer events into drag tracker input. Moving outside
/// the panel counts as leaving it.
fn pointer_events(ui: &egui::Ui, rect: egui::Rect) -> Vec<PointerEvent> {
    ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match *event {
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } if rect.contains(pos) => Some(PointerEvent::Press {
                    button: map_button(button),
                    pos: to_local(pos, rect),
                }),
                egui::Event::PointerButton { pressed: false, .. } => Some(PointerEvent::Release),
                egui::Event::PointerMoved(pos) if rect.contains(pos) => Some(PointerEvent::Move {
                    pos: to_local(pos, rect),
                }),
                egui::Event::PointerMoved(_) | egui::Event::PointerGone => Some(PointerEvent::Leave),
                _ => None,
            })
            .collect()
    })
}

fn handle_pointer(ui: &egui::Ui, app: &mut PixviewApp, rect: egui::Rect) {
    for event in pointer_events(ui, rect) {
        if let Some(delta) = app.viewport.drag.handle(event).motion {
            app.engine.pan(delta);
        }
    }
}

fn handle_wheel(ui: &egui::Ui, response: &egui::Response, app: &mut PixviewApp) {
    if !response.hovered() {
        return;
    }
    let wheel_events: Vec<WheelEvent> = ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::MouseWheel { unit, delta, .. } => Some(WheelEvent {
                    // egui reports scrolling up as positive y
                    delta_y: -delta.y,
                    mode: match unit {
                        egui::MouseWheelUnit::Point => DeltaMode::Pixel,
                        egui::MouseWheelUnit::Line => DeltaMode::Line,
                        egui::MouseWheelUnit::Page => DeltaMode::Page,
                    },
                }),
                _ => None,
            })
            .collect()
    });

    let mut suppress = false;
    for event in wheel_events {
        let outcome = app.viewport.wheel.normalize(event);
        app.engine.zoom_by(outcome.zoom_delta);
        suppress |= outcome.suppress_default;
    }
    if suppress {
        ui.ctx().input_mut(|i| {
            i.smooth_scroll_delta = egui::Vec2::ZERO;
            i.raw_scroll_delta = egui::Vec2::ZERO;
        });
    }
}

/// Screen rect for the image. `Auto` draws at intrinsic size in the top-left corner.
fn compute_img_rect(rect: egui::Rect, tex_size: egui::Vec2, placement: Placement) -> egui::Rect {
    match placement {
        Placement::Auto => egui::Rect::from_min_size(rect.min, tex_size),
        Placement::Fixed {
            left,
            top,
            width,
            height,
        } => egui::Rect::from_min_size(
            rect.min + egui::vec2(left, top),
            egui::vec2(width, height),
        ),
    }
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, clip: egui::Rect, img_rect: egui::Rect) {
    ui.painter_at(clip).image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &mut egui::Ui, app: &mut PixviewApp) {
    let message = if app.ui_state.loading {
        "Loading..."
    } else {
        "No file selected"
    };
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 2.0 - 24.0);
        ui.label(
            egui::RichText::new(message)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
        ui.add_space(8.0);
        if ui.button("Choose File").clicked() {
            app.dispatch(AppAction::Open);
        }
    });
}
