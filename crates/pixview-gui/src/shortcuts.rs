//! Keyboard bindings.
//!
//! Each binding pairs a key plus modifier filter with an [`AppAction`]. A
//! modifier left as `None` in the filter matches either state, so `Right`
//! alone navigates regardless of Shift.

use pixview_core::command::ViewerCommand;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AppAction {
    View(ViewerCommand),
    Next,
    Previous,
    Open,
    Reload,
}

/// Matches a key press against optional modifier requirements.
#[derive(Clone, Copy, Debug)]
pub struct KeyFilter {
    pub key: egui::Key,
    pub command: Option<bool>,
    pub alt: Option<bool>,
    pub shift: Option<bool>,
}

impl KeyFilter {
    const fn plain(key: egui::Key) -> Self {
        Self {
            key,
            command: Some(false),
            alt: None,
            shift: None,
        }
    }

    const fn command(key: egui::Key) -> Self {
        Self {
            key,
            command: Some(true),
            alt: Some(false),
            shift: None,
        }
    }

    pub fn matches(&self, key: egui::Key, modifiers: egui::Modifiers) -> bool {
        fn ok(want: Option<bool>, have: bool) -> bool {
            want.map_or(true, |w| w == have)
        }
        key == self.key
            && ok(self.command, modifiers.command)
            && ok(self.alt, modifiers.alt)
            && ok(self.shift, modifiers.shift)
    }

    /// The egui shortcut shown next to menu entries.
    pub fn shortcut(&self) -> egui::KeyboardShortcut {
        let modifiers = if self.command == Some(true) {
            egui::Modifiers::COMMAND
        } else {
            egui::Modifiers::NONE
        };
        egui::KeyboardShortcut::new(modifiers, self.key)
    }
}

pub const BINDINGS: &[(KeyFilter, AppAction)] = &[
    (KeyFilter::command(egui::Key::Equals), AppAction::View(ViewerCommand::ZoomIn)),
    (KeyFilter::command(egui::Key::Plus), AppAction::View(ViewerCommand::ZoomIn)),
    (KeyFilter::command(egui::Key::Minus), AppAction::View(ViewerCommand::ZoomOut)),
    (KeyFilter::command(egui::Key::Num0), AppAction::View(ViewerCommand::Fit)),
    (KeyFilter::command(egui::Key::Num1), AppAction::View(ViewerCommand::ActualSize)),
    (KeyFilter::plain(egui::Key::ArrowRight), AppAction::Next),
    (KeyFilter::plain(egui::Key::ArrowLeft), AppAction::Previous),
    (KeyFilter::command(egui::Key::O), AppAction::Open),
    (KeyFilter::plain(egui::Key::F5), AppAction::Reload),
];

pub fn action_for(key: egui::Key, modifiers: egui::Modifiers) -> Option<AppAction> {
    BINDINGS
        .iter()
        .find(|(filter, _)| filter.matches(key, modifiers))
        .map(|(_, action)| *action)
}

/// First binding for `action`, for menu shortcut hints.
pub fn shortcut_for(action: AppAction) -> Option<egui::KeyboardShortcut> {
    BINDINGS
        .iter()
        .find(|(_, a)| *a == action)
        .map(|(filter, _)| filter.shortcut())
}

/// Actions triggered by key presses this frame, in event order.
pub fn collect_actions(ctx: &egui::Context) -> Vec<AppAction> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => action_for(*key, *modifiers),
                _ => None,
            })
            .collect()
    })
}
