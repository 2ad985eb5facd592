/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// A decode is in flight.
    pub loading: bool,
    /// A file dialog is open; further open requests are ignored.
    pub picker_open: bool,
    pub show_about: bool,
    /// Most recent status message. Full history goes to the tracing log.
    last_log: Option<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        tracing::info!("{msg}");
        self.last_log = Some(msg);
    }

    pub fn last_log(&self) -> Option<&str> {
        self.last_log.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_log_keeps_only_latest() {
        let mut state = UIState::default();
        assert_eq!(state.last_log(), None);
        for i in 0..1000 {
            state.add_log(format!("message {i}"));
        }
        assert_eq!(state.last_log(), Some("message 999"));
    }
}
