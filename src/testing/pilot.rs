//! Pilot: programmatic interaction with a headless playground App.
//!
//! The `Pilot` wraps an [`App`] built without a terminal and provides methods
//! to simulate user input (key presses, typing, mouse clicks, resize) and to
//! read the rendered screen back as text.

use crate::event::input::{InputEvent, Key, KeyEvent, Modifiers, MouseEvent};
use crate::playground::{App, AppConfig, PlaygroundError};

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless app driver for testing.
///
/// # Examples
///
/// ```ignore
/// use hig_tui::testing::Pilot;
/// use hig_tui::event::Key;
///
/// let mut pilot = Pilot::new(80, 24)?;
/// pilot.press_key(Key::F(2));
/// assert!(!pilot.screen().contains("Autodesk Home"));
/// ```
pub struct Pilot {
    app: App,
}

impl Pilot {
    /// Create a headless playground with the given terminal size.
    pub fn new(width: u16, height: u16) -> Result<Self, PlaygroundError> {
        Self::with_config(AppConfig::default(), width, height)
    }

    /// Create a headless playground from an [`AppConfig`].
    pub fn with_config(config: AppConfig, width: u16, height: u16) -> Result<Self, PlaygroundError> {
        Ok(Self {
            app: App::new_headless(config, width, height)?,
        })
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Simulate a key press with no modifiers.
    pub fn press_key(&mut self, key: Key) {
        self.press_key_with(key, Modifiers::NONE);
    }

    /// Simulate a key press with the given modifiers.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) {
        self.app.handle_input(InputEvent::Key(KeyEvent::new(key, modifiers)));
    }

    /// Simulate typing each character of `text` as individual key presses.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press_key(Key::Char(ch));
        }
    }

    /// Simulate a left-button mouse click at (x, y).
    pub fn click(&mut self, x: u16, y: u16) {
        self.app.handle_input(InputEvent::Mouse(MouseEvent::left_click(x, y)));
    }

    /// Simulate a terminal resize to the given dimensions.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.handle_input(InputEvent::Resize { width, height });
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Whether the app is still running (has not quit).
    pub fn is_running(&self) -> bool {
        !self.app.should_quit()
    }

    /// The current screen as text, rows right-trimmed.
    pub fn screen(&self) -> String {
        self.app.render_frame().to_text()
    }

    /// Row `y` of the current screen.
    pub fn line(&self, y: usize) -> String {
        self.screen().lines().nth(y).unwrap_or_default().to_owned()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pilot() -> Pilot {
        Pilot::new(80, 24).unwrap()
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_creates_running_app() {
        let pilot = pilot();
        assert!(pilot.is_running());
        assert_eq!(pilot.app().size(), (80, 24));
    }

    #[test]
    fn with_config_preserves_settings() {
        let pilot = Pilot::with_config(AppConfig::new().with_fps(10), 60, 20).unwrap();
        assert_eq!(pilot.app().config().fps, 10);
        assert_eq!(pilot.app().size(), (60, 20));
    }

    // ── Input ────────────────────────────────────────────────────────

    #[test]
    fn ctrl_q_quits() {
        let mut pilot = pilot();
        pilot.press_key_with(Key::Char('q'), Modifiers::CTRL);
        assert!(!pilot.is_running());
    }

    #[test]
    fn app_mut_allows_mutation() {
        let mut pilot = pilot();
        pilot.app_mut().request_quit();
        assert!(!pilot.is_running());
    }

    #[test]
    fn click_outside_content_is_harmless() {
        let mut pilot = pilot();
        pilot.click(0, 0);
        pilot.click(79, 23);
        assert!(pilot.is_running());
    }

    #[test]
    fn resize_changes_screen_size() {
        let mut pilot = pilot();
        pilot.resize(40, 10);
        assert_eq!(pilot.app().render_frame().height, 10);
        assert!(pilot.line(0).starts_with(" BIM 360"));
    }

    // ── Screen ───────────────────────────────────────────────────────

    #[test]
    fn line_reads_one_row() {
        let pilot = pilot();
        assert!(pilot.line(0).starts_with(" BIM 360"));
        assert_eq!(pilot.line(99), "");
    }
}
