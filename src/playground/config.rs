//! Playground configuration.

use std::path::PathBuf;

use crate::style::theme::Theme;

use super::error::PlaygroundError;

pub const ENV_FPS: &str = "HIG_PLAYGROUND_FPS";
pub const ENV_THEME: &str = "HIG_PLAYGROUND_THEME";
pub const ENV_SIDE_NAV: &str = "HIG_PLAYGROUND_SIDE_NAV";
pub const ENV_LOG_FILE: &str = "HIG_LOG_FILE";

/// Configuration for the playground app.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Caption shown on the right of the top nav.
    pub title: Option<String>,
    /// Target frames per second for the render loop.
    pub fps: u32,
    /// Initial side nav visibility.
    pub side_nav_open: bool,
    pub theme: Theme,
    /// Where the binary writes its log; the terminal itself is taken.
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: None,
            fps: 30,
            side_nav_open: true,
            theme: Theme::light(),
            log_file: PathBuf::from("hig-playground.log"),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the target FPS (builder).
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_side_nav_open(mut self, open: bool) -> Self {
        self.side_nav_open = open;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Defaults overridden by the `HIG_*` environment variables.
    pub fn from_env() -> Result<Self, PlaygroundError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`AppConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PlaygroundError> {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_FPS) {
            config.fps = match value.trim().parse::<u32>() {
                Ok(fps) if fps > 0 => fps,
                _ => return Err(invalid(ENV_FPS, value)),
            };
        }
        if let Some(value) = lookup(ENV_THEME) {
            config.theme = value.parse()?;
        }
        if let Some(value) = lookup(ENV_SIDE_NAV) {
            config.side_nav_open = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "open" => true,
                "0" | "false" | "no" | "closed" => false,
                _ => return Err(invalid(ENV_SIDE_NAV, value)),
            };
        }
        if let Some(value) = lookup(ENV_LOG_FILE) {
            config.log_file = PathBuf::from(value);
        }
        Ok(config)
    }
}

fn invalid(var: &'static str, value: String) -> PlaygroundError {
    PlaygroundError::InvalidEnv { var, value }
}
