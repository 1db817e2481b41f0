//! Theme data: the design tokens every stylesheet function receives.

use std::str::FromStr;

/// Resolved design tokens. Colors are named colors or `#rrggbb` strings,
/// the same format the terminal driver parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    /// Primary text.
    pub text: String,
    /// Secondary text, headings, placeholders.
    pub muted: String,
    /// Links and active indicators.
    pub accent: String,
    /// Panel background.
    pub surface: String,
    /// Raised background (hovered / selected rows).
    pub surface_raised: String,
    /// Resting border and rule color.
    pub border: String,
    /// Border color of a focused control.
    pub focus: String,
    /// Foreground of disabled controls.
    pub disabled: String,
}

impl Theme {
    /// Light theme preset.
    pub fn light() -> Self {
        Self {
            name: "light".into(),
            text: "#3c3c3c".into(),
            muted: "#808080".into(),
            accent: "#0696d7".into(),
            surface: "#ffffff".into(),
            surface_raised: "#eeeeee".into(),
            border: "#cccccc".into(),
            focus: "#0696d7".into(),
            disabled: "#bfbfbf".into(),
        }
    }

    /// Dark theme preset.
    pub fn dark() -> Self {
        Self {
            name: "dark".into(),
            text: "#f5f5f5".into(),
            muted: "#a0a0a0".into(),
            accent: "#38abdf".into(),
            surface: "#2a2a2a".into(),
            surface_raised: "#3c3c3c".into(),
            border: "#555555".into(),
            focus: "#38abdf".into(),
            disabled: "#666666".into(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Error returned when a theme name is not one of the presets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::light()),
            "dark" => Ok(Theme::dark()),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_light() {
        assert_eq!(Theme::default(), Theme::light());
    }

    #[test]
    fn parse_presets() {
        assert_eq!("dark".parse::<Theme>().unwrap().name, "dark");
        assert_eq!(" Light ".parse::<Theme>().unwrap().name, "light");
    }

    #[test]
    fn parse_unknown() {
        let err = "neon".parse::<Theme>().unwrap_err();
        assert_eq!(err.to_string(), "unknown theme: neon");
    }
}
