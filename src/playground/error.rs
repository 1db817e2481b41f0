//! Playground errors.

use crate::adapter::AdapterError;
use crate::style::theme::UnknownTheme;
use crate::vanilla::LayoutError;

#[derive(Debug, thiserror::Error)]
pub enum PlaygroundError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("GlobalNav composition failed: {0}")]
    Adapter(#[from] AdapterError),

    #[error(transparent)]
    Theme(#[from] UnknownTheme),

    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::NavSlot;

    #[test]
    fn messages() {
        let err = PlaygroundError::from(AdapterError::DuplicateSingleton(NavSlot::SideNav));
        assert_eq!(err.to_string(), "GlobalNav composition failed: only one SideNav is allowed");

        let err = PlaygroundError::InvalidEnv {
            var: "HIG_PLAYGROUND_FPS",
            value: "fast".into(),
        };
        assert_eq!(err.to_string(), "invalid value \"fast\" for HIG_PLAYGROUND_FPS");
    }
}
