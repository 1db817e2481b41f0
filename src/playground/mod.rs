//! Demo harness assembling the components with mock data.
//!
//! - **[`app`]**: GlobalNav composition, key bindings and the run loop
//! - **[`content`]**: the slot widget with the switcher and a text area
//! - **[`state`]**: account / project selection
//! - **[`fixtures`]**: accounts, projects and side nav labels

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod fixtures;
pub mod state;

pub use app::App;
pub use config::AppConfig;
pub use content::{PlaygroundContent, Section, SharedState};
pub use error::PlaygroundError;
pub use state::PlaygroundState;
