//! Headless testing helpers: Pilot, snapshot rendering, a recording toolkit.
//!
//! Use the [`Pilot`] to drive the playground [`App`](crate::playground::App)
//! without a terminal, [`render_to_string`] to capture widget output as plain
//! text, and [`RecordingNav`] to observe the calls the GlobalNav adapter makes.

pub mod pilot;
pub mod recording;
pub mod snapshot;

pub use pilot::Pilot;
pub use recording::{NavCall, RecordingNav};
pub use snapshot::{render_to_string, render_with_theme, strips_to_string};
