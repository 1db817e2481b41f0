//! Presentational components.

pub mod content_presenter;
pub mod input;
pub mod placeholder;
pub mod text_area;

pub use content_presenter::{ContentPresenter, ItemCallback, ListItem, ListKind, RenderedItem, RenderedList};
pub use input::{Input, InputRef, InputTag, InputVariant, UnknownVariant};
pub use placeholder::construct_placeholder;
pub use text_area::TextArea;
