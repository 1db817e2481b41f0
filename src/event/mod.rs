//! Event system: decoupled input events, key bindings and button-style handlers.

pub mod binding;
pub mod handlers;
pub mod input;

pub use binding::{BindingAction, KeyBindingRegistry};
pub use handlers::{create_button_event_handlers, ActivationEvent, ButtonEventHandlers, HandlerCache};
pub use input::{from_crossterm, InputEvent, Key, KeyEvent, Modifiers, MouseAction, MouseBtn, MouseEvent};
