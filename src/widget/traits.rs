//! Widget trait: render, focus, input.
//!
//! Every component in the library is a `Widget`. Widgets render themselves
//! into strips within a region using the theme's design tokens, and may react
//! to input events routed to them by their host.

use std::any::Any;

use crate::event::input::InputEvent;
use crate::geometry::Region;
use crate::render::strip::Strip;
use crate::style::theme::Theme;

/// Core trait implemented by all widgets.
///
/// Object safe: hosts keep widgets as `Box<dyn Widget>` and downcast through
/// [`Widget::as_any`] when they need the concrete type.
pub trait Widget {
    /// The widget's type name (e.g. "TextArea", "ContentPresenter").
    fn widget_type(&self) -> &str;

    /// Render into strips within `region`.
    fn render(&self, region: Region, theme: &Theme) -> Vec<Strip>;

    /// Rows the widget wants when given `width` columns.
    fn height_hint(&self, _width: i32) -> i32 {
        1
    }

    /// Whether this widget can receive keyboard focus.
    fn can_focus(&self) -> bool {
        false
    }

    /// Gain or lose keyboard focus. Only called on focusable widgets.
    fn set_focused(&mut self, _focused: bool) {}

    /// Handle an input event routed to this widget, which was last rendered
    /// at `region`. Returns `true` if the event was consumed.
    fn handle_input(&mut self, _event: &InputEvent, _region: Region) -> bool {
        false
    }

    /// The host-supplied class list, if any.
    fn class_name(&self) -> Option<&str> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
