//! Style helpers: typed declarations, theme tokens, stylesheet functions.

pub mod class_names;
pub mod input;
pub mod styles;
pub mod switcher;
pub mod theme;

use std::rc::Rc;

pub use class_names::create_custom_class_names;
pub use input::{input_stylesheet, text_area_stylesheet, InputStyleProps, InputStyles};
pub use styles::{Border, BorderKind, Styles, TextAlign, TextStyleFlags, TextTransform};
pub use switcher::{switcher_stylesheet, SwitcherStyles};
pub use theme::Theme;

/// A stylesheet override: receives the styles computed so far, the styling
/// props and the theme, and returns the styles to use.
pub type StylesheetFn<S, P> = Rc<dyn Fn(S, &P, &Theme) -> S>;
