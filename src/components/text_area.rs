//! TextArea: a multi-line input.
//!
//! A thin wrapper over the [`Input`] primitive with the text-area tag. The
//! text-area stylesheet runs before any caller override, so the caller's
//! declarations win. A host class list stays on the wrapper while the inner
//! field receives the derived `"<class>-textarea"` classes.

use std::any::Any;
use std::rc::Rc;

use crate::components::input::{
    FocusCallback, Input, InputStylesheet, InputTag, InputVariant, RefCallback, ValueCallback,
};
use crate::event::input::InputEvent;
use crate::geometry::Region;
use crate::render::strip::Strip;
use crate::style::class_names::create_custom_class_names;
use crate::style::input::text_area_stylesheet;
use crate::style::theme::Theme;
use crate::widget::traits::Widget;

/// Multi-line text field.
///
/// # Examples
///
/// ```ignore
/// let notes = TextArea::new()
///     .with_variant(InputVariant::Box)
///     .with_placeholder("Notes")
///     .on_change(Rc::new(|value: &str| save(value)));
/// ```
#[derive(Debug)]
pub struct TextArea {
    class_name: Option<String>,
    input: Input,
}

impl TextArea {
    pub fn new() -> Self {
        let base: InputStylesheet = Rc::new(text_area_stylesheet);
        Self {
            class_name: None,
            input: Input::new(InputTag::TextArea)
                .with_variant(InputVariant::Line)
                .with_stylesheet(base),
        }
    }

    fn map_input(mut self, f: impl FnOnce(Input) -> Input) -> Self {
        let input = std::mem::take(&mut self.input);
        self.input = f(input);
        self
    }

    pub fn with_variant(self, variant: InputVariant) -> Self {
        self.map_input(|input| input.with_variant(variant))
    }

    pub fn with_value(self, value: impl Into<String>) -> Self {
        self.map_input(|input| input.with_value(value))
    }

    pub fn with_placeholder(self, placeholder: impl Into<String>) -> Self {
        self.map_input(|input| input.with_placeholder(placeholder))
    }

    pub fn with_disabled(self, disabled: bool) -> Self {
        self.map_input(|input| input.with_disabled(disabled))
    }

    /// Set the class list of the wrapper; the field gets `"<class>-textarea"`.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        let class_name = class_name.into();
        let derived = create_custom_class_names(Some(class_name.as_str()), "textarea");
        self.class_name = Some(class_name);
        match derived {
            Some(derived) => self.map_input(|input| input.with_class_name(derived)),
            None => self,
        }
    }

    /// Layer a caller stylesheet after the text-area defaults.
    pub fn with_stylesheet(self, stylesheet: InputStylesheet) -> Self {
        self.map_input(|input| input.with_stylesheet(stylesheet))
    }

    pub fn on_blur(self, callback: FocusCallback) -> Self {
        self.map_input(|input| input.on_blur(callback))
    }

    pub fn on_change(self, callback: ValueCallback) -> Self {
        self.map_input(|input| input.on_change(callback))
    }

    pub fn on_focus(self, callback: FocusCallback) -> Self {
        self.map_input(|input| input.on_focus(callback))
    }

    pub fn on_input(self, callback: ValueCallback) -> Self {
        self.map_input(|input| input.on_input(callback))
    }

    /// Ref callback receiving the inner field's handle.
    pub fn with_text_area_ref(self, callback: RefCallback) -> Self {
        self.map_input(|input| input.with_input_ref(callback))
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut Input {
        &mut self.input
    }

    pub fn value(&self) -> String {
        self.input.value()
    }

    pub fn variant(&self) -> InputVariant {
        self.input.variant()
    }

    /// Class list applied to the inner field.
    pub fn input_class_name(&self) -> Option<&str> {
        self.input.class_name()
    }
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for TextArea {
    fn widget_type(&self) -> &str {
        "TextArea"
    }

    fn render(&self, region: Region, theme: &Theme) -> Vec<Strip> {
        self.input.render(region, theme)
    }

    fn height_hint(&self, width: i32) -> i32 {
        self.input.height_hint(width)
    }

    fn can_focus(&self) -> bool {
        self.input.can_focus()
    }

    fn set_focused(&mut self, focused: bool) {
        self.input.set_focused(focused);
    }

    fn handle_input(&mut self, event: &InputEvent, region: Region) -> bool {
        self.input.handle_input(event, region)
    }

    fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
