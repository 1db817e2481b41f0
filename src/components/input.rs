//! Input primitive: the editable field behind text inputs and text-areas.
//!
//! The primitive owns the value and cursor, renders its wrapper (background,
//! border, padding) and the text, and reports edits to its owner through
//! callbacks:
//!
//! - `on_focus` / `on_blur` when keyboard focus arrives or leaves
//! - `on_input(value)` after every edit
//! - `on_change(value)` on blur, when the value differs from the value at focus
//! - the ref callback with `Some(InputRef)` when attached and `None` on drop
//!
//! The [`InputTag::TextArea`] tag makes the field multi-line: Enter inserts a
//! line break and Up / Down move between lines.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;

use crate::event::input::{InputEvent, Key, KeyEvent, Modifiers};
use crate::geometry::Region;
use crate::render::border::{border_spacing, draw_border};
use crate::render::strip::{CellStyle, Strip};
use crate::style::input::{input_stylesheet, InputStyleProps, InputStyles};
use crate::style::styles::{Styles, TextAlign};
use crate::style::theme::Theme;
use crate::style::StylesheetFn;
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// Variant and tag
// ---------------------------------------------------------------------------

/// Visual variant of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputVariant {
    /// A single rule under the text.
    #[default]
    Line,
    /// A full box around the text.
    Box,
}

/// Error returned when parsing an unknown variant name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown input variant: {0}")]
pub struct UnknownVariant(pub String);

impl FromStr for InputVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "line" => Ok(InputVariant::Line),
            "box" => Ok(InputVariant::Box),
            other => Err(UnknownVariant(other.to_owned())),
        }
    }
}

impl fmt::Display for InputVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputVariant::Line => "line",
            InputVariant::Box => "box",
        })
    }
}

/// The element the primitive stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputTag {
    /// Single-line field.
    #[default]
    Input,
    /// Multi-line field.
    TextArea,
}

// ---------------------------------------------------------------------------
// Shared state and refs
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct InputState {
    value: String,
    /// Byte offset into `value`, always on a char boundary.
    cursor: usize,
    focused: bool,
    value_at_focus: String,
}

/// A handle to a live input, handed to the owner's ref callback.
///
/// The handle does not keep the input alive; once the input is dropped every
/// accessor returns `None` or `false`.
#[derive(Clone)]
pub struct InputRef {
    state: Weak<RefCell<InputState>>,
}

impl InputRef {
    /// Whether the input still exists.
    pub fn is_attached(&self) -> bool {
        self.state.strong_count() > 0
    }

    /// The current value.
    pub fn value(&self) -> Option<String> {
        self.state.upgrade().map(|s| s.borrow().value.clone())
    }

    /// Replace the value, moving the cursor to the end. Returns `false` when
    /// the input is gone.
    pub fn set_value(&self, value: impl Into<String>) -> bool {
        let Some(state) = self.state.upgrade() else {
            return false;
        };
        let mut state = state.borrow_mut();
        state.value = value.into();
        state.cursor = state.value.len();
        true
    }

    /// Whether the input holds keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.state
            .upgrade()
            .is_some_and(|s| s.borrow().focused)
    }
}

impl fmt::Debug for InputRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputRef")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// Callback without arguments (focus, blur).
pub type FocusCallback = Rc<dyn Fn()>;
/// Callback receiving the current value (input, change).
pub type ValueCallback = Rc<dyn Fn(&str)>;
/// Ref callback: `Some` on attach, `None` on detach.
pub type RefCallback = Rc<dyn Fn(Option<InputRef>)>;
/// Stylesheet override of the input primitive.
pub type InputStylesheet = StylesheetFn<InputStyles, InputStyleProps>;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// The input primitive.
///
/// # Examples
///
/// ```ignore
/// let input = Input::new(InputTag::Input)
///     .with_placeholder("Name")
///     .on_input(Rc::new(|value: &str| println!("typed {value}")));
/// ```
pub struct Input {
    tag: InputTag,
    variant: InputVariant,
    placeholder: String,
    disabled: bool,
    class_name: Option<String>,
    stylesheets: Vec<InputStylesheet>,
    state: Rc<RefCell<InputState>>,

    on_blur: Option<FocusCallback>,
    on_focus: Option<FocusCallback>,
    on_input: Option<ValueCallback>,
    on_change: Option<ValueCallback>,
    input_ref: Option<RefCallback>,
}

impl Input {
    /// Create an empty input standing for `tag`.
    pub fn new(tag: InputTag) -> Self {
        Self {
            tag,
            variant: InputVariant::default(),
            placeholder: String::new(),
            disabled: false,
            class_name: None,
            stylesheets: Vec::new(),
            state: Rc::new(RefCell::new(InputState::default())),
            on_blur: None,
            on_focus: None,
            on_input: None,
            on_change: None,
            input_ref: None,
        }
    }

    pub fn with_variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_value(self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Append a stylesheet override. Overrides run in the order added, after
    /// the default stylesheet.
    pub fn with_stylesheet(mut self, stylesheet: InputStylesheet) -> Self {
        self.stylesheets.push(stylesheet);
        self
    }

    pub fn on_blur(mut self, callback: FocusCallback) -> Self {
        self.on_blur = Some(callback);
        self
    }

    pub fn on_focus(mut self, callback: FocusCallback) -> Self {
        self.on_focus = Some(callback);
        self
    }

    pub fn on_input(mut self, callback: ValueCallback) -> Self {
        self.on_input = Some(callback);
        self
    }

    pub fn on_change(mut self, callback: ValueCallback) -> Self {
        self.on_change = Some(callback);
        self
    }

    /// Install the ref callback. A previously installed callback is told
    /// about the detach first; the new one receives the handle right away.
    pub fn with_input_ref(mut self, callback: RefCallback) -> Self {
        if let Some(previous) = self.input_ref.take() {
            previous(None);
        }
        callback(Some(self.handle()));
        self.input_ref = Some(callback);
        self
    }

    // -- accessors ----------------------------------------------------------

    pub fn tag(&self) -> InputTag {
        self.tag
    }

    pub fn variant(&self) -> InputVariant {
        self.variant
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_focused(&self) -> bool {
        self.state.borrow().focused
    }

    pub fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    /// The cursor position (byte offset).
    pub fn cursor(&self) -> usize {
        self.state.borrow().cursor
    }

    /// A weak handle to this input.
    pub fn handle(&self) -> InputRef {
        InputRef {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Replace the value without notifying `on_input`.
    pub fn set_value(&self, value: impl Into<String>) {
        let mut state = self.state.borrow_mut();
        state.value = value.into();
        state.cursor = state.value.len();
    }

    /// The props the stylesheets see.
    pub fn style_props(&self) -> InputStyleProps {
        let state = self.state.borrow();
        InputStyleProps {
            variant: self.variant,
            tag: self.tag,
            focused: state.focused,
            disabled: self.disabled,
            has_value: !state.value.is_empty(),
        }
    }

    /// Default stylesheet followed by every override.
    pub fn styles(&self, theme: &Theme) -> InputStyles {
        let props = self.style_props();
        self.stylesheets
            .iter()
            .fold(input_stylesheet(&props, theme), |styles, sheet| {
                sheet(styles, &props, theme)
            })
    }

    // -- editing ------------------------------------------------------------

    fn edit(&mut self, f: impl FnOnce(&mut InputState) -> bool) -> bool {
        let changed = {
            let mut state = self.state.borrow_mut();
            let before = state.value.clone();
            if !f(&mut *state) {
                return false;
            }
            (state.value != before).then(|| state.value.clone())
        };
        if let (Some(value), Some(on_input)) = (changed.as_deref(), self.on_input.as_ref()) {
            on_input(value);
        }
        true
    }

    fn move_cursor(&mut self, f: impl FnOnce(&str, usize) -> usize) -> bool {
        let mut state = self.state.borrow_mut();
        let cursor = f(&state.value, state.cursor);
        state.cursor = cursor;
        true
    }

    /// Insert text at the cursor. Line breaks are dropped unless multi-line.
    pub fn insert_str(&mut self, text: &str) -> bool {
        let text: String = match self.tag {
            InputTag::TextArea => text.replace("\r\n", "\n"),
            InputTag::Input => text.chars().filter(|c| *c != '\n' && *c != '\r').collect(),
        };
        if text.is_empty() {
            return false;
        }
        self.edit(|state| {
            let at = state.cursor;
            state.value.insert_str(at, &text);
            state.cursor = at + text.len();
            true
        })
    }

    /// Insert a line break. Single-line inputs ignore it.
    pub fn insert_newline(&mut self) -> bool {
        match self.tag {
            InputTag::TextArea => self.insert_str("\n"),
            InputTag::Input => false,
        }
    }

    /// Delete the character before the cursor.
    pub fn delete_backward(&mut self) -> bool {
        self.edit(|state| {
            if state.cursor == 0 {
                return false;
            }
            let prev = prev_boundary(&state.value, state.cursor);
            state.value.drain(prev..state.cursor);
            state.cursor = prev;
            true
        })
    }

    /// Delete the character after the cursor.
    pub fn delete_forward(&mut self) -> bool {
        self.edit(|state| {
            if state.cursor >= state.value.len() {
                return false;
            }
            let next = next_boundary(&state.value, state.cursor);
            state.value.drain(state.cursor..next);
            true
        })
    }

    pub fn move_left(&mut self) -> bool {
        self.move_cursor(prev_boundary)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_cursor(|text, cursor| {
            if cursor >= text.len() {
                cursor
            } else {
                next_boundary(text, cursor)
            }
        })
    }

    /// Move to the start of the current line.
    pub fn move_line_start(&mut self) -> bool {
        self.move_cursor(|text, cursor| {
            let (line, _) = line_col(text, cursor);
            offset_of(text, line, 0)
        })
    }

    /// Move to the end of the current line.
    pub fn move_line_end(&mut self) -> bool {
        self.move_cursor(|text, cursor| {
            let (line, _) = line_col(text, cursor);
            offset_of(text, line, usize::MAX)
        })
    }

    /// Move one line up, keeping the column where possible.
    pub fn move_up(&mut self) -> bool {
        if self.tag != InputTag::TextArea {
            return false;
        }
        self.move_cursor(|text, cursor| match line_col(text, cursor) {
            (0, _) => 0,
            (line, col) => offset_of(text, line - 1, col),
        })
    }

    /// Move one line down, keeping the column where possible.
    pub fn move_down(&mut self) -> bool {
        if self.tag != InputTag::TextArea {
            return false;
        }
        self.move_cursor(|text, cursor| {
            let (line, col) = line_col(text, cursor);
            if line + 1 >= text.split('\n').count() {
                text.len()
            } else {
                offset_of(text, line + 1, col)
            }
        })
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let typed = key.modifiers.is_empty() || key.modifiers == Modifiers::SHIFT;
        match key.code {
            Key::Char(ch) if typed => self.insert_str(ch.encode_utf8(&mut [0; 4])),
            Key::Enter => self.insert_newline(),
            Key::Backspace => self.delete_backward(),
            Key::Delete => self.delete_forward(),
            Key::Left => self.move_left(),
            Key::Right => self.move_right(),
            Key::Home => self.move_line_start(),
            Key::End => self.move_line_end(),
            Key::Up => self.move_up(),
            Key::Down => self.move_down(),
            _ => false,
        }
    }

    // -- layout -------------------------------------------------------------

    /// Text rows for the current value given the wrapper styles.
    fn text_rows(&self, wrapper: &Styles) -> i32 {
        let lines = match self.tag {
            InputTag::Input => 1,
            InputTag::TextArea => self.state.borrow().value.split('\n').count() as i32,
        };
        match wrapper.height {
            Some(height) => height,
            None => lines.max(wrapper.min_height.unwrap_or(1)),
        }
    }

    fn content_region(styles: &InputStyles, region: Region) -> Region {
        let border = styles.wrapper.border.as_ref().map(|b| b.kind);
        region
            .shrink(border_spacing(border))
            .shrink(styles.wrapper.padding_or_zero())
            .shrink(styles.input.padding_or_zero())
    }

    /// First visible line and column so the cursor stays in view.
    /// An unfocused field has no cursor and shows its start.
    fn scroll_offsets(&self, content: Region) -> (usize, usize) {
        let state = self.state.borrow();
        if !state.focused {
            return (0, 0);
        }
        let (line, col) = line_col(&state.value, state.cursor);
        let rows = content.height.max(1) as usize;
        let cols = content.width.max(1) as usize;
        (
            (line + 1).saturating_sub(rows),
            (col + 1).saturating_sub(cols),
        )
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new(InputTag::Input)
    }
}

impl Drop for Input {
    fn drop(&mut self) {
        if let Some(input_ref) = self.input_ref.take() {
            input_ref(None);
        }
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Input")
            .field("tag", &self.tag)
            .field("variant", &self.variant)
            .field("value", &state.value)
            .field("cursor", &state.cursor)
            .field("focused", &state.focused)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

impl Widget for Input {
    fn widget_type(&self) -> &str {
        match self.tag {
            InputTag::Input => "Input",
            InputTag::TextArea => "TextArea",
        }
    }

    fn render(&self, region: Region, theme: &Theme) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }
        let styles = self.styles(theme);
        let wrapper_style = CellStyle::from_styles(&styles.wrapper);

        let mut strips: Vec<Strip> = (0..region.height)
            .map(|dy| {
                let mut strip = Strip::new(region.y + dy, region.x);
                strip.fill(region.width, wrapper_style.clone());
                strip
            })
            .collect();

        if let Some(border) = &styles.wrapper.border {
            let border_style = CellStyle {
                fg: border.color.clone(),
                ..wrapper_style.clone()
            };
            strips.extend(draw_border(region, border.kind, &border_style));
        }

        let content = Self::content_region(&styles, region);
        if content.is_empty() {
            return strips;
        }

        let (first_line, first_col) = self.scroll_offsets(content);
        let state = self.state.borrow();
        let text_styles = styles.wrapper.merge(&styles.input);
        let text_style = CellStyle::from_styles(&text_styles);
        let align = text_styles.text_align.unwrap_or(TextAlign::Left);

        let shown = if state.value.is_empty() {
            let placeholder = text_styles.transform_text(&self.placeholder);
            let row = content.row(0);
            let mut strip = Strip::new(row.y, row.x);
            strip.push_aligned(
                &placeholder,
                row.width,
                align,
                CellStyle::from_styles(&text_styles.merge(&styles.placeholder)),
            );
            strips.push(strip);
            placeholder
        } else {
            for (dy, line) in state.value.split('\n').skip(first_line).enumerate() {
                let row = content.row(dy as i32);
                if row.is_empty() {
                    break;
                }
                let visible: String = line.chars().skip(first_col).collect();
                let mut strip = Strip::new(row.y, row.x);
                strip.push_aligned(&visible, row.width, align, text_style.clone());
                strips.push(strip);
            }
            state.value.clone()
        };

        if state.focused && !self.disabled {
            let (line, col) = line_col(&state.value, state.cursor);
            let x = content.x + (col - first_col) as i32;
            let y = content.y + (line - first_line) as i32;
            if content.contains(x, y) {
                let ch = shown
                    .split('\n')
                    .nth(line)
                    .and_then(|l| l.chars().nth(col))
                    .unwrap_or(' ');
                let mut strip = Strip::new(y, x);
                strip.push(
                    ch,
                    CellStyle {
                        reverse: true,
                        ..text_style
                    },
                );
                strips.push(strip);
            }
        }

        strips
    }

    fn height_hint(&self, _width: i32) -> i32 {
        // Sizes never depend on theme colors.
        let styles = self.styles(&Theme::default());
        let border = border_spacing(styles.wrapper.border.as_ref().map(|b| b.kind));
        let wrapper_padding = styles.wrapper.padding_or_zero();
        let input_padding = styles.input.padding_or_zero();
        self.text_rows(&styles.wrapper)
            + border.top
            + border.bottom
            + wrapper_padding.top
            + wrapper_padding.bottom
            + input_padding.top
            + input_padding.bottom
    }

    fn can_focus(&self) -> bool {
        !self.disabled
    }

    fn set_focused(&mut self, focused: bool) {
        let changed_value = {
            let mut state = self.state.borrow_mut();
            if state.focused == focused {
                return;
            }
            state.focused = focused;
            if focused {
                state.value_at_focus = state.value.clone();
                None
            } else {
                (state.value != state.value_at_focus).then(|| state.value.clone())
            }
        };

        if focused {
            if let Some(on_focus) = &self.on_focus {
                on_focus();
            }
            return;
        }
        if let (Some(value), Some(on_change)) = (changed_value.as_deref(), self.on_change.as_ref()) {
            on_change(value);
        }
        if let Some(on_blur) = &self.on_blur {
            on_blur();
        }
    }

    fn handle_input(&mut self, event: &InputEvent, region: Region) -> bool {
        if self.disabled {
            return false;
        }
        match event {
            InputEvent::Key(key) => self.handle_key(*key),
            InputEvent::Paste(text) => self.insert_str(text),
            InputEvent::Mouse(mouse) if mouse.is_left_click() => {
                let (x, y) = (mouse.x as i32, mouse.y as i32);
                if !region.contains(x, y) {
                    return false;
                }
                let content = Self::content_region(&self.styles(&Theme::default()), region);
                if content.contains(x, y) {
                    let (first_line, first_col) = self.scroll_offsets(content);
                    let line = first_line + (y - content.y) as usize;
                    let col = first_col + (x - content.x) as usize;
                    let mut state = self.state.borrow_mut();
                    state.cursor = offset_of(&state.value, line, col);
                }
                true
            }
            _ => false,
        }
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

// ---------------------------------------------------------------------------
// Text helpers
// ---------------------------------------------------------------------------

fn prev_boundary(text: &str, at: usize) -> usize {
    let mut pos = at.saturating_sub(1);
    while pos > 0 && !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

fn next_boundary(text: &str, at: usize) -> usize {
    let mut pos = at + 1;
    while pos < text.len() && !text.is_char_boundary(pos) {
        pos += 1;
    }
    pos
}

/// Line and column (in chars) of byte offset `at`.
fn line_col(text: &str, at: usize) -> (usize, usize) {
    let before = &text[..at.min(text.len())];
    let line = before.matches('\n').count();
    let col = before.rsplit('\n').next().map_or(0, |l| l.chars().count());
    (line, col)
}

/// Byte offset of `col` chars into `line`, clamped to the line's end.
/// Lines past the last one map to the end of the text.
fn offset_of(text: &str, line: usize, col: usize) -> usize {
    let mut start = 0;
    for (index, content) in text.split('\n').enumerate() {
        if index == line {
            let within = content
                .char_indices()
                .nth(col)
                .map_or(content.len(), |(byte, _)| byte);
            return start + within;
        }
        start += content.len() + 1;
    }
    text.len()
}

// ===========================================================================
// Tests
// ===========================================================================
