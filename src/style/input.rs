//! Default stylesheet of the input primitive and the text-area overrides.
//!
//! Stylesheet functions take the styles computed so far, the props that
//! influence styling, and the theme, and return the next styles. The input
//! primitive starts from [`input_stylesheet`] and then runs whatever chain of
//! overrides its owner installed.

use crate::components::input::{InputTag, InputVariant};
use crate::geometry::Spacing;
use crate::style::styles::{Border, BorderKind, Styles, TextAlign};
use crate::style::theme::Theme;

/// Minimum number of text rows of a text-area.
pub const TEXT_AREA_MIN_ROWS: i32 = 3;

/// The subset of input props that drive its styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputStyleProps {
    pub variant: InputVariant,
    pub tag: InputTag,
    pub focused: bool,
    pub disabled: bool,
    pub has_value: bool,
}

/// Style blocks of the input primitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputStyles {
    /// The outer box, including the border.
    pub wrapper: Styles,
    /// The editable text.
    pub input: Styles,
    /// Text shown while the value is empty.
    pub placeholder: Styles,
}

/// Base styles of the input primitive.
pub fn input_stylesheet(props: &InputStyleProps, theme: &Theme) -> InputStyles {
    let border_color = if props.disabled {
        theme.disabled.clone()
    } else if props.focused {
        theme.focus.clone()
    } else {
        theme.border.clone()
    };

    let border_kind = match props.variant {
        InputVariant::Line => BorderKind::Underline,
        InputVariant::Box => BorderKind::Thin,
    };

    let text_color = if props.disabled {
        theme.disabled.clone()
    } else {
        theme.text.clone()
    };

    InputStyles {
        wrapper: Styles {
            border: Some(Border::new(border_kind, border_color)),
            height: Some(1),
            ..Styles::default()
        }
        .with_background(theme.surface.clone()),
        input: Styles {
            text_align: Some(TextAlign::Left),
            padding: Some(Spacing::symmetric(0, 1)),
            ..Styles::default()
        }
        .with_color(text_color),
        placeholder: Styles::new().with_color(theme.muted.clone()).with_dim(),
    }
}

/// Text-area overrides layered on top of [`input_stylesheet`].
///
/// A text-area grows to at least [`TEXT_AREA_MIN_ROWS`] rows and uses a
/// rounded box in the `box` variant.
pub fn text_area_stylesheet(
    styles: InputStyles,
    props: &InputStyleProps,
    _theme: &Theme,
) -> InputStyles {
    debug_assert_eq!(props.tag, InputTag::TextArea);

    let mut wrapper = styles.wrapper;
    wrapper.height = None;
    wrapper.min_height = Some(TEXT_AREA_MIN_ROWS);
    if props.variant == InputVariant::Box {
        if let Some(border) = wrapper.border.as_mut() {
            border.kind = BorderKind::Round;
        }
    }

    InputStyles {
        wrapper,
        input: styles.input,
        placeholder: styles.placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(variant: InputVariant, tag: InputTag) -> InputStyleProps {
        InputStyleProps {
            variant,
            tag,
            focused: false,
            disabled: false,
            has_value: false,
        }
    }

    #[test]
    fn line_variant_underlines() {
        let s = input_stylesheet(&props(InputVariant::Line, InputTag::Input), &Theme::light());
        assert_eq!(s.wrapper.border.unwrap().kind, BorderKind::Underline);
        assert_eq!(s.wrapper.height, Some(1));
    }

    #[test]
    fn box_variant_boxes() {
        let s = input_stylesheet(&props(InputVariant::Box, InputTag::Input), &Theme::light());
        assert_eq!(s.wrapper.border.unwrap().kind, BorderKind::Thin);
    }

    #[test]
    fn focus_colors_border() {
        let theme = Theme::light();
        let mut p = props(InputVariant::Line, InputTag::Input);
        p.focused = true;
        let s = input_stylesheet(&p, &theme);
        assert_eq!(s.wrapper.border.unwrap().color, Some(theme.focus.clone()));
    }

    #[test]
    fn disabled_wins_over_focus() {
        let theme = Theme::light();
        let mut p = props(InputVariant::Line, InputTag::Input);
        p.focused = true;
        p.disabled = true;
        let s = input_stylesheet(&p, &theme);
        assert_eq!(s.wrapper.border.unwrap().color, Some(theme.disabled.clone()));
        assert_eq!(s.input.color, Some(theme.disabled.clone()));
    }

    #[test]
    fn text_area_grows_and_rounds_box() {
        let theme = Theme::light();
        let p = props(InputVariant::Box, InputTag::TextArea);
        let s = text_area_stylesheet(input_stylesheet(&p, &theme), &p, &theme);
        assert_eq!(s.wrapper.height, None);
        assert_eq!(s.wrapper.min_height, Some(TEXT_AREA_MIN_ROWS));
        assert_eq!(s.wrapper.border.unwrap().kind, BorderKind::Round);
    }

    #[test]
    fn text_area_line_keeps_underline() {
        let theme = Theme::light();
        let p = props(InputVariant::Line, InputTag::TextArea);
        let s = text_area_stylesheet(input_stylesheet(&p, &theme), &p, &theme);
        assert_eq!(s.wrapper.border.unwrap().kind, BorderKind::Underline);
    }
}
