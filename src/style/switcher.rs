//! Stylesheet for the project/account switcher content.

use crate::geometry::Spacing;
use crate::style::styles::{Styles, TextAlign, TextTransform};
use crate::style::theme::Theme;

/// Width in cells of the image / placeholder column of a switcher item.
pub const IMAGE_WRAPPER_WIDTH: i32 = 4;

/// Padding around each switcher list.
pub const SWITCHER_LIST_PADDING: Spacing = Spacing::new(0, 1, 1, 1);

/// Style blocks for every element of the switcher content.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitcherStyles {
    pub switcher_list: Styles,
    pub heading: Styles,
    pub switcher_item: Styles,
    pub switcher_item_active: Styles,
    pub switcher_item_focused: Styles,
    pub image_wrapper: Styles,
    pub switcher_account_image_wrapper: Styles,
    pub image: Styles,
    pub placeholder: Styles,
    pub link: Styles,
}

/// Build the switcher styles for `theme`.
pub fn switcher_stylesheet(theme: &Theme) -> SwitcherStyles {
    let image_wrapper = Styles {
        width: Some(IMAGE_WRAPPER_WIDTH),
        text_align: Some(TextAlign::Center),
        ..Styles::default()
    }
    .with_background(theme.border.clone())
    .with_color(theme.text.clone());

    SwitcherStyles {
        switcher_list: Styles {
            padding: Some(SWITCHER_LIST_PADDING),
            ..Styles::default()
        }
        .with_background(theme.surface.clone()),
        heading: Styles {
            text_transform: Some(TextTransform::Uppercase),
            ..Styles::default()
        }
        .with_color(theme.muted.clone())
        .with_bold(),
        switcher_item: Styles::new().with_color(theme.text.clone()),
        switcher_item_active: Styles::new()
            .with_background(theme.surface_raised.clone())
            .with_bold(),
        switcher_item_focused: Styles::new().with_color(theme.focus.clone()),
        // Accounts use a rounded avatar in the design system; in cells the
        // difference is the accent background.
        switcher_account_image_wrapper: image_wrapper
            .merge(&Styles::new().with_background(theme.accent.clone())),
        image_wrapper,
        image: Styles::new().with_color(theme.text.clone()),
        placeholder: Styles {
            text_align: Some(TextAlign::Center),
            ..Styles::default()
        }
        .with_bold(),
        link: Styles::new().with_color(theme.accent.clone()),
    }
}
