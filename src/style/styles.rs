//! Typed style declarations produced by stylesheet functions.
//!
//! Every field is an `Option<T>`; `None` means "not declared" so a later
//! declaration set can be layered on top with [`Styles::merge`].

use crate::geometry::Spacing;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Case transform applied to text before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTransform {
    None,
    Uppercase,
    Lowercase,
}

impl TextTransform {
    /// Apply the transform to `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            TextTransform::None => text.to_owned(),
            TextTransform::Uppercase => text.to_uppercase(),
            TextTransform::Lowercase => text.to_lowercase(),
        }
    }
}

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderKind {
    /// A single rule under the content (the "line" input variant).
    Underline,
    /// A thin box around the content.
    Thin,
    /// A rounded box around the content.
    Round,
}

/// A border with kind and optional color.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub kind: BorderKind,
    pub color: Option<String>,
}

impl Border {
    pub fn new(kind: BorderKind, color: impl Into<String>) -> Self {
        Self {
            kind,
            color: Some(color.into()),
        }
    }
}

/// Text style flags (bold, italic, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyleFlags {
    pub bold: Option<bool>,
    pub dim: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub reverse: Option<bool>,
}

/// One block of style declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Styles {
    // Colors
    pub color: Option<String>,
    pub background: Option<String>,

    // Text
    pub text_align: Option<TextAlign>,
    pub text_transform: Option<TextTransform>,
    pub text_style: Option<TextStyleFlags>,

    // Box
    pub border: Option<Border>,
    pub padding: Option<Spacing>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub min_height: Option<i32>,
}

impl Styles {
    /// Create a new `Styles` with nothing declared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer `other` on top of `self`: every field declared in `other` wins.
    pub fn merge(&self, other: &Styles) -> Styles {
        fn pick<T: Clone>(base: &Option<T>, over: &Option<T>) -> Option<T> {
            over.clone().or_else(|| base.clone())
        }

        Styles {
            color: pick(&self.color, &other.color),
            background: pick(&self.background, &other.background),
            text_align: pick(&self.text_align, &other.text_align),
            text_transform: pick(&self.text_transform, &other.text_transform),
            text_style: pick(&self.text_style, &other.text_style),
            border: pick(&self.border, &other.border),
            padding: pick(&self.padding, &other.padding),
            width: pick(&self.width, &other.width),
            height: pick(&self.height, &other.height),
            min_height: pick(&self.min_height, &other.min_height),
        }
    }

    /// Returns `true` if no field is declared.
    pub fn is_empty(&self) -> bool {
        *self == Styles::default()
    }

    /// Padding, or zero when undeclared.
    pub fn padding_or_zero(&self) -> Spacing {
        self.padding.unwrap_or_default()
    }

    /// Apply the declared text transform (if any) to `text`.
    pub fn transform_text(&self, text: &str) -> String {
        self.text_transform
            .unwrap_or(TextTransform::None)
            .apply(text)
    }

    // -- builder helpers used by the stylesheet functions -------------------

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn with_bold(mut self) -> Self {
        let mut flags = self.text_style.unwrap_or_default();
        flags.bold = Some(true);
        self.text_style = Some(flags);
        self
    }

    pub fn with_dim(mut self) -> Self {
        let mut flags = self.text_style.unwrap_or_default();
        flags.dim = Some(true);
        self.text_style = Some(flags);
        self
    }

    pub fn with_underline(mut self) -> Self {
        let mut flags = self.text_style.unwrap_or_default();
        flags.underline = Some(true);
        self.text_style = Some(flags);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        assert!(Styles::new().is_empty());
        assert!(!Styles::new().with_color("red").is_empty());
    }

    #[test]
    fn merge_prefers_declared_fields_of_other() {
        let base = Styles::new().with_color("red").with_background("black");
        let over = Styles::new().with_color("blue");
        let merged = base.merge(&over);
        assert_eq!(merged.color.as_deref(), Some("blue"));
        assert_eq!(merged.background.as_deref(), Some("black"));
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let base = Styles {
            padding: Some(Spacing::all(1)),
            min_height: Some(3),
            ..Styles::default()
        };
        assert_eq!(base.merge(&Styles::new()), base);
        assert_eq!(Styles::new().merge(&base), base);
    }

    #[test]
    fn text_transform() {
        let s = Styles {
            text_transform: Some(TextTransform::Uppercase),
            ..Styles::default()
        };
        assert_eq!(s.transform_text("Accounts"), "ACCOUNTS");
        assert_eq!(Styles::new().transform_text("Accounts"), "Accounts");
        assert_eq!(TextTransform::Lowercase.apply("AbC"), "abc");
    }

    #[test]
    fn flag_builders_accumulate() {
        let s = Styles::new().with_bold().with_underline();
        let flags = s.text_style.unwrap();
        assert_eq!(flags.bold, Some(true));
        assert_eq!(flags.underline, Some(true));
        assert_eq!(flags.dim, None);
    }
}
