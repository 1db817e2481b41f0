//! Strip: one row of styled terminal cells.
//!
//! Widgets render into `Vec<Strip>`; a [`Frame`](super::frame::Frame) places
//! the strips into a screen-sized grid.

use crate::style::styles::{Styles, TextAlign};

// ---------------------------------------------------------------------------
// CellStyle
// ---------------------------------------------------------------------------

/// Visual style of a single cell. Colors are named colors or `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl CellStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the cell-level attributes of a style block.
    pub fn from_styles(styles: &Styles) -> Self {
        let flags = styles.text_style.unwrap_or_default();
        CellStyle {
            fg: styles.color.clone(),
            bg: styles.background.clone(),
            bold: flags.bold.unwrap_or(false),
            dim: flags.dim.unwrap_or(false),
            italic: flags.italic.unwrap_or(false),
            underline: flags.underline.unwrap_or(false),
            reverse: flags.reverse.unwrap_or(false),
        }
    }

    /// Cell style of `styles` layered over `base`.
    pub fn layered(base: &Styles, over: &Styles) -> Self {
        Self::from_styles(&base.merge(over))
    }
}

// ---------------------------------------------------------------------------
// StyledCell
// ---------------------------------------------------------------------------

/// One character with its style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledCell {
    pub ch: char,
    pub style: CellStyle,
}

impl StyledCell {
    pub fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }

    /// A blank (space) cell with the given style.
    pub fn blank_styled(style: CellStyle) -> Self {
        Self { ch: ' ', style }
    }
}

impl Default for StyledCell {
    fn default() -> Self {
        Self::blank_styled(CellStyle::default())
    }
}

// ---------------------------------------------------------------------------
// Strip
// ---------------------------------------------------------------------------

/// A horizontal run of cells starting at (`x_offset`, `y`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    pub y: i32,
    pub x_offset: i32,
    pub cells: Vec<StyledCell>,
}

impl Strip {
    /// Create an empty strip at the given row and column.
    pub fn new(y: i32, x_offset: i32) -> Self {
        Self {
            y,
            x_offset,
            cells: Vec::new(),
        }
    }

    pub fn push(&mut self, ch: char, style: CellStyle) {
        self.cells.push(StyledCell::new(ch, style));
    }

    /// Push every character of `text` with the same style.
    pub fn push_str(&mut self, text: &str, style: CellStyle) {
        self.cells
            .extend(text.chars().map(|ch| StyledCell::new(ch, style.clone())));
    }

    /// Push `text` aligned inside a field of `width` cells, truncating if needed.
    pub fn push_aligned(&mut self, text: &str, width: i32, align: TextAlign, style: CellStyle) {
        let width = width.max(0) as usize;
        let truncated: String = text.chars().take(width).collect();
        let len = truncated.chars().count();
        let slack = width - len;
        let left = match align {
            TextAlign::Left => 0,
            TextAlign::Center => slack / 2,
            TextAlign::Right => slack,
        };
        self.push_str(&" ".repeat(left), style.clone());
        self.push_str(&truncated, style.clone());
        self.push_str(&" ".repeat(slack - left), style);
    }

    /// The width of this strip in cells.
    pub fn width(&self) -> i32 {
        self.cells.len() as i32
    }

    /// The rightmost column (exclusive).
    pub fn right(&self) -> i32 {
        self.x_offset + self.width()
    }

    /// Pad with blanks of `style`, or truncate, to exactly `width` cells.
    pub fn fill(&mut self, width: i32, style: CellStyle) {
        let w = width.max(0) as usize;
        self.cells.resize(w, StyledCell::blank_styled(style));
    }

    /// The characters of the strip as a `String`.
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.ch).collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
