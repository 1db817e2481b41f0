//! Border drawing for [`BorderKind`]s.

use crate::geometry::{Region, Spacing};
use crate::style::styles::BorderKind;

use super::strip::{CellStyle, Strip};

/// Box-drawing characters of one border kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BoxChars {
    pub const THIN: BoxChars = BoxChars {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    pub const ROUND: BoxChars = BoxChars {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        ..BoxChars::THIN
    };
}

/// Space the border takes on each side of the content.
pub fn border_spacing(kind: Option<BorderKind>) -> Spacing {
    match kind {
        None => Spacing::default(),
        Some(BorderKind::Underline) => Spacing::new(0, 0, 1, 0),
        Some(BorderKind::Thin) | Some(BorderKind::Round) => Spacing::all(1),
    }
}

/// Draw the border of `kind` around the edge of `region`.
pub fn draw_border(region: Region, kind: BorderKind, style: &CellStyle) -> Vec<Strip> {
    if region.is_empty() {
        return Vec::new();
    }
    match kind {
        BorderKind::Underline => vec![rule(region.row(region.height - 1), '─', style)],
        BorderKind::Thin => draw_box(region, BoxChars::THIN, style),
        BorderKind::Round => draw_box(region, BoxChars::ROUND, style),
    }
}

fn rule(row: Region, ch: char, style: &CellStyle) -> Strip {
    let mut strip = Strip::new(row.y, row.x);
    for _ in 0..row.width {
        strip.push(ch, style.clone());
    }
    strip
}

fn draw_box(region: Region, chars: BoxChars, style: &CellStyle) -> Vec<Strip> {
    if region.width < 2 || region.height < 2 {
        return Vec::new();
    }
    let inner = (region.width - 2) as usize;
    let mut strips = Vec::with_capacity(region.height as usize);

    let edge = |y: i32, left: char, right: char| {
        let mut strip = Strip::new(y, region.x);
        strip.push(left, style.clone());
        strip.push_str(&chars.horizontal.to_string().repeat(inner), style.clone());
        strip.push(right, style.clone());
        strip
    };

    strips.push(edge(region.y, chars.top_left, chars.top_right));
    for y in region.y + 1..region.bottom() - 1 {
        let mut left = Strip::new(y, region.x);
        left.push(chars.vertical, style.clone());
        let mut right = Strip::new(y, region.right() - 1);
        right.push(chars.vertical, style.clone());
        strips.push(left);
        strips.push(right);
    }
    strips.push(edge(region.bottom() - 1, chars.bottom_left, chars.bottom_right));
    strips
}
