//! Cell-space geometry: [`Region`] and [`Spacing`].
//!
//! All coordinates are terminal cells. Regions are half-open on the right and
//! bottom edges, so a region of width 0 or height 0 is empty.

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle in terminal cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// An empty region at the origin.
    pub const EMPTY: Region = Region { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new region.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The right edge (exclusive).
    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive).
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// True when the region covers no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the point (x, y) lies inside this region.
    #[inline]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Intersection of two regions, or [`Region::EMPTY`] when they do not overlap.
    pub fn intersection(self, other: Region) -> Region {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        if x2 <= x1 || y2 <= y1 {
            Region::EMPTY
        } else {
            Region::new(x1, y1, x2 - x1, y2 - y1)
        }
    }

    /// The single row `dy` cells below the top edge, or empty if out of range.
    pub fn row(self, dy: i32) -> Region {
        if dy < 0 || dy >= self.height {
            return Region::EMPTY;
        }
        Region::new(self.x, self.y + dy, self.width, 1)
    }

    /// Split at `offset` rows from the top. Returns `(top, bottom)`.
    pub fn split_horizontal(self, offset: i32) -> (Region, Region) {
        let at = offset.clamp(0, self.height.max(0));
        (
            Region::new(self.x, self.y, self.width, at),
            Region::new(self.x, self.y + at, self.width, self.height - at),
        )
    }

    /// Split at `offset` columns from the left. Returns `(left, right)`.
    pub fn split_vertical(self, offset: i32) -> (Region, Region) {
        let at = offset.clamp(0, self.width.max(0));
        (
            Region::new(self.x, self.y, at, self.height),
            Region::new(self.x + at, self.y, self.width - at, self.height),
        )
    }

    /// Contract the region by `spacing`, clamping dimensions at zero.
    pub fn shrink(self, spacing: Spacing) -> Region {
        Region {
            x: self.x + spacing.left,
            y: self.y + spacing.top,
            width: (self.width - spacing.left - spacing.right).max(0),
            height: (self.height - spacing.top - spacing.bottom).max(0),
        }
    }
}

// ---------------------------------------------------------------------------
// Spacing
// ---------------------------------------------------------------------------

/// Padding or margin on the four sides of a rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Spacing {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Spacing {
    /// Create spacing from explicit sides (CSS order: top, right, bottom, left).
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Same value on every side.
    pub const fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Vertical and horizontal shorthand.
    pub const fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total horizontal spacing.
    pub const fn width(self) -> i32 {
        self.left + self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let r = Region::new(2, 3, 10, 4);
        assert_eq!(r.right(), 12);
        assert_eq!(r.bottom(), 7);
        assert!(!r.is_empty());
        assert!(Region::new(0, 0, 0, 5).is_empty());
    }

    #[test]
    fn contains_is_half_open() {
        let r = Region::new(0, 0, 5, 2);
        assert!(r.contains(0, 0));
        assert!(r.contains(4, 1));
        assert!(!r.contains(5, 0));
        assert!(!r.contains(0, 2));
    }

    #[test]
    fn intersection_overlap_and_disjoint() {
        let a = Region::new(0, 0, 10, 10);
        let b = Region::new(5, 5, 10, 10);
        assert_eq!(a.intersection(b), Region::new(5, 5, 5, 5));
        let c = Region::new(20, 20, 1, 1);
        assert_eq!(a.intersection(c), Region::EMPTY);
    }

    #[test]
    fn row_in_and_out_of_range() {
        let r = Region::new(1, 1, 8, 3);
        assert_eq!(r.row(2), Region::new(1, 3, 8, 1));
        assert!(r.row(3).is_empty());
        assert!(r.row(-1).is_empty());
    }

    #[test]
    fn splits_clamp() {
        let r = Region::new(0, 0, 10, 6);
        let (top, bottom) = r.split_horizontal(2);
        assert_eq!(top, Region::new(0, 0, 10, 2));
        assert_eq!(bottom, Region::new(0, 2, 10, 4));

        let (left, right) = r.split_vertical(40);
        assert_eq!(left.width, 10);
        assert_eq!(right.width, 0);
    }

    #[test]
    fn shrink_clamps_at_zero() {
        let r = Region::new(0, 0, 3, 3);
        let s = r.shrink(Spacing::all(2));
        assert_eq!(s.x, 2);
        assert_eq!(s.width, 0);
        assert_eq!(s.height, 0);
        assert_eq!(Spacing::symmetric(1, 2).width(), 4);
    }
}
