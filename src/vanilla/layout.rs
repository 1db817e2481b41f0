//! GlobalNav layout, computed with taffy.
//!
//! The GlobalNav is a flex column: top nav row, sub nav row, then a body row
//! holding the side nav column and the content. Absent parts take no space.

use taffy::prelude::*;

use crate::geometry::Region;

/// Width in cells of the side nav column.
pub const SIDE_NAV_WIDTH: i32 = 26;

/// Errors from layout computation.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout engine failure: {0}")]
    Taffy(#[from] taffy::TaffyError),
}

/// Which parts take space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavParts {
    pub top_nav: bool,
    pub sub_nav: bool,
    pub side_nav: bool,
}

/// Screen regions of the GlobalNav parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavRegions {
    pub top_nav: Option<Region>,
    pub sub_nav: Option<Region>,
    pub side_nav: Option<Region>,
    pub content: Region,
}

fn row_style() -> Style {
    Style {
        size: Size {
            width: Dimension::AUTO,
            height: Dimension::from_length(1.0),
        },
        flex_shrink: 0.0,
        ..Style::default()
    }
}

fn to_region(layout: &taffy::Layout, origin: (f32, f32)) -> Region {
    Region {
        x: (origin.0 + layout.location.x).round() as i32,
        y: (origin.1 + layout.location.y).round() as i32,
        width: layout.size.width.round() as i32,
        height: layout.size.height.round() as i32,
    }
}

/// Lay out the present `parts` inside `area`.
pub fn compute_nav_layout(area: Region, parts: NavParts) -> Result<NavRegions, LayoutError> {
    if area.is_empty() {
        return Ok(NavRegions {
            content: area,
            ..NavRegions::default()
        });
    }

    let mut tree: TaffyTree<()> = TaffyTree::new();

    let top = parts.top_nav.then(|| tree.new_leaf(row_style())).transpose()?;
    let sub = parts.sub_nav.then(|| tree.new_leaf(row_style())).transpose()?;
    let side = parts
        .side_nav
        .then(|| {
            tree.new_leaf(Style {
                size: Size {
                    width: Dimension::from_length(SIDE_NAV_WIDTH as f32),
                    height: Dimension::AUTO,
                },
                flex_shrink: 0.0,
                ..Style::default()
            })
        })
        .transpose()?;
    let content = tree.new_leaf(Style {
        flex_grow: 1.0,
        flex_basis: Dimension::from_length(0.0),
        ..Style::default()
    })?;

    let body_children: Vec<NodeId> = side.into_iter().chain([content]).collect();
    let body = tree.new_with_children(
        Style {
            flex_direction: FlexDirection::Row,
            flex_grow: 1.0,
            flex_basis: Dimension::from_length(0.0),
            ..Style::default()
        },
        &body_children,
    )?;

    let root_children: Vec<NodeId> = top.into_iter().chain(sub).chain([body]).collect();
    let root = tree.new_with_children(
        Style {
            flex_direction: FlexDirection::Column,
            size: Size {
                width: Dimension::from_length(area.width as f32),
                height: Dimension::from_length(area.height as f32),
            },
            ..Style::default()
        },
        &root_children,
    )?;

    tree.compute_layout(
        root,
        Size {
            width: AvailableSpace::Definite(area.width as f32),
            height: AvailableSpace::Definite(area.height as f32),
        },
    )?;

    let origin = (area.x as f32, area.y as f32);
    let body_layout = tree.layout(body)?;
    let body_origin = (
        origin.0 + body_layout.location.x,
        origin.1 + body_layout.location.y,
    );

    // Rows that do not fit are clipped away.
    let clip = |region: Region| Some(region.intersection(area)).filter(|r| !r.is_empty());

    Ok(NavRegions {
        top_nav: match top {
            Some(id) => clip(to_region(tree.layout(id)?, origin)),
            None => None,
        },
        sub_nav: match sub {
            Some(id) => clip(to_region(tree.layout(id)?, origin)),
            None => None,
        },
        side_nav: match side {
            Some(id) => clip(to_region(tree.layout(id)?, body_origin)),
            None => None,
        },
        content: to_region(tree.layout(content)?, body_origin).intersection(area),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Region = Region::new(0, 0, 80, 24);

    fn all() -> NavParts {
        NavParts {
            top_nav: true,
            sub_nav: true,
            side_nav: true,
        }
    }

    #[test]
    fn all_parts() {
        let r = compute_nav_layout(AREA, all()).unwrap();
        assert_eq!(r.top_nav, Some(Region::new(0, 0, 80, 1)));
        assert_eq!(r.sub_nav, Some(Region::new(0, 1, 80, 1)));
        assert_eq!(r.side_nav, Some(Region::new(0, 2, SIDE_NAV_WIDTH, 22)));
        assert_eq!(r.content, Region::new(SIDE_NAV_WIDTH, 2, 80 - SIDE_NAV_WIDTH, 22));
    }

    #[test]
    fn hidden_side_nav_gives_content_full_width() {
        let parts = NavParts {
            side_nav: false,
            ..all()
        };
        let r = compute_nav_layout(AREA, parts).unwrap();
        assert_eq!(r.side_nav, None);
        assert_eq!(r.content, Region::new(0, 2, 80, 22));
    }

    #[test]
    fn nothing_but_content() {
        let r = compute_nav_layout(Region::new(5, 3, 40, 10), NavParts::default()).unwrap();
        assert_eq!(r.top_nav, None);
        assert_eq!(r.content, Region::new(5, 3, 40, 10));
    }

    #[test]
    fn offset_area() {
        let r = compute_nav_layout(Region::new(2, 1, 60, 20), all()).unwrap();
        assert_eq!(r.top_nav, Some(Region::new(2, 1, 60, 1)));
        assert_eq!(r.content.x, 2 + SIDE_NAV_WIDTH);
        assert_eq!(r.content.y, 3);
    }

    #[test]
    fn empty_area() {
        let r = compute_nav_layout(Region::EMPTY, all()).unwrap();
        assert_eq!(r, NavRegions::default());
    }
}
