//! Frame: a screen-sized grid of cells with frame-to-frame diffing.
//!
//! Each render pass fills a fresh `Frame` from widget strips; `diff` against
//! the previous frame yields the minimal set of [`CellUpdate`]s for the driver.

use crate::geometry::Region;

use super::strip::{Strip, StyledCell};

/// A single cell that changed between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    pub x: u16,
    pub y: u16,
    pub cell: StyledCell,
}

/// A `width` x `height` grid of cells. `cells[y][x]` is column x, row y.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    cells: Vec<Vec<StyledCell>>,
    pub width: u16,
    pub height: u16,
}

impl Frame {
    /// A blank frame.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![vec![StyledCell::default(); width as usize]; height as usize],
            width,
            height,
        }
    }

    /// The whole frame as a region.
    pub fn area(&self) -> Region {
        Region::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Write strips into the grid, clipped to `clip` and the frame bounds.
    pub fn place(&mut self, strips: &[Strip], clip: Region) {
        let clip = clip.intersection(self.area());
        if clip.is_empty() {
            return;
        }
        for strip in strips {
            if strip.y < clip.y || strip.y >= clip.bottom() {
                continue;
            }
            let row = &mut self.cells[strip.y as usize];
            for (i, cell) in strip.cells.iter().enumerate() {
                let x = strip.x_offset + i as i32;
                if x >= clip.x && x < clip.right() {
                    row[x as usize] = cell.clone();
                }
            }
        }
    }

    /// The cell at (x, y), if in bounds.
    pub fn get(&self, x: u16, y: u16) -> Option<&StyledCell> {
        self.cells.get(y as usize)?.get(x as usize)
    }

    /// Cells that differ from `previous`. A size change repaints everything.
    pub fn diff(&self, previous: &Frame) -> Vec<CellUpdate> {
        let full = previous.width != self.width || previous.height != self.height;
        let mut updates = Vec::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let changed = full || previous.cells[y][x] != *cell;
                if changed {
                    updates.push(CellUpdate {
                        x: x as u16,
                        y: y as u16,
                        cell: cell.clone(),
                    });
                }
            }
        }
        updates
    }

    /// Plain text of the frame: rows right-trimmed and joined with `'\n'`.
    pub fn to_text(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                let line: String = row.iter().map(|c| c.ch).collect();
                line.trim_end().to_owned()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
