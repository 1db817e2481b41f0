//! Terminal rendition of the imperative GlobalNav toolkit.

pub mod global_nav;
pub mod layout;

pub use global_nav::{GlobalNav, Partial, PartialId};
pub use layout::{compute_nav_layout, LayoutError, NavParts, NavRegions, SIDE_NAV_WIDTH};
