//! Rendering pipeline: strips, borders, frame diffing, terminal driver.

pub mod border;
pub mod driver;
pub mod frame;
pub mod strip;

pub use border::{border_spacing, draw_border};
pub use driver::Driver;
pub use frame::{CellUpdate, Frame};
pub use strip::{CellStyle, Strip, StyledCell};
