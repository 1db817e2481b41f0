//! Widget system.

pub mod traits;

pub use traits::Widget;
