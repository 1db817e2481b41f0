//! The GlobalNav adapter: a reconciliation state machine over an imperative
//! toolkit object.

pub mod error;
pub mod global_nav;
pub mod handle;
pub mod node;
pub mod props;

pub use error::AdapterError;
pub use global_nav::{GlobalNavAdapter, GlobalNavState};
pub use handle::GlobalNavHandle;
pub use node::{AdapterNode, ChildKey, ElementKind, NavChild, NavSlot};
pub use props::{update_payload, PropValue, Props, UpdatePayload, CHILDREN, SIDE_NAV_OPEN};
