//! # hig-tui
//!
//! Design-system components for terminal applications.
//!
//! Presentational widgets render themselves into styled cell strips from
//! typed props and a [`Theme`](style::theme::Theme). The GlobalNav adapter
//! turns declarative child reconciliation (create, append, remove, update,
//! mount) into calls on an imperative GlobalNav toolkit.
//!
//! ## Core Systems
//!
//! - **[`components`]**: ContentPresenter (account / project switcher), TextArea, the input primitive
//! - **[`adapter`]**: GlobalNavAdapter state machine over a [`GlobalNavHandle`](adapter::GlobalNavHandle)
//! - **[`vanilla`]**: the imperative GlobalNav widget, laid out with taffy
//! - **[`style`]**: theme tokens and stylesheet functions
//! - **[`widget`]**: the Widget trait
//! - **[`event`]**: input events, activation handlers, key bindings
//! - **[`render`]**: strips, frame diffing and the crossterm driver
//! - **[`playground`]**: demo app assembling everything with mock data
//! - **[`testing`]**: Pilot, snapshot helpers, a recording toolkit double
//! - **[`geometry`]**: Region and Spacing primitives

// Foundation
pub mod geometry;
pub mod style;

// Widget system
pub mod widget;
pub mod components;

// Events
pub mod event;

// Rendering
pub mod render;

// GlobalNav
pub mod adapter;
pub mod vanilla;

// Application
pub mod playground;
pub mod testing;
