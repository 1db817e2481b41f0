//! RecordingNav: a [`GlobalNavHandle`] that records every call.
//!
//! Partials are plain `u32`s numbered from 1 in creation order, and slot
//! content is a `String`, which keeps adapter tests free of any rendering.

use std::collections::HashMap;

use crate::adapter::{GlobalNavHandle, NavSlot, Props};

/// One imperative call made on the toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCall {
    CreatePartial(NavSlot, u32),
    AddSideNav(u32),
    AddTopNav(u32),
    AddSubNav(u32),
    AddSlot(String),
    ShowSideNav,
    HideSideNav,
    Mount(u32),
    Unmount(u32),
    Discard(u32),
}

/// Toolkit double that records calls in order.
#[derive(Debug, Default)]
pub struct RecordingNav {
    calls: Vec<NavCall>,
    mounted_props: HashMap<u32, Props>,
    next_partial: u32,
}

impl RecordingNav {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far, oldest first.
    pub fn calls(&self) -> &[NavCall] {
        &self.calls
    }

    /// How many times `call` was made.
    pub fn count(&self, call: &NavCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    /// Forget the recorded calls (partial numbering continues).
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Props the partial was last mounted with.
    pub fn mounted_props(&self, partial: u32) -> Option<&Props> {
        self.mounted_props.get(&partial)
    }
}

impl GlobalNavHandle for RecordingNav {
    type Partial = u32;
    type Slot = String;

    fn create_partial(&mut self, slot: NavSlot) -> u32 {
        self.next_partial += 1;
        self.calls.push(NavCall::CreatePartial(slot, self.next_partial));
        self.next_partial
    }

    fn add_side_nav(&mut self, partial: u32) {
        self.calls.push(NavCall::AddSideNav(partial));
    }

    fn add_top_nav(&mut self, partial: u32) {
        self.calls.push(NavCall::AddTopNav(partial));
    }

    fn add_sub_nav(&mut self, partial: u32) {
        self.calls.push(NavCall::AddSubNav(partial));
    }

    fn add_slot(&mut self, content: String) {
        self.calls.push(NavCall::AddSlot(content));
    }

    fn show_side_nav(&mut self) {
        self.calls.push(NavCall::ShowSideNav);
    }

    fn hide_side_nav(&mut self) {
        self.calls.push(NavCall::HideSideNav);
    }

    fn mount_partial(&mut self, partial: u32, props: &Props) {
        self.mounted_props.insert(partial, props.clone());
        self.calls.push(NavCall::Mount(partial));
    }

    fn unmount_partial(&mut self, partial: u32) {
        self.calls.push(NavCall::Unmount(partial));
    }

    fn discard_partial(&mut self, partial: u32) {
        self.mounted_props.remove(&partial);
        self.calls.push(NavCall::Discard(partial));
    }
}
