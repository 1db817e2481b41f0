//! The imperative toolkit contract the adapter drives.

use std::fmt;

use super::node::NavSlot;
use super::props::Props;

/// An imperative GlobalNav widget object.
///
/// The adapter owns its handle exclusively and calls these methods in causal
/// order: a partial is created before it is attached, attached before it is
/// mounted, and unmounted before it is discarded.
pub trait GlobalNavHandle {
    /// Identifies one child partial (side nav, top nav or sub nav).
    type Partial: Copy + Eq + fmt::Debug;
    /// Arbitrary content placed in the GlobalNav's slot.
    type Slot;

    /// Create a detached partial for `slot`.
    fn create_partial(&mut self, slot: NavSlot) -> Self::Partial;

    fn add_side_nav(&mut self, partial: Self::Partial);
    fn add_top_nav(&mut self, partial: Self::Partial);
    fn add_sub_nav(&mut self, partial: Self::Partial);
    fn add_slot(&mut self, content: Self::Slot);

    fn show_side_nav(&mut self);
    fn hide_side_nav(&mut self);

    /// Mount an attached partial, applying its props.
    fn mount_partial(&mut self, partial: Self::Partial, props: &Props);
    fn unmount_partial(&mut self, partial: Self::Partial);

    /// Release a partial that is no longer referenced.
    fn discard_partial(&mut self, _partial: Self::Partial) {}
}
