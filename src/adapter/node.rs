//! Child elements of the GlobalNav adapter.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::error::AdapterError;
use super::handle::GlobalNavHandle;
use super::props::Props;

// ---------------------------------------------------------------------------
// NavSlot / ElementKind
// ---------------------------------------------------------------------------

/// A single-occupant slot of the GlobalNav.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavSlot {
    SideNav,
    TopNav,
    SubNav,
}

impl NavSlot {
    pub const ALL: [NavSlot; 3] = [NavSlot::SideNav, NavSlot::TopNav, NavSlot::SubNav];

    pub fn name(self) -> &'static str {
        match self {
            NavSlot::SideNav => "SideNav",
            NavSlot::TopNav => "TopNav",
            NavSlot::SubNav => "SubNav",
        }
    }
}

impl fmt::Display for NavSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every child kind a host may declare under a GlobalNav.
///
/// Only the three slot kinds can be created as elements; `Slot` content goes
/// through `add_slot` and `FilterableSideNav` is not an element at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    SideNav,
    TopNav,
    SubNav,
    Slot,
    FilterableSideNav,
}

impl ElementKind {
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::SideNav => "SideNav",
            ElementKind::TopNav => "TopNav",
            ElementKind::SubNav => "SubNav",
            ElementKind::Slot => "Slot",
            ElementKind::FilterableSideNav => "FilterableSideNav",
        }
    }

    /// The slot this kind occupies, if it is an element kind.
    pub fn nav_slot(self) -> Option<NavSlot> {
        match self {
            ElementKind::SideNav => Some(NavSlot::SideNav),
            ElementKind::TopNav => Some(NavSlot::TopNav),
            ElementKind::SubNav => Some(NavSlot::SubNav),
            ElementKind::Slot | ElementKind::FilterableSideNav => None,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SideNav" => Ok(ElementKind::SideNav),
            "TopNav" => Ok(ElementKind::TopNav),
            "SubNav" => Ok(ElementKind::SubNav),
            "Slot" => Ok(ElementKind::Slot),
            "FilterableSideNav" => Ok(ElementKind::FilterableSideNav),
            other => Err(AdapterError::UnsupportedKind(other.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// AdapterNode
// ---------------------------------------------------------------------------

/// One toolkit partial plus the props to apply when it mounts.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterNode<P> {
    id: u64,
    partial: P,
    props: Props,
    mounted: bool,
}

impl<P: Copy + Eq + fmt::Debug> AdapterNode<P> {
    pub(crate) fn new(id: u64, partial: P, props: Props) -> Self {
        Self {
            id,
            partial,
            props,
            mounted: false,
        }
    }

    pub fn partial(&self) -> P {
        self.partial
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    /// Mount once; later calls are no-ops.
    pub(crate) fn mount<H>(&mut self, handle: &mut H)
    where
        H: GlobalNavHandle<Partial = P>,
    {
        if self.mounted {
            debug!(partial = ?self.partial, "partial already mounted");
            return;
        }
        handle.mount_partial(self.partial, &self.props);
        self.mounted = true;
    }

    /// Unmount if mounted; otherwise a no-op.
    pub(crate) fn unmount<H>(&mut self, handle: &mut H)
    where
        H: GlobalNavHandle<Partial = P>,
    {
        if !self.mounted {
            debug!(partial = ?self.partial, "partial not mounted");
            return;
        }
        handle.unmount_partial(self.partial);
        self.mounted = false;
    }
}

// ---------------------------------------------------------------------------
// NavChild
// ---------------------------------------------------------------------------

/// A created GlobalNav child, tagged by the slot it occupies.
#[derive(Debug, Clone, PartialEq)]
pub enum NavChild<P> {
    SideNav(AdapterNode<P>),
    TopNav(AdapterNode<P>),
    SubNav(AdapterNode<P>),
}

impl<P> NavChild<P> {
    pub(crate) fn new(slot: NavSlot, node: AdapterNode<P>) -> Self {
        match slot {
            NavSlot::SideNav => NavChild::SideNav(node),
            NavSlot::TopNav => NavChild::TopNav(node),
            NavSlot::SubNav => NavChild::SubNav(node),
        }
    }

    pub fn slot(&self) -> NavSlot {
        match self {
            NavChild::SideNav(_) => NavSlot::SideNav,
            NavChild::TopNav(_) => NavSlot::TopNav,
            NavChild::SubNav(_) => NavSlot::SubNav,
        }
    }

    pub fn node(&self) -> &AdapterNode<P> {
        match self {
            NavChild::SideNav(node) | NavChild::TopNav(node) | NavChild::SubNav(node) => node,
        }
    }

    pub(crate) fn into_node(self) -> AdapterNode<P> {
        match self {
            NavChild::SideNav(node) | NavChild::TopNav(node) | NavChild::SubNav(node) => node,
        }
    }
}

/// Refers to a child appended to an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildKey {
    pub(crate) slot: NavSlot,
    pub(crate) id: u64,
}

impl ChildKey {
    pub fn slot(&self) -> NavSlot {
        self.slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_by_name() {
        assert_eq!("TopNav".parse::<ElementKind>(), Ok(ElementKind::TopNav));
        assert_eq!("Slot".parse::<ElementKind>(), Ok(ElementKind::Slot));
        assert_eq!(
            "Banner".parse::<ElementKind>(),
            Err(AdapterError::UnsupportedKind("Banner".into()))
        );
    }

    #[test]
    fn only_slot_kinds_map_to_slots() {
        assert_eq!(ElementKind::SubNav.nav_slot(), Some(NavSlot::SubNav));
        assert_eq!(ElementKind::Slot.nav_slot(), None);
        assert_eq!(ElementKind::FilterableSideNav.nav_slot(), None);
    }

    #[test]
    fn child_reports_its_slot() {
        let child = NavChild::new(NavSlot::TopNav, AdapterNode::new(1, 7u32, Props::new()));
        assert_eq!(child.slot(), NavSlot::TopNav);
        assert_eq!(child.node().partial(), 7);
        assert!(!child.node().is_mounted());
    }
}
