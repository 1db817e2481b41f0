//! GlobalNavAdapter: reconciliation events onto an imperative GlobalNav.
//!
//! The host's reconciler creates children, appends / inserts / removes them,
//! commits prop updates and finally mounts the GlobalNav. The adapter keeps
//! one explicit state record and turns each event into toolkit calls:
//!
//! | event            | unmounted                  | mounted                         |
//! |------------------|----------------------------|---------------------------------|
//! | `append_child`   | store                      | store, `add_x`, mount child     |
//! | `remove_child`   | clear slot                 | clear slot, unmount child       |
//! | `add_slot`       | buffer (latest wins)       | `add_slot`                      |
//! | `mount`          | attach + mount children, show / hide side nav, flush slot | no-op |

use tracing::{debug, warn};

use super::error::AdapterError;
use super::handle::GlobalNavHandle;
use super::node::{AdapterNode, ChildKey, ElementKind, NavChild, NavSlot};
use super::props::{PropValue, Props, CHILDREN, SIDE_NAV_OPEN};

type Node<H> = AdapterNode<<H as GlobalNavHandle>::Partial>;

/// Adapter state: the three single-occupant children, a buffered slot, and
/// whether the GlobalNav has mounted.
pub struct GlobalNavState<H: GlobalNavHandle> {
    pub side_nav: Option<Node<H>>,
    pub top_nav: Option<Node<H>>,
    pub sub_nav: Option<Node<H>>,
    pub slot: Option<H::Slot>,
    pub mounted: bool,
}

impl<H: GlobalNavHandle> GlobalNavState<H> {
    fn empty() -> Self {
        Self {
            side_nav: None,
            top_nav: None,
            sub_nav: None,
            slot: None,
            mounted: false,
        }
    }

    pub fn child(&self, slot: NavSlot) -> Option<&Node<H>> {
        match slot {
            NavSlot::SideNav => self.side_nav.as_ref(),
            NavSlot::TopNav => self.top_nav.as_ref(),
            NavSlot::SubNav => self.sub_nav.as_ref(),
        }
    }

    fn child_mut(&mut self, slot: NavSlot) -> &mut Option<Node<H>> {
        match slot {
            NavSlot::SideNav => &mut self.side_nav,
            NavSlot::TopNav => &mut self.top_nav,
            NavSlot::SubNav => &mut self.sub_nav,
        }
    }
}

/// Bridges declarative child reconciliation onto a [`GlobalNavHandle`].
pub struct GlobalNavAdapter<H: GlobalNavHandle> {
    handle: H,
    state: GlobalNavState<H>,
    side_nav_open: bool,
    next_child_id: u64,
}

impl<H: GlobalNavHandle> GlobalNavAdapter<H> {
    /// Wrap `handle`. `side_nav_open` is the initial visibility applied at mount.
    pub fn new(handle: H, side_nav_open: bool) -> Self {
        Self {
            handle,
            state: GlobalNavState::empty(),
            side_nav_open,
            next_child_id: 0,
        }
    }

    pub fn state(&self) -> &GlobalNavState<H> {
        &self.state
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    pub fn is_mounted(&self) -> bool {
        self.state.mounted
    }

    /// The latest side-nav visibility prop.
    pub fn side_nav_open(&self) -> bool {
        self.side_nav_open
    }

    /// Create a child for `kind` backed by a fresh toolkit partial.
    pub fn create_element(
        &mut self,
        kind: ElementKind,
        props: Props,
    ) -> Result<NavChild<H::Partial>, AdapterError> {
        let slot = kind
            .nav_slot()
            .ok_or_else(|| AdapterError::UnsupportedKind(kind.name().to_owned()))?;
        let partial = self.handle.create_partial(slot);
        self.next_child_id += 1;
        debug!(%slot, ?partial, "created child");
        Ok(NavChild::new(slot, AdapterNode::new(self.next_child_id, partial, props)))
    }

    /// Store `child` in its slot; attach and mount it right away if the
    /// GlobalNav is mounted. An occupied slot is an error and the rejected
    /// child's partial is discarded.
    pub fn append_child(&mut self, child: NavChild<H::Partial>) -> Result<ChildKey, AdapterError> {
        let slot = child.slot();
        if self.state.child(slot).is_some() {
            self.handle.discard_partial(child.node().partial());
            return Err(AdapterError::DuplicateSingleton(slot));
        }

        let mut node = child.into_node();
        let key = ChildKey { slot, id: node.id() };
        if self.state.mounted {
            attach(&mut self.handle, slot, node.partial());
            node.mount(&mut self.handle);
        }
        *self.state.child_mut(slot) = Some(node);
        Ok(key)
    }

    /// Children have fixed places, so insertion order is irrelevant.
    pub fn insert_before(
        &mut self,
        child: NavChild<H::Partial>,
        _before: ChildKey,
    ) -> Result<ChildKey, AdapterError> {
        self.append_child(child)
    }

    /// Clear the child's slot, unmount and discard it. Removing a child that
    /// is no longer in its slot does nothing and returns `false`.
    pub fn remove_child(&mut self, key: ChildKey) -> bool {
        let slot = self.state.child_mut(key.slot);
        if slot.as_ref().map(|node| node.id()) != Some(key.id) {
            warn!(slot = %key.slot, "remove of a child that is not attached ignored");
            return false;
        }
        let Some(mut node) = slot.take() else {
            return false;
        };
        node.unmount(&mut self.handle);
        self.handle.discard_partial(node.partial());
        true
    }

    /// Forward slot content, or buffer it until mount.
    pub fn add_slot(&mut self, content: H::Slot) {
        if self.state.mounted {
            self.handle.add_slot(content);
            return;
        }
        if self.state.slot.replace(content).is_some() {
            debug!("buffered slot content replaced");
        } else {
            debug!("slot content buffered until mount");
        }
    }

    /// Attach and mount every stored child, apply side-nav visibility and
    /// flush the buffered slot. Only the first call has an effect.
    pub fn mount(&mut self) {
        if self.state.mounted {
            warn!("GlobalNav already mounted");
            return;
        }
        for slot in NavSlot::ALL {
            if let Some(node) = self.state.child_mut(slot) {
                attach(&mut self.handle, slot, node.partial());
                node.mount(&mut self.handle);
            }
        }
        apply_side_nav(&mut self.handle, self.side_nav_open);
        if let Some(content) = self.state.slot.take() {
            self.handle.add_slot(content);
        }
        self.state.mounted = true;
        debug!(side_nav_open = self.side_nav_open, "GlobalNav mounted");
    }

    /// Apply changed props. Unknown keys are logged and ignored.
    pub fn commit_update(&mut self, payload: &[(String, PropValue)]) {
        for (key, value) in payload {
            match key.as_str() {
                SIDE_NAV_OPEN => {
                    self.side_nav_open = value.is_truthy();
                    apply_side_nav(&mut self.handle, self.side_nav_open);
                }
                CHILDREN => {}
                other => warn!(key = other, %value, "unknown GlobalNav prop ignored"),
            }
        }
    }

    /// Unmount and discard every child, returning the toolkit handle.
    pub fn teardown(mut self) -> H {
        for slot in NavSlot::ALL {
            if let Some(mut node) = self.state.child_mut(slot).take() {
                node.unmount(&mut self.handle);
                self.handle.discard_partial(node.partial());
            }
        }
        self.handle
    }
}

fn attach<H: GlobalNavHandle>(handle: &mut H, slot: NavSlot, partial: H::Partial) {
    match slot {
        NavSlot::SideNav => handle.add_side_nav(partial),
        NavSlot::TopNav => handle.add_top_nav(partial),
        NavSlot::SubNav => handle.add_sub_nav(partial),
    }
}

fn apply_side_nav<H: GlobalNavHandle>(handle: &mut H, open: bool) {
    if open {
        handle.show_side_nav();
    } else {
        handle.hide_side_nav();
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::props::update_payload;
    use crate::testing::recording::{NavCall, RecordingNav};
    use pretty_assertions::assert_eq;

    fn adapter(open: bool) -> GlobalNavAdapter<RecordingNav> {
        GlobalNavAdapter::new(RecordingNav::new(), open)
    }

    fn child(a: &mut GlobalNavAdapter<RecordingNav>, kind: ElementKind) -> NavChild<u32> {
        a.create_element(kind, Props::new()).expect("element kind")
    }

    // ── create_element ───────────────────────────────────────────────

    #[test]
    fn create_element_for_each_slot_kind() {
        let mut a = adapter(true);
        for (kind, slot) in [
            (ElementKind::TopNav, NavSlot::TopNav),
            (ElementKind::SubNav, NavSlot::SubNav),
            (ElementKind::SideNav, NavSlot::SideNav),
        ] {
            assert_eq!(child(&mut a, kind).slot(), slot);
        }
        assert_eq!(
            a.handle().calls(),
            &[
                NavCall::CreatePartial(NavSlot::TopNav, 1),
                NavCall::CreatePartial(NavSlot::SubNav, 2),
                NavCall::CreatePartial(NavSlot::SideNav, 3),
            ]
        );
    }

    #[test]
    fn create_element_rejects_non_element_kinds() {
        let mut a = adapter(true);
        let err = a.create_element(ElementKind::FilterableSideNav, Props::new()).unwrap_err();
        assert_eq!(err, AdapterError::UnsupportedKind("FilterableSideNav".into()));
        assert!(a.handle().calls().is_empty());
    }

    // ── append / insert ──────────────────────────────────────────────

    #[test]
    fn append_before_mount_only_stores() {
        let mut a = adapter(true);
        let top = child(&mut a, ElementKind::TopNav);
        a.append_child(top).expect("first TopNav");
        assert!(a.state().top_nav.is_some());
        assert_eq!(a.handle().calls(), &[NavCall::CreatePartial(NavSlot::TopNav, 1)]);
    }

    #[test]
    fn append_after_mount_attaches_and_mounts() {
        let mut a = adapter(false);
        a.mount();
        a.handle_mut().clear();
        let sub = child(&mut a, ElementKind::SubNav);
        a.append_child(sub).expect("first SubNav");
        assert_eq!(
            a.handle().calls(),
            &[
                NavCall::CreatePartial(NavSlot::SubNav, 1),
                NavCall::AddSubNav(1),
                NavCall::Mount(1),
            ]
        );
        assert!(a.state().sub_nav.as_ref().is_some_and(|n| n.is_mounted()));
    }

    #[test]
    fn second_singleton_fails_mounted_or_not() {
        for mounted in [false, true] {
            let mut a = adapter(true);
            if mounted {
                a.mount();
            }
            for kind in [ElementKind::SideNav, ElementKind::TopNav, ElementKind::SubNav] {
                let first = child(&mut a, kind);
                a.append_child(first).expect("first child");
                let second = child(&mut a, kind);
                let slot = second.slot();
                assert_eq!(a.append_child(second), Err(AdapterError::DuplicateSingleton(slot)));
            }
        }
    }

    #[test]
    fn duplicate_message_names_slot() {
        let mut a = adapter(true);
        let first = child(&mut a, ElementKind::SideNav);
        a.append_child(first).expect("first SideNav");
        let second = child(&mut a, ElementKind::SideNav);
        let err = a.append_child(second).unwrap_err();
        assert_eq!(err.to_string(), "only one SideNav is allowed");
        assert!(a.handle().calls().contains(&NavCall::Discard(2)));
    }

    #[test]
    fn insert_before_behaves_like_append() {
        let mut a = adapter(true);
        let top = child(&mut a, ElementKind::TopNav);
        let top_key = a.append_child(top).expect("TopNav");
        let side = child(&mut a, ElementKind::SideNav);
        let key = a.insert_before(side, top_key).expect("SideNav");
        assert_eq!(key.slot(), NavSlot::SideNav);
        let again = child(&mut a, ElementKind::SideNav);
        assert!(a.insert_before(again, top_key).is_err());
    }

    // ── mount ────────────────────────────────────────────────────────

    #[test]
    fn mount_attaches_children_then_visibility_then_slot() {
        let mut a = adapter(true);
        let top = child(&mut a, ElementKind::TopNav);
        let side = child(&mut a, ElementKind::SideNav);
        a.append_child(top).expect("TopNav");
        a.append_child(side).expect("SideNav");
        a.add_slot("content".to_owned());
        a.handle_mut().clear();

        a.mount();
        assert_eq!(
            a.handle().calls(),
            &[
                NavCall::AddSideNav(2),
                NavCall::Mount(2),
                NavCall::AddTopNav(1),
                NavCall::Mount(1),
                NavCall::ShowSideNav,
                NavCall::AddSlot("content".into()),
            ]
        );
        assert!(a.state().slot.is_none());
        assert!(a.is_mounted());
    }

    #[test]
    fn mount_open_shows_once_closed_hides_once() {
        let mut open = adapter(true);
        open.mount();
        assert_eq!(open.handle().count(&NavCall::ShowSideNav), 1);
        assert_eq!(open.handle().count(&NavCall::HideSideNav), 0);

        let mut closed = adapter(false);
        closed.mount();
        assert_eq!(closed.handle().count(&NavCall::ShowSideNav), 0);
        assert_eq!(closed.handle().count(&NavCall::HideSideNav), 1);
    }

    #[test]
    fn mount_fires_once() {
        let mut a = adapter(true);
        a.mount();
        let calls = a.handle().calls().len();
        a.mount();
        assert_eq!(a.handle().calls().len(), calls);
    }

    #[test]
    fn buffered_slot_keeps_latest() {
        let mut a = adapter(false);
        a.add_slot("first".to_owned());
        a.add_slot("second".to_owned());
        a.mount();
        assert_eq!(a.handle().count(&NavCall::AddSlot("first".into())), 0);
        assert_eq!(a.handle().count(&NavCall::AddSlot("second".into())), 1);
    }

    #[test]
    fn slot_after_mount_forwards_immediately() {
        let mut a = adapter(false);
        a.mount();
        a.add_slot("late".to_owned());
        assert_eq!(a.handle().calls().last(), Some(&NavCall::AddSlot("late".into())));
    }

    // ── remove ───────────────────────────────────────────────────────

    #[test]
    fn remove_frees_slot_for_same_kind() {
        let mut a = adapter(true);
        a.mount();
        let side = child(&mut a, ElementKind::SideNav);
        let key = a.append_child(side).expect("SideNav");
        assert!(a.remove_child(key));
        assert!(a.state().side_nav.is_none());
        assert!(a.handle().calls().ends_with(&[NavCall::Unmount(1), NavCall::Discard(1)]));

        let again = child(&mut a, ElementKind::SideNav);
        assert!(a.append_child(again).is_ok());
    }

    #[test]
    fn remove_before_mount_does_not_unmount() {
        let mut a = adapter(true);
        let top = child(&mut a, ElementKind::TopNav);
        let key = a.append_child(top).expect("TopNav");
        assert!(a.remove_child(key));
        assert_eq!(a.handle().count(&NavCall::Unmount(1)), 0);
    }

    #[test]
    fn stale_and_double_remove_are_no_ops() {
        let mut a = adapter(true);
        a.mount();
        let first = child(&mut a, ElementKind::TopNav);
        let first_key = a.append_child(first).expect("TopNav");
        assert!(a.remove_child(first_key));
        assert!(!a.remove_child(first_key));

        let second = child(&mut a, ElementKind::TopNav);
        a.append_child(second).expect("TopNav");
        // The old key must not evict the new occupant.
        assert!(!a.remove_child(first_key));
        assert!(a.state().top_nav.is_some());
        assert_eq!(a.handle().count(&NavCall::Unmount(1)), 1);
    }

    // ── commit_update ────────────────────────────────────────────────

    #[test]
    fn side_nav_open_update_toggles() {
        let mut a = adapter(true);
        a.mount();
        a.handle_mut().clear();
        a.commit_update(&update_payload([(SIDE_NAV_OPEN, false)]));
        a.commit_update(&update_payload([(SIDE_NAV_OPEN, true)]));
        assert_eq!(a.handle().calls(), &[NavCall::HideSideNav, NavCall::ShowSideNav]);
        assert!(a.side_nav_open());
    }

    #[test]
    fn children_and_unknown_keys_change_nothing() {
        let mut a = adapter(true);
        a.mount();
        a.handle_mut().clear();
        a.commit_update(&update_payload([
            (CHILDREN, PropValue::Null),
            ("colour", PropValue::from("red")),
        ]));
        assert!(a.handle().calls().is_empty());
        assert!(a.side_nav_open());
        assert!(a.is_mounted());
    }

    // ── teardown ─────────────────────────────────────────────────────

    #[test]
    fn teardown_unmounts_everything() {
        let mut a = adapter(true);
        let top = child(&mut a, ElementKind::TopNav);
        let sub = child(&mut a, ElementKind::SubNav);
        a.append_child(top).expect("TopNav");
        a.append_child(sub).expect("SubNav");
        a.mount();
        let nav = a.teardown();
        assert_eq!(nav.count(&NavCall::Unmount(1)), 1);
        assert_eq!(nav.count(&NavCall::Unmount(2)), 1);
        assert_eq!(nav.count(&NavCall::Discard(1)), 1);
        assert_eq!(nav.count(&NavCall::Discard(2)), 1);
    }
}
