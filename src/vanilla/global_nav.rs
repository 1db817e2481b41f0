//! The imperative GlobalNav widget.
//!
//! Partials (top nav, sub nav, side nav) live in a slot-map arena and are
//! addressed by [`PartialId`]. A partial renders only once it is attached
//! through `add_*` and mounted. The slot holds arbitrary content drawn in the
//! content region.

use std::any::Any;
use std::fmt;

use slotmap::{new_key_type, SlotMap};
use tracing::warn;

use crate::adapter::{GlobalNavHandle, NavSlot, Props};
use crate::event::input::InputEvent;
use crate::geometry::Region;
use crate::render::strip::{CellStyle, Strip};
use crate::style::styles::{Styles, TextAlign};
use crate::style::theme::Theme;
use crate::widget::traits::Widget;

use super::layout::{compute_nav_layout, LayoutError, NavParts, NavRegions};

/// Top nav: product name on the left.
pub const LOGO_TEXT: &str = "logoText";
/// Top nav: right-aligned caption (e.g. the active account / project).
pub const CAPTION: &str = "caption";
/// Sub nav: name of the current module.
pub const MODULE_NAME: &str = "moduleName";
/// Side nav: small label above the header.
pub const SUPER_HEADER_LABEL: &str = "superHeaderLabel";
/// Side nav: header label.
pub const HEADER_LABEL: &str = "headerLabel";
/// Side nav: list of link titles.
pub const LINKS: &str = "links";

new_key_type! {
    /// Identifies a partial in a [`GlobalNav`].
    pub struct PartialId;
}

/// A child partial of the GlobalNav.
#[derive(Debug, Clone, PartialEq)]
pub struct Partial {
    slot: NavSlot,
    props: Props,
    mounted: bool,
}

impl Partial {
    pub fn slot(&self) -> NavSlot {
        self.slot
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

/// Imperative GlobalNav: a top bar, a sub bar, a collapsible side nav and a
/// content slot.
pub struct GlobalNav {
    partials: SlotMap<PartialId, Partial>,
    side_nav: Option<PartialId>,
    top_nav: Option<PartialId>,
    sub_nav: Option<PartialId>,
    side_nav_visible: bool,
    slot: Option<Box<dyn Widget>>,
}

impl GlobalNav {
    pub fn new() -> Self {
        Self {
            partials: SlotMap::with_key(),
            side_nav: None,
            top_nav: None,
            sub_nav: None,
            side_nav_visible: false,
            slot: None,
        }
    }

    pub fn partial(&self, id: PartialId) -> Option<&Partial> {
        self.partials.get(id)
    }

    /// Number of live partials, attached or not.
    pub fn partial_count(&self) -> usize {
        self.partials.len()
    }

    pub fn is_side_nav_visible(&self) -> bool {
        self.side_nav_visible
    }

    /// The attached partial of `slot`.
    pub fn attached(&self, slot: NavSlot) -> Option<PartialId> {
        match slot {
            NavSlot::SideNav => self.side_nav,
            NavSlot::TopNav => self.top_nav,
            NavSlot::SubNav => self.sub_nav,
        }
    }

    pub fn slot_content(&self) -> Option<&dyn Widget> {
        self.slot.as_deref()
    }

    pub fn slot_content_mut(&mut self) -> Option<&mut (dyn Widget + 'static)> {
        self.slot.as_deref_mut()
    }

    /// The attached partial of `slot` if it is mounted.
    fn shown(&self, slot: NavSlot) -> Option<&Partial> {
        self.attached(slot)
            .and_then(|id| self.partials.get(id))
            .filter(|p| p.mounted)
    }

    /// Regions of the visible parts inside `area`.
    pub fn layout(&self, area: Region) -> Result<NavRegions, LayoutError> {
        compute_nav_layout(
            area,
            NavParts {
                top_nav: self.shown(NavSlot::TopNav).is_some(),
                sub_nav: self.shown(NavSlot::SubNav).is_some(),
                side_nav: self.side_nav_visible && self.shown(NavSlot::SideNav).is_some(),
            },
        )
    }

    fn attach(&mut self, slot: NavSlot, id: PartialId) {
        if !self.partials.contains_key(id) {
            warn!(%slot, ?id, "attach of unknown partial ignored");
            return;
        }
        let target = match slot {
            NavSlot::SideNav => &mut self.side_nav,
            NavSlot::TopNav => &mut self.top_nav,
            NavSlot::SubNav => &mut self.sub_nav,
        };
        match target.replace(id) {
            Some(previous) if previous != id => {
                warn!(%slot, ?previous, "attached partial replaced; previous one unmounted");
                if let Some(p) = self.partials.get_mut(previous) {
                    p.mounted = false;
                }
            }
            _ => {}
        }
    }

    // -- rendering ----------------------------------------------------------

    fn render_bar(row: Region, left: &str, right: Option<&str>, styles: &Styles) -> Strip {
        let style = CellStyle::from_styles(styles);
        let mut strip = Strip::new(row.y, row.x);
        strip.push(' ', style.clone());
        let right = right.unwrap_or_default();
        let right_width = right.chars().count() as i32 + 1;
        strip.push_aligned(left, row.width - 1 - right_width, TextAlign::Left, style.clone());
        strip.push_aligned(right, right_width, TextAlign::Left, style.clone());
        strip.fill(row.width, style);
        strip
    }

    fn render_side_nav(area: Region, partial: &Partial, theme: &Theme) -> Vec<Strip> {
        let base = Styles::new()
            .with_background(theme.surface_raised.clone())
            .with_color(theme.text.clone());
        let muted = base.merge(&Styles::new().with_color(theme.muted.clone()));
        let header = base.merge(&Styles::new().with_bold());
        let link = base.merge(&Styles::new().with_color(theme.accent.clone()));

        let mut lines: Vec<(String, &Styles)> = Vec::new();
        if let Some(label) = partial.props.text(SUPER_HEADER_LABEL) {
            lines.push((label.to_owned(), &muted));
        }
        if let Some(label) = partial.props.text(HEADER_LABEL) {
            lines.push((label.to_owned(), &header));
        }
        if !lines.is_empty() {
            lines.push((String::new(), &base));
        }
        for title in partial.props.text_list(LINKS) {
            lines.push((format!("› {title}"), &link));
        }

        (0..area.height)
            .map(|dy| {
                let row = area.row(dy);
                let (text, styles) = lines
                    .get(dy as usize)
                    .map_or(("", &base), |(text, styles)| (text.as_str(), *styles));
                let mut strip = Strip::new(row.y, row.x);
                strip.push(' ', CellStyle::from_styles(&base));
                strip.push_aligned(text, row.width - 2, TextAlign::Left, CellStyle::from_styles(styles));
                strip.fill(row.width - 1, CellStyle::from_styles(&base));
                strip.push('│', CellStyle::from_styles(&muted));
                strip
            })
            .collect()
    }
}

impl Default for GlobalNav {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GlobalNav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalNav")
            .field("partials", &self.partials.len())
            .field("side_nav", &self.side_nav)
            .field("top_nav", &self.top_nav)
            .field("sub_nav", &self.sub_nav)
            .field("side_nav_visible", &self.side_nav_visible)
            .field("slot", &self.slot.as_ref().map(|w| w.widget_type().to_owned()))
            .finish()
    }
}

impl GlobalNavHandle for GlobalNav {
    type Partial = PartialId;
    type Slot = Box<dyn Widget>;

    fn create_partial(&mut self, slot: NavSlot) -> PartialId {
        self.partials.insert(Partial {
            slot,
            props: Props::new(),
            mounted: false,
        })
    }

    fn add_side_nav(&mut self, partial: PartialId) {
        self.attach(NavSlot::SideNav, partial);
    }

    fn add_top_nav(&mut self, partial: PartialId) {
        self.attach(NavSlot::TopNav, partial);
    }

    fn add_sub_nav(&mut self, partial: PartialId) {
        self.attach(NavSlot::SubNav, partial);
    }

    fn add_slot(&mut self, content: Box<dyn Widget>) {
        self.slot = Some(content);
    }

    fn show_side_nav(&mut self) {
        self.side_nav_visible = true;
    }

    fn hide_side_nav(&mut self) {
        self.side_nav_visible = false;
    }

    fn mount_partial(&mut self, partial: PartialId, props: &Props) {
        match self.partials.get_mut(partial) {
            Some(p) => {
                p.props = props.clone();
                p.mounted = true;
            }
            None => warn!(?partial, "mount of unknown partial ignored"),
        }
    }

    fn unmount_partial(&mut self, partial: PartialId) {
        if let Some(p) = self.partials.get_mut(partial) {
            p.mounted = false;
        }
    }

    fn discard_partial(&mut self, partial: PartialId) {
        for attached in [&mut self.side_nav, &mut self.top_nav, &mut self.sub_nav] {
            if *attached == Some(partial) {
                *attached = None;
            }
        }
        self.partials.remove(partial);
    }
}

impl Widget for GlobalNav {
    fn widget_type(&self) -> &str {
        "GlobalNav"
    }

    fn render(&self, region: Region, theme: &Theme) -> Vec<Strip> {
        let regions = match self.layout(region) {
            Ok(regions) => regions,
            Err(err) => {
                warn!(%err, "GlobalNav layout failed");
                return Vec::new();
            }
        };
        let mut strips = Vec::new();

        if let (Some(row), Some(top)) = (regions.top_nav, self.shown(NavSlot::TopNav)) {
            let styles = Styles::new()
                .with_background(theme.accent.clone())
                .with_color(theme.surface.clone())
                .with_bold();
            strips.push(Self::render_bar(
                row,
                top.props.text(LOGO_TEXT).unwrap_or_default(),
                top.props.text(CAPTION),
                &styles,
            ));
        }
        if let (Some(row), Some(sub)) = (regions.sub_nav, self.shown(NavSlot::SubNav)) {
            let styles = Styles::new()
                .with_background(theme.surface_raised.clone())
                .with_color(theme.muted.clone());
            strips.push(Self::render_bar(
                row,
                sub.props.text(MODULE_NAME).unwrap_or_default(),
                None,
                &styles,
            ));
        }
        if let (Some(area), Some(side)) = (regions.side_nav, self.shown(NavSlot::SideNav)) {
            strips.extend(Self::render_side_nav(area, side, theme));
        }
        if let Some(content) = &self.slot {
            strips.extend(content.render(regions.content, theme));
        }
        strips
    }

    fn can_focus(&self) -> bool {
        self.slot.as_ref().is_some_and(|w| w.can_focus())
    }

    fn set_focused(&mut self, focused: bool) {
        if let Some(content) = self.slot.as_mut() {
            content.set_focused(focused);
        }
    }

    /// Input goes to the slot content, laid out as in the last render.
    fn handle_input(&mut self, event: &InputEvent, region: Region) -> bool {
        let content = match self.layout(region) {
            Ok(regions) => regions.content,
            Err(err) => {
                warn!(%err, "GlobalNav layout failed");
                return false;
            }
        };
        match self.slot.as_mut() {
            Some(widget) => widget.handle_input(event, content),
            None => false,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{ElementKind, GlobalNavAdapter};
    use crate::testing::snapshot::render_to_string;

    struct Fill(char);

    impl Widget for Fill {
        fn widget_type(&self) -> &str {
            "Fill"
        }

        fn render(&self, region: Region, _theme: &Theme) -> Vec<Strip> {
            (0..region.height)
                .map(|dy| {
                    let mut strip = Strip::new(region.y + dy, region.x);
                    strip.push_str(&self.0.to_string().repeat(region.width as usize), CellStyle::default());
                    strip
                })
                .collect()
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn mounted_nav(open: bool) -> GlobalNavAdapter<GlobalNav> {
        let mut adapter = GlobalNavAdapter::new(GlobalNav::new(), open);
        let top = adapter
            .create_element(ElementKind::TopNav, Props::new().with(LOGO_TEXT, "BIM 360"))
            .unwrap();
        let side = adapter
            .create_element(
                ElementKind::SideNav,
                Props::new().with(HEADER_LABEL, "Oakwood").with(LINKS, vec!["Docs"]),
            )
            .unwrap();
        adapter.append_child(top).unwrap();
        adapter.append_child(side).unwrap();
        adapter.add_slot(Box::new(Fill('.')));
        adapter.mount();
        adapter
    }

    // ── Handle contract ──────────────────────────────────────────────

    #[test]
    fn partials_render_only_once_attached_and_mounted() {
        let mut nav = GlobalNav::new();
        let top = nav.create_partial(NavSlot::TopNav);
        assert!(nav.layout(Region::new(0, 0, 10, 5)).unwrap().top_nav.is_none());

        nav.add_top_nav(top);
        assert!(nav.layout(Region::new(0, 0, 10, 5)).unwrap().top_nav.is_none());

        nav.mount_partial(top, &Props::new());
        assert!(nav.layout(Region::new(0, 0, 10, 5)).unwrap().top_nav.is_some());

        nav.unmount_partial(top);
        assert!(nav.layout(Region::new(0, 0, 10, 5)).unwrap().top_nav.is_none());
    }

    #[test]
    fn discard_detaches_and_frees() {
        let mut nav = GlobalNav::new();
        let side = nav.create_partial(NavSlot::SideNav);
        nav.add_side_nav(side);
        nav.discard_partial(side);
        assert_eq!(nav.attached(NavSlot::SideNav), None);
        assert_eq!(nav.partial_count(), 0);
        // Stale ids are ignored.
        nav.add_side_nav(side);
        assert_eq!(nav.attached(NavSlot::SideNav), None);
    }

    #[test]
    fn attaching_over_a_partial_unmounts_the_previous_one() {
        let mut nav = GlobalNav::new();
        let first = nav.create_partial(NavSlot::TopNav);
        nav.add_top_nav(first);
        nav.mount_partial(first, &Props::new());

        let second = nav.create_partial(NavSlot::TopNav);
        nav.add_top_nav(second);
        assert_eq!(nav.attached(NavSlot::TopNav), Some(second));
        assert!(!nav.partial(first).unwrap().is_mounted());

        // Re-attaching the same partial keeps it mounted.
        nav.mount_partial(second, &Props::new());
        nav.add_top_nav(second);
        assert!(nav.partial(second).unwrap().is_mounted());
    }

    // ── Through the adapter ──────────────────────────────────────────

    #[test]
    fn adapter_mount_applies_props_and_visibility() {
        let adapter = mounted_nav(true);
        let nav = adapter.handle();
        assert!(nav.is_side_nav_visible());
        let top = nav.attached(NavSlot::TopNav).and_then(|id| nav.partial(id)).unwrap();
        assert!(top.is_mounted());
        assert_eq!(top.props().text(LOGO_TEXT), Some("BIM 360"));
    }

    #[test]
    fn renders_bars_side_nav_and_content() {
        let adapter = mounted_nav(true);
        let out = render_to_string(adapter.handle(), 40, 5);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " BIM 360");
        assert!(lines[1].starts_with(" Oakwood"));
        assert!(lines[3].starts_with(" › Docs"));
        assert!(lines[1].ends_with(&".".repeat(40 - super::super::layout::SIDE_NAV_WIDTH as usize)));
    }

    #[test]
    fn hidden_side_nav_leaves_content_full_width() {
        let mut adapter = mounted_nav(false);
        let out = render_to_string(adapter.handle(), 20, 3);
        assert_eq!(out, " BIM 360\n....................\n....................");

        adapter.commit_update(&crate::adapter::update_payload([(crate::adapter::SIDE_NAV_OPEN, true)]));
        assert!(adapter.handle().is_side_nav_visible());
    }
}
