//! ContentPresenter: the account / project lists of the project-account switcher.
//!
//! Each non-`None` collection renders as a list: an uppercased heading
//! followed by one row per item. A row shows the item's image column (the
//! label's initials when no image is set) and the label as a link. Clicking a
//! row, or pressing Enter / Space while it is focused, calls
//! `on_account_click(event, id)` or `on_project_click(event, id)`.
//!
//! Row handlers are memoized per id: repeated renders hand out the same
//! `Rc<ButtonEventHandlers>` for an id until that id leaves its list.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::components::placeholder::construct_placeholder;
use crate::event::handlers::{
    create_button_event_handlers, ActivationEvent, ButtonEventHandlers, HandlerCache,
};
use crate::event::input::{InputEvent, Key, KeyEvent};
use crate::geometry::Region;
use crate::render::strip::{CellStyle, Strip};
use crate::style::class_names::create_custom_class_names;
use crate::style::styles::TextAlign;
use crate::style::switcher::{
    switcher_stylesheet, SwitcherStyles, IMAGE_WRAPPER_WIDTH, SWITCHER_LIST_PADDING,
};
use crate::style::theme::Theme;
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// ListItem
// ---------------------------------------------------------------------------

/// An account or project entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: String,
    pub image: Option<String>,
    pub label: String,
}

impl ListItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image: None,
            label: label.into(),
        }
    }

    /// Set the image URL (builder).
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Which of the two lists an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Account,
    Project,
}

impl ListKind {
    /// Prefix of the item keys of this list.
    pub fn key_prefix(self) -> &'static str {
        match self {
            ListKind::Account => "account",
            ListKind::Project => "project",
        }
    }

    /// Heading used when the host supplies none.
    pub fn default_title(self) -> &'static str {
        match self {
            ListKind::Account => "Accounts",
            ListKind::Project => "Projects",
        }
    }
}

/// Callback invoked with the activating event and the item id.
pub type ItemCallback = Rc<dyn Fn(&ActivationEvent, &str)>;

// ---------------------------------------------------------------------------
// Rendered view
// ---------------------------------------------------------------------------

/// One item as rendered: key, content, classes and its memoized handlers.
#[derive(Debug, Clone)]
pub struct RenderedItem {
    /// `"account-<id>"` or `"project-<id>"`.
    pub key: String,
    pub id: String,
    pub label: String,
    pub image: Option<String>,
    pub placeholder: String,
    pub active: bool,
    pub class_name: Option<String>,
    pub image_wrapper_class_name: Option<String>,
    pub image_class_name: Option<String>,
    pub handlers: Rc<ButtonEventHandlers>,
}

/// One rendered list: heading plus items in input order.
#[derive(Debug, Clone)]
pub struct RenderedList {
    pub kind: ListKind,
    pub heading: String,
    pub class_name: Option<String>,
    pub items: Vec<RenderedItem>,
}

/// What occupies a row of the presenter's region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Heading(ListKind),
    Item(ListKind, usize),
}

// ---------------------------------------------------------------------------
// ContentPresenter
// ---------------------------------------------------------------------------

type CallbackSlot = Rc<RefCell<Option<ItemCallback>>>;

/// The account / project switcher lists.
///
/// # Examples
///
/// ```ignore
/// let presenter = ContentPresenter::new()
///     .with_accounts(vec![ListItem::new("a1", "Acme")])
///     .on_account_click(|_event, id| println!("picked {id}"));
/// ```
pub struct ContentPresenter {
    accounts: Option<Vec<ListItem>>,
    projects: Option<Vec<ListItem>>,
    account_title: String,
    project_title: String,
    active_account: Option<String>,
    active_project: Option<String>,
    class_name: Option<String>,

    // Handlers read the callback at activation time, so replacing a callback
    // never invalidates memoized handlers.
    account_click: CallbackSlot,
    project_click: CallbackSlot,
    account_handlers: RefCell<HandlerCache>,
    project_handlers: RefCell<HandlerCache>,

    focused_item: Option<usize>,
    has_focus: bool,
}

fn item_handler_cache(callback: CallbackSlot) -> HandlerCache {
    HandlerCache::new(move |id| {
        let callback = Rc::clone(&callback);
        let id = id.to_owned();
        create_button_event_handlers(move |event| {
            let current = callback.borrow().clone();
            if let Some(callback) = current {
                callback(event, &id);
            }
        })
    })
}

impl ContentPresenter {
    pub fn new() -> Self {
        let account_click: CallbackSlot = Rc::new(RefCell::new(None));
        let project_click: CallbackSlot = Rc::new(RefCell::new(None));
        Self {
            accounts: None,
            projects: None,
            account_title: ListKind::Account.default_title().to_owned(),
            project_title: ListKind::Project.default_title().to_owned(),
            active_account: None,
            active_project: None,
            class_name: None,
            account_handlers: RefCell::new(item_handler_cache(Rc::clone(&account_click))),
            project_handlers: RefCell::new(item_handler_cache(Rc::clone(&project_click))),
            account_click,
            project_click,
            focused_item: None,
            has_focus: false,
        }
    }

    // -- builders -----------------------------------------------------------

    pub fn with_accounts(mut self, accounts: Vec<ListItem>) -> Self {
        self.set_accounts(Some(accounts));
        self
    }

    pub fn with_projects(mut self, projects: Vec<ListItem>) -> Self {
        self.set_projects(Some(projects));
        self
    }

    pub fn with_account_title(mut self, title: impl Into<String>) -> Self {
        self.account_title = title.into();
        self
    }

    pub fn with_project_title(mut self, title: impl Into<String>) -> Self {
        self.project_title = title.into();
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_active_account(mut self, id: impl Into<String>) -> Self {
        self.active_account = Some(id.into());
        self
    }

    pub fn with_active_project(mut self, id: impl Into<String>) -> Self {
        self.active_project = Some(id.into());
        self
    }

    pub fn on_account_click(self, callback: impl Fn(&ActivationEvent, &str) + 'static) -> Self {
        *self.account_click.borrow_mut() = Some(Rc::new(callback));
        self
    }

    pub fn on_project_click(self, callback: impl Fn(&ActivationEvent, &str) + 'static) -> Self {
        *self.project_click.borrow_mut() = Some(Rc::new(callback));
        self
    }

    // -- prop updates -------------------------------------------------------

    /// Replace the account list. Handlers of ids that remain are kept.
    pub fn set_accounts(&mut self, accounts: Option<Vec<ListItem>>) {
        let ids = accounts.iter().flatten().map(|item| item.id.as_str());
        self.account_handlers.get_mut().sync_ids(ids);
        self.accounts = accounts;
        self.clamp_focus();
    }

    /// Replace the project list. Handlers of ids that remain are kept.
    pub fn set_projects(&mut self, projects: Option<Vec<ListItem>>) {
        let ids = projects.iter().flatten().map(|item| item.id.as_str());
        self.project_handlers.get_mut().sync_ids(ids);
        self.projects = projects;
        self.clamp_focus();
    }

    pub fn set_active_account(&mut self, id: Option<String>) {
        self.active_account = id;
    }

    pub fn set_active_project(&mut self, id: Option<String>) {
        self.active_project = id;
    }

    pub fn accounts(&self) -> Option<&[ListItem]> {
        self.accounts.as_deref()
    }

    pub fn projects(&self) -> Option<&[ListItem]> {
        self.projects.as_deref()
    }

    /// Index (accounts first, then projects) of the focused item.
    pub fn focused_item(&self) -> Option<usize> {
        self.focused_item
    }

    // -- handlers -----------------------------------------------------------

    /// Memoized account handlers for `id`.
    pub fn account_handlers(&self, id: &str) -> Rc<ButtonEventHandlers> {
        self.account_handlers.borrow_mut().get(id)
    }

    /// Memoized project handlers for `id`.
    pub fn project_handlers(&self, id: &str) -> Rc<ButtonEventHandlers> {
        self.project_handlers.borrow_mut().get(id)
    }

    fn handlers(&self, kind: ListKind, id: &str) -> Rc<ButtonEventHandlers> {
        match kind {
            ListKind::Account => self.account_handlers(id),
            ListKind::Project => self.project_handlers(id),
        }
    }

    // -- view ---------------------------------------------------------------

    fn collection(&self, kind: ListKind) -> Option<&[ListItem]> {
        match kind {
            ListKind::Account => self.accounts.as_deref(),
            ListKind::Project => self.projects.as_deref(),
        }
    }

    fn present_lists(&self) -> impl Iterator<Item = (ListKind, &[ListItem])> {
        [ListKind::Account, ListKind::Project]
            .into_iter()
            .filter_map(|kind| self.collection(kind).map(|items| (kind, items)))
    }

    /// The lists as they render: one per present collection, items in order.
    pub fn lists(&self) -> Vec<RenderedList> {
        let class = self.class_name.as_deref();
        let item_class = create_custom_class_names(class, "switcher-item");
        let image_class = create_custom_class_names(class, "image");

        self.present_lists()
            .map(|(kind, items)| {
                let (heading, active, wrapper_suffix) = match kind {
                    ListKind::Account => (
                        &self.account_title,
                        self.active_account.as_deref(),
                        "switcher-account-image-wrapper",
                    ),
                    ListKind::Project => (
                        &self.project_title,
                        self.active_project.as_deref(),
                        "image-wrapper",
                    ),
                };
                let wrapper_class = create_custom_class_names(class, wrapper_suffix);

                RenderedList {
                    kind,
                    heading: heading.clone(),
                    class_name: create_custom_class_names(class, "switcher-list"),
                    items: items
                        .iter()
                        .map(|item| RenderedItem {
                            key: format!("{}-{}", kind.key_prefix(), item.id),
                            id: item.id.clone(),
                            label: item.label.clone(),
                            image: item.image.clone(),
                            placeholder: construct_placeholder(&item.label),
                            active: active == Some(item.id.as_str()),
                            class_name: item_class.clone(),
                            image_wrapper_class_name: wrapper_class.clone(),
                            image_class_name: image_class.clone(),
                            handlers: self.handlers(kind, &item.id),
                        })
                        .collect(),
                }
            })
            .collect()
    }

    /// Row assignment of `region`. Rows past the bottom are dropped.
    fn rows(&self, region: Region) -> Vec<(Region, Row)> {
        let mut rows = Vec::new();
        let mut y = region.y;
        for (kind, items) in self.present_lists() {
            let height = list_height(items.len());
            let inner = Region::new(region.x, y, region.width, height).shrink(SWITCHER_LIST_PADDING);
            let mut push = |row_region: Region, row: Row| {
                let clipped = row_region.intersection(region);
                if !clipped.is_empty() {
                    rows.push((clipped, row));
                }
            };
            push(inner.row(0), Row::Heading(kind));
            for index in 0..items.len() {
                push(inner.row(1 + index as i32), Row::Item(kind, index));
            }
            y += height;
        }
        rows
    }

    fn item_count(&self) -> usize {
        self.present_lists().map(|(_, items)| items.len()).sum()
    }

    fn flat_index(&self, kind: ListKind, index: usize) -> usize {
        match kind {
            ListKind::Account => index,
            ListKind::Project => self.accounts.as_ref().map_or(0, Vec::len) + index,
        }
    }

    fn item_at_flat(&self, flat: usize) -> Option<(ListKind, &ListItem)> {
        let mut remaining = flat;
        for (kind, items) in self.present_lists() {
            if let Some(item) = items.get(remaining) {
                return Some((kind, item));
            }
            remaining -= items.len();
        }
        None
    }

    fn clamp_focus(&mut self) {
        let count = self.item_count();
        self.focused_item = match self.focused_item {
            _ if count == 0 => None,
            Some(i) => Some(i.min(count - 1)),
            None => None,
        };
    }

    fn move_focus(&mut self, delta: isize) -> bool {
        let count = self.item_count();
        if count == 0 {
            return false;
        }
        let current = self.focused_item.unwrap_or(0) as isize;
        self.focused_item = Some((current + delta).clamp(0, count as isize - 1) as usize);
        true
    }

    fn step_focus(&mut self, delta: isize) -> bool {
        let count = self.item_count() as isize;
        let next = match self.focused_item {
            Some(i) => i as isize + delta,
            None if delta > 0 => 0,
            None => count - 1,
        };
        if (0..count).contains(&next) {
            self.focused_item = Some(next as usize);
            true
        } else {
            false
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            Key::Up => self.move_focus(-1),
            Key::Down => self.move_focus(1),
            Key::Home => self.move_focus(isize::MIN / 2),
            Key::End => self.move_focus(isize::MAX / 2),
            // Tab walks the items and releases focus past either end.
            Key::Tab => self.step_focus(1),
            Key::BackTab => self.step_focus(-1),
            _ if key.is_activation() => {
                let Some(flat) = self.focused_item else {
                    return false;
                };
                let Some((kind, item)) = self.item_at_flat(flat) else {
                    return false;
                };
                let handlers = self.handlers(kind, &item.id);
                handlers.handle_key_down(key)
            }
            _ => false,
        }
    }

    fn render_item(
        &self,
        row: Region,
        item: &RenderedItem,
        kind: ListKind,
        focused: bool,
        styles: &SwitcherStyles,
    ) -> Strip {
        let mut row_styles = styles.switcher_list.merge(&styles.switcher_item);
        if item.active {
            row_styles = row_styles.merge(&styles.switcher_item_active);
        }
        let row_style = CellStyle::from_styles(&row_styles);

        let wrapper = match kind {
            ListKind::Account => &styles.switcher_account_image_wrapper,
            ListKind::Project => &styles.image_wrapper,
        };
        // Bitmaps cannot be drawn in cells: an image item shows its initials
        // in the image style, an image-less item in the placeholder style.
        let glyph_styles = if item.image.is_some() {
            wrapper.merge(&styles.image)
        } else {
            wrapper.merge(&styles.placeholder)
        };

        let mut link_styles = row_styles.merge(&styles.link);
        if focused {
            link_styles = link_styles.merge(&styles.switcher_item_focused).with_underline();
        }

        let mut strip = Strip::new(row.y, row.x);
        strip.push_aligned(
            &item.placeholder,
            IMAGE_WRAPPER_WIDTH.min(row.width),
            glyph_styles.text_align.unwrap_or(TextAlign::Center),
            CellStyle::from_styles(&glyph_styles),
        );
        if row.width > IMAGE_WRAPPER_WIDTH {
            strip.push(' ', row_style.clone());
            let label_width = row.width - IMAGE_WRAPPER_WIDTH - 1;
            let label: String = item.label.chars().take(label_width.max(0) as usize).collect();
            strip.push_str(&label, CellStyle::from_styles(&link_styles));
        }
        strip.fill(row.width, row_style);
        strip
    }
}

/// Rows one list occupies: heading, items, and the list padding.
fn list_height(items: usize) -> i32 {
    1 + items as i32 + SWITCHER_LIST_PADDING.top + SWITCHER_LIST_PADDING.bottom
}

impl Default for ContentPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ContentPresenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentPresenter")
            .field("accounts", &self.accounts)
            .field("projects", &self.projects)
            .field("account_title", &self.account_title)
            .field("project_title", &self.project_title)
            .field("focused_item", &self.focused_item)
            .finish_non_exhaustive()
    }
}

impl Widget for ContentPresenter {
    fn widget_type(&self) -> &str {
        "ContentPresenter"
    }

    fn render(&self, region: Region, theme: &Theme) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }
        let styles = switcher_stylesheet(theme);
        let lists = self.lists();
        let list_style = CellStyle::from_styles(&styles.switcher_list);

        // Background of every list block, padding included.
        let mut strips = Vec::new();
        let mut y = region.y;
        for list in &lists {
            for dy in 0..list_height(list.items.len()) {
                let row = Region::new(region.x, y + dy, region.width, 1).intersection(region);
                if !row.is_empty() {
                    let mut strip = Strip::new(row.y, row.x);
                    strip.fill(row.width, list_style.clone());
                    strips.push(strip);
                }
            }
            y += list_height(list.items.len());
        }

        let find_list = |kind: ListKind| lists.iter().find(|l| l.kind == kind);
        for (row, what) in self.rows(region) {
            match what {
                Row::Heading(kind) => {
                    let Some(list) = find_list(kind) else { continue };
                    let heading_styles = styles.switcher_list.merge(&styles.heading);
                    let mut strip = Strip::new(row.y, row.x);
                    strip.push_aligned(
                        &heading_styles.transform_text(&list.heading),
                        row.width,
                        TextAlign::Left,
                        CellStyle::from_styles(&heading_styles),
                    );
                    strips.push(strip);
                }
                Row::Item(kind, index) => {
                    let Some(item) = find_list(kind).and_then(|l| l.items.get(index)) else {
                        continue;
                    };
                    let focused =
                        self.has_focus && self.focused_item == Some(self.flat_index(kind, index));
                    strips.push(self.render_item(row, item, kind, focused, &styles));
                }
            }
        }
        strips
    }

    fn height_hint(&self, _width: i32) -> i32 {
        self.present_lists().map(|(_, items)| list_height(items.len())).sum()
    }

    fn can_focus(&self) -> bool {
        self.item_count() > 0
    }

    fn set_focused(&mut self, focused: bool) {
        self.has_focus = focused;
        if focused && self.focused_item.is_none() && self.item_count() > 0 {
            self.focused_item = Some(0);
        }
    }

    fn handle_input(&mut self, event: &InputEvent, region: Region) -> bool {
        match event {
            InputEvent::Mouse(mouse) if mouse.is_left_click() => {
                let hit = self
                    .rows(region)
                    .into_iter()
                    .find(|(row, _)| row.contains(mouse.x as i32, mouse.y as i32));
                let Some((_, Row::Item(kind, index))) = hit else {
                    return false;
                };
                self.focused_item = Some(self.flat_index(kind, index));
                let Some(id) = self.collection(kind).and_then(|items| items.get(index)).map(|i| i.id.clone())
                else {
                    return false;
                };
                self.handlers(kind, &id).handle_click(*mouse)
            }
            InputEvent::Key(key) => self.handle_key(*key),
            _ => false,
        }
    }

    fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
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
    use crate::event::input::MouseEvent;
    use crate::testing::snapshot::render_to_string;
    use pretty_assertions::assert_eq;

    type Log = Rc<RefCell<Vec<(ListKind, String)>>>;

    fn acme_globex() -> Vec<ListItem> {
        vec![ListItem::new("a1", "Acme"), ListItem::new("a2", "Globex")]
    }

    fn projects() -> Vec<ListItem> {
        vec![
            ListItem::new("p1", "Road Runner").with_image("https://example.com/rr.png"),
            ListItem::new("p2", "Anvil"),
        ]
    }

    fn logged(presenter: ContentPresenter) -> (ContentPresenter, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let accounts = Rc::clone(&log);
        let projects = Rc::clone(&log);
        let presenter = presenter
            .on_account_click(move |_, id| accounts.borrow_mut().push((ListKind::Account, id.to_owned())))
            .on_project_click(move |_, id| projects.borrow_mut().push((ListKind::Project, id.to_owned())));
        (presenter, log)
    }

    fn region() -> Region {
        Region::new(0, 0, 30, 20)
    }

    // ── Structure ────────────────────────────────────────────────────

    #[test]
    fn accounts_only_renders_one_list() {
        let presenter = ContentPresenter::new().with_accounts(acme_globex());
        let lists = presenter.lists();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].kind, ListKind::Account);
        assert_eq!(lists[0].heading, "Accounts");
        assert_eq!(lists[0].items.len(), 2);
    }

    #[test]
    fn nothing_renders_without_collections() {
        let presenter = ContentPresenter::new();
        assert!(presenter.lists().is_empty());
        assert_eq!(presenter.height_hint(30), 0);
        assert!(!presenter.can_focus());
    }

    #[test]
    fn items_keep_order_and_scoped_keys() {
        let presenter = ContentPresenter::new()
            .with_accounts(acme_globex())
            .with_projects(projects());
        let lists = presenter.lists();
        let keys: Vec<Vec<&str>> = lists
            .iter()
            .map(|l| l.items.iter().map(|i| i.key.as_str()).collect())
            .collect();
        assert_eq!(keys, vec![vec!["account-a1", "account-a2"], vec!["project-p1", "project-p2"]]);
    }

    #[test]
    fn empty_collection_still_renders_heading() {
        let presenter = ContentPresenter::new().with_projects(Vec::new());
        let lists = presenter.lists();
        assert_eq!(lists.len(), 1);
        assert!(lists[0].items.is_empty());
        assert!(render_to_string(&presenter, 20, 4).contains("PROJECTS"));
    }

    #[test]
    fn custom_titles() {
        let presenter = ContentPresenter::new()
            .with_accounts(acme_globex())
            .with_projects(projects())
            .with_account_title("Hubs")
            .with_project_title("Sites");
        let headings: Vec<String> = presenter.lists().into_iter().map(|l| l.heading).collect();
        assert_eq!(headings, vec!["Hubs", "Sites"]);
    }

    #[test]
    fn placeholder_and_image() {
        let presenter = ContentPresenter::new().with_projects(projects());
        let items = &presenter.lists()[0].items;
        assert_eq!(items[0].placeholder, "RR");
        assert_eq!(items[0].image.as_deref(), Some("https://example.com/rr.png"));
        assert_eq!(items[1].placeholder, "A");
        assert!(items[1].image.is_none());
    }

    #[test]
    fn class_names_are_derived() {
        let presenter = ContentPresenter::new()
            .with_class_name("top")
            .with_accounts(acme_globex())
            .with_projects(projects());
        let lists = presenter.lists();
        assert_eq!(lists[0].class_name.as_deref(), Some("top-switcher-list"));
        let account = &lists[0].items[0];
        assert_eq!(account.class_name.as_deref(), Some("top-switcher-item"));
        assert_eq!(
            account.image_wrapper_class_name.as_deref(),
            Some("top-switcher-account-image-wrapper")
        );
        assert_eq!(lists[1].items[0].image_wrapper_class_name.as_deref(), Some("top-image-wrapper"));
        assert_eq!(account.image_class_name.as_deref(), Some("top-image"));
    }

    #[test]
    fn active_item_is_flagged() {
        let presenter = ContentPresenter::new()
            .with_accounts(acme_globex())
            .with_active_account("a2");
        let items = &presenter.lists()[0].items;
        assert!(!items[0].active);
        assert!(items[1].active);
    }

    // ── Rendering ────────────────────────────────────────────────────

    #[test]
    fn renders_heading_and_rows() {
        let presenter = ContentPresenter::new().with_accounts(acme_globex());
        let out = render_to_string(&presenter, 24, 3);
        assert_eq!(out, " ACCOUNTS\n  A   Acme\n  G   Globex");
    }

    #[test]
    fn lists_stack_vertically() {
        let presenter = ContentPresenter::new()
            .with_accounts(acme_globex())
            .with_projects(projects());
        assert_eq!(presenter.height_hint(30), 8);
        let out = render_to_string(&presenter, 30, 8);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].trim(), "ACCOUNTS");
        assert_eq!(lines[4].trim(), "PROJECTS");
        assert!(lines[5].contains("RR") && lines[5].contains("Road Runner"));
    }

    #[test]
    fn render_clips_to_short_region() {
        let presenter = ContentPresenter::new().with_accounts(acme_globex());
        let strips = presenter.render(Region::new(0, 0, 20, 2), &Theme::light());
        assert!(strips.iter().all(|s| s.y < 2));
    }

    // ── Handler memoization ──────────────────────────────────────────

    #[test]
    fn handlers_are_stable_across_renders() {
        let presenter = ContentPresenter::new().with_accounts(acme_globex());
        let first = presenter.lists();
        let _ = presenter.render(region(), &Theme::light());
        let second = presenter.lists();
        for (a, b) in first[0].items.iter().zip(&second[0].items) {
            assert!(Rc::ptr_eq(&a.handlers, &b.handlers));
        }
        assert!(Rc::ptr_eq(&presenter.account_handlers("a1"), &presenter.account_handlers("a1")));
    }

    #[test]
    fn surviving_ids_keep_handlers_after_list_change() {
        let mut presenter = ContentPresenter::new().with_accounts(acme_globex());
        let a1 = presenter.account_handlers("a1");
        presenter.set_accounts(Some(vec![
            ListItem::new("a1", "Acme"),
            ListItem::new("a3", "Initech"),
        ]));
        assert!(Rc::ptr_eq(&a1, &presenter.account_handlers("a1")));
    }

    #[test]
    fn replaced_callback_is_used_by_existing_handlers() {
        let presenter = ContentPresenter::new().with_accounts(acme_globex());
        let handlers = presenter.account_handlers("a1");
        let (presenter, log) = logged(presenter);
        handlers.handle_click(MouseEvent::left_click(0, 0));
        assert!(Rc::ptr_eq(&handlers, &presenter.account_handlers("a1")));
        assert_eq!(*log.borrow(), vec![(ListKind::Account, "a1".to_owned())]);
    }

    // ── Interaction ──────────────────────────────────────────────────

    #[test]
    fn clicking_second_account_reports_its_id_once() {
        let (mut presenter, log) = logged(ContentPresenter::new().with_accounts(acme_globex()));
        // Row 0 heading, row 1 "a1", row 2 "a2".
        assert!(presenter.handle_input(&InputEvent::Mouse(MouseEvent::left_click(8, 2)), region()));
        assert_eq!(*log.borrow(), vec![(ListKind::Account, "a2".to_owned())]);
        assert_eq!(presenter.focused_item(), Some(1));
    }

    #[test]
    fn clicking_heading_does_nothing() {
        let (mut presenter, log) = logged(ContentPresenter::new().with_accounts(acme_globex()));
        assert!(!presenter.handle_input(&InputEvent::Mouse(MouseEvent::left_click(3, 0)), region()));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn clicking_project_row_reports_project() {
        let (mut presenter, log) = logged(
            ContentPresenter::new()
                .with_accounts(acme_globex())
                .with_projects(projects()),
        );
        // Account list takes rows 0..4; project heading row 4, p1 row 5, p2 row 6.
        presenter.handle_input(&InputEvent::Mouse(MouseEvent::left_click(10, 6)), region());
        assert_eq!(*log.borrow(), vec![(ListKind::Project, "p2".to_owned())]);
    }

    #[test]
    fn keyboard_navigation_and_activation() {
        let (mut presenter, log) = logged(
            ContentPresenter::new()
                .with_accounts(acme_globex())
                .with_projects(projects()),
        );
        presenter.set_focused(true);
        assert_eq!(presenter.focused_item(), Some(0));

        let key = |k| InputEvent::Key(KeyEvent::plain(k));
        presenter.handle_input(&key(Key::Down), region());
        presenter.handle_input(&key(Key::Down), region());
        assert!(presenter.handle_input(&key(Key::Enter), region()));
        presenter.handle_input(&key(Key::Up), region());
        assert!(presenter.handle_input(&key(Key::Char(' ')), region()));
        assert!(!presenter.handle_input(&key(Key::Char('q')), region()));

        assert_eq!(
            *log.borrow(),
            vec![
                (ListKind::Project, "p1".to_owned()),
                (ListKind::Account, "a2".to_owned()),
            ]
        );
    }

    #[test]
    fn tab_releases_focus_at_the_end() {
        let mut presenter = ContentPresenter::new().with_accounts(acme_globex());
        presenter.set_focused(true);
        let tab = InputEvent::Key(KeyEvent::plain(Key::Tab));
        assert!(presenter.handle_input(&tab, region()));
        assert_eq!(presenter.focused_item(), Some(1));
        assert!(!presenter.handle_input(&tab, region()));
        assert_eq!(presenter.focused_item(), Some(1));
    }

    #[test]
    fn focus_moves_are_clamped() {
        let mut presenter = ContentPresenter::new().with_accounts(acme_globex());
        presenter.set_focused(true);
        presenter.handle_input(&InputEvent::Key(KeyEvent::plain(Key::End)), region());
        assert_eq!(presenter.focused_item(), Some(1));
        presenter.handle_input(&InputEvent::Key(KeyEvent::plain(Key::Home)), region());
        assert_eq!(presenter.focused_item(), Some(0));
        presenter.set_accounts(Some(Vec::new()));
        assert_eq!(presenter.focused_item(), None);
    }
}
