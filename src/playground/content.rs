//! The playground's slot content: active selection, switcher and notes.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use crate::components::{ContentPresenter, ListKind, TextArea};
use crate::event::input::InputEvent;
use crate::geometry::Region;
use crate::render::strip::{CellStyle, Strip};
use crate::style::styles::{Styles, TextAlign};
use crate::style::theme::Theme;
use crate::widget::traits::Widget;

use super::state::PlaygroundState;

/// State shared between the content widget and the presenter callbacks.
pub type SharedState = Rc<RefCell<PlaygroundState>>;

/// Focusable sections, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Switcher,
    Notes,
}

const SECTIONS: [Section; 2] = [Section::Switcher, Section::Notes];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

struct SectionRegions {
    label: Region,
    switcher: Region,
    notes: Region,
}

pub struct PlaygroundContent {
    state: SharedState,
    presenter: ContentPresenter,
    notes: TextArea,
    focus: Option<Section>,
}

impl PlaygroundContent {
    pub fn new(state: SharedState) -> Self {
        let presenter = {
            let s = state.borrow();
            let on_account = Rc::clone(&state);
            let on_project = Rc::clone(&state);
            ContentPresenter::new()
                .with_accounts(s.accounts().to_vec())
                .with_projects(s.projects().to_vec())
                .with_class_name("playground")
                .on_account_click(move |_, id| {
                    on_account.borrow_mut().set_active_project_or_account(ListKind::Account, id);
                })
                .on_project_click(move |_, id| {
                    on_project.borrow_mut().set_active_project_or_account(ListKind::Project, id);
                })
        };
        let notes = TextArea::new()
            .with_placeholder("Notes")
            .with_class_name("playground")
            .on_change(Rc::new(|value: &str| info!(value, "TextArea triggered a change event")));

        let mut content = Self {
            state,
            presenter,
            notes,
            focus: None,
        };
        content.sync_selection();
        content
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    pub fn presenter(&self) -> &ContentPresenter {
        &self.presenter
    }

    pub fn notes(&self) -> &TextArea {
        &self.notes
    }

    pub fn focused_section(&self) -> Option<Section> {
        self.focus
    }

    /// Focus the next focusable section, wrapping around.
    pub fn focus_next(&mut self) {
        self.cycle_focus(Direction::Forward);
    }

    /// Focus the previous focusable section, wrapping around.
    pub fn focus_previous(&mut self) {
        self.cycle_focus(Direction::Backward);
    }

    fn cycle_focus(&mut self, direction: Direction) {
        let len = SECTIONS.len();
        // Stepping back by one is stepping forward by `len - 1`.
        let step = match direction {
            Direction::Forward => 1,
            Direction::Backward => len - 1,
        };
        let start = match (self.focus, direction) {
            (Some(current), _) => SECTIONS.iter().position(|s| *s == current).unwrap_or(0),
            // Nothing focused: start just outside the end we enter from.
            (None, Direction::Forward) => len - 1,
            (None, Direction::Backward) => 0,
        };
        let next = (1..=len)
            .map(|i| SECTIONS[(start + i * step) % len])
            .find(|section| self.section(*section).can_focus());
        self.focus_section(next);
    }

    fn focus_section(&mut self, next: Option<Section>) {
        if self.focus == next {
            return;
        }
        if let Some(previous) = self.focus {
            self.section_mut(previous).set_focused(false);
        }
        self.focus = next;
        if let Some(next) = next {
            self.section_mut(next).set_focused(true);
        }
    }

    fn section(&self, section: Section) -> &dyn Widget {
        match section {
            Section::Switcher => &self.presenter,
            Section::Notes => &self.notes,
        }
    }

    fn section_mut(&mut self, section: Section) -> &mut dyn Widget {
        match section {
            Section::Switcher => &mut self.presenter,
            Section::Notes => &mut self.notes,
        }
    }

    /// Highlight the state's selection in the switcher.
    fn sync_selection(&mut self) {
        let state = self.state.borrow();
        self.presenter
            .set_active_account(state.active_account().map(|a| a.id.clone()));
        self.presenter
            .set_active_project(state.active_project().map(|p| p.id.clone()));
    }

    fn layout(&self, region: Region) -> SectionRegions {
        let (top, rest) = region.split_horizontal(2);
        let (switcher, rest) = rest.split_horizontal(self.presenter.height_hint(region.width));
        let (notes, _) = rest.split_horizontal(self.notes.height_hint(region.width));
        SectionRegions {
            label: top.row(0),
            switcher,
            notes,
        }
    }

    fn region_of(regions: &SectionRegions, section: Section) -> Region {
        match section {
            Section::Switcher => regions.switcher,
            Section::Notes => regions.notes,
        }
    }
}

impl std::fmt::Debug for PlaygroundContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaygroundContent")
            .field("state", &self.state)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

impl Widget for PlaygroundContent {
    fn widget_type(&self) -> &str {
        "PlaygroundContent"
    }

    fn render(&self, region: Region, theme: &Theme) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }
        let regions = self.layout(region);
        let mut strips = Vec::new();

        if !regions.label.is_empty() {
            let state = self.state.borrow();
            let text = format!(
                " {} ({})",
                state.active_label(),
                state.active_type().key_prefix()
            );
            let styles = Styles::new().with_color(theme.text.clone()).with_bold();
            let mut strip = Strip::new(regions.label.y, regions.label.x);
            strip.push_aligned(&text, regions.label.width, TextAlign::Left, CellStyle::from_styles(&styles));
            strips.push(strip);
        }
        strips.extend(self.presenter.render(regions.switcher, theme));
        strips.extend(self.notes.render(regions.notes, theme));
        strips
    }

    fn can_focus(&self) -> bool {
        SECTIONS.iter().any(|s| self.section(*s).can_focus())
    }

    fn set_focused(&mut self, focused: bool) {
        if focused {
            if self.focus.is_none() {
                self.focus_next();
            }
        } else {
            self.focus_section(None);
        }
    }

    fn handle_input(&mut self, event: &InputEvent, region: Region) -> bool {
        let regions = self.layout(region);
        let consumed = match event {
            InputEvent::Mouse(mouse) if mouse.is_left_click() => {
                let hit = SECTIONS
                    .into_iter()
                    .find(|s| Self::region_of(&regions, *s).contains(mouse.x as i32, mouse.y as i32));
                match hit {
                    Some(section) => {
                        if self.section(section).can_focus() {
                            self.focus_section(Some(section));
                        }
                        self.section_mut(section)
                            .handle_input(event, Self::region_of(&regions, section))
                    }
                    None => false,
                }
            }
            InputEvent::Key(_) | InputEvent::Paste(_) => match self.focus {
                Some(section) => self
                    .section_mut(section)
                    .handle_input(event, Self::region_of(&regions, section)),
                None => false,
            },
            _ => false,
        };
        if consumed {
            self.sync_selection();
        }
        consumed
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
    use crate::event::input::{Key, KeyEvent, MouseEvent};
    use crate::testing::snapshot::render_to_string;

    fn content() -> PlaygroundContent {
        PlaygroundContent::new(Rc::new(RefCell::new(PlaygroundState::from_fixtures(true))))
    }

    fn key(code: Key) -> InputEvent {
        InputEvent::Key(KeyEvent::plain(code))
    }

    const AREA: Region = Region::new(0, 0, 50, 20);

    // ── Focus ────────────────────────────────────────────────────────

    #[test]
    fn focus_cycles_through_sections() {
        let mut c = content();
        assert_eq!(c.focused_section(), None);
        c.focus_next();
        assert_eq!(c.focused_section(), Some(Section::Switcher));
        c.focus_next();
        assert_eq!(c.focused_section(), Some(Section::Notes));
        c.focus_next();
        assert_eq!(c.focused_section(), Some(Section::Switcher));
        c.focus_previous();
        assert_eq!(c.focused_section(), Some(Section::Notes));
    }

    #[test]
    fn focus_previous_from_nothing_lands_on_last() {
        let mut c = content();
        c.focus_previous();
        assert_eq!(c.focused_section(), Some(Section::Notes));
    }

    #[test]
    fn focus_previous_walks_backwards_after_blur() {
        let mut c = content();
        c.focus_next();
        c.set_focused(false);
        assert_eq!(c.focused_section(), None);
        c.focus_previous();
        assert_eq!(c.focused_section(), Some(Section::Notes));
        c.focus_previous();
        assert_eq!(c.focused_section(), Some(Section::Switcher));
    }

    #[test]
    fn unfocused_content_ignores_keys() {
        let mut c = content();
        assert!(!c.handle_input(&key(Key::Down), AREA));
    }

    // ── Selection ────────────────────────────────────────────────────

    #[test]
    fn activating_an_account_updates_the_state() {
        let mut c = content();
        c.set_focused(true);
        assert!(c.handle_input(&key(Key::Down), AREA));
        assert!(c.handle_input(&key(Key::Enter), AREA));

        let state = c.state().borrow();
        assert_eq!(state.active_label(), "Pacific Architects / Oakwood Medical Center");
        assert_eq!(state.active_type(), ListKind::Account);
        drop(state);
        assert!(c.presenter().lists()[0].items[1].active);
    }

    #[test]
    fn clicking_a_project_selects_it() {
        let mut c = content();
        // Label row, blank row, then the accounts list (heading, 3 items,
        // padding) and the projects heading.
        let second_project_row = 2 + 5 + 2;
        let click = InputEvent::Mouse(MouseEvent::left_click(8, second_project_row as u16));
        assert!(c.handle_input(&click, AREA));
        assert_eq!(c.focused_section(), Some(Section::Switcher));
        assert_eq!(
            c.state().borrow().active_label(),
            "Global Construction / Harbor Bridge Retrofit"
        );
    }

    // ── Notes ────────────────────────────────────────────────────────

    #[test]
    fn typing_goes_to_the_focused_notes() {
        let mut c = content();
        c.focus_previous();
        c.handle_input(&key(Key::Char('h')), AREA);
        c.handle_input(&key(Key::Char('i')), AREA);
        assert_eq!(c.notes().value(), "hi");
    }

    // ── Rendering ────────────────────────────────────────────────────

    #[test]
    fn render_shows_label_and_lists() {
        let out = render_to_string(&content(), 60, 20);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " Global Construction / Oakwood Medical Center (project)");
        assert_eq!(lines[2], " ACCOUNTS");
        assert!(out.contains("Pacific Architects"));
        assert!(out.contains(" PROJECTS"));
        assert!(out.contains("Notes"));
    }
}
