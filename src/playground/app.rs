//! App struct: composition, input routing, render loop.
//!
//! [`App`] composes the GlobalNav through the adapter (top nav, sub nav, side
//! nav and the [`PlaygroundContent`] slot), resolves key bindings and paints
//! frames. The `new_headless` constructor allows testing without a terminal.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::EventStream;
use futures::StreamExt;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::adapter::{update_payload, ElementKind, GlobalNavAdapter, Props, SIDE_NAV_OPEN};
use crate::event::binding::{BindingAction, KeyBindingRegistry};
use crate::event::input::{from_crossterm, InputEvent};
use crate::geometry::Region;
use crate::render::driver::Driver;
use crate::render::frame::Frame;
use crate::vanilla::global_nav::{self as nav_props, GlobalNav};
use crate::widget::Widget;

use super::config::AppConfig;
use super::content::{PlaygroundContent, SharedState};
use super::error::PlaygroundError;
use super::fixtures;
use super::state::PlaygroundState;

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The playground application.
pub struct App {
    nav: GlobalNavAdapter<GlobalNav>,
    /// Key binding registry.
    pub bindings: KeyBindingRegistry,
    state: SharedState,
    config: AppConfig,
    width: u16,
    height: u16,
    /// Whether the app is still running.
    running: bool,
    /// Last painted frame, diffed against the next one.
    previous: Option<Frame>,
}

impl App {
    /// Create an app sized to the current terminal.
    pub fn new(config: AppConfig) -> Result<Self, PlaygroundError> {
        let (width, height) = Driver::terminal_size()?;
        Self::new_headless(config, width, height)
    }

    /// Create an app with fixed dimensions and no terminal.
    pub fn new_headless(config: AppConfig, width: u16, height: u16) -> Result<Self, PlaygroundError> {
        let state: SharedState = Rc::new(RefCell::new(PlaygroundState::from_fixtures(
            config.side_nav_open,
        )));
        let nav = compose(&config, &state)?;
        info!(width, height, side_nav_open = config.side_nav_open, "playground composed");
        Ok(Self {
            nav,
            bindings: KeyBindingRegistry::with_defaults(),
            state,
            config,
            width,
            height,
            running: true,
            previous: None,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    pub fn nav(&self) -> &GlobalNavAdapter<GlobalNav> {
        &self.nav
    }

    /// The slot content, if the GlobalNav holds it.
    pub fn content(&self) -> Option<&PlaygroundContent> {
        self.nav.handle().slot_content()?.as_any().downcast_ref()
    }

    fn content_mut(&mut self) -> Option<&mut PlaygroundContent> {
        self.nav
            .handle_mut()
            .slot_content_mut()?
            .as_any_mut()
            .downcast_mut()
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn area(&self) -> Region {
        Region::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Whether the app should quit.
    pub fn should_quit(&self) -> bool {
        !self.running
    }

    /// Request the app to quit.
    pub fn request_quit(&mut self) {
        self.running = false;
    }

    // -- input --------------------------------------------------------------

    /// Route one input event.
    ///
    /// Bound keys act first, except focus movement, which only happens when
    /// the focused widget leaves the key alone.
    pub fn handle_input(&mut self, event: InputEvent) {
        match &event {
            InputEvent::Key(key) => {
                let action = self.bindings.resolve(key);
                if let Some(action) = action.filter(|a| !a.is_fallback()) {
                    self.apply(action);
                    return;
                }
                let area = self.area();
                let consumed = self.nav.handle_mut().handle_input(&event, area);
                if let (false, Some(action)) = (consumed, action) {
                    self.apply(action);
                }
            }
            InputEvent::Mouse(_) | InputEvent::Paste(_) => {
                let area = self.area();
                self.nav.handle_mut().handle_input(&event, area);
            }
            InputEvent::Resize { width, height } => {
                debug!(width, height, "resized");
                self.width = *width;
                self.height = *height;
                self.previous = None;
            }
            InputEvent::FocusGained | InputEvent::FocusLost => {}
        }
    }

    fn apply(&mut self, action: BindingAction) {
        match action {
            BindingAction::Quit => {
                info!("quit requested");
                self.running = false;
            }
            BindingAction::ToggleSideNav => {
                let open = self.state.borrow_mut().toggle_side_nav();
                self.nav.commit_update(&update_payload([(SIDE_NAV_OPEN, open)]));
            }
            BindingAction::FocusNext => {
                if let Some(content) = self.content_mut() {
                    content.focus_next();
                }
            }
            BindingAction::FocusPrevious => {
                if let Some(content) = self.content_mut() {
                    content.focus_previous();
                }
            }
        }
    }

    // -- rendering ----------------------------------------------------------

    /// Render the whole screen into a fresh frame.
    pub fn render_frame(&self) -> Frame {
        let mut frame = Frame::new(self.width, self.height);
        let area = frame.area();
        let strips = self.nav.handle().render(area, &self.config.theme);
        frame.place(&strips, area);
        frame
    }

    fn paint<W: std::io::Write>(&mut self, driver: &mut Driver<W>) -> Result<(), PlaygroundError> {
        let frame = self.render_frame();
        let updates = match &self.previous {
            Some(previous) => frame.diff(previous),
            None => {
                driver.clear()?;
                frame.diff(&Frame::new(0, 0))
            }
        };
        if !updates.is_empty() {
            driver.apply_updates(&updates)?;
            driver.flush()?;
        }
        self.previous = Some(frame);
        Ok(())
    }

    // -- run loop -----------------------------------------------------------

    /// Take over the terminal until the user quits.
    pub async fn run(mut self) -> Result<(), PlaygroundError> {
        let mut driver = Driver::stdout();
        driver.enter()?;
        let result = self.event_loop(&mut driver).await;
        let restored = driver.leave();
        result?;
        restored?;
        Ok(())
    }

    async fn event_loop(&mut self, driver: &mut Driver) -> Result<(), PlaygroundError> {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(frame_interval(self.config.fps));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while self.running {
            tokio::select! {
                _ = ticker.tick() => self.paint(driver)?,
                next = events.next() => match next {
                    Some(Ok(event)) => {
                        if let Some(event) = from_crossterm(event) {
                            self.handle_input(event);
                        }
                    }
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                },
            }
        }
        Ok(())
    }
}

fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}

/// Build the GlobalNav: nav children, then the slot, then mount.
fn compose(
    config: &AppConfig,
    state: &SharedState,
) -> Result<GlobalNavAdapter<GlobalNav>, PlaygroundError> {
    let mut nav = GlobalNavAdapter::new(GlobalNav::new(), config.side_nav_open);

    let mut top_props = Props::new().with(nav_props::LOGO_TEXT, fixtures::LOGO_TEXT);
    if let Some(title) = &config.title {
        top_props.set(nav_props::CAPTION, title.as_str());
    }
    let top = nav.create_element(ElementKind::TopNav, top_props)?;
    let sub = nav.create_element(
        ElementKind::SubNav,
        Props::new().with(nav_props::MODULE_NAME, fixtures::MODULE_NAME),
    )?;
    let side = nav.create_element(
        ElementKind::SideNav,
        Props::new()
            .with(nav_props::SUPER_HEADER_LABEL, fixtures::SUPER_HEADER_LABEL)
            .with(nav_props::HEADER_LABEL, fixtures::HEADER_LABEL)
            .with(nav_props::LINKS, fixtures::side_nav_links()),
    )?;
    for child in [top, sub, side] {
        nav.append_child(child)?;
    }

    let mut content = PlaygroundContent::new(Rc::clone(state));
    content.set_focused(true);
    nav.add_slot(Box::new(content));
    nav.mount();
    Ok(nav)
}

// ===========================================================================
// Tests
// ===========================================================================
