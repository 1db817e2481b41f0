//! Button-style event handlers and their per-id memoization.
//!
//! Interactive list items react to a left click or to an activation key
//! (Enter / Space). [`ButtonEventHandlers`] bundles both reactions around a
//! single activation callback; [`HandlerCache`] hands out one bundle per id
//! and returns the very same `Rc` on every later request for that id.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

use super::input::{KeyEvent, MouseEvent};

// ---------------------------------------------------------------------------
// ActivationEvent
// ---------------------------------------------------------------------------

/// The input that activated an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationEvent {
    Click(MouseEvent),
    Key(KeyEvent),
}

// ---------------------------------------------------------------------------
// ButtonEventHandlers
// ---------------------------------------------------------------------------

/// Click and key-down handlers sharing one activation callback.
pub struct ButtonEventHandlers {
    on_activate: Box<dyn Fn(&ActivationEvent)>,
}

impl ButtonEventHandlers {
    /// Handle a mouse event. Only a left-button press activates.
    pub fn handle_click(&self, event: MouseEvent) -> bool {
        if !event.is_left_click() {
            return false;
        }
        (self.on_activate)(&ActivationEvent::Click(event));
        true
    }

    /// Handle a key press. Only Enter and Space activate.
    pub fn handle_key_down(&self, event: KeyEvent) -> bool {
        if !event.is_activation() {
            return false;
        }
        (self.on_activate)(&ActivationEvent::Key(event));
        true
    }
}

impl fmt::Debug for ButtonEventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonEventHandlers").finish_non_exhaustive()
    }
}

/// Build click / key-down handlers around `on_activate`.
pub fn create_button_event_handlers(
    on_activate: impl Fn(&ActivationEvent) + 'static,
) -> ButtonEventHandlers {
    ButtonEventHandlers {
        on_activate: Box::new(on_activate),
    }
}

// ---------------------------------------------------------------------------
// HandlerCache
// ---------------------------------------------------------------------------

/// Memoizing handler factory keyed by item id.
///
/// The first request for an id runs the factory; later requests return a
/// clone of the same `Rc`. Entries are only dropped by [`HandlerCache::sync_ids`]
/// when an id leaves the rendered set.
pub struct HandlerCache {
    factory: Box<dyn Fn(&str) -> ButtonEventHandlers>,
    entries: HashMap<String, Rc<ButtonEventHandlers>>,
}

impl HandlerCache {
    pub fn new(factory: impl Fn(&str) -> ButtonEventHandlers + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            entries: HashMap::new(),
        }
    }

    /// The handlers for `id`, created on first use.
    pub fn get(&mut self, id: &str) -> Rc<ButtonEventHandlers> {
        if let Some(existing) = self.entries.get(id) {
            return Rc::clone(existing);
        }
        let created = Rc::new((self.factory)(id));
        self.entries.insert(id.to_owned(), Rc::clone(&created));
        created
    }

    /// Drop entries whose id is not in `ids`. Returns whether anything was dropped.
    pub fn sync_ids<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) -> bool {
        let live: HashSet<&str> = ids.into_iter().collect();
        let before = self.entries.len();
        self.entries.retain(|id, _| live.contains(id.as_str()));
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for HandlerCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&String> = self.entries.keys().collect();
        ids.sort();
        f.debug_struct("HandlerCache").field("ids", &ids).finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
