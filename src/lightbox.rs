//! Lightbox controller.
//!
//! A two-state machine (Closed, Open) over an ordered image set with a
//! current index. Navigation wraps at both ends and is a no-op on an empty
//! set. The rendered page ships `static/lightbox.js`, which runs the same
//! machine in the browser; [`frame_plan`] is what the generator uses to
//! pre-compute the prev/next links of every overlay frame so the lightbox
//! also works without JavaScript.
//!
//! ## Keyboard scope
//!
//! While Open, the controller holds a [`KeySubscription`] obtained from a
//! [`KeyboardScope`]. The subscription is released by `Drop`, so every exit
//! path (explicit close, Escape, dropping the controller) deregisters it.
//! Keys arriving while Closed are ignored.
//!
//! ## Relation to `lightbox.js`
//!
//! Only [`frame_plan`] runs at build time. [`Lightbox`], [`Key`] and
//! [`KeyboardScope`] are the reference model of the browser script: the
//! script's key names, its Escape/arrow commands and its rule of holding a
//! `keydown` listener only while a frame is targeted follow this module, and
//! the tests here pin that behavior down.
//!
//! ```text
//!            open(images, i)
//!   Closed ──────────────────▶ Open ──┐ next / prev / open
//!     ▲                          │ ◀──┘
//!     └──── close / Escape ──────┘
//! ```

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// What a key does to an open lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Close,
    Prev,
    Next,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value, including legacy IE/Edge names.
    pub fn from_dom_key(name: &str) -> Option<Key> {
        match name {
            "Escape" | "Esc" => Some(Key::Escape),
            "ArrowLeft" | "Left" => Some(Key::ArrowLeft),
            "ArrowRight" | "Right" => Some(Key::ArrowRight),
            _ => None,
        }
    }

    pub fn command(self) -> Command {
        match self {
            Key::Escape => Command::Close,
            Key::ArrowLeft => Command::Prev,
            Key::ArrowRight => Command::Next,
        }
    }
}

#[derive(Debug, Default)]
struct Listeners {
    next_id: u64,
    active: BTreeSet<u64>,
}

/// Registry of live key subscriptions. Cloning shares the registry.
#[derive(Debug, Clone, Default)]
pub struct KeyboardScope {
    listeners: Rc<RefCell<Listeners>>,
}

impl KeyboardScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It stays registered until the guard is dropped.
    pub fn subscribe(&self) -> KeySubscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.active.insert(id);
        KeySubscription {
            id,
            listeners: Rc::clone(&self.listeners),
        }
    }

    /// Number of currently registered listeners.
    pub fn active(&self) -> usize {
        self.listeners.borrow().active.len()
    }
}

/// Guard for one registered key listener.
pub struct KeySubscription {
    id: u64,
    listeners: Rc<RefCell<Listeners>>,
}

impl fmt::Debug for KeySubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySubscription").field("id", &self.id).finish()
    }
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        self.listeners.borrow_mut().active.remove(&self.id);
    }
}

#[derive(Debug)]
enum State {
    Closed,
    Open(KeySubscription),
}

/// Lightbox state: visibility, image set and current index.
#[derive(Debug)]
pub struct Lightbox {
    scope: KeyboardScope,
    state: State,
    images: Vec<String>,
    index: usize,
}

impl Lightbox {
    /// A closed lightbox with an empty image set.
    pub fn new(scope: KeyboardScope) -> Self {
        Self {
            scope,
            state: State::Closed,
            images: Vec::new(),
            index: 0,
        }
    }

    /// Open (or re-open) over `images` at `start`.
    ///
    /// `start` past the end is clamped to the last image. An empty set leaves
    /// the lightbox open but not visible.
    pub fn open(&mut self, images: Vec<String>, start: usize) {
        self.index = start.min(images.len().saturating_sub(1));
        self.images = images;
        if matches!(self.state, State::Closed) {
            self.state = State::Open(self.scope.subscribe());
        }
    }

    /// Close. Images and index are kept but inert until the next `open`.
    pub fn close(&mut self) {
        self.state = State::Closed;
    }

    pub fn next(&mut self) {
        let len = self.images.len();
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    pub fn prev(&mut self) {
        let len = self.images.len();
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    /// Apply a key press. Ignored while closed.
    pub fn handle_key(&mut self, key: Key) {
        if !self.is_open() {
            return;
        }
        match key.command() {
            Command::Close => self.close(),
            Command::Prev => self.prev(),
            Command::Next => self.next(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }

    /// Open with at least one image.
    pub fn is_visible(&self) -> bool {
        self.is_open() && !self.images.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// The image on screen, if any.
    pub fn current(&self) -> Option<&str> {
        if self.is_visible() {
            self.images.get(self.index).map(String::as_str)
        } else {
            None
        }
    }
}

/// One pre-rendered overlay frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub index: usize,
    pub src: String,
    pub prev: usize,
    pub next: usize,
}

/// Frames for every image in the set, with wraparound neighbours.
pub fn frame_plan(images: &[String]) -> Vec<Frame> {
    let mut lightbox = Lightbox::new(KeyboardScope::new());
    (0..images.len())
        .map(|index| {
            lightbox.open(images.to_vec(), index);
            lightbox.next();
            let next = lightbox.index();
            lightbox.open(images.to_vec(), index);
            lightbox.prev();
            let prev = lightbox.index();
            Frame {
                index,
                src: images[index].clone(),
                prev,
                next,
            }
        })
        .collect()
}
