/// Events produced by the document, targeted by element ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press, targeted at the focused element (`None` = body).
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Element gained focus.
    Focus { target: String },
    /// Element lost focus. `new_target` is where focus is going, if anywhere.
    Blur {
        target: String,
        new_target: Option<String>,
    },
}

impl Event {
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Key { target, .. } => target.as_deref(),
            Event::Focus { target } | Event::Blur { target, .. } => Some(target),
        }
    }
}

/// Keys the overlay layer distinguishes. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    /// Shift+Tab as reported by terminals that fold the modifier in.
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    pub fn none(&self) -> bool {
        !(self.shift || self.ctrl || self.alt)
    }
}

/// Whether a key press moves focus backwards through the tab order.
pub fn is_backward_tab(key: Key, modifiers: Modifiers) -> bool {
    match key {
        Key::BackTab => true,
        Key::Tab => modifiers.shift,
        _ => false,
    }
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.intersects(KeyModifiers::SHIFT),
            ctrl: mods.intersects(KeyModifiers::CONTROL),
            alt: mods.intersects(KeyModifiers::ALT),
        }
    }
}

/// Convert a crossterm key event into the key and modifiers the manager
/// dispatches.
pub fn from_key_event(event: &crossterm::event::KeyEvent) -> (Key, Modifiers) {
    (Key::from(event.code), Modifiers::from(event.modifiers))
}
