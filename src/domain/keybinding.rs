//! Per-screen key bindings shared by the event loop and the footer bar.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

use crate::domain::session::Screen;

/// What a bound key asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Leave the app from any screen.
    Quit,

    // Landing / Final
    /// Open the handle form.
    Start,
    /// Back to the landing page, dropping the session.
    ReturnHome,
    /// Scroll the saved list.
    ScrollUp,
    /// Scroll the saved list.
    ScrollDown,

    // Input form
    /// Submit both handles.
    Confirm,
    /// Move focus to the next field.
    NextField,
    /// Move focus to the previous field.
    PreviousField,

    // Cards
    /// Pass on the current recommendation.
    Skip,
    /// Save the current recommendation.
    Save,
    /// Leave the match screen for the next recommendation.
    KeepSearching,
    /// Flip the card between poster and synopsis.
    ToggleReveal,
    /// Open the movie's page in the browser.
    OpenDetails,
}

/// A key bound to an action, with the label shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    /// Code and modifiers to match.
    pub key: KeyEvent,
    /// Action fired on a match.
    pub action: Action,
    /// Footer text.
    pub label: Cow<'static, str>,
    /// Alternate bindings stay out of the footer.
    pub visible_in_bar: bool,
}

impl Keybind {
    /// A binding shown in the footer.
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    /// Keeps the binding working but drops it from the footer.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    /// Compares code and modifiers only; kind and state are ignored.
    #[must_use]
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.key.code == key.code && self.key.modifiers == key.modifiers
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Returns the bindings active on `screen`, in footer order.
#[must_use]
pub fn keybinds_for(screen: Screen) -> Vec<Keybind> {
    let quit = Keybind::new(key(KeyCode::Char('q')), Action::Quit, "Quit");
    let quit_esc = Keybind::new(key(KeyCode::Esc), Action::Quit, "Quit").hidden();

    match screen {
        Screen::Landing => vec![
            Keybind::new(key(KeyCode::Enter), Action::Start, "Go!"),
            quit,
            quit_esc,
        ],
        Screen::Input => vec![
            Keybind::new(key(KeyCode::Enter), Action::Confirm, "Continue"),
            Keybind::new(key(KeyCode::Tab), Action::NextField, "Next Field"),
            Keybind::new(key(KeyCode::Down), Action::NextField, "Next Field").hidden(),
            Keybind::new(
                KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
                Action::PreviousField,
                "Previous Field",
            )
            .hidden(),
            Keybind::new(key(KeyCode::BackTab), Action::PreviousField, "Previous Field")
                .hidden(),
            Keybind::new(key(KeyCode::Up), Action::PreviousField, "Previous Field").hidden(),
            Keybind::new(key(KeyCode::Esc), Action::Quit, "Quit"),
        ],
        Screen::Loading => vec![quit, quit_esc],
        Screen::Recommendation => vec![
            Keybind::new(key(KeyCode::Left), Action::Skip, "Skip"),
            Keybind::new(key(KeyCode::Char('x')), Action::Skip, "Skip").hidden(),
            Keybind::new(key(KeyCode::Right), Action::Save, "Save"),
            Keybind::new(key(KeyCode::Char('s')), Action::Save, "Save").hidden(),
            Keybind::new(key(KeyCode::Char(' ')), Action::ToggleReveal, "Flip"),
            Keybind::new(key(KeyCode::Char('o')), Action::OpenDetails, "Open"),
            quit,
            quit_esc,
        ],
        Screen::Match => vec![
            Keybind::new(key(KeyCode::Enter), Action::KeepSearching, "Keep Searching?"),
            Keybind::new(key(KeyCode::Char('k')), Action::KeepSearching, "Keep Searching?")
                .hidden(),
            Keybind::new(key(KeyCode::Char(' ')), Action::ToggleReveal, "Flip"),
            Keybind::new(key(KeyCode::Char('o')), Action::OpenDetails, "Open"),
            quit,
            quit_esc,
        ],
        Screen::Final => vec![
            Keybind::new(key(KeyCode::Enter), Action::ReturnHome, "Return to Home"),
            Keybind::new(key(KeyCode::Char('h')), Action::ReturnHome, "Return to Home").hidden(),
            Keybind::new(key(KeyCode::Up), Action::ScrollUp, "Scroll Up").hidden(),
            Keybind::new(key(KeyCode::Char('k')), Action::ScrollUp, "Scroll Up").hidden(),
            Keybind::new(key(KeyCode::Down), Action::ScrollDown, "Scroll"),
            Keybind::new(key(KeyCode::Char('j')), Action::ScrollDown, "Scroll").hidden(),
            quit,
            quit_esc,
        ],
    }
}

/// Resolves a key press to the action bound on `screen`.
#[must_use]
pub fn resolve(screen: Screen, key: &KeyEvent) -> Option<Action> {
    keybinds_for(screen)
        .into_iter()
        .find(|bind| bind.matches(key))
        .map(|bind| bind.action)
}
