//! Handle entry screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::session::{HandleField, Screen};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;

const HEADING: &str = "let's connect with letterboxd!";

/// Outcome of a key typed into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// The key changed nothing.
    None,
    /// `field` now holds `value`.
    Edited {
        /// Field that changed.
        field: HandleField,
        /// Its full new text.
        value: String,
    },
}

/// Two-field handle form. Navigation and submit keys are resolved by the caller.
pub struct InputScreen {
    user_input: TextInput,
    peer_input: TextInput,
    focus: HandleField,
    submittable: bool,
    theme: Theme,
}

impl InputScreen {
    /// Focus starts on the user's own handle.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let screen = Screen::Input;
        let mut user_input =
            TextInput::new("your username").colors(theme.foreground(screen), theme.accent);
        user_input.set_focused(true);
        let peer_input =
            TextInput::new("their username").colors(theme.foreground(screen), theme.accent);

        Self {
            user_input,
            peer_input,
            focus: HandleField::User,
            submittable: false,
            theme,
        }
    }

    /// Field receiving typed characters.
    #[must_use]
    pub const fn focus(&self) -> HandleField {
        self.focus
    }

    /// Current text of `field`.
    #[must_use]
    pub fn value(&self, field: HandleField) -> &str {
        self.input(field).value()
    }

    /// Mirrors the session's form validity onto the continue button.
    pub fn set_submittable(&mut self, submittable: bool) {
        self.submittable = submittable;
    }

    /// Whether the continue button is enabled.
    #[must_use]
    pub const fn is_submittable(&self) -> bool {
        self.submittable
    }

    /// Moves focus down, wrapping to the first field.
    pub fn focus_next(&mut self) {
        self.set_focus(match self.focus {
            HandleField::User => HandleField::Peer,
            HandleField::Peer => HandleField::User,
        });
    }

    /// Moves focus up, wrapping to the last field.
    pub fn focus_prev(&mut self) {
        // Two fields, so previous and next coincide.
        self.focus_next();
    }

    fn set_focus(&mut self, field: HandleField) {
        self.focus = field;
        self.user_input.set_focused(field == HandleField::User);
        self.peer_input.set_focused(field == HandleField::Peer);
    }

    const fn input(&self, field: HandleField) -> &TextInput {
        match field {
            HandleField::User => &self.user_input,
            HandleField::Peer => &self.peer_input,
        }
    }

    fn input_mut(&mut self, field: HandleField) -> &mut TextInput {
        match field {
            HandleField::User => &mut self.user_input,
            HandleField::Peer => &mut self.peer_input,
        }
    }

    /// Applies an editing key to the focused field.
    pub fn handle_key(&mut self, key: KeyEvent) -> InputAction {
        let field = self.focus;
        let before = self.value(field).to_string();
        let input = self.input_mut(field);

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                input.input_char(c);
            }
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_start(),
            KeyCode::End => input.move_end(),
            _ => return InputAction::None,
        }

        let value = self.value(field);
        if value == before {
            InputAction::None
        } else {
            InputAction::Edited {
                field,
                value: value.to_string(),
            }
        }
    }
}

impl Widget for &InputScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let screen = Screen::Input;

        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(48),
            Constraint::Fill(1),
        ])
        .areas(area);

        let [_, heading, _, user, _, peer, _, button, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(column);

        Paragraph::new(Line::from(HEADING).centered())
            .style(self.theme.title_style(screen))
            .render(heading, buf);

        (&self.user_input).render(user, buf);
        (&self.peer_input).render(peer, buf);

        let button_style = if self.submittable {
            self.theme.button_style()
        } else {
            Style::default()
                .bg(self.theme.lettuce_light)
                .fg(self.theme.lettuce_mid)
                .add_modifier(Modifier::DIM)
        };
        Paragraph::new(Line::from(Span::styled("  continue  ", button_style)).centered())
            .render(button, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> InputScreen {
        InputScreen::new(Theme::default())
    }

    #[test]
    fn test_initial_focus_is_user() {
        let screen = screen();
        assert_eq!(screen.focus(), HandleField::User);
        assert!(!screen.is_submittable());
    }

    #[test]
    fn test_typing_reports_edit() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Char('a')));
        let action = screen.handle_key(key(KeyCode::Char('l')));

        assert_eq!(
            action,
            InputAction::Edited {
                field: HandleField::User,
                value: "al".to_string()
            }
        );
    }

    #[test]
    fn test_cursor_moves_are_not_edits() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Char('a')));
        assert_eq!(screen.handle_key(key(KeyCode::Left)), InputAction::None);
        assert_eq!(screen.handle_key(key(KeyCode::Backspace)), InputAction::None);
    }

    #[test]
    fn test_focus_switches_target_field() {
        let mut screen = screen();
        screen.focus_next();
        screen.handle_key(key(KeyCode::Char('b')));

        assert_eq!(screen.value(HandleField::User), "");
        assert_eq!(screen.value(HandleField::Peer), "b");

        screen.focus_prev();
        assert_eq!(screen.focus(), HandleField::User);
    }

    #[test]
    fn test_control_chars_are_ignored() {
        let mut screen = screen();
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(screen.handle_key(ctrl_a), InputAction::None);
        assert_eq!(screen.value(HandleField::User), "");
    }

    #[test]
    fn test_render_shows_labels() {
        let screen = screen();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        (&screen).render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("your username"));
        assert!(text.contains("their username"));
        assert!(text.contains("continue"));
    }
}
