use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::domain::session::Screen;
use crate::presentation::theme::Theme;

const HEADING: &str = "here are your matches!";
const EMPTY_MESSAGE: &str = "No movies saved this session";
const SEPARATOR: &str = "- - - - - - - - - - - -";

/// Scroll position of the saved list, in rows.
#[derive(Debug, Default)]
pub struct FinalScreenState {
    offset: u16,
}

impl FinalScreenState {
    /// First list row shown.
    #[must_use]
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    /// Stops at the top.
    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// Clamped to the list length on the next render.
    pub fn scroll_down(&mut self) {
        self.offset = self.offset.saturating_add(1);
    }
}

/// Lists every title saved during the session.
pub struct FinalScreen<'a> {
    saved: &'a [String],
    theme: &'a Theme,
}

impl<'a> FinalScreen<'a> {
    /// Builds the list from the session's saved titles.
    #[must_use]
    pub const fn new(saved: &'a [String], theme: &'a Theme) -> Self {
        Self { saved, theme }
    }

    fn list_lines(&self) -> Vec<Line<'a>> {
        let screen = Screen::Final;
        if self.saved.is_empty() {
            return vec![Line::from(Span::styled(
                EMPTY_MESSAGE,
                self.theme.dimmed_style(screen),
            ))];
        }

        let mut lines = Vec::with_capacity(self.saved.len() * 2);
        for (i, title) in self.saved.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(Span::styled(
                    SEPARATOR,
                    self.theme.dimmed_style(screen),
                )));
            }
            lines.push(Line::from(title.as_str()));
        }
        lines
    }
}

impl StatefulWidget for FinalScreen<'_> {
    type State = FinalScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let screen = Screen::Final;
        let lines = self.list_lines();
        let list_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

        let [_, heading, _, list, _, button, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Max(list_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        state.offset = state.offset.min(list_height.saturating_sub(list.height));

        Paragraph::new(Line::from(HEADING).centered())
            .style(self.theme.title_style(screen))
            .render(heading, buf);

        Paragraph::new(Text::from(lines).centered())
            .style(self.theme.base_style(screen))
            .scroll((state.offset, 0))
            .render(list, buf);

        Paragraph::new(
            Line::from(Span::styled("  return to home  ", self.theme.button_style())).centered(),
        )
        .render(button, buf);
    }
}
