//! Two-sided movie card: poster on the front, synopsis on the back.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::domain::entities::{Movie, Poster};
use crate::presentation::theme::Theme;

/// Card width in cells.
pub const CARD_WIDTH: u16 = 32;
/// Card height in cells.
pub const CARD_HEIGHT: u16 = 18;

/// A bordered card showing either the poster or the synopsis.
pub struct MovieCard<'a> {
    movie: &'a Movie,
    revealed: bool,
    theme: &'a Theme,
}

impl<'a> MovieCard<'a> {
    /// `revealed` selects the synopsis side.
    #[must_use]
    pub const fn new(movie: &'a Movie, revealed: bool, theme: &'a Theme) -> Self {
        Self {
            movie,
            revealed,
            theme,
        }
    }

    /// Centers a card-sized rect inside `area`.
    #[must_use]
    pub fn area_within(area: Rect) -> Rect {
        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(CARD_WIDTH),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, card, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(column);
        card
    }

    fn render_front(&self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.lettuce_dark))
            .style(Style::default().bg(theme.lettuce_light).fg(theme.lettuce_darkest));

        let inner = block.inner(area);
        block.render(area, buf);

        let [_, art, _, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let (art_text, caption) = match self.movie.poster() {
            Poster::Remote(url) => (
                Text::from(vec![
                    Line::from("▞▚▞▚▞▚▞▚▞▚"),
                    Line::from(""),
                    Line::from(Span::styled(
                        self.movie.title().to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from("▚▞▚▞▚▞▚▞▚▞"),
                ]),
                url.to_string(),
            ),
            Poster::Placeholder { caption } => (
                Text::from(vec![
                    Line::from("┌╌╌╌╌╌╌╌╌┐"),
                    Line::from("╎   ??   ╎"),
                    Line::from("└╌╌╌╌╌╌╌╌┘"),
                    Line::from(""),
                    Line::from(Span::styled(
                        caption.clone(),
                        Style::default().add_modifier(Modifier::ITALIC),
                    )),
                ]),
                caption,
            ),
        };

        Paragraph::new(art_text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(art, buf);

        Paragraph::new(caption)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::DIM))
            .render(footer, buf);
    }

    fn render_back(&self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.lettuce_mid))
            .style(Style::default().bg(theme.lettuce_dark).fg(theme.cream));

        let inner = block.inner(area).inner(ratatui::layout::Margin::new(1, 1));
        block.render(area, buf);

        let synopsis = if self.movie.synopsis().trim().is_empty() {
            "No synopsis available."
        } else {
            self.movie.synopsis()
        };

        Paragraph::new(synopsis)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

impl Widget for MovieCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        if self.revealed {
            self.render_back(area, buf);
        } else {
            self.render_front(area, buf);
        }
    }
}
