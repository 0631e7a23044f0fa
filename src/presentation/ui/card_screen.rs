//! Recommendation and match screens, which share the movie card.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

use crate::domain::session::{Deck, Screen};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{CARD_HEIGHT, MovieCard};

const MATCH_HEADING: &str = "it's a match!";
const EMPTY_HEADING: &str = "No common movies!";
const EMPTY_HINT: &str = "Try comparing with another friend.";

/// Which of the two card screens to draw.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    Recommendation,
    Match,
}

impl CardMode {
    const fn screen(self) -> Screen {
        match self {
            Self::Recommendation => Screen::Recommendation,
            Self::Match => Screen::Match,
        }
    }
}

/// Animation state carried across frames.
#[derive(Default)]
pub struct CardScreenState {
    flip_effect: Option<Effect>,
    pending_duration: Duration,
}

impl CardScreenState {
    /// Starts the flip animation for the next frames.
    pub fn start_flip(&mut self) {
        self.flip_effect = Some(fx::coalesce((300, Interpolation::QuadOut)));
        self.pending_duration = Duration::ZERO;
    }

    /// Queues elapsed time for the next render.
    pub fn tick(&mut self, duration: Duration) {
        if self.flip_effect.is_some() {
            self.pending_duration = self.pending_duration.saturating_add(duration);
        }
    }

    /// Whether the flip still needs frames.
    #[must_use]
    pub const fn is_flipping(&self) -> bool {
        self.flip_effect.is_some()
    }
}

/// Heading, movie card and controls for the current deck position.
pub struct CardScreen<'a> {
    deck: &'a Deck,
    mode: CardMode,
    theme: &'a Theme,
}

impl<'a> CardScreen<'a> {
    /// Draws `deck`'s current movie in the given mode.
    #[must_use]
    pub const fn new(deck: &'a Deck, mode: CardMode, theme: &'a Theme) -> Self {
        Self { deck, mode, theme }
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let screen = self.mode.screen();
        let [_, heading, _, hint, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(Line::from(EMPTY_HEADING).centered())
            .style(self.theme.title_style(screen))
            .render(heading, buf);
        Paragraph::new(Line::from(EMPTY_HINT).centered())
            .style(self.theme.dimmed_style(screen))
            .render(hint, buf);
    }

    fn controls(&self) -> Line<'static> {
        let screen = self.mode.screen();
        let line = match self.mode {
            CardMode::Recommendation => Line::from(vec![
                Span::styled(" ✕ skip ", self.theme.base_style(screen)),
                Span::raw("      "),
                Span::styled(" ♥ save ", self.theme.button_style()),
            ]),
            CardMode::Match => Line::from(Span::styled(
                "  keep searching?  ",
                self.theme.button_style(),
            )),
        };
        line.centered()
    }
}

impl StatefulWidget for CardScreen<'_> {
    type State = CardScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let Some(movie) = self.deck.current_movie() else {
            self.render_empty(area, buf);
            return;
        };

        let screen = self.mode.screen();
        let [_, heading, _, card_row, _, controls, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        let heading_line = match self.mode {
            CardMode::Recommendation => Line::from(Span::styled(
                movie.title().to_string(),
                self.theme
                    .title_style(screen)
                    .add_modifier(Modifier::UNDERLINED),
            )),
            CardMode::Match => {
                Line::from(Span::styled(MATCH_HEADING, self.theme.title_style(screen)))
            }
        };
        Paragraph::new(heading_line.centered())
            .style(Style::default().bg(self.theme.background(screen)))
            .render(heading, buf);

        let card_area = MovieCard::area_within(card_row);
        MovieCard::new(movie, self.deck.is_revealed(), self.theme).render(card_area, buf);

        Paragraph::new(self.controls()).render(controls, buf);

        let duration = state.pending_duration;
        state.pending_duration = Duration::ZERO;
        if let Some(effect) = &mut state.flip_effect
            && effect.process(duration.into(), buf, card_area).is_some()
        {
            state.flip_effect = None;
        }
    }
}
