use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

use crate::domain::session::Screen;
use crate::presentation::theme::Theme;

pub(super) const TITLE: &str = "lettuce watch!";

pub(super) const BUNNIES: [&str; 3] = [
    " (\\_/)   (\\_/) ",
    " (•.•)   (•.•) ",
    " (> <)   (> <) ",
];

/// Title page with the bunnies and the "go!" button.
pub struct LandingScreen {
    theme: Theme,
    intro_effect: Option<Effect>,
    pending_duration: Duration,
}

impl LandingScreen {
    /// Builds the page, with an intro effect when animations are on.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let intro_effect = theme
            .animations
            .then(|| fx::coalesce((800, Interpolation::CircOut)));

        Self {
            theme,
            intro_effect,
            pending_duration: Duration::ZERO,
        }
    }

    /// Queues elapsed time for the intro effect.
    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);
    }

    /// Whether an intro effect still needs frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.intro_effect.is_some()
    }
}

impl Widget for &mut LandingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let screen = Screen::Landing;
        let [_, title_area, _, bunnies_area, _, button_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(Line::from(TITLE).centered())
            .style(self.theme.title_style(screen))
            .render(title_area, buf);

        let bunnies: Vec<Line> = BUNNIES.iter().map(|row| Line::from(*row)).collect();
        Paragraph::new(Text::from(bunnies).centered())
            .style(self.theme.base_style(screen))
            .render(bunnies_area, buf);

        Paragraph::new(Line::from(Span::styled("  go!  ", self.theme.button_style())).centered())
            .style(Style::default())
            .render(button_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if let Some(effect) = &mut self.intro_effect {
            let overflow = effect.process(duration.into(), buf, area);
            if overflow.is_some() {
                self.intro_effect = None;
            }
        }
    }
}
