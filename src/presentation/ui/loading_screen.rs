use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

use crate::domain::session::Screen;
use crate::presentation::theme::Theme;

const HEADING: &str = "let's compare!";
const WOBBLE_STEP: Duration = Duration::from_millis(250);

const WOBBLE_FRAMES: [[&str; 3]; 4] = [
    [" (\\_/)       (\\_/) ", " (•.•)   +   (•.•) ", " (> <)       (> <) "],
    ["  (\\_/)     (\\_/)  ", "  (•.•)  +  (•.•)  ", " (> <)       (> <) "],
    [" (\\_/)       (\\_/) ", " (•.•)   +   (•.•) ", " (> <)       (> <) "],
    ["(\\_/)         (\\_/)", "(•.•)    +    (•.•)", " (> <)       (> <) "],
];

/// Shown while the comparison request is in flight.
pub struct LoadingScreen {
    theme: Theme,
    elapsed: Duration,
    pending_duration: Duration,
    intro_effect: Option<Effect>,
}

impl LoadingScreen {
    /// The intro fade only runs with animations on.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let intro_effect = theme
            .animations
            .then(|| fx::coalesce((500, Interpolation::CircOut)));

        Self {
            theme,
            elapsed: Duration::ZERO,
            pending_duration: Duration::ZERO,
            intro_effect,
        }
    }

    /// Advances the bunny frames and any pending effect.
    pub fn tick(&mut self, duration: Duration) {
        self.elapsed = self.elapsed.saturating_add(duration);
        self.pending_duration = self.pending_duration.saturating_add(duration);
    }

    fn frame(&self) -> usize {
        if !self.theme.animations {
            return 0;
        }
        let step = WOBBLE_STEP.as_millis().max(1);
        usize::try_from(self.elapsed.as_millis() / step).unwrap_or(0) % WOBBLE_FRAMES.len()
    }
}

impl Widget for &mut LoadingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let screen = Screen::Loading;

        let [_, heading, _, bunnies, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(Line::from(HEADING).centered())
            .style(self.theme.title_style(screen))
            .render(heading, buf);

        let lines: Vec<Line> = WOBBLE_FRAMES[self.frame()]
            .iter()
            .map(|row| Line::from(*row))
            .collect();
        Paragraph::new(Text::from(lines).centered())
            .style(self.theme.base_style(screen))
            .render(bunnies, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if let Some(effect) = &mut self.intro_effect
            && effect.process(duration.into(), buf, area).is_some()
        {
            self.intro_effect = None;
        }
    }
}
