//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    widgets::Block,
};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::dto::CompareResponse;
use crate::application::use_cases::CompareWatchlistsUseCase;
use crate::domain::entities::HandlePair;
use crate::domain::keybinding::{self, Action as KeyAction};
use crate::domain::ports::RecommendationPort;
use crate::domain::session::{Effect, Screen, Session, SessionEvent};
use crate::infrastructure::BrowserService;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{
    CardMode, CardScreen, CardScreenState, FinalScreen, FinalScreenState, InputAction, InputScreen, LandingScreen,
    LoadingScreen,
};
use crate::presentation::widgets::{FooterBar, FooterBarStyle};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);
const NO_DETAIL_LINK: &str = "no link for this movie";

#[derive(Debug)]
enum Action {
    RecommendationsLoaded(CompareResponse),
}

enum ScreenView {
    Landing(LandingScreen),
    Input(InputScreen),
    Loading(LoadingScreen),
    Cards(CardScreenState),
    Final(FinalScreenState),
}

impl ScreenView {
    fn for_screen(screen: Screen, theme: Theme) -> Self {
        match screen {
            Screen::Landing => Self::Landing(LandingScreen::new(theme)),
            Screen::Input => Self::Input(InputScreen::new(theme)),
            Screen::Loading => Self::Loading(LoadingScreen::new(theme)),
            Screen::Recommendation | Screen::Match => Self::Cards(CardScreenState::default()),
            Screen::Final => Self::Final(FinalScreenState::default()),
        }
    }

    /// Advances animations; returns whether a redraw is needed.
    fn tick(&mut self, duration: Duration) -> bool {
        match self {
            Self::Landing(screen) => {
                screen.tick(duration);
                screen.is_animating()
            }
            Self::Loading(screen) => {
                screen.tick(duration);
                true
            }
            Self::Cards(state) => {
                let flipping = state.is_flipping();
                state.tick(duration);
                flipping
            }
            Self::Input(_) | Self::Final(_) => false,
        }
    }
}

/// Owns the session and its current screen, and drives the event loop.
pub struct App {
    running: bool,
    session: Session,
    view: ScreenView,
    compare_use_case: CompareWatchlistsUseCase,
    browser: BrowserService,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    theme: Theme,
    status: Option<String>,
}

impl App {
    /// Starts on the landing screen with an empty session.
    #[must_use]
    pub fn new(recommendation_port: Arc<dyn RecommendationPort>, theme: Theme) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let session = Session::new();
        let view = ScreenView::for_screen(session.screen(), theme);

        Self {
            running: true,
            session,
            view,
            compare_use_case: CompareWatchlistsUseCase::new(recommendation_port),
            browser: BrowserService::new(),
            action_tx,
            action_rx,
            theme,
            status: None,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.run_event_loop(terminal).await?;
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    if self.view.tick(ANIMATION_TICK_RATE) {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                Some(Ok(event)) = terminal_event => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.running = false;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if !EventHandler::is_actionable(&key) {
            return EventResult::Continue;
        }
        if EventHandler::is_force_quit_event(&key) {
            return EventResult::Exit;
        }

        self.status = None;
        let screen = self.session.screen();

        let Some(action) = keybinding::resolve(screen, &key) else {
            if let ScreenView::Input(input) = &mut self.view
                && let InputAction::Edited { field, value } = input.handle_key(key)
            {
                self.dispatch(SessionEvent::EditHandle { field, value });
            }
            return EventResult::Continue;
        };

        match action {
            KeyAction::Quit => return EventResult::Exit,
            KeyAction::Start => self.dispatch(SessionEvent::Start),
            KeyAction::Confirm => self.dispatch(SessionEvent::Confirm),
            KeyAction::NextField => {
                if let ScreenView::Input(input) = &mut self.view {
                    input.focus_next();
                }
            }
            KeyAction::PreviousField => {
                if let ScreenView::Input(input) = &mut self.view {
                    input.focus_prev();
                }
            }
            KeyAction::Skip => self.dispatch(SessionEvent::Skip),
            KeyAction::Save => self.dispatch(SessionEvent::Save),
            KeyAction::KeepSearching => self.dispatch(SessionEvent::KeepSearching),
            KeyAction::ToggleReveal => {
                self.dispatch(SessionEvent::ToggleReveal);
                if self.theme.animations
                    && self.session.has_movies()
                    && let ScreenView::Cards(state) = &mut self.view
                {
                    state.start_flip();
                }
            }
            KeyAction::OpenDetails => self.open_details(),
            KeyAction::ReturnHome => self.dispatch(SessionEvent::ReturnHome),
            KeyAction::ScrollUp => {
                if let ScreenView::Final(state) = &mut self.view {
                    state.scroll_up();
                }
            }
            KeyAction::ScrollDown => {
                if let ScreenView::Final(state) = &mut self.view {
                    state.scroll_down();
                }
            }
        }

        EventResult::Continue
    }

    fn dispatch(&mut self, event: SessionEvent) {
        let before = self.session.screen();
        let event_name = event.name();
        let effect = self.session.handle(event);
        let after = self.session.screen();

        if before != after {
            info!(from = %before, to = %after, event = event_name, "Screen transition");
            self.view = ScreenView::for_screen(after, self.theme);
        }

        if let ScreenView::Input(input) = &mut self.view {
            input.set_submittable(self.session.is_form_valid());
        }

        if let Some(Effect::BeginFetch(handles)) = effect {
            self.begin_fetch(handles);
        }
    }

    fn begin_fetch(&self, handles: HandlePair) {
        info!(handles = %handles, "Starting comparison fetch");
        let use_case = self.compare_use_case.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let response = use_case.execute(&handles).await;
            if tx.send(Action::RecommendationsLoaded(response)).is_err() {
                debug!("Comparison finished after the app shut down");
            }
        });
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::RecommendationsLoaded(response) => {
                debug!(
                    source = %response.source,
                    count = response.movies.len(),
                    "Comparison result received"
                );
                self.dispatch(SessionEvent::RecommendationsLoaded(response.movies));
            }
        }
    }

    fn open_details(&mut self) {
        let Some(movie) = self.session.current_movie() else {
            return;
        };

        match movie.openable_detail_url() {
            Some(url) => {
                if let Err(e) = self.browser.open(url) {
                    warn!(error = %e, "Could not open detail page");
                    self.status = Some(e.to_string());
                }
            }
            None => {
                debug!(title = movie.title(), "Movie has no detail link");
                self.status = Some(NO_DETAIL_LINK.to_string());
            }
        }
    }

    fn footer_info(&self) -> Option<String> {
        if let Some(status) = &self.status {
            return Some(status.clone());
        }

        match &self.session {
            Session::Recommendation(deck) | Session::Match(deck) if deck.has_movies() => Some(
                format!(
                    "{} · {}/{}",
                    deck.handles(),
                    deck.cursor() + 1,
                    deck.candidates().len()
                ),
            ),
            Session::Loading(handles) => Some(handles.to_string()),
            Session::Final(saved) => Some(format!("saved {}", saved.len())),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let screen = self.session.screen();
        let area = frame.area();

        frame.render_widget(Block::default().style(self.theme.base_style(screen)), area);

        let [main_area, footer_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        match &mut self.view {
            ScreenView::Landing(landing) => frame.render_widget(landing, main_area),
            ScreenView::Input(input) => frame.render_widget(&*input, main_area),
            ScreenView::Loading(loading) => frame.render_widget(loading, main_area),
            ScreenView::Cards(state) => {
                let mode = if screen == Screen::Match {
                    CardMode::Match
                } else {
                    CardMode::Recommendation
                };
                if let Some(deck) = self.session.deck() {
                    frame.render_stateful_widget(
                        CardScreen::new(deck, mode, &self.theme),
                        main_area,
                        state,
                    );
                }
            }
            ScreenView::Final(state) => frame.render_stateful_widget(
                FinalScreen::new(self.session.saved(), &self.theme),
                main_area,
                state,
            ),
        }

        let bindings = keybinding::keybinds_for(screen);
        let info = self.footer_info();
        frame.render_widget(
            FooterBar::new(&bindings)
                .right_info(info.as_deref())
                .style(FooterBarStyle::from_theme(&self.theme, screen)),
            footer_area,
        );
    }
}
