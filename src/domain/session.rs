//! Swipe-and-match session state machine.
//!
//! A [`Session`] is one value per screen, each variant carrying only the data
//! that screen can use. Every transition consumes the old state and returns
//! the new one, so entry actions (flipping the card face down, starting the
//! cursor at the first candidate) happen inside the transition that enters
//! the screen.

use std::fmt;

use tracing::debug;

use crate::domain::entities::{HandlePair, Movie};

/// Screen currently shown, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Title screen.
    Landing,
    /// Handle entry form.
    Input,
    /// Waiting for the comparison service.
    Loading,
    /// Browsing candidates one card at a time.
    Recommendation,
    /// A candidate was just saved.
    Match,
    /// Summary of saved titles.
    Final,
}

impl Screen {
    /// Returns lowercase screen name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Input => "input",
            Self::Loading => "loading",
            Self::Recommendation => "recommendation",
            Self::Match => "match",
            Self::Final => "final",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which handle an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleField {
    /// "your username"
    User,
    /// "their username"
    Peer,
}

/// Handles as typed, before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandleForm {
    user_handle: String,
    peer_handle: String,
}

impl HandleForm {
    /// Returns the value of one field.
    #[must_use]
    pub fn get(&self, field: HandleField) -> &str {
        match field {
            HandleField::User => &self.user_handle,
            HandleField::Peer => &self.peer_handle,
        }
    }

    /// Replaces the value of one field.
    pub fn set(&mut self, field: HandleField, value: impl Into<String>) {
        match field {
            HandleField::User => self.user_handle = value.into(),
            HandleField::Peer => self.peer_handle = value.into(),
        }
    }

    /// Both handles are non-blank after trimming.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.submit().is_some()
    }

    fn submit(&self) -> Option<HandlePair> {
        HandlePair::new(&self.user_handle, &self.peer_handle)
    }
}

/// Candidates being browsed, with the cursor and everything saved so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    handles: HandlePair,
    candidates: Vec<Movie>,
    cursor: usize,
    saved: Vec<String>,
    revealed: bool,
}

impl Deck {
    fn new(handles: HandlePair, candidates: Vec<Movie>) -> Self {
        Self {
            handles,
            candidates,
            cursor: 0,
            saved: Vec::new(),
            revealed: false,
        }
    }

    /// Returns the handles that produced this deck.
    #[must_use]
    pub fn handles(&self) -> &HandlePair {
        &self.handles
    }

    /// Returns all candidates in service order.
    #[must_use]
    pub fn candidates(&self) -> &[Movie] {
        &self.candidates
    }

    /// Returns the index of the presented candidate.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns saved titles in the order they were saved.
    #[must_use]
    pub fn saved(&self) -> &[String] {
        &self.saved
    }

    /// Whether the card shows its synopsis side.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// False when the comparison found nothing in common.
    #[must_use]
    pub fn has_movies(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// True when the cursor is on the final candidate, or there are none.
    #[must_use]
    pub fn is_last_movie(&self) -> bool {
        self.cursor + 1 >= self.candidates.len()
    }

    /// Returns the presented candidate.
    #[must_use]
    pub fn current_movie(&self) -> Option<&Movie> {
        self.candidates.get(self.cursor)
    }

    fn advance(mut self) -> Session {
        self.revealed = false;
        if self.is_last_movie() {
            Session::Final(self.saved)
        } else {
            self.cursor += 1;
            Session::Recommendation(self)
        }
    }

    fn save_current(mut self) -> Session {
        let Some(title) = self.current_movie().map(|movie| movie.title().to_string()) else {
            // Nothing on screen to save; behaves like a skip.
            return self.advance();
        };

        self.revealed = false;
        self.saved.push(title);
        Session::Match(self)
    }

    fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }
}

/// Input to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Leave the landing screen.
    Start,
    /// A handle field changed.
    EditHandle {
        /// Field that changed.
        field: HandleField,
        /// Full new value.
        value: String,
    },
    /// Submit the handle form.
    Confirm,
    /// The comparison request finished; failures arrive as an empty list.
    RecommendationsLoaded(Vec<Movie>),
    /// Pass on the presented candidate.
    Skip,
    /// Save the presented candidate.
    Save,
    /// Continue browsing after a match.
    KeepSearching,
    /// Flip the card.
    ToggleReveal,
    /// Leave the final screen and start over.
    ReturnHome,
}

impl SessionEvent {
    /// Returns a short event name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::EditHandle { .. } => "edit_handle",
            Self::Confirm => "confirm",
            Self::RecommendationsLoaded(_) => "recommendations_loaded",
            Self::Skip => "skip",
            Self::Save => "save",
            Self::KeepSearching => "keep_searching",
            Self::ToggleReveal => "toggle_reveal",
            Self::ReturnHome => "return_home",
        }
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the comparison service for common movies.
    BeginFetch(HandlePair),
}

/// The whole client session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// Title screen; nothing entered yet.
    #[default]
    Landing,
    /// Typing handles.
    Input(HandleForm),
    /// Request in flight for these handles.
    Loading(HandlePair),
    /// Browsing candidates.
    Recommendation(Deck),
    /// Just saved the candidate under the cursor.
    Match(Deck),
    /// Session over; saved titles.
    Final(Vec<String>),
}

impl Session {
    /// Creates a session on the landing screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current screen.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        match self {
            Self::Landing => Screen::Landing,
            Self::Input(_) => Screen::Input,
            Self::Loading(_) => Screen::Loading,
            Self::Recommendation(_) => Screen::Recommendation,
            Self::Match(_) => Screen::Match,
            Self::Final(_) => Screen::Final,
        }
    }

    /// Applies an event in place and returns the requested side effect, if any.
    pub fn handle(&mut self, event: SessionEvent) -> Option<Effect> {
        let (next, effect) = std::mem::take(self).transition(event);
        *self = next;
        effect
    }

    /// Consumes the session and returns the state after `event`.
    ///
    /// Events that do not apply to the current screen leave it unchanged.
    #[must_use]
    pub fn transition(self, event: SessionEvent) -> (Self, Option<Effect>) {
        match (self, event) {
            (Self::Landing, SessionEvent::Start) => (Self::Input(HandleForm::default()), None),

            (Self::Input(mut form), SessionEvent::EditHandle { field, value }) => {
                form.set(field, value);
                (Self::Input(form), None)
            }
            (Self::Input(form), SessionEvent::Confirm) => match form.submit() {
                Some(handles) => (
                    Self::Loading(handles.clone()),
                    Some(Effect::BeginFetch(handles)),
                ),
                None => {
                    debug!("Confirm blocked, form incomplete");
                    (Self::Input(form), None)
                }
            },

            (Self::Loading(handles), SessionEvent::RecommendationsLoaded(movies)) => {
                (Self::Recommendation(Deck::new(handles, movies)), None)
            }

            (Self::Recommendation(deck), SessionEvent::Skip) => (deck.advance(), None),
            (Self::Recommendation(deck), SessionEvent::Save) => (deck.save_current(), None),
            (Self::Match(deck), SessionEvent::KeepSearching) => (deck.advance(), None),

            (Self::Recommendation(mut deck), SessionEvent::ToggleReveal) => {
                deck.toggle_reveal();
                (Self::Recommendation(deck), None)
            }
            (Self::Match(mut deck), SessionEvent::ToggleReveal) => {
                deck.toggle_reveal();
                (Self::Match(deck), None)
            }

            (Self::Final(_), SessionEvent::ReturnHome) => (Self::Landing, None),

            (state, event) => {
                debug!(
                    screen = %state.screen(),
                    event = event.name(),
                    "Event ignored on this screen"
                );
                (state, None)
            }
        }
    }

    /// Returns the handle form while on the input screen.
    #[must_use]
    pub const fn form(&self) -> Option<&HandleForm> {
        match self {
            Self::Input(form) => Some(form),
            _ => None,
        }
    }

    /// Returns the deck on recommendation and match screens.
    #[must_use]
    pub const fn deck(&self) -> Option<&Deck> {
        match self {
            Self::Recommendation(deck) | Self::Match(deck) => Some(deck),
            _ => None,
        }
    }

    /// Returns the titles saved so far.
    #[must_use]
    pub fn saved(&self) -> &[String] {
        match self {
            Self::Recommendation(deck) | Self::Match(deck) => deck.saved(),
            Self::Final(saved) => saved,
            _ => &[],
        }
    }

    /// False outside the input screen.
    #[must_use]
    pub fn is_form_valid(&self) -> bool {
        self.form().is_some_and(HandleForm::is_valid)
    }

    /// False when there is no deck.
    #[must_use]
    pub fn has_movies(&self) -> bool {
        self.deck().is_some_and(Deck::has_movies)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_last_movie(&self) -> bool {
        self.deck().is_some_and(Deck::is_last_movie)
    }

    /// Movie under the deck cursor, if any.
    #[must_use]
    pub fn current_movie(&self) -> Option<&Movie> {
        self.deck().and_then(Deck::current_movie)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.deck().is_some_and(Deck::is_revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movies(count: usize) -> Vec<Movie> {
        (1..=count)
            .map(|i| {
                Movie::new(
                    format!("Movie {i}"),
                    format!("Synopsis {i}"),
                    format!("https://posters.test/{i}.jpg"),
                    format!("https://letterboxd.com/film/movie-{i}/"),
                )
            })
            .collect()
    }

    fn loading_session() -> Session {
        let mut session = Session::new();
        session.handle(SessionEvent::Start);
        session.handle(SessionEvent::EditHandle {
            field: HandleField::User,
            value: "alice".to_string(),
        });
        session.handle(SessionEvent::EditHandle {
            field: HandleField::Peer,
            value: "bob".to_string(),
        });
        session.handle(SessionEvent::Confirm);
        session
    }

    fn browsing(count: usize) -> Session {
        let mut session = loading_session();
        session.handle(SessionEvent::RecommendationsLoaded(movies(count)));
        session
    }

    fn assert_cursor_in_bounds(session: &Session) {
        if let Some(deck) = session.deck() {
            assert!(deck.cursor() <= deck.candidates().len());
        }
    }

    #[test]
    fn test_starts_on_landing() {
        let session = Session::new();
        assert_eq!(session.screen(), Screen::Landing);
        assert!(session.saved().is_empty());
    }

    #[test]
    fn test_start_opens_empty_form() {
        let mut session = Session::new();
        assert_eq!(session.handle(SessionEvent::Start), None);
        assert_eq!(session.screen(), Screen::Input);
        assert!(!session.is_form_valid());
    }

    #[test]
    fn test_confirm_blocked_for_blank_handles() {
        let mut session = Session::new();
        session.handle(SessionEvent::Start);
        session.handle(SessionEvent::EditHandle {
            field: HandleField::User,
            value: "alice".to_string(),
        });
        session.handle(SessionEvent::EditHandle {
            field: HandleField::Peer,
            value: "   ".to_string(),
        });

        assert!(!session.is_form_valid());
        assert_eq!(session.handle(SessionEvent::Confirm), None);
        assert_eq!(session.screen(), Screen::Input);
    }

    #[test]
    fn test_confirm_begins_fetch_with_trimmed_handles() {
        let mut session = Session::new();
        session.handle(SessionEvent::Start);
        session.handle(SessionEvent::EditHandle {
            field: HandleField::User,
            value: " alice ".to_string(),
        });
        session.handle(SessionEvent::EditHandle {
            field: HandleField::Peer,
            value: "bob".to_string(),
        });
        assert!(session.is_form_valid());

        let effect = session.handle(SessionEvent::Confirm);

        let expected = HandlePair::new("alice", "bob").unwrap();
        assert_eq!(effect, Some(Effect::BeginFetch(expected)));
        assert_eq!(session.screen(), Screen::Loading);
    }

    #[test]
    fn test_loaded_recommendations_start_at_first_card() {
        let session = browsing(3);
        assert_eq!(session.screen(), Screen::Recommendation);
        assert_eq!(session.deck().unwrap().cursor(), 0);
        assert!(!session.is_revealed());
        assert_eq!(session.current_movie().unwrap().title(), "Movie 1");
    }

    #[test]
    fn test_empty_result_shows_recommendation_without_movies() {
        let session = browsing(0);
        assert_eq!(session.screen(), Screen::Recommendation);
        assert!(!session.has_movies());
        assert!(session.is_last_movie());
        assert!(session.current_movie().is_none());
    }

    #[test]
    fn test_skip_advances_cursor_and_hides_card() {
        let mut session = browsing(3);
        session.handle(SessionEvent::ToggleReveal);
        assert!(session.is_revealed());

        session.handle(SessionEvent::Skip);

        assert_eq!(session.screen(), Screen::Recommendation);
        assert_eq!(session.deck().unwrap().cursor(), 1);
        assert!(!session.is_revealed());
    }

    #[test]
    fn test_skip_on_last_movie_finishes() {
        let mut session = browsing(2);
        session.handle(SessionEvent::Skip);
        assert!(session.is_last_movie());

        session.handle(SessionEvent::Skip);

        assert_eq!(session.screen(), Screen::Final);
        assert!(session.saved().is_empty());
    }

    #[test]
    fn test_save_appends_one_title_and_matches() {
        let mut session = browsing(3);
        session.handle(SessionEvent::ToggleReveal);

        session.handle(SessionEvent::Save);

        assert_eq!(session.screen(), Screen::Match);
        assert_eq!(session.saved(), ["Movie 1".to_string()]);
        assert!(!session.is_revealed());
        assert_eq!(session.current_movie().unwrap().title(), "Movie 1");
    }

    #[test]
    fn test_save_on_last_movie_still_matches() {
        let mut session = browsing(1);
        assert!(session.is_last_movie());

        session.handle(SessionEvent::Save);

        assert_eq!(session.screen(), Screen::Match);
        assert_eq!(session.saved().len(), 1);
    }

    #[test]
    fn test_keep_searching_returns_to_next_card() {
        let mut session = browsing(3);
        session.handle(SessionEvent::Save);
        session.handle(SessionEvent::ToggleReveal);

        session.handle(SessionEvent::KeepSearching);

        assert_eq!(session.screen(), Screen::Recommendation);
        assert_eq!(session.deck().unwrap().cursor(), 1);
        assert!(!session.is_revealed());
        assert_eq!(session.saved(), ["Movie 1".to_string()]);
    }

    #[test]
    fn test_skip_skip_save_then_keep_searching_finishes() {
        let mut session = browsing(3);
        session.handle(SessionEvent::Skip);
        session.handle(SessionEvent::Skip);
        session.handle(SessionEvent::Save);

        assert_eq!(session.screen(), Screen::Match);
        assert_eq!(session.saved(), ["Movie 3".to_string()]);

        session.handle(SessionEvent::KeepSearching);

        assert_eq!(session.screen(), Screen::Final);
        assert_eq!(session, Session::Final(vec!["Movie 3".to_string()]));
    }

    #[test]
    fn test_decisions_on_empty_result_do_not_panic() {
        let mut session = browsing(0);
        session.handle(SessionEvent::ToggleReveal);
        session.handle(SessionEvent::KeepSearching);
        assert_eq!(session.screen(), Screen::Recommendation);

        session.handle(SessionEvent::Save);

        assert_eq!(session.screen(), Screen::Final);
        assert!(session.saved().is_empty());

        let mut session = browsing(0);
        session.handle(SessionEvent::Skip);
        assert_eq!(session.screen(), Screen::Final);
    }

    #[test]
    fn test_toggle_reveal_flips_back_and_forth() {
        let mut session = browsing(2);
        session.handle(SessionEvent::ToggleReveal);
        assert!(session.is_revealed());
        session.handle(SessionEvent::ToggleReveal);
        assert!(!session.is_revealed());
    }

    #[test]
    fn test_return_home_resets_everything() {
        let mut session = browsing(2);
        session.handle(SessionEvent::Save);
        session.handle(SessionEvent::KeepSearching);
        session.handle(SessionEvent::Save);
        session.handle(SessionEvent::KeepSearching);
        assert_eq!(session.screen(), Screen::Final);
        assert_eq!(session.saved().len(), 2);

        session.handle(SessionEvent::ReturnHome);

        assert_eq!(session, Session::Landing);
        assert!(session.saved().is_empty());
        assert!(session.deck().is_none());

        session.handle(SessionEvent::Start);
        let form = session.form().unwrap();
        assert_eq!(form.get(HandleField::User), "");
        assert_eq!(form.get(HandleField::Peer), "");
    }

    #[test]
    fn test_new_fetch_after_return_home_starts_at_zero() {
        let mut session = browsing(3);
        session.handle(SessionEvent::Skip);
        session.handle(SessionEvent::Skip);
        session.handle(SessionEvent::Skip);
        session.handle(SessionEvent::ReturnHome);

        let mut session_again = loading_session();
        session_again.handle(SessionEvent::RecommendationsLoaded(movies(2)));

        assert_eq!(session, Session::Landing);
        assert_eq!(session_again.deck().unwrap().cursor(), 0);
        assert!(session_again.saved().is_empty());
    }

    #[test]
    fn test_unrelated_events_are_ignored() {
        let mut session = Session::new();
        session.handle(SessionEvent::Skip);
        session.handle(SessionEvent::ReturnHome);
        session.handle(SessionEvent::RecommendationsLoaded(movies(2)));
        assert_eq!(session, Session::Landing);

        let mut session = loading_session();
        session.handle(SessionEvent::Skip);
        session.handle(SessionEvent::Confirm);
        assert_eq!(session.screen(), Screen::Loading);

        let mut session = browsing(2);
        session.handle(SessionEvent::KeepSearching);
        session.handle(SessionEvent::ReturnHome);
        assert_eq!(session.screen(), Screen::Recommendation);
        assert_eq!(session.deck().unwrap().cursor(), 0);
    }

    #[test]
    fn test_cursor_never_exceeds_candidates() {
        let script = [
            SessionEvent::Skip,
            SessionEvent::Save,
            SessionEvent::ToggleReveal,
            SessionEvent::KeepSearching,
            SessionEvent::Save,
            SessionEvent::Skip,
            SessionEvent::KeepSearching,
            SessionEvent::Skip,
            SessionEvent::Skip,
        ];

        for count in 0..5 {
            let mut session = browsing(count);
            for event in script.clone() {
                session.handle(event);
                assert_cursor_in_bounds(&session);
                if let Some(deck) = session.deck() {
                    assert_eq!(
                        deck.is_last_movie(),
                        deck.cursor() + 1 >= deck.candidates().len()
                    );
                }
            }
        }
    }

    #[test]
    fn test_screen_names() {
        assert_eq!(Screen::Recommendation.to_string(), "recommendation");
        assert_eq!(Screen::Final.name(), "final");
    }
}
