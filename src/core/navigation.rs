use rand::Rng;

use super::{
    errors::TrainerError,
    models::{
        Deck,
        WordEntry,
    },
};

/// Oldest visits are dropped once the history grows past this.
const HISTORY_LIMIT: usize = 50;

/// Display and window preferences. `review_days` is captured for the
/// settings dialog but does not drive any scheduling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub show_meaning: bool,
    pub review_days: u32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { show_meaning: true, review_days: 7, window_width: 350.0, window_height: 250.0 }
    }
}

/// A partial preferences change; `None` fields are left untouched. Value
/// ranges are enforced by the settings modal's widgets, not here.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferencesUpdate {
    pub show_meaning: Option<bool>,
    pub review_days: Option<u32>,
    pub window_width: Option<f32>,
    pub window_height: Option<f32>,
}

/// Owns the loaded deck, the current position and a bounded trail of
/// visited indices so that "previous" works over the random "next" walk.
///
/// Whenever a deck is loaded the last history entry equals
/// `current_index`.
pub struct NavigationState {
    deck: Deck,
    current_index: usize,
    history: Vec<usize>,
    preferences: Preferences,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            deck: Deck::new(),
            current_index: 0,
            history: Vec::new(),
            preferences: Preferences::default(),
        }
    }

    /// Replaces the owned deck and rewinds to its first entry. An empty
    /// deck is rejected and the previous deck stays active; callers fall
    /// back to the builtin deck instead.
    pub fn load(&mut self, deck: Deck) -> Result<(), TrainerError> {
        if deck.is_empty() {
            return Err(TrainerError::EmptyDeck);
        }

        self.deck = deck;
        self.current_index = 0;
        self.history = vec![0];

        Ok(())
    }

    pub fn current(&self) -> Option<&WordEntry> {
        self.deck.get(self.current_index)
    }

    /// Jumps to a uniformly random card. Every index is equally likely,
    /// including the one already shown; this is a shuffle-forward walk,
    /// not a permutation.
    pub fn next(&mut self) {
        if self.deck.is_empty() {
            return;
        }

        self.current_index = rand::rng().random_range(0..self.deck.len());
        self.history.push(self.current_index);
        if self.history.len() > HISTORY_LIMIT {
            self.history.remove(0);
        }
    }

    /// Steps back to the previously shown card. Going back past the first
    /// shown word is a no-op, not an error.
    pub fn previous(&mut self) {
        if self.history.len() <= 1 {
            return;
        }

        self.history.pop();
        if let Some(&index) = self.history.last() {
            self.current_index = index;
        }
    }

    pub fn set_preferences(&mut self, update: PreferencesUpdate) {
        if let Some(show_meaning) = update.show_meaning {
            self.preferences.show_meaning = show_meaning;
        }
        if let Some(review_days) = update.review_days {
            self.preferences.review_days = review_days;
        }
        if let Some(window_width) = update.window_width {
            self.preferences.window_width = window_width;
        }
        if let Some(window_height) = update.window_height {
            self.preferences.window_height = window_height;
        }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::WordEntry;

    fn deck(words: &[(&str, &str)]) -> Deck {
        words.iter().filter_map(|(w, m)| WordEntry::new(w, m)).collect()
    }

    fn three_card_deck() -> Deck {
        deck(&[("one", "一"), ("two", "二"), ("three", "三")])
    }

    #[test]
    fn load_rewinds_to_first_entry() {
        let mut nav = NavigationState::new();
        nav.load(three_card_deck()).unwrap();

        assert_eq!(nav.current().unwrap().word(), "one");
        assert_eq!(nav.history(), &[0]);
    }

    #[test]
    fn load_rejects_empty_deck_and_keeps_old_one() {
        let mut nav = NavigationState::new();
        nav.load(three_card_deck()).unwrap();
        nav.next();

        let before_index = nav.current_index();
        let before_history = nav.history().to_vec();

        assert!(matches!(nav.load(Deck::new()), Err(TrainerError::EmptyDeck)));
        assert_eq!(nav.deck_len(), 3);
        assert_eq!(nav.current_index(), before_index);
        assert_eq!(nav.history(), before_history.as_slice());
    }

    #[test]
    fn empty_state_is_inert() {
        let mut nav = NavigationState::new();

        nav.next();
        nav.previous();

        assert!(nav.current().is_none());
        assert!(nav.history().is_empty());
    }

    #[test]
    fn previous_right_after_load_is_a_noop() {
        let mut nav = NavigationState::new();
        nav.load(three_card_deck()).unwrap();

        nav.previous();

        assert_eq!(nav.current().unwrap().word(), "one");
        assert_eq!(nav.history(), &[0]);
    }

    #[test]
    fn previous_returns_to_the_prior_draw() {
        let mut nav = NavigationState::new();
        nav.load(three_card_deck()).unwrap();

        nav.next();
        let first_draw = nav.current_index();
        nav.next();

        nav.previous();

        assert_eq!(nav.current_index(), first_draw);
        assert_eq!(nav.history().last(), Some(&first_draw));
    }

    #[test]
    fn single_card_deck_always_shows_the_same_card() {
        let mut nav = NavigationState::new();
        nav.load(deck(&[("only", "唯一")])).unwrap();

        for step in 0..10 {
            nav.next();
            assert_eq!(nav.current().unwrap().word(), "only");
            assert_eq!(nav.history().len(), step + 2);
        }
    }

    #[test]
    fn history_is_capped_at_fifty_most_recent_draws() {
        let mut nav = NavigationState::new();
        nav.load(three_card_deck()).unwrap();

        let mut draws = Vec::new();
        for _ in 0..60 {
            nav.next();
            draws.push(nav.current_index());
        }

        assert_eq!(nav.history().len(), 50);
        assert_eq!(nav.history(), &draws[10..]);
    }

    #[test]
    fn set_preferences_updates_only_named_fields() {
        let mut nav = NavigationState::new();

        nav.set_preferences(PreferencesUpdate {
            review_days: Some(14),
            window_width: Some(500.0),
            ..Default::default()
        });

        let prefs = nav.preferences();
        assert_eq!(prefs.review_days, 14);
        assert_eq!(prefs.window_width, 500.0);
        assert!(prefs.show_meaning);
        assert_eq!(prefs.window_height, 250.0);
    }
}
