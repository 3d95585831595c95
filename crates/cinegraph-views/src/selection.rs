//! Selection state: the single source of truth for what is shown

use cinegraph_common::{Genre, TimeWindow};
use serde::{Deserialize, Serialize};

/// Current selection: the chosen genres and the brushed time window.
///
/// Mutated only through the coordinator's transitions, never persisted.
/// `window == None` means the full domain, the state a released brush
/// returns to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    active: Vec<Genre>,
    window: Option<TimeWindow>,
}

impl Selection {
    /// Initial state: every genre active, full domain.
    pub fn all_genres() -> Self {
        Self {
            active: Genre::ALL.to_vec(),
            window: None,
        }
    }

    /// Active genres in canonical display order.
    pub fn active(&self) -> &[Genre] {
        &self.active
    }

    pub fn window(&self) -> Option<TimeWindow> {
        self.window
    }

    pub fn is_active(&self, genre: Genre) -> bool {
        self.active.contains(&genre)
    }

    /// Replace the chosen genres. Filtering is order-insensitive; the stored
    /// order is the canonical display order, deduplicated. The window is
    /// left untouched.
    pub fn set_genres(&mut self, genres: &[Genre]) {
        self.active = Genre::ALL
            .iter()
            .copied()
            .filter(|g| genres.contains(g))
            .collect();
    }

    /// Set the brushed window. Genres are left untouched.
    pub fn set_window(&mut self, window: TimeWindow) {
        self.window = Some(window);
    }

    /// Brush released without a span: back to the full domain.
    pub fn clear_window(&mut self) {
        self.window = None;
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::all_genres()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinegraph_common::TimeBucket;

    #[test]
    fn test_initial_state() {
        let selection = Selection::all_genres();
        assert_eq!(selection.active().len(), 19);
        assert!(selection.window().is_none());
    }

    #[test]
    fn test_set_genres_canonical_order_and_dedup() {
        let mut selection = Selection::all_genres();
        selection.set_genres(&[Genre::Western, Genre::Action, Genre::Western, Genre::Drama]);

        assert_eq!(
            selection.active(),
            &[Genre::Action, Genre::Drama, Genre::Western]
        );
    }

    #[test]
    fn test_empty_selection_is_valid() {
        let mut selection = Selection::all_genres();
        selection.set_genres(&[]);
        assert!(selection.active().is_empty());
    }

    #[test]
    fn test_window_transitions_are_independent() {
        let mut selection = Selection::all_genres();
        let window = TimeWindow::new(TimeBucket::Year(1990), TimeBucket::Year(2000));

        selection.set_window(window);
        assert_eq!(selection.window(), Some(window));
        assert_eq!(selection.active().len(), 19);

        selection.set_genres(&[Genre::Horror]);
        assert_eq!(selection.window(), Some(window));

        selection.clear_window();
        assert!(selection.window().is_none());
        assert_eq!(selection.active(), &[Genre::Horror]);
    }
}
