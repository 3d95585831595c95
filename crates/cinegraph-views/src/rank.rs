//! Top-N ranking of movies per genre under a composite ordering

use cinegraph_common::{Genre, MovieRecord, TimeWindow};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Secondary ordering applied after vote average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Strict lexicographic: vote average descending, then vote count
    /// descending.
    #[default]
    VoteCount,
    /// Reproduces the historical comparator, which combined the two key
    /// differences with a logical AND. The AND returns its second operand
    /// whenever the averages differ, so the vote count dominates the order;
    /// tied averages yield zero and those rows keep their input order.
    Legacy,
}

/// Selects the highest-ranked movies for one genre within an optional
/// time window.
#[derive(Debug, Clone)]
pub struct TopNRanker {
    /// Maximum number of rows returned. Caller-supplied; 5 and 7 are the
    /// sizes used by the shipped views.
    pub limit: usize,
    pub tie_break: TieBreak,
}

impl TopNRanker {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            tie_break: TieBreak::default(),
        }
    }

    pub fn with_tie_break(limit: usize, tie_break: TieBreak) -> Self {
        Self { limit, tie_break }
    }

    /// Rank the rows carrying `genre` whose release date falls inside
    /// `window` (inclusive; `None` means the full domain). Returns at most
    /// `limit` rows; an empty result is a valid, renderable state.
    #[instrument(skip(self, rows))]
    pub fn top_n(
        &self,
        rows: &[MovieRecord],
        genre: Genre,
        window: Option<&TimeWindow>,
    ) -> Vec<MovieRecord> {
        let mut matching: Vec<&MovieRecord> = rows
            .iter()
            .filter(|row| {
                row.has_genre(genre)
                    && window.map_or(true, |w| w.contains_date(row.release_date))
            })
            .collect();

        match self.tie_break {
            TieBreak::VoteCount => {
                matching.sort_by(|a, b| {
                    b.vote_average
                        .total_cmp(&a.vote_average)
                        .then(b.vote_count.cmp(&a.vote_count))
                });
            }
            TieBreak::Legacy => {
                // Stable sort; tied averages compare equal and stay in
                // input order, as the AND comparator left them.
                matching.sort_by(|a, b| legacy_cmp(a, b));
            }
        }

        matching.truncate(self.limit);
        debug!(genre = %genre, returned = matching.len(), "ranked top movies");
        matching.into_iter().cloned().collect()
    }
}

/// The historical comparator semantics: a nonzero average difference makes
/// the AND hand back the vote-count difference, so vote count decides the
/// order; a zero average difference short-circuits the AND to zero.
fn legacy_cmp(a: &MovieRecord, b: &MovieRecord) -> Ordering {
    if a.vote_average.total_cmp(&b.vote_average) == Ordering::Equal {
        Ordering::Equal
    } else {
        b.vote_count.cmp(&a.vote_count)
    }
}
