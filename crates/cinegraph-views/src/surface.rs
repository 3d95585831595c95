//! Draw surface abstraction: the boundary between view coordination and
//! actual chart rendering

use crate::aggregate::SeriesByGenre;
use async_trait::async_trait;
use cinegraph_common::{Genre, MovieRecord, Result, TimeWindow};

/// One legend entry: a genre and its fixed palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    pub genre: Genre,
    pub color: &'static str,
}

impl LegendEntry {
    pub fn for_genre(genre: Genre) -> Self {
        Self {
            genre,
            color: genre.color(),
        }
    }
}

/// Target for the coordinator's output. Implementations draw lines, cells
/// or galleries; the coordinator only guarantees that the calls reflect the
/// current selection.
#[async_trait]
pub trait DrawSurface: Send + Sync {
    /// Draw the filtered per-genre series. `active` carries the display
    /// order; an empty `active` means no lines, which is a valid state.
    async fn render_series(
        &mut self,
        active: &[Genre],
        series: &SeriesByGenre,
        window: Option<TimeWindow>,
    ) -> Result<()>;

    /// Draw the legend for the active genres.
    async fn render_legend(&mut self, entries: &[LegendEntry]) -> Result<()>;

    /// Draw the ranked leaderboard for one genre.
    async fn render_top_n(&mut self, genre: Genre, rows: &[MovieRecord]) -> Result<()>;
}
