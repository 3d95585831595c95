//! View coordination: applies selection transitions and pushes freshly
//! derived data to the draw surface

use crate::aggregate::{time_domain, Aggregate, GenreSeriesAggregator, SeriesByGenre};
use crate::rank::TopNRanker;
use crate::selection::Selection;
use crate::surface::{DrawSurface, LegendEntry};
use chrono::NaiveDate;
use cinegraph_common::{Bucketing, Genre, MovieRecord, Result, TimeBucket, TimeWindow};
use tracing::{debug, info, instrument};

/// One user interaction, mapped to exactly one named transition.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Multi-select input changed; replaces the chosen genres.
    SetGenres(Vec<Genre>),
    /// Brush gesture settled on a span.
    SetTimeWindow(TimeWindow),
    /// Brush released without a span; back to the full domain.
    ClearTimeWindow,
}

/// Read-only projection under the pointer: the nearest bucket and the
/// per-genre counts at it, in display order. Transient; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverSample {
    pub bucket: TimeBucket,
    pub counts: Vec<(Genre, u32)>,
}

/// Owns the rows, the once-built series cache, the selection and the draw
/// surface. Every transition recomputes the derived views and redraws;
/// there is no other observable effect.
pub struct ViewCoordinator<S: DrawSurface> {
    rows: Vec<MovieRecord>,
    bucketing: Bucketing,
    /// Built once from the immutable rows, read-only afterwards.
    base: SeriesByGenre,
    domain: Option<TimeWindow>,
    selection: Selection,
    ranker: TopNRanker,
    surface: S,
}

impl<S: DrawSurface> ViewCoordinator<S> {
    /// Build the coordinator and its derived cache. Does not draw; call
    /// [`refresh`](Self::refresh) to render the initial fully-populated
    /// state.
    pub fn new(
        rows: Vec<MovieRecord>,
        bucketing: Bucketing,
        ranker: TopNRanker,
        surface: S,
    ) -> Result<Self> {
        let base = GenreSeriesAggregator::new(bucketing).aggregate(&rows)?;
        let domain = time_domain(&rows, bucketing);
        info!(
            rows = rows.len(),
            genres = base.len(),
            "initialized view coordinator"
        );

        Ok(Self {
            rows,
            bucketing,
            base,
            domain,
            selection: Selection::all_genres(),
            ranker,
            surface,
        })
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Full time domain of the dataset, the range a cleared brush shows.
    pub fn domain(&self) -> Option<TimeWindow> {
        self.domain
    }

    pub fn rows(&self) -> &[MovieRecord] {
        &self.rows
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Apply one input event as its named transition.
    pub async fn apply(&mut self, event: ViewEvent) -> Result<()> {
        match event {
            ViewEvent::SetGenres(genres) => self.set_genres(&genres).await,
            ViewEvent::SetTimeWindow(window) => self.set_time_window(window).await,
            ViewEvent::ClearTimeWindow => self.clear_time_window().await,
        }
    }

    /// Replace the chosen genres; the time window is unchanged.
    #[instrument(skip(self))]
    pub async fn set_genres(&mut self, genres: &[Genre]) -> Result<()> {
        self.selection.set_genres(genres);
        self.refresh().await
    }

    /// Narrow to the brushed window; the chosen genres are unchanged.
    #[instrument(skip(self))]
    pub async fn set_time_window(&mut self, window: TimeWindow) -> Result<()> {
        self.selection.set_window(window);
        self.refresh().await
    }

    /// Reset to the full domain.
    #[instrument(skip(self))]
    pub async fn clear_time_window(&mut self) -> Result<()> {
        self.selection.clear_window();
        self.refresh().await
    }

    /// Recompute every derived view from the current selection and push it
    /// to the surface.
    pub async fn refresh(&mut self) -> Result<()> {
        let active: Vec<Genre> = self.selection.active().to_vec();
        let window = self.selection.window();
        let series = self.filtered_series();

        debug!(
            active = active.len(),
            windowed = window.is_some(),
            "refreshing views"
        );

        self.surface.render_series(&active, &series, window).await?;

        let legend: Vec<LegendEntry> =
            active.iter().map(|g| LegendEntry::for_genre(*g)).collect();
        self.surface.render_legend(&legend).await?;

        for genre in &active {
            let top = self.ranker.top_n(&self.rows, *genre, window.as_ref());
            self.surface.render_top_n(*genre, &top).await?;
        }

        Ok(())
    }

    /// The base series narrowed to the active genres and the current
    /// window. A selected genre absent from the data contributes an empty
    /// series rather than an error.
    pub fn filtered_series(&self) -> SeriesByGenre {
        let window = self.selection.window();
        self.selection
            .active()
            .iter()
            .map(|genre| {
                let series = self
                    .base
                    .get(genre)
                    .map(|points| {
                        points
                            .iter()
                            .filter(|p| window.map_or(true, |w| w.contains(p.bucket)))
                            .copied()
                            .collect()
                    })
                    .unwrap_or_default();
                (*genre, series)
            })
            .collect()
    }

    /// Nearest-bucket lookup for the tooltip/crosshair: pick the bucket
    /// closest to the hovered date and report each active genre's count at
    /// it. Purely derived from the current filtered series.
    pub fn hover(&self, date: NaiveDate) -> Option<HoverSample> {
        let series = self.filtered_series();
        let target = self.bucketing.bucket(date).position();

        let bucket = series
            .values()
            .flat_map(|points| points.iter().map(|p| p.bucket))
            .min_by(|a, b| {
                let da = (a.position() - target).abs();
                let db = (b.position() - target).abs();
                da.total_cmp(&db)
            })?;

        let counts = series
            .iter()
            .filter_map(|(genre, points)| {
                points
                    .iter()
                    .find(|p| p.bucket == bucket)
                    .map(|p| (*genre, p.count))
            })
            .collect();

        Some(HoverSample { bucket, counts })
    }
}
