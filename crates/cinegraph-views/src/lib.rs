//! # CineGraph Views
//!
//! The linked-views aggregation core: turns immutable movie records into
//! grouped time series and ranked leaderboards, and keeps every view
//! consistent with the current selection.
//!
//! Data flows one way: records are aggregated once into a base cache, the
//! selection is mutated by input events, and the [`ViewCoordinator`]
//! recomputes the derived series and top-N lists on every transition before
//! dispatching them to a [`DrawSurface`].

pub mod aggregate;
pub mod coordinator;
pub mod rank;
pub mod selection;
pub mod surface;

pub use aggregate::{
    time_domain, Aggregate, GenreSeriesAggregator, MonthlyProfile, MonthlyProfileAggregator,
    ReleaseVolumeAggregator, SeriesByGenre,
};
pub use coordinator::{HoverSample, ViewCoordinator, ViewEvent};
pub use rank::{TieBreak, TopNRanker};
pub use selection::Selection;
pub use surface::{DrawSurface, LegendEntry};
