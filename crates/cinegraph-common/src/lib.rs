//! Common utilities and types for CineGraph

pub mod error;
pub mod loader;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{CineGraphError, Result};
pub use loader::{load_movies, read_movies};
pub use logging::{init_default_logging, init_dev_logging, init_logging, LoggingConfig};
pub use types::{
    Bucketing, Genre, GenreSeries, MovieRecord, SeriesPoint, TimeBucket, TimeWindow,
    GENRE_PALETTE,
};
