//! Core data model: movie records, genres, time buckets and windows

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Fixed color palette, indexed by genre position.
///
/// The palette is intentionally one entry longer than the genre list so a
/// lookup by stable index can never wrap.
pub const GENRE_PALETTE: [&str; 20] = [
    "#FF5733", // Vivid Red-Orange
    "#FF6F61", // Coral
    "#FF8C00", // Dark Orange
    "#FFA07A", // Light Salmon
    "#FF1493", // Deep Pink
    "#FF69B4", // Hot Pink
    "#FF00FF", // Magenta
    "#8A2BE2", // Blue Violet
    "#4B0082", // Indigo
    "#6A5ACD", // Slate Blue
    "#483D8B", // Dark Slate Blue
    "#32CD32", // Lime Green
    "#3CB371", // Medium Sea Green
    "#00CED1", // Dark Turquoise
    "#40E0D0", // Turquoise
    "#20B2AA", // Light Sea Green
    "#1E90FF", // Dodger Blue
    "#4682B4", // Steel Blue
    "#D2691E", // Chocolate
    "#8B4513", // Saddle Brown
];

/// Movie genre labels, the fixed categorical key for all aggregations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    History,
    Horror,
    Music,
    Mystery,
    Romance,
    ScienceFiction,
    Thriller,
    TvMovie,
    War,
    Western,
}

impl Genre {
    /// All genres in canonical display order.
    pub const ALL: [Genre; 19] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Comedy,
        Genre::Crime,
        Genre::Documentary,
        Genre::Drama,
        Genre::Family,
        Genre::Fantasy,
        Genre::History,
        Genre::Horror,
        Genre::Music,
        Genre::Mystery,
        Genre::Romance,
        Genre::ScienceFiction,
        Genre::Thriller,
        Genre::TvMovie,
        Genre::War,
        Genre::Western,
    ];

    /// Human readable label, matching the dataset's genre strings.
    pub fn name(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Documentary => "Documentary",
            Genre::Drama => "Drama",
            Genre::Family => "Family",
            Genre::Fantasy => "Fantasy",
            Genre::History => "History",
            Genre::Horror => "Horror",
            Genre::Music => "Music",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Thriller => "Thriller",
            Genre::TvMovie => "TV Movie",
            Genre::War => "War",
            Genre::Western => "Western",
        }
    }

    /// Parse a dataset genre label. Unknown labels return `None`.
    pub fn from_name(name: &str) -> Option<Genre> {
        Genre::ALL.iter().copied().find(|g| g.name() == name)
    }

    /// Stable position in the canonical order.
    pub fn index(&self) -> usize {
        Genre::ALL
            .iter()
            .position(|g| g == self)
            .expect("every genre appears in ALL")
    }

    /// Palette color assigned to this genre. Stable for the whole session:
    /// the same genre always maps to the same color.
    pub fn color(&self) -> &'static str {
        GENRE_PALETTE[self.index()]
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One record of the movie dataset, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: u64,
    pub title: String,
    pub release_date: NaiveDate,
    /// A movie may belong to several genres; may be empty.
    pub genres: Vec<Genre>,
    pub vote_average: f64,
    pub vote_count: u32,
    pub duration_minutes: u32,
    pub poster_path: String,
    pub backdrop_path: String,
    pub overview: String,
    pub tagline: String,
    pub keywords: String,
}

impl MovieRecord {
    /// Whether this record carries the given genre.
    pub fn has_genre(&self, genre: Genre) -> bool {
        self.genres.contains(&genre)
    }
}

/// Temporal grouping key derived from a release date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeBucket {
    Year(i32),
    Month { year: i32, month: u32 },
}

impl TimeBucket {
    /// Chronological sort key. A bare year sorts before any month within it.
    fn sort_key(&self) -> (i32, u32) {
        match *self {
            TimeBucket::Year(year) => (year, 0),
            TimeBucket::Month { year, month } => (year, month),
        }
    }

    pub fn year(&self) -> i32 {
        match *self {
            TimeBucket::Year(year) => year,
            TimeBucket::Month { year, .. } => year,
        }
    }

    /// Numeric position on a continuous time axis: years as-is, months as
    /// fractional years. Used for chart x coordinates and nearest-bucket
    /// lookup.
    pub fn position(&self) -> f64 {
        match *self {
            TimeBucket::Year(year) => year as f64,
            TimeBucket::Month { year, month } => year as f64 + (month as f64 - 1.0) / 12.0,
        }
    }
}

impl Ord for TimeBucket {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for TimeBucket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TimeBucket::Year(year) => write!(f, "{year}"),
            TimeBucket::Month { year, month } => write!(f, "{year}-{month:02}"),
        }
    }
}

/// Strategy for deriving a bucket from a release date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bucketing {
    /// Calendar year granularity.
    Year,
    /// (year, month) granularity.
    YearMonth,
}

impl Bucketing {
    pub fn bucket(&self, date: NaiveDate) -> TimeBucket {
        match self {
            Bucketing::Year => TimeBucket::Year(date.year()),
            Bucketing::YearMonth => TimeBucket::Month {
                year: date.year(),
                month: date.month(),
            },
        }
    }
}

/// Inclusive time range over buckets, the brushable filter window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: TimeBucket,
    pub end: TimeBucket,
}

impl TimeWindow {
    /// Build a window, normalizing reversed bounds.
    pub fn new(start: TimeBucket, end: TimeBucket) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    pub fn contains(&self, bucket: TimeBucket) -> bool {
        self.start <= bucket && bucket <= self.end
    }

    /// Bucket the date at this window's own granularity, then test it.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        let bucketing = match self.start {
            TimeBucket::Year(_) => Bucketing::Year,
            TimeBucket::Month { .. } => Bucketing::YearMonth,
        };
        self.contains(bucketing.bucket(date))
    }
}

/// One aggregated point: bucket plus the number of releases in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub bucket: TimeBucket,
    pub count: u32,
}

/// A sparse series for one genre, sorted ascending by bucket.
pub type GenreSeries = Vec<SeriesPoint>;
