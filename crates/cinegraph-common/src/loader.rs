//! CSV dataset loading for the TMDB-style movie table
//!
//! The loader is the validation boundary: rows with an unparseable release
//! date are rejected here so the aggregation core only ever sees well formed
//! records. Unknown genre labels are dropped from the row's genre set rather
//! than rejecting the whole row.

use crate::error::Result;
use crate::types::{Genre, MovieRecord};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Raw CSV row shape, column names matching the dataset header.
#[derive(Debug, Deserialize)]
struct RawMovieRow {
    id: u64,
    title: String,
    release_date: String,
    genres: String,
    vote_average: f64,
    vote_count: u32,
    #[serde(default)]
    duration: f64,
    #[serde(default)]
    poster_path: String,
    #[serde(default)]
    backdrop_path: String,
    #[serde(default)]
    overview: String,
    #[serde(default)]
    tagline: String,
    #[serde(default)]
    keywords: String,
}

impl RawMovieRow {
    /// Convert a raw row into a typed record, or `None` when the release
    /// date does not parse.
    fn into_record(self) -> Option<MovieRecord> {
        let release_date = NaiveDate::parse_from_str(self.release_date.trim(), "%Y-%m-%d").ok()?;

        let genres: Vec<Genre> = self
            .genres
            .split(", ")
            .filter(|label| !label.is_empty())
            .filter_map(|label| {
                let genre = Genre::from_name(label.trim());
                if genre.is_none() {
                    debug!(label, "dropping unknown genre label");
                }
                genre
            })
            .collect();

        Some(MovieRecord {
            id: self.id,
            title: self.title,
            release_date,
            genres,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            duration_minutes: self.duration.max(0.0).round() as u32,
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            overview: self.overview,
            tagline: self.tagline,
            keywords: self.keywords,
        })
    }
}

/// Read movie records from any CSV source.
#[instrument(skip(reader))]
pub fn read_movies<R: Read>(reader: R) -> Result<Vec<MovieRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    let mut rejected = 0usize;

    for row in csv_reader.deserialize::<RawMovieRow>() {
        match row {
            Ok(raw) => match raw.into_record() {
                Some(record) => records.push(record),
                None => rejected += 1,
            },
            Err(err) => {
                debug!(error = %err, "skipping malformed CSV row");
                rejected += 1;
            }
        }
    }

    if rejected > 0 {
        warn!(rejected, loaded = records.len(), "rejected malformed rows");
    }
    info!(loaded = records.len(), "loaded movie records");
    Ok(records)
}

/// Load movie records from a CSV file on disk.
pub fn load_movies(path: impl AsRef<Path>) -> Result<Vec<MovieRecord>> {
    let file = std::fs::File::open(path.as_ref())?;
    read_movies(file)
}
