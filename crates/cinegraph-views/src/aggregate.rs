//! Aggregation of movie records into grouped, time-bucketed counts

use cinegraph_common::{
    Bucketing, Genre, GenreSeries, MovieRecord, Result, SeriesPoint, TimeBucket, TimeWindow,
};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, instrument};

/// Aggregated series for every genre present in the data.
pub type SeriesByGenre = BTreeMap<Genre, GenreSeries>;

/// Per-genre counts folded onto the twelve calendar months.
pub type MonthlyProfile = BTreeMap<Genre, [u32; 12]>;

/// Trait for aggregating records into a specific derived shape.
pub trait Aggregate<T> {
    /// Process the full record slice and return the aggregated result.
    fn aggregate(&self, rows: &[MovieRecord]) -> Result<T>;
}

/// Aggregator for per-genre release counts over time.
///
/// A record with k genres contributes to k independent series. This is
/// deliberate fan-out, not double counting: each series counts releases
/// carrying that genre. A record with an empty genre set contributes to no
/// series at all.
#[derive(Debug, Clone)]
pub struct GenreSeriesAggregator {
    pub bucketing: Bucketing,
    /// Optional inclusive bucket range filter.
    pub window: Option<TimeWindow>,
}

impl GenreSeriesAggregator {
    pub fn new(bucketing: Bucketing) -> Self {
        Self {
            bucketing,
            window: None,
        }
    }

    pub fn with_window(bucketing: Bucketing, window: TimeWindow) -> Self {
        Self {
            bucketing,
            window: Some(window),
        }
    }

    fn in_window(&self, bucket: TimeBucket) -> bool {
        self.window.map_or(true, |w| w.contains(bucket))
    }
}

impl Aggregate<SeriesByGenre> for GenreSeriesAggregator {
    #[instrument(skip(self, rows))]
    fn aggregate(&self, rows: &[MovieRecord]) -> Result<SeriesByGenre> {
        let mut counts: HashMap<Genre, HashMap<TimeBucket, u32>> = HashMap::new();

        for row in rows {
            let bucket = self.bucketing.bucket(row.release_date);
            if !self.in_window(bucket) {
                continue;
            }
            for genre in &row.genres {
                *counts.entry(*genre).or_default().entry(bucket).or_insert(0) += 1;
            }
        }

        let result: SeriesByGenre = counts
            .into_iter()
            .map(|(genre, buckets)| {
                let mut series: GenreSeries = buckets
                    .into_iter()
                    .map(|(bucket, count)| SeriesPoint { bucket, count })
                    .collect();
                series.sort_by_key(|point| point.bucket);
                (genre, series)
            })
            .collect();

        debug!("aggregated series for {} genres", result.len());
        Ok(result)
    }
}

/// Aggregator for total releases per bucket, across all genres.
///
/// Drives the overview chart behind the brush; every record counts exactly
/// once regardless of how many genres it carries.
#[derive(Debug, Clone)]
pub struct ReleaseVolumeAggregator {
    pub bucketing: Bucketing,
}

impl ReleaseVolumeAggregator {
    pub fn new(bucketing: Bucketing) -> Self {
        Self { bucketing }
    }
}

impl Aggregate<GenreSeries> for ReleaseVolumeAggregator {
    #[instrument(skip(self, rows))]
    fn aggregate(&self, rows: &[MovieRecord]) -> Result<GenreSeries> {
        let mut counts: HashMap<TimeBucket, u32> = HashMap::new();

        for row in rows {
            *counts
                .entry(self.bucketing.bucket(row.release_date))
                .or_insert(0) += 1;
        }

        let mut series: GenreSeries = counts
            .into_iter()
            .map(|(bucket, count)| SeriesPoint { bucket, count })
            .collect();
        series.sort_by_key(|point| point.bucket);

        debug!("aggregated {} release volume points", series.len());
        Ok(series)
    }
}

/// Aggregator for genre-by-calendar-month counts, folding all years onto a
/// single twelve month profile. Feeds the genre/month heatmap.
#[derive(Debug, Clone, Default)]
pub struct MonthlyProfileAggregator;

impl MonthlyProfileAggregator {
    pub fn new() -> Self {
        Self
    }
}

impl Aggregate<MonthlyProfile> for MonthlyProfileAggregator {
    #[instrument(skip(self, rows))]
    fn aggregate(&self, rows: &[MovieRecord]) -> Result<MonthlyProfile> {
        use chrono::Datelike;

        let mut profile: MonthlyProfile = BTreeMap::new();

        for row in rows {
            let month_idx = (row.release_date.month0()) as usize;
            for genre in &row.genres {
                profile.entry(*genre).or_insert([0; 12])[month_idx] += 1;
            }
        }

        debug!("aggregated monthly profile for {} genres", profile.len());
        Ok(profile)
    }
}

/// Full time domain of the dataset: the min and max bucket across all rows.
///
/// Series are sparse; consumers that need a continuous axis derive it from
/// this window rather than from any single series.
pub fn time_domain(rows: &[MovieRecord], bucketing: Bucketing) -> Option<TimeWindow> {
    let mut buckets = rows.iter().map(|row| bucketing.bucket(row.release_date));
    let first = buckets.next()?;
    let (min, max) = buckets.fold((first, first), |(min, max), bucket| {
        (min.min(bucket), max.max(bucket))
    });
    Some(TimeWindow::new(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: u64, date: (i32, u32, u32), genres: &[Genre]) -> MovieRecord {
        MovieRecord {
            id,
            title: format!("Movie {id}"),
            release_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            genres: genres.to_vec(),
            vote_average: 7.0,
            vote_count: 100,
            duration_minutes: 100,
            poster_path: String::new(),
            backdrop_path: String::new(),
            overview: String::new(),
            tagline: String::new(),
            keywords: String::new(),
        }
    }

    #[test]
    fn test_genre_fan_out() {
        // Two-genre row feeds two series; single-genre rows feed one each.
        let rows = vec![
            record(1, (2000, 5, 1), &[Genre::Action, Genre::Comedy]),
            record(2, (2000, 8, 1), &[Genre::Action]),
            record(3, (2001, 2, 1), &[Genre::Comedy]),
        ];

        let series = GenreSeriesAggregator::new(Bucketing::Year)
            .aggregate(&rows)
            .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(
            series[&Genre::Action],
            vec![SeriesPoint {
                bucket: TimeBucket::Year(2000),
                count: 2
            }]
        );
        assert_eq!(
            series[&Genre::Comedy],
            vec![
                SeriesPoint {
                    bucket: TimeBucket::Year(2000),
                    count: 1
                },
                SeriesPoint {
                    bucket: TimeBucket::Year(2001),
                    count: 1
                }
            ]
        );
    }

    #[test]
    fn test_total_membership_is_preserved() {
        // Sum of all counts equals the number of (row, genre) pairs.
        let rows = vec![
            record(1, (1999, 1, 1), &[Genre::Drama, Genre::Romance, Genre::War]),
            record(2, (1999, 6, 1), &[Genre::Drama]),
            record(3, (2000, 1, 1), &[]),
        ];
        let membership: usize = rows.iter().map(|r| r.genres.len()).sum();

        let series = GenreSeriesAggregator::new(Bucketing::Year)
            .aggregate(&rows)
            .unwrap();
        let total: u32 = series
            .values()
            .flat_map(|s| s.iter().map(|p| p.count))
            .sum();

        assert_eq!(total as usize, membership);
        // The empty-genre row appears nowhere.
        assert_eq!(membership, 4);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let rows = vec![
            record(1, (1980, 3, 3), &[Genre::Horror]),
            record(2, (1985, 10, 31), &[Genre::Horror, Genre::Thriller]),
        ];
        let aggregator = GenreSeriesAggregator::new(Bucketing::YearMonth);

        let first = aggregator.aggregate(&rows).unwrap();
        let second = aggregator.aggregate(&rows).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_series_is_sparse_and_sorted() {
        let rows = vec![
            record(1, (2010, 1, 1), &[Genre::Western]),
            record(2, (1960, 1, 1), &[Genre::Western]),
            record(3, (1990, 1, 1), &[Genre::Western]),
        ];

        let series = GenreSeriesAggregator::new(Bucketing::Year)
            .aggregate(&rows)
            .unwrap();
        let western = &series[&Genre::Western];

        // No zero-filling for the gap years.
        assert_eq!(western.len(), 3);
        assert!(western.windows(2).all(|w| w[0].bucket < w[1].bucket));
    }

    #[test]
    fn test_window_narrowing_never_raises_counts() {
        let rows = vec![
            record(1, (2000, 1, 1), &[Genre::Action]),
            record(2, (2001, 1, 1), &[Genre::Action]),
            record(3, (2002, 1, 1), &[Genre::Action]),
        ];

        let full = GenreSeriesAggregator::new(Bucketing::Year)
            .aggregate(&rows)
            .unwrap();
        let narrowed = GenreSeriesAggregator::with_window(
            Bucketing::Year,
            TimeWindow::new(TimeBucket::Year(2000), TimeBucket::Year(2001)),
        )
        .aggregate(&rows)
        .unwrap();

        for (genre, series) in &narrowed {
            for point in series {
                let full_count = full[genre]
                    .iter()
                    .find(|p| p.bucket == point.bucket)
                    .map(|p| p.count)
                    .unwrap_or(0);
                assert!(point.count <= full_count);
            }
            // Buckets outside the window are gone.
            assert!(series.iter().all(|p| p.bucket <= TimeBucket::Year(2001)));
        }
    }

    #[test]
    fn test_release_volume_counts_each_row_once() {
        let rows = vec![
            record(1, (2000, 5, 1), &[Genre::Action, Genre::Comedy, Genre::Drama]),
            record(2, (2000, 5, 20), &[Genre::Action]),
            record(3, (2000, 6, 1), &[]),
        ];

        let volume = ReleaseVolumeAggregator::new(Bucketing::YearMonth)
            .aggregate(&rows)
            .unwrap();

        assert_eq!(
            volume,
            vec![
                SeriesPoint {
                    bucket: TimeBucket::Month {
                        year: 2000,
                        month: 5
                    },
                    count: 2
                },
                SeriesPoint {
                    bucket: TimeBucket::Month {
                        year: 2000,
                        month: 6
                    },
                    count: 1
                }
            ]
        );
    }

    #[test]
    fn test_monthly_profile_folds_years() {
        let rows = vec![
            record(1, (1990, 10, 1), &[Genre::Horror]),
            record(2, (2005, 10, 13), &[Genre::Horror]),
            record(3, (2005, 3, 1), &[Genre::Horror]),
        ];

        let profile = MonthlyProfileAggregator::new().aggregate(&rows).unwrap();
        let horror = profile[&Genre::Horror];

        assert_eq!(horror[9], 2); // October, both years
        assert_eq!(horror[2], 1); // March
        assert_eq!(horror.iter().sum::<u32>(), 3);
    }

    #[test]
    fn test_time_domain() {
        assert_eq!(time_domain(&[], Bucketing::Year), None);

        let rows = vec![
            record(1, (1972, 3, 14), &[Genre::Crime]),
            record(2, (2019, 10, 4), &[Genre::Crime]),
            record(3, (1994, 9, 23), &[Genre::Drama]),
        ];
        let domain = time_domain(&rows, Bucketing::Year).unwrap();
        assert_eq!(domain.start, TimeBucket::Year(1972));
        assert_eq!(domain.end, TimeBucket::Year(2019));
    }
}
