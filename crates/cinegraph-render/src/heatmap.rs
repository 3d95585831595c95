//! Genre heatmaps: releases per genre against calendar month or year

use crate::color::ramp;
use crate::config::ChartConfig;
use cinegraph_common::{Genre, Result, TimeBucket};
use cinegraph_views::{MonthlyProfile, SeriesByGenre};
use plotters::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Default sequential ramp endpoints, a purple-red scale.
const RAMP_LOW: RGBColor = RGBColor(247, 244, 249);
const RAMP_HIGH: RGBColor = RGBColor(103, 0, 31);

fn month_abbr(month: usize) -> &'static str {
    match month {
        0 => "Jan",
        1 => "Feb",
        2 => "Mar",
        3 => "Apr",
        4 => "May",
        5 => "Jun",
        6 => "Jul",
        7 => "Aug",
        8 => "Sep",
        9 => "Oct",
        10 => "Nov",
        11 => "Dec",
        _ => "???",
    }
}

/// Renders genre-by-time heatmap grids to PNG files.
pub struct HeatmapRenderer {
    config: ChartConfig,
    low: RGBColor,
    high: RGBColor,
}

impl HeatmapRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            low: RAMP_LOW,
            high: RAMP_HIGH,
        }
    }

    /// Cell color for a count against the grid maximum.
    fn cell_color(&self, count: u32, max: u32) -> RGBColor {
        if max == 0 {
            return self.low;
        }
        ramp(self.low, self.high, count as f64 / max as f64)
    }

    /// Genre rows against the twelve calendar months.
    pub fn render_monthly(&self, profile: &MonthlyProfile, path: &Path) -> Result<()> {
        let genres: Vec<Genre> = profile.keys().copied().collect();
        let max = profile
            .values()
            .flat_map(|months| months.iter().copied())
            .max()
            .unwrap_or(0);

        let root = BitMapBackend::new(path, (self.config.width, self.config.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let rows = genres.len().max(1) as i32;
        let mut chart = ChartBuilder::on(&root)
            .caption(
                &self.config.title,
                (
                    self.config.style.title_font.family.as_str(),
                    self.config.style.title_font.size + 4,
                ),
            )
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(110)
            .build_cartesian_2d(0..12i32, 0..rows)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(12)
            .x_label_formatter(&|m: &i32| month_abbr(*m as usize).to_string())
            .y_labels(genres.len())
            .y_label_formatter(&|idx: &i32| {
                genres
                    .get(*idx as usize)
                    .map(|g| g.name().to_string())
                    .unwrap_or_default()
            })
            .draw()?;

        chart.draw_series(genres.iter().enumerate().flat_map(|(gi, genre)| {
            let months = profile[genre];
            (0..12).map(move |m| {
                Rectangle::new(
                    [(m as i32, gi as i32), (m as i32 + 1, gi as i32 + 1)],
                    self.cell_color(months[m], max).filled(),
                )
            })
        }))?;

        root.present()?;
        info!(path = %path.display(), genres = genres.len(), "rendered monthly heatmap");
        Ok(())
    }

    /// Genre rows against calendar years, sparse buckets drawn as zero.
    /// Expects year-bucketed series.
    pub fn render_yearly(&self, series: &SeriesByGenre, path: &Path) -> Result<()> {
        let genres: Vec<Genre> = series.keys().copied().collect();

        let mut counts: HashMap<(Genre, i32), u32> = HashMap::new();
        let mut min_year = i32::MAX;
        let mut max_year = i32::MIN;
        let mut max_count = 0u32;
        for (genre, points) in series {
            for point in points {
                let year = match point.bucket {
                    TimeBucket::Year(year) => year,
                    TimeBucket::Month { year, .. } => year,
                };
                min_year = min_year.min(year);
                max_year = max_year.max(year);
                max_count = max_count.max(point.count);
                *counts.entry((*genre, year)).or_insert(0) += point.count;
            }
        }
        if min_year > max_year {
            // Nothing to draw; an empty grid is still a valid render.
            min_year = 0;
            max_year = 0;
        }

        let root = BitMapBackend::new(path, (self.config.width, self.config.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let rows = genres.len().max(1) as i32;
        let mut chart = ChartBuilder::on(&root)
            .caption(
                &self.config.title,
                (
                    self.config.style.title_font.family.as_str(),
                    self.config.style.title_font.size + 4,
                ),
            )
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(110)
            .build_cartesian_2d(min_year..max_year + 1, 0..rows)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .y_labels(genres.len())
            .y_label_formatter(&|idx: &i32| {
                genres
                    .get(*idx as usize)
                    .map(|g| g.name().to_string())
                    .unwrap_or_default()
            })
            .draw()?;

        let counts = &counts;
        chart.draw_series(genres.iter().enumerate().flat_map(|(gi, genre)| {
            (min_year..=max_year).map(move |year| {
                let count = counts.get(&(*genre, year)).copied().unwrap_or(0);
                Rectangle::new(
                    [(year, gi as i32), (year + 1, gi as i32 + 1)],
                    self.cell_color(count, max_count).filled(),
                )
            })
        }))?;

        root.present()?;
        info!(path = %path.display(), genres = genres.len(), "rendered yearly heatmap");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_abbreviations() {
        assert_eq!(month_abbr(0), "Jan");
        assert_eq!(month_abbr(9), "Oct");
        assert_eq!(month_abbr(11), "Dec");
        assert_eq!(month_abbr(12), "???");
    }

    #[test]
    fn test_cell_color_scaling() {
        let renderer = HeatmapRenderer::new(ChartConfig::default());

        assert_eq!(renderer.cell_color(0, 100), RAMP_LOW);
        assert_eq!(renderer.cell_color(100, 100), RAMP_HIGH);
        // Zero maximum must not divide by zero.
        assert_eq!(renderer.cell_color(0, 0), RAMP_LOW);
    }
}
