//! Plotters-backed draw surface: line charts, legends and leaderboards
//! written as PNG files

use crate::color::parse_color;
use crate::config::ChartConfig;
use async_trait::async_trait;
use cinegraph_common::{Genre, MovieRecord, Result, TimeWindow};
use cinegraph_views::{DrawSurface, LegendEntry, SeriesByGenre};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Pad a range by 5% on each side, with a fallback for degenerate input,
/// so lines never hug the chart border.
pub fn padded_range(min: f64, max: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min >= max {
        return (min - 0.5, min + 0.5);
    }
    let padding = (max - min) * 0.05;
    (min - padding, max + padding)
}

/// Draw surface that renders each dispatched view to a PNG under one
/// output directory: `series.png`, `legend.png` and `top_<genre>.png`.
pub struct LineChartSurface {
    config: ChartConfig,
    out_dir: PathBuf,
}

impl LineChartSurface {
    pub fn new(config: ChartConfig, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            out_dir: out_dir.into(),
        }
    }

    fn output_path(&self, name: &str) -> PathBuf {
        self.out_dir.join(name)
    }

    fn background(&self) -> RGBColor {
        self.config
            .style
            .background_color
            .as_deref()
            .map(parse_color)
            .unwrap_or(RGBColor(255, 255, 255))
    }

    /// X axis range: the brushed window when present, otherwise the extent
    /// of the plotted series.
    fn x_range(&self, series: &SeriesByGenre, window: Option<TimeWindow>) -> (f64, f64) {
        if let Some(window) = window {
            return padded_range(window.start.position(), window.end.position());
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for points in series.values() {
            for point in points {
                let x = point.bucket.position();
                min = min.min(x);
                max = max.max(x);
            }
        }
        padded_range(min, max)
    }

    fn y_range(&self, series: &SeriesByGenre) -> (f64, f64) {
        let max = series
            .values()
            .flat_map(|points| points.iter().map(|p| p.count))
            .max()
            .unwrap_or(0);
        (0.0, (max.max(1)) as f64 * 1.05)
    }
}

#[async_trait]
impl DrawSurface for LineChartSurface {
    async fn render_series(
        &mut self,
        active: &[Genre],
        series: &SeriesByGenre,
        window: Option<TimeWindow>,
    ) -> Result<()> {
        let path = self.output_path("series.png");
        let root = BitMapBackend::new(&path, (self.config.width, self.config.height))
            .into_drawing_area();
        root.fill(&self.background())?;

        let (x_min, x_max) = self.x_range(series, window);
        let (y_min, y_max) = self.y_range(series);

        let title_font = (
            self.config.style.title_font.family.as_str(),
            self.config.style.title_font.size,
        );
        let mut chart = ChartBuilder::on(&root)
            .caption(&self.config.title, title_font)
            .margin(self.config.style.margins.top as i32)
            .x_label_area_size(self.config.style.margins.bottom)
            .y_label_area_size(self.config.style.margins.left)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc(self.config.x_label.as_deref().unwrap_or(""))
            .y_desc(self.config.y_label.as_deref().unwrap_or(""))
            .draw()?;

        for genre in active {
            let Some(points) = series.get(genre) else {
                continue;
            };
            if points.is_empty() {
                continue;
            }
            let color = parse_color(genre.color());
            let line: Vec<(f64, f64)> = points
                .iter()
                .map(|p| (p.bucket.position(), p.count as f64))
                .collect();

            chart
                .draw_series(LineSeries::new(line, &color))?
                .label(genre.name())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], color));
        }

        if active.len() > 1 {
            chart
                .configure_series_labels()
                .border_style(&BLACK)
                .draw()?;
        }

        root.present()?;
        info!(path = %path.display(), lines = active.len(), "rendered series chart");
        Ok(())
    }

    async fn render_legend(&mut self, entries: &[LegendEntry]) -> Result<()> {
        let path = self.output_path("legend.png");
        let row_height = 24i32;
        let height = (entries.len().max(1) as u32) * row_height as u32 + 16;
        let root = BitMapBackend::new(&path, (260, height)).into_drawing_area();
        root.fill(&self.background())?;

        for (i, entry) in entries.iter().enumerate() {
            let y = 8 + i as i32 * row_height;
            let color = parse_color(entry.color);
            root.draw(&Rectangle::new(
                [(10, y), (30, y + row_height - 8)],
                color.filled(),
            ))?;
            root.draw(&Text::new(
                entry.genre.name(),
                (38, y + 2),
                (
                    self.config.style.label_font.family.as_str(),
                    self.config.style.label_font.size,
                ),
            ))?;
        }

        root.present()?;
        debug!(path = %path.display(), entries = entries.len(), "rendered legend");
        Ok(())
    }

    async fn render_top_n(&mut self, genre: Genre, rows: &[MovieRecord]) -> Result<()> {
        let slug = genre.name().to_lowercase().replace(' ', "_");
        let path = self.output_path(&format!("top_{slug}.png"));
        let root = BitMapBackend::new(&path, (self.config.width.min(900), 80 + rows.len() as u32 * 40))
            .into_drawing_area();
        root.fill(&self.background())?;

        let n = rows.len().max(1) as i32;
        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Top {} Movies", genre.name()),
                (
                    self.config.style.title_font.family.as_str(),
                    self.config.style.title_font.size,
                ),
            )
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(220)
            .build_cartesian_2d(0.0..10.0f64, 0..n)?;

        let titles: Vec<String> = rows
            .iter()
            .map(|row| format!("{} ({})", row.title, row.release_date.format("%Y")))
            .collect();

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Average Score")
            .y_labels(rows.len())
            .y_label_formatter(&|idx: &i32| {
                titles.get(*idx as usize).cloned().unwrap_or_default()
            })
            .draw()?;

        let color = parse_color(genre.color());
        chart.draw_series(rows.iter().enumerate().map(|(i, row)| {
            Rectangle::new(
                [(0.0, i as i32), (row.vote_average, i as i32 + 1)],
                color.mix(0.8).filled(),
            )
        }))?;

        root.present()?;
        debug!(path = %path.display(), genre = %genre, rows = rows.len(), "rendered leaderboard");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_range() {
        let (min, max) = padded_range(1990.0, 2010.0);
        assert!(min < 1990.0);
        assert!(max > 2010.0);

        // Degenerate input falls back to a renderable range.
        assert_eq!(padded_range(f64::INFINITY, f64::NEG_INFINITY), (0.0, 1.0));

        let (min, max) = padded_range(5.0, 5.0);
        assert_eq!((min, max), (4.5, 5.5));
    }
}
