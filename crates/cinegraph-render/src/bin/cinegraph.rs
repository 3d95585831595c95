//! CineGraph demo binary: load the movie CSV, render the fully populated
//! charts, then narrow to a sample selection.

use anyhow::{bail, Context};
use cinegraph_common::{init_default_logging, load_movies, Bucketing, Genre};
use cinegraph_render::{ChartConfig, HeatmapRenderer, LineChartSurface};
use cinegraph_views::{
    Aggregate, GenreSeriesAggregator, MonthlyProfileAggregator, ReleaseVolumeAggregator,
    TopNRanker, ViewCoordinator, ViewEvent,
};
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_default_logging().map_err(|err| anyhow::anyhow!(err))?;

    let mut args = std::env::args().skip(1);
    let (Some(csv_path), Some(out_dir)) = (args.next(), args.next()) else {
        bail!("usage: cinegraph <movies.csv> <output-dir>");
    };
    let out_dir = PathBuf::from(out_dir);
    std::fs::create_dir_all(&out_dir).context("creating output directory")?;

    let rows = load_movies(&csv_path).with_context(|| format!("loading {csv_path}"))?;
    if rows.is_empty() {
        bail!("no usable rows in {csv_path}");
    }

    // The heatmaps and the release-volume overview are selection-independent;
    // render them up front.
    let profile = MonthlyProfileAggregator::new().aggregate(&rows)?;
    let heatmap_config = ChartConfig {
        title: "Genre vs Month Heatmap".to_string(),
        width: 1200,
        height: 500,
        ..ChartConfig::default()
    };
    HeatmapRenderer::new(heatmap_config.clone())
        .render_monthly(&profile, &out_dir.join("heatmap_month.png"))?;

    let yearly = GenreSeriesAggregator::new(Bucketing::Year).aggregate(&rows)?;
    let yearly_config = ChartConfig {
        title: "Genre vs Year Heatmap".to_string(),
        ..heatmap_config
    };
    HeatmapRenderer::new(yearly_config)
        .render_yearly(&yearly, &out_dir.join("heatmap_year.png"))?;

    let volume = ReleaseVolumeAggregator::new(Bucketing::Year).aggregate(&rows)?;
    if let Some(peak) = volume.iter().max_by_key(|p| p.count) {
        info!(bucket = %peak.bucket, count = peak.count, "peak release year");
    }

    let surface = LineChartSurface::new(ChartConfig::default(), out_dir.clone());
    let mut coordinator = ViewCoordinator::new(rows, Bucketing::Year, TopNRanker::new(7), surface)?;

    // Initial state: every genre, full domain.
    coordinator.refresh().await?;
    if let Some(domain) = coordinator.domain() {
        info!(start = %domain.start, end = %domain.end, "rendered full domain");
    }

    // Demonstration narrowing: a few genres over the dataset's later half.
    coordinator
        .apply(ViewEvent::SetGenres(vec![
            Genre::Action,
            Genre::Drama,
            Genre::Horror,
        ]))
        .await?;
    if let Some(domain) = coordinator.domain() {
        let midpoint_year = (domain.start.year() + domain.end.year()) / 2;
        coordinator
            .apply(ViewEvent::SetTimeWindow(cinegraph_common::TimeWindow::new(
                cinegraph_common::TimeBucket::Year(midpoint_year),
                domain.end,
            )))
            .await?;
    }

    info!(out_dir = %out_dir.display(), "done");
    Ok(())
}
