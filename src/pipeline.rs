//! This module composes the three stages of a run: fetch the records, draw the map, and
//! draw the dashboard charts. Each stage can also be driven on its own with injected
//! records and surfaces.

use crate::dashboard::chart::ChartSurface;
use crate::dashboard::plotlars_charts::PlotlarsCharts;
use crate::dashboard::renderer::{render_dashboard, REGION_CHART_CONTAINER, SENSOR_CHART_CONTAINER};
use crate::error::HydrostatError;
use crate::fetcher::record_fetcher::RecordFetcher;
use crate::map::leaflet::LeafletMap;
use crate::map::renderer::{render_map, MapSummary, MAP_CONTAINER};
use crate::map::surface::MapSurface;
use crate::render::error::RenderError;
use crate::render::index_page::write_index_page;
use crate::types::station_record::StationRecord;
use bon::bon;
use log::{error, info};
use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT_DIR: &str = "output";
const PAGE_TITLE: &str = "Hydrometeorological monitoring stations";

/// What a run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The fetch failed; nothing was rendered.
    NoData,
    /// Map and charts were rendered from `records` records.
    Rendered { records: usize, map: MapSummary },
}

/// Runs fetch, then map and dashboard rendering, exactly once per call.
///
/// # Examples
///
/// ```no_run
/// # use hydrostat::{HydrostatError, Pipeline};
/// # #[tokio::main]
/// # async fn main() -> Result<(), HydrostatError> {
/// let pipeline = Pipeline::builder().output_dir("site".into()).build();
/// let outcome = pipeline.run().await?;
/// println!("{:?}", outcome);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    fetcher: RecordFetcher,
    output_dir: PathBuf,
}

#[bon]
impl Pipeline {
    /// Creates a pipeline against the public endpoint.
    ///
    /// * `.output_dir(PathBuf)`: Optional. Where the pages are written. Defaults to `output`.
    #[builder]
    pub fn new(output_dir: Option<PathBuf>) -> Self {
        Self {
            fetcher: RecordFetcher::new(),
            output_dir: output_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        }
    }
}

impl Pipeline {
    #[cfg(test)]
    pub(crate) fn with_fetcher(mut self, fetcher: RecordFetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Fetch stage. A failed fetch is logged and reported as no data.
    pub async fn fetch(&self) -> Option<Vec<StationRecord>> {
        match self.fetcher.fetch_records().await {
            Ok(records) => Some(records),
            Err(e) => {
                error!("No data available, skipping rendering: {}", e);
                None
            }
        }
    }

    /// Render stages over already fetched records.
    pub fn render<M, C>(
        records: &[StationRecord],
        map: &mut M,
        charts: &mut C,
    ) -> Result<MapSummary, RenderError>
    where
        M: MapSurface + ?Sized,
        C: ChartSurface + ?Sized,
    {
        let summary = render_map(records, map)?;
        render_dashboard(records, charts)?;
        Ok(summary)
    }

    /// Fetches, then renders onto the given surfaces. Nothing is drawn when the fetch fails.
    pub async fn run_with<M, C>(
        &self,
        map: &mut M,
        charts: &mut C,
    ) -> Result<RunOutcome, HydrostatError>
    where
        M: MapSurface + ?Sized,
        C: ChartSurface + ?Sized,
    {
        let Some(records) = self.fetch().await else {
            return Ok(RunOutcome::NoData);
        };
        let summary = Self::render(&records, map, charts)?;
        Ok(RunOutcome::Rendered {
            records: records.len(),
            map: summary,
        })
    }

    /// Fetches, renders `map.html` and the chart pages, and ties them together in `index.html`.
    ///
    /// # Errors
    ///
    /// Returns [`HydrostatError::Render`] when the output directory cannot be prepared or a
    /// page cannot be written. Fetch failures are not errors: they yield
    /// [`RunOutcome::NoData`] and no files are written.
    pub async fn run(&self) -> Result<RunOutcome, HydrostatError> {
        let Some(records) = self.fetch().await else {
            return Ok(RunOutcome::NoData);
        };

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| RenderError::OutputDirCreation(self.output_dir.clone(), e))?;

        let mut map = LeafletMap::new(&self.output_dir, MAP_CONTAINER)?;
        let mut charts = PlotlarsCharts::new(
            &self.output_dir,
            &[REGION_CHART_CONTAINER, SENSOR_CHART_CONTAINER],
        )?;
        let summary = Self::render(&records, &mut map, &mut charts)?;

        let mut files = vec![map.write()?];
        files.extend_from_slice(charts.written());
        let index = write_index_page(&self.output_dir, PAGE_TITLE, &files, chrono::Utc::now())?;
        info!(
            "Rendered {} records ({} markers) to {}",
            records.len(),
            summary.plotted,
            index.display()
        );

        Ok(RunOutcome::Rendered {
            records: records.len(),
            map: summary,
        })
    }
}
