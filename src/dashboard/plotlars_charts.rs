//! A [`ChartSurface`] backed by `plotlars`, writing one HTML page per chart container.
//!
//! Legend placement is left to Plotly's default (right of the plot): `plotlars`' pie
//! chart exposes no legend setting, and bar charts carry no legend.

use crate::dashboard::chart::{ChartConfig, ChartKind, ChartSurface};
use crate::render::error::RenderError;
use crate::render::output::{require_dir, write_atomic};
use log::info;
use plotlars::{Axis, BarPlot, Orientation, PieChart, Plot, Rgb, Text};
use polars::prelude::*;
use std::iter;
use std::path::{Path, PathBuf};

const LABEL_COLUMN: &str = "label";
const VALUE_COLUMN: &str = "value";

pub struct PlotlarsCharts {
    output_dir: PathBuf,
    containers: Vec<String>,
    written: Vec<PathBuf>,
}

impl PlotlarsCharts {
    /// Creates a surface exposing the given containers, each rendered to `<container>.html`.
    pub fn new(output_dir: &Path, containers: &[&str]) -> Result<Self, RenderError> {
        require_dir(output_dir)?;
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            containers: containers.iter().map(|c| c.to_string()).collect(),
            written: Vec::new(),
        })
    }

    /// Files written so far, in rendering order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn chart_path(&self, container: &str) -> PathBuf {
        self.output_dir.join(format!("{}.html", container))
    }

    fn write_plot(&mut self, container: &str, plot: &impl Plot) -> Result<(), RenderError> {
        let path = write_atomic(&self.chart_path(container), &plot.to_html())?;
        info!("Wrote chart '{}' to {}", container, path.display());
        self.written.push(path);
        Ok(())
    }
}

fn frame_error(container: &str) -> impl FnOnce(PolarsError) -> RenderError + '_ {
    move |source| RenderError::Frame {
        container: container.to_string(),
        source,
    }
}

fn title_text(config: &ChartConfig) -> Text {
    let title = config
        .options
        .title
        .clone()
        .or_else(|| config.datasets.first().map(|d| d.label.clone()))
        .unwrap_or_default();
    Text::from(title.as_str()).font("Arial").size(18)
}

fn first_data(config: &ChartConfig) -> &[u32] {
    config
        .datasets
        .first()
        .map(|d| d.data.as_slice())
        .unwrap_or_default()
}

/// One row per label with its value.
fn bar_frame(container: &str, config: &ChartConfig) -> Result<DataFrame, RenderError> {
    df!(
        LABEL_COLUMN => config.labels.as_slice(),
        VALUE_COLUMN => first_data(config)
    )
    .map_err(frame_error(container))
}

/// One row per counted item. Pie slices are sized by label frequency, so each label is
/// repeated as many times as its count.
fn pie_frame(container: &str, config: &ChartConfig) -> Result<DataFrame, RenderError> {
    let expanded: Vec<&str> = config
        .labels
        .iter()
        .zip(first_data(config))
        .flat_map(|(label, count)| iter::repeat(label.as_str()).take(*count as usize))
        .collect();
    df!(LABEL_COLUMN => expanded).map_err(frame_error(container))
}

/// Builds the horizontal bar plot for the first dataset of `config`.
fn bar_plot(container: &str, config: &ChartConfig) -> Result<BarPlot, RenderError> {
    let frame = bar_frame(container, config)?;

    let (r, g, b) = config
        .datasets
        .first()
        .and_then(|d| d.color)
        .unwrap_or((54, 162, 235));

    let value_axis = if config.options.begin_at_zero {
        let max = first_data(config).iter().copied().max().unwrap_or(0).max(1);
        Axis::new()
            .show_grid(true)
            .show_zero_line(true)
            .value_range(vec![0.0, f64::from(max) * 1.1])
    } else {
        Axis::new().show_grid(true)
    };

    Ok(BarPlot::builder()
        .data(&frame)
        .labels(LABEL_COLUMN)
        .values(VALUE_COLUMN)
        .orientation(Orientation::Horizontal)
        .colors(vec![Rgb(r, g, b)])
        .plot_title(title_text(config))
        .x_axis(&value_axis)
        .build())
}

/// Builds the pie chart for the first dataset of `config`.
fn pie_chart(container: &str, config: &ChartConfig) -> Result<PieChart, RenderError> {
    let frame = pie_frame(container, config)?;

    Ok(PieChart::builder()
        .data(&frame)
        .labels(LABEL_COLUMN)
        .plot_title(title_text(config))
        .build())
}

impl ChartSurface for PlotlarsCharts {
    fn create_chart(&mut self, container: &str, config: &ChartConfig) -> Result<(), RenderError> {
        if !self.containers.iter().any(|c| c == container) {
            return Err(RenderError::MissingSurface(container.to_string()));
        }
        match config.kind {
            ChartKind::HorizontalBar => {
                let plot = bar_plot(container, config)?;
                self.write_plot(container, &plot)
            }
            ChartKind::Pie => {
                let plot = pie_chart(container, config)?;
                self.write_plot(container, &plot)
            }
        }
    }
}
