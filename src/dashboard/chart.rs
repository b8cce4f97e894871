use crate::render::error::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Bars grow along the horizontal axis; labels sit on the vertical axis.
    HorizontalBar,
    Pie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

/// One series of values, aligned index-by-index with [`ChartConfig::labels`].
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u32>,
    /// Fill color as RGB; `None` lets the chart library choose.
    pub color: Option<(u8, u8, u8)>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartOptions {
    /// Value axis starts at zero.
    pub begin_at_zero: bool,
    pub legend: Option<LegendPosition>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
}

/// The operation the dashboard needs from a charting library.
pub trait ChartSurface {
    /// Draws `config` into `container`.
    ///
    /// Returns [`RenderError::MissingSurface`] when no such container exists.
    fn create_chart(&mut self, container: &str, config: &ChartConfig) -> Result<(), RenderError>;
}
