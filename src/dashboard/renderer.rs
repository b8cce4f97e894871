use crate::dashboard::aggregation::{sensor_type_distribution, stations_per_region, CategoryCounts};
use crate::dashboard::chart::{
    ChartConfig, ChartKind, ChartOptions, ChartSurface, Dataset, LegendPosition,
};
use crate::render::error::RenderError;
use crate::types::station_record::StationRecord;
use log::debug;

pub const REGION_CHART_CONTAINER: &str = "regionChart";
pub const SENSOR_CHART_CONTAINER: &str = "sensorChart";

const REGION_CHART_LABEL: &str = "Stations per region";
const SENSOR_CHART_LABEL: &str = "Sensor type distribution";
const REGION_BAR_COLOR: (u8, u8, u8) = (54, 162, 235);

/// Horizontal bar chart of distinct stations per region, value axis from zero.
pub fn region_chart_config(counts: &CategoryCounts) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::HorizontalBar,
        labels: counts.labels(),
        datasets: vec![Dataset {
            label: REGION_CHART_LABEL.to_string(),
            data: counts.values(),
            color: Some(REGION_BAR_COLOR),
        }],
        options: ChartOptions {
            begin_at_zero: true,
            legend: None,
            title: None,
        },
    }
}

/// Pie chart of readings per sensor type, legend on top.
pub fn sensor_chart_config(counts: &CategoryCounts) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Pie,
        labels: counts.labels(),
        datasets: vec![Dataset {
            label: SENSOR_CHART_LABEL.to_string(),
            data: counts.values(),
            color: None,
        }],
        options: ChartOptions {
            begin_at_zero: false,
            legend: Some(LegendPosition::Top),
            title: Some(SENSOR_CHART_LABEL.to_string()),
        },
    }
}

/// Aggregates `records` and draws the region and sensor charts.
///
/// Both passes only read `records`; rendering the same input twice produces the same
/// chart configurations.
///
/// # Errors
///
/// Returns [`RenderError::MissingSurface`] when a chart container is absent. This is a
/// setup defect and is not recovered from.
pub fn render_dashboard<S: ChartSurface + ?Sized>(
    records: &[StationRecord],
    surface: &mut S,
) -> Result<(), RenderError> {
    let regions = stations_per_region(records);
    debug!("Aggregated {} regions", regions.len());
    surface.create_chart(REGION_CHART_CONTAINER, &region_chart_config(&regions))?;

    let sensors = sensor_type_distribution(records);
    debug!("Aggregated {} sensor types", sensors.len());
    surface.create_chart(SENSOR_CHART_CONTAINER, &sensor_chart_config(&sensors))?;

    Ok(())
}
