//! Fixtures and recording surfaces shared by unit tests.

use crate::dashboard::chart::{ChartConfig, ChartSurface};
use crate::map::surface::{MapSurface, MarkerId};
use crate::render::error::RenderError;
use crate::types::lat_lon::LatLon;
use crate::types::station_record::StationRecord;

fn record(station: &str, region: &str, sensor: &str, lat: &str, lon: &str) -> StationRecord {
    StationRecord {
        station_id: Some(station.to_string()),
        region: Some(region.to_string()),
        sensor_description: Some(sensor.to_string()),
        latitude: Some(lat.to_string()),
        longitude: Some(lon.to_string()),
        ..Default::default()
    }
}

/// Two readings of S1 in region A and one reading of S2 in region B with an unusable
/// latitude and an empty sensor description.
pub(crate) fn scenario_records() -> Vec<StationRecord> {
    vec![
        record("S1", "A", "rain", "4.1", "-74.0"),
        record("S1", "A", "rain", "4.1", "-74.0"),
        record("S2", "B", "", "bad", "-75.0"),
    ]
}

pub(crate) const SCENARIO_JSON: &str = r#"[
    {"codigoestacion": "S1", "departamento": "A", "descripcionsensor": "rain", "latitud": "4.1", "longitud": "-74.0"},
    {"codigoestacion": "S1", "departamento": "A", "descripcionsensor": "rain", "latitud": "4.1", "longitud": "-74.0"},
    {"codigoestacion": "S2", "departamento": "B", "descripcionsensor": "", "latitud": "bad", "longitud": "-75.0"}
]"#;

#[derive(Debug, Default)]
pub(crate) struct RecordingMap {
    pub view: Option<(String, LatLon, u8)>,
    pub tile_layers: Vec<(String, String)>,
    pub markers: Vec<(LatLon, Option<String>)>,
}

impl MapSurface for RecordingMap {
    fn create_map(
        &mut self,
        container: &str,
        center: LatLon,
        zoom: u8,
    ) -> Result<(), RenderError> {
        self.view = Some((container.to_string(), center, zoom));
        Ok(())
    }

    fn add_tile_layer(&mut self, url: &str, attribution: &str) -> Result<(), RenderError> {
        self.tile_layers
            .push((url.to_string(), attribution.to_string()));
        Ok(())
    }

    fn add_marker(&mut self, position: LatLon) -> Result<MarkerId, RenderError> {
        self.markers.push((position, None));
        Ok(MarkerId(self.markers.len() - 1))
    }

    fn bind_popup(&mut self, marker: MarkerId, html: &str) -> Result<(), RenderError> {
        self.markers[marker.0].1 = Some(html.to_string());
        Ok(())
    }
}

/// Records every chart; containers outside `containers` are reported missing.
#[derive(Debug, Default)]
pub(crate) struct RecordingCharts {
    containers: Option<Vec<String>>,
    pub charts: Vec<(String, ChartConfig)>,
}

impl RecordingCharts {
    pub fn with_containers(containers: &[&str]) -> Self {
        Self {
            containers: Some(containers.iter().map(|c| c.to_string()).collect()),
            charts: Vec::new(),
        }
    }
}

impl ChartSurface for RecordingCharts {
    fn create_chart(&mut self, container: &str, config: &ChartConfig) -> Result<(), RenderError> {
        if let Some(known) = &self.containers {
            if !known.iter().any(|c| c == container) {
                return Err(RenderError::MissingSurface(container.to_string()));
            }
        }
        self.charts.push((container.to_string(), config.clone()));
        Ok(())
    }
}
