use crate::map::surface::MapSurface;
use crate::render::error::RenderError;
use crate::types::lat_lon::LatLon;
use crate::types::station_record::StationRecord;
use log::debug;

pub const MAP_CONTAINER: &str = "map";
/// Center of Colombia.
pub const MAP_CENTER: LatLon = LatLon(4.7110, -74.0721);
pub const MAP_ZOOM: u8 = 6;
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;

/// Outcome of a map render: how many records got a marker and how many were skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapSummary {
    pub plotted: usize,
    pub skipped: usize,
}

/// Plots one marker per record with valid coordinates.
///
/// Records whose coordinates are missing, non-numeric or non-finite are skipped without
/// error and do not affect any other record. Overlapping markers are neither merged
/// nor clustered.
///
/// # Errors
///
/// Only surface errors are returned (e.g. [`RenderError::MissingSurface`]); they indicate
/// a setup defect rather than bad data.
pub fn render_map<S: MapSurface + ?Sized>(
    records: &[StationRecord],
    surface: &mut S,
) -> Result<MapSummary, RenderError> {
    surface.create_map(MAP_CONTAINER, MAP_CENTER, MAP_ZOOM)?;
    surface.add_tile_layer(TILE_URL, TILE_ATTRIBUTION)?;

    let mut summary = MapSummary::default();
    for record in records {
        let Some(position) = record.coordinates() else {
            summary.skipped += 1;
            continue;
        };
        let marker = surface.add_marker(position)?;
        surface.bind_popup(marker, &popup_html(record))?;
        summary.plotted += 1;
    }

    debug!(
        "Placed {} markers, skipped {} records without valid coordinates",
        summary.plotted, summary.skipped
    );
    Ok(summary)
}

/// Builds the popup shown for a marker.
///
/// Field values are substituted verbatim, without HTML escaping; only the data source
/// decides what ends up in the popup.
pub fn popup_html(record: &StationRecord) -> String {
    let field = |value: &Option<String>| value.as_deref().unwrap_or_default().to_string();

    let mut html = format!(
        "<b>{}</b><br>\n{}, {}<br>\n<hr>\n<b>Sensor:</b> {}<br>\n<b>Value:</b> {} {}",
        field(&record.station_name),
        field(&record.municipality),
        field(&record.region),
        field(&record.sensor_description),
        field(&record.observed_value),
        field(&record.unit),
    );
    if let Some(observed_at) = record.observed_at.as_deref().filter(|s| !s.is_empty()) {
        html.push_str(&format!("<br>\n<small>{}</small>", observed_at));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{scenario_records, RecordingMap};

    #[test]
    fn test_render_map_sets_view_and_tiles() -> Result<(), RenderError> {
        let mut surface = RecordingMap::default();

        render_map(&[], &mut surface)?;

        assert_eq!(
            surface.view,
            Some((MAP_CONTAINER.to_string(), MAP_CENTER, MAP_ZOOM))
        );
        assert_eq!(
            surface.tile_layers,
            vec![(TILE_URL.to_string(), TILE_ATTRIBUTION.to_string())]
        );
        assert!(surface.markers.is_empty());
        Ok(())
    }

    #[test]
    fn test_render_map_scenario() -> Result<(), RenderError> {
        let mut surface = RecordingMap::default();

        let summary = render_map(&scenario_records(), &mut surface)?;

        assert_eq!(summary, MapSummary { plotted: 2, skipped: 1 });
        assert_eq!(surface.markers.len(), 2);
        assert!(surface
            .markers
            .iter()
            .all(|(position, _)| *position == LatLon(4.1, -74.0)));
        assert!(surface.markers.iter().all(|(_, popup)| popup.is_some()));
        Ok(())
    }

    #[test]
    fn test_render_map_skips_only_invalid_records() -> Result<(), RenderError> {
        let record = |lat: Option<&str>, lon: Option<&str>| StationRecord {
            station_name: Some(format!("{lat:?}/{lon:?}")),
            latitude: lat.map(str::to_string),
            longitude: lon.map(str::to_string),
            ..Default::default()
        };
        let records = vec![
            record(Some("1.0"), Some("2.0")),
            record(None, Some("2.0")),
            record(Some("abc"), Some("2.0")),
            record(Some("3.0"), Some("NaN")),
            record(Some("3.0"), Some("-inf")),
            record(Some("5.5"), Some("-6.5")),
        ];

        let summary = render_map(&records, &mut RecordingMap::default())?;
        assert_eq!(summary, MapSummary { plotted: 2, skipped: 4 });

        let mut surface = RecordingMap::default();
        render_map(&records, &mut surface)?;
        let positions: Vec<LatLon> = surface.markers.iter().map(|(p, _)| *p).collect();
        assert_eq!(positions, vec![LatLon(1.0, 2.0), LatLon(5.5, -6.5)]);
        Ok(())
    }

    #[test]
    fn test_popup_html_is_verbatim() {
        let record = StationRecord {
            station_name: Some("EL <b>PASO</b>".to_string()),
            municipality: Some("Leticia".to_string()),
            region: Some("Amazonas".to_string()),
            sensor_description: Some("Precipitación".to_string()),
            observed_value: Some("0.2".to_string()),
            unit: Some("mm".to_string()),
            ..Default::default()
        };

        let html = popup_html(&record);

        assert!(html.starts_with("<b>EL <b>PASO</b></b><br>"));
        assert!(html.contains("Leticia, Amazonas<br>"));
        assert!(html.contains("<b>Sensor:</b> Precipitación<br>"));
        assert!(html.ends_with("<b>Value:</b> 0.2 mm"));
    }

    #[test]
    fn test_popup_html_with_observation_time() {
        let record = StationRecord {
            observed_at: Some("2024-03-01T10:00:00.000".to_string()),
            ..Default::default()
        };

        assert!(popup_html(&record).ends_with("<small>2024-03-01T10:00:00.000</small>"));
    }
}
