//! A [`MapSurface`] that produces a standalone Leaflet page.
//!
//! Calls are recorded in memory and [`LeafletMap::write`] emits `map.html`, which loads
//! Leaflet from its CDN and replays the view, tile layer, markers and popups.

use crate::map::surface::{MapSurface, MarkerId};
use crate::render::error::RenderError;
use crate::render::output::{require_dir, write_atomic};
use crate::types::lat_lon::LatLon;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const MAP_FILE_NAME: &str = "map.html";
const LEAFLET_VERSION: &str = "1.9.4";

#[derive(Debug, Clone, Serialize)]
struct MapView {
    container: String,
    center: LatLon,
    zoom: u8,
}

#[derive(Debug, Clone, Serialize)]
struct TileLayer {
    url: String,
    attribution: String,
}

#[derive(Debug, Clone, Serialize)]
struct Marker {
    position: LatLon,
    popup: Option<String>,
}

/// Serializes `value` for an inline `<script>`. `</` becomes `<\/` so that no string
/// value can close the script element early.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, RenderError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

#[derive(Debug, Clone)]
pub struct LeafletMap {
    output_dir: PathBuf,
    container: String,
    view: Option<MapView>,
    tile_layers: Vec<TileLayer>,
    markers: Vec<Marker>,
}

impl LeafletMap {
    /// Creates a page with a single map element named `container`.
    pub fn new(output_dir: &Path, container: &str) -> Result<Self, RenderError> {
        require_dir(output_dir)?;
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            container: container.to_string(),
            view: None,
            tile_layers: Vec::new(),
            markers: Vec::new(),
        })
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    fn view(&self) -> Result<&MapView, RenderError> {
        self.view
            .as_ref()
            .ok_or_else(|| RenderError::MissingSurface(self.container.clone()))
    }

    /// Renders the page to an HTML string.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let view = self.view()?;
        // Popup HTML itself is not escaped, only made safe to embed in the script.
        let view_json = script_json(view)?;
        let tiles_json = script_json(&self.tile_layers)?;
        let markers_json = script_json(&self.markers)?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<link rel="stylesheet" href="https://unpkg.com/leaflet@{version}/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@{version}/dist/leaflet.js"></script>
<style>html, body, #{container} {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="{container}"></div>
<script>
const view = {view_json};
const map = L.map(view.container).setView(view.center, view.zoom);
for (const tile of {tiles_json}) {{
    L.tileLayer(tile.url, {{ attribution: tile.attribution }}).addTo(map);
}}
for (const marker of {markers_json}) {{
    const m = L.marker(marker.position).addTo(map);
    if (marker.popup !== null) {{
        m.bindPopup(marker.popup);
    }}
}}
</script>
</body>
</html>
"#,
            version = LEAFLET_VERSION,
            container = view.container,
        ))
    }

    /// Writes `map.html` into the output directory and returns its path.
    pub fn write(&self) -> Result<PathBuf, RenderError> {
        let html = self.to_html()?;
        write_atomic(&self.output_dir.join(MAP_FILE_NAME), &html)
    }
}

impl MapSurface for LeafletMap {
    fn create_map(
        &mut self,
        container: &str,
        center: LatLon,
        zoom: u8,
    ) -> Result<(), RenderError> {
        if container != self.container {
            return Err(RenderError::MissingSurface(container.to_string()));
        }
        self.view = Some(MapView {
            container: container.to_string(),
            center,
            zoom,
        });
        Ok(())
    }

    fn add_tile_layer(&mut self, url: &str, attribution: &str) -> Result<(), RenderError> {
        self.view()?;
        self.tile_layers.push(TileLayer {
            url: url.to_string(),
            attribution: attribution.to_string(),
        });
        Ok(())
    }

    fn add_marker(&mut self, position: LatLon) -> Result<MarkerId, RenderError> {
        self.view()?;
        self.markers.push(Marker {
            position,
            popup: None,
        });
        Ok(MarkerId(self.markers.len() - 1))
    }

    fn bind_popup(&mut self, marker: MarkerId, html: &str) -> Result<(), RenderError> {
        let entry = self
            .markers
            .get_mut(marker.0)
            .ok_or_else(|| RenderError::MissingSurface(format!("marker {}", marker.0)))?;
        entry.popup = Some(html.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::renderer::{render_map, MAP_CONTAINER, TILE_URL};
    use crate::testing::scenario_records;

    #[test]
    fn test_write_map_page() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let mut map = LeafletMap::new(dir.path(), MAP_CONTAINER)?;

        render_map(&scenario_records(), &mut map)?;
        let path = map.write()?;
        let html = std::fs::read_to_string(&path)?;

        assert_eq!(path, dir.path().join(MAP_FILE_NAME));
        assert_eq!(map.marker_count(), 2);
        assert!(html.contains(r#"<div id="map"></div>"#));
        assert!(html.contains(r#""center":[4.711,-74.0721],"zoom":6"#));
        assert!(html.contains(TILE_URL));
        assert_eq!(html.matches(r#""position":[4.1,-74.0]"#).count(), 2);
        Ok(())
    }

    #[test]
    fn test_popup_cannot_close_script() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let mut map = LeafletMap::new(dir.path(), MAP_CONTAINER)?;
        let mut records = scenario_records();
        records[0].station_name = Some("X</script><p>".to_string());

        render_map(&records, &mut map)?;
        let html = map.to_html()?;

        // leaflet.js include and the inline script
        assert_eq!(html.matches("</script>").count(), 2);
        assert!(html.contains(r"<b>X<\/script><p><\/b>"));
        Ok(())
    }

    #[test]
    fn test_unknown_container_is_missing_surface() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let mut map = LeafletMap::new(dir.path(), "stations")?;

        let err = render_map(&scenario_records(), &mut map).expect_err("no 'map' element");
        assert!(matches!(err, RenderError::MissingSurface(name) if name == MAP_CONTAINER));
        Ok(())
    }

    #[test]
    fn test_marker_before_view_is_missing_surface() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let mut map = LeafletMap::new(dir.path(), MAP_CONTAINER)?;

        assert!(matches!(
            map.add_marker(LatLon(1.0, 2.0)),
            Err(RenderError::MissingSurface(_))
        ));
        assert!(matches!(map.write(), Err(RenderError::MissingSurface(_))));
        Ok(())
    }

    #[test]
    fn test_missing_output_dir() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let err = LeafletMap::new(&dir.path().join("absent"), MAP_CONTAINER)
            .expect_err("directory does not exist");
        assert!(matches!(err, RenderError::OutputDirMissing(_)));
        Ok(())
    }
}
