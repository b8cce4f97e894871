use crate::render::error::RenderError;
use crate::types::lat_lon::LatLon;

/// Handle to a marker previously placed on a [`MapSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub usize);

/// The operations the map renderer needs from a mapping library.
///
/// Implementations return [`RenderError::MissingSurface`] when the requested container
/// does not exist, or when markers are added before the map view was created.
pub trait MapSurface {
    fn create_map(&mut self, container: &str, center: LatLon, zoom: u8)
        -> Result<(), RenderError>;

    fn add_tile_layer(&mut self, url: &str, attribution: &str) -> Result<(), RenderError>;

    fn add_marker(&mut self, position: LatLon) -> Result<MarkerId, RenderError>;

    fn bind_popup(&mut self, marker: MarkerId, html: &str) -> Result<(), RenderError>;
}
