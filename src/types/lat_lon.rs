use serde::Serialize;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are represented as `f64`.
///
/// # Examples
///
/// ```
/// use hydrostat::LatLon;
///
/// let bogota = LatLon(4.7110, -74.0721);
/// assert_eq!(bogota.0, 4.7110); // Latitude
/// assert_eq!(bogota.1, -74.0721); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon(pub f64, pub f64);
