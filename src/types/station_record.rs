//! Defines the data structure representing one row of the monitoring stations dataset,
//! together with the named policies that decide how loosely-typed fields are interpreted
//! by the map and the dashboard.

use crate::types::lat_lon::LatLon;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Label used in place of a missing or empty categorical value.
pub const UNSPECIFIED_LABEL: &str = "not specified";

// --- Data Structures ---

/// Represents a single sensor observation returned by the open-data endpoint.
///
/// A station (identified by [`StationRecord::station_id`]) usually appears many times,
/// once per sensor and observation time. Every field is optional at the source, so every
/// field is an `Option<String>`; values that arrive as JSON numbers or booleans are kept
/// in their textual form and unknown keys are ignored.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct StationRecord {
    /// Opaque station identifier (e.g., "0021205012"). Repeats across records.
    #[serde(rename = "codigoestacion", default, deserialize_with = "lenient_string")]
    pub station_id: Option<String>,
    /// Display name of the station.
    #[serde(rename = "nombreestacion", default, deserialize_with = "lenient_string")]
    pub station_name: Option<String>,
    /// Municipality the station is located in.
    #[serde(rename = "municipio", default, deserialize_with = "lenient_string")]
    pub municipality: Option<String>,
    /// Department (administrative region). Used as the grouping key for the region chart.
    #[serde(rename = "departamento", default, deserialize_with = "lenient_string")]
    pub region: Option<String>,
    /// Latitude in decimal degrees, as text.
    #[serde(rename = "latitud", default, deserialize_with = "lenient_string")]
    pub latitude: Option<String>,
    /// Longitude in decimal degrees, as text.
    #[serde(rename = "longitud", default, deserialize_with = "lenient_string")]
    pub longitude: Option<String>,
    /// Sensor code as published by the data source.
    #[serde(rename = "codigosensor", default, deserialize_with = "lenient_string")]
    pub sensor_code: Option<String>,
    /// Human readable sensor description (e.g., "Precipitación"). Used as the category key
    /// for the sensor chart.
    #[serde(rename = "descripcionsensor", default, deserialize_with = "lenient_string")]
    pub sensor_description: Option<String>,
    /// Observation timestamp as published (ISO-8601 without zone).
    #[serde(rename = "fechaobservacion", default, deserialize_with = "lenient_string")]
    pub observed_at: Option<String>,
    /// Observed value, displayed verbatim.
    #[serde(rename = "valorobservado", default, deserialize_with = "lenient_string")]
    pub observed_value: Option<String>,
    /// Unit of the observed value, displayed verbatim.
    #[serde(rename = "unidadmedida", default, deserialize_with = "lenient_string")]
    pub unit: Option<String>,
}

impl StationRecord {
    /// Parses the record's latitude and longitude.
    ///
    /// Returns `None` when either value is missing, not numeric, or not finite.
    pub fn coordinates(&self) -> Option<LatLon> {
        let latitude = parse_finite(self.latitude.as_deref()?)?;
        let longitude = parse_finite(self.longitude.as_deref()?)?;
        Some(LatLon(latitude, longitude))
    }
}

/// Whether a record can be placed on the map.
///
/// A record is plottable when both coordinates parse to finite numbers. Anything else is
/// skipped by the map without raising an error.
pub fn is_plottable(record: &StationRecord) -> bool {
    record.coordinates().is_some()
}

/// Maps a categorical label to itself, or to [`UNSPECIFIED_LABEL`] when missing or empty.
pub fn normalize_category(label: Option<&str>) -> &str {
    match label {
        Some(label) if !label.is_empty() => label,
        _ => UNSPECIFIED_LABEL,
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Accepts strings, numbers and booleans as text; `null` becomes `None`.
/// Nested arrays and objects are not meaningful for any field and are dropped.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}
