mod dashboard;
mod error;
mod fetcher;
mod map;
mod pipeline;
mod render;
mod types;

#[cfg(test)]
mod testing;

pub use error::HydrostatError;
pub use pipeline::*;

pub use fetcher::error::FetchError;
pub use fetcher::record_fetcher::{parse_records, RecordFetcher, DATA_URL};
pub use render::error::RenderError;
pub use render::index_page::{write_index_page, INDEX_FILE_NAME};

pub use types::lat_lon::LatLon;
pub use types::station_record::{is_plottable, normalize_category, StationRecord, UNSPECIFIED_LABEL};

pub use map::leaflet::{LeafletMap, MAP_FILE_NAME};
pub use map::renderer::*;
pub use map::surface::{MapSurface, MarkerId};

pub use dashboard::aggregation::{sensor_type_distribution, stations_per_region, CategoryCounts};
pub use dashboard::chart::{ChartConfig, ChartKind, ChartOptions, ChartSurface, Dataset, LegendPosition};
pub use dashboard::plotlars_charts::PlotlarsCharts;
pub use dashboard::renderer::*;
