pub mod lat_lon;
pub mod station_record;
