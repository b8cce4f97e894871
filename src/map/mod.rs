pub mod leaflet;
pub mod renderer;
pub mod surface;
