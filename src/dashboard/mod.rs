pub mod aggregation;
pub mod chart;
pub mod plotlars_charts;
pub mod renderer;
