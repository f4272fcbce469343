mod chart;
mod density_grid;
mod error;
mod error_bar_chart;
mod frame;
mod histogram_chart;
mod svg;

pub use chart::Chart;
pub use density_grid::{DensityGrid, DensityPanel};
pub use error::RenderError;
pub use error_bar_chart::ErrorBarChart;
pub use histogram_chart::HistogramChart;
pub use svg::{Color, LineStyle};
