pub mod geometry;
pub mod scale;
pub mod types;

pub use geometry::{PlotVertex, SparklineGeometry, project_sparkline};
pub use scale::LinearScale;
pub use types::Viewport;
