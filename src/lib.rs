//! toerings: live visualization bindings for a ring-gauge telemetry dashboard.
//!
//! The crate attaches small sparkline plots and themeable custom properties
//! to host elements and keeps them current as telemetry snapshots arrive,
//! mutating already-constructed state instead of rebuilding it every tick.
//! The chart engine, color library and element are consumed through narrow
//! traits; headless implementations ship for tests and offscreen use.

pub mod color;
pub mod core;
pub mod element;
pub mod error;
pub mod feed;
pub mod format;
pub mod render;
pub mod snapshot;
pub mod sparkline;
pub mod style;
pub mod telemetry;
pub mod theme;
pub mod widget;
pub mod window;

pub use color::{Color, ColorModel};
pub use element::Element;
pub use error::{RingsError, RingsResult};
pub use sparkline::{FramePlotEngine, PlotSample, SparklineBinding};
pub use style::{StyleMap, StyleVars};
pub use theme::{Theme, ThemeCell};
pub use window::BoundedWindow;
