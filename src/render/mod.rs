mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{LinePrimitive, PolygonPrimitive};

use crate::error::RingsResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so painting code stays
/// isolated from binding and color-derivation logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> RingsResult<()>;
}
