//! scatter-rs: scatter-plot layer renderer.
//!
//! Projects data points into device pixels and paints per-point markers,
//! value labels and highlight crosshairs into any [`render::DrawingSurface`].
//! Chart lifecycle, axes and animation timing stay with the host; the
//! renderer consumes them through the provider traits in [`core`].

pub mod core;
pub mod error;
pub mod render;
pub mod scatter;
pub mod telemetry;

pub use error::{ChartError, ChartResult};
pub use scatter::{FrameReport, RenderContext, ScatterRenderConfig, ScatterRenderer};
