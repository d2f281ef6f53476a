mod frame;
mod primitives;
mod recording;
mod surface;

pub use frame::{DrawCommand, RecordedFrame};
pub use primitives::{Color, FontSpec, LineDash, TextHAlign};
pub use recording::{GraphicsState, RecordingSurface};
pub use surface::{DrawingSurface, SurfaceStateGuard};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoSurface};
