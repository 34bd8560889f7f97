pub mod canvas_surface;
pub mod graph_renderer;
pub mod recording_surface;
pub mod surface;

pub use canvas_surface::CanvasSurface;
pub use graph_renderer::GraphRenderer;
pub use recording_surface::{DrawnText, RecordingSurface, StrokedPath};
pub use surface::*;
