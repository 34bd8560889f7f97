use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{DrawSurface, TextAlign, TextBaseline, TextMetrics};
use crate::domain::errors::{AppError, RenderingResult};
use crate::domain::logging::{get_logger, LogComponent};

/// Canvas 2D surface - Infrastructure implementation
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap an existing canvas element
    pub fn new(canvas: HtmlCanvasElement) -> RenderingResult<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| AppError::RenderingError("Failed to get 2D context".into()))?
            .ok_or_else(|| AppError::RenderingError("Canvas has no 2D context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::RenderingError("Failed to cast to 2D context".into()))?;

        get_logger().debug(
            LogComponent::Infrastructure("CanvasSurface"),
            &format!("Attached to canvas {}x{}", canvas.width(), canvas.height()),
        );

        Ok(Self { canvas, context })
    }

    /// Look the canvas up by element id
    pub fn from_element_id(canvas_id: &str) -> RenderingResult<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| AppError::BrowserApiError("Document not available".into()))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| AppError::RenderingError(format!("Canvas '{}' not found", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::RenderingError(format!("Element '{}' is not a canvas", canvas_id)))?;
        Self::new(canvas)
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl DrawSurface for CanvasSurface {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn fill_background(&mut self, color: &str) {
        let (width, height) = (self.width(), self.height());
        self.context.clear_rect(0.0, 0.0, width, height);
        self.context.set_fill_style_str(color);
        self.context.fill_rect(0.0, 0.0, width, height);
    }

    fn set_stroke(&mut self, color: &str, line_width: f64) {
        self.context.set_stroke_style_str(color);
        self.context.set_line_width(line_width);
    }

    fn set_fill(&mut self, color: &str) {
        self.context.set_fill_style_str(color);
    }

    fn set_font(&mut self, size_px: f64) {
        self.context.set_font(&format!("{}px Arial", size_px));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.context.set_text_align(align.as_ref());
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.context.set_text_baseline(baseline.as_ref());
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.context.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> RenderingResult<()> {
        self.context
            .fill_text(text, x, y)
            .map_err(|e| AppError::RenderingError(format!("fillText failed: {:?}", e)))
    }

    fn measure_text(&self, text: &str) -> RenderingResult<TextMetrics> {
        let metrics = self
            .context
            .measure_text(text)
            .map_err(|e| AppError::RenderingError(format!("measureText failed: {:?}", e)))?;
        let ascent = metrics.font_bounding_box_ascent();
        Ok(TextMetrics {
            width: metrics.width(),
            ascent,
            descent: metrics.font_bounding_box_descent(),
            hanging_baseline: hanging_baseline(&metrics).unwrap_or(HANGING_FALLBACK_RATIO * ascent),
        })
    }
}

/// Share of the ascent used when the browser does not report `hangingBaseline`.
const HANGING_FALLBACK_RATIO: f64 = 0.8;

/// `TextMetrics.hangingBaseline` has no web-sys binding, read it reflectively.
fn hanging_baseline(metrics: &web_sys::TextMetrics) -> Option<f64> {
    js_sys::Reflect::get(metrics, &JsValue::from_str("hangingBaseline"))
        .ok()
        .and_then(|value| value.as_f64())
        .filter(|value| value.is_finite())
}
