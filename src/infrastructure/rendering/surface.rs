use strum::AsRefStr;

use crate::domain::errors::RenderingResult;

/// Horizontal anchor of drawn text
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor of drawn text
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Alphabetic,
}

/// Font measurements of one string
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    pub width: f64,
    pub ascent: f64,
    pub descent: f64,
    pub hanging_baseline: f64,
}

impl TextMetrics {
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// Subset of a 2D canvas the graph renderer draws through.
///
/// Style setters apply to every following path or text, like the HTML
/// canvas state machine.
pub trait DrawSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn resize(&mut self, width: u32, height: u32);

    /// Clear the whole surface to a solid colour.
    fn fill_background(&mut self, color: &str);

    fn set_stroke(&mut self, color: &str, line_width: f64);
    fn set_fill(&mut self, color: &str);
    fn set_font(&mut self, size_px: f64);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> RenderingResult<()>;
    fn measure_text(&self, text: &str) -> RenderingResult<TextMetrics>;
}
