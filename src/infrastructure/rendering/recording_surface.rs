use super::surface::{DrawSurface, TextAlign, TextBaseline, TextMetrics};
use crate::domain::errors::RenderingResult;

/// A stroked path as it would appear on screen
#[derive(Debug, Clone, PartialEq)]
pub struct StrokedPath {
    pub color: String,
    pub line_width: f64,
    pub subpaths: Vec<Vec<(f64, f64)>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawnText {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub font_size: f64,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Headless surface that records draw calls instead of rasterising them.
///
/// Glyphs measure `0.5em` wide, `0.8em` ascent, `0.2em` descent and a
/// `0.6em` hanging baseline.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    stroke_color: String,
    line_width: f64,
    fill_color: String,
    font_size: f64,
    align: TextAlign,
    baseline: TextBaseline,
    path: Vec<Vec<(f64, f64)>>,
    pub background: Option<String>,
    pub strokes: Vec<StrokedPath>,
    pub texts: Vec<DrawnText>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            stroke_color: "#000000".into(),
            line_width: 1.0,
            fill_color: "#000000".into(),
            font_size: 10.0,
            align: TextAlign::Left,
            baseline: TextBaseline::Alphabetic,
            path: Vec::new(),
            background: None,
            strokes: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Strokes drawn in `color`, in drawing order.
    pub fn strokes_with_color(&self, color: &str) -> Vec<&StrokedPath> {
        self.strokes.iter().filter(|s| s.color == color).collect()
    }

    pub fn text_values(&self) -> Vec<&str> {
        self.texts.iter().map(|t| t.text.as_str()).collect()
    }

    pub fn find_text(&self, text: &str) -> Option<&DrawnText> {
        self.texts.iter().find(|t| t.text == text)
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn fill_background(&mut self, color: &str) {
        self.background = Some(color.to_string());
        self.strokes.clear();
        self.texts.clear();
        self.path.clear();
    }

    fn set_stroke(&mut self, color: &str, line_width: f64) {
        self.stroke_color = color.to_string();
        self.line_width = line_width;
    }

    fn set_fill(&mut self, color: &str) {
        self.fill_color = color.to_string();
    }

    fn set_font(&mut self, size_px: f64) {
        self.font_size = size_px;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.baseline = baseline;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(vec![(x, y)]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        match self.path.last_mut() {
            Some(subpath) => subpath.push((x, y)),
            // canvas semantics: a lineTo without a current point acts as moveTo
            None => self.path.push(vec![(x, y)]),
        }
    }

    fn stroke(&mut self) {
        self.strokes.push(StrokedPath {
            color: self.stroke_color.clone(),
            line_width: self.line_width,
            subpaths: self.path.clone(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> RenderingResult<()> {
        self.texts.push(DrawnText {
            text: text.to_string(),
            x,
            y,
            color: self.fill_color.clone(),
            font_size: self.font_size,
            align: self.align,
            baseline: self.baseline,
        });
        Ok(())
    }

    fn measure_text(&self, text: &str) -> RenderingResult<TextMetrics> {
        let em = self.font_size;
        Ok(TextMetrics {
            width: 0.5 * em * text.chars().count() as f64,
            ascent: 0.8 * em,
            descent: 0.2 * em,
            hanging_baseline: 0.6 * em,
        })
    }
}
