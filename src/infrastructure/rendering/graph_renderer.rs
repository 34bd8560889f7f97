use super::surface::{DrawSurface, TextAlign, TextBaseline};
use crate::domain::equation::{canvas_summary, evaluate, Coefficients, DerivedQuantities};
use crate::domain::errors::RenderingResult;
use crate::domain::graph::{GraphConfig, Palette};
use crate::domain::logging::LogComponent;
use crate::log_debug;
use crate::view_state::ViewportState;

/// Frame geometry shared by every drawing step
#[derive(Debug, Clone, Copy)]
struct Frame {
    width: f64,
    height: f64,
    scale: f64,
    /// Canvas position of the mathematical origin
    origin_x: f64,
    origin_y: f64,
}

impl Frame {
    fn new<S: DrawSurface>(surface: &S, view: &ViewportState) -> Self {
        let (width, height) = (surface.width(), surface.height());
        let (origin_x, origin_y) = view.origin(width, height);
        Self { width, height, scale: view.scale, origin_x, origin_y }
    }

    fn screen_x(&self, x: f64) -> f64 {
        x * self.scale + self.origin_x
    }

    fn screen_y(&self, y: f64) -> f64 {
        self.origin_y - y * self.scale
    }
}

const MIN_SAMPLE_PX: f64 = 0.25;

/// Grid indices `k` whose line `origin + k·scale` lies inside `[0, extent]`.
pub fn grid_indices(origin: f64, scale: f64, extent: f64) -> std::ops::RangeInclusive<i64> {
    let first = (-origin / scale).ceil() as i64;
    let last = ((extent - origin) / scale).floor() as i64;
    first..=last
}

/// Draws the grid, axes, parabola and its annotations.
pub struct GraphRenderer {
    config: GraphConfig,
}

impl GraphRenderer {
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Full redraw of the surface.
    pub fn render<S: DrawSurface>(
        &self,
        surface: &mut S,
        coefficients: Coefficients,
        view: &ViewportState,
    ) -> RenderingResult<()> {
        let palette = self.config.palette(view.theme);
        let frame = Frame::new(surface, view);
        let quantities = evaluate(coefficients);

        log_debug!(
            LogComponent::Infrastructure("GraphRenderer"),
            "render {}x{} scale={} pan=({}, {}) theme={}",
            frame.width,
            frame.height,
            view.scale,
            view.pan_x,
            view.pan_y,
            view.theme
        );

        surface.fill_background(&palette.background);
        self.draw_grid(surface, &frame, palette);
        self.draw_axes(surface, &frame, palette);
        self.draw_tick_labels(surface, &frame, palette)?;
        self.draw_curve(surface, &frame, palette, &coefficients);
        self.draw_annotations(surface, &frame, palette, &quantities)?;
        self.draw_summary(surface, &frame, palette, &quantities)?;
        Ok(())
    }

    fn draw_grid<S: DrawSurface>(&self, surface: &mut S, frame: &Frame, palette: &Palette) {
        surface.set_stroke(&palette.grid, self.config.line_thickness);
        surface.begin_path();

        for k in grid_indices(frame.origin_x, frame.scale, frame.width) {
            if k == 0 {
                continue;
            }
            let x = frame.origin_x + k as f64 * frame.scale;
            surface.move_to(x, 0.0);
            surface.line_to(x, frame.height);
        }
        for k in grid_indices(frame.origin_y, frame.scale, frame.height) {
            if k == 0 {
                continue;
            }
            let y = frame.origin_y + k as f64 * frame.scale;
            surface.move_to(0.0, y);
            surface.line_to(frame.width, y);
        }

        surface.stroke();
    }

    fn draw_axes<S: DrawSurface>(&self, surface: &mut S, frame: &Frame, palette: &Palette) {
        let width = self.config.line_thickness * 1.5;

        surface.set_stroke(&palette.x_axis, width);
        surface.begin_path();
        surface.move_to(0.0, frame.origin_y);
        surface.line_to(frame.width, frame.origin_y);
        surface.stroke();

        surface.set_stroke(&palette.y_axis, width);
        surface.begin_path();
        surface.move_to(frame.origin_x, 0.0);
        surface.line_to(frame.origin_x, frame.height);
        surface.stroke();
    }

    fn draw_tick_labels<S: DrawSurface>(&self, surface: &mut S, frame: &Frame, palette: &Palette) -> RenderingResult<()> {
        surface.set_fill(&palette.text);
        surface.set_font(frame.scale / 3.0);
        surface.set_text_baseline(TextBaseline::Alphabetic);
        let hanging = surface.measure_text("0")?.hanging_baseline;

        surface.set_text_align(TextAlign::Center);
        for k in grid_indices(frame.origin_x, frame.scale, frame.width) {
            let x = frame.origin_x + k as f64 * frame.scale;
            surface.fill_text(&k.to_string(), x, frame.origin_y + hanging * 1.5)?;
        }

        // screen y grows downwards, so the value is the negated index
        surface.set_text_align(TextAlign::Right);
        for k in grid_indices(frame.origin_y, frame.scale, frame.height) {
            if k == 0 {
                continue;
            }
            let y = frame.origin_y + k as f64 * frame.scale;
            surface.fill_text(&k.saturating_neg().to_string(), frame.origin_x, y + hanging / 2.0)?;
        }
        Ok(())
    }

    fn draw_curve<S: DrawSurface>(
        &self,
        surface: &mut S,
        frame: &Frame,
        palette: &Palette,
        coefficients: &Coefficients,
    ) {
        // never finer than a quarter pixel, whatever the configured step
        let step = self.config.sample_step.max(MIN_SAMPLE_PX / frame.scale);
        let x_min = -frame.origin_x / frame.scale;
        let x_max = (frame.width - frame.origin_x) / frame.scale;
        let samples = ((x_max - x_min) / step).ceil().max(0.0) as usize;

        surface.set_stroke(&palette.line, self.config.line_thickness * 2.0);
        surface.begin_path();

        let mut pen_down = false;
        for i in 0..=samples {
            let x = x_min + i as f64 * step;
            let sx = frame.screen_x(x);
            let sy = frame.screen_y(coefficients.value_at(x));
            if !sy.is_finite() {
                pen_down = false;
                continue;
            }
            if pen_down {
                surface.line_to(sx, sy);
            } else {
                surface.move_to(sx, sy);
                pen_down = true;
            }
        }

        surface.stroke();
    }

    fn draw_annotations<S: DrawSurface>(
        &self,
        surface: &mut S,
        frame: &Frame,
        palette: &Palette,
        quantities: &DerivedQuantities,
    ) -> RenderingResult<()> {
        let Some(d) = quantities.d else {
            return Ok(());
        };
        let vertex_px = quantities.vertex_value * frame.scale;
        if !vertex_px.is_finite() {
            return Ok(());
        }

        let axis_y = frame.origin_y;
        let mx = frame.screen_x(quantities.m);
        let d_px = d * frame.scale;
        let tick = self.config.tick_ratio * frame.scale;

        surface.set_font(frame.scale / 3.0);
        let m_metrics = surface.measure_text("m")?;

        // axis of symmetry, from the vertex down (or up) to the x axis
        surface.set_stroke(&palette.middle_line, self.config.line_thickness * 2.0);
        surface.begin_path();
        surface.move_to(mx, axis_y - vertex_px);
        surface.line_to(mx, axis_y);
        surface.stroke();

        if vertex_px.abs() > frame.scale / 2.0 {
            surface.set_fill(&palette.middle_line);
            surface.set_text_align(TextAlign::Left);
            surface.set_text_baseline(TextBaseline::Top);
            surface.fill_text("m", mx - m_metrics.width - 0.1 * frame.scale, axis_y - vertex_px / 2.0)?;
        }

        surface.set_stroke(&palette.distance, self.config.line_thickness * 4.0);
        surface.begin_path();
        surface.move_to(mx - d_px, axis_y);
        surface.line_to(mx + d_px, axis_y);
        for x in [mx - d_px, mx, mx + d_px] {
            surface.move_to(x, axis_y - tick);
            surface.line_to(x, axis_y + tick);
        }
        surface.stroke();

        if d >= self.config.min_labelled_distance {
            let label_y = axis_y - m_metrics.line_height();
            surface.set_fill(&palette.distance);
            surface.set_text_align(TextAlign::Center);
            surface.set_text_baseline(TextBaseline::Top);
            surface.fill_text("d", mx - d_px / 2.0, label_y)?;
            surface.fill_text("d", mx + d_px / 2.0, label_y)?;
            surface.fill_text("r", mx - d_px, label_y)?;
            surface.fill_text("s", mx + d_px, label_y)?;
        }
        Ok(())
    }

    fn draw_summary<S: DrawSurface>(
        &self,
        surface: &mut S,
        frame: &Frame,
        palette: &Palette,
        quantities: &DerivedQuantities,
    ) -> RenderingResult<()> {
        surface.set_fill(&palette.text);
        surface.set_font(0.05 * frame.width);
        surface.set_text_align(TextAlign::Left);
        surface.set_text_baseline(TextBaseline::Top);
        let line_height = surface.measure_text("X")?.line_height();

        let left = 0.01 * frame.width;
        let top = 0.01 * frame.height;
        for (i, line) in canvas_summary(quantities).iter().enumerate() {
            surface.fill_text(line, left, top + i as f64 * line_height)?;
        }
        Ok(())
    }
}
