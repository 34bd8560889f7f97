use crate::domain::graph::{GraphConfig, Theme};

/// View parameters controlling zoom, pan and colours.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    /// Pixels per mathematical unit
    pub scale: f64,
    /// Pixel displacement of the origin from the canvas centre
    pub pan_x: f64,
    pub pan_y: f64,
    pub theme: Theme,
    pub min_scale: f64,
    pub max_scale: f64,
    pub zoom_step: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::from_config(&GraphConfig::default(), Theme::Light)
    }
}

impl ViewportState {
    pub fn from_config(config: &GraphConfig, theme: Theme) -> Self {
        Self {
            scale: config.clamp_scale(config.initial_scale),
            pan_x: 0.0,
            pan_y: 0.0,
            theme,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            zoom_step: config.zoom_step,
        }
    }

    /// One wheel notch: scrolling up zooms in.
    pub fn zoom_wheel(&mut self, delta_y: f64) {
        if delta_y < 0.0 {
            self.zoom_by(self.zoom_step);
        } else {
            self.zoom_by(-self.zoom_step);
        }
    }

    pub fn zoom_by(&mut self, delta: f64) {
        self.scale = (self.scale + delta).max(self.min_scale).min(self.max_scale);
    }

    pub fn set_pan(&mut self, pan_x: f64, pan_y: f64) {
        self.pan_x = pan_x;
        self.pan_y = pan_y;
    }

    /// Canvas position of the mathematical origin.
    pub fn origin(&self, width: f64, height: f64) -> (f64, f64) {
        (width / 2.0 - self.pan_x, height / 2.0 - self.pan_y)
    }
}

/// Pointer drag tracking. The anchor is the client position plus the pan at
/// drag start, so the content follows the cursor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragState {
    pub dragging: bool,
    pub anchor_x: f64,
    pub anchor_y: f64,
}

impl DragState {
    pub fn start(&mut self, client_x: f64, client_y: f64, view: &ViewportState) {
        self.dragging = true;
        self.anchor_x = client_x + view.pan_x;
        self.anchor_y = client_y + view.pan_y;
    }

    /// Returns `true` when the pan changed.
    pub fn drag_to(&self, client_x: f64, client_y: f64, view: &mut ViewportState) -> bool {
        if !self.dragging {
            return false;
        }
        view.set_pan(-(client_x - self.anchor_x), -(client_y - self.anchor_y));
        true
    }

    pub fn end(&mut self) {
        self.dragging = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_moves_against_pan() {
        let mut view = ViewportState::default();
        view.set_pan(12.0, -30.0);
        assert_eq!(view.origin(400.0, 400.0), (188.0, 230.0));
    }

    #[test]
    fn unordered_bounds_do_not_panic() {
        let config = GraphConfig { min_scale: 100.0, max_scale: 10.0, ..GraphConfig::default() };
        let mut view = ViewportState::from_config(&config, Theme::Light);
        view.zoom_wheel(-1.0);
        view.zoom_wheel(1.0);
        assert!(view.scale.is_finite());
    }

    #[test]
    fn initial_scale_is_clamped() {
        let config = GraphConfig { initial_scale: 500.0, ..GraphConfig::default() };
        assert_eq!(ViewportState::from_config(&config, Theme::Dark).scale, 100.0);
    }

    #[test]
    fn drag_without_press_is_ignored() {
        let mut view = ViewportState::default();
        let drag = DragState::default();
        assert!(!drag.drag_to(10.0, 10.0, &mut view));
        assert_eq!((view.pan_x, view.pan_y), (0.0, 0.0));
    }

    #[test]
    fn content_follows_cursor() {
        let mut view = ViewportState::default();
        let mut drag = DragState::default();
        drag.start(100.0, 100.0, &view);
        drag.drag_to(130.0, 90.0, &mut view);
        assert_eq!((view.pan_x, view.pan_y), (-30.0, 10.0));
    }
}
