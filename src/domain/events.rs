use std::fmt::Debug;

use crate::domain::equation::Coefficients;
use crate::domain::graph::Theme;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
}

/// Discrete user inputs that change what the graph shows
#[derive(Debug, Clone, PartialEq)]
pub enum GraphEvent {
    CoefficientsChanged(Coefficients),
    /// Pointer pressed on the canvas, client coordinates in pixels
    DragStarted { x: f64, y: f64 },
    DragMoved { x: f64, y: f64 },
    DragEnded,
    /// Wheel notch; negative `delta_y` zooms in
    Wheel { delta_y: f64 },
    ThemeChanged(Theme),
    /// Container resized, the canvas becomes the largest fitting square
    Resized { width: f64, height: f64 },
}

impl DomainEvent for GraphEvent {
    fn event_type(&self) -> &'static str {
        match self {
            GraphEvent::CoefficientsChanged(_) => "CoefficientsChanged",
            GraphEvent::DragStarted { .. } => "DragStarted",
            GraphEvent::DragMoved { .. } => "DragMoved",
            GraphEvent::DragEnded => "DragEnded",
            GraphEvent::Wheel { .. } => "Wheel",
            GraphEvent::ThemeChanged(_) => "ThemeChanged",
            GraphEvent::Resized { .. } => "Resized",
        }
    }
}
