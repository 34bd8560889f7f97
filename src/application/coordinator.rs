use crate::domain::{
    equation::{evaluate, Coefficients, DerivedQuantities, EquationReadout},
    errors::RenderingResult,
    events::{DomainEvent, GraphEvent},
    graph::{GraphConfig, Theme},
    logging::{get_logger, LogComponent},
    repositories::ThemePreferenceRepository,
};
use crate::infrastructure::rendering::{DrawSurface, GraphRenderer};
use crate::log_trace;
use crate::view_state::{DragState, ViewportState};

/// Mutable application state; only the coordinator touches it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub viewport: ViewportState,
    pub drag: DragState,
    pub coefficients: Coefficients,
}

/// Side length of the largest square fitting a container.
pub fn fit_square(width: f64, height: f64) -> u32 {
    let side = width.min(height);
    if side.is_finite() && side > 0.0 { side.floor() as u32 } else { 0 }
}

/// Application coordinator: applies input events to the state, then redraws
/// the surface once.
pub struct GraphCoordinator<S: DrawSurface, R: ThemePreferenceRepository> {
    state: AppState,
    renderer: GraphRenderer,
    surface: S,
    preferences: R,
}

impl<S: DrawSurface, R: ThemePreferenceRepository> GraphCoordinator<S, R> {
    /// The initial theme comes from the preference repository; storage
    /// failures fall back to the light theme.
    pub fn new(surface: S, preferences: R, config: GraphConfig) -> Self {
        let theme = match preferences.load() {
            Ok(stored) => stored.unwrap_or_default(),
            Err(e) => {
                get_logger().warn(
                    LogComponent::Application("GraphCoordinator"),
                    &format!("Theme preference unavailable, using light theme: {}", e),
                );
                Theme::Light
            }
        };

        get_logger().info(
            LogComponent::Application("GraphCoordinator"),
            &format!("Creating graph coordinator (theme: {})", theme),
        );

        Self {
            state: AppState {
                viewport: ViewportState::from_config(&config, theme),
                drag: DragState::default(),
                coefficients: Coefficients::default(),
            },
            renderer: GraphRenderer::new(config),
            surface,
            preferences,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn quantities(&self) -> DerivedQuantities {
        evaluate(self.state.coefficients)
    }

    /// Display text for the formula breakdown, recomputed on every call.
    pub fn readout(&self) -> EquationReadout {
        EquationReadout::from(&self.quantities())
    }

    /// Apply one input event. Returns `true` when the surface was redrawn.
    pub fn dispatch(&mut self, event: GraphEvent) -> RenderingResult<bool> {
        log_trace!(LogComponent::Application("GraphCoordinator"), "dispatch {}", event.event_type());

        let needs_render = match event {
            GraphEvent::CoefficientsChanged(coefficients) => {
                self.state.coefficients = coefficients;
                true
            }
            GraphEvent::DragStarted { x, y } => {
                self.state.drag.start(x, y, &self.state.viewport);
                false
            }
            GraphEvent::DragMoved { x, y } => self.state.drag.drag_to(x, y, &mut self.state.viewport),
            GraphEvent::DragEnded => {
                self.state.drag.end();
                false
            }
            GraphEvent::Wheel { delta_y } => {
                let before = self.state.viewport.scale;
                self.state.viewport.zoom_wheel(delta_y);
                self.state.viewport.scale != before
            }
            GraphEvent::ThemeChanged(theme) => {
                self.state.viewport.theme = theme;
                if let Err(e) = self.preferences.save(theme) {
                    get_logger().warn(
                        LogComponent::Application("GraphCoordinator"),
                        &format!("Theme preference not persisted: {}", e),
                    );
                }
                true
            }
            GraphEvent::Resized { width, height } => {
                let side = fit_square(width, height);
                self.surface.resize(side, side);
                true
            }
        };

        if needs_render {
            self.render()?;
        }
        Ok(needs_render)
    }

    /// Redraw from the current state.
    pub fn render(&mut self) -> RenderingResult<()> {
        self.renderer.render(&mut self.surface, self.state.coefficients, &self.state.viewport)
    }
}
