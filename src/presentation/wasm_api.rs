use wasm_bindgen::prelude::*;

use crate::application::GraphCoordinator;
use crate::domain::{
    equation::Coefficients,
    events::GraphEvent,
    graph::{GraphConfig, Theme},
    logging::{get_logger, LogComponent},
};
use crate::infrastructure::{rendering::CanvasSurface, storage::LocalStorageThemeRepository};

/// WASM API для встраивания графика в обычную JS-страницу
/// Минимальная логика - только мост к application слою
#[wasm_bindgen]
pub struct QuadraticGraphApi {
    coordinator: GraphCoordinator<CanvasSurface, LocalStorageThemeRepository>,
}

#[wasm_bindgen]
impl QuadraticGraphApi {
    /// Attach to the canvas with the given id using the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: String) -> Result<QuadraticGraphApi, JsValue> {
        Self::build(&canvas_id, GraphConfig::default())
    }

    /// Attach with a JSON configuration; missing fields keep their defaults,
    /// invalid values are rejected before anything is drawn
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(canvas_id: String, config_json: &str) -> Result<QuadraticGraphApi, JsValue> {
        let config = GraphConfig::from_json(config_json)?;
        Self::build(&canvas_id, config)
    }

    fn build(canvas_id: &str, config: GraphConfig) -> Result<QuadraticGraphApi, JsValue> {
        let surface = CanvasSurface::from_element_id(canvas_id)?;
        let mut coordinator = GraphCoordinator::new(surface, LocalStorageThemeRepository::new(), config);
        coordinator.render()?;

        get_logger().info(
            LogComponent::Presentation("QuadraticGraphApi"),
            &format!("Graph attached to #{}", canvas_id),
        );
        Ok(Self { coordinator })
    }

    /// Raw field contents; empty `a` means 1, empty `b`/`c` mean 0
    #[wasm_bindgen(js_name = setCoefficients)]
    pub fn set_coefficients(&mut self, a: &str, b: &str, c: &str) -> Result<(), JsValue> {
        self.dispatch(GraphEvent::CoefficientsChanged(Coefficients::from_inputs(a, b, c)))
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, client_x: f64, client_y: f64) -> Result<(), JsValue> {
        self.dispatch(GraphEvent::DragStarted { x: client_x, y: client_y })
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) -> Result<(), JsValue> {
        self.dispatch(GraphEvent::DragMoved { x: client_x, y: client_y })
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> Result<(), JsValue> {
        self.dispatch(GraphEvent::DragEnded)
    }

    pub fn wheel(&mut self, delta_y: f64) -> Result<(), JsValue> {
        self.dispatch(GraphEvent::Wheel { delta_y })
    }

    #[wasm_bindgen(js_name = setDarkMode)]
    pub fn set_dark_mode(&mut self, dark: bool) -> Result<(), JsValue> {
        self.dispatch(GraphEvent::ThemeChanged(Theme::from_dark_flag(dark)))
    }

    /// Container size in CSS pixels; the canvas becomes the largest fitting square
    pub fn resize(&mut self, container_width: f64, container_height: f64) -> Result<(), JsValue> {
        self.dispatch(GraphEvent::Resized { width: container_width, height: container_height })
    }

    /// Formula breakdown as a JSON object of display strings
    pub fn readout(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.coordinator.readout())
            .map_err(|e| JsValue::from_str(&format!("Readout serialization failed: {}", e)))
    }

    pub fn scale(&self) -> f64 {
        self.coordinator.state().viewport.scale
    }

    #[wasm_bindgen(js_name = isDarkMode)]
    pub fn is_dark_mode(&self) -> bool {
        self.coordinator.state().viewport.theme.is_dark()
    }

    fn dispatch(&mut self, event: GraphEvent) -> Result<(), JsValue> {
        self.coordinator.dispatch(event)?;
        Ok(())
    }
}
