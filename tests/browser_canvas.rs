#![cfg(target_arch = "wasm32")]

use gloo::storage::{LocalStorage, Storage};
use quadratic_graph_wasm::application::GraphCoordinator;
use quadratic_graph_wasm::domain::equation::Coefficients;
use quadratic_graph_wasm::domain::events::GraphEvent;
use quadratic_graph_wasm::domain::graph::{GraphConfig, Theme};
use quadratic_graph_wasm::domain::repositories::{DARK_MODE_KEY, ThemePreferenceRepository};
use quadratic_graph_wasm::infrastructure::rendering::{CanvasSurface, DrawSurface};
use quadratic_graph_wasm::infrastructure::storage::LocalStorageThemeRepository;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn detached_canvas() -> HtmlCanvasElement {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap()
}

#[wasm_bindgen_test]
fn renders_into_real_canvas() {
    LocalStorage::delete(DARK_MODE_KEY);
    let surface = CanvasSurface::new(detached_canvas()).unwrap();
    let mut coordinator = GraphCoordinator::new(surface, LocalStorageThemeRepository::new(), GraphConfig::default());

    coordinator.dispatch(GraphEvent::Resized { width: 320.0, height: 500.0 }).unwrap();
    coordinator
        .dispatch(GraphEvent::CoefficientsChanged(Coefficients::new(1.0, -3.0, 2.0)))
        .unwrap();

    let surface = coordinator.surface();
    assert_eq!(surface.width(), 320.0);
    assert_eq!(surface.height(), 320.0);
    assert!(surface.canvas().to_data_url().unwrap().starts_with("data:image/png"));
}

#[wasm_bindgen_test]
fn measures_text_with_canvas_metrics() {
    let mut surface = CanvasSurface::new(detached_canvas()).unwrap();
    surface.set_font(20.0);
    let metrics = surface.measure_text("m").unwrap();
    assert!(metrics.width > 0.0);
    assert!(metrics.line_height() > 0.0);
    assert!(metrics.hanging_baseline > 0.0 && metrics.hanging_baseline <= metrics.ascent);
}

#[wasm_bindgen_test]
fn theme_flag_roundtrips_through_local_storage() {
    LocalStorage::delete(DARK_MODE_KEY);
    let mut repository = LocalStorageThemeRepository::new();
    assert_eq!(repository.load().unwrap(), None);

    repository.save(Theme::Dark).unwrap();
    assert_eq!(LocalStorage::get::<bool>(DARK_MODE_KEY).unwrap(), true);
    assert_eq!(repository.load().unwrap(), Some(Theme::Dark));

    repository.save(Theme::Light).unwrap();
    assert_eq!(repository.load().unwrap(), Some(Theme::Light));
    LocalStorage::delete(DARK_MODE_KEY);
}

#[wasm_bindgen_test]
fn missing_canvas_id_is_an_error() {
    assert!(CanvasSurface::from_element_id("no-such-canvas").is_err());
}
