use leptos::html::{Canvas, Div};
use leptos::*;
use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;
use strum::IntoEnumIterator;

use crate::{
    application::GraphCoordinator,
    domain::{
        equation::{Coefficients, EquationReadout, ReadoutField, evaluate},
        events::GraphEvent,
        graph::{GraphConfig, Theme},
        logging::{LogComponent, get_logger},
        repositories::ThemePreferenceRepository,
    },
    event_utils::scoped_window_listener,
    infrastructure::{rendering::CanvasSurface, storage::LocalStorageThemeRepository},
};

type BrowserCoordinator = GraphCoordinator<CanvasSurface, LocalStorageThemeRepository>;

/// Shared handle to the coordinator; `None` until the canvas is mounted.
#[derive(Clone, Default)]
struct CoordinatorHandle(Rc<RefCell<Option<BrowserCoordinator>>>);

impl CoordinatorHandle {
    /// Apply the event and return the fresh readout.
    fn dispatch(&self, event: GraphEvent) -> Option<EquationReadout> {
        let mut slot = self.0.borrow_mut();
        let coordinator = slot.as_mut()?;
        if let Err(e) = coordinator.dispatch(event) {
            get_logger().error(LogComponent::Presentation("App"), &format!("❌ Render failed: {}", e));
        }
        Some(coordinator.readout())
    }

    fn is_attached(&self) -> bool {
        self.0.borrow().is_some()
    }

    fn attach(&self, coordinator: BrowserCoordinator) {
        *self.0.borrow_mut() = Some(coordinator);
    }
}

/// Container size in CSS pixels
fn container_size(container: &web_sys::HtmlDivElement) -> (f64, f64) {
    let rect = container.get_bounding_client_rect();
    (rect.width(), rect.height())
}

/// 🦀 Главный компонент визуализатора параболы на Leptos
#[component]
pub fn App() -> impl IntoView {
    let stored_theme = LocalStorageThemeRepository::new().load().ok().flatten().unwrap_or_default();

    let a_text = create_rw_signal(String::new());
    let b_text = create_rw_signal(String::new());
    let c_text = create_rw_signal(String::new());
    let dark = create_rw_signal(stored_theme.is_dark());
    let readout = create_rw_signal(EquationReadout::from(&evaluate(Coefficients::default())));

    let handle = CoordinatorHandle::default();
    let canvas_ref = create_node_ref::<Canvas>();
    let container_ref = create_node_ref::<Div>();

    let dispatch = {
        let handle = handle.clone();
        move |event: GraphEvent| {
            if let Some(fresh) = handle.dispatch(event) {
                if readout.with_untracked(|current| current != &fresh) {
                    readout.set(fresh);
                }
            }
        }
    };

    // Attach the coordinator once the canvas is in the DOM
    {
        let handle = handle.clone();
        let dispatch = dispatch.clone();
        create_effect(move |_| {
            let Some(canvas) = canvas_ref.get() else { return };
            if handle.is_attached() {
                return;
            }
            match CanvasSurface::new(canvas.deref().clone()) {
                Ok(surface) => {
                    handle.attach(GraphCoordinator::new(
                        surface,
                        LocalStorageThemeRepository::new(),
                        GraphConfig::default(),
                    ));
                    get_logger().info(LogComponent::Presentation("App"), "🚀 Graph canvas attached");
                    if let Some(container) = container_ref.get_untracked() {
                        let (width, height) = container_size(&container);
                        dispatch(GraphEvent::Resized { width, height });
                    }
                }
                Err(e) => {
                    get_logger().error(LogComponent::Presentation("App"), &format!("❌ Canvas unavailable: {}", e));
                }
            }
        });
    }

    {
        let dispatch = dispatch.clone();
        scoped_window_listener(ev::mouseup, move |_| dispatch(GraphEvent::DragEnded));
    }
    {
        let dispatch = dispatch.clone();
        scoped_window_listener(ev::resize, move |_| {
            if let Some(container) = container_ref.get_untracked() {
                let (width, height) = container_size(&container);
                dispatch(GraphEvent::Resized { width, height });
            }
        });
    }

    let on_coefficient_input = {
        let dispatch = dispatch.clone();
        move || {
            let coefficients = Coefficients::from_inputs(
                &a_text.get_untracked(),
                &b_text.get_untracked(),
                &c_text.get_untracked(),
            );
            dispatch(GraphEvent::CoefficientsChanged(coefficients));
        }
    };

    let on_a = {
        let on_input = on_coefficient_input.clone();
        move |ev: web_sys::Event| {
            a_text.set(event_target_value(&ev));
            on_input();
        }
    };
    let on_b = {
        let on_input = on_coefficient_input.clone();
        move |ev: web_sys::Event| {
            b_text.set(event_target_value(&ev));
            on_input();
        }
    };
    let on_c = {
        let on_input = on_coefficient_input.clone();
        move |ev: web_sys::Event| {
            c_text.set(event_target_value(&ev));
            on_input();
        }
    };

    let on_theme = {
        let dispatch = dispatch.clone();
        move |ev: web_sys::Event| {
            let checked = event_target_checked(&ev);
            dark.set(checked);
            dispatch(GraphEvent::ThemeChanged(Theme::from_dark_flag(checked)));
        }
    };

    let on_mouse_down = {
        let dispatch = dispatch.clone();
        move |ev: web_sys::MouseEvent| {
            dispatch(GraphEvent::DragStarted { x: ev.client_x() as f64, y: ev.client_y() as f64 });
        }
    };
    let on_mouse_move = {
        let dispatch = dispatch.clone();
        move |ev: web_sys::MouseEvent| {
            dispatch(GraphEvent::DragMoved { x: ev.client_x() as f64, y: ev.client_y() as f64 });
        }
    };
    let on_wheel = {
        let dispatch = dispatch.clone();
        move |ev: web_sys::WheelEvent| {
            ev.prevent_default();
            dispatch(GraphEvent::Wheel { delta_y: ev.delta_y() });
        }
    };

    view! {
        <style>
            {r#"
            .quadratic-app {
                font-family: Arial, sans-serif;
                background: #f4f4f8;
                color: #111111;
                min-height: 100vh;
                display: grid;
                grid-template-columns: minmax(280px, 1fr) 2fr;
                gap: 20px;
                padding: 20px;
                box-sizing: border-box;
            }

            .quadratic-app.dark {
                background: #111111;
                color: #f4f4f8;
            }

            .controls label {
                display: block;
                margin-bottom: 10px;
            }

            .controls input[type=number] {
                width: 6em;
                margin-left: 8px;
            }

            .breakdown p {
                font-family: 'Courier New', monospace;
                margin: 4px 0;
            }

            .breakdown td {
                padding: 2px 10px;
                font-family: 'Courier New', monospace;
            }

            .canvas-container {
                width: 100%;
                height: calc(100vh - 40px);
                display: flex;
                justify-content: center;
                align-items: flex-start;
            }

            .canvas-container canvas {
                cursor: grab;
            }
            "#}
        </style>
        <div class=move || format!("quadratic-app {}", Theme::from_dark_flag(dark.get()).as_ref())>
            <div class="controls">
                <label>
                    "a"
                    <input type="number" id="numA" placeholder="1" prop:value=move || a_text.get() on:input=on_a />
                </label>
                <label>
                    "b"
                    <input type="number" id="numB" placeholder="0" prop:value=move || b_text.get() on:input=on_b />
                </label>
                <label>
                    "c"
                    <input type="number" id="numC" placeholder="0" prop:value=move || c_text.get() on:input=on_c />
                </label>
                <label>
                    <input type="checkbox" id="themeSwitch" prop:checked=move || dark.get() on:change=on_theme />
                    " Modo escuro"
                </label>
                <FormulaBreakdown readout=readout />
            </div>
            <div class="canvas-container" node_ref=container_ref>
                <canvas
                    id="equationGraph"
                    node_ref=canvas_ref
                    on:mousedown=on_mouse_down
                    on:mousemove=on_mouse_move
                    on:wheel=on_wheel
                />
            </div>
        </div>
    }
}

/// 📐 Разбор формулы: дополнение до полного квадрата
#[component]
fn FormulaBreakdown(readout: RwSignal<EquationReadout>) -> impl IntoView {
    let text = move |field: ReadoutField| move || readout.with(|r| field.value(r).to_string());

    view! {
        <div class="breakdown">
            <p>
                "x² " {move || readout.with(|r| r.sign_b1.clone())} {text(ReadoutField::B1)} "x "
                {move || readout.with(|r| r.sign_c1.clone())} {text(ReadoutField::C1)} " = 0"
            </p>
            <p>"m = -(b/a) / 2 = " {text(ReadoutField::NegB1)} " / 2 = " {text(ReadoutField::M)}</p>
            <p>"d² = m² - c/a = " {text(ReadoutField::MSquared)} " - (" {text(ReadoutField::C1)} ") = " {text(ReadoutField::Discriminant)}</p>
            <p>"d = " {text(ReadoutField::D)}</p>
            <p>"r = m - d = " {text(ReadoutField::R)}</p>
            <p>"s = m + d = " {text(ReadoutField::S)}</p>
            <p>"S = " {text(ReadoutField::SolutionSet)}</p>
            <table>
                {ReadoutField::iter()
                    .map(|field| view! {
                        <tr>
                            <td>{field.label()}</td>
                            <td>{text(field)}</td>
                        </tr>
                    })
                    .collect_view()}
            </table>
        </div>
    }
}
