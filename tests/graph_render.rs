use quadratic_graph_wasm::domain::equation::Coefficients;
use quadratic_graph_wasm::domain::graph::{GraphConfig, Palette, Theme};
use quadratic_graph_wasm::infrastructure::rendering::{GraphRenderer, RecordingSurface};
use quadratic_graph_wasm::view_state::ViewportState;
use quickcheck_macros::quickcheck;

fn render(coefficients: Coefficients, view: &ViewportState) -> RecordingSurface {
    let mut surface = RecordingSurface::new(400, 400);
    GraphRenderer::new(GraphConfig::default())
        .render(&mut surface, coefficients, view)
        .unwrap();
    surface
}

fn light_view() -> ViewportState {
    ViewportState::from_config(&GraphConfig::default(), Theme::Light)
}

#[test]
fn background_follows_theme() {
    let light = render(Coefficients::default(), &light_view());
    assert_eq!(light.background.as_deref(), Some("#ffffff"));

    let mut dark_view = light_view();
    dark_view.theme = Theme::Dark;
    let dark = render(Coefficients::default(), &dark_view);
    assert_eq!(dark.background.as_deref(), Some("#000000"));
    assert_eq!(dark.strokes_with_color(&Palette::dark().grid).len(), 1);
}

#[test]
fn axes_cross_at_panned_origin() {
    let mut view = light_view();
    view.set_pan(30.0, -20.0);
    let surface = render(Coefficients::default(), &view);
    let palette = Palette::light();

    let y_axis: Vec<_> = surface.strokes_with_color(&palette.y_axis);
    assert_eq!(y_axis.len(), 1);
    assert_eq!(y_axis[0].subpaths, vec![vec![(170.0, 0.0), (170.0, 400.0)]]);

    let x_axis: Vec<_> = surface.strokes_with_color(&palette.x_axis);
    assert_eq!(x_axis.len(), 1);
    assert_eq!(x_axis[0].subpaths, vec![vec![(0.0, 220.0), (400.0, 220.0)]]);
}

#[test]
fn grid_skips_the_axes() {
    let surface = render(Coefficients::default(), &light_view());
    let grid = surface.strokes_with_color(&Palette::light().grid)[0];
    // indices -4..=4 on both axes minus the two axis lines
    assert_eq!(grid.subpaths.len(), 16);
    assert!(grid.subpaths.iter().all(|line| !line.contains(&(200.0, 0.0)) && !line.contains(&(0.0, 200.0))));
    assert_eq!(grid.line_width, 0.5);
}

#[quickcheck]
fn grid_lines_stay_on_surface(pan: (i16, i16), zoom_steps: i8) -> bool {
    let mut view = light_view();
    view.set_pan(pan.0 as f64, pan.1 as f64);
    view.zoom_wheel(-(zoom_steps as f64));
    let surface = render(Coefficients::default(), &view);
    surface
        .strokes_with_color(&Palette::light().grid)
        .into_iter()
        .flat_map(|s| s.subpaths.iter().flatten())
        .all(|&(x, y)| (0.0..=400.0).contains(&x) && (0.0..=400.0).contains(&y))
}

#[test]
fn tick_labels_number_the_grid() {
    let surface = render(Coefficients::default(), &light_view());
    let texts = surface.text_values();
    for label in ["-4", "-1", "1", "4"] {
        assert!(texts.contains(&label), "missing tick label {label}");
    }
    // the shared origin label is printed once
    assert_eq!(texts.iter().filter(|t| **t == "0").count(), 1);

    let font = surface.find_text("1").unwrap().font_size;
    assert!((font - 50.0 / 3.0).abs() < 1e-9);
}

#[test]
fn curve_spans_the_visible_range() {
    let surface = render(Coefficients::new(1.0, -3.0, 2.0), &light_view());
    let curve: Vec<_> = surface.strokes_with_color(&Palette::light().line);
    assert_eq!(curve.len(), 1);
    assert_eq!(curve[0].subpaths.len(), 1);
    assert_eq!(curve[0].line_width, 1.0);

    let points = &curve[0].subpaths[0];
    assert_eq!(points[0], (0.0, 200.0 - 30.0 * 50.0));
    assert!(points.last().unwrap().0 >= 400.0 - 1e-9);
    assert!(points.len() >= 80);
}

#[test]
fn degenerate_sample_step_stays_bounded() {
    for sample_step in [0.0, -1.0, f64::NAN, 1e-12] {
        let config = GraphConfig { sample_step, ..GraphConfig::default() };
        let mut surface = RecordingSurface::new(400, 400);
        GraphRenderer::new(config)
            .render(&mut surface, Coefficients::new(1.0, 0.0, 0.0), &light_view())
            .unwrap();
        let curve = surface.strokes_with_color(&Palette::light().line)[0];
        let points: usize = curve.subpaths.iter().map(Vec::len).sum();
        // a quarter-pixel step over 400 px
        assert!(points <= 1602, "{points} points for step {sample_step}");
    }
}

#[test]
fn annotations_mark_distance_and_roots() {
    let surface = render(Coefficients::new(1.0, -3.0, 2.0), &light_view());
    let palette = Palette::light();

    let middle: Vec<_> = surface.strokes_with_color(&palette.middle_line);
    assert_eq!(middle.len(), 1);
    assert_eq!(middle[0].subpaths, vec![vec![(275.0, 212.5), (275.0, 200.0)]]);

    let bracket: Vec<_> = surface.strokes_with_color(&palette.distance);
    assert_eq!(bracket.len(), 1);
    assert_eq!(bracket[0].line_width, 2.0);
    assert_eq!(bracket[0].subpaths.len(), 4);
    assert_eq!(bracket[0].subpaths[0], vec![(250.0, 200.0), (300.0, 200.0)]);
    assert_eq!(bracket[0].subpaths[1], vec![(250.0, 192.5), (250.0, 207.5)]);

    assert_eq!(surface.find_text("r").unwrap().x, 250.0);
    assert_eq!(surface.find_text("s").unwrap().x, 300.0);
    assert_eq!(surface.texts.iter().filter(|t| t.text == "d").count(), 2);
    // vertex sits only a quarter unit below the axis
    assert!(surface.find_text("m").is_none());
}

#[test]
fn deep_vertex_gets_m_label() {
    let surface = render(Coefficients::new(1.0, 0.0, -4.0), &light_view());
    let label = surface.find_text("m").unwrap();
    assert_eq!(label.color, Palette::light().middle_line);
    assert_eq!(label.y, 200.0 + 100.0);
}

#[test]
fn short_distance_hides_letters() {
    let surface = render(Coefficients::new(1.0, 0.0, -0.04), &light_view());
    assert_eq!(surface.strokes_with_color(&Palette::light().distance).len(), 1);
    for letter in ["d", "r", "s"] {
        assert!(surface.find_text(letter).is_none(), "unexpected label {letter}");
    }
}

#[test]
fn no_annotations_without_real_roots() {
    let palette = Palette::light();
    for coefficients in [Coefficients::new(1.0, 0.0, 1.0), Coefficients::new(0.0, 0.0, 0.0)] {
        let surface = render(coefficients, &light_view());
        assert_eq!(surface.strokes_with_color(&palette.middle_line).len(), 0);
        assert_eq!(surface.strokes_with_color(&palette.distance).len(), 0);
    }
}

#[test]
fn zero_polynomial_draws_flat_line() {
    let surface = render(Coefficients::new(0.0, 0.0, 0.0), &light_view());
    let curve = surface.strokes_with_color(&Palette::light().line)[0];
    assert!(curve.subpaths.iter().flatten().all(|&(_, y)| y == 200.0));
    assert!(surface.find_text("m = Não há raiz").is_some());
}

#[test]
fn summary_in_top_left_corner() {
    let surface = render(Coefficients::new(1.0, -3.0, 2.0), &light_view());
    let lines: Vec<_> = ["m = 1,50", "d = 0,50", "r = 1,00", "s = 2,00"]
        .iter()
        .map(|text| surface.find_text(text).unwrap())
        .collect();

    assert_eq!((lines[0].x, lines[0].y), (4.0, 4.0));
    assert_eq!(lines[0].font_size, 20.0);
    assert!(lines.windows(2).all(|pair| pair[1].y > pair[0].y));
}

#[test]
fn summary_without_roots() {
    let surface = render(Coefficients::new(1.0, 0.0, 1.0), &light_view());
    for text in ["m = 0,00", "d = Não há raiz", "r = Não há raiz", "s = Não há raiz"] {
        assert!(surface.find_text(text).is_some(), "missing {text}");
    }
}
