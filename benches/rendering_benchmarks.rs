use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use quadratic_graph_wasm::domain::equation::{Coefficients, EquationReadout, evaluate};
use quadratic_graph_wasm::domain::graph::{GraphConfig, Theme};
use quadratic_graph_wasm::infrastructure::rendering::{GraphRenderer, RecordingSurface};
use quadratic_graph_wasm::view_state::ViewportState;
use std::hint::black_box;
use std::time::Duration;

/// Бенчмарк полной перерисовки при разных масштабах
fn bench_full_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_render");
    group.measurement_time(Duration::from_secs(5));

    let renderer = GraphRenderer::new(GraphConfig::default());
    let coefficients = Coefficients::new(1.0, -3.0, 2.0);

    for scale in [10.0, 50.0, 100.0] {
        let mut view = ViewportState::from_config(renderer.config(), Theme::Light);
        view.scale = scale;
        let mut surface = RecordingSurface::new(800, 800);

        group.bench_with_input(BenchmarkId::new("scale", scale as u32), &view, |b, view| {
            b.iter(|| renderer.render(&mut surface, black_box(coefficients), view).unwrap())
        });
    }

    group.finish();
}

/// Бенчмарк вычисления разбора формулы
fn bench_readout(c: &mut Criterion) {
    c.bench_function("evaluate_and_format", |b| {
        b.iter(|| EquationReadout::from(&evaluate(black_box(Coefficients::new(2.0, 5.0, -3.0)))))
    });
}

criterion_group!(benches, bench_full_render, bench_readout);
criterion_main!(benches);
