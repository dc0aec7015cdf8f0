use criterion::{Criterion, criterion_group, criterion_main};
use radar_chart_rs::api::build_scene;
use radar_chart_rs::config::ChartOptions;
use radar_chart_rs::core::{DataSet, KeyAccessor, Point, RadarLayout, Record};
use radar_chart_rs::render::scene_to_svg;
use std::hint::black_box;

fn bench_dataset(axis_count: usize, record_count: usize) -> DataSet {
    let records = (0..record_count)
        .map(|r| {
            (0..axis_count)
                .map(|a| (format!("axis{a}"), ((a + r * 7) % 150) as f64))
                .collect::<Record>()
        })
        .collect();
    DataSet::new(records).expect("valid generated dataset")
}

fn bench_layout_compute(c: &mut Criterion) {
    let dataset = bench_dataset(8, 4);
    let center = Point::new(280.0, 280.0);

    c.bench_function("radar_layout_8_axes_4_series", |b| {
        b.iter(|| {
            RadarLayout::compute(
                black_box(center),
                black_box(300.0),
                black_box(560.0),
                black_box(5),
                black_box(150.0),
                black_box(&dataset),
                &KeyAccessor,
            )
            .expect("layout should succeed")
        })
    });
}

fn bench_scene_assembly(c: &mut Criterion) {
    let dataset = bench_dataset(8, 4);
    let options = ChartOptions::default();
    let layout = RadarLayout::compute(
        Point::new(280.0, 280.0),
        300.0,
        560.0,
        5,
        150.0,
        &dataset,
        &KeyAccessor,
    )
    .expect("layout");

    c.bench_function("radar_scene_assembly", |b| {
        b.iter(|| {
            build_scene(
                black_box(&layout),
                black_box(&options),
                black_box(&dataset),
                &KeyAccessor,
            )
            .expect("scene should assemble")
        })
    });
}

fn bench_svg_serialization(c: &mut Criterion) {
    let dataset = bench_dataset(8, 4);
    let options = ChartOptions::default();
    let layout = RadarLayout::compute(
        Point::new(280.0, 280.0),
        300.0,
        560.0,
        5,
        150.0,
        &dataset,
        &KeyAccessor,
    )
    .expect("layout");
    let scene = build_scene(&layout, &options, &dataset, &KeyAccessor).expect("scene");

    c.bench_function("radar_scene_to_svg", |b| {
        b.iter(|| scene_to_svg(black_box(&scene)).expect("svg serialization"))
    });
}

criterion_group!(
    benches,
    bench_layout_compute,
    bench_scene_assembly,
    bench_svg_serialization
);
criterion_main!(benches);
