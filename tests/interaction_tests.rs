use approx::assert_relative_eq;
use radar_chart_rs::api::{RadarChart, RenderOutput};
use radar_chart_rs::core::{DataSet, Point, Record};
use radar_chart_rs::interaction::{TouchRegion, dispatch_touch};

fn sample_dataset() -> DataSet {
    let record = Record::new()
        .with_value("speed", 100.0)
        .with_value("power", 50.0)
        .with_value("agility", 150.0);
    DataSet::new(vec![record]).expect("valid dataset")
}

#[test]
fn region_geometry_follows_the_font_size_contract() {
    let region = TouchRegion::for_label("speed", 100.0, Point::new(250.0, 80.0), 14.0);

    assert_relative_eq!(region.width, 42.0);
    assert_relative_eq!(region.height, 42.0);
    assert_relative_eq!(region.left, 250.0 - 21.0);
    assert_relative_eq!(region.top, 80.0 - 28.0);
    region.validate().expect("valid region");
}

#[test]
fn region_contains_its_own_label_position() {
    let label = Point::new(250.0, 80.0);
    let region = TouchRegion::for_label("speed", 100.0, label, 14.0);

    assert!(region.contains(label.x, label.y));
    assert!(region.contains(region.left, region.top));
    assert!(!region.contains(region.left - 1.0, region.top));
    assert!(!region.contains(label.x, region.top + region.height + 1.0));
}

#[test]
fn dispatch_invokes_handler_with_axis_and_first_record_value() {
    let chart = RadarChart::new().with_data(sample_dataset());
    let RenderOutput::Scene(scene) = chart.render().expect("render") else {
        panic!("expected scene");
    };

    let speed_label = &scene.labels[0];
    let mut seen = None;
    let event = RadarChart::dispatch_touch(
        &scene,
        speed_label.position.x,
        speed_label.position.y,
        |axis, value| seen = Some((axis.to_owned(), value)),
    )
    .expect("hit");

    assert_eq!(seen, Some(("speed".to_owned(), 100.0)));
    assert_eq!(event.axis, "speed");
    assert_relative_eq!(event.value, 100.0);
}

#[test]
fn dispatch_outside_every_region_delivers_nothing() {
    let chart = RadarChart::new().with_data(sample_dataset());
    let RenderOutput::Scene(scene) = chart.render().expect("render") else {
        panic!("expected scene");
    };

    let mut invoked = false;
    let event = RadarChart::dispatch_touch(&scene, -10_000.0, -10_000.0, |_, _| invoked = true);
    assert!(event.is_none());
    assert!(!invoked);
}

#[test]
fn overlapping_regions_fire_at_most_once() {
    let regions = vec![
        TouchRegion::for_label("first", 1.0, Point::new(100.0, 100.0), 14.0),
        TouchRegion::for_label("second", 2.0, Point::new(102.0, 101.0), 14.0),
    ];

    let mut calls = Vec::new();
    let event = dispatch_touch(&regions, 100.0, 100.0, |axis, value| {
        calls.push((axis.to_owned(), value));
    })
    .expect("hit");

    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], ("first".to_owned(), 1.0));
    assert_eq!(event.axis, "first");
}

#[test]
fn custom_accessor_value_reaches_the_touch_payload() {
    use radar_chart_rs::core::{Record as R, ValueAccessor};

    struct Doubler;
    impl ValueAccessor for Doubler {
        fn value(&self, record: &R, axis: &str) -> f64 {
            record.get(axis).unwrap_or(0.0) * 2.0
        }
    }

    let chart = RadarChart::new()
        .with_data(sample_dataset())
        .with_accessor(Doubler);
    let RenderOutput::Scene(scene) = chart.render().expect("render") else {
        panic!("expected scene");
    };

    assert_relative_eq!(scene.touch_regions[0].value, 200.0);
}
