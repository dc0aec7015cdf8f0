use radar_chart_rs::api::{RadarChart, RenderOutput};
use radar_chart_rs::config::{ChartOptionsPatch, LabelOptionsPatch};
use radar_chart_rs::core::{DataSet, Record};
use radar_chart_rs::render::{Renderer, SvgRenderer, scene_to_svg};

fn sample_dataset() -> DataSet {
    let record = Record::new()
        .with_value("speed", 100.0)
        .with_value("power", 50.0)
        .with_value("agility", 150.0);
    DataSet::new(vec![record]).expect("valid dataset")
}

fn rendered_svg(chart: &RadarChart) -> String {
    let mut renderer = SvgRenderer::new();
    let output = chart.render_into(&mut renderer).expect("render");
    assert!(matches!(output, RenderOutput::Scene(_)));
    renderer.document().to_owned()
}

#[test]
fn document_is_sized_from_options() {
    let chart = RadarChart::new().with_data(sample_dataset());
    let svg = rendered_svg(&chart);

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"600\" height=\"600\">"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn scene_layers_map_to_svg_elements() {
    let chart = RadarChart::new().with_data(sample_dataset());
    let svg = rendered_svg(&chart);

    // 2 interior rings, no label circles.
    assert_eq!(svg.matches("<circle").count(), 2);
    assert_eq!(svg.matches("<polygon").count(), 1);
    assert_eq!(svg.matches("<line").count(), 3);
    assert_eq!(svg.matches("<text").count(), 3);
    assert_eq!(svg.matches("<rect").count(), 3);

    assert!(svg.contains("fill-opacity=\"0.6\""));
    assert!(svg.contains(">speed</text>"));
    assert!(svg.contains("data-axis=\"speed\""));
    assert!(svg.contains("pointer-events=\"all\""));
}

#[test]
fn label_circles_add_filled_circle_elements() {
    let chart = RadarChart::new()
        .with_data(sample_dataset())
        .with_options(ChartOptionsPatch::default().with_label(LabelOptionsPatch {
            circle: Some(true),
            ..LabelOptionsPatch::default()
        }));
    let svg = rendered_svg(&chart);

    // 2 rings + 3 label backing circles.
    assert_eq!(svg.matches("<circle").count(), 5);
    assert!(svg.contains("fill=\"rgb(255,255,255)\""));
}

#[test]
fn axis_names_are_xml_escaped() {
    let record = Record::new()
        .with_value("cats & dogs", 10.0)
        .with_value("<html>", 20.0);
    let chart = RadarChart::new().with_data(DataSet::new(vec![record]).expect("dataset"));
    let svg = rendered_svg(&chart);

    assert!(svg.contains(">cats &amp; dogs</text>"));
    assert!(svg.contains(">&lt;html&gt;</text>"));
    assert!(!svg.contains("<html>"));
}

#[test]
fn standalone_serializer_rejects_invalid_scenes() {
    use radar_chart_rs::core::Viewport;
    use radar_chart_rs::render::RadarScene;

    let scene = RadarScene::new(Viewport::new(0, 0));
    assert!(scene_to_svg(&scene).is_err());
}

#[test]
fn renderer_keeps_latest_document() {
    let chart = RadarChart::new().with_data(sample_dataset());
    let RenderOutput::Scene(scene) = chart.render().expect("render") else {
        panic!("expected scene");
    };

    let mut renderer = SvgRenderer::new();
    assert!(renderer.document().is_empty());
    renderer.render(&scene).expect("first pass");
    let first = renderer.document().to_owned();
    renderer.render(&scene).expect("second pass");
    assert_eq!(renderer.document(), first);
}
