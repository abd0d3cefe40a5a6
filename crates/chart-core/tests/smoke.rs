// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{Axis, AxisKind, Chart, LineSeries, RenderOptions};

#[test]
fn render_smoke_png() {
    let mut chart = Chart::new("Smoke");
    chart.x_axis = Axis::new("Time", AxisKind::Date);
    chart.y_axis = Axis::new("USD $", AxisKind::Value);
    chart.add_series(LineSeries::new(
        "AAA",
        vec![(737_000.0, 1.0), (737_001.0, 2.0), (737_002.0, 1.5), (737_005.0, 3.5), (737_006.0, 2.5)],
    ));
    chart.add_series(LineSeries::new("BBB", vec![(737_000.0, 2.0), (737_006.0, 0.5)]));
    chart.autoscale_axes(0.02);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn empty_chart_still_renders() {
    let mut chart = Chart::new("Nothing");
    chart.add_series(LineSeries::new("EMPTY", vec![]));
    chart.autoscale_axes(0.02);
    let bytes = chart.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
