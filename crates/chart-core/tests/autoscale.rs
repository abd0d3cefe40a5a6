// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale across several price lines.

use chart_core::{Chart, LineSeries};

#[test]
fn autoscale_multiple_lines() {
    let mut chart = Chart::new("t");
    chart.add_series(LineSeries::new("A", vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(LineSeries::new("B", vec![(2.0, 6.0), (3.0, 1.5)]));

    chart.autoscale_axes(0.0);

    assert_eq!(chart.x_axis.min, 0.0);
    assert_eq!(chart.x_axis.max, 5.0);
    assert_eq!(chart.y_axis.min, 1.0);
    assert_eq!(chart.y_axis.max, 6.0);

    chart.autoscale_axes(0.1);
    assert!((chart.y_axis.min - 0.5).abs() < 1e-9);
    assert!((chart.y_axis.max - 6.5).abs() < 1e-9);
}
