#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use scatter_rs::ChartError;
use scatter_rs::core::{
    AnimationPhase, ChartExtents, DataPoint, MarkerShape, NumberFormatter, Point, Rect,
    ScatterChartData, ScatterDataSet, ShapePath, Transformer, ViewPortHandler, Viewport,
};
use scatter_rs::render::{CairoSurface, Color, DrawingSurface};
use scatter_rs::scatter::{Highlight, RenderContext, ScatterRenderer};

fn sample_data() -> ScatterChartData {
    let arrow = ShapePath::polygon(&[
        Point::new(0.0, -4.0),
        Point::new(4.0, 4.0),
        Point::new(-4.0, 4.0),
    ]);
    ScatterChartData::new(vec![
        ScatterDataSet::new(
            "circles",
            vec![DataPoint::new(10, 20.0), DataPoint::new(20, 40.0)],
        )
        .with_shape(MarkerShape::Circle)
        .with_circle_hole(Color::WHITE),
        ScatterDataSet::new(
            "crosses",
            vec![DataPoint::new(30, 60.0), DataPoint::new(40, 80.0)],
        )
        .with_shape(MarkerShape::Cross),
        ScatterDataSet::new("custom", vec![DataPoint::new(50, 50.0)])
            .with_shape(MarkerShape::Custom(arrow))
            .with_draw_values(false),
    ])
}

fn render(surface: &mut CairoSurface) {
    let data = sample_data();
    let handler =
        ViewPortHandler::new(Viewport::new(200, 120), Rect::new(0.0, 0.0, 200.0, 120.0))
            .expect("handler");
    let transformer = Transformer::identity();
    let formatter = NumberFormatter::default();
    let ctx = RenderContext {
        transforms: &transformer,
        bounds: &handler,
        default_formatter: &formatter,
        extents: ChartExtents::new(0.0, 100.0, 0.0, 100.0),
        phase: AnimationPhase::FULL,
    };
    ScatterRenderer::default().draw_frame(surface, &data, &ctx, &[Highlight::new(0, 20)]);
}

#[test]
fn cairo_surface_rejects_invalid_size() {
    let err = CairoSurface::offscreen(0, 120, Color::WHITE).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_surface_renders_markers_labels_and_highlight() {
    let mut surface = CairoSurface::offscreen(200, 120, Color::WHITE).expect("surface");
    render(&mut surface);

    let stats = surface.last_stats();
    assert_eq!(stats.failures, 0);
    assert_eq!(stats.ellipses_drawn, 4);
    assert_eq!(stats.paths_drawn, 1);
    assert_eq!(stats.texts_drawn, 4);
    // two crosses of two segments each, plus the crosshair
    assert_eq!(stats.segments_drawn, 6);
    assert!(surface.image().is_some());
    assert_eq!(surface.state_depth(), 0);
}

#[test]
fn cairo_surface_draws_on_external_context() {
    let image = ImageSurface::create(Format::ARgb32, 200, 120).expect("image");
    let context = Context::new(&image).expect("context");
    let mut surface = CairoSurface::new(context);
    surface.set_line_width(1.5);

    render(&mut surface);

    assert!(surface.image().is_none());
    assert_eq!(surface.last_stats().failures, 0);
    assert!((surface.context().line_width() - 1.5).abs() <= 1e-9);
}

#[test]
fn failed_cairo_save_still_pairs_with_its_restore() {
    let mut surface = CairoSurface::offscreen(40, 40, Color::WHITE).expect("surface");
    // restoring with nothing saved leaves the context in an error state
    assert!(surface.context().restore().is_err());

    surface.save_state();
    surface.set_fill_color(Color::rgb(1.0, 0.0, 0.0));
    surface.save_state();
    assert_eq!(surface.state_depth(), 2);

    surface.restore_state();
    assert_eq!(surface.state_depth(), 1);
    surface.restore_state();
    assert_eq!(surface.state_depth(), 0);
    assert_eq!(surface.last_stats().failures, 2);
}
