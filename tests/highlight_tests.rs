use scatter_rs::core::{
    AffineTransform, AnimationPhase, ChartExtents, DataPoint, HighlightStyle, NumberFormatter,
    Point, Rect, ScatterChartData, ScatterDataSet, Transformer, ViewPortHandler, Viewport,
};
use scatter_rs::render::{Color, DrawCommand, DrawingSurface, LineDash, RecordingSurface};
use scatter_rs::scatter::{
    Highlight, HighlightOutcome, HighlightSkip, RenderContext, ScatterRenderer,
};

fn chart(style: HighlightStyle) -> ScatterChartData {
    let data_set = ScatterDataSet::new(
        "highlighted",
        vec![
            DataPoint::new(0, 1.0),
            DataPoint::new(2, 5.0),
            DataPoint::new(3, f64::NAN),
            DataPoint::new(4, 10.0),
        ],
    )
    .with_highlight(style);
    ScatterChartData::new(vec![data_set])
}

fn highlight_with(
    data: &ScatterChartData,
    transformer: &Transformer,
    phase: AnimationPhase,
    highlights: &[Highlight],
) -> (Vec<HighlightOutcome>, RecordingSurface) {
    let bounds =
        ViewPortHandler::new(Viewport::new(100, 100), Rect::new(0.0, 0.0, 100.0, 100.0))
            .expect("valid viewport");
    let formatter = NumberFormatter::default();
    let ctx = RenderContext {
        transforms: transformer,
        bounds: &bounds,
        default_formatter: &formatter,
        extents: ChartExtents::new(0.0, 4.0, 0.0, 10.0),
        phase,
    };
    let mut surface = RecordingSurface::new();
    let outcomes =
        ScatterRenderer::default().draw_highlighted(&mut surface, data, &ctx, highlights);
    (outcomes, surface)
}

#[test]
fn crosshair_spans_chart_extents() {
    let data = chart(HighlightStyle::default());
    let (outcomes, surface) = highlight_with(
        &data,
        &Transformer::identity(),
        AnimationPhase::FULL,
        &[Highlight::new(0, 2)],
    );

    assert_eq!(outcomes, vec![HighlightOutcome::Drawn]);
    assert_eq!(
        surface.frame().segments(),
        vec![
            (Point::new(2.0, 10.0), Point::new(2.0, 0.0)),
            (Point::new(0.0, 5.0), Point::new(4.0, 5.0)),
        ]
    );
}

#[test]
fn crosshair_points_go_through_the_transformer() {
    let data = chart(HighlightStyle::default());
    let transformer = Transformer::new(AffineTransform::scale(10.0, -5.0).then(
        AffineTransform::translation(0.0, 60.0),
    ));
    let (_, surface) = highlight_with(
        &data,
        &transformer,
        AnimationPhase::FULL,
        &[Highlight::new(0, 4)],
    );

    let segments = surface.frame().segments();
    assert_eq!(segments[0], (Point::new(40.0, 10.0), Point::new(40.0, 60.0)));
    assert_eq!(segments[1], (Point::new(0.0, 10.0), Point::new(40.0, 10.0)));
}

#[test]
fn phase_y_moves_horizontal_line_only() {
    let data = chart(HighlightStyle::default());
    let (_, surface) = highlight_with(
        &data,
        &Transformer::identity(),
        AnimationPhase::new(1.0, 0.5),
        &[Highlight::new(0, 4)],
    );

    let segments = surface.frame().segments();
    assert_eq!(segments[0], (Point::new(4.0, 10.0), Point::new(4.0, 0.0)));
    assert_eq!(segments[1], (Point::new(0.0, 5.0), Point::new(4.0, 5.0)));
}

#[test]
fn indicator_flags_select_lines() {
    let data = chart(HighlightStyle::default().with_indicators(true, false));
    let (_, surface) = highlight_with(
        &data,
        &Transformer::identity(),
        AnimationPhase::FULL,
        &[Highlight::new(0, 2)],
    );
    assert_eq!(
        surface.frame().segments(),
        vec![(Point::new(0.0, 5.0), Point::new(4.0, 5.0))]
    );
}

#[test]
fn invalid_selections_are_skipped() {
    let data = chart(HighlightStyle::default());
    let (outcomes, surface) = highlight_with(
        &data,
        &Transformer::identity(),
        AnimationPhase::new(0.5, 1.0),
        &[
            Highlight::new(7, 2),
            Highlight::new(0, 1),
            Highlight::new(0, 4),
            Highlight::new(0, 2),
        ],
    );

    assert_eq!(
        outcomes,
        vec![
            HighlightOutcome::Skipped(HighlightSkip::MissingDataSet),
            HighlightOutcome::Skipped(HighlightSkip::MissingValue),
            HighlightOutcome::Skipped(HighlightSkip::NotRevealed),
            HighlightOutcome::Drawn,
        ]
    );
    assert_eq!(surface.frame().segments().len(), 2);
}

#[test]
fn nan_value_is_not_highlighted() {
    let data = chart(HighlightStyle::default());
    let (outcomes, surface) = highlight_with(
        &data,
        &Transformer::identity(),
        AnimationPhase::FULL,
        &[Highlight::new(0, 3)],
    );
    assert_eq!(
        outcomes,
        vec![HighlightOutcome::Skipped(HighlightSkip::MissingValue)]
    );
    assert!(surface.frame().is_empty());
}

#[test]
fn disabled_highlight_draws_nothing() {
    let style = HighlightStyle {
        enabled: false,
        ..HighlightStyle::default()
    };
    let data = chart(style);
    let (outcomes, surface) = highlight_with(
        &data,
        &Transformer::identity(),
        AnimationPhase::FULL,
        &[Highlight::new(0, 2)],
    );

    assert_eq!(
        outcomes,
        vec![HighlightOutcome::Skipped(HighlightSkip::HighlightDisabled)]
    );
    assert!(surface.frame().is_empty());
}

#[test]
fn stroke_style_follows_data_set_and_is_restored() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let dash = LineDash::new(0.0, &[4.0, 2.0]);
    let data = chart(
        HighlightStyle::default()
            .with_color(red)
            .with_line_width(2.0)
            .with_dash(Some(dash.clone())),
    );
    let (_, surface) = highlight_with(
        &data,
        &Transformer::identity(),
        AnimationPhase::FULL,
        &[Highlight::new(0, 2)],
    );

    for command in surface.commands() {
        match command {
            DrawCommand::StrokeSegment {
                color,
                width,
                dash: used,
                ..
            } => {
                assert_eq!(*color, red);
                assert_eq!(*width, 2.0);
                assert_eq!(used.as_ref(), Some(&dash));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
    assert_eq!(surface.depth(), 0);
    assert_eq!(surface.state().dash, None);
    assert_eq!(surface.state().stroke_color, Color::BLACK);
}

#[test]
fn missing_dash_resets_to_solid_line() {
    let data = chart(HighlightStyle::default());
    let bounds =
        ViewPortHandler::new(Viewport::new(100, 100), Rect::new(0.0, 0.0, 100.0, 100.0))
            .expect("valid viewport");
    let transformer = Transformer::identity();
    let formatter = NumberFormatter::default();
    let ctx = RenderContext {
        transforms: &transformer,
        bounds: &bounds,
        default_formatter: &formatter,
        extents: ChartExtents::new(0.0, 4.0, 0.0, 10.0),
        phase: AnimationPhase::FULL,
    };

    let mut surface = RecordingSurface::new();
    surface.set_line_dash(Some(&LineDash::new(0.0, &[1.0, 1.0])));
    ScatterRenderer::default().draw_highlighted(
        &mut surface,
        &data,
        &ctx,
        &[Highlight::new(0, 2)],
    );

    let segments: Vec<_> = surface
        .commands()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::StrokeSegment { dash, .. } => Some(dash.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(segments, vec![None, None]);
    assert!(surface.state().dash.is_some());
}

#[test]
fn infinite_value_is_not_highlighted() {
    let data = ScatterChartData::new(vec![ScatterDataSet::new(
        "spike",
        vec![
            DataPoint::new(0, 1.0),
            DataPoint::new(1, f64::INFINITY),
            DataPoint::new(2, 5.0),
        ],
    )]);
    let (outcomes, surface) = highlight_with(
        &data,
        &Transformer::identity(),
        AnimationPhase::FULL,
        &[Highlight::new(0, 1), Highlight::new(0, 2)],
    );

    assert_eq!(
        outcomes,
        vec![
            HighlightOutcome::Skipped(HighlightSkip::MissingValue),
            HighlightOutcome::Drawn,
        ]
    );
    assert_eq!(surface.frame().segments().len(), 2);
    assert!(surface.frame().validate().is_ok());
}
